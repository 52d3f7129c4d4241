//! # Sentence Tokenizer
//!
//! Splits a checksum-valid sentence body into its address and data fields.
//!
//! The address token `GPGGA` is separated into the talker id `GP` and the sentence
//! type `GGA`; the sentence type is the dispatch key, so `$GNGGA` and `$GPGGA` reach
//! the same decoder. Proprietary addresses (`PUBX`, `PGRME`) keep `P` as talker id
//! and the manufacturer code plus type as the prefix.

use nom::{
    AsChar, Parser,
    branch::alt,
    bytes::complete::{tag, take_while_m_n, take_while1},
    combinator::{all_consuming, verify},
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, IResult, parsing::FieldValue};

/// One tokenized sentence.
///
/// `fields` keeps the original order and keeps empty fields as empty strings: a field's
/// position is what gives it meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// Talker id, e.g. `GP`, `GN`, or `P` for proprietary sentences
    pub talker_id: &'a str,
    /// Sentence type used as the dispatch key, e.g. `GGA`
    pub prefix: &'a str,
    /// Data fields after the address token
    pub fields: Vec<&'a str>,
}

impl<'a> Sentence<'a> {
    /// Tokenizes a sentence body (the part between `$` and `*`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_engine::Sentence;
    ///
    /// let sentence = Sentence::tokenize("GNGSA,A,3,,,0.9").unwrap();
    /// assert_eq!(sentence.talker_id, "GN");
    /// assert_eq!(sentence.prefix, "GSA");
    /// assert_eq!(sentence.fields, ["A", "3", "", "", "0.9"]);
    ///
    /// assert!(Sentence::tokenize("GPG,1,2").is_err());
    /// ```
    pub fn tokenize(body: &'a str) -> Result<Self, Error> {
        let mut tokens = body.split(',');
        let token = tokens.next().unwrap_or_default();

        let (_, (talker_id, prefix)) =
            address(token).map_err(|_| Error::InvalidAddress(token.to_owned()))?;

        Ok(Self {
            talker_id,
            prefix,
            fields: tokens.collect(),
        })
    }

    /// The raw field at `index`, [`None`] past the end of the sentence.
    pub fn field(&self, index: usize) -> Option<&'a str> {
        self.fields.get(index).copied()
    }

    /// The field at `index` if it is present and not empty.
    pub fn required(&self, index: usize) -> Option<&'a str> {
        self.field(index).filter(|field| !field.is_empty())
    }

    /// The field at `index` parsed as `T`; missing, empty and unparsable all give [`None`].
    pub fn value<T: FieldValue>(&self, index: usize) -> Option<T> {
        self.required(index).and_then(T::parse_field)
    }

    /// Classifies the talker id.
    pub fn talker(&self) -> Talker {
        Talker::from_id(self.talker_id)
    }
}

fn address(i: &str) -> IResult<&str, (&str, &str)> {
    all_consuming(alt((
        (
            tag("P"),
            verify(take_while1(AsChar::is_alphanum), |code: &str| code.len() >= 3),
        ),
        (
            take_while_m_n(2, 2, AsChar::is_alphanum),
            verify(take_while1(AsChar::is_alphanum), |kind: &str| kind.len() >= 3),
        ),
    )))
    .parse(i)
}

/// Source of a sentence, derived from its talker id.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Talker {
    /// GP - GPS
    Gps,
    /// GL - GLONASS
    Glonass,
    /// GA - Galileo
    Galileo,
    /// GB, BD - BeiDou
    Beidou,
    /// GQ, QZ - QZSS
    Qzss,
    /// GI - NavIC
    Navic,
    /// GN - combined constellations
    MultiGnss,
    /// P - manufacturer specific
    Proprietary,
    /// Any other talker, e.g. `II` integrated instrumentation
    Other,
}

impl Talker {
    pub fn from_id(id: &str) -> Self {
        match id {
            "GP" => Talker::Gps,
            "GL" => Talker::Glonass,
            "GA" => Talker::Galileo,
            "GB" | "BD" => Talker::Beidou,
            "GQ" | "QZ" => Talker::Qzss,
            "GI" => Talker::Navic,
            "GN" => Talker::MultiGnss,
            "P" => Talker::Proprietary,
            _ => Talker::Other,
        }
    }
}
