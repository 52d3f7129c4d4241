use std::io::{self, BufRead};

use nmea0183_engine::{ChecksumMode, Config, DecodeOutcome, Message, NmeaEngine};

fn print(line: &str, outcome: &DecodeOutcome) {
    match outcome {
        DecodeOutcome::Decoded(Message::PositionFix(fix)) => println!(
            "{:?} fix from {}: {:.6}, {:.6} valid={}",
            fix.source,
            fix.talker_id,
            fix.latitude.to_degrees(),
            fix.longitude.to_degrees(),
            fix.valid
        ),
        DecodeOutcome::Decoded(message) => println!("{message:?}"),
        DecodeOutcome::Pending => {}
        outcome => eprintln!("skipped {line:?}: {outcome:?}"),
    }
}

fn main() -> io::Result<()> {
    // some receivers drop the checksum on proprietary sentences
    let mut engine =
        NmeaEngine::with_config(Config::default().with_checksum(ChecksumMode::Optional));

    engine.on_satellites_in_view(|view| {
        let ids: Vec<u16> = view.satellites.iter().map(|sat| sat.id).collect();
        println!("{} satellites in view from {}: {ids:?}", view.total_satellites, view.talker_id);
    });

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let outcome = engine.process_line(&line);
        print(&line, &outcome);
    }

    Ok(())
}
