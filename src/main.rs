//! jingle: renders a melody to a WAV file and plays it.
//!
//! Prints a banner, waits for Enter, writes the WAV file, hands it to the
//! player and prints a closing banner. Only a failed render is fatal.

use std::io::{self, BufRead};

use jingle::cli::Cli;
use jingle::config::JingleConfig;
use jingle::error::{JingleError, Result};
use jingle::playback::player_for;
use jingle::session::Session;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e.code.description());
        eprintln!("  {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let mut config = JingleConfig::from_env();
    cli.apply(&mut config);
    if let Some(reason) = config.validate() {
        return Err(JingleError::invalid_parameters(reason));
    }

    let song = cli.song()?;
    let title = cli.title();
    let session = Session::from_config(&config, song);

    eprintln!("=== jingle: {} ===", title);
    eprintln!(
        "Notes: {} ({:.1}s)",
        session.song().len(),
        session.song().duration_ms() as f64 / 1000.0
    );
    eprintln!(
        "Format: {} Hz, {} channel(s), 16-bit, {} note lengths",
        config.stream.sample_rate,
        config.stream.channel_count,
        config.stream.sample_count_policy.as_str()
    );
    eprintln!("Output: {}", session.output_path().display());
    eprintln!("Player: {}", config.player);

    if cli.should_wait() {
        eprintln!("Press Enter to play...");
        wait_for_enter()?;
    }

    eprintln!("Playing '{}'...", title);
    let player = player_for(&config.player);
    let report = session.perform(player.as_deref())?;

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => log::warn!("Could not serialize report: {}", e),
        }
    }

    eprintln!(
        "Saved {:.2}s of audio to {}",
        report.duration_sec,
        report.path.display()
    );
    eprintln!("Song finished! Merry Christmas!");

    Ok(())
}

/// Blocks until a line (or EOF) arrives on stdin. The line itself is ignored.
fn wait_for_enter() -> Result<()> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(JingleError::input_failed)?;
    Ok(())
}
