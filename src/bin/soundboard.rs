//! Interactive soundboard for exercising the audio manager against the real
//! rodio backend.
//!
//! Reads an optional clip-table JSON path from the first argument, then takes
//! transport commands on stdin.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Context;

use game_audio::{AppResult, AudioManager, ClipTable, PlayOptions, RodioBackend};

fn initialize_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

/// Slider values must be plain finite numbers; anything else leaves the
/// slider where it is.
fn parse_level(arg: &str) -> Option<f32> {
    arg.parse::<f32>().ok().filter(|v| v.is_finite())
}

fn print_help() {
    println!("Commands:");
    println!("  play <key> [volume]   start a clip (optional one-call volume 0-1)");
    println!("  stop <key>            stop and rewind a clip");
    println!("  pause <key>           pause a clip, keeping its position");
    println!("  resume <key>          continue a paused clip");
    println!("  stopmusic             stop the music bus");
    println!("  stopall               stop everything");
    println!("  toggle                flip the global enable switch");
    println!("  master|music|sfx <v>  set a volume slider");
    println!("  status                show mixer state");
    println!("  quit");
}

fn main() -> AppResult<()> {
    initialize_tracing();

    println!("=====================================");
    println!("  game-audio soundboard");
    println!("=====================================\n");

    let table = match std::env::args().nth(1) {
        Some(path) => ClipTable::load_or_default(Path::new(&path)),
        None => ClipTable::default(),
    };
    for clip in &table.clips {
        println!("  {:<16} [{}] {}", clip.key, clip.bus, clip.source.display());
    }
    println!();

    let backend = RodioBackend::new().context("no audio output device")?;
    let mut audio = AudioManager::new(backend, table);
    audio.initialize();

    print_help();
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let arg = parts.next();

        match (command, arg) {
            ("play", Some(key)) => match parts.next().and_then(|v| v.parse::<f32>().ok()) {
                Some(volume) => {
                    audio.play_with(key, PlayOptions::default().with_volume(volume))
                }
                None => audio.play(key),
            },
            ("stop", Some(key)) => audio.stop(key),
            ("pause", Some(key)) => audio.pause(key),
            ("resume", Some(key)) => audio.resume(key),
            ("stopmusic", _) => audio.stop_all_music(),
            ("stopall", _) => audio.stop_all(),
            ("toggle", _) => audio.toggle_audio(),
            (slider @ ("master" | "music" | "sfx"), Some(v)) => match parse_level(v) {
                Some(level) => match slider {
                    "master" => audio.set_master_volume(level),
                    "music" => audio.set_music_volume(level),
                    _ => audio.set_sfx_volume(level),
                },
                None => println!("Bad value '{}', slider unchanged", v),
            },
            ("status", _) => {
                println!(
                    "enabled={} master={:.2} music={:.2} sfx={:.2} clips={}",
                    audio.is_audio_enabled(),
                    audio.master_volume(),
                    audio.music_volume(),
                    audio.sfx_volume(),
                    audio.loaded_count()
                );
            }
            ("help", _) => print_help(),
            ("quit" | "exit", _) => break,
            _ => println!("Unrecognized command, try 'help'"),
        }
    }

    audio.cleanup();
    Ok(())
}
