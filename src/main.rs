use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::Local;
use tracing_subscriber::EnvFilter;

use moodlog::config::AppConfig;
use moodlog::entry::{parse_timestamp, MoodEntry};
use moodlog::render::render_weekly_report;
use moodlog::{predict_next_mood, snapshot, weekly_mood_data};

const USAGE: &str = "usage: moodlog [entries.json] [--now \"15 Jun 2024, 09:30 AM\"] [--predict]";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,moodlog=debug")),
        )
        .init();

    if let Err(error) = run() {
        eprintln!("moodlog failed: {error:#}");
        std::process::exit(1);
    }
}

struct CliArgs {
    entries_path: Option<PathBuf>,
    now_override: Option<String>,
    predict: bool,
}

fn parse_args() -> Result<CliArgs> {
    let mut parsed = CliArgs {
        entries_path: None,
        now_override: None,
        predict: false,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            "--predict" => parsed.predict = true,
            "--now" => {
                let value = args.next().context("--now expects a timestamp argument")?;
                parsed.now_override = Some(value);
            }
            flag if flag.starts_with('-') => bail!("unknown flag {flag}\n{USAGE}"),
            path => {
                if parsed.entries_path.is_some() {
                    bail!("more than one snapshot path given\n{USAGE}");
                }
                parsed.entries_path = Some(PathBuf::from(path));
            }
        }
    }

    Ok(parsed)
}

fn run() -> Result<()> {
    let args = parse_args()?;
    let config = AppConfig::load();
    tracing::debug!("theme preference: {:?}", config.theme);

    let path = args
        .entries_path
        .or(config.entries_path)
        .with_context(|| format!("no entries snapshot given and none configured\n{USAGE}"))?;

    let now = match args.now_override {
        Some(raw) => parse_timestamp(&raw)
            .context("--now must match the entry timestamp pattern, e.g. \"15 Jun 2024, 09:30 AM\"")?,
        None => Local::now().naive_local(),
    };

    let entries = snapshot::load_entries(&path)?;
    tracing::info!("computing weekly report over {} entries", entries.len());

    let data = weekly_mood_data(&entries, now);
    print!("{}", render_weekly_report(&data));

    if args.predict {
        let moods = moods_in_log_order(&entries);
        let prediction = predict_next_mood(&moods);
        println!(
            "\nNext mood guess: {} (confidence {:.0}%, trend {})",
            prediction.predicted,
            prediction.confidence * 100.0,
            prediction.trend,
        );
    }

    Ok(())
}

/// Mood labels ordered oldest to newest; ids derive from creation time, so id
/// order is log order.
fn moods_in_log_order(entries: &[MoodEntry]) -> Vec<String> {
    let mut sorted: Vec<&MoodEntry> = entries.iter().collect();
    sorted.sort_by_key(|entry| entry.id);
    sorted.into_iter().map(|entry| entry.mood.clone()).collect()
}
