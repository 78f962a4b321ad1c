//! `meetslot` CLI — find meeting slots between two calendars from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Busy calendars: find the gaps where both participants are free
//! meetslot find -i request.json
//!
//! # Read the request from stdin, write the slots to a file
//! cat request.json | meetslot find -o slots.json
//!
//! # Availability calendars: find where the two availabilities intersect
//! meetslot common -i request.json
//!
//! # Override the minimum meeting duration from the request
//! meetslot find -i request.json --duration 60
//! ```
//!
//! The request is a JSON object:
//!
//! ```json
//! {
//!   "calendar1": [["10:00", "10:40"], ["12:00", "12:30"]],
//!   "calendar2": [["11:20", "11:50"], ["12:00", "12:45"]],
//!   "bounds": ["09:00", "14:00"],
//!   "min_duration_minutes": 30
//! }
//! ```
//!
//! Output is a JSON array of `["HH:MM", "HH:MM"]` pairs.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use meetslot_core::{common_free_slots, find_available_slots, DEFAULT_MIN_DURATION_MINUTES};
use serde::Deserialize;
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "meetslot",
    version,
    about = "Free-time-slot finder for two calendars"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Treat the calendars as busy time and find the gaps where both
    /// participants are free
    Find {
        /// Input request file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Minimum meeting duration in minutes (overrides the request)
        #[arg(long)]
        duration: Option<i64>,
    },
    /// Treat the calendars as availability and find where they intersect
    Common {
        /// Input request file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Minimum meeting duration in minutes (overrides the request)
        #[arg(long)]
        duration: Option<i64>,
    },
}

/// A slot-finding request, as read from the input JSON.
#[derive(Deserialize)]
struct Request {
    calendar1: Vec<(String, String)>,
    calendar2: Vec<(String, String)>,
    bounds: (String, String),
    #[serde(default = "default_min_duration")]
    min_duration_minutes: i64,
}

fn default_min_duration() -> i64 {
    DEFAULT_MIN_DURATION_MINUTES
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Find {
            input,
            output,
            duration,
        } => {
            let request = read_request(input.as_deref())?;
            let min_duration = duration.unwrap_or(request.min_duration_minutes);
            let slots = find_available_slots(
                &request.calendar1,
                &request.calendar2,
                (request.bounds.0.clone(), request.bounds.1.clone()),
                min_duration,
            )
            .context("Failed to compute free slots")?;
            write_slots(output.as_deref(), &slots)?;
        }
        Commands::Common {
            input,
            output,
            duration,
        } => {
            let request = read_request(input.as_deref())?;
            let min_duration = duration.unwrap_or(request.min_duration_minutes);
            let slots = common_free_slots(
                &request.calendar1,
                &request.calendar2,
                (request.bounds.0.clone(), request.bounds.1.clone()),
                min_duration,
            )
            .context("Failed to compute common slots")?;
            write_slots(output.as_deref(), &slots)?;
        }
    }

    Ok(())
}

fn read_request(path: Option<&str>) -> Result<Request> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).context("Failed to parse request JSON")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_slots(path: Option<&str>, slots: &[(String, String)]) -> Result<()> {
    let rendered = serde_json::to_string_pretty(slots).context("Failed to render slots as JSON")?;
    match path {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", rendered);
        }
    }
    Ok(())
}
