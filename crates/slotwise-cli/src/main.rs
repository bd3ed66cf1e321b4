//! `slotwise` CLI — compute open appointment slots and validate bookings
//! from the command line.
//!
//! Busy events come from JSON files (or stdin), matching the contract that
//! an external calendar collaborator supplies them; the CLI itself performs
//! no calendar I/O.
//!
//! ## Usage
//!
//! ```sh
//! # Open slots for a week, busy events piped on stdin
//! cat busy.json | slotwise availability --from 2024-01-01 --to 2024-01-05
//!
//! # Same, from a file
//! slotwise availability --from 2024-01-01 --to 2024-01-05 --busy busy.json
//!
//! # Validate a booking request against the day's busy events
//! slotwise book --request request.json --busy busy.json
//!
//! # Override the scheduling policy
//! slotwise availability --from 2024-01-01 --to 2024-01-05 \
//!     --timezone Europe/London --open 9 --close 18 --slot 15
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::io::{self, Read};

use slotwise_engine::booking::{decide, BookingDecision, BookingRequest};
use slotwise_engine::compute_availability;
use slotwise_engine::config::{BusinessHours, DurationLimits, SchedulerConfig};
use slotwise_engine::event::BusyEvent;

#[derive(Parser)]
#[command(
    name = "slotwise",
    version,
    about = "Single-owner scheduling: availability and booking checks"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// IANA timezone all slot boundaries and labels are computed in
    #[arg(long, global = true, default_value = "America/New_York")]
    timezone: String,

    /// First bookable hour of the day (0-23)
    #[arg(long, global = true, default_value_t = 10)]
    open: u32,

    /// Hour the day closes (1-24)
    #[arg(long, global = true, default_value_t = 17)]
    close: u32,

    /// Generation grid unit in minutes (must divide 60)
    #[arg(long, global = true, default_value_t = 30)]
    slot: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute open slots for an inclusive date range
    Availability {
        /// First day of the window (YYYY-MM-DD)
        #[arg(long)]
        from: NaiveDate,
        /// Last day of the window, inclusive (YYYY-MM-DD)
        #[arg(long)]
        to: NaiveDate,
        /// Busy events JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        busy: Option<String>,
    },
    /// Validate a booking request against policy and busy events
    Book {
        /// Booking request JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        request: Option<String>,
        /// Busy events JSON file for the requested day (none if omitted)
        #[arg(short, long)]
        busy: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;

    match &cli.command {
        Commands::Availability { from, to, busy } => {
            let raw = read_input(busy.as_deref())?;
            let events: Vec<BusyEvent> =
                serde_json::from_str(&raw).context("Failed to parse busy events JSON")?;

            let result = compute_availability(*from, *to, &events, &config)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Book { request, busy } => {
            let raw = read_input(request.as_deref())?;
            let booking: BookingRequest =
                serde_json::from_str(&raw).context("Failed to parse booking request JSON")?;

            let events: Vec<BusyEvent> = match busy {
                Some(path) => {
                    let raw = std::fs::read_to_string(path)
                        .with_context(|| format!("Failed to read file: {}", path))?;
                    serde_json::from_str(&raw).context("Failed to parse busy events JSON")?
                }
                None => Vec::new(),
            };

            // Rejections are soft outcomes, not errors: both branches print
            // a payload and exit zero.
            let payload = match decide(&booking, &events, &config)? {
                BookingDecision::Accepted(accepted) => serde_json::json!({ "booked": accepted }),
                BookingDecision::Rejected(rejection) => serde_json::json!({
                    "rejected": rejection,
                    "message": rejection.to_string(),
                }),
            };
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }

    Ok(())
}

fn build_config(cli: &Cli) -> Result<SchedulerConfig> {
    let hours = BusinessHours::new(cli.open, cli.close)?;
    let booking = DurationLimits::new(15, 90)?;
    let config = SchedulerConfig::new(&cli.timezone, hours, cli.slot, booking)?;
    Ok(config)
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
