//! Command implementation for the station logger CLI
//!
//! Sets up logging, opens the device, runs the stream loop on a blocking
//! thread until the device closes or the run is cancelled, and prints a
//! summary.

use colored::*;
use indicatif::HumanDuration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::app::adapters::serial_device::open_device;
use crate::app::services::partition_writer::PartitionWriter;
use crate::app::services::stream_loop::{LoopStats, StreamLoop};
use crate::cli::args::Args;
use crate::config::LoggerConfig;
use crate::{Error, Result};

/// Outcome of a logger run
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub stats: LoopStats,
    pub partitions_opened: usize,
}

/// Main command runner for the station logger
pub async fn run(args: Args, cancellation_token: CancellationToken) -> Result<RunSummary> {
    setup_logging(&args)?;

    let config = args.to_config()?;
    let summary = run_logger(config, cancellation_token).await?;

    if !args.quiet {
        print_summary(&summary);
    }
    Ok(summary)
}

/// Open the device and drive the stream loop until it stops
pub async fn run_logger(
    config: LoggerConfig,
    cancellation_token: CancellationToken,
) -> Result<RunSummary> {
    let reader = open_device(&config.device)?;
    println!(
        "Reading from {} @ {} baud (Ctrl+C to stop) ...",
        config.device.path.bright_white().bold(),
        config.device.baud_rate
    );

    let writer = PartitionWriter::new(&config.output.directory);
    let echo = config.echo_raw_lines;

    let handle = tokio::task::spawn_blocking(move || -> Result<RunSummary> {
        let mut stream = StreamLoop::new(reader, writer).with_echo(echo);
        let stats = stream.run(&cancellation_token)?;
        Ok(RunSummary {
            stats,
            partitions_opened: stream.sink().partitions_opened(),
        })
    });

    let summary = handle
        .await
        .map_err(|e| Error::io("Stream loop task failed", std::io::Error::other(e)))??;

    info!(
        "Stream loop finished: {} records written",
        summary.stats.records_written
    );
    Ok(summary)
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("station_logger={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .map_err(|e| Error::configuration(format!("Failed to initialise logging: {}", e)))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .map_err(|e| Error::configuration(format!("Failed to initialise logging: {}", e)))?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Print a human-readable run summary
fn print_summary(summary: &RunSummary) {
    let stats = &summary.stats;

    println!("\n{}", "Logger stopped".bright_green().bold());
    println!("   Lines received: {}", stats.lines_received);
    println!(
        "   Records written: {}",
        stats.records_written.to_string().bright_white().bold()
    );
    println!("   Partitions opened: {}", summary.partitions_opened);
    println!("   Running time: {}", HumanDuration(stats.runtime));

    if stats.has_losses() {
        println!(
            "   Lines dropped: {}",
            stats.lines_dropped.to_string().bright_red().bold()
        );
        println!(
            "   Fragments discarded: {}",
            stats.fragments_discarded.to_string().bright_red().bold()
        );
        println!("   Success rate: {:.1}%", stats.success_rate());
    }
}
