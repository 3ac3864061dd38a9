//! memmeter - htop-style memory and swap meters in the terminal.
//!
//! Usage:
//!   memmeter                   # interactive dashboard, 1 second interval
//!   memmeter 5                 # interactive dashboard, 5 second interval
//!   memmeter --mode text       # start every meter in text mode
//!   memmeter --plain --count 3 # print three samples to stdout and exit

use tikv_jemallocator::Jemalloc;
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Local;
use clap::Parser;
use tracing::{Level, info, warn};
use tracing_subscriber::EnvFilter;

#[cfg(target_os = "linux")]
use memmeter::collector::RealFs;
#[cfg(not(target_os = "linux"))]
use memmeter::collector::mock::MockFs;
use memmeter::collector::{FileSystem, ProcMemory};
use memmeter::meter::{MemoryMeter, Meter, MeterMode, SwapMeter, mode};
use memmeter::tui::{App, AppState};

/// htop-style memory and swap meters.
#[derive(Parser)]
#[command(name = "memmeter", about = "Memory and swap meters")]
struct Args {
    /// Update interval in seconds.
    #[arg(value_name = "INTERVAL", default_value_t = 1)]
    interval: u64,

    /// Path to /proc filesystem.
    #[arg(long, default_value = "/proc")]
    proc_path: String,

    /// Initial display mode for every meter (default: each meter's own).
    #[arg(long, value_enum)]
    mode: Option<MeterMode>,

    /// Print meter lines to stdout instead of running the dashboard.
    #[arg(long)]
    plain: bool,

    /// Stop after N samples (plain mode only).
    #[arg(long, value_name = "N")]
    count: Option<u64>,

    /// Line width used for bar mode in plain output.
    #[arg(long, default_value_t = 60)]
    width: usize,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,

    /// Write logs to this file. The dashboard logs nowhere without it.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if args.interval == 0 {
        eprintln!("Error: interval must be at least 1 second");
        std::process::exit(1);
    }

    if args.count.is_some() && !args.plain {
        eprintln!("Error: --count can only be used with --plain");
        std::process::exit(1);
    }

    if args.plain || args.log_file.is_some() {
        if let Err(e) = init_logging(args.verbose, args.quiet, args.log_file.as_deref()) {
            eprintln!("Error opening log file: {}", e);
            std::process::exit(1);
        }
    }

    #[cfg(target_os = "linux")]
    let fs = RealFs::new();
    #[cfg(not(target_os = "linux"))]
    let fs = MockFs::typical_system();

    if !fs.exists(Path::new(&args.proc_path)) {
        warn!(path = %args.proc_path, "proc path does not exist, meters will read as empty");
    }

    let meters: Vec<Box<dyn Meter>> = vec![
        Box::new(MemoryMeter::new(ProcMemory::new(fs.clone(), &args.proc_path))),
        Box::new(SwapMeter::new(ProcMemory::new(fs, &args.proc_path))),
    ];
    let state = AppState::new(meters, args.mode);
    let interval = Duration::from_secs(args.interval);

    if args.plain {
        run_plain(state, interval, args.count, args.width);
    } else if let Err(e) = App::new(state).run(interval) {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}

/// Prints one block of meter lines per sample until Ctrl-C or `count`.
fn run_plain(mut state: AppState, interval: Duration, count: Option<u64>, width: usize) {
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    if let Err(e) = ctrlc::set_handler(move || {
        info!("Received shutdown signal");
        r.store(false, Ordering::SeqCst);
    }) {
        warn!("Failed to set Ctrl-C handler: {}", e);
    }

    info!(interval_secs = interval.as_secs(), "Starting plain output");

    while running.load(Ordering::SeqCst) {
        state.refresh();

        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        for row in &state.rows {
            let line = mode::render(row.meter.as_ref(), row.mode, width);
            println!("{} {}", stamp, line.text());
        }

        if count.is_some_and(|n| state.samples >= n) {
            break;
        }

        // Sleep with periodic checks for shutdown signal
        let sleep_interval = Duration::from_millis(100);
        let mut remaining = interval;
        while remaining > Duration::ZERO && running.load(Ordering::SeqCst) {
            let sleep_time = remaining.min(sleep_interval);
            std::thread::sleep(sleep_time);
            remaining = remaining.saturating_sub(sleep_time);
        }
    }

    info!(samples = state.samples, "Stopped");
}

fn init_logging(verbose: u8, quiet: bool, log_file: Option<&Path>) -> io::Result<()> {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("memmeter={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(io::stderr)
                .init();
        }
    }

    Ok(())
}
