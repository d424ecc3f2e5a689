//! The Strata walkthrough CLI.
//!
//! Provides the `strata` command with the following subcommands:
//!
//! - `strata list` - Exercise the array list (append, remove, insert, set,
//!   bulk growth and shrinking)
//! - `strata queue` - Exercise the linked queue (FIFO drain, empty reads,
//!   teardown with pending nodes)
//! - `strata all` - Run both walkthroughs
//!
//! Options:
//! - `-v` / `-vv` - Log resizes (debug) and queue teardown (trace) to stderr;
//!   `RUST_LOG` is honoured when no `-v` is given

mod render;
mod walkthrough;

use std::io::{self, Write};
use std::process;

use clap::{ArgAction, Parser, Subcommand};

use walkthrough::ListOptions;

#[derive(Parser)]
#[command(name = "strata", version, about = "Walkthroughs of the Strata containers")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Exercise the array list
    List {
        /// Number of integers appended in the bulk phase
        #[arg(long, default_value = "1000")]
        bulk: u32,

        /// Number of elements left after the bulk removal phase
        #[arg(long, default_value = "11")]
        keep: usize,

        /// Finish with an out-of-range removal (aborts the process)
        #[arg(long)]
        violate: bool,
    },
    /// Exercise the linked queue
    Queue,
    /// Run the list walkthrough, then the queue walkthrough
    All,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match cli.command {
        Commands::List {
            bulk,
            keep,
            violate,
        } => walkthrough::run_list(&mut out, &ListOptions { bulk, keep, violate }),
        Commands::Queue => walkthrough::run_queue(&mut out),
        Commands::All => run_all(&mut out),
    };

    if let Err(e) = result.and_then(|()| out.flush()) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run_all(out: &mut dyn Write) -> io::Result<()> {
    walkthrough::run_list(out, &ListOptions::default())?;
    writeln!(out)?;
    walkthrough::run_queue(out)
}

/// Route `log` records to stderr. Without `-v`, `RUST_LOG` decides and the
/// default is warnings only.
fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(log::LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
        }
    }
    builder.init();
}
