use clap::Parser;
use log::{error, info};
use radclinic_core::cli::Cli;
use radclinic_core::parsing::format_date;
use radclinic_core::{Clock, FixedClock, Shell, SystemClock};
use std::io;
use std::process;

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    let result = match cli.as_of {
        Some(date) => {
            info!("Using fixed date {}", format_date(date));
            run(FixedClock(date))
        }
        None => run(SystemClock),
    };

    if let Err(e) = result {
        error!("Shell terminated: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn setup_logging(verbose: bool) {
    // Warnings only by default so log lines stay out of the operator's way
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Warn)
            .init();
    }
}

fn run<C: Clock>(clock: C) -> radclinic_core::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), clock);
    shell.run()
}
