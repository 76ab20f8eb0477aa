mod args;
mod etl;

use clap::Parser;
use election_extract::Extractor;
use log::{debug, info};
use snafu::ErrorCompat;

use crate::args::{Args, Command};
use crate::etl::diagnose::run_diagnostic;
use crate::etl::io_s3::download_direct;
use crate::etl::io_xls::CalamineLoader;
use crate::etl::*;

fn run(args: &Args) -> EtlResult<()> {
    let config = build_config(args)?;
    debug!("config: {:?}", config);

    match args.command.clone().unwrap_or(Command::Process) {
        Command::Process => {
            let report = run_pipeline(&config, &CalamineLoader, &Extractor::default())?;
            let available = report.availability.values().filter(|a| **a).count();
            println!("Processing complete!");
            println!(
                "Files available: {} of {}",
                available,
                report.availability.len()
            );
            println!("Elections processed: {}", report.datasets.len());
            for (ds, out) in report.datasets.iter().zip(report.outputs.iter()) {
                println!("  {}: {} parties -> {}", ds.year(), ds.len(), out.display());
            }
            if let Some(p) = report.combined {
                println!("Combined results: {}", p.display());
            }
        }
        Command::Download => {
            let downloaded = download_direct(&config)?;
            info!(
                "{} of {} files downloaded to {}",
                downloaded.len(),
                config.years.len(),
                config.raw_data_dir.display()
            );
        }
        Command::Diagnose => {
            run_diagnostic(&config, &CalamineLoader)?;
            println!("Quick test complete: bucket listing, download and Excel reading are working");
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    debug!("args: {:?}", args);

    if let Err(e) = run(&args) {
        eprintln!("An error occured: {}", describe_error(&e));
        if let Some(bt) = ErrorCompat::backtrace(&e) {
            eprintln!("trace: {}", bt);
        }
        std::process::exit(1);
    }
}
