use clap::Parser;
use log::info;
use snafu::ErrorCompat;

mod args;
mod medals;

fn main() {
    let parsed = args::Args::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if parsed.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
    info!("args: {:?}", parsed);

    if let Err(e) = medals::run_tally(&parsed) {
        eprintln!("An error occured {}", e);
        if let Some(bt) = ErrorCompat::backtrace(&e) {
            eprintln!("trace: {}", bt);
        }
        std::process::exit(1);
    }
}
