use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

mod app;
mod cli;
mod config;
mod core;
mod display;
mod gemini;
mod probe;
mod utils;

#[cfg(test)]
mod testing;

use crate::app::Application;
use crate::cli::Args;
use crate::config::{API_KEY_ENV, Config};

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "gemini_probe=debug"
    } else {
        "gemini_probe=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout belongs to the probe output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut stdout = io::stdout();
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => return display::write_error(&mut stdout, &err),
    };

    let app = Application::new(args, config);
    app.run(std::env::var(API_KEY_ENV).ok(), &mut stdout).await
}
