use std::env;

mod cli;
mod config;
mod error;
mod model;
mod services;

use cli::Command;
use config::Config;
use services::{codic, format};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match cli::parse(env::args().skip(1)) {
        Command::Usage => println!("{}", cli::USAGE),
        Command::Run { mode, source } => {
            // Errors go to stdout and the process still exits 0; callers
            // scripting against godic must read the printed text.
            if let Err(e) = run(mode, &source) {
                println!("{e}");
            }
        }
    }
}

fn run(mode: cli::Mode, source: &str) -> Result<(), error::CodicError> {
    let config = Config::from_env()?;
    let client = codic::CodicClient::new(config)?;
    format::run(&client, mode, source)
}
