mod app;
mod collector;
mod error;
mod interface;
mod net;
mod parser;
mod platform;
mod presenter;

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use log::{debug, LevelFilter};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Reports addresses, netmasks, MAC addresses and default gateways of local interfaces.
#[derive(Parser, Debug)]
#[command(version, about)]
struct CliArgs {
    /// Log more details to stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, default_value_t = false)]
    no_color: bool,
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Logger setup
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .build();
    // a logger already installed is fine; output just stays with it
    TermLogger::init(
        log_level(args.verbose),
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .ok();

    presenter::init_styling(!args.no_color && io::stdout().is_terminal());

    match app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("{err:?}");
            eprintln!("Unable to retrieve network information: {err}");
            ExitCode::FAILURE
        }
    }
}
