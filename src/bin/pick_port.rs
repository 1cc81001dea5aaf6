use clap::Parser;
use repokit::adapters::tcp::TcpProbe;
use repokit::cli::PickPortArgs;
use repokit::config::Config;
use repokit::logging;
use repokit::services::port_service::{PortPicker, SearchMode};
use std::io;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = PickPortArgs::parse();
    logging::init(args.verbose);

    let config = match Config::load(args.config.clone(), Path::new(".")) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            return ExitCode::FAILURE;
        }
    };

    let picker = PortPicker::new(TcpProbe::new(config.ports.host_from_cli(&args)));

    if let Some(port) = args.check {
        return match picker.check(port, &mut io::stdout()) {
            Ok(true) => ExitCode::SUCCESS,
            Ok(false) => ExitCode::FAILURE,
            Err(err) => {
                eprintln!("Error: {:#}", err);
                ExitCode::FAILURE
            }
        };
    }

    let range = match config.ports.range_from_cli(&args) {
        Ok(range) => range,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            return ExitCode::FAILURE;
        }
    };

    match picker.pick(&range, SearchMode::from_fallback_flag(args.fallback_scan)) {
        Ok(port) => {
            println!("{}", port);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
