use clap::Parser;
use repokit::adapters::rustfmt::RustfmtFormatter;
use repokit::cli::FixSyntaxArgs;
use repokit::config::Config;
use repokit::logging;
use repokit::services::syntax_service::SyntaxChecker;
use std::io;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    let args = FixSyntaxArgs::parse();
    logging::init(args.verbose);

    let config = match Config::load(args.config.clone(), &args.root) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            return ExitCode::FAILURE;
        }
    };

    let formatter = RustfmtFormatter::new(&config.syntax.formatter);
    let checker = SyntaxChecker::new(formatter, &args.root, config.syntax);

    let mut stdout = io::stdout().lock();
    match checker.run(&mut stdout) {
        Ok(summary) if summary.is_clean() => {
            info!(?summary, "All issues resolved");
            ExitCode::SUCCESS
        }
        Ok(summary) => {
            info!(?summary, "Unfixed syntax issues remain");
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("Syntax check aborted: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
