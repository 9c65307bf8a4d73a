use std::{env, process::ExitCode};

use hectorc::driver::{
    driver::run,
    options::{Options, USAGE},
};
use log::debug;

fn main() -> ExitCode {
    let options = match Options::from_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(error) => {
            eprintln!("{}", error);
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    let default_level = if options.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
    debug!("{:?}", options);

    let diagnostics = run(&options);
    for error in &diagnostics {
        eprintln!("{}", error);
    }

    if diagnostics.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
