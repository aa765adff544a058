use clap::error::ErrorKind;
use clap::Parser;
use log::debug;
use std::process::ExitCode;
use wol::dispatch::{self, Args, Error, USAGE};
use wol::netif::os::OsInterfaces;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("WARN"))
        .format_timestamp(Some(env_logger::fmt::TimestampPrecision::Millis))
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            println!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match dispatch::run(&args, &OsInterfaces) {
        Ok(sent) => {
            println!("{sent}");
            ExitCode::SUCCESS
        }
        Err(Error::Usage) => {
            println!("{USAGE}");
            ExitCode::FAILURE
        }
        Err(e) => {
            debug!("{:?}", e);
            println!("{e}");
            ExitCode::FAILURE
        }
    }
}
