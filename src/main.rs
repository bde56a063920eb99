use std::io;

use clap::Parser as _;
use mass_zipper::{archive::ZipArchiver, cli::Cli, error::ZipperError, handle_invocation};

fn main() -> Result<(), ZipperError> {
    _ = pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_secs()
        .parse_default_env()
        .try_init();

    let invocation = Cli::parse().into_invocation();
    handle_invocation(invocation, &ZipArchiver, io::stdout().lock())
}
