use anyhow::Result;
use ci_scripts::{
    arguments::IncrementArguments,
    version::{VERSION_FILE, increment_file},
};
use clap::Parser;
use log::LevelFilter;
use std::path::Path;

fn main() -> Result<()> {
    let args = IncrementArguments::parse();
    pretty_env_logger::env_logger::builder()
        .filter_level(if args.verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .format_timestamp(None)
        .init();

    let path = Path::new(&args.path).join(VERSION_FILE);
    increment_file(&path)?;

    Ok(())
}
