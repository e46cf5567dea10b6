use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use sticks_rs::config::Args;
use sticks_rs::{session, utils};

fn main() -> Result<()> {
    let args = Args::parse();
    utils::log(args.log_level, args.log_file.as_deref())?;
    println!("{}", "Welcome to the Game of Sticks!".bold());
    let settings = args.settings()?;
    log::debug!("{:?}", settings);
    session::run(&settings)
}
