use std::str::FromStr;

use anyhow::Result;

use crate::{
    cmd::{Args, LogLevel},
    init::logger,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

pub fn help() -> String {
    format!(
        "version: {VERSION} | authors: {AUTHORS}\r\nusage: webgrab [options] <target>\r\n{}",
        Args::help()
    )
}

/// Parse the command line and set up logging. Returns the args and the
/// positional target, if one was given.
pub fn init() -> Result<(Args, Option<String>)> {
    let (mut args, mut remainder) = Args::parse()?;
    let level = args.log_level.take().unwrap_or(LogLevel::from_str("warn")?);
    logger::init(
        &level,
        args.colored.unwrap_or(false),
        args.log_file.as_deref(),
    )?;

    if !remainder.is_empty() {
        remainder.remove(0); // the executable path
    }
    log::debug!("{args:?}, {remainder:?}");

    if args.help.is_some_and(|h| h) {
        println!("{}", help());
        std::process::exit(0);
    }

    Ok((args, remainder.into_iter().next()))
}
