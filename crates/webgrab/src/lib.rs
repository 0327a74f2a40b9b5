//! Grab one web page twice: over a bare TCP socket with a hand-written
//! HTTP/1.0 request, and through a managed HTTP client. Each body lands in
//! `<target>.<strategy>.txt`, each header block is printed.

use std::io::{self, Write};

use anyhow::Result;

mod cmd;
mod common;
mod config;
mod entity;
mod export;
mod grabber;
mod init;
mod parser;
mod response;

pub mod error;

pub use common::{Header, HeaderMap};
pub use config::Config;
pub use entity::FetchResult;
pub use export::{Outcome, TROUBLE, export, output_file, run_strategies};
pub use grabber::{ConnectionGrabber, Grabber, HTTPS, SocketGrabber, Strategy, strategies};
pub use parser::{format_header_map, parse_connection, parse_raw, parse_raw_headers};
pub use response::{RawHeaders, StatusLine};

pub const USAGE: &str = "Please specify URL";

/// Entry point of the binary. Returns the process exit code.
pub fn run() -> Result<i32> {
    let (args, target) = init::cmd::init()?;
    let config = Config::from_args(&args)?;
    let code = grab(target.as_deref(), &config, &mut io::stdout().lock())?;
    if target.is_none() {
        println!("{}", init::cmd::help());
    }
    Ok(code)
}

/// Grab `target` with every strategy. Without a target only the usage line is
/// printed and nothing touches the network.
pub fn grab<W: Write>(target: Option<&str>, config: &Config, out: &mut W) -> Result<i32> {
    let Some(target) = target else {
        writeln!(out, "{USAGE}")?;
        return Ok(0);
    };

    let outcomes = run_strategies(target, &strategies(config.timeout), config, out);
    out.flush()?;

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    log::info!("{} of {} strategies succeeded", outcomes.len() - failed, outcomes.len());
    Ok(if failed == 0 { 0 } else { 1 })
}
