use std::{
    ops::{Deref, DerefMut},
    str::FromStr,
};

use sarge::{ArgumentType, prelude::*};

use crate::impl_deref_mut;

sarge! {
    #[derive(Debug)]
    pub Args,

    /// directory the `<target>.<strategy>.txt` files are written to
    #ok 'o' @WEBGRAB_OUT_DIR pub out_dir: String = String::from("."),

    /// seconds before connect/read gives up; blocks forever when unset
    #ok 't' pub timeout: u64,

    /// stop at the first failing strategy instead of trying the rest
    #ok 'f' pub fail_fast: bool = false,

    /// log level: off, error, warn, info, debug, trace, or v/vv/vvv
    #ok 'v' @WEBGRAB_LOG_LEVEL pub log_level: LogLevel = LogLevel("warn".into()),

    /// log with color?
    #ok pub colored: bool = false,

    /// also append logs to this file
    #ok pub log_file: String,

    /// help
    #ok 'h' pub help: bool = false,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLevel(String);

impl FromStr for LogLevel {
    type Err = core::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(normalize_level(s).into()))
    }
}

impl ArgumentType for LogLevel {
    type Error = ArgParseError;
    fn from_value(val: Option<&str>) -> sarge::ArgResult<Self> {
        let level = val.map(normalize_level).unwrap_or("info");
        Ok(LogLevel(level.into())).into()
    }
}

impl_deref_mut!(LogLevel(String));

fn normalize_level(s: &str) -> &'static str {
    const VERBOSE_PAT: char = 'v';

    match s.trim().to_ascii_lowercase().as_str() {
        "off" => "off",
        "err" | "error" => "error",
        "warn" | "warning" => "warn",
        "info" => "info",
        "debug" => "debug",
        "trace" => "trace",
        s => {
            let count = s
                .chars()
                .filter(|c| c.eq_ignore_ascii_case(&VERBOSE_PAT))
                .count();
            match count {
                0 => "off",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
