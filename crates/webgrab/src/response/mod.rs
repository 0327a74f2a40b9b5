//! Structured view of the header block the socket path reads.

mod status_line;

use std::str::FromStr;

pub use status_line::*;

use crate::{common::Header, error::Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHeaders {
    status: StatusLine,
    headers: Vec<Header>,
}

impl RawHeaders {
    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    /// All values of `name`, compared case-insensitively, in order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.headers
            .iter()
            .filter(move |h| h.name().eq_ignore_ascii_case(name))
            .map(Header::value)
    }
}

impl FromStr for RawHeaders {
    type Err = crate::error::Error;

    fn from_str(block: &str) -> Result<Self> {
        let mut lines = block.lines();
        let status = StatusLine::from_str(lines.next().unwrap_or_default())?;

        // bad header lines are errors, not skipped
        let headers = lines
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(Header::from_str)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { status, headers })
    }
}
