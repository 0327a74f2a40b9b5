//! The two ways of grabbing a page, behind one interface.

mod connection;
mod socket;

use std::time::Duration;

pub use connection::*;
pub use socket::*;

use crate::{entity::FetchResult, error::Result};

/// A fetch step paired with the parser that understands its raw output.
pub trait Grabber {
    type Raw;

    /// Tag used in output file names and console banners.
    const NAME: &'static str;

    fn fetch(&self, target: &str) -> Result<Self::Raw>;

    fn parse(&self, raw: Self::Raw) -> Result<FetchResult>;
}

/// Object-safe face of a [`Grabber`], so the orchestrator can walk a list.
pub trait Strategy {
    fn name(&self) -> &'static str;

    fn grab(&self, target: &str) -> Result<FetchResult>;
}

impl<G: Grabber> Strategy for G {
    fn name(&self) -> &'static str {
        G::NAME
    }

    fn grab(&self, target: &str) -> Result<FetchResult> {
        let raw = self.fetch(target)?;
        self.parse(raw)
    }
}

/// Socket first, then connection; output order depends on it.
pub fn strategies(timeout: Option<Duration>) -> Vec<Box<dyn Strategy>> {
    let socket: Box<dyn Strategy> = Box::new(SocketGrabber::new(timeout));
    let connection: Box<dyn Strategy> = Box::new(ConnectionGrabber::new(timeout));
    vec![socket, connection]
}

/// Re-terminate every line with `\n`, the way a line reader rebuilds text.
/// `\r\n` endings collapse to `\n`; a last line without terminator gets one.
pub(crate) fn normalize_lines(text: &str) -> String {
    text.lines().fold(String::with_capacity(text.len() + 1), |mut out, line| {
        out.push_str(line);
        out.push('\n');
        out
    })
}
