use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    version: String,
    code: u16,
    reason: String,
}

impl StatusLine {
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }
}

impl FromStr for StatusLine {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let triplet: Vec<&str> = s.trim().splitn(3, ' ').map(str::trim).collect();
        if triplet.len() < 2 || !triplet[0].starts_with("HTTP/") {
            return Err(Error::parse(format!("status line not complete: {s}")));
        }
        let code = triplet[1]
            .parse()
            .map_err(|e| Error::parse(format!("bad status code {:?}: {e}", triplet[1])))?;

        Ok(Self {
            version: triplet[0].into(),
            code,
            reason: triplet.get(2).copied().unwrap_or_default().into(),
        })
    }
}
