use std::{path::PathBuf, time::Duration};

use anyhow::{Result, bail};

use crate::cmd::Args;

/// Run settings, everything except the target itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub out_dir: PathBuf,
    pub timeout: Option<Duration>,
    pub fail_fast: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            timeout: None,
            fail_fast: false,
        }
    }
}

impl Config {
    pub(crate) fn from_args(args: &Args) -> Result<Self> {
        let mut config = Config::default();
        if let Some(dir) = args.out_dir.as_deref().filter(|d| !d.is_empty()) {
            config.out_dir = PathBuf::from(dir);
        }
        config.timeout = timeout_from_secs(args.timeout)?;
        config.fail_fast = args.fail_fast.unwrap_or(false);
        Ok(config)
    }
}

fn timeout_from_secs(secs: Option<u64>) -> Result<Option<Duration>> {
    match secs {
        Some(0) => bail!("timeout must be at least 1 second"),
        Some(s) => Ok(Some(Duration::from_secs(s))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_timeout_by_default() {
        assert_eq!(Config::default().timeout, None);
        assert_eq!(timeout_from_secs(None).unwrap(), None);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(timeout_from_secs(Some(0)).is_err());
        assert_eq!(
            timeout_from_secs(Some(5)).unwrap(),
            Some(Duration::from_secs(5))
        );
    }
}
