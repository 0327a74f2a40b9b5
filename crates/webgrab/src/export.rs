//! Runs the strategies against one target and writes what they bring back.

use std::{
    fmt, fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    config::Config,
    entity::FetchResult,
    error::{Error, Result},
    grabber::Strategy,
};

pub const EXTENSION: &str = "txt";
pub const TROUBLE: &str = "Some troubles with grabbing web site";

/// What happened to one strategy.
#[derive(Debug)]
pub struct Outcome {
    pub strategy: &'static str,
    pub file: PathBuf,
    pub result: Result<()>,
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// `<out_dir>/<target>.<strategy>.txt`; the target is used verbatim.
pub fn output_file(out_dir: &Path, target: &str, strategy: &str) -> PathBuf {
    out_dir.join(format!("{target}.{strategy}.{EXTENSION}"))
}

/// Console output never fails a strategy; a broken stdout is only logged.
fn say<W: Write>(out: &mut W, msg: fmt::Arguments<'_>) {
    if let Err(e) = out.write_fmt(msg).and_then(|_| out.write_all(b"\n")) {
        log::warn!("console write failed: {e}");
    }
}

/// Print the headers, then replace `file` with the body.
pub fn export<W: Write>(res: &FetchResult, file: &Path, out: &mut W) -> Result<()> {
    say(out, format_args!("{}", res.headers()));
    fs::write(file, res.body())
        .map_err(|e| Error::write(format!("{}: {e}", file.display())))?;
    log::info!("wrote {} bytes to {}", res.body().len(), file.display());
    Ok(())
}

/// Try every strategy in order. A failure is printed with the fixed trouble
/// line; the remaining strategies still run unless `fail_fast` is set.
pub fn run_strategies<W: Write>(
    target: &str,
    strategies: &[Box<dyn Strategy>],
    config: &Config,
    out: &mut W,
) -> Vec<Outcome> {
    let mut outcomes = Vec::with_capacity(strategies.len());
    for strategy in strategies {
        let name = strategy.name();
        let file = output_file(&config.out_dir, target, name);

        say(out, format_args!("\n\nGrabbing website with {name}: \n"));
        let result = strategy
            .grab(target)
            .and_then(|res| export(&res, &file, out));

        if let Err(e) = &result {
            log::warn!("{name} failed for {target}: {e}");
            say(out, format_args!("{e}\n{TROUBLE}"));
        }

        let failed = result.is_err();
        outcomes.push(Outcome {
            strategy: name,
            file,
            result,
        });
        if failed && config.fail_fast {
            break;
        }
    }
    outcomes
}
