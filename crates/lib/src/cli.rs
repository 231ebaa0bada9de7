//! CLI helpers.

mod bencher;
pub(crate) mod error;
mod output;
mod output_eq;
mod stdout_logger;

use core::fmt;
use core::time::Duration;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, ensure, Context, Error, Result};
use serde::{Deserialize, Serialize};

use crate::input::IStr;

use self::bencher::Bencher;
pub use self::error::CliError;
use self::output::Output;
pub use self::output::Line;
pub use self::output_eq::OutputEq;

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Run mode.
#[derive(Default)]
pub enum Mode {
    /// Default run mode.
    #[default]
    Default,
    /// Run as benchmark.
    Bench,
}

/// Input options.
#[derive(Default)]
pub struct Opts {
    /// Run as a benchmark.
    pub mode: Mode,
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON report.
    json: bool,
    /// Warmup period.
    warmup: Option<u64>,
    /// Bench period.
    time_limit: Option<u64>,
    /// Number of times to run benches.
    count: Option<usize>,
    /// Read input from a custom path.
    input: Option<PathBuf>,
}

impl Opts {
    /// Parse CLI options.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args_os().skip(1))?;

        if !opts.json {
            let level = if opts.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            };

            log::set_max_level(level);
            log::set_logger(&STDOUT_LOGGER)
                .map_err(|error| anyhow!("failed to set log: {error}"))?;
        }

        Ok(opts)
    }

    /// Parse options from the given arguments without touching global state.
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter().map(Into::<OsString>::into);

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--bench" => {
                    if !matches!(opts.mode, Mode::Default) {
                        bail!("duplicate `--bench` arguments");
                    }

                    opts.mode = Mode::Bench;
                }
                "--verbose" => {
                    opts.verbose = true;
                }
                "--warmup" => {
                    opts.warmup = Some(value(it.next(), "--warmup")?);
                }
                "--time-limit" => {
                    opts.time_limit = Some(value(it.next(), "--time-limit")?);
                }
                "--count" => {
                    opts.count = Some(value(it.next(), "--count")?);
                }
                "--input" => {
                    let path = it.next().context("missing argument to `--input`")?;
                    opts.input = Some(PathBuf::from(path));
                }
                "--json" => {
                    opts.json = true;
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        Ok(opts)
    }

    /// Custom input path passed through `--input`.
    pub fn input(&self) -> Option<&Path> {
        self.input.as_deref()
    }
}

/// Parse the numerical argument to an option.
fn value<T>(arg: Option<OsString>, name: &str) -> Result<T>
where
    T: core::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let arg = arg.with_context(|| anyhow!("missing argument to `{name}`"))?;
    let arg = arg
        .to_str()
        .with_context(|| anyhow!("missing string argument to `{name}`"))?;
    arg.parse()
        .with_context(|| anyhow!("bad argument to `{name}`"))
}

/// Run a solver over the given input according to `opts`.
///
/// `check` is called on every produced value and an error from it fails the
/// run. Expected answers only hold for the bundled input, so nothing is
/// checked when a custom one was passed through `--input`.
pub fn run<F, O, E, K>(opts: &Opts, path: &str, input: IStr, check: K, solve: F) -> Result<()>
where
    F: FnMut(IStr) -> Result<O, E>,
    O: fmt::Debug,
    Error: From<E>,
    K: Fn(&O) -> Result<()>,
{
    let check = |value: &O| -> Result<()> {
        if opts.input().is_some() {
            return Ok(());
        }

        check(value)
    };

    let stdout = std::io::stdout();
    let mut o = Output::new(stdout.lock(), opts.json);

    match opts.mode {
        Mode::Default => answer(&mut o, path, input, check, solve),
        Mode::Bench => Bencher::new().iter(&mut o, opts, path, input, check, solve),
    }
}

/// Solve once and write the answer before checking it, so that a wrong
/// answer is still shown.
fn answer<W, F, O, E, K>(
    o: &mut Output<W>,
    path: &str,
    input: IStr,
    check: K,
    mut solve: F,
) -> Result<()>
where
    W: Write,
    F: FnMut(IStr) -> Result<O, E>,
    O: fmt::Debug,
    Error: From<E>,
    K: Fn(&O) -> Result<()>,
{
    let value = match solve(input) {
        Ok(value) => value,
        Err(e) => return Err(error::error_context(path, input, e)),
    };

    o.write(&Line::Answer(format!("{value:?}")))?;
    check(&value)
}

/// Check that `value` equals `expected`.
pub fn expect<O, C>(value: &O, expected: &C) -> Result<()>
where
    O: fmt::Debug + OutputEq<C>,
    C: fmt::Debug,
{
    ensure!(
        value.output_eq(expected),
        "{value:?} (value) != {expected:?} (expected)"
    );

    Ok(())
}

/// Timing report for a benchmarked solver.
#[derive(Debug, Deserialize, Serialize)]
pub struct Report {
    pub p50: Duration,
    pub p95: Duration,
    pub p99: Duration,
    pub count: usize,
    pub min: Duration,
    pub max: Duration,
    pub avg: Duration,
}

impl Report {
    /// Build a report out of sorted samples.
    pub(crate) fn from_sorted(samples: &[Duration]) -> Self {
        let count = samples.len();
        let sum = samples.iter().sum::<Duration>();

        let avg = if count == 0 {
            Duration::default()
        } else {
            Duration::from_nanos(u64::try_from(sum.as_nanos() / count as u128).unwrap_or_default())
        };

        Self {
            p50: percentile(samples, 50),
            p95: percentile(samples, 95),
            p99: percentile(samples, 99),
            count,
            min: samples.first().copied().unwrap_or_default(),
            max: samples.last().copied().unwrap_or_default(),
            avg,
        }
    }
}

/// Sample at the given percentile of sorted samples.
fn percentile(samples: &[Duration], p: usize) -> Duration {
    let Some(last) = samples.len().checked_sub(1) else {
        return Duration::default();
    };

    samples.get(last * p / 100).copied().unwrap_or_default()
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report {
            p50,
            p95,
            p99,
            count,
            min,
            max,
            avg,
        } = self;

        write!(f, "count: {count}, min: {min:?}, max: {max:?}, avg: {avg:?}, 50th: {p50:?}, 95th: {p95:?}, 99th: {p99:?}")
    }
}
