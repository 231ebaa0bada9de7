use core::fmt;
use std::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{Error, Result};

use crate::cli::error::error_context;
use crate::cli::{Line, Opts, Output, Report};
use crate::input::IStr;

/// Default warmup period in milliseconds.
const DEFAULT_WARMUP: u64 = 100;

/// Default time limit in milliseconds.
const DEFAULT_TIME_LIMIT: u64 = 400;

#[derive(Default)]
pub struct Bencher {
    samples: Vec<Duration>,
}

impl Bencher {
    /// Construct a new bencher.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bench the given solver and write its timing report.
    ///
    /// Every answer is passed to `check`, the first failing one stops the
    /// bench.
    pub(crate) fn iter<W, F, O, E, K>(
        &mut self,
        o: &mut Output<W>,
        opts: &Opts,
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
        let warmup = Duration::from_millis(opts.warmup.unwrap_or(DEFAULT_WARMUP));
        let time_limit = Duration::from_millis(opts.time_limit.unwrap_or(DEFAULT_TIME_LIMIT));

        let mut once = || -> Result<Duration> {
            let before = Instant::now();

            let value = match solve(input) {
                Ok(value) => value,
                Err(error) => return Err(error_context(path, input, error)),
            };

            let after = Instant::now();
            check(&value)?;
            let _ = black_box(value);
            Ok(after.duration_since(before))
        };

        if !warmup.is_zero() {
            log::info!("{path}: warming up ({warmup:?})");
            let start = Instant::now();

            while start.elapsed() < warmup {
                once()?;
            }
        }

        self.samples.clear();

        if let Some(count) = opts.count {
            let count = count.max(1);
            log::info!("{path}: running {count} time(s)");

            for _ in 0..count {
                self.samples.push(once()?);
            }
        } else {
            log::info!("{path}: running for {time_limit:?}");
            let start = Instant::now();

            loop {
                self.samples.push(once()?);

                if start.elapsed() >= time_limit {
                    break;
                }
            }
        }

        self.samples.sort();
        let report = Report::from_sorted(&self.samples);
        log::debug!("{path}: {report}");
        o.write(&Line::Report(report))?;
        Ok(())
    }
}
