use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::cli::Report;

/// A line of output produced by a solution.
///
/// In JSON mode every line is an object like `{"type": "answer", "data":
/// "(11, 31)"}`, which is what the workspace runner reads back.
#[derive(Debug, Deserialize, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum Line {
    /// Debug representation of the answer.
    Answer(String),
    /// Timings of a benchmarked solution.
    Report(Report),
}

pub(crate) struct Output<W> {
    out: W,
    json: bool,
}

impl<W> Output<W>
where
    W: Write,
{
    pub(crate) fn new(out: W, json: bool) -> Self {
        Self { out, json }
    }

    pub(crate) fn write(&mut self, line: &Line) -> io::Result<()> {
        if self.json {
            serde_json::to_writer(&mut self.out, line)?;
        } else {
            match line {
                Line::Answer(answer) => write!(self.out, "answer: {answer}")?,
                Line::Report(report) => write!(self.out, "{report}")?,
            }
        }

        writeln!(self.out)
    }
}
