//! Builds every solution in the workspace and runs them one after another.
//!
//! Arguments after `--` are passed on to each solution, so
//! `cargo run -p lib -- -- --bench` benchmarks all of them.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{bail, ensure, Context, Result};
use lib::cli::Line;
use serde::Deserialize;

/// Package containing the solutions to run.
const PACKAGE: &str = "y2024";

/// A message from `cargo build --message-format json`.
#[derive(Deserialize)]
#[serde(tag = "reason", rename_all = "kebab-case")]
enum BuildMessage {
    CompilerArtifact {
        target: Target,
        executable: Option<PathBuf>,
    },
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
struct Target {
    name: String,
    kind: Vec<String>,
}

struct Solution {
    name: String,
    path: PathBuf,
}

fn main() -> Result<()> {
    let mut quiet = false;
    let mut it = std::env::args_os().skip(1);

    for arg in it.by_ref() {
        match arg.to_str() {
            Some("-q" | "--quiet") => {
                quiet = true;
            }
            Some("--") => {
                break;
            }
            _ => {
                bail!("unsupported argument: {}", arg.to_string_lossy());
            }
        }
    }

    let args = it.collect::<Vec<_>>();
    let mut failed = Vec::new();

    for solution in build()? {
        if !run(&solution, &args, quiet)? {
            failed.push(solution.name);
        }
    }

    if !failed.is_empty() {
        bail!("failed: {}", failed.join(", "));
    }

    Ok(())
}

/// Build all solutions, sorted by name.
fn build() -> Result<Vec<Solution>> {
    let mut child = Command::new("cargo")
        .args(["build", "--release", "-p", PACKAGE])
        .args(["--message-format", "json"])
        .stdout(Stdio::piped())
        .spawn()?;

    let stdout = child.stdout.take().context("missing stdout")?;
    let mut solutions = Vec::new();

    for message in serde_json::Deserializer::from_reader(stdout).into_iter::<BuildMessage>() {
        let BuildMessage::CompilerArtifact {
            target,
            executable: Some(path),
        } = message?
        else {
            continue;
        };

        if target.kind.iter().any(|kind| kind == "bin") {
            solutions.push(Solution {
                name: target.name,
                path,
            });
        }
    }

    let status = child.wait()?;
    ensure!(status.success(), "cargo build: {status}");

    solutions.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(solutions)
}

/// Run one solution, returns `false` if it failed.
fn run(solution: &Solution, args: &[OsString], quiet: bool) -> Result<bool> {
    let name = &solution.name;

    let mut child = Command::new(&solution.path)
        .args(args)
        .arg("--json")
        .stdout(Stdio::piped())
        .spawn()
        .with_context(|| format!("{name}: failed to start"))?;

    let stdout = child.stdout.take().context("missing stdout")?;

    for line in serde_json::Deserializer::from_reader(stdout).into_iter::<Line>() {
        match line? {
            Line::Answer(answer) => println!("{name}: {answer}"),
            Line::Report(report) if !quiet => println!("{name}: {report}"),
            Line::Report(..) => {}
        }
    }

    let status = child.wait()?;

    if !status.success() {
        println!("{name}: {status}");
    }

    Ok(status.success())
}
