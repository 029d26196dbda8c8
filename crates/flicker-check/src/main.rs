//! Flicker Check - coverage assertions on a captured region trace.
//!
//! Loads a JSON region trace, runs one coverage assertion over every
//! snapshot, and prints the failure report when it does not hold.
//!
//! ```bash
//! flicker-check trace.json --covers-at-least 0,0,1080,1920 --tag END
//! ```
//!
//! Exit status: 0 when the assertion holds, 1 when it fails, 2 when the
//! trace cannot be loaded.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{ArgGroup, Parser};
use flicker_assert::{AssertionErrorBuilder, AssertionTag, FailureReport, RegionTraceSubject};
use flicker_region::Rect;
use flicker_trace::{RegionTrace, TraceFile};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "flicker-check", version, about = "Assert coverage on a region trace")]
#[command(group(
    ArgGroup::new("check")
        .required(true)
        .args(["covers_at_least", "covers_at_most", "covers_exactly"])
))]
struct Args {
    /// JSON region trace to check.
    trace: PathBuf,

    /// Every snapshot must show at least LEFT,TOP,RIGHT,BOTTOM.
    #[arg(long, value_name = "L,T,R,B", value_parser = parse_rect)]
    covers_at_least: Option<Rect>,

    /// No snapshot may show anything outside LEFT,TOP,RIGHT,BOTTOM.
    #[arg(long, value_name = "L,T,R,B", value_parser = parse_rect)]
    covers_at_most: Option<Rect>,

    /// Every snapshot must show exactly LEFT,TOP,RIGHT,BOTTOM.
    #[arg(long, value_name = "L,T,R,B", value_parser = parse_rect)]
    covers_exactly: Option<Rect>,

    /// Location reported on failure: START, END, ALL or a step name.
    #[arg(long, default_value = AssertionTag::ALL)]
    tag: String,
}

/// Parse `left,top,right,bottom`.
fn parse_rect(value: &str) -> Result<Rect, String> {
    let edges = value
        .split(',')
        .map(|part| part.trim().parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid rect {:?}: {}", value, e))?;

    match edges.as_slice() {
        &[left, top, right, bottom] => Ok(Rect::new(left, top, right, bottom)),
        _ => Err(format!(
            "invalid rect {:?}: expected LEFT,TOP,RIGHT,BOTTOM",
            value
        )),
    }
}

/// Run the selected assertion; `Some(report)` when it fails.
fn run(args: &Args) -> anyhow::Result<Option<FailureReport>> {
    let trace = RegionTrace::load(&args.trace)
        .with_context(|| format!("Failed to load trace {}", args.trace.display()))?;
    info!(entries = trace.len(), "Checking region trace");

    let mut subject = RegionTraceSubject::assert_that(trace, None);
    let result = if let Some(rect) = args.covers_at_least {
        subject.covers_at_least(rect).map(drop)
    } else if let Some(rect) = args.covers_at_most {
        subject.covers_at_most(rect).map(drop)
    } else if let Some(rect) = args.covers_exactly {
        subject.covers_exactly(rect).map(drop)
    } else {
        bail!("No check selected");
    };

    match result {
        Ok(()) => Ok(None),
        Err(err) => {
            let report = AssertionErrorBuilder::new()
                .from_error(err)
                .with_trace(TraceFile::new(&args.trace))
                .at_tag(&args.tag)
                .build()?;
            Ok(Some(report))
        }
    }
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(None) => {
            info!(trace = %args.trace.display(), "Assertion passed");
            ExitCode::SUCCESS
        }
        Ok(Some(report)) => {
            eprintln!("{}", report);
            ExitCode::from(1)
        }
        Err(e) => {
            error!("{:#}", e);
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
