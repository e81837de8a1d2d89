//! Eval command implementation

use crate::cli::args::{EvalArgs, OutputFormat};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::load_schedule;
use crate::error::ScheduleError;
use crate::schedule::Schedule;
use crate::stream::to_sequence;
use serde::Serialize;

/// One evaluated iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValuePoint {
    pub t: usize,
    pub value: f64,
}

/// Upper bound on the number of iterations a single eval may materialize.
pub const MAX_EVAL_STEPS: usize = 1_000_000;

/// Evaluate `steps` consecutive iterations of `schedule` starting at `start`.
///
/// Indices saturate at `usize::MAX`, matching the stream cursor.
pub fn evaluate<S: Schedule>(
    schedule: S,
    start: usize,
    steps: usize,
) -> crate::Result<Vec<ValuePoint>> {
    if steps > MAX_EVAL_STEPS {
        return Err(ScheduleError::TooManySteps { steps, max: MAX_EVAL_STEPS });
    }
    let stream = to_sequence(schedule, start)?;
    Ok(stream
        .take(steps)
        .enumerate()
        .map(|(i, value)| ValuePoint { t: start.saturating_add(i), value })
        .collect())
}

/// Render evaluated points in the requested format.
pub fn render_values(points: &[ValuePoint], format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Text => Ok(points
            .iter()
            .map(|p| format!("{:>8}  {}", p.t, p.value))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Csv => {
            let mut lines = vec!["t,value".to_string()];
            lines.extend(points.iter().map(|p| format!("{},{}", p.t, p.value)));
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => serde_json::to_string_pretty(points)
            .map_err(|e| format!("JSON serialization error: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(points).map_err(|e| format!("YAML serialization error: {e}"))
        }
    }
}

pub fn run_eval(args: EvalArgs, level: LogLevel) -> Result<(), String> {
    let schedule = load_schedule(&args.config).map_err(|e| format!("Config error: {e}"))?;
    let points =
        evaluate(&schedule, args.start, args.steps).map_err(|e| format!("Eval error: {e}"))?;

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Evaluating {} for t = {}..{}",
            args.config.display(),
            args.start,
            args.start.saturating_add(args.steps)
        ),
    );

    let rendered = render_values(&points, args.format)?;
    if level != LogLevel::Quiet {
        println!("{rendered}");
    }
    Ok(())
}
