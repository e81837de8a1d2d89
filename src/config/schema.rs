//! Schedule configuration schema

use crate::combinator::{Blend, Interpolator, Loop, LoopTail, Sequence};
use crate::error::Result;
use crate::schedule::{
    Constant, CosAnneal, Envelope, Exp, Inv, Linear, Poly, ScheduleExt, SharedSchedule, Sin, Step,
    Triangle,
};
use serde::{Deserialize, Serialize};

fn default_step_gamma() -> f64 {
    0.1
}

fn default_power() -> f64 {
    1.0
}

/// Serializable description of a schedule tree.
///
/// Variants are tagged by `kind`; combinators nest child configurations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScheduleConfig {
    Constant {
        value: f64,
    },
    Linear {
        start: f64,
        end: f64,
        steps: usize,
    },
    Step {
        #[serde(alias = "lambda")]
        initial: f64,
        #[serde(default = "default_step_gamma")]
        gamma: f64,
        step_sizes: Vec<usize>,
    },
    Exp {
        #[serde(alias = "lambda")]
        initial: f64,
        gamma: f64,
    },
    Poly {
        #[serde(alias = "lambda")]
        initial: f64,
        #[serde(default = "default_power")]
        power: f64,
        max_iter: usize,
    },
    Inv {
        #[serde(alias = "lambda")]
        initial: f64,
        gamma: f64,
        #[serde(default = "default_power")]
        power: f64,
    },
    CosAnneal {
        #[serde(alias = "lambda0")]
        low: f64,
        #[serde(alias = "lambda1")]
        high: f64,
        period: usize,
        /// Optional per-cycle envelope, e.g. for decaying warm restarts.
        #[serde(default, skip_serializing_if = "Envelope::is_constant")]
        envelope: Envelope,
    },
    Triangle {
        #[serde(alias = "lambda0")]
        low: f64,
        #[serde(alias = "lambda1")]
        high: f64,
        period: usize,
    },
    TriangleDecay2 {
        #[serde(alias = "lambda0")]
        low: f64,
        #[serde(alias = "lambda1")]
        high: f64,
        period: usize,
    },
    TriangleExp {
        #[serde(alias = "lambda0")]
        low: f64,
        #[serde(alias = "lambda1")]
        high: f64,
        period: usize,
        gamma: f64,
    },
    Sin {
        #[serde(alias = "lambda0")]
        low: f64,
        #[serde(alias = "lambda1")]
        high: f64,
        period: usize,
    },
    SinDecay2 {
        #[serde(alias = "lambda0")]
        low: f64,
        #[serde(alias = "lambda1")]
        high: f64,
        period: usize,
    },
    SinExp {
        #[serde(alias = "lambda0")]
        low: f64,
        #[serde(alias = "lambda1")]
        high: f64,
        period: usize,
        gamma: f64,
    },
    Sequence {
        segments: Vec<SegmentConfig>,
    },
    Loop {
        schedules: Vec<ScheduleConfig>,
        period: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        repeats: Option<usize>,
        #[serde(default)]
        tail: LoopTail,
    },
    Interpolator {
        from: Box<ScheduleConfig>,
        to: Box<ScheduleConfig>,
        start: usize,
        end: usize,
        #[serde(default)]
        blend: Blend,
    },
}

/// One `(schedule, length)` segment of a sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentConfig {
    pub length: usize,
    pub schedule: ScheduleConfig,
}

impl ScheduleConfig {
    /// Build the schedule tree described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns the first configuration error found, depth first.
    pub fn build(&self) -> Result<SharedSchedule> {
        let schedule = match self {
            Self::Constant { value } => Constant::new(*value).shared(),
            Self::Linear { start, end, steps } => Linear::new(*start, *end, *steps)?.shared(),
            Self::Step { initial, gamma, step_sizes } => {
                Step::new(*initial, *gamma, step_sizes.clone())?.shared()
            }
            Self::Exp { initial, gamma } => Exp::new(*initial, *gamma).shared(),
            Self::Poly { initial, power, max_iter } => {
                Poly::new(*initial, *power, *max_iter)?.shared()
            }
            Self::Inv { initial, gamma, power } => Inv::new(*initial, *gamma, *power).shared(),
            Self::CosAnneal { low, high, period, envelope } => {
                CosAnneal::with_envelope(*low, *high, *period, *envelope)?.shared()
            }
            Self::Triangle { low, high, period } => Triangle::new(*low, *high, *period)?.shared(),
            Self::TriangleDecay2 { low, high, period } => {
                Triangle::decay2(*low, *high, *period)?.shared()
            }
            Self::TriangleExp { low, high, period, gamma } => {
                Triangle::exp(*low, *high, *period, *gamma)?.shared()
            }
            Self::Sin { low, high, period } => Sin::new(*low, *high, *period)?.shared(),
            Self::SinDecay2 { low, high, period } => Sin::decay2(*low, *high, *period)?.shared(),
            Self::SinExp { low, high, period, gamma } => {
                Sin::exp(*low, *high, *period, *gamma)?.shared()
            }
            Self::Sequence { segments } => {
                let built = segments
                    .iter()
                    .map(|segment| Ok((segment.schedule.build()?, segment.length)))
                    .collect::<Result<Vec<_>>>()?;
                Sequence::new(built)?.shared()
            }
            Self::Loop { schedules, period, repeats, tail } => {
                let built = schedules.iter().map(Self::build).collect::<Result<Vec<_>>>()?;
                let looped = Loop::cycle(built, *period)?;
                match repeats {
                    Some(repeats) => looped.with_repeats(*repeats, *tail)?.shared(),
                    None => looped.shared(),
                }
            }
            Self::Interpolator { from, to, start, end, blend } => {
                Interpolator::new(from.build()?, to.build()?, *start, *end, *blend)?.shared()
            }
        };
        log::debug!("Built {} schedule", self.kind());
        Ok(schedule)
    }

    /// The `kind` tag of this configuration.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Constant { .. } => "constant",
            Self::Linear { .. } => "linear",
            Self::Step { .. } => "step",
            Self::Exp { .. } => "exp",
            Self::Poly { .. } => "poly",
            Self::Inv { .. } => "inv",
            Self::CosAnneal { .. } => "cos_anneal",
            Self::Triangle { .. } => "triangle",
            Self::TriangleDecay2 { .. } => "triangle_decay2",
            Self::TriangleExp { .. } => "triangle_exp",
            Self::Sin { .. } => "sin",
            Self::SinDecay2 { .. } => "sin_decay2",
            Self::SinExp { .. } => "sin_exp",
            Self::Sequence { .. } => "sequence",
            Self::Loop { .. } => "loop",
            Self::Interpolator { .. } => "interpolator",
        }
    }

    /// Whether this node composes other schedules.
    pub fn is_combinator(&self) -> bool {
        matches!(self, Self::Sequence { .. } | Self::Loop { .. } | Self::Interpolator { .. })
    }

    /// Render the configuration tree as indented text, one node per line.
    pub fn describe(&self) -> String {
        let mut lines = Vec::new();
        self.describe_into(0, None, &mut lines);
        lines.join("\n")
    }

    fn describe_into(&self, depth: usize, label: Option<String>, lines: &mut Vec<String>) {
        let prefix = match label {
            Some(label) => format!("{}{label}: ", "  ".repeat(depth)),
            None => "  ".repeat(depth),
        };
        lines.push(format!("{prefix}{}", self.summary()));

        match self {
            Self::Sequence { segments } => {
                for (i, segment) in segments.iter().enumerate() {
                    let label = format!("[{i}] x{}", segment.length);
                    segment.schedule.describe_into(depth + 1, Some(label), lines);
                }
            }
            Self::Loop { schedules, .. } => {
                for (i, schedule) in schedules.iter().enumerate() {
                    schedule.describe_into(depth + 1, Some(format!("[{i}]")), lines);
                }
            }
            Self::Interpolator { from, to, .. } => {
                from.describe_into(depth + 1, Some("from".to_string()), lines);
                to.describe_into(depth + 1, Some("to".to_string()), lines);
            }
            _ => {}
        }
    }

    fn summary(&self) -> String {
        let kind = self.kind();
        match self {
            Self::Constant { value } => format!("{kind}(value={value})"),
            Self::Linear { start, end, steps } => {
                format!("{kind}(start={start}, end={end}, steps={steps})")
            }
            Self::Step { initial, gamma, step_sizes } => {
                format!("{kind}(initial={initial}, gamma={gamma}, step_sizes={step_sizes:?})")
            }
            Self::Exp { initial, gamma } => format!("{kind}(initial={initial}, gamma={gamma})"),
            Self::Poly { initial, power, max_iter } => {
                format!("{kind}(initial={initial}, power={power}, max_iter={max_iter})")
            }
            Self::Inv { initial, gamma, power } => {
                format!("{kind}(initial={initial}, gamma={gamma}, power={power})")
            }
            Self::CosAnneal { low, high, period, envelope } if !envelope.is_constant() => {
                format!("{kind}(low={low}, high={high}, period={period}, envelope={envelope:?})")
            }
            Self::CosAnneal { low, high, period, .. }
            | Self::Triangle { low, high, period }
            | Self::TriangleDecay2 { low, high, period }
            | Self::Sin { low, high, period }
            | Self::SinDecay2 { low, high, period } => {
                format!("{kind}(low={low}, high={high}, period={period})")
            }
            Self::TriangleExp { low, high, period, gamma }
            | Self::SinExp { low, high, period, gamma } => {
                format!("{kind}(low={low}, high={high}, period={period}, gamma={gamma})")
            }
            Self::Sequence { segments } => format!("{kind}({} segments)", segments.len()),
            Self::Loop { schedules, period, repeats, tail } => match repeats {
                Some(repeats) => format!(
                    "{kind}({} schedules, period={period}, repeats={repeats}, tail={tail:?})",
                    schedules.len()
                ),
                None => format!("{kind}({} schedules, period={period})", schedules.len()),
            },
            Self::Interpolator { start, end, blend, .. } => {
                format!("{kind}(start={start}, end={end}, blend={blend:?})")
            }
        }
    }
}
