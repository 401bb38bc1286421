use crate::command::Command;
use crate::error::Error;
use crate::error::Result;
use crate::roll;
use crate::roll::Execution;
use crate::roll::Expression;
use crate::roll::History;
use crate::roll::Kind;
use crate::roll::Outcome;

fn signed(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Represent an evaluator
pub(crate) struct Evaluator;

impl Evaluator {
    /// Keep a random subset of the rolls, never the highest ones on purpose
    fn eval_keep<S: roll::Source>(
        keep: u64,
        times: u64,
        rolls: &[u64],
        history: &mut Vec<History>,
        source: &mut S,
    ) -> Vec<u64> {
        let amount = usize::try_from(keep).unwrap_or(usize::MAX);
        let kept: Vec<u64> = source
            .sample(rolls.len(), amount)
            .into_iter()
            .filter_map(|index| rolls.get(index).copied())
            .collect();
        history.push(History::Keep {
            keep,
            times,
            kept: kept.clone(),
        });
        kept
    }

    /// Collapse to the extremal roll, `highest` wins when both are set
    fn eval_select(parsed: &Command, rolls: &[u64], history: &mut Vec<History>) -> Option<u64> {
        if parsed.highest {
            let max = rolls.iter().max().copied()?;
            history.push(History::Highest(max));
            Some(max)
        } else if parsed.lowest {
            let min = rolls.iter().min().copied()?;
            history.push(History::Lowest(min));
            Some(min)
        } else {
            None
        }
    }

    fn eval_outcome<S: roll::Source>(
        nth: usize,
        parsed: &Command,
        history: &mut Vec<History>,
        source: &mut S,
    ) -> (Outcome, Expression) {
        let mut rolls = Self::roll(parsed.times, parsed.faces, source);
        history.extend(
            rolls
                .iter()
                .enumerate()
                .map(|(i, &value)| History::Roll { nth: i + 1, value }),
        );
        let mut original_rolls = None;
        if let Some(keep) = parsed.keep.filter(|keep| *keep > 0) {
            let kept = Self::eval_keep(keep, parsed.times, &rolls, history, source);
            original_rolls = Some(std::mem::replace(&mut rolls, kept));
        }
        if let Some(selected) = Self::eval_select(parsed, &rolls, history) {
            let previous = std::mem::replace(&mut rolls, vec![selected]);
            original_rolls.get_or_insert(previous);
        }

        let mut total = rolls
            .iter()
            .fold(0i64, |acc, &value| acc.saturating_add(signed(value)));
        if parsed.times > 1 {
            history.push(History::Sum {
                rolls: rolls.clone(),
                total,
            });
        }
        let mut expression = Expression::with_rolls(&rolls);

        if parsed.multiplier > 1 {
            let result = total.saturating_mul(signed(parsed.multiplier));
            history.push(History::Multiplier {
                total,
                multiplier: parsed.multiplier,
                result,
            });
            expression.multiply(parsed.multiplier);
            total = result;
        }

        if parsed.modifier != 0 {
            let result = total.saturating_add(parsed.modifier);
            // only a bonus is narrated, a penalty is applied silently
            if parsed.modifier > 0 {
                history.push(History::Modifier {
                    total,
                    modifier: parsed.modifier,
                    result,
                });
                expression.modify(parsed.modifier);
            }
            total = result;
        }

        history.push(History::Outcome { nth, total });
        tracing::debug!(outcome = nth, ?rolls, total, "outcome evaluated");
        (
            Outcome {
                rolls,
                original_rolls,
                total,
            },
            expression,
        )
    }

    // compute every outcome of a command
    pub(crate) fn eval<S: roll::Source>(
        command: &str,
        parsed: &Command,
        source: &mut S,
    ) -> Result<Execution> {
        if parsed.faces < 1 {
            return Err(Error::Domain(format!(
                "can't roll a die with {} faces",
                parsed.faces
            )));
        }
        let mut outcomes = Vec::new();
        let mut expressions = Vec::new();
        let mut history = Vec::new();
        for n in 0..parsed.repeat {
            let nth = usize::try_from(n).unwrap_or(usize::MAX).saturating_add(1);
            let (outcome, expression) = Self::eval_outcome(nth, parsed, &mut history, source);
            outcomes.push(outcome);
            expressions.push(expression);
        }
        let total = roll::total(&outcomes);
        history.push(History::Result {
            command: command.to_owned(),
            total,
        });
        let text = format!(
            "The result of {} is {}",
            command,
            Kind::of(&expressions).render(total)
        );
        Ok(Execution::new(
            command.to_owned(),
            parsed.clone(),
            outcomes,
            text,
            history,
        ))
    }

    pub(crate) fn roll<S: roll::Source>(times: u64, faces: u64, source: &mut S) -> Vec<u64> {
        (0..times).map(|_| source.throw(faces)).collect()
    }
}
