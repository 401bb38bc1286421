pub mod history;
pub mod kind;

pub use history::History;
pub use kind::Expression;
pub use kind::Kind;

use crate::command::Command;
use serde::Serialize;

/// Result of one roll-and-reduce cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    /// Rolls that make up the total, after any reduction
    pub rolls: Vec<u64>,
    /// Every roll, kept only when a reduction discarded some
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_rolls: Option<Vec<u64>>,
    pub total: i64,
}

/// Keep a whole execution: the command, its outcomes and their narration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Execution {
    command: String,
    parsed: Command,
    outcomes: Vec<Outcome>,
    text: String,
    verbose: Vec<History>,
}

impl Execution {
    pub(crate) fn new(
        command: String,
        parsed: Command,
        outcomes: Vec<Outcome>,
        text: String,
        verbose: Vec<History>,
    ) -> Self {
        Execution {
            command,
            parsed,
            outcomes,
            text,
            verbose,
        }
    }

    /// Notation that was executed
    pub fn get_command(&self) -> &str {
        &self.command
    }

    pub fn get_parsed(&self) -> &Command {
        &self.parsed
    }

    pub fn get_outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Arithmetic summary, `The result of <command> is <expression> = <total>`
    pub fn get_text(&self) -> &str {
        &self.text
    }

    /// Narration steps in execution order
    pub fn get_history(&self) -> &[History] {
        &self.verbose
    }

    /// Narration rendered one line per step
    pub fn get_verbose(&self) -> Vec<String> {
        self.verbose.iter().map(ToString::to_string).collect()
    }

    /// Sum of every outcome total
    pub fn get_total(&self) -> i64 {
        total(&self.outcomes)
    }
}

impl std::fmt::Display for Execution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

pub(crate) fn total(outcomes: &[Outcome]) -> i64 {
    outcomes
        .iter()
        .fold(0i64, |acc, outcome| acc.saturating_add(outcome.total))
}

/// Interface for rolling dices
pub trait Source {
    /// One die roll, in `1..=sides`
    fn throw(&mut self, sides: u64) -> u64;

    /// Pick `amount` distinct indices out of `0..len`, in pick order.
    ///
    /// The default is a partial Fisher-Yates shuffle driven by [`Source::throw`].
    fn sample(&mut self, len: usize, amount: usize) -> Vec<usize> {
        let amount = amount.min(len);
        let mut indices: Vec<usize> = (0..len).collect();
        for i in 0..amount {
            let remaining = (len - i) as u64;
            let offset = self.throw(remaining).clamp(1, remaining) - 1;
            indices.swap(i, i + offset as usize);
        }
        indices.truncate(amount);
        indices
    }
}
