use itertools::Itertools;
use serde::Serialize;
use serde::Serializer;

/// Keep a single step of the history that led to the final result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum History {
    /// `nth` die of an outcome, counted from 1
    Roll { nth: usize, value: u64 },
    Keep { keep: u64, times: u64, kept: Vec<u64> },
    Highest(u64),
    Lowest(u64),
    Sum { rolls: Vec<u64>, total: i64 },
    Multiplier { total: i64, multiplier: u64, result: i64 },
    Modifier { total: i64, modifier: i64, result: i64 },
    /// Closing line of the `nth` outcome, counted from 1
    Outcome { nth: usize, total: i64 },
    Result { command: String, total: i64 },
}

impl std::fmt::Display for History {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            History::Roll { nth, value } => write!(f, "Roll #{nth}: {value}"),
            History::Keep { keep, times, kept } => write!(
                f,
                "Keeping {keep} of {times} rolls: {}",
                kept.iter().format(",")
            ),
            History::Highest(value) => write!(f, "Selecting the highest roll: {value}"),
            History::Lowest(value) => write!(f, "Selecting the lowest roll: {value}"),
            History::Sum { rolls, total } => write!(
                f,
                "Adding up all the rolls: {} = {total}",
                rolls.iter().format(" + ")
            ),
            History::Multiplier {
                total,
                multiplier,
                result,
            } => write!(
                f,
                "Applying the multiplier: {total} x {multiplier} = {result}"
            ),
            History::Modifier {
                total,
                modifier,
                result,
            } => write!(f, "Adding the modifier: {total} + {modifier} = {result}"),
            History::Outcome { nth, total } => {
                write!(f, "The total of outcome #{nth} is {total}")
            }
            History::Result { command, total } => {
                write!(f, "The result of {command} is {total}")
            }
        }
    }
}

/// Serialized as the rendered line
impl Serialize for History {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::History;

    #[test]
    fn keep_test() {
        let history = History::Keep {
            keep: 2,
            times: 4,
            kept: vec![6, 3],
        };
        assert_eq!("Keeping 2 of 4 rolls: 6,3", history.to_string());
    }

    #[test]
    fn modifier_test() {
        let history = History::Modifier {
            total: 8,
            modifier: 3,
            result: 11,
        };
        assert_eq!("Adding the modifier: 8 + 3 = 11", history.to_string());
    }
}
