use crate::constant;
use crate::error::Field;
use crate::parser::Parser;
use serde::Serialize;

/// Structured form of a dice notation string.
///
/// Every field is always populated: whatever the notation leaves out takes
/// its default, so building a command from text cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Command {
    /// Dice rolled per outcome
    pub times: u64,
    /// Sides of each die
    pub faces: u64,
    /// Rolls retained after a random selection
    pub keep: Option<u64>,
    /// Collapse the rolls to their minimum
    pub lowest: bool,
    /// Collapse the rolls to their maximum, wins over `lowest`
    pub highest: bool,
    pub multiplier: u64,
    pub modifier: i64,
    /// Independent outcomes summed into the grand total
    pub repeat: u64,
}

impl Default for Command {
    fn default() -> Self {
        Command {
            times: constant::DEFAULT_TIMES,
            faces: constant::DEFAULT_FACES,
            keep: None,
            lowest: false,
            highest: false,
            multiplier: constant::DEFAULT_MULTIPLIER,
            modifier: constant::DEFAULT_MODIFIER,
            repeat: constant::DEFAULT_REPEAT,
        }
    }
}

impl Command {
    /// Extract a command from dice notation, unknown segments are ignored
    pub fn parse(input: &str) -> Self {
        Parser::extract(input)
    }

    /// Value of a throttled field, saturated into the signed range
    pub fn value(&self, field: Field) -> i64 {
        let unsigned = match field {
            Field::Times => self.times,
            Field::Faces => self.faces,
            Field::Multiplier => self.multiplier,
            Field::Repeat => self.repeat,
            Field::Modifier => return self.modifier,
        };
        i64::try_from(unsigned).unwrap_or(i64::MAX)
    }
}

impl From<&str> for Command {
    fn from(value: &str) -> Self {
        Command::parse(value)
    }
}

/// Canonical notation: `[repeat x(] times d faces [(k keep)] [-H] [-L] [x multiplier] [modifier] [)]`
impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let wrap = self.repeat != constant::DEFAULT_REPEAT;
        if wrap {
            write!(f, "{}x(", self.repeat)?;
        }
        write!(f, "{}d{}", self.times, self.faces)?;
        if let Some(keep) = self.keep {
            write!(f, "(k{keep})")?;
        }
        if self.highest {
            write!(f, "-H")?;
        }
        if self.lowest {
            write!(f, "-L")?;
        }
        if self.multiplier != constant::DEFAULT_MULTIPLIER {
            write!(f, "x{}", self.multiplier)?;
        }
        if self.modifier > 0 {
            write!(f, "+{}", self.modifier)?;
        } else if self.modifier < 0 {
            write!(f, "{}", self.modifier)?;
        }
        if wrap {
            write!(f, ")")?;
        }
        Ok(())
    }
}
