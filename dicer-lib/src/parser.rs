use crate::command::Command;
use pest::iterators::Pair;
use pest::Parser as _;
use pest_derive::Parser;

/// Pest parser
#[derive(Parser)]
#[grammar = "notation.pest"]
pub struct Parser;

/// Fields seen so far while scanning, the first positive value of each wins
#[derive(Default)]
struct Fields {
    times: Option<u64>,
    faces: Option<u64>,
    keep: Option<u64>,
    lowest: bool,
    highest: bool,
    multiplier: Option<u64>,
    modifier: Option<i64>,
    repeat: Option<u64>,
}

fn first<T: Default + PartialOrd>(slot: &mut Option<T>, value: Option<T>) {
    if slot.is_none() {
        *slot = value.filter(|value| *value > T::default());
    }
}

impl Parser {
    /// Scan the notation once from left to right and build a command.
    ///
    /// Tokens are tried in this order at every position: keep clause,
    /// `-H`, `-L`, dice, multiplier, modifier. A repeat prefix is only
    /// recognised at the very start and a repeat suffix at the very end.
    /// Zero values are discarded, so `0d6` keeps the default amount of dice.
    pub fn extract(input: &str) -> Command {
        let notation = match Self::parse(Rule::notation, input) {
            Ok(mut pairs) => match pairs.next() {
                Some(notation) => notation,
                None => return Command::default(),
            },
            Err(error) => {
                tracing::warn!(%error, "unmatched notation, using defaults");
                return Command::default();
            }
        };
        let mut fields = Fields::default();
        for token in notation.into_inner() {
            match token.as_rule() {
                Rule::repeat_open | Rule::repeat_close => {
                    first(&mut fields.repeat, Self::extract_number(token))
                }
                Rule::roll => {
                    for inner in token.into_inner() {
                        let value = inner.as_str().parse::<u64>().ok();
                        match inner.as_rule() {
                            Rule::times => first(&mut fields.times, value),
                            Rule::faces => first(&mut fields.faces, value),
                            _ => (),
                        }
                    }
                }
                Rule::keep => first(&mut fields.keep, Self::extract_number(token)),
                Rule::highest => fields.highest = true,
                Rule::lowest => fields.lowest = true,
                Rule::multiplier => first(&mut fields.multiplier, Self::extract_number(token)),
                Rule::modifier => {
                    // signed, so only zero is rejected
                    if fields.modifier.is_none() {
                        fields.modifier = token
                            .as_str()
                            .parse::<i64>()
                            .ok()
                            .filter(|value| *value != 0);
                    }
                }
                _ => (),
            }
        }
        let defaults = Command::default();
        Command {
            times: fields.times.unwrap_or(defaults.times),
            faces: fields.faces.unwrap_or(defaults.faces),
            keep: fields.keep,
            lowest: fields.lowest,
            highest: fields.highest,
            multiplier: fields.multiplier.unwrap_or(defaults.multiplier),
            modifier: fields.modifier.unwrap_or(defaults.modifier),
            repeat: fields.repeat.unwrap_or(defaults.repeat),
        }
    }

    fn extract_number(pair: Pair<Rule>) -> Option<u64> {
        pair.into_inner()
            .find(|inner| inner.as_rule() == Rule::number)
            .and_then(|number| number.as_str().parse::<u64>().ok())
    }
}

#[cfg(test)]
mod tests {
    use crate::command::Command;

    #[test]
    fn simple_test() {
        assert_eq!(
            Command {
                times: 3,
                faces: 6,
                keep: None,
                lowest: false,
                highest: false,
                multiplier: 1,
                modifier: 0,
                repeat: 1,
            },
            Command::parse("3d6")
        );
    }

    #[test]
    fn repeat_prefix_lowest_test() {
        let command = Command::parse("2x(4d6-L)");
        assert_eq!(2, command.repeat);
        assert_eq!(4, command.times);
        assert_eq!(6, command.faces);
        assert!(command.lowest);
        assert!(!command.highest);
        assert_eq!(None, command.keep);
        assert_eq!(1, command.multiplier);
        assert_eq!(0, command.modifier);
    }

    #[test]
    fn repeat_suffix_test() {
        let command = Command::parse("(4d6+1)x3");
        assert_eq!(3, command.repeat);
        assert_eq!(4, command.times);
        assert_eq!(1, command.modifier);
        assert_eq!(1, command.multiplier);
    }

    #[test]
    fn repeat_only_at_edges_test() {
        // a closing `)x3` in the middle is a plain multiplier
        let command = Command::parse("(d6)x3+2");
        assert_eq!(1, command.repeat);
        assert_eq!(3, command.multiplier);
        assert_eq!(2, command.modifier);

        let command = Command::parse("d6 2x(d8)");
        assert_eq!(1, command.repeat);
    }

    #[test]
    fn keep_multiplier_modifier_test() {
        let command = Command::parse("4d6(k3)x2+5");
        assert_eq!(Some(3), command.keep);
        assert_eq!(2, command.multiplier);
        assert_eq!(5, command.modifier);
    }

    #[test]
    fn keep_clause_is_not_a_modifier_test() {
        let command = Command::parse("2x(4d6(k3))");
        assert_eq!(Some(3), command.keep);
        assert_eq!(0, command.modifier);
        assert_eq!(2, command.repeat);
    }

    #[test]
    fn negative_modifier_test() {
        assert_eq!(-3, Command::parse("d20-3").modifier);
        assert_eq!(-3, Command::parse("d20-L-3").modifier);
    }

    #[test]
    fn multiplier_does_not_take_faces_test() {
        let command = Command::parse("x3d6");
        assert_eq!(1, command.multiplier);
        assert_eq!(3, command.times);
        assert_eq!(6, command.faces);
    }

    #[test]
    fn case_insensitive_test() {
        let command = Command::parse("2D8-h");
        assert_eq!(2, command.times);
        assert_eq!(8, command.faces);
        assert!(command.highest);
    }

    #[test]
    fn both_selections_test() {
        let command = Command::parse("3d6-L-H");
        assert!(command.lowest);
        assert!(command.highest);
    }

    #[test]
    fn first_positive_value_wins_test() {
        let command = Command::parse("0d0 d6 2d8");
        assert_eq!(2, command.times);
        assert_eq!(6, command.faces);
    }

    #[test]
    fn defaults_test() {
        assert_eq!(Command::default(), Command::parse(""));
        assert_eq!(Command::default(), Command::parse("hello there"));
        assert_eq!(Command::default(), Command::parse("d"));
    }

    #[test]
    fn unknown_segments_ignored_test() {
        let command = Command::parse("roll 3d6 + 2 please");
        assert_eq!(3, command.times);
        assert_eq!(6, command.faces);
        // the modifier must touch its sign
        assert_eq!(0, command.modifier);
    }

    #[test]
    fn overflowing_number_ignored_test() {
        let command = Command::parse("99999999999999999999999d6");
        assert_eq!(1, command.times);
        assert_eq!(6, command.faces);
    }
}
