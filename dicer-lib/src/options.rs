use crate::constant;
use crate::error::Field;
use serde::Deserialize;
use serde::Serialize;

/// Upper bounds on the numeric fields of a command, `None` disables a check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Throttles {
    pub times: Option<u64>,
    pub faces: Option<u64>,
    pub modifier: Option<i64>,
    pub multiplier: Option<u64>,
    pub repeat: Option<u64>,
}

impl Default for Throttles {
    fn default() -> Self {
        Throttles {
            times: Some(constant::DEFAULT_THROTTLE),
            faces: Some(constant::DEFAULT_THROTTLE),
            modifier: Some(constant::DEFAULT_THROTTLE as i64),
            multiplier: Some(constant::DEFAULT_THROTTLE),
            repeat: Some(constant::DEFAULT_THROTTLE),
        }
    }
}

impl Throttles {
    /// No limit on any field
    pub fn unlimited() -> Self {
        Throttles {
            times: None,
            faces: None,
            modifier: None,
            multiplier: None,
            repeat: None,
        }
    }

    /// Configured limit for a field, saturated into the signed range
    pub fn limit(&self, field: Field) -> Option<i64> {
        let unsigned = match field {
            Field::Times => self.times,
            Field::Faces => self.faces,
            Field::Multiplier => self.multiplier,
            Field::Repeat => self.repeat,
            Field::Modifier => return self.modifier,
        };
        unsigned.map(|limit| i64::try_from(limit).unwrap_or(i64::MAX))
    }
}

/// Caller configuration, read-only for the whole life of a solver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Rolled when the input is blank
    pub command: String,
    pub throttles: Throttles,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            command: constant::DEFAULT_COMMAND.to_owned(),
            throttles: Throttles::default(),
        }
    }
}

impl Options {
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    pub fn with_throttles(mut self, throttles: Throttles) -> Self {
        self.throttles = throttles;
        self
    }

    /// Pick the notation to run: the trimmed input, or the default command when blank
    pub fn resolve<'a>(&'a self, input: Option<&'a str>) -> &'a str {
        match input.map(str::trim) {
            Some(input) if !input.is_empty() => input,
            _ => match self.command.trim() {
                "" => constant::DEFAULT_COMMAND,
                command => command,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Options;
    use super::Throttles;
    use crate::error::Field;

    #[test]
    fn resolve_test() {
        let options = Options::default().with_command("3d6");
        assert_eq!("3d6", options.resolve(None));
        assert_eq!("3d6", options.resolve(Some("")));
        assert_eq!("3d6", options.resolve(Some("  \t ")));
        assert_eq!("2d8", options.resolve(Some(" 2d8 ")));
    }

    #[test]
    fn resolve_blank_default_test() {
        let options = Options::default().with_command(" ");
        assert_eq!("d20", options.resolve(None));
    }

    #[test]
    fn partial_deserialize_test() {
        let options: Options =
            serde_json::from_str(r#"{"throttles": {"faces": 1000, "repeat": null}}"#).unwrap();
        assert_eq!("d20", options.command);
        assert_eq!(Some(1000), options.throttles.limit(Field::Faces));
        assert_eq!(None, options.throttles.limit(Field::Repeat));
        assert_eq!(Some(100), options.throttles.limit(Field::Times));
    }

    #[test]
    fn unlimited_test() {
        let throttles = Throttles::unlimited();
        assert!(Field::ALL.iter().all(|field| throttles.limit(*field).is_none()));
    }
}
