use crate::command::Command;
use crate::error::Error;
use crate::error::Field;
use crate::error::Result;
use crate::options::Throttles;

/// Reject the command if any throttled field is above its limit.
///
/// Fields are checked in [`Field::ALL`] order and the first offender is
/// reported. Defaults count as values, so a limit below a default rejects.
pub fn check(command: &Command, throttles: &Throttles) -> Result<()> {
    for field in Field::ALL {
        let Some(limit) = throttles.limit(field) else {
            continue;
        };
        let value = command.value(field);
        if value > limit {
            tracing::warn!(%field, value, limit, "throttle exceeded");
            return Err(Error::ThrottleExceeded {
                field,
                value,
                limit,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::check;
    use crate::command::Command;
    use crate::error::Error;
    use crate::error::Field;
    use crate::options::Throttles;

    #[test]
    fn faces_exceeded_test() {
        let throttles = Throttles {
            faces: Some(100),
            ..Throttles::unlimited()
        };
        let command = Command {
            faces: 150,
            ..Command::default()
        };
        assert_eq!(
            Err(Error::ThrottleExceeded {
                field: Field::Faces,
                value: 150,
                limit: 100,
            }),
            check(&command, &throttles)
        );
    }

    #[test]
    fn message_test() {
        let error = check(&Command::parse("d500"), &Throttles::default()).unwrap_err();
        assert_eq!(
            "faces (500) exceeds the limit of 100 that has been imposed",
            error.to_string()
        );
    }

    #[test]
    fn at_limit_passes_test() {
        assert!(check(&Command::parse("100d100x100+100"), &Throttles::default()).is_ok());
    }

    #[test]
    fn default_value_can_trip_test() {
        // nothing in the notation mentions times, the default of 1 is still checked
        let throttles = Throttles {
            times: Some(0),
            ..Throttles::unlimited()
        };
        assert_eq!(
            Err(Error::ThrottleExceeded {
                field: Field::Times,
                value: 1,
                limit: 0,
            }),
            check(&Command::parse("d6"), &throttles)
        );
    }

    #[test]
    fn unconfigured_passes_test() {
        let command = Command::parse("1000d1000x1000+1000");
        assert!(check(&command, &Throttles::unlimited()).is_ok());
    }

    #[test]
    fn stable_order_test() {
        let command = Command::parse("2x(500d500x500+500)");
        for _ in 0..3 {
            match check(&command, &Throttles::default()) {
                Err(Error::ThrottleExceeded { field, .. }) => assert_eq!(Field::Times, field),
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn negative_modifier_passes_test() {
        assert!(check(&Command::parse("d6-500"), &Throttles::default()).is_ok());
    }
}
