use itertools::Itertools;

/// Arithmetic summary of one outcome, e.g. `[ 3 + 5 ] x 2 + 1`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expression {
    parts: Vec<String>,
}

impl Expression {
    pub fn with_rolls(rolls: &[u64]) -> Self {
        Expression {
            parts: vec![format!("[ {} ]", rolls.iter().format(" + "))],
        }
    }

    pub fn multiply(&mut self, multiplier: u64) {
        self.parts.push(format!("x {multiplier}"));
    }

    pub fn modify(&mut self, modifier: i64) {
        self.parts.push(format!("+ {modifier}"));
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.parts.iter().format(" "))
    }
}

/// Shape of the summary, one case per number of outcomes
#[derive(Debug, Clone, Copy)]
pub enum Kind<'a> {
    Empty,
    Single(&'a Expression),
    Multi(&'a [Expression]),
}

impl<'a> Kind<'a> {
    pub fn of(expressions: &'a [Expression]) -> Self {
        match expressions {
            [] => Kind::Empty,
            [single] => Kind::Single(single),
            multi => Kind::Multi(multi),
        }
    }

    /// Render the summary against the grand total
    pub fn render(&self, total: i64) -> String {
        match self {
            Kind::Empty => total.to_string(),
            Kind::Single(expression) => format!("{expression} = {total}"),
            Kind::Multi(expressions) => format!(
                "{} = {total}",
                expressions
                    .iter()
                    .format_with(" + ", |expression, f| f(&format_args!("({expression})")))
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Expression;
    use super::Kind;

    #[test]
    fn empty_test() {
        assert_eq!("0", Kind::of(&[]).render(0));
    }

    #[test]
    fn single_test() {
        let mut expression = Expression::with_rolls(&[3, 5]);
        expression.multiply(2);
        expression.modify(1);
        assert_eq!(
            "[ 3 + 5 ] x 2 + 1 = 17",
            Kind::of(&[expression]).render(17)
        );
    }

    #[test]
    fn multi_test() {
        let expressions = [Expression::with_rolls(&[1, 2]), Expression::with_rolls(&[6])];
        assert_eq!("([ 1 + 2 ]) + ([ 6 ]) = 9", Kind::of(&expressions).render(9));
    }

    #[test]
    fn no_rolls_test() {
        assert_eq!("[  ] = 0", Kind::of(&[Expression::with_rolls(&[])]).render(0));
    }
}
