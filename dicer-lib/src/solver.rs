use crate::command::Command;
use crate::error::Result;
use crate::evaluator::Evaluator;
use crate::options::Options;
use crate::roll;
use crate::throttle;
use rand::Rng;

/// Default random dice roller
pub struct RandomSource<'a, T: Rng> {
    pub generator: &'a mut T,
}

impl<T: Rng> roll::Source for RandomSource<'_, T> {
    fn throw(&mut self, sides: u64) -> u64 {
        self.generator.gen_range(1..=sides.max(1))
    }

    fn sample(&mut self, len: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(self.generator, len, amount.min(len)).into_vec()
    }
}

/// Represent a solver and holds the caller options
#[derive(Clone, Debug, Default)]
pub struct Solver {
    options: Options,
}

impl Solver {
    pub fn new(options: Options) -> Self {
        Solver { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Parse a command, blank or absent input falls back to the default command
    pub fn parse(&self, command: Option<&str>) -> Command {
        Command::parse(self.options.resolve(command))
    }

    /// Canonical notation of a command, the default command when absent
    pub fn format(&self, parsed: Option<&Command>) -> String {
        match parsed {
            Some(parsed) => parsed.to_string(),
            None => self.options.resolve(None).to_owned(),
        }
    }

    /// Check a command against the configured throttles
    pub fn throttle(&self, parsed: &Command) -> Result<()> {
        throttle::check(parsed, &self.options.throttles)
    }

    /// Execute the command using the default Rng source
    pub fn execute(&self, command: Option<&str>) -> Result<roll::Execution> {
        self.execute_with(command, &mut rand::thread_rng())
    }

    /// Execute the command using the provided Rng source
    pub fn execute_with<R: Rng>(
        &self,
        command: Option<&str>,
        generator: &mut R,
    ) -> Result<roll::Execution> {
        self.execute_with_source(command, &mut RandomSource { generator })
    }

    /// Execute the command using the provided source.
    ///
    /// Throttles are checked before the first die is thrown.
    pub fn execute_with_source<S: roll::Source>(
        &self,
        command: Option<&str>,
        source: &mut S,
    ) -> Result<roll::Execution> {
        let command = self.options.resolve(command);
        let parsed = Command::parse(command);
        tracing::debug!(command, ?parsed, "parsed command");
        self.throttle(&parsed)?;
        Evaluator::eval(command, &parsed, source)
    }

    /// Evaluate an already parsed command, skipping the throttles
    pub fn evaluate_with_source<S: roll::Source>(
        &self,
        parsed: &Command,
        source: &mut S,
    ) -> Result<roll::Execution> {
        Evaluator::eval(&parsed.to_string(), parsed, source)
    }
}
