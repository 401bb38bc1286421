use colored::Colorize;
use dicer_lib::command::Command;
use dicer_lib::options::Throttles;
use dicer_lib::throttle;
use rustyline::completion::Completer;
use rustyline::highlight::Highlighter;
use rustyline::highlight::MatchingBracketHighlighter;
use rustyline::hint::Hinter;
use rustyline::hint::HistoryHinter;
use rustyline::validate::ValidationContext;
use rustyline::validate::ValidationResult;
use rustyline::validate::Validator;
use rustyline::Context;
use rustyline::Result;
use rustyline_derive::Helper;
use std::borrow::Cow;
use std::borrow::Cow::Borrowed;
use std::borrow::Cow::Owned;

const CANONICAL_SIGIL: &str = "  => ";

#[derive(Helper)]
pub(crate) struct ReplHelper {
    pub(crate) highlighter: MatchingBracketHighlighter,
    pub(crate) hinter: HistoryHinter,
    pub(crate) colored: String,
    pub(crate) throttles: Throttles,
}

impl ReplHelper {
    /// Canonical notation of the line, when it reads differently from what was typed
    fn canonical(line: &str) -> Option<String> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let canonical = Command::parse(line).to_string();
        (canonical != line).then(|| format!("{CANONICAL_SIGIL}{canonical}"))
    }

    /// Message shown under the line when a throttle would reject it
    fn rejection(&self, line: &str) -> Option<String> {
        if line.trim().is_empty() {
            return None;
        }
        throttle::check(&Command::parse(line), &self.throttles)
            .err()
            .map(|error| format!("\n{}", error.to_string().red()))
    }

    /// Canonical notation stands out, history hints stay in the background
    fn style_hint(hint: &str) -> String {
        match hint.strip_prefix(CANONICAL_SIGIL) {
            Some(canonical) => format!("{}{}", CANONICAL_SIGIL.dimmed(), canonical.cyan().italic()),
            None => hint.dimmed().to_string(),
        }
    }
}

impl Completer for ReplHelper {
    type Candidate = String;
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<Self::Hint> {
        self.hinter.hint(line, pos, ctx).or_else(|| {
            if pos < line.len() {
                None
            } else {
                Self::canonical(line)
            }
        })
    }
}

impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Borrowed(&self.colored)
        } else {
            Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(Self::style_hint(hint))
    }

    fn highlight_char(&self, line: &str, pos: usize) -> bool {
        self.highlighter.highlight_char(line, pos)
    }
}

impl Validator for ReplHelper {
    // unbalanced brackets are fine, only throttled rolls stay in the buffer
    fn validate(&self, ctx: &mut ValidationContext) -> Result<ValidationResult> {
        Ok(match self.rejection(ctx.input()) {
            Some(message) => ValidationResult::Invalid(Some(message)),
            None => ValidationResult::Valid(None),
        })
    }
}
