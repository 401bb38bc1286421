mod cli;
mod config;
mod helper;
use helper::ReplHelper;

use clap::Parser;
use colored::Colorize;
use dicer_lib::roll::Execution;
use dicer_lib::solver::Solver;
use rustyline::error::ReadlineError;
use rustyline::highlight::MatchingBracketHighlighter;
use rustyline::hint::HistoryHinter;
use rustyline::CompletionType;
use rustyline::Config;
use rustyline::EditMode;
use rustyline::Editor;
use rustyline::Result;
use termimad::crossterm::style::Color;
use termimad::MadSkin;
use tracing::Level;
use tracing_unwrap::OptionExt;

const HISTORY_FILE: &str = "history";

/// How an execution is written to stdout
struct Printer {
    skin: MadSkin,
    verbose: bool,
    json: bool,
}

impl Printer {
    fn print(&self, execution: &Execution) {
        if self.json {
            match serde_json::to_string_pretty(execution) {
                Ok(json) => println!("{}", json),
                Err(error) => eprintln!("{}", format!("repl: error: `{}`", error).bold().red()),
            }
            return;
        }
        if self.verbose {
            for line in execution.get_verbose() {
                println!("{}", line.as_str().dimmed());
            }
        }
        println!(
            "{}",
            self.skin
                .inline(&format!("**{}**", execution.get_text()))
                .to_string()
                .magenta()
        );
    }

    fn roll(&self, solver: &Solver, command: &str) -> bool {
        match solver.execute(Some(command)) {
            Ok(execution) => {
                self.print(&execution);
                true
            }
            Err(error) => {
                eprintln!("{}", format!("{}", error).bold().red());
                false
            }
        }
    }
}

fn main() -> Result<()> {
    let args = cli::Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(true)
        .with_max_level(if args.debug {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    let options = match config::load(args.config.as_deref()) {
        Ok(options) => options,
        Err(error) => {
            tracing::error!(%error, "repl: cannot load options");
            std::process::exit(2);
        }
    };
    let solver = Solver::new(options);

    let mut skin = MadSkin::default();
    skin.bold.set_fg(Color::Yellow);
    skin.inline_code.set_fg(Color::Magenta);
    let printer = Printer {
        skin,
        verbose: args.verbose,
        json: args.json,
    };

    if let Some(command) = args.command {
        if !printer.roll(&solver, &command) {
            std::process::exit(1);
        }
        return Ok(());
    }

    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();
    let helper = ReplHelper {
        highlighter: MatchingBracketHighlighter::new(),
        hinter: HistoryHinter {},
        colored: "".to_owned(),
        throttles: solver.options().throttles.clone(),
    };
    let mut rline = Editor::with_config(config)?;
    rline.set_helper(Some(helper));
    if rline.load_history(HISTORY_FILE).is_err() {
        eprintln!("{}", "repl: warn: no previous history".bold().yellow());
    }
    eprintln!(
        "{}",
        format!("repl: blank line rolls `{}`", solver.format(None)).dimmed()
    );
    let mut count = 1u64;
    loop {
        let prompt = format!("repl: {}> ", count);
        rline.helper_mut().unwrap_or_log().colored = prompt.bold().green().to_string();
        let readline = rline.readline(&prompt);
        match readline {
            Ok(line) => {
                if !line.trim().is_empty() {
                    rline.add_history_entry(line.as_str())?;
                }
                printer.roll(&solver, &line);
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("{}", "repl: signal: CTRL-C".bold().yellow());
                break;
            }
            Err(ReadlineError::Eof) => {
                eprintln!("{}", "repl: signal: CTRL-D".bold().yellow());
                break;
            }
            Err(error) => {
                eprintln!("{}", format!("repl: error: `{:?}`", error).bold().red());
                break;
            }
        }
        count += 1;
    }
    rline.append_history(HISTORY_FILE)
}
