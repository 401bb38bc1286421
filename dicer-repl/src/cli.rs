use clap::crate_authors;
use clap::crate_description;
use clap::crate_version;
pub use clap::Parser;
use std::path::PathBuf;

const DICER_AUTHOR: &str = crate_authors!();
const DICER_VERSION: &str = crate_version!();
const DICER_ABOUT: &str = crate_description!();
const DICER_FLAG_D_SHORT: char = 'd';
const DICER_FLAG_D_HELP: &str = "Enable Debug logging";
const DICER_FLAG_C_SHORT: char = 'c';
const DICER_FLAG_C_HELP: &str = "RON file with the default command and throttles";
const DICER_FLAG_V_SHORT: char = 'v';
const DICER_FLAG_V_HELP: &str = "Print every step taken to reach the result";
const DICER_FLAG_JSON_HELP: &str = "Print the whole execution as JSON";
const DICER_ARG_COMMAND_HELP: &str = "Roll this command and exit instead of starting the repl";

#[derive(Parser, Debug)]
#[command(author = DICER_AUTHOR, version = DICER_VERSION, about = DICER_ABOUT)]
pub struct Args {
    #[arg(short = DICER_FLAG_D_SHORT, long, help = DICER_FLAG_D_HELP, action)]
    pub debug: bool,

    #[arg(short = DICER_FLAG_C_SHORT, long, help = DICER_FLAG_C_HELP)]
    pub config: Option<PathBuf>,

    #[arg(short = DICER_FLAG_V_SHORT, long, help = DICER_FLAG_V_HELP, action)]
    pub verbose: bool,

    #[arg(long, help = DICER_FLAG_JSON_HELP, action)]
    pub json: bool,

    #[arg(help = DICER_ARG_COMMAND_HELP)]
    pub command: Option<String>,
}
