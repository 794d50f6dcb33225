use crate::configuration::{DEFAULT_COMPILER, DEFAULT_HARNESS, DEFAULT_LEAK_CHECKER};
use clap::Parser;

#[derive(Debug, Parser)]
#[clap(
    about = "Stamp hand-in dates, compile and leak-check table coursework",
    version
)]
pub struct Arguments {
    #[clap(help = "Specify targets")]
    pub targets: Vec<String>,
    #[clap(short = 'C', help = "Set a working directory")]
    pub directory: Option<String>,
    #[clap(long, help = "Skip the leak check phase")]
    pub skip_leak_check: bool,
    #[clap(long, help = "Leave hand-in dates untouched")]
    pub skip_stamp: bool,
    #[clap(long, default_value = DEFAULT_COMPILER, env = "HANDIN_CC", help = "Set a C compiler")]
    pub compiler: String,
    #[clap(long, default_value = DEFAULT_HARNESS, help = "Set a test harness source")]
    pub harness: String,
    #[clap(
        long,
        default_value = DEFAULT_LEAK_CHECKER,
        env = "HANDIN_LEAK_CHECKER",
        help = "Set a leak checker"
    )]
    pub leak_checker: String,
    #[clap(long, help = "Show no message on failure of targets")]
    pub quiet: bool,
    #[clap(long, help = "Show debug logs", env = "HANDIN_DEBUG")]
    pub debug: bool,
}
