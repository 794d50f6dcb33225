mod arguments;
mod compile;
mod configuration;
mod context;
mod error;
mod infrastructure;
mod leak_check;
mod log;
mod run;
mod stamp;
mod status;
mod target;

use arguments::Arguments;
use clap::Parser;
use configuration::Configuration;
use context::Context;
use error::ApplicationError;
use infrastructure::{OsClock, OsCommandRunner, OsConsole, OsFileSystem};
use std::{env::set_current_dir, process::exit};
use target::default_targets;

#[tokio::main]
async fn main() {
    let arguments = Arguments::parse();
    let context = Context::new(
        OsClock::new(),
        OsCommandRunner::new(),
        OsConsole::new(),
        OsFileSystem::new(),
        run::Options {
            debug: arguments.debug,
            skip_leak_check: arguments.skip_leak_check,
            skip_stamp: arguments.skip_stamp,
        },
    );

    if let Err(error) = execute(&context, &arguments).await {
        if !(arguments.quiet && error.is_target_failure()) {
            let _ = context
                .console()
                .lock()
                .await
                .write_stderr(format!("handin: {}\n", error).as_bytes())
                .await;
        }

        exit(1)
    }
}

async fn execute(context: &Context, arguments: &Arguments) -> Result<(), ApplicationError> {
    if let Some(directory) = &arguments.directory {
        set_current_dir(directory)?;
    }

    let configuration = Configuration::new(
        &arguments.compiler,
        &arguments.harness,
        &arguments.leak_checker,
        default_targets(),
    );

    run::run(
        context,
        &configuration,
        &configuration.select_targets(&arguments.targets)?,
    )
    .await
}
