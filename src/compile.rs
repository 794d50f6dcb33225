use crate::{
    configuration::{Configuration, INCLUDE_DIRECTORY},
    context::Context,
    debug,
    error::ApplicationError,
    log,
    status::Status,
    target::Target,
};
use itertools::Itertools;

const COMPILER_FLAGS: &str = "-std=c99 -Wall -Werror -g";

pub fn compile_command(configuration: &Configuration, target: &Target) -> String {
    let binary = target.binary();
    let source = target.source();

    [
        configuration.compiler(),
        COMPILER_FLAGS,
        "-I",
        INCLUDE_DIRECTORY,
        "-o",
        binary.as_str(),
        configuration.harness(),
        source.as_str(),
    ]
    .into_iter()
    .chain(target.libraries().iter().map(String::as_str))
    .join(" ")
}

pub async fn compile(
    context: &Context,
    configuration: &Configuration,
    target: &Target,
) -> Result<Status, ApplicationError> {
    let command = compile_command(configuration, target);
    let mut console = context.console().lock().await;

    debug!(context, console, "compile {}: {}", target.name(), command);

    let output = context.command_runner().run(&command).await?;

    console.write_stderr(output.stdout()).await?;

    if output.success() {
        log!(console, "compiled {}", target.name());
    } else {
        console.write_stderr(output.stderr()).await?;
        log!(
            console,
            "failed to compile {}: compiler {}",
            target.name(),
            output.describe_exit()
        );
    }

    Ok(output.success().into())
}
