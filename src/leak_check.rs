use crate::{
    configuration::Configuration, context::Context, debug, error::ApplicationError, log,
    status::Status, target::Target,
};

const LEAK_CHECKER_FLAGS: &str = "--leak-check=full --show-reachable=yes";

pub fn leak_check_command(configuration: &Configuration, target: &Target) -> String {
    format!(
        "{} {} ./{}",
        configuration.leak_checker(),
        LEAK_CHECKER_FLAGS,
        target.binary()
    )
}

/// Runs the leak checker against the test binary of a target.
///
/// Output of the checker is discarded. A non-zero exit is reported as leaks
/// whether the checker found any or failed to run at all.
pub async fn leak_check(
    context: &Context,
    configuration: &Configuration,
    target: &Target,
) -> Result<Status, ApplicationError> {
    let command = leak_check_command(configuration, target);
    let mut console = context.console().lock().await;

    debug!(context, console, "leak check {}: {}", target.name(), command);

    let output = context.command_runner().run(&command).await?;

    if output.success() {
        log!(console, "no leaks in {}", target.name());
    } else {
        log!(
            console,
            "leaks detected in {}: leak checker {}",
            target.name(),
            output.describe_exit()
        );
    }

    Ok(output.success().into())
}
