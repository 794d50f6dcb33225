mod options;

use crate::{
    compile::compile, configuration::Configuration, context::Context, error::ApplicationError,
    leak_check::leak_check, log, stamp::stamp, status::Status, target::Target,
};
pub use options::Options;

pub async fn run(
    context: &Context,
    configuration: &Configuration,
    targets: &[&Target],
) -> Result<(), ApplicationError> {
    if !context.options().skip_stamp {
        for target in targets.iter().filter(|target| target.stamped()) {
            stamp(context, target).await?;
        }
    }

    let mut failures = 0;

    for target in targets {
        failures += compile(context, configuration, target).await?.code();
    }

    if failures > 0 {
        return Err(ApplicationError::Compile(failures));
    }

    if context.options().skip_leak_check {
        let mut console = context.console().lock().await;

        log!(console, "skipped leak check");
        return Ok(());
    }

    let mut leaking = vec![];

    for target in targets {
        if leak_check(context, configuration, target).await? == Status::Failure {
            leaking.push(target.name().to_owned());
        }
    }

    if leaking.is_empty() {
        Ok(())
    } else {
        Err(ApplicationError::LeakCheck(leaking))
    }
}
