use crate::{
    infrastructure::{Clock, CommandRunner, Console, FileSystem},
    run::Options,
};
use tokio::sync::Mutex;

pub struct Context {
    clock: Box<dyn Clock + Send + Sync + 'static>,
    command_runner: Box<dyn CommandRunner + Send + Sync + 'static>,
    console: Mutex<Box<dyn Console + Send + Sync + 'static>>,
    file_system: Box<dyn FileSystem + Send + Sync + 'static>,
    options: Options,
}

impl Context {
    pub fn new(
        clock: impl Clock + Send + Sync + 'static,
        command_runner: impl CommandRunner + Send + Sync + 'static,
        console: impl Console + Send + Sync + 'static,
        file_system: impl FileSystem + Send + Sync + 'static,
        options: Options,
    ) -> Self {
        Self {
            clock: Box::new(clock),
            command_runner: Box::new(command_runner),
            console: Mutex::new(Box::new(console)),
            file_system: Box::new(file_system),
            options,
        }
    }

    pub fn clock(&self) -> &(dyn Clock + Send + Sync) {
        &*self.clock
    }

    pub fn command_runner(&self) -> &(dyn CommandRunner + Send + Sync) {
        &*self.command_runner
    }

    pub fn console(&self) -> &Mutex<Box<dyn Console + Send + Sync>> {
        &self.console
    }

    pub fn file_system(&self) -> &(dyn FileSystem + Send + Sync) {
        &*self.file_system
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}
