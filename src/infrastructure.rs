mod clock;
mod command_runner;
mod console;
#[cfg(test)]
mod fake;
mod file_system;

pub use clock::*;
pub use command_runner::*;
pub use console::*;
#[cfg(test)]
pub use fake::*;
pub use file_system::*;
