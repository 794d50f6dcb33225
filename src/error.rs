use itertools::Itertools;
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    io,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ApplicationError {
    Compile(usize),
    LeakCheck(Vec<String>),
    Other(String),
    TargetNotFound(String),
}

impl ApplicationError {
    /// Returns `true` for failures of the external tools rather than of this program.
    pub fn is_target_failure(&self) -> bool {
        matches!(self, Self::Compile(_) | Self::LeakCheck(_))
    }
}

impl Error for ApplicationError {}

impl Display for ApplicationError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::Compile(count) => write!(
                formatter,
                "{} target{} failed to compile",
                count,
                if *count == 1 { "" } else { "s" }
            ),
            Self::LeakCheck(targets) => {
                write!(formatter, "leaks detected in {}", targets.iter().join(", "))
            }
            Self::Other(message) => write!(formatter, "{}", message),
            Self::TargetNotFound(target) => write!(formatter, "target \"{}\" not found", target),
        }
    }
}

impl From<Box<dyn Error>> for ApplicationError {
    fn from(error: Box<dyn Error>) -> Self {
        Self::Other(error.to_string())
    }
}

impl From<io::Error> for ApplicationError {
    fn from(error: io::Error) -> Self {
        Self::Other(error.to_string())
    }
}
