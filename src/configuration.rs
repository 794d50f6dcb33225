use crate::{error::ApplicationError, target::Target};

pub const DEFAULT_COMPILER: &str = "gcc";
pub const DEFAULT_HARNESS: &str = "tabletest-1.9.c";
pub const DEFAULT_LEAK_CHECKER: &str = "valgrind";
pub const INCLUDE_DIRECTORY: &str = "lib";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Configuration {
    compiler: String,
    harness: String,
    leak_checker: String,
    targets: Vec<Target>,
}

impl Configuration {
    pub fn new(
        compiler: impl Into<String>,
        harness: impl Into<String>,
        leak_checker: impl Into<String>,
        targets: Vec<Target>,
    ) -> Self {
        Self {
            compiler: compiler.into(),
            harness: harness.into(),
            leak_checker: leak_checker.into(),
            targets,
        }
    }

    pub fn compiler(&self) -> &str {
        &self.compiler
    }

    pub fn harness(&self) -> &str {
        &self.harness
    }

    pub fn leak_checker(&self) -> &str {
        &self.leak_checker
    }

    /// Selects targets by name in list order. No names select every target.
    pub fn select_targets(&self, names: &[String]) -> Result<Vec<&Target>, ApplicationError> {
        if let Some(name) = names
            .iter()
            .find(|name| !self.targets.iter().any(|target| target.name() == *name))
        {
            return Err(ApplicationError::TargetNotFound(name.clone()));
        }

        Ok(self
            .targets
            .iter()
            .filter(|target| names.is_empty() || names.iter().any(|name| name == target.name()))
            .collect())
    }
}
