use async_trait::async_trait;
use std::error::Error;
use tokio::process::Command;

#[async_trait]
pub trait CommandRunner {
    async fn run(&self, command: &str) -> Result<CommandOutput, Box<dyn Error>>;
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CommandOutput {
    code: Option<i32>,
    stdout: Vec<u8>,
    stderr: Vec<u8>,
}

impl CommandOutput {
    pub fn new(code: Option<i32>, stdout: Vec<u8>, stderr: Vec<u8>) -> Self {
        Self {
            code,
            stdout,
            stderr,
        }
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }

    pub fn stdout(&self) -> &[u8] {
        &self.stdout
    }

    pub fn stderr(&self) -> &[u8] {
        &self.stderr
    }

    pub fn success(&self) -> bool {
        self.code() == Some(0)
    }

    pub fn describe_exit(&self) -> String {
        match self.code {
            Some(code) => format!("exited with status code {}", code),
            None => "exited without status code".into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct OsCommandRunner {}

impl OsCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommandRunner for OsCommandRunner {
    async fn run(&self, command: &str) -> Result<CommandOutput, Box<dyn Error>> {
        let output = Command::new("sh").arg("-ec").arg(command).output().await?;

        Ok(CommandOutput::new(
            output.status.code(),
            output.stdout,
            output.stderr,
        ))
    }
}
