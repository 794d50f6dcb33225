use async_trait::async_trait;
use std::error::Error;
use tokio::io::{AsyncWriteExt, Stderr, stderr};

/// A sink for log lines and tool output forwarded to the user.
#[async_trait]
pub trait Console {
    async fn write_stderr(&mut self, buffer: &[u8]) -> Result<(), Box<dyn Error>>;
}

#[derive(Debug)]
pub struct OsConsole {
    stderr: Stderr,
}

impl OsConsole {
    pub fn new() -> Self {
        Self { stderr: stderr() }
    }
}

#[async_trait]
impl Console for OsConsole {
    async fn write_stderr(&mut self, src: &[u8]) -> Result<(), Box<dyn Error>> {
        self.stderr.write_all(src).await?;
        // Tokio hands writes to a blocking thread, so flush before the process may exit.
        self.stderr.flush().await?;

        Ok(())
    }
}
