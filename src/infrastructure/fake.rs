use super::{Clock, CommandOutput, CommandRunner, Console, FileSystem};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::{
    collections::HashMap,
    error::Error,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

#[derive(Debug)]
pub struct FakeClock {
    today: NaiveDate,
}

impl FakeClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FakeClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}

/// Records commands and fails the ones containing any of the given patterns.
#[derive(Clone, Debug, Default)]
pub struct FakeCommandRunner {
    failures: Vec<String>,
    commands: Arc<Mutex<Vec<String>>>,
}

impl FakeCommandRunner {
    pub fn new(failures: &[&str]) -> Self {
        Self {
            failures: failures.iter().map(|&pattern| pattern.into()).collect(),
            commands: Default::default(),
        }
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for FakeCommandRunner {
    async fn run(&self, command: &str) -> Result<CommandOutput, Box<dyn Error>> {
        self.commands.lock().unwrap().push(command.into());

        Ok(
            if self
                .failures
                .iter()
                .any(|pattern| command.contains(pattern.as_str()))
            {
                CommandOutput::new(Some(1), vec![], b"error\n".to_vec())
            } else {
                CommandOutput::new(Some(0), vec![], vec![])
            },
        )
    }
}

#[derive(Clone, Debug, Default)]
pub struct FakeConsole {
    stderr: Arc<Mutex<Vec<u8>>>,
}

impl FakeConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.stderr.lock().unwrap()).into_owned()
    }
}

#[async_trait]
impl Console for FakeConsole {
    async fn write_stderr(&mut self, buffer: &[u8]) -> Result<(), Box<dyn Error>> {
        self.stderr.lock().unwrap().extend_from_slice(buffer);

        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
pub struct FakeFileSystem {
    files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
    writes: Arc<Mutex<Vec<PathBuf>>>,
}

impl FakeFileSystem {
    pub fn new(files: &[(&str, &str)]) -> Self {
        Self {
            files: Arc::new(Mutex::new(
                files
                    .iter()
                    .map(|&(path, content)| (path.into(), content.as_bytes().to_vec()))
                    .collect(),
            )),
            writes: Default::default(),
        }
    }

    pub fn file(&self, path: &str) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(Path::new(path)).cloned()
    }

    pub fn writes(&self) -> Vec<PathBuf> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl FileSystem for FakeFileSystem {
    async fn read_file(&self, path: &Path, buffer: &mut Vec<u8>) -> Result<(), Box<dyn Error>> {
        buffer.extend_from_slice(
            self.files
                .lock()
                .unwrap()
                .get(path)
                .ok_or_else(|| format!("file not found: {}", path.display()))?,
        );

        Ok(())
    }

    async fn write_file(&self, path: &Path, content: &[u8]) -> Result<(), Box<dyn Error>> {
        self.writes.lock().unwrap().push(path.into());
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.to_vec());

        Ok(())
    }
}
