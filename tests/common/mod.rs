//! Shared testing utilities for promptdeck CLI tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Testing harness providing an isolated working directory and topic library.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        root.child("work").create_dir_all().expect("Failed to create test work directory");
        Self { root }
    }

    /// Directory used as the working directory for CLI invocations.
    pub fn work_dir(&self) -> PathBuf {
        self.root.path().join("work")
    }

    /// Topic library directory populated by `write_topic`.
    pub fn prompts_dir(&self) -> PathBuf {
        self.root.path().join("library")
    }

    /// Build a command for invoking the compiled `promptdeck` binary.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `promptdeck` binary within a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd =
            Command::cargo_bin("promptdeck").expect("Failed to locate promptdeck binary");
        cmd.current_dir(dir.as_ref())
            .env_remove("PROMPTDECK_PROMPTS_DIR")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write a topic with a config and guideline files into the library.
    pub fn write_topic(
        &self,
        id: &str,
        name: &str,
        prompt_files: &[&str],
        texts: &[(&str, &str)],
    ) {
        let files: Vec<String> = prompt_files.iter().map(|f| format!("\"{}\"", f)).collect();
        let config = format!(
            r#"{{"id":"ignored","name":"{}","description":"{} guidelines","keywords":["{}"],"promptFiles":[{}]}}"#,
            name,
            name,
            id,
            files.join(",")
        );
        let topic = self.root.child("library").child(id);
        topic.child("config.json").write_str(&config).expect("write config.json");
        for (file, text) in texts {
            topic.child(file).write_str(text).expect("write guideline");
        }
    }

    /// Write `promptdeck.toml` into the work directory.
    pub fn write_config(&self, content: &str) {
        self.root
            .child("work")
            .child("promptdeck.toml")
            .write_str(content)
            .expect("write config");
    }
}
