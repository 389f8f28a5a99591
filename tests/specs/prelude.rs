//! Shared helpers for CLI specs

#![allow(dead_code)]
#![allow(deprecated)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

pub const MINIMAL_PRESENTATION: &str = r#"
title = "Minimal"

[demo]
tick_interval = "50ms"

[[section]]
id = "intro"
title = "Welcome"
subtitle = "Start here"
content = ["First paragraph.", "Second paragraph."]
image_caption = "A cell"

[[section]]
id = "process"
title = "The Process"
content = ["Watch it happen."]
has_animation = true
"#;

/// A scratch directory holding presentation files
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Project whose `presentation.toml` is the minimal presentation
    pub fn minimal() -> Self {
        let project = Self::empty();
        project.file("presentation.toml", MINIMAL_PRESENTATION);
        project
    }

    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    /// `regen --file <project>/presentation.toml`
    pub fn regen(&self) -> CliBuilder {
        let file = self.dir.path().join("presentation.toml");
        CliBuilder::new().args(&["--file", &file.display().to_string()])
    }
}

/// `regen` with the bundled presentation
pub fn regen() -> CliBuilder {
    CliBuilder::new()
}

pub struct CliBuilder {
    args: Vec<String>,
    stdin: Option<String>,
}

impl CliBuilder {
    fn new() -> Self {
        Self {
            args: Vec::new(),
            stdin: None,
        }
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|a| a.to_string()));
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    fn run(self) -> RunAssert {
        let mut cmd = Command::cargo_bin("regen").unwrap();
        cmd.args(&self.args).env_remove("RUST_LOG");
        if let Some(input) = self.stdin {
            cmd.write_stdin(input);
        }
        RunAssert::from(cmd.output().unwrap())
    }

    /// Run and require exit code 0
    pub fn passes(self) -> RunAssert {
        let run = self.run();
        assert!(run.success, "expected success, stderr:\n{}", run.stderr);
        run
    }

    /// Run and require a non-zero exit code
    pub fn fails(self) -> RunAssert {
        let run = self.run();
        assert!(!run.success, "expected failure, stdout:\n{}", run.stdout);
        run
    }
}

pub struct RunAssert {
    success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl From<std::process::Output> for RunAssert {
    fn from(output: std::process::Output) -> Self {
        Self {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl RunAssert {
    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout, expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout.contains(needle),
            "stdout missing {:?}:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(
            !self.stdout.contains(needle),
            "stdout unexpectedly contains {:?}:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr.contains(needle),
            "stderr missing {:?}:\n{}",
            needle,
            self.stderr
        );
        self
    }
}
