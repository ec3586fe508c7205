//! Shared integration-test harness for running the `competency-annotator`
//! binary as a child process.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Helpers for invoking the built binary.
pub struct AnnotatorProcess;

impl AnnotatorProcess {
    fn command(args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_competency-annotator"));
        cmd.args(args)
            .env_remove("COMPETENCY_ANNOTATOR_DATA")
            .env_remove("COMPETENCY_ANNOTATOR_SELECTOR")
            .env_remove("COMPETENCY_ANNOTATOR_LOG_LEVEL")
            .env("NO_COLOR", "1");
        cmd
    }

    /// Runs the binary with `args` and waits for it to exit.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command(args: &[&str]) -> Output {
        Self::command(args)
            .stdin(Stdio::null())
            .output()
            .expect("failed to run competency-annotator")
    }

    /// Runs the binary with `args`, feeding `input` on stdin.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_with_stdin(args: &[&str], input: &str) -> Output {
        let mut child = Self::command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to spawn competency-annotator");

        child
            .stdin
            .take()
            .expect("stdin not captured")
            .write_all(input.as_bytes())
            .expect("failed to write stdin");

        child
            .wait_with_output()
            .expect("failed to wait for competency-annotator")
    }

    /// Absolute path of a file under `tests/fixtures`.
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    /// Fixture path as a `String`, for argument lists.
    pub fn fixture(name: &str) -> String {
        Self::fixture_path(name)
            .to_str()
            .expect("non-UTF-8 fixture path")
            .to_string()
    }
}
