//! Child process invocation.
//!
//! An `Invocation` describes one external command: program, arguments and
//! an environment overlay applied on top of the inherited environment.
//! Running it either yields an `Exit` (the process started and finished) or
//! fails with `Error::Launch` (it never started). Nothing is retried.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use crate::config::ToolConfig;
use crate::error::{Error, Result};

/// A process that started and exited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    /// Exit code, or `None` when the process was terminated by a signal.
    pub status: Option<i32>,
    pub stderr: Vec<u8>,
}

impl Exit {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

/// Human-readable exit status, e.g. `exit status 2`.
pub fn describe_status(status: Option<i32>) -> String {
    match status {
        Some(code) => format!("exit status {code}"),
        None => "terminated by signal".to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct Invocation {
    program: PathBuf,
    display_name: String,
    args: Vec<OsString>,
    env: Vec<(String, String)>,
}

impl Invocation {
    pub fn new(tool: &ToolConfig) -> Self {
        Self {
            program: tool.program.clone(),
            display_name: tool.short_name.clone(),
            args: Vec::new(),
            env: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Add or replace one variable in the child's environment.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn env_overlay(&self) -> &[(String, String)] {
        &self.env
    }

    pub fn arguments(&self) -> &[OsString] {
        &self.args
    }

    /// Short command line used in messages, e.g. `go tool dist list`.
    pub fn describe(&self) -> String {
        let mut out = self.display_name.clone();
        for arg in &self.args {
            out.push(' ');
            out.push_str(&arg.to_string_lossy());
        }
        out
    }

    /// Run to completion, capturing stderr and discarding stdout.
    pub fn run(&self) -> Result<Exit> {
        let output = self.spawn(Stdio::null())?;
        Ok(Exit {
            status: output.status.code(),
            stderr: output.stderr,
        })
    }

    /// Run to completion and return stdout. A non-zero exit is an error.
    pub fn output(&self) -> Result<Vec<u8>> {
        let output = self.spawn(Stdio::piped())?;
        if !output.status.success() {
            return Err(Error::CommandFailed {
                command: self.describe(),
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(output.stdout)
    }

    // `Command::output` drains both pipes concurrently, so a chatty child
    // cannot block on a full stdout buffer while we wait on stderr.
    fn spawn(&self, stdout: Stdio) -> Result<Output> {
        tracing::debug!(command = %self.describe(), env = ?self.env, "spawning");

        Command::new(&self.program)
            .args(&self.args)
            .envs(self.env.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(Stdio::piped())
            .output()
            .map_err(|error| Error::Launch {
                command: self.describe(),
                error,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_joins_short_name_and_args() {
        let inv = Invocation::new(&ToolConfig::new("/opt/go/bin/go"))
            .arg("tool")
            .args(["dist", "list"]);
        assert_eq!(inv.describe(), "go tool dist list");
    }

    #[test]
    fn exit_success_requires_zero_code() {
        let ok = Exit {
            status: Some(0),
            stderr: b"warning\n".to_vec(),
        };
        assert!(ok.success());

        let signalled = Exit {
            status: None,
            stderr: vec![],
        };
        assert!(!signalled.success());
    }

    #[test]
    fn missing_program_is_launch_failure() {
        let inv = Invocation::new(&ToolConfig::new("/nonexistent/portcheck/go")).arg("vet");
        match inv.run() {
            Err(Error::Launch { command, error }) => {
                assert_eq!(command, "go vet");
                assert_eq!(error.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected launch failure, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn run_captures_stderr_and_status() {
        let exit = Invocation::new(&ToolConfig::new("/bin/sh"))
            .args(["-c", "echo out; echo \"err $PORTCHECK_T\" >&2; exit 3"])
            .env("PORTCHECK_T", "overlay")
            .run()
            .unwrap();
        assert_eq!(exit.status, Some(3));
        assert_eq!(exit.stderr, b"err overlay\n");
    }

    #[cfg(unix)]
    #[test]
    fn overlay_keeps_inherited_environment() {
        let out = Invocation::new(&ToolConfig::new("/bin/sh"))
            .args(["-c", "printf '%s' \"$PATH\""])
            .env("PORTCHECK_T", "1")
            .output()
            .unwrap();
        assert!(!out.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn large_stdout_does_not_block() {
        let exit = Invocation::new(&ToolConfig::new("/bin/sh"))
            .args(["-c", "head -c 1000000 /dev/zero; echo done >&2"])
            .run()
            .unwrap();
        assert!(exit.success());
        assert_eq!(exit.stderr, b"done\n");
    }

    #[cfg(unix)]
    #[test]
    fn output_fails_on_nonzero_exit() {
        let err = Invocation::new(&ToolConfig::new("/bin/sh"))
            .args(["-c", "echo nope >&2; exit 4"])
            .output()
            .unwrap_err();
        match err {
            Error::CommandFailed { status, stderr, .. } => {
                assert_eq!(status, Some(4));
                assert_eq!(stderr, "nope\n");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
