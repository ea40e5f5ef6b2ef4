//! Fake `go` toolchain for end-to-end tests.
//!
//! Writes a shell script into a temp dir that answers `tool dist list` with
//! a canned matrix and, for verification runs, replays a per-platform exit
//! status and stderr. Every verification call is appended to `calls.log`
//! as `<GOOS>/<GOARCH> cgo=<CGO_ENABLED> <args...>`.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub struct FakeGo {
    dir: TempDir,
    dist_list: String,
    dist_status: i32,
    responses: Vec<(String, i32, String)>,
}

impl FakeGo {
    pub fn new(dist_list: &str) -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
            dist_list: dist_list.to_string(),
            dist_status: 0,
            responses: Vec::new(),
        }
    }

    /// Make `tool dist list` exit with `status` after printing its list.
    pub fn dist_status(mut self, status: i32) -> Self {
        self.dist_status = status;
        self
    }

    /// Respond to verification of `platform` with `status` and `stderr`.
    pub fn respond(mut self, platform: &str, status: i32, stderr: &str) -> Self {
        self.responses
            .push((platform.to_string(), status, stderr.to_string()));
        self
    }

    /// Write the script and return a handle to it.
    pub fn install(self) -> Installed {
        let root = self.dir.path().to_path_buf();
        fs::write(root.join("dist-list"), &self.dist_list).expect("write dist list");

        let mut cases = String::new();
        for (i, (platform, status, stderr)) in self.responses.iter().enumerate() {
            let file = root.join(format!("stderr-{i}"));
            fs::write(&file, stderr).expect("write stderr fixture");
            cases.push_str(&format!(
                "  {platform}) cat '{}' >&2; exit {status};;\n",
                file.display()
            ));
        }

        let script = format!(
            "#!/bin/sh\n\
             if [ \"$1\" = tool ]; then\n\
             \x20 cat '{list}'\n\
             \x20 exit {dist_status}\n\
             fi\n\
             echo \"$GOOS/$GOARCH cgo=${{CGO_ENABLED:-unset}} $*\" >> '{log}'\n\
             case \"$GOOS/$GOARCH\" in\n\
             {cases}\
             esac\n\
             exit 0\n",
            list = root.join("dist-list").display(),
            dist_status = self.dist_status,
            log = root.join("calls.log").display(),
        );

        let path = root.join("go");
        fs::write(&path, script).expect("write fake go");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod fake go");

        Installed {
            _dir: self.dir,
            path,
            log: root.join("calls.log"),
        }
    }
}

pub struct Installed {
    _dir: TempDir,
    pub path: PathBuf,
    log: PathBuf,
}

impl Installed {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Verification calls in the order they were made.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Platforms verified, in call order.
    pub fn platforms_called(&self) -> Vec<String> {
        self.calls()
            .iter()
            .filter_map(|c| c.split_whitespace().next().map(str::to_string))
            .collect()
    }
}
