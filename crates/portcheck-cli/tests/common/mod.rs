//! Fake `go` command for CLI tests.
//!
//! `tool dist list` prints a canned matrix; verification runs replay a
//! per-platform exit status and stderr and append `<GOOS>/<GOARCH> <args>`
//! to `calls.log`.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use tempfile::TempDir;

pub struct FakeGo {
    dir: TempDir,
    pub path: PathBuf,
    log: PathBuf,
}

impl FakeGo {
    /// `responses` maps `os/arch` to `(status, stderr)`.
    pub fn install(dist_list: &str, responses: &[(&str, i32, &str)]) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let root = dir.path();
        fs::write(root.join("dist-list"), dist_list).expect("write dist list");

        let mut cases = String::new();
        for (i, (platform, status, stderr)) in responses.iter().enumerate() {
            let file = root.join(format!("stderr-{i}"));
            fs::write(&file, stderr).expect("write stderr fixture");
            cases.push_str(&format!(
                "  {platform}) cat '{}' >&2; exit {status};;\n",
                file.display()
            ));
        }

        let log = root.join("calls.log");
        let script = format!(
            "#!/bin/sh\n\
             if [ \"$1\" = tool ]; then cat '{list}'; exit 0; fi\n\
             echo \"$GOOS/$GOARCH $*\" >> '{log}'\n\
             case \"$GOOS/$GOARCH\" in\n\
             {cases}\
             esac\n\
             exit 0\n",
            list = root.join("dist-list").display(),
            log = log.display(),
        );

        let path = root.join("go");
        fs::write(&path, script).expect("write fake go");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod fake go");

        Self { dir, path, log }
    }

    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
