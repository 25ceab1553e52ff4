#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A project directory with a scripted stand-in for npm
///
/// The script prints `outdated.txt` for `npm outdated` (exiting 1 like npm
/// does when the table is non-empty), appends every install argument to
/// `installs.log`, and fails installs listed in `fail.txt`.
pub struct FakeNpm {
    pub dir: TempDir,
}

impl FakeNpm {
    pub fn new(outdated: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let fake = Self { dir };
        fake.write("outdated.txt", outdated);
        fake.write("fail.txt", "");
        fake.write_script();
        fake
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn script_path(&self) -> PathBuf {
        self.dir.path().join("fake-npm.sh")
    }

    /// Make `npm install <spec>` exit non-zero
    pub fn fail_install(&self, spec: &str) {
        self.write("fail.txt", &format!("{spec}\n"));
    }

    /// Make the bare `npm install` sync step exit non-zero
    pub fn fail_sync(&self) {
        self.write("fail-sync.txt", "");
    }

    /// Install arguments in call order (the bare sync call excluded)
    pub fn installs(&self) -> Vec<String> {
        fs::read_to_string(self.dir.path().join("installs.log"))
            .unwrap_or_default()
            .lines()
            .map(String::from)
            .collect()
    }

    /// Every npm subcommand seen, in order
    pub fn commands(&self) -> Vec<String> {
        fs::read_to_string(self.dir.path().join("commands.log"))
            .unwrap_or_default()
            .lines()
            .map(String::from)
            .collect()
    }

    fn write(&self, name: &str, content: &str) {
        fs::write(self.dir.path().join(name), content).expect("Failed to write file");
    }

    fn write_script(&self) {
        let dir = self.dir.path().display();
        let script = format!(
            r#"#!/bin/sh
echo "$*" >> "{dir}/commands.log"
case "$1" in
  outdated)
    cat "{dir}/outdated.txt"
    if [ -s "{dir}/outdated.txt" ]; then exit 1; fi
    ;;
  install)
    if [ -z "$2" ]; then
      if [ -e "{dir}/fail-sync.txt" ]; then
        echo "npm error code EUSAGE" >&2
        exit 1
      fi
      exit 0
    fi
    echo "$2" >> "{dir}/installs.log"
    if grep -qxF "$2" "{dir}/fail.txt"; then
      echo "npm error notarget No matching version found for $2" >&2
      exit 1
    fi
    echo "npm warn deprecated something@1.0.0" >&2
    ;;
esac
exit 0
"#
        );

        let path = self.script_path();
        fs::write(&path, script).expect("Failed to write fake npm");
        let mut perms = fs::metadata(&path).expect("Failed to stat fake npm").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("Failed to chmod fake npm");
    }
}

pub fn sample_outdated() -> &'static str {
    "Package  Current  Wanted  Latest\nfoo  1.0.0  1.0.0  2.0.0\nbar  1.0.0  1.1.0  1.1.0\n"
}
