#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn quire_cmd() -> Command {
    let mut cmd = Command::cargo_bin("quire").unwrap();
    cmd.env_remove("QUIRE_ROOT");
    cmd.env_remove("QUIRE_LOG");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}

/// Run quire inside `dir` and return stdout, failing the test on a non-zero exit
pub fn quire_stdout(dir: &Path, args: &[&str]) -> String {
    let output = quire_cmd().current_dir(dir).args(args).output().unwrap();
    assert!(
        output.status.success(),
        "quire {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

pub fn init_store(dir: &Path) {
    quire_cmd().arg("init").arg(dir).assert().success();
}
