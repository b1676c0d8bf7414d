use assert_cmd::Command;
use std::path::Path;

pub fn confessor_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("confessor").unwrap();
    cmd.env("CONFESSOR_HOME", home);
    cmd.env_remove("RUST_LOG");
    cmd
}
