use assert_cmd::Command;

pub fn nonepad_cmd() -> Command {
    let mut cmd = Command::cargo_bin("nonepad").unwrap();
    cmd.env_remove("NONEPAD_DATA_DIR");
    cmd
}
