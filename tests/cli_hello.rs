use predicates::prelude::*;

#[test]
fn hello_without_name_prints_world() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("template");
    cmd.args(["hello"])
        .assert()
        .success()
        .stdout("Hello, World!\n");
}

#[test]
fn hello_with_names_prints_them_verbatim() {
    for name in ["olleh", "Mom", ""] {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("template");
        cmd.args(["hello", "--name", name])
            .assert()
            .success()
            .stdout(format!("Hello, {name}!\n"));
    }
}

#[test]
fn rust_log_debug_emits_debug_line_to_stderr() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("template");
    cmd.env("RUST_LOG", "debug")
        .args(["hello"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parsed cli"));
}

#[test]
fn verbose_flag_emits_debug_line_to_stderr() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("template");
    cmd.env_remove("RUST_LOG")
        .args(["-v", "hello"])
        .assert()
        .success()
        .stdout("Hello, World!\n")
        .stderr(predicate::str::contains("parsed cli"));
}
