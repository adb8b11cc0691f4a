use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const UNUSED_LOCAL: &str = "func main() {\n    var x = 1;\n    return 0;\n}\n";

fn tarnc(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tarnc"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run tarnc")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn build_with_default_policy_warns_and_writes_object() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("main.tn"), UNUSED_LOCAL).unwrap();

    let output = tarnc(&["build", "main.tn", "-o", "main.tobj"], dir.path());

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("declared and not used: x"));
    let object = fs::read_to_string(dir.path().join("main.tobj")).unwrap();
    assert!(object.contains("func main/0"));
}

#[test]
fn build_with_deny_unused_fails_without_object() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("main.tn"), UNUSED_LOCAL).unwrap();

    let output = tarnc(&["build", "main.tn", "-o", "main.tobj", "--deny-unused"], dir.path());

    assert!(!output.status.success());
    assert!(stderr(&output).contains("declared and not used: x"));
    assert!(!dir.path().join("main.tobj").exists());
}

#[test]
fn vet_is_lenient_unless_strict() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.tn"), "import \"fmt\";\nfunc main() { return 0; }\n").unwrap();
    fs::write(dir.path().join("b.tn"), UNUSED_LOCAL).unwrap();

    let lenient = tarnc(&["vet", "a.tn", "b.tn"], dir.path());
    assert!(lenient.status.success(), "stderr: {}", stderr(&lenient));
    assert!(stderr(&lenient).contains("\"fmt\" imported and not used"));

    let strict = tarnc(&["vet", "--strict", "a.tn", "b.tn"], dir.path());
    assert!(!strict.status.success());
    assert!(stderr(&strict).contains("2 个文件有错误"));
}

#[test]
fn check_reports_hard_errors_regardless_of_policy() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bad.tn"), "func main() { return y; }\n").unwrap();

    let output = tarnc(&["check", "--warn-unused", "bad.tn"], dir.path());

    assert!(!output.status.success());
    assert!(stderr(&output).contains("undefined variable 'y'"));
}

#[test]
fn conflicting_unused_flags_are_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("main.tn"), UNUSED_LOCAL).unwrap();

    let output = tarnc(&["build", "main.tn", "--warn-unused", "--deny-unused"], dir.path());

    assert_eq!(output.status.code(), Some(2));
    assert!(!dir.path().join("a.tobj").exists());
}
