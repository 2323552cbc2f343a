use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn nquads_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_nquads"))
}

fn tmp_dir(name: &str) -> PathBuf {
    let mut base = std::env::temp_dir();
    base.push(format!("nquads-cli-{}-{}", name, std::process::id()));
    if base.exists() {
        let _ = fs::remove_dir_all(&base);
    }
    fs::create_dir_all(&base).expect("create tmp dir");
    base
}

const VALID: &str = "<http://a> <http://b> \"c\" <http://g> .\n\
                     # comment\n\
                     <http://a> <http://b> \"d\" .\n";

#[test]
fn validate_counts_statements() {
    let dir = tmp_dir("validate");
    let file = dir.join("ok.nq");
    fs::write(&file, VALID).expect("write nq");

    let out = Command::new(nquads_bin())
        .arg("validate")
        .arg(&file)
        .output()
        .expect("run nquads");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("2 statements"), "stdout: {}", stdout);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn validate_rejects_bad_input() {
    let dir = tmp_dir("invalid");
    let file = dir.join("bad.nq");
    fs::write(&file, "<http://a> <http://b> .\n").expect("write nq");

    let out = Command::new(nquads_bin())
        .arg("validate")
        .arg(&file)
        .output()
        .expect("run nquads");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("failed to parse"), "stderr: {}", stderr);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn dump_roundtrips() {
    let dir = tmp_dir("dump");
    let file = dir.join("ok.nq");
    fs::write(&file, VALID).expect("write nq");

    let out = Command::new(nquads_bin())
        .arg("dump")
        .arg(&file)
        .output()
        .expect("run nquads");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.lines().count(), 2);
    assert!(stdout.contains("<http://g>"), "stdout: {}", stdout);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn load_reports_counts() {
    let dir = tmp_dir("load");
    let file = dir.join("ok.nq");
    fs::write(&file, VALID).expect("write nq");

    let out = Command::new(nquads_bin())
        .arg("load")
        .arg(&file)
        .output()
        .expect("run nquads");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("2 quads"), "stdout: {}", stdout);
    assert!(stdout.contains("1 named graph"), "stdout: {}", stdout);

    let _ = fs::remove_dir_all(&dir);
}
