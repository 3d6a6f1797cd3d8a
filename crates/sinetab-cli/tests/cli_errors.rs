use std::process::{Command, Output};

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sinetab-cli"))
}

fn run_fail(cmd: &mut Command) -> Output {
    let out = cmd.output().expect("spawn command");
    assert!(
        !out.status.success(),
        "command unexpectedly succeeded\nstdout:\n{}",
        String::from_utf8_lossy(&out.stdout)
    );
    out
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn prefactor_above_one_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never.txt");
    let out = run_fail(cli().args(["generate", "--prefactor", "1.01", "--output", path.to_str().unwrap()]));
    assert!(stderr(&out).contains("invalid amplitude"), "{}", stderr(&out));
    assert!(!path.exists(), "no file should be written on invalid input");
}

#[test]
fn zero_and_negative_prefactor_rejected() {
    for k in ["--prefactor=0", "--prefactor=-0.5"] {
        let out = run_fail(cli().args(["inspect", k]));
        assert!(stderr(&out).contains("invalid amplitude"), "{k}: {}", stderr(&out));
    }
}

#[test]
fn unknown_format_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("x.txt");
    let out = run_fail(cli().args(["generate", "--format", "hex", "--output", path.to_str().unwrap()]));
    assert!(stderr(&out).contains("unknown --format"), "{}", stderr(&out));
}

#[test]
fn bin_to_stdout_rejected() {
    let out = run_fail(cli().args(["generate", "--format", "bin", "--output", "-"]));
    assert!(stderr(&out).contains("requires --output"), "{}", stderr(&out));
}

#[test]
fn unwritable_destination_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("sinedata.txt");
    let out = run_fail(cli().args(["generate", "--output", path.to_str().unwrap()]));
    assert!(stderr(&out).contains("missing-dir"), "{}", stderr(&out));
}
