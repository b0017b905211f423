use std::io::Write;
use std::process::{Command, Output, Stdio};

fn crypto_bmark(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_crypto-bmark"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn crypto-bmark");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin)
        .expect("write stdin");
    child.wait_with_output().expect("wait for crypto-bmark")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn sha256_runs_to_completion() {
    let output = crypto_bmark(&["sha256"], b"\n");
    assert_eq!(output.status.code(), Some(0));

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Start performance measuring tool against the process id: "));
    assert_eq!(lines[1], "Then press [ENTER] key to continue!");
    assert!(lines[2].starts_with("Total time taken for crypto operation: "));
    assert_eq!(
        lines[3],
        "Result: ad7facb2586fc6e966c004d7d1d16b024f5805ff7cb47c7a85dabd8b48892ca7"
    );
}

#[test]
fn every_algorithm_starts() {
    for name in &["sha256", "sha512", "sha3-256"] {
        let output = crypto_bmark(&[*name], b"\xff\n");
        assert_eq!(output.status.code(), Some(0), "{}", name);
        assert!(stdout(&output).contains("Result: "));
    }
}

#[test]
fn help_exits_zero() {
    let output = crypto_bmark(&["--help"], b"");
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("sha256"));
}

#[test]
fn version_exits_zero() {
    let output = crypto_bmark(&["foo", "-V"], b"");
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("crypto-bmark version "));
}

#[test]
fn usage_errors_exit_two() {
    assert_eq!(crypto_bmark(&[], b"").status.code(), Some(2));
    assert_eq!(crypto_bmark(&["md5"], b"").status.code(), Some(2));
    assert_eq!(crypto_bmark(&["sha256", "extra"], b"").status.code(), Some(2));
}
