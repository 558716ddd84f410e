//! Integration test: Verify binary prints correct version

use std::process::Command;

#[test]
fn binary_prints_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_rsearch"))
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "Expected output to contain version '{}', but got: {}",
        env!("CARGO_PKG_VERSION"),
        stdout
    );
}

#[test]
fn binary_rejects_invalid_relay_flag() {
    let output = Command::new(env!("CARGO_BIN_EXE_rsearch"))
        .args(["--relay", "http://not-a-relay.example"])
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success(), "Invalid relay URL must fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("ws://"),
        "Error should name the expected scheme: {stderr}"
    );
}
