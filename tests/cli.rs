use assert_cmd::Command;
use predicates::prelude::*;

fn textbin() -> Command {
    let mut cmd = Command::cargo_bin("textbin").unwrap();
    cmd.env_remove("TEXTBIN_LOG");
    cmd
}

#[test]
fn test_encode_argument() {
    textbin()
        .arg("encode")
        .arg("Halo")
        .assert()
        .success()
        .stdout("01001000 01100001 01101100 01101111\n");
}

#[test]
fn test_encode_nosep() {
    textbin()
        .args(["encode", "Ha", "--nosep"])
        .assert()
        .success()
        .stdout("0100100001100001\n");
}

#[test]
fn test_encode_stdin_keeps_trailing_newline() {
    textbin()
        .arg("encode")
        .write_stdin("A\n")
        .assert()
        .success()
        .stdout("01000001 00001010\n");
}

#[test]
fn test_encode_empty_stdin() {
    textbin()
        .arg("encode")
        .write_stdin("")
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn test_decode_argument() {
    textbin()
        .args(["decode", "01001000 01100001 01101100 01101111"])
        .assert()
        .success()
        .stdout("Halo\n")
        .stderr("");
}

#[test]
fn test_decode_stdin() {
    textbin()
        .arg("decode")
        .write_stdin("0100100001100001\n")
        .assert()
        .success()
        .stdout("Ha\n");
}

#[test]
fn test_decode_invalid_length_exits_2() {
    textbin()
        .args(["decode", "0100"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::starts_with(
            "Error: Binary string length must be multiple of 8",
        ));
}

#[test]
fn test_decode_invalid_digit_exits_2() {
    textbin()
        .args(["decode", "0000000a"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Error: Binary input contains invalid characters: '0000000a'",
        ));
}

#[test]
fn test_decode_invalid_utf8_exits_2() {
    textbin()
        .args(["decode", "11111111 10000000"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Error: Decoded bytes are not valid UTF-8",
        ));
}

#[test]
fn test_round_trip_through_cli() {
    let encoded = textbin()
        .args(["encode", "Halo dunia ☃"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    textbin()
        .arg("decode")
        .write_stdin(encoded)
        .assert()
        .success()
        .stdout("Halo dunia ☃\n");
}

#[test]
fn test_missing_subcommand_fails() {
    textbin()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_help_lists_examples() {
    textbin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("encode").and(predicate::str::contains("decode")))
        .stdout(predicate::str::contains("Examples:"));
}
