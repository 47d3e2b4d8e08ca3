use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;

const COURSE: &str = "# Title\n\nSome text.\n";

#[test]
fn renders_stdin_to_html() {
    let mut cmd = cargo_bin_cmd!("bmd");
    cmd.write_stdin(COURSE);
    cmd.assert()
        .success()
        .stdout("<H1 id=\"title\">Title</H1>\n<p>Some text.</p>\n");
}

#[test]
fn dash_reads_stdin() {
    let mut cmd = cargo_bin_cmd!("bmd");
    cmd.arg("-").write_stdin("- a\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("<ul>\n<li mark=\"-\">"));
}

#[test]
fn renders_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cours.bmd");
    fs::write(&path, COURSE).unwrap();

    let mut cmd = cargo_bin_cmd!("bmd");
    cmd.arg(&path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<p>Some text.</p>"));
}

#[test]
fn line_numbers_flag() {
    let mut cmd = cargo_bin_cmd!("bmd");
    cmd.arg("-n").write_stdin(COURSE);
    cmd.assert()
        .success()
        .stdout("0001\t<H1 id=\"title\">Title</H1>\n0003\t<p>Some text.</p>\n");
}

#[test]
fn json_format() {
    let mut cmd = cargo_bin_cmd!("bmd");
    cmd.args(["--format", "json"]).write_stdin(COURSE);
    cmd.assert().success().stdout(
        predicate::str::contains("\"type\": \"section_title\"")
            .and(predicate::str::contains("\"type\": \"paragraph\"")),
    );
}

#[test]
fn treeviz_format() {
    let mut cmd = cargo_bin_cmd!("bmd");
    cmd.args(["-f", "treeviz"]).write_stdin(COURSE);
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("⧉ Document"));
}

#[test]
fn unknown_format_is_a_usage_error() {
    let mut cmd = cargo_bin_cmd!("bmd");
    cmd.args(["-f", "pdf"]).write_stdin(COURSE);
    cmd.assert().failure().stderr(predicate::str::contains("pdf"));
}

#[test]
fn output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("cours.html");

    let mut cmd = cargo_bin_cmd!("bmd");
    cmd.arg("-o").arg(&out).write_stdin(COURSE);
    cmd.assert().success().stdout("");

    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "<H1 id=\"title\">Title</H1>\n<p>Some text.</p>\n"
    );
}

#[test]
fn missing_input_file_fails() {
    let mut cmd = cargo_bin_cmd!("bmd");
    cmd.arg("/nonexistent/cours.bmd");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot read /nonexistent/cours.bmd"));
}

#[test]
fn missing_config_file_fails() {
    let mut cmd = cargo_bin_cmd!("bmd");
    cmd.args(["-c", "/nonexistent/bmd.toml"]).write_stdin(COURSE);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("configuration error"));
}

#[test]
fn config_file_selects_format() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[output]\nformat = \"json\"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("bmd");
    cmd.arg("-c").arg(&config).write_stdin(COURSE);
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("["));
}

#[test]
fn flags_override_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[output]\nformat = \"json\"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("bmd");
    cmd.arg("-c")
        .arg(&config)
        .args(["-f", "html"])
        .write_stdin(COURSE);
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("<H1"));
}

#[test]
fn local_bmd_toml_is_picked_up() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bmd.toml"), "[output]\nline_numbers = true\n").unwrap();

    let mut cmd = cargo_bin_cmd!("bmd");
    cmd.current_dir(dir.path()).write_stdin(COURSE);
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("0001\t"));
}

#[test]
fn tab_width_flag_changes_indentation() {
    let source = "Remarque:\n  - a\n    b\n";

    let mut narrow = cargo_bin_cmd!("bmd");
    narrow.args(["-t", "2"]).write_stdin(source);
    narrow
        .assert()
        .success()
        .stdout(predicate::str::contains("<p>a\nb</p>"));

    let mut default = cargo_bin_cmd!("bmd");
    default.write_stdin(source);
    default
        .assert()
        .success()
        .stdout(predicate::str::contains("<p>a\nb</p>").not());
}

#[test]
fn zero_tab_width_is_rejected() {
    let mut cmd = cargo_bin_cmd!("bmd");
    cmd.args(["-t", "0"]).write_stdin(COURSE);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("parsing.tab_width"));
}
