use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

fn portfolio_site() -> Command {
    let mut cmd = Command::cargo_bin("portfolio-site").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn toml_site() -> Command {
    let mut cmd = Command::cargo_bin("toml-site").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_dump_data_stdout_is_json() {
    for args in [vec!["--dump-data"], vec!["--dump-data", "--verbose"]] {
        let output = portfolio_site().args(&args).output().unwrap();
        assert!(output.status.success());

        let json: Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["profile"]["name"], "Basheer Ahmed");
        assert!(!json["flagship_projects"].as_array().unwrap().is_empty());
    }
}

#[test]
fn test_json_logs_go_to_stderr() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("site");

    let output = portfolio_site()
        .args(["--json-logs", "--output-path"])
        .arg(&out)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(out.join("index.html").exists());

    let stderr = String::from_utf8(output.stderr).unwrap();
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    assert!(!lines.is_empty());
    for line in lines {
        let event: Value = serde_json::from_str(line).unwrap();
        assert!(event["level"].is_string());
    }

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Site written to"));
}

#[test]
fn test_unknown_section_flag_is_rejected() {
    portfolio_site()
        .args(["--sections", "home,blog"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("blog"));
}

#[test]
fn test_toml_site_output_override() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("site.toml");
    std::fs::write(
        &config_path,
        r#"
[output]
path = "./never-written"
sections = ["Projects", "CONTACT"]
manifest = false
"#,
    )
    .unwrap();
    let out = dir.path().join("override");

    toml_site()
        .arg("--config")
        .arg(&config_path)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    assert!(out.join("projects.html").exists());
    assert!(out.join("contact.html").exists());
    assert!(!out.join("index.html").exists());
    assert!(!out.join("manifest.json").exists());
    assert!(!dir.path().join("never-written").exists());
}

#[test]
fn test_toml_site_dry_run_writes_nothing() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("dist");
    let config_path = dir.path().join("site.toml");
    std::fs::write(
        &config_path,
        format!(
            r#"
[output]
path = "{}"

[[events]]
type = "select"
section = "Skills"
"#,
            out.display().to_string().replace('\\', "/")
        ),
    )
    .unwrap();

    toml_site()
        .arg("--config")
        .arg(&config_path)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("index.html"))
        .stdout(predicate::str::contains("snapshot.html -> skills"));

    assert!(!out.exists());
}

#[test]
fn test_toml_site_missing_output_path() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("site.toml");
    std::fs::write(&config_path, "[site]\nname = \"portfolio\"\n").unwrap();

    toml_site()
        .arg("--config")
        .arg(&config_path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("output.path"));
}
