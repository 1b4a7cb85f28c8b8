use assert_cmd::Command;
use predicates::str::contains;

const SETUP_DOCUMENT: &str = r#"{
  "type": "root",
  "children": [
    {"type": "heading", "tag": "h2", "children": [{"type": "text", "text": "Setup"}]},
    {"type": "paragraph", "children": [
      {"type": "text", "text": "Run "},
      {"type": "link", "url": "https://x.io", "children": [{"type": "text", "text": "this"}]}
    ]}
  ]
}"#;

fn richdoc() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("richdoc"));
    cmd.env("RUST_LOG", "error");
    cmd
}

#[test]
fn render_reads_stdin_and_prints_html() {
    richdoc()
        .arg("render")
        .write_stdin(SETUP_DOCUMENT)
        .assert()
        .success()
        .stdout(
            "<h2 id=\"setup\">Setup</h2><p>Run <a href=\"https://x.io\" target=\"_self\" rel=\"noopener\">this</a></p>\n",
        );
}

#[test]
fn render_writes_fixture_to_output_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("landing_page.json");
    let output = dir.path().join("landing_page.html");
    std::fs::write(&input, include_str!("fixtures/landing_page.json")).expect("write input");

    richdoc()
        .arg("render")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout("");

    let html = std::fs::read_to_string(&output).expect("read output");
    assert_eq!(html, include_str!("fixtures/landing_page.html").trim_end());
}

#[test]
fn render_json_includes_metrics() {
    let assert = richdoc()
        .args(["render", "--format", "json", "-"])
        .write_stdin(SETUP_DOCUMENT)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let document: serde_json::Value = serde_json::from_str(&stdout).expect("json output");
    assert_eq!(document["metrics"]["external_links_count"], 1);
    assert_eq!(document["headings"][0]["id"], "setup");
    assert_eq!(
        document["resource_hints"]["dns_prefetch_domains"][0],
        "https://x.io"
    );
}

#[test]
fn headings_outline_is_nested_json() {
    let document = r#"{"type": "root", "children": [
        {"type": "heading", "tag": "h2", "children": [{"type": "text", "text": "FAQ"}]},
        {"type": "heading", "tag": "h3", "children": [{"type": "text", "text": "Billing"}]}
    ]}"#;

    let assert = richdoc()
        .args(["headings", "--outline"])
        .write_stdin(document)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let outline: serde_json::Value = serde_json::from_str(&stdout).expect("json output");
    assert_eq!(outline[0]["heading"]["id"], "faq");
    assert_eq!(outline[0]["children"][0]["heading"]["id"], "billing");
}

#[test]
fn unique_anchor_override_suffixes_repeats() {
    let document = r#"{"type": "root", "children": [
        {"type": "heading", "children": [{"type": "text", "text": "FAQ"}]},
        {"type": "heading", "children": [{"type": "text", "text": "FAQ"}]}
    ]}"#;

    richdoc()
        .args(["render", "--unique-anchors", "true"])
        .write_stdin(document)
        .assert()
        .success()
        .stdout(contains("<h2 id=\"faq\">FAQ</h2><h2 id=\"faq-2\">FAQ</h2>"));
}

#[test]
fn null_document_renders_nothing() {
    richdoc()
        .arg("render")
        .write_stdin("null")
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn invalid_json_fails_with_data_error() {
    richdoc()
        .arg("render")
        .write_stdin("{\"type\": ")
        .assert()
        .code(65)
        .stderr(contains("document is not valid JSON"));
}

#[test]
fn missing_input_fails_with_noinput() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("absent.json");

    richdoc()
        .arg("render")
        .arg(&missing)
        .assert()
        .code(66)
        .stderr(contains("absent.json"));
}

#[test]
fn zero_reading_speed_is_rejected() {
    richdoc()
        .args(["render", "--words-per-minute", "0"])
        .write_stdin(SETUP_DOCUMENT)
        .assert()
        .code(78)
        .stderr(contains("render.words_per_minute"));
}
