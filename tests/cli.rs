use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn pagecraft(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pagecraft"))
        .current_dir(dir)
        .env("RUST_LOG", "off")
        .args(args)
        .output()
        .expect("failed to run pagecraft")
}

fn stdout(out: &Output) -> String {
    assert!(
        out.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8_lossy(&out.stdout).trim().to_string()
}

#[test]
fn build_and_export_a_page() {
    let dir = tempfile::tempdir().unwrap();
    let d = dir.path();

    assert_eq!(stdout(&pagecraft(d, &["new", "site", "--title", "Demo"])), "site.wdp");

    let header = stdout(&pagecraft(d, &["add", "site.wdp", "header", "--content", "Hello"]));
    assert_eq!(header, "1");
    stdout(&pagecraft(d, &["add", "site.wdp", "Button"]));
    stdout(&pagecraft(d, &["style", "site.wdp", "1", "font_size=30", "alignment=center"]));
    stdout(&pagecraft(d, &["global", "site.wdp", "--font", "Georgia"]));

    let listing = stdout(&pagecraft(d, &["list", "site.wdp"]));
    assert!(listing.contains("header"));
    assert!(listing.contains("font_size = 30"));

    stdout(&pagecraft(d, &["export", "site.wdp", "out"]));
    let html = fs::read_to_string(d.join("out.html")).unwrap();
    assert!(html.contains("<title>Demo</title>"));
    assert!(html.contains("font-family: Georgia, sans-serif;"));
    assert!(html.contains("font-size:30px;"));
    assert!(html.contains("text-align:center;"));
    assert!(html.contains(">Click Me</button>"));
}

#[test]
fn bad_input_fails_and_keeps_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let d = dir.path();
    stdout(&pagecraft(d, &["new", "p"]));
    stdout(&pagecraft(d, &["add", "p.wdp", "paragraph"]));
    let before = fs::read_to_string(d.join("p.wdp")).unwrap();

    let out = pagecraft(d, &["style", "p.wdp", "1", "font_size=abc"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("font_size"));

    let out = pagecraft(d, &["select", "p.wdp", "42"]);
    assert!(!out.status.success());

    assert_eq!(fs::read_to_string(d.join("p.wdp")).unwrap(), before);
}

#[test]
fn legacy_dump_cannot_be_reopened() {
    let dir = tempfile::tempdir().unwrap();
    let d = dir.path();
    stdout(&pagecraft(d, &["new", "p"]));
    stdout(&pagecraft(d, &["add", "p.wdp", "divider"]));
    stdout(&pagecraft(d, &["legacy", "p.wdp", "old.txt"]));

    let text = fs::read_to_string(d.join("old.txt")).unwrap();
    assert!(text.contains("Element: divider, Content: "));
    assert!(!pagecraft(d, &["list", "old.txt"]).status.success());
}

#[test]
fn fingerprint_is_hex_sha256() {
    let dir = tempfile::tempdir().unwrap();
    let d = dir.path();
    stdout(&pagecraft(d, &["new", "p"]));
    let fp = stdout(&pagecraft(d, &["fingerprint", "p.wdp"]));
    assert_eq!(fp.len(), 64);
    assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
}
