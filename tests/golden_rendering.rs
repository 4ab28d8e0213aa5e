use std::fs;
use std::path::PathBuf;

use pagecraft::{fingerprint, ElementKind, GlobalStylesPatch, Page, StyleKey, StylePatch};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

fn showcase_page() -> Page {
    let mut page = Page::new();
    for kind in ElementKind::ALL {
        page.add_element(kind);
    }
    let first = page.list_elements()[0].id();
    page.update_content(first, "Showcase").unwrap();
    page.update_styles(
        first,
        &StylePatch::new()
            .with(StyleKey::Alignment, "center")
            .with(StyleKey::Padding, 8),
    )
    .unwrap();
    page.update_global_styles(GlobalStylesPatch::default().font_family("Verdana"));
    page
}

#[test]
fn golden_showcase_matches_fixture() {
    let digest = fingerprint(&showcase_page());

    let expected_path = golden_path("showcase.sha256");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, &digest).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    if !expected_path.exists() {
        println!(
            "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
            expected_path
        );
        return;
    }

    let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
    assert_eq!(hex::decode(exp.trim()).expect("invalid hex in golden").len(), 32);
    assert_eq!(digest, exp.trim());
}

#[test]
fn fingerprint_tracks_content_changes() {
    let page = showcase_page();
    let mut edited = page.clone();
    let first = edited.list_elements()[0].id();
    edited.update_content(first, "Showcase!").unwrap();

    assert_eq!(fingerprint(&page), fingerprint(&page.clone()));
    assert_ne!(fingerprint(&page), fingerprint(&edited));
}
