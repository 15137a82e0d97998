// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for the static build

use memorial_site::build::{self, BuildConfig, BuildManifest, MANIFEST_FILE};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_site(root: &Path, with_english: bool) {
    fs::create_dir_all(root.join("data")).unwrap();
    fs::create_dir_all(root.join("assets/css")).unwrap();
    fs::create_dir_all(root.join("assets/img")).unwrap();
    fs::write(
        root.join("data/config.json"),
        r#"{ "siteTitle": "Gedenken", "locales": ["de", "en"] }"#,
    )
    .unwrap();
    fs::write(
        root.join("data/content.de.json"),
        r#"{ "hero": { "name": "Alex", "tagline": "Unvergessen" } }"#,
    )
    .unwrap();
    if with_english {
        fs::write(
            root.join("data/content.en.json"),
            r#"{ "hero": { "name": "Alex", "tagline": "Never forgotten" } }"#,
        )
        .unwrap();
    }
    fs::write(root.join("assets/css/style.css"), "body { margin: 0; }").unwrap();
    fs::write(root.join("assets/img/alex.jpg"), [0xFFu8, 0xD8, 0xFF]).unwrap();
}

fn config(site: &Path, output: &Path) -> BuildConfig {
    BuildConfig {
        site_root: site.to_path_buf(),
        base_url: None,
        output: output.to_path_buf(),
    }
}

#[test]
fn test_build_writes_page_per_locale() {
    let site = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_site(site.path(), true);

    let manifest = build::build_site(&config(site.path(), out.path())).expect("build should succeed");

    let paths: Vec<&str> = manifest.pages.iter().map(|p| p.path.as_str()).collect();
    assert_eq!(paths, vec!["index.html", "index.en.html"]);
    assert!(manifest.pages.iter().all(|p| !p.fell_back));

    let de = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(de.starts_with("<!DOCTYPE html>"));
    assert!(de.contains("<html lang=\"de\""));
    assert!(de.contains("Unvergessen"));

    let en = fs::read_to_string(out.path().join("index.en.html")).unwrap();
    assert!(en.contains("<html lang=\"en\""));
    assert!(en.contains("Never forgotten"));
    assert_eq!(manifest.pages[1].sha256, build::sha256_hex(en.as_bytes()));
}

#[test]
fn test_build_copies_assets_with_fingerprints() {
    let site = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_site(site.path(), true);

    let manifest = build::build_site(&config(site.path(), out.path())).unwrap();

    let assets: Vec<&str> = manifest.assets.iter().map(|a| a.path.as_str()).collect();
    assert_eq!(assets, vec!["assets/css/style.css", "assets/img/alex.jpg"]);
    assert_eq!(
        fs::read(out.path().join("assets/img/alex.jpg")).unwrap(),
        vec![0xFF, 0xD8, 0xFF]
    );
    assert_eq!(manifest.assets[1].bytes, 3);
    assert_eq!(
        manifest.assets[0].sha256,
        build::sha256_hex(b"body { margin: 0; }")
    );
}

#[test]
fn test_build_manifest_on_disk_matches() {
    let site = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_site(site.path(), true);

    let manifest = build::build_site(&config(site.path(), out.path())).unwrap();
    let raw = fs::read_to_string(out.path().join(MANIFEST_FILE)).unwrap();
    let on_disk: BuildManifest = serde_json::from_str(&raw).unwrap();
    assert_eq!(on_disk, manifest);
    assert_eq!(on_disk.default_locale.code(), "de");
    assert!(chrono::DateTime::parse_from_rfc3339(&on_disk.created_at).is_ok());
}

#[test]
fn test_build_missing_locale_uses_default_content() {
    let site = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_site(site.path(), false);

    let manifest = build::build_site(&config(site.path(), out.path())).unwrap();
    assert!(manifest.pages[1].fell_back);

    let en = fs::read_to_string(out.path().join("index.en.html")).unwrap();
    assert!(en.contains("<html lang=\"en\""));
    assert!(en.contains("Unvergessen"));
}

#[test]
fn test_build_without_config_fails() {
    let site = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    let err = build::build_site(&config(site.path(), out.path())).unwrap_err();
    assert!(format!("{:#}", err).contains("site configuration"));
}

#[test]
fn test_build_without_assets_dir() {
    let site = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_site(site.path(), true);
    fs::remove_dir_all(site.path().join("assets")).unwrap();

    let manifest = build::build_site(&config(site.path(), out.path())).unwrap();
    assert!(manifest.assets.is_empty());
    assert_eq!(manifest.pages.len(), 2);
}
