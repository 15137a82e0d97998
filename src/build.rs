// SPDX-License-Identifier: PMPL-1.0-or-later

//! Static build: one HTML page per configured locale
//!
//! Loads the config document once, renders every available locale
//! (`index.html` for the default locale, `index.<code>.html` for the
//! rest), copies the site's `assets/` tree next to the pages and records
//! everything written in `build-manifest.json`.

use crate::loader::{load_config, load_content_for_locale, DocumentSource, FsSource, HttpSource};
use crate::locale::{Locale, LocaleSet};
use crate::render::{render_page, RenderContext};
use anyhow::{Context, Result};
use colored::*;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

pub const MANIFEST_FILE: &str = "build-manifest.json";
pub const ASSETS_DIR: &str = "assets";

/// Configuration for a build run
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Site root holding `data/` and `assets/`
    pub site_root: PathBuf,
    /// Fetch documents from this base URL instead of `site_root`
    pub base_url: Option<String>,
    /// Directory the pages are written to
    pub output: PathBuf,
}

impl BuildConfig {
    pub fn source(&self) -> Box<dyn DocumentSource> {
        match &self.base_url {
            Some(url) => Box::new(HttpSource::new(url)),
            None => Box::new(FsSource::new(&self.site_root)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageEntry {
    pub locale: Locale,
    pub path: String,
    pub sha256: String,
    /// Rendered from the default locale's content
    pub fell_back: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    pub path: String,
    pub sha256: String,
    pub bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildManifest {
    pub created_at: String,
    pub source: String,
    pub default_locale: Locale,
    pub pages: Vec<PageEntry>,
    pub assets: Vec<FileEntry>,
}

/// Output file name of the page for `locale`.
pub fn page_file_name(locale: &Locale, default: &Locale) -> String {
    if locale == default {
        "index.html".to_string()
    } else {
        format!("index.{}.html", locale.code())
    }
}

pub fn build_site(config: &BuildConfig) -> Result<BuildManifest> {
    let source = config.source();
    let site_config = load_config(&*source)
        .with_context(|| format!("Failed to load site configuration from {}", source.describe()))?;
    let locales = LocaleSet::from_config(&site_config);
    let default = locales.default_locale();

    fs::create_dir_all(&config.output).with_context(|| {
        format!("Failed to create output directory {}", config.output.display())
    })?;

    let mut pages = Vec::new();
    for locale in locales.available() {
        let loaded = load_content_for_locale(&*source, locale, default)
            .with_context(|| format!("Failed to load content for locale {}", locale))?;
        let ctx = RenderContext::new(&site_config, &loaded.content, locale, &locales);
        let html = render_page(&ctx).to_html();

        let name = page_file_name(locale, default);
        let path = config.output.join(&name);
        fs::write(&path, &html).with_context(|| format!("Failed to write {}", path.display()))?;
        info!(locale = %locale, page = %name, fell_back = loaded.fell_back, "page written");

        pages.push(PageEntry {
            locale: locale.clone(),
            path: name,
            sha256: sha256_hex(html.as_bytes()),
            fell_back: loaded.fell_back,
        });
    }

    let assets = if config.base_url.is_some() {
        debug!("remote source, no assets to copy");
        Vec::new()
    } else {
        copy_assets(&config.site_root.join(ASSETS_DIR), &config.output.join(ASSETS_DIR))?
    };

    let manifest = BuildManifest {
        created_at: chrono::Utc::now().to_rfc3339(),
        source: source.describe(),
        default_locale: default.clone(),
        pages,
        assets,
    };
    write_manifest(&manifest, &config.output.join(MANIFEST_FILE))?;
    Ok(manifest)
}

/// Copy every file under `from` to the same relative path under `to`.
fn copy_assets(from: &Path, to: &Path) -> Result<Vec<FileEntry>> {
    if !from.is_dir() {
        warn!(dir = %from.display(), "no assets directory, skipping");
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(from)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(from)?;
        let target = to.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        let bytes = fs::read(entry.path())
            .with_context(|| format!("Failed to read asset {}", entry.path().display()))?;
        fs::write(&target, &bytes)
            .with_context(|| format!("Failed to write asset {}", target.display()))?;

        entries.push(FileEntry {
            path: format!("{}/{}", ASSETS_DIR, slash_path(relative)),
            sha256: sha256_hex(&bytes),
            bytes: bytes.len() as u64,
        });
    }
    debug!(count = entries.len(), "assets copied");
    Ok(entries)
}

fn slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

pub fn write_manifest(manifest: &BuildManifest, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Print a summary of the build to the terminal
pub fn print_summary(manifest: &BuildManifest, output: &Path) {
    println!("\n{}", "=== MEMORIAL SITE BUILD ===".bold().cyan());
    println!("  Source: {}", manifest.source);
    println!("  Output: {}", output.display());
    println!();
    println!("{}", "PAGES".bold().yellow());
    for page in &manifest.pages {
        let marker = if page.locale == manifest.default_locale {
            " (default)".dimmed().to_string()
        } else {
            String::new()
        };
        let status = if page.fell_back {
            "fallback content".yellow()
        } else {
            "ok".green()
        };
        println!(
            "  {:<4} {:<18} {}{}  {}",
            page.locale.code(),
            page.path,
            status,
            marker,
            page.sha256.get(..12).unwrap_or(&page.sha256)
        );
    }
    println!();
    println!(
        "{} {} file(s), {} byte(s)",
        "ASSETS".bold().yellow(),
        manifest.assets.len(),
        manifest.assets.iter().map(|a| a.bytes).sum::<u64>()
    );
}
