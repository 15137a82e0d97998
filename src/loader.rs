// SPDX-License-Identifier: PMPL-1.0-or-later

//! Config and content loading
//!
//! Documents are fetched by relative path from a [`DocumentSource`]: a
//! site root on disk, a base URL, or an in-memory map. Fetches happen one
//! after the other; nothing is cached and nothing is retried except the
//! single fallback from a missing locale to the default locale.

use crate::locale::Locale;
use crate::types::{Config, Content};
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Relative path of the config document.
pub const CONFIG_PATH: &str = "data/config.json";

/// Relative path of the content document for `locale`.
pub fn content_path(locale: &Locale) -> String {
    format!("data/content.{}.json", locale.code())
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to load {path}: status {status}")]
    Status { path: String, status: u16 },

    #[error("failed to load {path}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to load {path}")]
    Http {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid JSON in {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("content for default locale {locale} could not be loaded")]
    DefaultLocaleMissing {
        locale: String,
        #[source]
        source: Box<LoadError>,
    },
}

/// Where documents come from.
pub trait DocumentSource {
    /// Raw bytes of the document at `path` (relative, `/`-separated).
    fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadError>;

    /// Human-readable origin, for logs and the build manifest.
    fn describe(&self) -> String;
}

impl<S: DocumentSource + ?Sized> DocumentSource for Box<S> {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadError> {
        (**self).fetch(path)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Site root on the local filesystem.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DocumentSource for FsSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadError> {
        let full = path
            .split('/')
            .fold(self.root.clone(), |acc, segment| acc.join(segment));
        fs::read(&full).map_err(|source| LoadError::Io {
            path: path.to_string(),
            source,
        })
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// Site served over HTTP(S), fetched relative to a base URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }
}

impl DocumentSource for HttpSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadError> {
        let http_err = |source| LoadError::Http {
            path: path.to_string(),
            source,
        };
        let response = self
            .client
            .get(self.url_for(path))
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .send()
            .map_err(http_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.bytes().map_err(http_err)?.to_vec())
    }

    fn describe(&self) -> String {
        self.base.clone()
    }
}

/// Documents held in memory, keyed by path. Records every fetch so callers
/// can tell what was requested.
#[derive(Debug, Default)]
pub struct MemorySource {
    documents: HashMap<String, String>,
    fetched: RefCell<Vec<String>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: &str, body: impl Into<String>) -> Self {
        self.documents.insert(path.to_string(), body.into());
        self
    }

    /// Paths fetched so far, in order, including failed fetches.
    pub fn fetched(&self) -> Vec<String> {
        self.fetched.borrow().clone()
    }

    /// Number of fetches of `path`.
    pub fn fetch_count(&self, path: &str) -> usize {
        self.fetched.borrow().iter().filter(|p| *p == path).count()
    }
}

impl DocumentSource for MemorySource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadError> {
        self.fetched.borrow_mut().push(path.to_string());
        self.documents
            .get(path)
            .map(|body| body.clone().into_bytes())
            .ok_or_else(|| LoadError::Status {
                path: path.to_string(),
                status: 404,
            })
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

/// Fetch and parse a JSON document. A leading UTF-8 byte order mark is
/// dropped.
pub fn load_json<T: DeserializeOwned>(
    source: &dyn DocumentSource,
    path: &str,
) -> Result<T, LoadError> {
    debug!(path, source = %source.describe(), "fetching document");
    let bytes = source.fetch(path)?;
    let (text, _) = encoding_rs::UTF_8.decode_with_bom_removal(&bytes);
    serde_json::from_str(&text).map_err(|source| LoadError::Parse {
        path: path.to_string(),
        source,
    })
}

pub fn load_config(source: &dyn DocumentSource) -> Result<Config, LoadError> {
    load_json(source, CONFIG_PATH)
}

/// Content document plus where it actually came from.
#[derive(Debug, Clone)]
pub struct LoadedContent {
    pub content: Content,
    /// Locale whose document was loaded; the default locale after a fallback.
    pub served: Locale,
    pub fell_back: bool,
}

/// Load the content document for `locale`, falling back to `default` once
/// when it cannot be loaded. A failure for the default locale itself is
/// [`LoadError::DefaultLocaleMissing`].
pub fn load_content_for_locale(
    source: &dyn DocumentSource,
    locale: &Locale,
    default: &Locale,
) -> Result<LoadedContent, LoadError> {
    let missing_default = |err: LoadError| LoadError::DefaultLocaleMissing {
        locale: default.code().to_string(),
        source: Box::new(err),
    };

    match load_json(source, &content_path(locale)) {
        Ok(content) => Ok(LoadedContent {
            content,
            served: locale.clone(),
            fell_back: false,
        }),
        Err(err) if locale != default => {
            warn!(locale = %locale, fallback = %default, error = %err, "content missing, using default locale");
            let content = load_json(source, &content_path(default)).map_err(missing_default)?;
            Ok(LoadedContent {
                content,
                served: default.clone(),
                fell_back: true,
            })
        }
        Err(err) => Err(missing_default(err)),
    }
}
