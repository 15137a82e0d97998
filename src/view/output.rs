// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization of render output for inspection

use super::page::Page;
use super::patch::PagePatch;
use anyhow::Result;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewFormat {
    /// The patch as JSON
    Json,
    /// The patch as YAML
    Yaml,
    /// The patched page as an HTML document
    Html,
}

impl ViewFormat {
    pub fn serialize(&self, patch: &PagePatch) -> Result<String> {
        match self {
            ViewFormat::Json => Ok(serde_json::to_string_pretty(patch)?),
            ViewFormat::Yaml => Ok(serde_yaml::to_string(patch)?),
            ViewFormat::Html => {
                let mut page = Page::new();
                page.apply(patch);
                Ok(page.to_html())
            }
        }
    }
}
