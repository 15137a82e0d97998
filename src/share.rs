// SPDX-License-Identifier: PMPL-1.0-or-later

//! Share button
//!
//! Three strategies, tried in order: the host's native share sheet, the
//! clipboard (the button briefly shows a confirmation label), and finally
//! a prompt showing the URL for manual copying. The host capabilities sit
//! behind [`ShareHost`].

use crate::render::RenderContext;
use crate::types::non_empty;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// How long the "copied" label stays on the share button.
pub const COPIED_LABEL_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareData {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareData {
    /// Title from the UI table or config, else the current document title;
    /// text from the hero tagline.
    pub fn from_context(ctx: &RenderContext, document_title: &str, url: &str) -> Self {
        let title = ctx.site_title().unwrap_or(document_title).to_string();
        let text = ctx
            .content
            .hero
            .as_ref()
            .and_then(|h| non_empty(&h.tagline))
            .unwrap_or("")
            .to_string();
        Self {
            title,
            text,
            url: url.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("share was cancelled")]
    Cancelled,
    #[error("capability unavailable")]
    Unavailable,
    #[error("{0}")]
    Failed(String),
}

/// Capabilities of the environment hosting the page.
pub trait ShareHost {
    fn supports_native_share(&self) -> bool;
    fn native_share(&mut self, data: &ShareData) -> Result<(), ShareError>;
    fn write_clipboard(&mut self, text: &str) -> Result<(), ShareError>;
    /// Show `message` with `value` pre-filled for manual copying.
    fn prompt(&mut self, message: &str, value: &str);
}

/// A label shown for a while, then replaced by the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientLabel {
    pub shown: String,
    pub restore: String,
    pub revert_after: Duration,
}

impl TransientLabel {
    /// Label to display `elapsed` after the copy.
    pub fn label_at(&self, elapsed: Duration) -> &str {
        if elapsed < self.revert_after {
            &self.shown
        } else {
            &self.restore
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Native,
    /// Native share was attempted and failed (typically cancelled by the
    /// user); nothing else is tried.
    NativeFailed,
    Copied(TransientLabel),
    Prompted { message: String, url: String },
}

/// Button labels and prompt text in the active locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLabels {
    pub share: String,
    pub copied: String,
    pub copy_prompt: String,
}

impl ShareLabels {
    pub fn from_context(ctx: &RenderContext) -> Self {
        let ui = ctx.ui();
        Self {
            share: ui.get_or("share", "Teilen").to_string(),
            copied: ui.get_or("shareCopied", "Link kopiert").to_string(),
            copy_prompt: ui.get_or("copyUrlPrompt", "URL kopieren:").to_string(),
        }
    }
}

pub fn share<H: ShareHost + ?Sized>(
    data: &ShareData,
    labels: &ShareLabels,
    host: &mut H,
) -> ShareOutcome {
    if host.supports_native_share() {
        return match host.native_share(data) {
            Ok(()) => ShareOutcome::Native,
            Err(err) => {
                debug!(error = %err, "native share did not complete");
                ShareOutcome::NativeFailed
            }
        };
    }

    match host.write_clipboard(&data.url) {
        Ok(()) => ShareOutcome::Copied(TransientLabel {
            shown: labels.copied.clone(),
            restore: labels.share.clone(),
            revert_after: COPIED_LABEL_DURATION,
        }),
        Err(err) => {
            warn!(error = %err, "clipboard unavailable, prompting for manual copy");
            host.prompt(&labels.copy_prompt, &data.url);
            ShareOutcome::Prompted {
                message: labels.copy_prompt.clone(),
                url: data.url.clone(),
            }
        }
    }
}

/// Host without any interactive capability: no share sheet, no clipboard,
/// prompts are recorded. The CLI uses it to report what the button does.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    pub prompts: Vec<(String, String)>,
}

impl ShareHost for HeadlessHost {
    fn supports_native_share(&self) -> bool {
        false
    }

    fn native_share(&mut self, _data: &ShareData) -> Result<(), ShareError> {
        Err(ShareError::Unavailable)
    }

    fn write_clipboard(&mut self, _text: &str) -> Result<(), ShareError> {
        Err(ShareError::Unavailable)
    }

    fn prompt(&mut self, message: &str, value: &str) {
        self.prompts.push((message.to_string(), value.to_string()));
    }
}
