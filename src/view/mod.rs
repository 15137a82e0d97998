// SPDX-License-Identifier: PMPL-1.0-or-later

//! Declarative page description
//!
//! Renderers never touch a document directly. They emit a [`PagePatch`]
//! (updates addressed by element ID); [`Page`] is the adapter that applies
//! it to the skeleton and serializes HTML. A browser host can apply the
//! same patch to a live DOM instead.

pub mod layout;
pub mod node;
pub mod output;
pub mod page;
pub mod patch;

pub use layout::{ids, skeleton};
pub use node::{Element, Node};
pub use output::ViewFormat;
pub use page::Page;
pub use patch::{PagePatch, Update};
