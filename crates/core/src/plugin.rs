//! Launcher host integration.
//!
//! A launcher registers the keyword item returned by [`Plugin::on_catalog`],
//! forwards the text typed after that keyword to [`Plugin::on_suggest`], and
//! calls [`Plugin::on_execute`] when the user picks a suggestion.

use serde::{Deserialize, Serialize};
use tracing::{error, info, trace};

use crate::error::ExecuteError;
use crate::types::{Moment, RenderVariant, SuggestionItem};
use crate::DiscordTime;

/// Text sink for copying a picked markup token.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// How the plugin presents itself in the launcher catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Keyword that activates the plugin (the catalog item's target).
    pub keyword: String,
    pub item_label: String,
    pub description: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            keyword: "dtime".to_string(),
            item_label: "DiscordTime:".to_string(),
            description: "Generate discord timestamp".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    /// Catalog entry that takes arguments.
    Keyword,
    /// A rendered timestamp; executing it copies the markup.
    Result,
    /// An inline error; executing it does nothing.
    Error,
}

/// A launcher item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogItem {
    pub category: ItemCategory,
    pub label: String,
    pub short_desc: String,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<RenderVariant>,
}

impl From<SuggestionItem> for CatalogItem {
    fn from(item: SuggestionItem) -> Self {
        match item {
            SuggestionItem::Result(suggestion) => Self {
                category: ItemCategory::Result,
                label: suggestion.label,
                short_desc: suggestion.preview,
                target: suggestion.markup,
                variant: Some(suggestion.variant),
            },
            SuggestionItem::Error {
                label,
                message,
                target,
            } => Self {
                category: ItemCategory::Error,
                label,
                short_desc: message,
                target,
                variant: None,
            },
        }
    }
}

/// The launcher-facing plugin.
pub struct Plugin {
    config: PluginConfig,
    engine: DiscordTime,
}

impl Plugin {
    #[must_use]
    pub fn new(config: PluginConfig) -> Self {
        Self {
            config,
            engine: DiscordTime::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    /// The plugin's keyword entry.
    #[must_use]
    pub fn keyword_item(&self) -> CatalogItem {
        CatalogItem {
            category: ItemCategory::Keyword,
            label: self.config.item_label.clone(),
            short_desc: self.config.description.clone(),
            target: self.config.keyword.clone(),
            variant: None,
        }
    }

    /// Items to register in the launcher catalog.
    #[must_use]
    pub fn on_catalog(&self) -> Vec<CatalogItem> {
        vec![self.keyword_item()]
    }

    /// Suggestions for `user_input` typed after the keyword.
    ///
    /// Returns nothing unless the input is non-empty and the chain starts with
    /// this plugin's keyword item.
    #[must_use]
    pub fn on_suggest(
        &self,
        user_input: &str,
        items_chain: &[CatalogItem],
        now: &Moment,
    ) -> Vec<CatalogItem> {
        let Some(head) = items_chain.first() else {
            trace!("plugin: empty items chain");
            return vec![];
        };
        if head.category != ItemCategory::Keyword || head.target != self.config.keyword {
            trace!(keyword = %head.target, "plugin: chain is not ours");
            return vec![];
        }

        self.engine
            .suggest(user_input, now)
            .into_iter()
            .map(CatalogItem::from)
            .collect()
    }

    /// Copy a picked result's markup token to the clipboard.
    ///
    /// Keyword and error items are ignored.
    pub fn on_execute(
        &self,
        item: &CatalogItem,
        clipboard: &mut dyn Clipboard,
    ) -> Result<(), ExecuteError> {
        if item.category != ItemCategory::Result {
            trace!(category = ?item.category, "plugin: nothing to execute");
            return Ok(());
        }

        match clipboard.set_text(&item.target) {
            Ok(()) => {
                info!(markup = %item.target, "Copied to clipboard");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to execute");
                Err(ExecuteError::Clipboard(e.to_string()))
            }
        }
    }
}

impl Default for Plugin {
    fn default() -> Self {
        Self::new(PluginConfig::default())
    }
}
