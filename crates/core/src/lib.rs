//! dtime Core
//!
//! Turns typed date/time text into Discord timestamp markup (`<t:1703941200:R>`)
//! together with a preview of how each of Discord's six styles will render.
//!
//! # Quick Start
//!
//! ```
//! use chrono::DateTime;
//! use dtime_core::{DiscordTime, Moment, SuggestionItem};
//!
//! let dtime = DiscordTime::new();
//! let now = Moment::fixed(DateTime::parse_from_rfc3339("2023-12-30T10:00:00Z").unwrap());
//!
//! let items = dtime.suggest("2023-12-30T13:00Z", &now);
//! assert_eq!(items.len(), 6);
//!
//! // Relative timestamp first, then t, d, D, f, F
//! let SuggestionItem::Result(relative) = &items[0] else { panic!("expected a result") };
//! assert_eq!(relative.preview, "in 3 hours");
//! assert_eq!(relative.markup, "<t:1703941200:R>");
//! ```
//!
//! # Errors
//!
//! Unrecognised or impossible input yields a single error item instead of
//! results:
//!
//! ```
//! use chrono::DateTime;
//! use dtime_core::{DiscordTime, Moment};
//!
//! let dtime = DiscordTime::new();
//! let now = Moment::fixed(DateTime::parse_from_rfc3339("2023-12-30T10:00:00Z").unwrap());
//!
//! let items = dtime.suggest("25:00", &now);
//! assert_eq!(items.len(), 1);
//! assert_eq!(items[0].label(), "Parse error");
//! ```

pub mod error;
pub mod parser;
pub mod plugin;
pub mod relative;
pub mod render;
pub mod resolver;
pub mod shape;
pub mod shapes;
pub mod types;

pub use error::{ExecuteError, FailureKind, ParseFailure, ParseOutcome, ResolveError};
pub use parser::{parse, Parser};
pub use plugin::{CatalogItem, Clipboard, ItemCategory, Plugin, PluginConfig};
pub use relative::{humanize, RelativeBucket, RelativeTime};
pub use render::{format, markup_token, Renderings};
pub use resolver::resolve_iso_like;
pub use shape::{InputShape, ShapeInfo};
pub use types::*;

use tracing::debug;

/// Main entry point: parse an input and render its suggestions.
pub struct DiscordTime {
    parser: Parser,
}

impl DiscordTime {
    /// Create an instance with the built-in input shapes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
        }
    }

    /// Classify and resolve `input` against `now`.
    pub fn parse(&self, input: &str, now: &Moment) -> ParseOutcome {
        self.parser.parse(input, now)
    }

    /// Full suggestion cycle for one input.
    ///
    /// Blank input yields no items, a failure yields one error item, and a
    /// successful parse yields six result items in style order `R t d D f F`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::DateTime;
    /// use dtime_core::{DiscordTime, Moment};
    ///
    /// let now = Moment::fixed(DateTime::parse_from_rfc3339("2024-03-10T09:30:45Z").unwrap());
    /// assert!(DiscordTime::new().suggest("  ", &now).is_empty());
    /// ```
    #[must_use]
    pub fn suggest(&self, input: &str, now: &Moment) -> Vec<SuggestionItem> {
        if input.trim().is_empty() {
            return vec![];
        }

        match self.parse(input, now) {
            Ok(moment) => {
                debug!(epoch = moment.epoch_seconds(), "suggest: rendering");
                render::format(&moment, now)
                    .into_iter()
                    .map(SuggestionItem::Result)
                    .collect()
            }
            Err(failure) => {
                debug!(kind = ?failure.kind, message = %failure.message, "suggest: parse failed");
                let target = match failure.kind {
                    FailureKind::InvalidFormat => failure.kind.label().to_string(),
                    FailureKind::SemanticError => failure.message.clone(),
                };
                vec![SuggestionItem::Error {
                    label: failure.kind.label().to_string(),
                    message: failure.message,
                    target,
                }]
            }
        }
    }

    /// Get info about the recognised input shapes (for help/documentation).
    #[must_use]
    pub fn shape_infos(&self) -> Vec<ShapeInfo> {
        self.parser.shape_infos()
    }
}

impl Default for DiscordTime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use pretty_assertions::assert_eq;

    fn now() -> Moment {
        Moment::fixed(DateTime::parse_from_rfc3339("2024-03-10T09:30:45Z").unwrap())
    }

    #[test]
    fn test_semantic_error_item_carries_message() {
        let items = DiscordTime::new().suggest("2023-02-30 10:00", &now());
        assert_eq!(items.len(), 1);
        let SuggestionItem::Error {
            label,
            message,
            target,
        } = &items[0]
        else {
            panic!("expected error item, got {:?}", items[0]);
        };
        assert_eq!(label, "Parse error");
        assert!(!message.is_empty());
        assert_eq!(target, message);
    }

    #[test]
    fn test_invalid_input_item() {
        let items = DiscordTime::new().suggest("next tuesday", &now());
        assert_eq!(
            items,
            vec![SuggestionItem::Error {
                label: "Invalid input".to_string(),
                message: error::INVALID_FORMAT_MESSAGE.to_string(),
                target: "Invalid input".to_string(),
            }]
        );
    }

    #[test]
    fn test_results_never_mixed_with_errors() {
        let items = DiscordTime::new().suggest("13:00", &now());
        assert_eq!(items.len(), 6);
        assert!(items.iter().all(|i| !i.is_error()));
    }

    #[test]
    fn test_same_epoch_in_every_token() {
        let items = DiscordTime::new().suggest("2023-12-30 13:00:15+01:00", &now());
        let epoch = "1703937615";
        for item in &items {
            let SuggestionItem::Result(s) = item else {
                panic!("unexpected error item");
            };
            assert_eq!(
                s.markup,
                format!("<t:{}:{}>", epoch, s.variant.style_code())
            );
        }
    }
}
