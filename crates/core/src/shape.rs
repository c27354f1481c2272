//! Input shape trait definition.

use crate::error::ParseOutcome;
use crate::types::Moment;

/// Metadata about an input shape for help/documentation.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ShapeInfo {
    /// Unique identifier (e.g., "date-time")
    pub id: &'static str,
    /// Human-readable name (e.g., "Date and time")
    pub name: &'static str,
    /// Short description
    pub description: &'static str,
    /// Example input strings
    pub examples: &'static [&'static str],
}

/// A recognisable input shape: a syntactic pattern plus its resolution.
///
/// Shapes are tried in a fixed order. The first one whose pattern matches
/// owns the input, even if resolution then fails.
pub trait InputShape: Send + Sync {
    /// Unique identifier for this shape (e.g., "time-only").
    fn id(&self) -> &'static str;

    /// Human-readable name.
    fn name(&self) -> &'static str;

    /// Get shape metadata for help/documentation.
    fn info(&self) -> ShapeInfo {
        ShapeInfo {
            id: self.id(),
            name: self.name(),
            description: "",
            examples: &[],
        }
    }

    /// Check the pattern only.
    fn matches(&self, input: &str) -> bool;

    /// Resolve a trimmed input against `now`.
    ///
    /// Only called after [`matches`](Self::matches) accepted the input; a
    /// failure here is final and no later shape is tried.
    fn resolve(&self, input: &str, now: &Moment) -> ParseOutcome;
}
