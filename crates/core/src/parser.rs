//! Input classification: runs the shapes in precedence order.

use tracing::{debug, trace};

use crate::error::{ParseFailure, ParseOutcome};
use crate::shape::{InputShape, ShapeInfo};
use crate::shapes::{DateTimeShape, TimeOnlyShape};
use crate::types::Moment;

/// Ordered list of input shapes.
pub struct Parser {
    shapes: Vec<Box<dyn InputShape>>,
}

impl Parser {
    /// A parser with the built-in shapes: date+time first, then time-only.
    #[must_use]
    pub fn new() -> Self {
        Self {
            shapes: vec![Box::new(DateTimeShape), Box::new(TimeOnlyShape)],
        }
    }

    /// Classify and resolve `raw` against `now`.
    ///
    /// Input is trimmed first. The first shape whose pattern matches decides
    /// the outcome; input no shape matches is `InvalidFormat`.
    pub fn parse(&self, raw: &str, now: &Moment) -> ParseOutcome {
        let input = raw.trim();
        trace!(input_len = input.len(), "parser: classifying input");

        if let Some(shape) = self.shapes.iter().find(|s| s.matches(input)) {
            let outcome = shape.resolve(input, now);
            debug!(shape = shape.id(), ok = outcome.is_ok(), "parser: shape matched");
            return outcome;
        }

        debug!("parser: no shape matched");
        Err(ParseFailure::invalid_format())
    }

    /// Info about the registered shapes, in precedence order.
    #[must_use]
    pub fn shape_infos(&self) -> Vec<ShapeInfo> {
        self.shapes.iter().map(|s| s.info()).collect()
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse with the built-in shapes.
pub fn parse(raw: &str, now: &Moment) -> ParseOutcome {
    Parser::new().parse(raw, now)
}
