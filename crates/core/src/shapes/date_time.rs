//! Date and time shape: `2023-12-30 13:00`, `2023-12-30T13:00:15+02:00`.

use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, trace};

use crate::error::{ParseFailure, ParseOutcome};
use crate::resolver::resolve_iso_like;
use crate::shape::{InputShape, ShapeInfo};
use crate::types::{Moment, MomentOrigin, ParsedMoment};

pub struct DateTimeShape;

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(concat!(
            r"^([0-9]{4}-[0-9]{2}-[0-9]{2})[ T]([0-9]{2}):([0-9]{2})(:[0-9]{2})?",
            r"(Z|[+-][0-9]{2}:[0-9]{2})?$"
        ))
        .expect("date-time pattern compiles")
    })
}

impl InputShape for DateTimeShape {
    fn id(&self) -> &'static str {
        "date-time"
    }

    fn name(&self) -> &'static str {
        "Date and time"
    }

    fn info(&self) -> ShapeInfo {
        ShapeInfo {
            id: self.id(),
            name: self.name(),
            description: "Calendar date and time, optional seconds and UTC offset",
            examples: &[
                "2023-12-30 13:00",
                "2023-12-30T13:00:15",
                "2023-12-30T13:00Z",
                "2023-12-30 13:00+02:00",
            ],
        }
    }

    fn matches(&self, input: &str) -> bool {
        pattern().is_match(input)
    }

    fn resolve(&self, input: &str, now: &Moment) -> ParseOutcome {
        let Some(caps) = pattern().captures(input) else {
            trace!("date-time: rejected - pattern mismatch");
            return Err(ParseFailure::invalid_format());
        };
        let explicit_offset = caps.get(5).is_some();

        match resolve_iso_like(input, now.zone()) {
            Ok(datetime) => {
                debug!(%datetime, explicit_offset, "date-time: resolved");
                Ok(ParsedMoment {
                    datetime,
                    origin: MomentOrigin::DateTime { explicit_offset },
                })
            }
            Err(err) => {
                debug!(error = %err, "date-time: matched but failed to resolve");
                Err(ParseFailure::from(err))
            }
        }
    }
}
