//! Rendering a resolved moment as Discord timestamp suggestions.

use tracing::trace;

use crate::relative::{humanize, RelativeTime};
use crate::types::{Moment, ParsedMoment, RenderVariant, Suggestion};

/// Markup token Discord renders as a live timestamp.
#[must_use]
pub fn markup_token(epoch_seconds: i64, variant: RenderVariant) -> String {
    format!("<t:{}:{}>", epoch_seconds, variant.style_code())
}

/// Preview texts for one moment, in the moment's own offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderings {
    pub relative: RelativeTime,
    /// `13:00`
    pub short_time: String,
    /// `30/12/23`
    pub short_date: String,
    /// `December 30, 2023`
    pub long_date: String,
    /// `Saturday`
    pub weekday: String,
}

impl Renderings {
    #[must_use]
    pub fn new(moment: &ParsedMoment, now: &Moment) -> Self {
        let dt = moment.datetime;
        Self {
            relative: humanize(&dt, &now.datetime()),
            short_time: dt.format("%H:%M").to_string(),
            short_date: dt.format("%d/%m/%y").to_string(),
            long_date: dt.format("%B %d, %Y").to_string(),
            weekday: dt.format("%A").to_string(),
        }
    }

    /// `December 30, 2023 at 13:00`
    #[must_use]
    pub fn long_date_short_time(&self) -> String {
        format!("{} at {}", self.long_date, self.short_time)
    }

    /// `Saturday, December 30, 2023 at 13:00`
    #[must_use]
    pub fn long_date_short_time_weekday(&self) -> String {
        format!("{}, {}", self.weekday, self.long_date_short_time())
    }

    /// Preview text for one variant.
    #[must_use]
    pub fn preview(&self, variant: RenderVariant) -> String {
        match variant {
            RenderVariant::Relative => self.relative.to_string(),
            RenderVariant::ShortTime => self.short_time.clone(),
            RenderVariant::ShortDate => self.short_date.clone(),
            RenderVariant::LongDate => self.long_date.clone(),
            RenderVariant::LongDateShortTime => self.long_date_short_time(),
            RenderVariant::LongDateShortTimeWeekday => self.long_date_short_time_weekday(),
        }
    }
}

/// Render the six suggestions for `moment`, in fixed order (R, t, d, D, f, F).
#[must_use]
pub fn format(moment: &ParsedMoment, now: &Moment) -> Vec<Suggestion> {
    let epoch = moment.epoch_seconds();
    let renderings = Renderings::new(moment, now);
    trace!(epoch, relative = %renderings.relative, "render: formatting suggestions");

    RenderVariant::ALL
        .into_iter()
        .map(|variant| Suggestion {
            variant,
            label: variant.label().to_string(),
            preview: renderings.preview(variant),
            markup: markup_token(epoch, variant),
        })
        .collect()
}
