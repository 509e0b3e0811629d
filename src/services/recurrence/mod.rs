//! Recurrence expansion.
//!
//! Turns a repeating template into the finite list of concrete occurrences,
//! one independent draft record per date. Expansion is deterministic: the
//! same template and ceiling always produce the same sequence, so a series
//! can be regenerated exactly.

use chrono::NaiveDate;

use crate::error::{CalendarError, Result};
use crate::models::event::Event;
use crate::models::repeat::RepeatType;

mod daily;
mod monthly;
mod utils;
mod weekly;
mod yearly;

/// Safety bound applied when a repeating template carries no end date, so
/// generation can never run unbounded. Callers pick the actual ceiling;
/// this default preserves the application's year-end cutoff.
pub fn default_expansion_ceiling() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 31).expect("year-end 2025 is a valid date")
}

/// Expand a repeating template into its occurrence sequence.
///
/// The template's own date is always the first occurrence, even when it
/// already lies past the rule's end date (a late-created template still
/// yields that single occurrence). Generation stops once a candidate would
/// pass the rule's end date or `ceiling`, whichever comes first.
pub fn expand(template: &Event, ceiling: NaiveDate) -> Result<Vec<Event>> {
    template.validate()?;
    if !template.repeat.is_repeating() {
        return Err(CalendarError::Validation(
            "expand requires a repeating template".into(),
        ));
    }

    let interval = template.repeat.interval;
    let end = utils::effective_end(template.repeat.end_date, ceiling);
    let dates = match template.repeat.repeat_type {
        RepeatType::Daily => daily::generate(template.date, interval, end),
        RepeatType::Weekly => weekly::generate(template.date, interval, end),
        RepeatType::Monthly => monthly::generate(template.date, interval, end),
        RepeatType::Yearly => yearly::generate(template.date, interval, end),
        RepeatType::None => Vec::new(), // unreachable, guarded above
    };

    log::debug!(
        "expanded {:?} template starting {} into {} occurrence(s)",
        template.repeat.repeat_type,
        template.date,
        dates.len()
    );

    Ok(dates
        .into_iter()
        .map(|date| utils::occurrence_on(template, date))
        .collect())
}

/// [`expand`] with the default year-end ceiling.
pub fn expand_with_default_ceiling(template: &Event) -> Result<Vec<Event>> {
    expand(template, default_expansion_ceiling())
}
