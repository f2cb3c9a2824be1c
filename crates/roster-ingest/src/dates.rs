//! Shift date recovery from free text.
//!
//! Patterns are tried in priority order: weekday-prefixed long form
//! (`Friday, April 4th, 2025`), ISO (`2025-04-04`), then slash
//! (`4/4/25`, `4/4/2025`). Resolution never fails: when nothing parses,
//! the caller's clock supplies today's date.

use std::sync::LazyLock;

use chrono::{Datelike, Local, NaiveDate};
use regex::{Captures, Regex};
use roster_model::DatePatterns;

use crate::error::{IngestError, Result};

/// Source of "today" for the no-date fallback.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the running system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Two-digit years below this pivot land in the 2000s, the rest in the 1900s.
const TWO_DIGIT_YEAR_PIVOT: i32 = 50;

#[derive(Debug, Clone, Copy)]
enum DateForm {
    Long,
    Iso,
    Slash,
}

/// Compiled date patterns of one dialect.
#[derive(Debug, Clone)]
pub struct DateResolver {
    weekday: Regex,
    ordinal_suffix: Regex,
    forms: Vec<(DateForm, Regex)>,
}

static DEFAULT_RESOLVER: LazyLock<DateResolver> = LazyLock::new(|| {
    DateResolver::compile(&DatePatterns::default()).expect("default date patterns compile")
});

impl DateResolver {
    /// Compiles and checks the dialect's date patterns.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::InvalidPattern`] when a pattern does not
    /// compile or lacks its required capture groups.
    pub fn compile(patterns: &DatePatterns) -> Result<Self> {
        let ordinal_suffix = compile_pattern("ordinal_suffix", &patterns.ordinal_suffix)?;
        if ordinal_suffix.captures_len() < 2 {
            return Err(IngestError::pattern(
                "ordinal_suffix",
                "pattern must capture the digit kept before the suffix",
            ));
        }
        let forms = vec![
            (DateForm::Long, date_pattern("long_form", &patterns.long_form)?),
            (DateForm::Iso, date_pattern("iso", &patterns.iso)?),
            (DateForm::Slash, date_pattern("slash", &patterns.slash)?),
        ];
        Ok(Self {
            weekday: compile_pattern("weekday", &patterns.weekday)?,
            ordinal_suffix,
            forms,
        })
    }

    /// True when `text` mentions a weekday, hinting that it carries the date.
    pub fn mentions_weekday(&self, text: &str) -> bool {
        self.weekday.is_match(text)
    }

    /// First date found in `text`, by pattern priority.
    ///
    /// A candidate that matches a pattern but is not a real calendar date
    /// (e.g. `February 30th`) is passed over in favor of later candidates.
    pub fn find(&self, text: &str) -> Option<NaiveDate> {
        self.forms.iter().find_map(|(form, regex)| {
            regex
                .captures_iter(text)
                .find_map(|caps| self.interpret(*form, &caps))
        })
    }

    /// Canonical `YYYY-MM-DD` date from `text`, or today's date per `clock`.
    pub fn resolve(&self, text: &str, clock: &dyn Clock) -> String {
        format_date(self.find(text).unwrap_or_else(|| clock.today()))
    }

    fn interpret(&self, form: DateForm, caps: &Captures<'_>) -> Option<NaiveDate> {
        let year_text = caps.name("year")?.as_str();
        let month_text = caps.name("month")?.as_str();
        let day_text = caps.name("day")?.as_str();

        let day_text = self.ordinal_suffix.replace_all(day_text, "$1");
        let day: u32 = day_text.trim().parse().ok()?;
        let month = match form {
            DateForm::Long => month_from_name(month_text)?,
            DateForm::Iso | DateForm::Slash => month_text.parse().ok()?,
        };
        let mut year: i32 = year_text.parse().ok()?;
        if year_text.len() == 2 {
            year += if year < TWO_DIGIT_YEAR_PIVOT { 2000 } else { 1900 };
        }
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

fn compile_pattern(name: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|err| IngestError::pattern(name, err))
}

fn date_pattern(name: &str, pattern: &str) -> Result<Regex> {
    let regex = compile_pattern(name, pattern)?;
    for group in ["year", "month", "day"] {
        if !regex.capture_names().flatten().any(|n| n == group) {
            return Err(IngestError::pattern(
                name,
                format!("pattern must define a named group `{group}`"),
            ));
        }
    }
    Ok(regex)
}

/// Month number from an English month name or abbreviation.
fn month_from_name(name: &str) -> Option<u32> {
    let lower = name.trim().trim_end_matches('.').to_lowercase();
    let prefix = lower.get(..3)?;
    let index = MONTHS.iter().position(|month| *month == prefix)?;
    Some(index as u32 + 1)
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// [`DateResolver::find`] with the default dialect's patterns.
pub fn find_date(text: &str) -> Option<NaiveDate> {
    DEFAULT_RESOLVER.find(text)
}

/// [`DateResolver::resolve`] with the default dialect's patterns.
pub fn resolve_date(text: &str, clock: &dyn Clock) -> String {
    DEFAULT_RESOLVER.resolve(text, clock)
}
