//! Compiled marker token sets.
//!
//! Token lists from the dialect are compiled once per parser into
//! case-insensitive regular expressions anchored at a word start, so
//! `"day"` matches `"DAYS"` but not `"Friday"`.

use regex::{Match, Regex};
use roster_model::{MarkerTokens, Shift};

use crate::error::{IngestError, Result};

/// A compiled set of alternative tokens. An empty set never matches.
#[derive(Debug, Clone)]
pub struct TokenSet {
    regex: Option<Regex>,
}

impl TokenSet {
    /// Compiles `tokens`; `name` identifies the set in error messages.
    pub fn compile(name: &str, tokens: &[String]) -> Result<Self> {
        let regex = alternation(tokens)
            .map(|alt| Regex::new(&format!("(?i){alt}")))
            .transpose()
            .map_err(|err| IngestError::pattern(name, err))?;
        Ok(Self { regex })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|regex| regex.is_match(text))
    }

    /// First occurrence of any token.
    pub fn find<'t>(&self, text: &'t str) -> Option<Match<'t>> {
        self.find_at(text, 0)
    }

    /// First occurrence starting at or after byte offset `start`.
    pub fn find_at<'t>(&self, text: &'t str, start: usize) -> Option<Match<'t>> {
        self.regex.as_ref()?.find_at(text, start)
    }

    /// Text following each occurrence, up to the next occurrence.
    ///
    /// The remainder of the word a token ends in is skipped, so a `pct`
    /// token yields `": Ann"` for `"PCTs: Ann"`.
    pub fn segments<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let Some(regex) = &self.regex else {
            return Vec::new();
        };
        let bounds: Vec<(usize, usize)> = regex
            .find_iter(text)
            .map(|m| (m.start(), word_end(text, m.end())))
            .collect();
        bounds
            .iter()
            .enumerate()
            .map(|(i, (_, end))| {
                let next = bounds.get(i + 1).map_or(text.len(), |(start, _)| *start);
                &text[*end..next.max(*end)]
            })
            .collect()
    }
}

fn word_end(text: &str, from: usize) -> usize {
    text[from..]
        .find(|ch: char| !(ch.is_alphanumeric() || ch == '_'))
        .map_or(text.len(), |offset| from + offset)
}

/// Non-capturing alternation of the escaped tokens, or `None` when no
/// token is usable.
pub(crate) fn alternation(tokens: &[String]) -> Option<String> {
    let parts: Vec<String> = tokens
        .iter()
        .map(|token| token.trim())
        .filter(|token| !token.is_empty())
        .map(token_pattern)
        .collect();
    if parts.is_empty() {
        return None;
    }
    Some(format!("(?:{})", parts.join("|")))
}

fn token_pattern(token: &str) -> String {
    let body = token
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    let word_start = token
        .chars()
        .next()
        .is_some_and(|ch| ch.is_alphanumeric() || ch == '_');
    if word_start {
        format!(r"\b{body}")
    } else {
        body
    }
}

/// All marker sets of a dialect, compiled.
#[derive(Debug, Clone)]
pub struct Markers {
    pub room: TokenSet,
    pub patient: TokenSet,
    pub float: TokenSet,
    pub respiratory: TokenSet,
    pub charge: TokenSet,
    pub support_staff: TokenSet,
    day_shift: TokenSet,
    night_shift: TokenSet,
}

impl Markers {
    pub fn compile(tokens: &MarkerTokens) -> Result<Self> {
        Ok(Self {
            room: TokenSet::compile("room", &tokens.room)?,
            patient: TokenSet::compile("patient", &tokens.patient)?,
            float: TokenSet::compile("float", &tokens.float)?,
            respiratory: TokenSet::compile("respiratory", &tokens.respiratory)?,
            charge: TokenSet::compile("charge", &tokens.charge)?,
            support_staff: TokenSet::compile("support_staff", &tokens.support_staff)?,
            day_shift: TokenSet::compile("day_shift", &tokens.day_shift)?,
            night_shift: TokenSet::compile("night_shift", &tokens.night_shift)?,
        })
    }

    pub fn shift(&self, shift: Shift) -> &TokenSet {
        match shift {
            Shift::Day => &self.day_shift,
            Shift::Night => &self.night_shift,
        }
    }

    /// Shifts whose marker appears in `text`.
    pub fn shifts_in(&self, text: &str) -> Vec<Shift> {
        Shift::ALL
            .into_iter()
            .filter(|shift| self.shift(*shift).is_match(text))
            .collect()
    }

    /// True when `text` opens a footer section.
    pub fn is_footer(&self, text: &str) -> bool {
        self.float.is_match(text) || self.respiratory.is_match(text)
    }

    /// Matches `text` against both shift sets at its very start.
    pub fn leading_shift(&self, text: &str) -> Option<usize> {
        Shift::ALL.into_iter().find_map(|shift| {
            self.shift(shift)
                .find(text)
                .filter(|m| m.start() == 0)
                .map(|m| m.end())
        })
    }
}
