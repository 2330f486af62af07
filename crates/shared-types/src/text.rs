//! Text helpers shared by the search rows and the detail pages.

use chrono::{Datelike, NaiveDate};
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

use crate::catalog::WorkSummary;

/// Returned by [`clean_bio_text`] when there is no biography.
pub const NO_DESCRIPTION: &str = "No description";

/// Maximum snippet length, in characters.
pub const SNIPPET_MAX_CHARS: usize = 120;

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s").expect("sentence terminator pattern is valid"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

static PROFESSION: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"\b(actor|actress|director|filmmaker|producer|screenwriter|writer)(?:e?s)?\b")
        .case_insensitive(true)
        .build()
        .expect("profession pattern is valid")
});

// ---------------------------------------------------------------------------
// Biography snippets
// ---------------------------------------------------------------------------

/// Turn a markdown-ish biography into a one-line snippet.
///
/// Bold markers are stripped and every newline form collapses into single
/// spaces. The first sentence is returned when it is shorter than
/// [`SNIPPET_MAX_CHARS`]; otherwise the text is cut at that many characters
/// and an ellipsis marks the cut.
pub fn clean_bio_text(bio: Option<&str>) -> String {
    let Some(bio) = bio.filter(|b| !b.trim().is_empty()) else {
        return NO_DESCRIPTION.to_string();
    };

    let stripped = bio
        .replace("**", "")
        .replace("\\n", " ")
        .replace("\r\n", " ")
        .replace(['\r', '\n'], " ");
    let cleaned = WHITESPACE_RUN.replace_all(&stripped, " ");
    let cleaned = cleaned.trim();

    let first_sentence = SENTENCE_END.split(cleaned).next().unwrap_or_default();
    let sentence_len = first_sentence.chars().count();
    if sentence_len > 0 && sentence_len < SNIPPET_MAX_CHARS {
        if first_sentence.ends_with(['.', '!', '?']) {
            return first_sentence.to_string();
        }
        return format!("{first_sentence}.");
    }

    let head: String = cleaned.chars().take(SNIPPET_MAX_CHARS).collect();
    if cleaned.chars().count() > SNIPPET_MAX_CHARS {
        format!("{head}...")
    } else {
        head
    }
}

/// Secondary line for a work row: "Movie" or "TV Show", plus the year when known.
pub fn work_snippet(work: &WorkSummary) -> String {
    match work.release_year {
        Some(year) => format!("{} · {}", work.work_type.label(), year),
        None => work.work_type.label().to_string(),
    }
}

// ---------------------------------------------------------------------------
// Highlighting
// ---------------------------------------------------------------------------

/// A run of title text, either matching the search term or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSegment {
    pub text: String,
    pub emphasized: bool,
}

impl HighlightSegment {
    fn new(text: &str, emphasized: bool) -> Self {
        Self {
            text: text.to_string(),
            emphasized,
        }
    }
}

/// Split `text` so every case-insensitive occurrence of `term` is its own
/// emphasized segment.
///
/// The term is escaped before it becomes a pattern, so input like `(` or
/// `.*` matches literally. Terms shorter than two characters highlight nothing.
pub fn highlight_segments(text: &str, term: &str) -> Vec<HighlightSegment> {
    if text.is_empty() {
        return Vec::new();
    }
    if !crate::search::is_searchable(term) {
        return vec![HighlightSegment::new(text, false)];
    }

    let Ok(pattern) = RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
    else {
        return vec![HighlightSegment::new(text, false)];
    };

    let mut segments = Vec::new();
    let mut last = 0;
    for found in pattern.find_iter(text) {
        if found.start() > last {
            segments.push(HighlightSegment::new(&text[last..found.start()], false));
        }
        segments.push(HighlightSegment::new(found.as_str(), true));
        last = found.end();
    }
    if last < text.len() {
        segments.push(HighlightSegment::new(&text[last..], false));
    }
    segments
}

// ---------------------------------------------------------------------------
// Role classifier
// ---------------------------------------------------------------------------

/// Best-effort profession label guessed from free-text biography.
///
/// This is a keyword heuristic, not catalog metadata. Both the search rows
/// and the person page use it so the two never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleLabel {
    Actor,
    Director,
    Producer,
    Writer,
    Person,
}

impl RoleLabel {
    /// Upper-case badge text for search rows.
    pub fn badge(&self) -> &'static str {
        match self {
            RoleLabel::Actor => "ACTOR",
            RoleLabel::Director => "DIRECTOR",
            RoleLabel::Producer => "PRODUCER",
            RoleLabel::Writer => "WRITER",
            RoleLabel::Person => "PERSON",
        }
    }

    /// Title-case form for the "Known For" field.
    pub fn known_for(&self) -> &'static str {
        match self {
            RoleLabel::Actor => "Acting",
            RoleLabel::Director => "Directing",
            RoleLabel::Producer => "Production",
            RoleLabel::Writer => "Writing",
            RoleLabel::Person => "Unknown",
        }
    }

    fn from_keyword(keyword: &str) -> Self {
        match keyword.to_lowercase().as_str() {
            "actor" | "actress" => RoleLabel::Actor,
            "director" | "filmmaker" => RoleLabel::Director,
            "producer" => RoleLabel::Producer,
            _ => RoleLabel::Writer,
        }
    }
}

/// Name the most frequent profession keyword in `bio`.
///
/// Ties resolve in the order actor, director, producer, writer.
pub fn infer_role(bio: Option<&str>) -> RoleLabel {
    const ORDER: [RoleLabel; 4] = [
        RoleLabel::Actor,
        RoleLabel::Director,
        RoleLabel::Producer,
        RoleLabel::Writer,
    ];

    let Some(bio) = bio else {
        return RoleLabel::Person;
    };

    let mut counts = [0usize; 4];
    for caps in PROFESSION.captures_iter(bio) {
        let role = RoleLabel::from_keyword(&caps[1]);
        if let Some(slot) = ORDER.iter().position(|r| *r == role) {
            counts[slot] += 1;
        }
    }

    let mut best: Option<(usize, usize)> = None;
    for (slot, count) in counts.iter().copied().enumerate() {
        if count > 0 && best.map_or(true, |(_, c)| count > c) {
            best = Some((slot, count));
        }
    }
    best.map(|(slot, _)| ORDER[slot]).unwrap_or(RoleLabel::Person)
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

fn parse_date(date_str: &str) -> Option<NaiveDate> {
    let head = date_str.get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// Format an ISO date (or datetime) as "May 17, 1980".
///
/// Falls back to the input unchanged when it cannot be parsed.
pub fn format_date(date_str: &str) -> String {
    match parse_date(date_str) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => date_str.to_string(),
    }
}

/// Whole years between `birth_date` and `today`.
pub fn calculate_age(birth_date: &str, today: NaiveDate) -> Option<u32> {
    let born = parse_date(birth_date)?;
    if born > today {
        return None;
    }
    let mut age = today.year() - born.year();
    if (today.month(), today.day()) < (born.month(), born.day()) {
        age -= 1;
    }
    u32::try_from(age).ok()
}
