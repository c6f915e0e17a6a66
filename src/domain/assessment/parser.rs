//! Heuristic extraction of structured payloads from generated text.
//!
//! The model is asked for a specific layout but is free-form in practice, so
//! these are best-effort pattern searches, not a grammar: anything that does
//! not match degrades to empty or zero fields instead of failing the turn.
//! Prompt or format changes should only ever touch this module.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Report;

/// A well-formed option line: single letter A-D, period, space, text.
static OPTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-D]\. \S").unwrap());

static SCORE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)chaos score:\s*(\d+)").unwrap());

static ISSUES_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)top\s+\d+\s+operational issues:").unwrap());

/// Cutoff for the issues section: the next "Recommendation" heading.
static RECOMMENDATION_CUT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)recommendation").unwrap());

static RECOMMENDATIONS_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)recommendations:").unwrap());

/// Extracts a question and its options from generated text.
///
/// The first non-blank line is the question. Among the next four non-blank
/// lines, only those matching the option pattern are kept, in generation
/// order; malformed lines are silently dropped, so fewer than four options
/// may come back.
pub fn parse_question(raw: &str) -> (String, Vec<String>) {
    let mut lines = raw.lines().map(str::trim).filter(|line| !line.is_empty());

    let question = lines.next().unwrap_or("").to_string();
    let options = lines
        .take(4)
        .filter(|line| OPTION_RE.is_match(line))
        .map(str::to_string)
        .collect();

    (question, options)
}

/// Extracts a chaos report from generated text.
///
/// Runs three independent searches (score, issues, recommendations), each
/// tolerant of the others being absent or reordered.
pub fn parse_report(raw: &str) -> Report {
    Report {
        score: parse_score(raw),
        top_issues: parse_issues(raw),
        recommendations: parse_recommendations(raw),
    }
}

fn parse_score(raw: &str) -> u32 {
    SCORE_RE
        .captures(raw)
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .map(|score| score.min(100))
        .unwrap_or(0)
}

fn parse_issues(raw: &str) -> Vec<String> {
    let Some(heading) = ISSUES_HEADING_RE.find(raw) else {
        return Vec::new();
    };

    let tail = &raw[heading.end()..];
    let section = match RECOMMENDATION_CUT_RE.find(tail) {
        Some(cut) => &tail[..cut.start()],
        None => tail,
    };
    non_blank_lines(section)
}

fn parse_recommendations(raw: &str) -> Vec<String> {
    match RECOMMENDATIONS_HEADING_RE.find(raw) {
        Some(heading) => non_blank_lines(&raw[heading.end()..]),
        None => Vec::new(),
    }
}

fn non_blank_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
