//! High score table
//!
//! Exactly [`HIGH_SCORE_COUNT`] entries, kept sorted by descending score.
//! The text form is one `score<TAB>name` line per entry; parsing is lenient
//! and backfills anything it cannot read from the built-in defaults.

use std::fmt;

use crate::types::{Score, HIGH_SCORE_COUNT, MAX_NAME_LEN};

/// Printable ASCII range accepted in names
pub const NAME_CHARS: std::ops::RangeInclusive<char> = ' '..='~';

const DEFAULTS: [(Score, &str); HIGH_SCORE_COUNT] = [
    (200_000, "God-like"),
    (150_000, "Super-human"),
    (100_000, "Olympian"),
    (75_000, "Elite"),
    (50_000, "Outstanding"),
    (25_000, "Exceeds Expectations"),
    (10_000, "Acceptable"),
    (5_000, "Poor"),
    (2_500, "Dreadful"),
    (1_000, "Troll"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScore {
    pub score: Score,
    pub name: String,
}

impl HighScore {
    pub fn new(score: Score, name: &str) -> Self {
        Self {
            score,
            name: sanitize_name(name),
        }
    }
}

/// Keep printable ASCII only, without leading spaces, truncated to
/// [`MAX_NAME_LEN`] characters
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter(|c| NAME_CHARS.contains(c))
        .skip_while(|c| c.is_ascii_whitespace())
        .take(MAX_NAME_LEN)
        .collect()
}

/// Parse one `score<whitespace>name` line.
///
/// Returns `None` when the line does not start with a score.
pub fn parse_line(line: &str) -> Option<HighScore> {
    let line = line.trim_end_matches(['\r', '\n']);
    let digits_end = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    let score = line[..digits_end].parse::<Score>().ok()?;
    let name = line[digits_end..].trim_start();
    Some(HighScore::new(score, name))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreTable {
    entries: Vec<HighScore>,
}

impl HighScoreTable {
    /// The built-in table used when no saved scores exist
    pub fn defaults() -> Self {
        Self {
            entries: DEFAULTS
                .iter()
                .map(|&(score, name)| HighScore::new(score, name))
                .collect(),
        }
    }

    /// Build a table from up to [`HIGH_SCORE_COUNT`] entries.
    ///
    /// Missing slots are filled from the defaults (in slot order), extra
    /// entries are dropped, and the result is sorted descending.
    pub fn from_entries(entries: impl IntoIterator<Item = HighScore>) -> Self {
        let mut table: Vec<HighScore> = entries.into_iter().take(HIGH_SCORE_COUNT).collect();
        let have = table.len();
        table.extend(
            DEFAULTS[have..]
                .iter()
                .map(|&(score, name)| HighScore::new(score, name)),
        );
        // Stable: equal scores keep their file order.
        table.sort_by(|a, b| b.score.cmp(&a.score));
        Self { entries: table }
    }

    /// Parse the text form. Lines that do not start with a score are
    /// reported through `on_skip` with their 1-based line number.
    pub fn parse_with(text: &str, mut on_skip: impl FnMut(usize, &str)) -> Self {
        let mut parsed = Vec::with_capacity(HIGH_SCORE_COUNT);
        for (n, line) in text.lines().enumerate() {
            if parsed.len() == HIGH_SCORE_COUNT {
                break;
            }
            match parse_line(line) {
                Some(entry) => parsed.push(entry),
                None => on_skip(n + 1, line),
            }
        }
        Self::from_entries(parsed)
    }

    pub fn parse(text: &str) -> Self {
        Self::parse_with(text, |_, _| {})
    }

    pub fn entries(&self) -> &[HighScore] {
        &self.entries
    }

    pub fn lowest(&self) -> Score {
        self.entries.last().map_or(0, |e| e.score)
    }

    /// Strictly greater than the lowest entry
    pub fn is_qualifying(&self, score: Score) -> bool {
        score > self.lowest()
    }

    /// Insert a qualifying score. Lower entries shift down one slot and the
    /// last one is evicted. Returns the slot the new entry landed in.
    ///
    /// # Panics
    ///
    /// Panics if `score` does not qualify.
    pub fn insert(&mut self, score: Score, name: &str) -> usize {
        assert!(
            self.is_qualifying(score),
            "score {score} does not beat the lowest high score"
        );
        // Ties rank below the existing entry.
        let slot = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(slot, HighScore::new(score, name));
        self.entries.truncate(HIGH_SCORE_COUNT);
        slot
    }
}

impl Default for HighScoreTable {
    fn default() -> Self {
        Self::defaults()
    }
}

impl fmt::Display for HighScoreTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}\t{}", entry.score, entry.name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sorted() {
        let table = HighScoreTable::defaults();
        assert_eq!(table.entries().len(), HIGH_SCORE_COUNT);
        assert!(table.entries().windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(table.lowest(), 1000);
    }

    #[test]
    fn test_parse_line_keeps_spaces_in_name() {
        let entry = parse_line("25000\tExceeds Expectations\n").unwrap();
        assert_eq!(entry.score, 25000);
        assert_eq!(entry.name, "Exceeds Expectations");
    }

    #[test]
    fn test_parse_line_rejects_missing_score() {
        assert_eq!(parse_line("Troll\t1000"), None);
        assert_eq!(parse_line(""), None);
    }

    #[test]
    fn test_sanitize_name_caps_length() {
        let name = sanitize_name("abcdefghijklmnopqrstuvwxyz\u{7f}");
        assert_eq!(name, "abcdefghijklmnopqrst");
    }

    #[test]
    fn test_sanitize_name_drops_leading_spaces() {
        assert_eq!(sanitize_name("  Bob "), "Bob ");
        assert_eq!(sanitize_name("   "), "");
        assert_eq!(HighScore::new(10, " Bob"), parse_line("10\t Bob").unwrap());
    }

    #[test]
    fn test_short_input_backfills_from_defaults() {
        let table = HighScoreTable::parse("300000\tMe\n");
        assert_eq!(table.entries()[0], HighScore::new(300_000, "Me"));
        // Slot 0 was supplied, so the first default is the one dropped.
        assert_eq!(table.entries()[1].name, "Super-human");
        assert_eq!(table.entries().len(), HIGH_SCORE_COUNT);
    }

    #[test]
    fn test_insert_shifts_and_evicts() {
        let mut table = HighScoreTable::defaults();
        let slot = table.insert(60_000, "New");
        assert_eq!(slot, 4);
        assert_eq!(table.entries()[4].name, "New");
        assert_eq!(table.entries()[5].name, "Outstanding");
        assert_eq!(table.lowest(), 2500);
    }

    #[test]
    #[should_panic]
    fn test_insert_rejects_non_qualifying() {
        HighScoreTable::defaults().insert(1000, "Nope");
    }
}
