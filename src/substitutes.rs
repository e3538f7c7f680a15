//! Ordered substitution tables for artist and title tags.
//!
//! Each table is applied front to back in a single pass: every rule replaces
//! all of its non-overlapping matches before the next rule runs, and no rule
//! is re-applied afterwards. Later rules rely on earlier ones, so the order
//! inside a table is part of its meaning.

use once_cell::sync::Lazy;
use regex::Regex;

// ============================================================================
// RULE TYPE
// ============================================================================

/// What a substitution rule looks for.
#[derive(Debug)]
pub enum Pattern {
    Literal(&'static str),
    Regex(Regex),
}

/// A single `(pattern, replacement)` rule.
#[derive(Debug)]
pub struct SubstitutionRule {
    pub pattern: Pattern,
    pub replacement: &'static str,
}

impl SubstitutionRule {
    pub fn literal(pattern: &'static str, replacement: &'static str) -> Self {
        Self {
            pattern: Pattern::Literal(pattern),
            replacement,
        }
    }

    /// Build a regex rule. Replacement may reference groups as `${1}`.
    pub fn regex(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Pattern::Regex(Regex::new(pattern).unwrap()),
            replacement,
        }
    }

    /// Replace every match of this rule in `text`.
    /// An empty literal pattern matches nothing.
    pub fn apply(&self, text: &str) -> String {
        match &self.pattern {
            Pattern::Literal("") => text.to_string(),
            Pattern::Literal(literal) => text.replace(literal, self.replacement),
            Pattern::Regex(regex) => regex.replace_all(text, self.replacement).into_owned(),
        }
    }
}

/// Apply an ordered list of rules to `text`, one full pass per rule.
pub fn apply_rules(rules: &[SubstitutionRule], text: &str) -> String {
    rules
        .iter()
        .fold(text.to_string(), |result, rule| rule.apply(&result))
}

// ============================================================================
// TABLES
// ============================================================================

/// Literal rules applied to both artist and title.
pub static COMMON_SUBSTITUTES: Lazy<Vec<SubstitutionRule>> = Lazy::new(|| {
    vec![
        // Stray accents used as apostrophes, long dashes
        SubstitutionRule::literal("`", "'"),
        SubstitutionRule::literal("\u{00B4}", "'"),
        SubstitutionRule::literal("\u{2013}", "-"),
        SubstitutionRule::literal("\u{2014}", "-"),
        // Featuring notation: "ft.", "Feat", "featuring" → "feat."
        SubstitutionRule::literal(" feat ", " feat. "),
        SubstitutionRule::literal(" ft. ", " feat. "),
        SubstitutionRule::literal(" Feat ", " feat. "),
        SubstitutionRule::literal(" featuring ", " feat. "),
        SubstitutionRule::literal(" Featuring ", " feat. "),
        SubstitutionRule::literal("(feat ", "(feat. "),
        SubstitutionRule::literal("(ft. ", "(feat. "),
        SubstitutionRule::literal("(Feat ", "(feat. "),
        SubstitutionRule::literal("(featuring ", "(feat. "),
        SubstitutionRule::literal("(Featuring ", "(feat. "),
        // Dashes hugging parentheses
        SubstitutionRule::literal(") - (", ""),
        SubstitutionRule::literal(" - (", " ("),
        SubstitutionRule::literal("(- ", "("),
        SubstitutionRule::literal("( - ", "("),
        SubstitutionRule::literal(" -)", " )"),
        SubstitutionRule::literal(" - ) ", ")"),
        // Decorations and ellipses
        SubstitutionRule::literal("!!!", ""),
        SubstitutionRule::literal("...", " "),
        SubstitutionRule::literal("..", " "),
        SubstitutionRule::literal(" ***", ""),
        SubstitutionRule::literal(" **", ""),
        SubstitutionRule::literal(" * ", ""),
    ]
});

/// Literal rules applied to the title only.
pub static TITLE_SUBSTITUTES: Lazy<Vec<SubstitutionRule>> = Lazy::new(|| {
    vec![
        SubstitutionRule::literal(" (Original Mix)", ""),
        // Record pool tags
        SubstitutionRule::literal(" DJcity", ""),
        SubstitutionRule::literal(" DJCity", ""),
        SubstitutionRule::literal("(DJcity - ", "("),
        SubstitutionRule::literal("DJcity ", ""),
        SubstitutionRule::literal("DJCity ", ""),
        // Inch marks
        SubstitutionRule::literal("12\"", "12''"),
        // Intro variants
        SubstitutionRule::literal("Intro - Dirty", "Dirty Intro"),
        SubstitutionRule::literal("Intro - Clean", "Clean Intro"),
        // Abbreviations
        SubstitutionRule::literal("Acap - DIY", "Acapella DIY"),
        SubstitutionRule::literal("(Acap)", "(Acapella)"),
        SubstitutionRule::literal("Acap ", "Acapella "),
        SubstitutionRule::literal("(Inst)", "(Instrumental)"),
        // Vinyl sizes
        SubstitutionRule::literal(" 12 Inch ", " 12'' "),
        SubstitutionRule::literal("(12 Inch ", "(12'' "),
        SubstitutionRule::literal(" 12in ", " 12'' "),
        SubstitutionRule::literal("(12in ", "(12'' "),
        SubstitutionRule::literal("(7in ", "(7'' "),
        SubstitutionRule::literal(" 7in ", " 7'' "),
        // Intro/outro spellings collapse to "Intro"
        SubstitutionRule::literal("Intro/Outro", "Intro-Outro"),
        SubstitutionRule::literal(" In/Out", " Intro-Outro"),
        SubstitutionRule::literal("In/Out ", "Intro-Outro "),
        SubstitutionRule::literal("Aca In/Aca Out", "Acapella In-Out"),
        SubstitutionRule::literal("Intro/Outro", "Intro"),
        SubstitutionRule::literal("Intro-Outro", "Intro"),
        SubstitutionRule::literal("In+Out", "In-Out"),
        SubstitutionRule::literal("In+out", "In-Out"),
    ]
});

/// Regex rules applied to both artist and title after the literal tables.
pub static REGEX_SUBSTITUTES: Lazy<Vec<SubstitutionRule>> = Lazy::new(|| {
    vec![
        // Square and curly brackets become parentheses
        SubstitutionRule::regex(r"[\[{]+", "("),
        SubstitutionRule::regex(r"[\]}]+", ")"),
        // Whitespace runs (tabs, newlines) collapse to one space
        SubstitutionRule::regex(r"\s+", " "),
        SubstitutionRule::regex(r"\s{2,}", " "),
        SubstitutionRule::regex(r"\.{2,}", "."),
        // Empty groups: "()", "( )"
        SubstitutionRule::regex(r"\(\s*?\)", ""),
        // Space before an opening parenthesis: "Song(Remix)" → "Song (Remix)"
        SubstitutionRule::regex(r"(\S)\(", "${1} ("),
    ]
});

/// Word-level name fixes applied to both fields before the regex table.
pub static NAME_SUBSTITUTES: Lazy<Vec<SubstitutionRule>> = Lazy::new(|| {
    vec![
        // "Song W/Drake", "Song w/ Drake"
        SubstitutionRule::regex(r"(?i)\sW/", " feat. "),
        SubstitutionRule::regex(r"(?i)\(Rmx\)", "(Remix)"),
        SubstitutionRule::regex(r"[®™]", ""),
        SubstitutionRule::regex(r"(?i)\bDj\b", "DJ"),
    ]
});

/// Canonical spellings for commonly misspelled artist names.
pub static ARTIST_ALIASES: Lazy<Vec<SubstitutionRule>> = Lazy::new(|| {
    vec![
        SubstitutionRule::regex(r"(?i)\bMissy Elliot\b", "Missy Elliott"),
        SubstitutionRule::regex(r"(?i)\bGangstarr\b", "Gang Starr"),
        // Titles keep "Rmx" inside longer descriptors ("(Trayze Rmx)")
        SubstitutionRule::regex(r"(?i)\bRmx\b", "Remix"),
        // "A / B" lists
        SubstitutionRule::literal(" / ", ", "),
    ]
});

/// Character rules for deriving a filename from formatted tags.
pub static FILENAME_SUBSTITUTES: Lazy<Vec<SubstitutionRule>> = Lazy::new(|| {
    vec![
        SubstitutionRule::literal("\"", "''"),
        // Forbidden characters are dropped
        SubstitutionRule::regex(r"[<>|!]+", ""),
        // Path separators and wildcards become dashes, one per character
        SubstitutionRule::regex(r"[\\/:*?]", "-"),
        SubstitutionRule::regex(r"\s+", " "),
    ]
});

// ============================================================================
// TESTS
// ============================================================================
