//! Parenthesis balancing and nested-group flattening.
//!
//! Both passes are single scans over the characters of a title with a depth
//! counter. The balancer never deletes characters; the splitter drops the
//! closing parentheses of inner groups it has already split off.

use std::cmp::Ordering;

/// Make the number of `(` and `)` equal by inserting the missing ones.
///
/// Only one direction runs: excess openings are closed scanning forward,
/// excess closings are opened scanning backward. Afterwards adjacent groups
/// are spaced, inner padding is removed and empty groups are dropped.
pub fn balance_parentheses(title: &str) -> String {
    let open_count = title.matches('(').count();
    let close_count = title.matches(')').count();

    let balanced = match open_count.cmp(&close_count) {
        Ordering::Greater => add_missing_closing_parentheses(title),
        Ordering::Less => add_missing_opening_parentheses(title),
        Ordering::Equal => title.to_string(),
    };

    balanced
        .replace(")(", ") (")
        .replace(" )", ")")
        .replace("( ", "(")
        .replace("()", "")
}

/// Close an open group before the next one starts, and at the end of text.
/// At most one group is outstanding: a forced close hands the slot to the
/// group that follows.
///
/// "If (Kaytranada Edition (Live Set Version)" → "If (Kaytranada Edition) (Live Set Version)"
pub fn add_missing_closing_parentheses(text: &str) -> String {
    let mut open = false;
    let mut result = String::with_capacity(text.len() + 4);

    for c in text.chars() {
        match c {
            '(' => {
                if open {
                    result.push_str(") ");
                }
                open = true;
            }
            ')' => open = false,
            _ => {}
        }
        result.push(c);
    }

    if open {
        result.push(')');
    }

    result
}

/// Mirror of [`add_missing_closing_parentheses`], scanning from the end.
/// "Live Set Version) (Edit)" → "(Live Set Version) (Edit)"
pub fn add_missing_opening_parentheses(text: &str) -> String {
    let mut open = false;
    let mut reversed: Vec<char> = Vec::with_capacity(text.len() + 4);

    for c in text.chars().rev() {
        match c {
            ')' => {
                if open {
                    // Reads " (" once flipped back
                    reversed.push('(');
                    reversed.push(' ');
                }
                open = true;
            }
            '(' => open = false,
            _ => {}
        }
        reversed.push(c);
    }

    if open {
        reversed.push('(');
    }

    reversed.into_iter().rev().collect()
}

/// Rewrite nested groups as sibling groups in reading order.
///
/// A new `(` while a group is open closes that group first. A `)` is only
/// written when it closes the outermost group; inner closings are dropped
/// because the inner group was already split off. Groups left open at the
/// end are closed. An unmatched `)` is copied through for the balancer.
///
/// "A (B (C) D (E) F)" → "A (B) (C D) (E F)"
pub fn split_nested_parentheses(text: &str) -> String {
    let mut depth: usize = 0;
    let mut result = String::with_capacity(text.len() + 8);

    for c in text.chars() {
        match c {
            '(' => {
                if depth > 0 {
                    result.push_str(") ");
                }
                depth += 1;
                result.push(c);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    result.push(c);
                }
            }
            _ => result.push(c),
        }
    }

    for _ in 0..depth {
        result.push(')');
    }

    // Directly nested openings leave empty groups behind: "((A))" → "() (A)"
    result
        .replace(" )", ")")
        .replace("( ", "(")
        .replace(" ()", "")
        .replace("() ", "")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn is_balanced(text: &str) -> bool {
        text.matches('(').count() == text.matches(')').count()
    }

    #[test]
    fn test_add_missing_closing_parentheses() {
        // Padding before the inserted ")" is left for the balancer's cleanup
        let test_cases = [
            (
                "If (Kaytranada Edition (Live Set Version)",
                "If (Kaytranada Edition ) (Live Set Version)",
            ),
            ("Song (Extended Mix", "Song (Extended Mix)"),
            ("Song (A) (B", "Song (A) (B)"),
            ("Song (Remix (Clean", "Song (Remix ) (Clean)"),
            ("Song(Remix(Clean", "Song(Remix) (Clean)"),
        ];

        for (input, expected) in test_cases {
            assert_eq!(add_missing_closing_parentheses(input), expected);
        }
    }

    #[test]
    fn test_add_missing_opening_parentheses() {
        let test_cases = [
            ("Song Extended Mix)", "(Song Extended Mix)"),
            ("Song A) (B)", "(Song A) (B)"),
            ("Remix) Clean)", "(Remix) ( Clean)"),
        ];

        for (input, expected) in test_cases {
            assert_eq!(add_missing_opening_parentheses(input), expected);
        }
    }

    #[test]
    fn test_balance_parentheses() {
        let test_cases = [
            (
                "If (Kaytranada Edition (Live Set Version)",
                "If (Kaytranada Edition) (Live Set Version)",
            ),
            (
                "If (Kaytranada Edition) (Live Set Version",
                "If (Kaytranada Edition) (Live Set Version)",
            ),
            ("Song (Remix (Clean", "Song (Remix) (Clean)"),
            ("Song (A) B)", "Song (A) (B)"),
            ("Song (Remix)(Clean)", "Song (Remix) (Clean)"),
            ("Song ( Remix )", "Song (Remix)"),
            ("Song () Title", "Song  Title"),
            ("No groups", "No groups"),
        ];

        for (input, expected) in test_cases {
            let result = balance_parentheses(input);
            assert_eq!(result, expected);
            assert!(is_balanced(&result));
        }
    }

    #[test]
    fn test_balance_keeps_text() {
        let input = "Intro) Club Mix) (Clean)";
        let result = balance_parentheses(input);
        assert!(is_balanced(&result));
        let letters: String = result.chars().filter(|c| c.is_alphabetic()).collect();
        assert_eq!(letters, "IntroClubMixClean");
    }

    #[test]
    fn test_split_nested_parentheses() {
        let test_cases = [
            ("Hello ((World))", "Hello (World)"),
            ("Hello (World)", "Hello (World)"),
            ("(Hello) (World)", "(Hello) (World)"),
            ("A (B (C) D (E) F)", "A (B) (C D) (E F)"),
            (
                "This is a test (with some (nested) parentheses (and (some) more)",
                "This is a test (with some) (nested parentheses) (and) (some more)",
            ),
            (
                "Live For The Night (Simo 128 (70) (Trayze Rmx) Transition) (Quick)",
                "Live For The Night (Simo 128) (70) (Trayze Rmx Transition) (Quick)",
            ),
            (
                "If (Kaytranada Edition (Live Set Version)",
                "If (Kaytranada Edition) (Live Set Version)",
            ),
        ];

        for (input, expected) in test_cases {
            assert_eq!(split_nested_parentheses(input), expected);
        }
    }

    #[test]
    fn test_split_keeps_unmatched_closing() {
        assert_eq!(split_nested_parentheses("Song) (Edit)"), "Song) (Edit)");
    }
}
