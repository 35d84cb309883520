//! Strength meter: percentage of checks passed and its display color.

use serde::Serialize;

use crate::checks::{has_digit, has_lowercase, has_repeated_run, has_special, has_uppercase};

/// Substrings penalized by the quick heuristic.
const QUICK_COMMON_WORDS: [&str; 4] = ["password", "123456", "qwerty", "admin"];

/// Percentage of checks passed, rounded to the nearest integer.
pub fn strength_percent(passed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (passed as f64 / total as f64 * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthColor {
    Red,
    Orange,
    Green,
    DarkGreen,
}

impl StrengthColor {
    pub fn for_percent(percent: u8) -> Self {
        match percent {
            0..30 => StrengthColor::Red,
            30..60 => StrengthColor::Orange,
            60..80 => StrengthColor::Green,
            _ => StrengthColor::DarkGreen,
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            StrengthColor::Red => "#d32f2f",
            StrengthColor::Orange => "#ff9800",
            StrengthColor::Green => "#4caf50",
            StrengthColor::DarkGreen => "#2e7d32",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrengthMeter {
    pub percent: u8,
    pub color: StrengthColor,
}

impl StrengthMeter {
    pub fn new(passed: usize, total: usize) -> Self {
        let percent = strength_percent(passed, total);
        Self {
            percent,
            color: StrengthColor::for_percent(percent),
        }
    }
}

/// One line of the requirement checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Requirement {
    pub label: String,
    pub met: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    pub fn for_score(score: i32) -> Self {
        if score >= 5 {
            StrengthLevel::Strong
        } else if score >= 3 {
            StrengthLevel::Medium
        } else {
            StrengthLevel::Weak
        }
    }
}

/// Quick point-based strength shown next to the meter.
///
/// Independent of the configured checks: length, character classes, runs of
/// repeated characters and a few common words each move the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickStrength {
    pub score: i32,
    pub level: StrengthLevel,
    pub feedback: Vec<String>,
}

impl QuickStrength {
    pub fn assess(password: &str) -> Self {
        let mut score = 0;
        let mut feedback = Vec::new();

        let len = password.chars().count();
        if len >= 12 {
            score += 2;
        } else if len >= 8 {
            score += 1;
        } else {
            feedback.push("Password should be at least 8 characters long".to_string());
        }

        score += [
            has_uppercase(password),
            has_lowercase(password),
            has_digit(password),
            has_special(password),
        ]
        .iter()
        .filter(|&&present| present)
        .count() as i32;

        if has_repeated_run(password) {
            score -= 1;
            feedback.push("Avoid repeated characters".to_string());
        }

        let lower = password.to_lowercase();
        if QUICK_COMMON_WORDS.iter().any(|word| lower.contains(word)) {
            score -= 1;
            feedback.push("Avoid common words".to_string());
        }

        Self {
            score,
            level: StrengthLevel::for_score(score),
            feedback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_percent() {
        assert_eq!(strength_percent(0, 9), 0);
        assert_eq!(strength_percent(4, 9), 44);
        assert_eq!(strength_percent(5, 9), 56);
        assert_eq!(strength_percent(9, 9), 100);
        assert_eq!(strength_percent(3, 0), 0);
    }

    #[test]
    fn test_color_bands() {
        assert_eq!(StrengthColor::for_percent(0), StrengthColor::Red);
        assert_eq!(StrengthColor::for_percent(29), StrengthColor::Red);
        assert_eq!(StrengthColor::for_percent(30), StrengthColor::Orange);
        assert_eq!(StrengthColor::for_percent(59), StrengthColor::Orange);
        assert_eq!(StrengthColor::for_percent(60), StrengthColor::Green);
        assert_eq!(StrengthColor::for_percent(79), StrengthColor::Green);
        assert_eq!(StrengthColor::for_percent(80), StrengthColor::DarkGreen);
        assert_eq!(StrengthColor::for_percent(100), StrengthColor::DarkGreen);
    }

    #[test]
    fn test_meter() {
        let meter = StrengthMeter::new(8, 9);
        assert_eq!(meter.percent, 89);
        assert_eq!(meter.color.hex(), "#2e7d32");
    }

    #[test]
    fn test_quick_strength_strong() {
        let quick = QuickStrength::assess("Tr0ub4dor&3x");
        assert_eq!(quick.score, 6);
        assert_eq!(quick.level, StrengthLevel::Strong);
        assert!(quick.feedback.is_empty());
    }

    #[test]
    fn test_quick_strength_medium() {
        let quick = QuickStrength::assess("abcdefgH");
        assert_eq!(quick.score, 3);
        assert_eq!(quick.level, StrengthLevel::Medium);
        assert!(quick.feedback.is_empty());
    }

    #[test]
    fn test_quick_strength_short_is_weak() {
        let quick = QuickStrength::assess("ab");
        assert_eq!(quick.score, 1);
        assert_eq!(quick.level, StrengthLevel::Weak);
        assert_eq!(
            quick.feedback,
            vec!["Password should be at least 8 characters long".to_string()]
        );
    }

    #[test]
    fn test_quick_strength_repeated_characters() {
        let quick = QuickStrength::assess("aaaBcd1!x");
        assert_eq!(quick.score, 4);
        assert_eq!(quick.level, StrengthLevel::Medium);
        assert_eq!(quick.feedback, vec!["Avoid repeated characters".to_string()]);
    }

    #[test]
    fn test_quick_strength_common_word_substring() {
        let quick = QuickStrength::assess("MyPassword1!");
        assert_eq!(quick.score, 5);
        assert_eq!(quick.level, StrengthLevel::Strong);
        assert_eq!(quick.feedback, vec!["Avoid common words".to_string()]);

        let quick = QuickStrength::assess("ADMIN");
        assert_eq!(quick.score, 0);
        assert_eq!(
            quick.feedback,
            vec![
                "Password should be at least 8 characters long".to_string(),
                "Avoid common words".to_string(),
            ]
        );
    }

    #[test]
    fn test_quick_strength_all_penalties() {
        let quick = QuickStrength::assess("1234566666");
        assert_eq!(quick.score, 0);
        assert_eq!(quick.level, StrengthLevel::Weak);
        assert_eq!(
            quick.feedback,
            vec![
                "Avoid repeated characters".to_string(),
                "Avoid common words".to_string(),
            ]
        );
    }
}
