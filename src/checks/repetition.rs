//! Repetition check - rejects runs of three or more identical characters.

use super::CheckOutcome;
use crate::config::Config;

const MAX_RUN: usize = 2;

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// True when any character appears three or more times in a row.
///
/// Line terminators never form a run.
pub(crate) fn has_repeated_run(password: &str) -> bool {
    let mut prev: Option<char> = None;
    let mut run = 0;

    for c in password.chars() {
        if is_line_terminator(c) {
            prev = None;
            run = 0;
            continue;
        }
        if prev == Some(c) {
            run += 1;
            if run > MAX_RUN {
                return true;
            }
        } else {
            prev = Some(c);
            run = 1;
        }
    }

    false
}

/// Fails when any character appears three or more times in a row.
pub fn repeated_chars_check(password: &str, _config: &Config) -> CheckOutcome {
    if has_repeated_run(password) {
        return CheckOutcome::Fail(
            "The password may not contain sequences of three or more repeated characters."
                .to_string(),
        );
    }
    CheckOutcome::Pass
}
