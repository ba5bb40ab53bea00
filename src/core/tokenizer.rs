//! Numeric literal scanning for free-text requests.
//!
//! Two rules are tried, in order, at every position that starts with an
//! ASCII digit:
//!
//! 1. [`NumberRule::Grouped`]: a lead of 1-3 digits followed by one or more
//!    `<separator><3 digits>` groups, e.g. `5.000.000`.
//! 2. [`NumberRule::Plain`]: the full run of consecutive digits.
//!
//! The first rule that matches wins and scanning resumes right after the
//! token. Offsets are character offsets into the scanned text.

/// A number found in the text. `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberToken {
    pub value: u64,
    pub start: usize,
    pub end: usize,
}

impl NumberToken {
    /// Distance from this token to a position, measured from either edge.
    pub fn distance_to(&self, position: usize) -> usize {
        self.start.abs_diff(position).min(self.end.abs_diff(position))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberRule {
    Grouped,
    Plain,
}

const RULES: [NumberRule; 2] = [NumberRule::Grouped, NumberRule::Plain];

#[derive(Debug, Clone)]
pub struct NumberTokenizer {
    group_separator: char,
}

impl Default for NumberTokenizer {
    fn default() -> Self {
        Self::new('.')
    }
}

impl NumberTokenizer {
    pub fn new(group_separator: char) -> Self {
        Self { group_separator }
    }

    pub fn tokenize(&self, text: &str) -> Vec<NumberToken> {
        let chars: Vec<char> = text.chars().collect();
        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < chars.len() {
            if !chars[pos].is_ascii_digit() {
                pos += 1;
                continue;
            }

            // Plain always matches on a digit, so this never falls through.
            let end = RULES
                .iter()
                .find_map(|rule| self.match_rule(*rule, &chars, pos))
                .unwrap_or(pos + 1);

            tokens.push(NumberToken {
                value: digits_value(&chars[pos..end]),
                start: pos,
                end,
            });
            pos = end;
        }

        tokens
    }

    /// Returns the exclusive end of the match starting at `start`, if any.
    fn match_rule(&self, rule: NumberRule, chars: &[char], start: usize) -> Option<usize> {
        let lead = digit_run(chars, start);
        if lead == 0 {
            return None;
        }

        match rule {
            NumberRule::Plain => Some(start + lead),
            NumberRule::Grouped => {
                // Groups must follow the lead directly, so the lead is the whole run.
                if lead > 3 {
                    return None;
                }
                let mut end = start + lead;
                let mut groups = 0;
                while self.group_at(chars, end) {
                    end += 4;
                    groups += 1;
                }
                (groups > 0).then_some(end)
            }
        }
    }

    fn group_at(&self, chars: &[char], pos: usize) -> bool {
        chars.get(pos) == Some(&self.group_separator)
            && chars.len() >= pos + 4
            && chars[pos + 1..pos + 4].iter().all(char::is_ascii_digit)
    }
}

fn digit_run(chars: &[char], start: usize) -> usize {
    chars[start..]
        .iter()
        .take_while(|c| c.is_ascii_digit())
        .count()
}

/// Parses the digits of a token, skipping separators. Saturates at `u64::MAX`.
fn digits_value(chars: &[char]) -> u64 {
    chars
        .iter()
        .filter_map(|c| c.to_digit(10))
        .try_fold(0u64, |acc, digit| {
            acc.checked_mul(10)?.checked_add(u64::from(digit))
        })
        .unwrap_or(u64::MAX)
}
