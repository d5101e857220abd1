use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

// Digits plus the separators people actually type into phone fields.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+\-() ]+$").expect("valid phone regex"));

/// A composable scalar field check.
///
/// Rules are pure: they see the trimmed field value and return either `Ok` or
/// a human-readable reason. A schema applies every rule of every field so the
/// client receives the complete violation list in one response.
#[derive(Clone, Copy, Debug)]
pub enum Rule {
    MinLen(usize),
    MaxLen(usize),
    Email,
    Phone { min_digits: usize },
    OneOf(&'static [&'static str]),
}

impl Rule {
    pub fn check(&self, value: &str) -> Result<(), String> {
        match self {
            Rule::MinLen(min) => {
                if value.chars().count() < *min {
                    return Err(format!("must be at least {} characters", min));
                }
            }
            Rule::MaxLen(max) => {
                if value.chars().count() > *max {
                    return Err(format!("must be at most {} characters", max));
                }
            }
            Rule::Email => {
                if !EMAIL_RE.is_match(value) {
                    return Err("is not a valid email address".to_string());
                }
            }
            Rule::Phone { min_digits } => {
                if !PHONE_RE.is_match(value) {
                    return Err("is not a valid phone number".to_string());
                }
                let digits = value.chars().filter(char::is_ascii_digit).count();
                if digits < *min_digits {
                    return Err(format!("must contain at least {} digits", min_digits));
                }
            }
            Rule::OneOf(allowed) => {
                if !allowed.contains(&value) {
                    return Err(format!("must be one of: {}", allowed.join(", ")));
                }
            }
        }
        Ok(())
    }
}
