//! # Password strength — client-side registration checks
//!
//! Mirrors the backend's registration rules so a weak password is rejected
//! before it is sent:
//!
//! | Requirement | Test |
//! |-------------|------|
//! | At least 8 characters | `len >= 8` (in characters, not bytes) |
//! | One uppercase letter | ASCII `A-Z` |
//! | One number | ASCII `0-9` |
//! | One special character | one of `!@#$%^&*()_+-=[]{}|;:,.<>?` |
//!
//! [`Strength`] grades how many requirements are met: all four is
//! [`Strong`](Strength::Strong), three is [`Medium`](Strength::Medium), fewer is
//! [`Weak`](Strength::Weak).

/// Characters accepted for the special-character requirement.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// A single password rule.
#[derive(Debug, Clone, Copy)]
pub struct Requirement {
    pub label: &'static str,
    test: fn(&str) -> bool,
}

impl Requirement {
    pub fn is_met(&self, password: &str) -> bool {
        (self.test)(password)
    }
}

pub const REQUIREMENTS: [Requirement; 4] = [
    Requirement {
        label: "At least 8 characters",
        test: |p| p.chars().count() >= 8,
    },
    Requirement {
        label: "One uppercase letter",
        test: |p| p.chars().any(|c| c.is_ascii_uppercase()),
    },
    Requirement {
        label: "One number",
        test: |p| p.chars().any(|c| c.is_ascii_digit()),
    },
    Requirement {
        label: "One special character (!@#$%^&*)",
        test: |p| p.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn label(&self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        }
    }

    /// Width of the strength meter, in percent.
    pub fn meter_percent(&self) -> u8 {
        match self {
            Strength::Weak => 20,
            Strength::Medium => 60,
            Strength::Strong => 100,
        }
    }
}

/// Outcome of checking a password against [`REQUIREMENTS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    /// `(label, met)` in [`REQUIREMENTS`] order.
    pub checks: Vec<(&'static str, bool)>,
    pub strength: Strength,
}

impl StrengthReport {
    pub fn met(&self) -> usize {
        self.checks.iter().filter(|(_, met)| *met).count()
    }
}

/// Grade a password. An empty password has no report.
pub fn evaluate(password: &str) -> Option<StrengthReport> {
    if password.is_empty() {
        return None;
    }
    let checks: Vec<_> = REQUIREMENTS
        .iter()
        .map(|req| (req.label, req.is_met(password)))
        .collect();
    let met = checks.iter().filter(|(_, met)| *met).count();
    let strength = match met {
        n if n == REQUIREMENTS.len() => Strength::Strong,
        3 => Strength::Medium,
        _ => Strength::Weak,
    };
    Some(StrengthReport { checks, strength })
}

/// Whether every requirement is met.
pub fn meets_requirements(password: &str) -> bool {
    REQUIREMENTS.iter().all(|req| req.is_met(password))
}
