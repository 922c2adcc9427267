//! Password policy rules
//!
//! Each rule is an independent predicate over the candidate password.
//! No rule looks at the outcome of another.

mod length;
mod variety;

use serde::{Deserialize, Serialize};
use secrecy::SecretString;

pub use length::{MIN_LENGTH, length_rule};
pub use variety::{digit_rule, is_special_char, lowercase_rule, special_rule, uppercase_rule};

/// Signature shared by every rule predicate.
pub type RuleFn = fn(&SecretString) -> bool;

/// Identifier of a single password rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordRule {
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl PasswordRule {
    /// Rules counted by the numeric strength score, 25 points each.
    pub const STRENGTH_SUBSET: [PasswordRule; 4] = [
        PasswordRule::MinLength,
        PasswordRule::Uppercase,
        PasswordRule::Digit,
        PasswordRule::Special,
    ];

    /// Requirements shown to the user, in display order.
    pub const DISPLAYED: [PasswordRule; 5] = [
        PasswordRule::MinLength,
        PasswordRule::Uppercase,
        PasswordRule::Lowercase,
        PasswordRule::Digit,
        PasswordRule::Special,
    ];

    /// User-facing requirement text.
    pub fn label(self) -> &'static str {
        match self {
            PasswordRule::MinLength => "At least 8 characters",
            PasswordRule::Uppercase => "One uppercase letter",
            PasswordRule::Lowercase => "One lowercase letter",
            PasswordRule::Digit => "One number",
            PasswordRule::Special => "One special character",
        }
    }

    /// Returns the predicate implementing this rule.
    ///
    /// # Returns
    /// A `RuleFn` that is `true` when the password satisfies the rule.
    pub fn predicate(self) -> RuleFn {
        match self {
            PasswordRule::MinLength => length_rule,
            PasswordRule::Uppercase => uppercase_rule,
            PasswordRule::Lowercase => lowercase_rule,
            PasswordRule::Digit => digit_rule,
            PasswordRule::Special => special_rule,
        }
    }

    /// Evaluates this rule alone against `password`.
    pub fn check(self, password: &SecretString) -> bool {
        (self.predicate())(password)
    }

    pub fn in_strength_subset(self) -> bool {
        Self::STRENGTH_SUBSET.contains(&self)
    }
}

impl std::fmt::Display for PasswordRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Pass/fail state of every displayed rule, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleChecklist {
    entries: Vec<(PasswordRule, bool)>,
}

impl RuleChecklist {
    /// Evaluates every displayed rule against the password.
    pub fn evaluate(password: &SecretString) -> Self {
        let entries = PasswordRule::DISPLAYED
            .iter()
            .map(|&rule| (rule, rule.check(password)))
            .collect();
        Self { entries }
    }

    pub fn passed(&self, rule: PasswordRule) -> bool {
        self.entries
            .iter()
            .find(|(r, _)| *r == rule)
            .map(|(_, ok)| *ok)
            .unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PasswordRule, bool)> + '_ {
        self.entries.iter().copied()
    }

    pub fn all_passed(&self) -> bool {
        self.entries.iter().all(|(_, ok)| *ok)
    }

    /// Rules that failed, in display order.
    pub fn failing(&self) -> Vec<PasswordRule> {
        self.entries
            .iter()
            .filter(|(_, ok)| !ok)
            .map(|(rule, _)| *rule)
            .collect()
    }

    /// Number of strength-subset rules that passed.
    pub fn strength_hits(&self) -> usize {
        self.entries
            .iter()
            .filter(|(rule, ok)| *ok && rule.in_strength_subset())
            .count()
    }
}
