//! Applicant rules library
//!
//! Pure rule engines behind a study-abroad application client:
//! profile completion scoring with next-step recommendations, and
//! the password policy used by registration and password reset.
//!
//! # Features
//!
//! - `async` (default): Enables debounced per-keystroke evaluation with cancellation
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `APPLICANT_PROFILE_SCHEMA_SLOTS`: Size of the profile schema used as the
//!   completion denominator (default: `20`)
//!
//! # Example
//!
//! ```rust
//! use applicant_core::{ProfileRecord, compute_completion, evaluate, validate_reset};
//! use secrecy::SecretString;
//!
//! let profile = ProfileRecord::from_json(r#"{ "fullName": "Ada" }"#).unwrap();
//! let completion = compute_completion(&profile);
//! println!("{}% - {}", completion.percentage, completion.status);
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let policy = evaluate(&password);
//! println!("Strength: {}", policy.band);
//!
//! let confirm = SecretString::new("MyP@ssw0rd!".to_string().into());
//! assert!(validate_reset(&password, &confirm).is_ok());
//! ```

// Internal modules
mod completion;
mod config;
mod policy;
mod profile;
mod reset;
mod rules;

// Public API
pub use completion::{
    CompletionResult, CompletionStatus, NextStep, ProfileField, StepTarget, compute_completion,
    compute_completion_with,
};
pub use config::{CompletionConfig, ConfigError, DEFAULT_SCHEMA_SLOTS, SCHEMA_SLOTS_ENV};
pub use policy::{
    POINTS_PER_RULE, PolicyResult, ScoreError, StrengthBand, StrengthScore, evaluate,
};
pub use profile::{Documents, EnglishTest, ProfileError, ProfileRecord, load_profile_from_path};
pub use reset::{ResetError, validate_reset};
pub use rules::{MIN_LENGTH, PasswordRule, RuleChecklist, is_special_char};

#[cfg(feature = "async")]
pub use policy::{DEBOUNCE, evaluate_tx};
