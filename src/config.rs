//! Completion scoring configuration.

use std::env::VarError;
use thiserror::Error;

use crate::completion::ProfileField;

/// Environment variable overriding the profile schema size.
pub const SCHEMA_SLOTS_ENV: &str = "APPLICANT_PROFILE_SCHEMA_SLOTS";

/// Slots in the full profile schema. The checklist covers only half of them.
pub const DEFAULT_SCHEMA_SLOTS: u32 = 20;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for APPLICANT_PROFILE_SCHEMA_SLOTS: {0:?}")]
    InvalidSlots(String),
    #[error("Schema slots ({0}) cannot be fewer than the {1} tracked checks")]
    SlotsBelowChecklist(u32, usize),
}

/// Denominator used when turning checked fields into a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionConfig {
    schema_slots: u32,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            schema_slots: DEFAULT_SCHEMA_SLOTS,
        }
    }
}

impl CompletionConfig {
    /// Builds a config for a profile schema of `schema_slots` slots.
    ///
    /// # Arguments
    /// * `schema_slots` - Denominator used for the completion percentage
    ///
    /// # Errors
    /// Returns `SlotsBelowChecklist` when `schema_slots` is smaller than the
    /// number of tracked checks, which would allow more than 100%.
    pub fn new(schema_slots: u32) -> Result<Self, ConfigError> {
        let checks = ProfileField::CHECKLIST.len();
        if (schema_slots as usize) < checks {
            return Err(ConfigError::SlotsBelowChecklist(schema_slots, checks));
        }
        Ok(Self { schema_slots })
    }

    /// Reads the schema size from the environment.
    ///
    /// Priority:
    /// 1. Environment variable `APPLICANT_PROFILE_SCHEMA_SLOTS`
    /// 2. Default of 20 slots
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(SCHEMA_SLOTS_ENV) {
            Ok(raw) => {
                let slots = raw
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| ConfigError::InvalidSlots(raw.clone()))?;
                #[cfg(feature = "tracing")]
                tracing::info!("Profile schema slots from environment: {}", slots);
                Self::new(slots)
            }
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(raw)) => {
                #[cfg(feature = "tracing")]
                tracing::error!("{} is not valid unicode: {:?}", SCHEMA_SLOTS_ENV, raw);
                Err(ConfigError::InvalidSlots(raw.to_string_lossy().into_owned()))
            }
        }
    }

    pub fn schema_slots(&self) -> u32 {
        self.schema_slots
    }
}
