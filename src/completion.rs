//! Profile completion engine - percentage, status band and next steps.

use serde::{Deserialize, Serialize};

use crate::config::CompletionConfig;
use crate::profile::{ProfileRecord, text_present};

/// A tracked profile field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    FullName,
    Email,
    Phone,
    Address,
    EducationLevel,
    Institution,
    VisaStatus,
    EnglishTestType,
    Passport,
    AcademicTranscripts,
}

impl ProfileField {
    /// Fields counted towards completion, in wizard order.
    pub const CHECKLIST: [ProfileField; 10] = [
        ProfileField::FullName,
        ProfileField::Email,
        ProfileField::Phone,
        ProfileField::Address,
        ProfileField::EducationLevel,
        ProfileField::Institution,
        ProfileField::VisaStatus,
        ProfileField::EnglishTestType,
        ProfileField::Passport,
        ProfileField::AcademicTranscripts,
    ];

    /// Whether `profile` provides this field. Blank text counts as absent.
    pub fn is_present(self, profile: &ProfileRecord) -> bool {
        match self {
            ProfileField::FullName => text_present(&profile.full_name),
            ProfileField::Email => text_present(&profile.email),
            ProfileField::Phone => text_present(&profile.phone),
            ProfileField::Address => text_present(&profile.address),
            ProfileField::EducationLevel => text_present(&profile.education_level),
            ProfileField::Institution => text_present(&profile.institution),
            ProfileField::VisaStatus => profile.has_visa_status(),
            ProfileField::EnglishTestType => profile.has_english_test(),
            ProfileField::Passport => profile.has_passport(),
            ProfileField::AcademicTranscripts => profile.has_transcripts(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProfileField::FullName => "Full name",
            ProfileField::Email => "Email",
            ProfileField::Phone => "Phone",
            ProfileField::Address => "Address",
            ProfileField::EducationLevel => "Education level",
            ProfileField::Institution => "Institution",
            ProfileField::VisaStatus => "Visa status",
            ProfileField::EnglishTestType => "English test",
            ProfileField::Passport => "Passport",
            ProfileField::AcademicTranscripts => "Academic transcripts",
        }
    }
}

/// Qualitative completion band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CompletionStatus {
    BasicProfile,
    AlmostComplete,
    Complete,
}

impl CompletionStatus {
    /// Lower bounds are inclusive: 50 is already `AlmostComplete`.
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            0..=49 => CompletionStatus::BasicProfile,
            50..=79 => CompletionStatus::AlmostComplete,
            _ => CompletionStatus::Complete,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CompletionStatus::BasicProfile => "Basic Profile",
            CompletionStatus::AlmostComplete => "Almost Complete",
            CompletionStatus::Complete => "Complete",
        }
    }
}

impl std::fmt::Display for CompletionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Opaque destination hint; the UI shell maps it to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepTarget {
    EnglishTest,
    Documents,
    Visa,
    Applications,
}

impl StepTarget {
    pub fn key(self) -> &'static str {
        match self {
            StepTarget::EnglishTest => "english-test",
            StepTarget::Documents => "documents",
            StepTarget::Visa => "visa",
            StepTarget::Applications => "applications",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextStep {
    pub title: &'static str,
    pub description: &'static str,
    pub target: StepTarget,
}

const ADD_ENGLISH_SCORES: NextStep = NextStep {
    title: "Add English test scores",
    description: "Most universities require IELTS, TOEFL or an equivalent test result.",
    target: StepTarget::EnglishTest,
};

const UPLOAD_PASSPORT: NextStep = NextStep {
    title: "Upload your passport",
    description: "A valid passport is needed for every application and visa request.",
    target: StepTarget::Documents,
};

const COMPLETE_VISA: NextStep = NextStep {
    title: "Complete visa information",
    description: "Tell us your current visa status so we can plan your application.",
    target: StepTarget::Visa,
};

const READY_TO_APPLY: NextStep = NextStep {
    title: "Ready to start applications",
    description: "Your key details are in place. Browse universities and start applying.",
    target: StepTarget::Applications,
};

/// Gating checks in priority order.
const GATES: [(fn(&ProfileRecord) -> bool, NextStep); 3] = [
    (ProfileRecord::has_english_test, ADD_ENGLISH_SCORES),
    (ProfileRecord::has_passport, UPLOAD_PASSPORT),
    (ProfileRecord::has_visa_status, COMPLETE_VISA),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionResult {
    pub percentage: u8,
    pub status: CompletionStatus,
    pub next_steps: Vec<NextStep>,
    missing: Vec<ProfileField>,
}

impl CompletionResult {
    /// Checklist fields not yet provided, in checklist order.
    pub fn missing_fields(&self) -> &[ProfileField] {
        &self.missing
    }
}

/// Computes completion against the default 20-slot schema.
pub fn compute_completion(profile: &ProfileRecord) -> CompletionResult {
    compute_completion_with(profile, &CompletionConfig::default())
}

/// Computes completion against a caller-supplied schema size.
///
/// # Arguments
/// * `profile` - The profile record, read-only
/// * `config` - Schema slots used as the denominator
///
/// # Returns
/// A `CompletionResult` with the rounded percentage, its status band, the
/// next steps in priority order and the checklist fields still missing.
pub fn compute_completion_with(profile: &ProfileRecord, config: &CompletionConfig) -> CompletionResult {
    let (present, missing): (Vec<ProfileField>, Vec<ProfileField>) = ProfileField::CHECKLIST
        .into_iter()
        .partition(|field| field.is_present(profile));

    let percentage = percentage(present.len(), config.schema_slots());
    let status = CompletionStatus::from_percentage(percentage);
    let next_steps = next_steps(profile);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "profile completion: {}/{} checks, {}% ({})",
        present.len(),
        config.schema_slots(),
        percentage,
        status
    );

    CompletionResult {
        percentage,
        status,
        next_steps,
        missing,
    }
}

/// `round(100 * checked / slots)`, halves rounded up, clamped to 100.
fn percentage(checked: usize, slots: u32) -> u8 {
    let slots = slots.max(1) as u64;
    let checked = checked as u64;
    let rounded = (200 * checked + slots) / (2 * slots);
    rounded.min(100) as u8
}

fn next_steps(profile: &ProfileRecord) -> Vec<NextStep> {
    let steps: Vec<NextStep> = GATES
        .iter()
        .filter(|(satisfied, _)| !satisfied(profile))
        .map(|(_, step)| step.clone())
        .collect();

    if steps.is_empty() {
        vec![READY_TO_APPLY]
    } else {
        steps
    }
}
