//! Profile record model and loading.
//!
//! The record is owned by the UI shell and only ever read here.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Profile file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read profile file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Profile file is empty")]
    EmptyFile,
    #[error("Invalid profile JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// English proficiency test sub-record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnglishTest {
    pub test_type: Option<String>,
    /// Accepts a number or numeric text; anything else reads as absent.
    #[serde(deserialize_with = "lenient_score")]
    pub overall_score: Option<f32>,
}

/// Presence flags for uploaded documents.
///
/// The UI shell may send a flag, a file reference or an upload record.
/// `null` reads as absent, `false` or a blank string as not uploaded,
/// anything else as uploaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Documents {
    #[serde(deserialize_with = "presence")]
    pub passport: Option<bool>,
    #[serde(deserialize_with = "presence")]
    pub academic_transcripts: Option<bool>,
    #[serde(deserialize_with = "presence")]
    pub recommendation_letters: Option<bool>,
}

/// Reads a document slot as a presence flag.
///
/// `null` is absent. `false` and blank strings are `Some(false)`.
/// Any other value (`true`, a file name, an object) is `Some(true)`.
fn presence<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        Value::Bool(b) => Some(b),
        Value::String(s) => Some(!s.trim().is_empty()),
        _ => Some(true),
    })
}

fn lenient_score<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64().map(|f| f as f32),
        Value::String(s) => s.trim().parse::<f32>().ok(),
        _ => None,
    })
}

/// Flat applicant profile. Every field is optional; absent means not provided.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileRecord {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub education_level: Option<String>,
    pub institution: Option<String>,
    pub visa_status: Option<String>,
    pub english_test: Option<EnglishTest>,
    pub documents: Option<Documents>,
}

/// A blank or whitespace-only input counts as not provided.
pub(crate) fn text_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

impl ProfileRecord {
    /// Parses a profile from the REST JSON body.
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn has_english_test(&self) -> bool {
        self.english_test
            .as_ref()
            .is_some_and(|t| text_present(&t.test_type))
    }

    pub fn has_passport(&self) -> bool {
        self.documents
            .as_ref()
            .and_then(|d| d.passport)
            .unwrap_or(false)
    }

    pub fn has_transcripts(&self) -> bool {
        self.documents
            .as_ref()
            .and_then(|d| d.academic_transcripts)
            .unwrap_or(false)
    }

    pub fn has_visa_status(&self) -> bool {
        text_present(&self.visa_status)
    }
}

/// Loads a profile record from a JSON file.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
/// - File is not a valid profile JSON document
pub fn load_profile_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<ProfileRecord, ProfileError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Profile load FAILED: FileNotFound {:?}", path);
        return Err(ProfileError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Profile load FAILED: Empty file {:?}", path);
        return Err(ProfileError::EmptyFile);
    }

    let profile = ProfileRecord::from_json(&content)?;

    #[cfg(feature = "tracing")]
    tracing::info!("Profile loaded from {:?}", path);

    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_json_camel_case() {
        let profile = ProfileRecord::from_json(
            r#"{
                "fullName": "Ada Lovelace",
                "visaStatus": "pending",
                "englishTest": { "testType": "IELTS", "overallScore": 7.5 },
                "documents": { "passport": true, "academicTranscripts": false }
            }"#,
        )
        .expect("valid profile");

        assert_eq!(profile.full_name.as_deref(), Some("Ada Lovelace"));
        assert!(profile.has_english_test());
        assert!(profile.has_passport());
        assert!(!profile.has_transcripts());
        assert!(profile.has_visa_status());
        assert_eq!(profile.email, None);
    }

    #[test]
    fn test_from_json_nulls_and_unknown_fields() {
        let profile = ProfileRecord::from_json(
            r#"{ "email": null, "documents": null, "favouriteColour": "blue" }"#,
        )
        .expect("valid profile");
        assert_eq!(profile, ProfileRecord::default());
    }

    #[test]
    fn test_from_json_document_references_count_as_present() {
        let profile = ProfileRecord::from_json(
            r#"{
                "documents": {
                    "passport": "passport.pdf",
                    "academicTranscripts": { "url": "/uploads/t.pdf" },
                    "recommendationLetters": ""
                }
            }"#,
        )
        .expect("document references should parse");

        assert!(profile.has_passport());
        assert!(profile.has_transcripts());
        let docs = profile.documents.expect("documents present");
        assert_eq!(docs.recommendation_letters, Some(false));
    }

    #[test]
    fn test_from_json_document_false_and_null_are_absent() {
        let profile = ProfileRecord::from_json(
            r#"{ "documents": { "passport": false, "academicTranscripts": null } }"#,
        )
        .expect("valid profile");
        assert!(!profile.has_passport());
        assert!(!profile.has_transcripts());
    }

    #[test]
    fn test_from_json_score_as_text() {
        let profile = ProfileRecord::from_json(
            r#"{ "englishTest": { "testType": "IELTS", "overallScore": "7.5" } }"#,
        )
        .expect("score text should parse");
        let test = profile.english_test.expect("english test present");
        assert_eq!(test.overall_score, Some(7.5));
    }

    #[test]
    fn test_from_json_unparseable_score_is_absent() {
        let profile = ProfileRecord::from_json(
            r#"{ "englishTest": { "testType": "TOEFL", "overallScore": "pending" } }"#,
        )
        .expect("profile still loads");
        assert!(profile.has_english_test());
        assert_eq!(profile.english_test.and_then(|t| t.overall_score), None);
    }

    #[test]
    fn test_from_json_invalid() {
        let result = ProfileRecord::from_json("{ not json");
        assert!(matches!(result, Err(ProfileError::Parse(_))));
    }

    #[test]
    fn test_blank_strings_are_absent() {
        let profile = ProfileRecord {
            visa_status: Some("   ".to_string()),
            english_test: Some(EnglishTest {
                test_type: Some(String::new()),
                overall_score: Some(6.0),
            }),
            ..Default::default()
        };
        assert!(!profile.has_visa_status());
        assert!(!profile.has_english_test());
    }

    #[test]
    fn test_load_profile_file_not_found() {
        let result = load_profile_from_path("/nonexistent/path/profile.json");
        assert!(matches!(result, Err(ProfileError::FileNotFound(_))));
    }

    #[test]
    fn test_load_profile_empty_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "  \n").expect("Failed to write");

        let result = load_profile_from_path(temp_file.path());
        assert!(matches!(result, Err(ProfileError::EmptyFile)));
    }

    #[test]
    fn test_load_profile_success() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, r#"{{ "email": "ada@example.com", "phone": "+44 20 0000" }}"#)
            .expect("Failed to write");

        let profile = load_profile_from_path(temp_file.path()).expect("Should load");
        assert_eq!(profile.email.as_deref(), Some("ada@example.com"));
        assert_eq!(profile.phone.as_deref(), Some("+44 20 0000"));
    }
}
