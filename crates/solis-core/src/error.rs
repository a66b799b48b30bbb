//! Error types for `solis-core`.

use thiserror::Error;

/// A submission rejected on the client before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("missing required fields: {}", .0.join(", "))]
  MissingFields(Vec<&'static str>),

  #[error("no resume attached")]
  MissingResume,

  #[error("no position selected")]
  NoPositionSelected,

  #[error("resume is {size} bytes; the limit is 5 MB")]
  ResumeTooLarge { size: usize },

  #[error("unsupported resume type: {file_name:?}")]
  UnsupportedResumeType { file_name: String },
}

impl ValidationError {
  /// The user-facing notice text for this rejection.
  pub fn notice(&self) -> String {
    match self {
      Self::MissingFields(fields) => {
        format!("Please fill in: {}", fields.join(", "))
      }
      Self::MissingResume => "Please upload your resume".to_string(),
      Self::NoPositionSelected => "Please select a position first".to_string(),
      Self::ResumeTooLarge { .. } => {
        "File size must be less than 5MB".to_string()
      }
      Self::UnsupportedResumeType { .. } => {
        "Only PDF and DOCX files are allowed".to_string()
      }
    }
  }
}

pub type Result<T, E = ValidationError> = std::result::Result<T, E>;
