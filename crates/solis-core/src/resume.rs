//! Resume attachments for job applications.
//!
//! A [`ResumeFile`] can only be built from a file that passes the upload
//! rules, so anything holding one is safe to put on the wire.

use std::fmt;

use crate::{Result, ValidationError};

/// Largest accepted resume, in bytes (5 MiB).
pub const MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;

/// Accepted resume formats, keyed by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeKind {
  Pdf,
  Docx,
  Doc,
}

impl ResumeKind {
  /// Match the extension of `file_name`, ignoring case.
  pub fn from_file_name(file_name: &str) -> Option<Self> {
    let (_, ext) = file_name.rsplit_once('.')?;
    match ext.to_ascii_lowercase().as_str() {
      "pdf" => Some(Self::Pdf),
      "docx" => Some(Self::Docx),
      "doc" => Some(Self::Doc),
      _ => None,
    }
  }

  pub fn media_type(self) -> &'static str {
    match self {
      Self::Pdf => "application/pdf",
      Self::Docx => {
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
      }
      Self::Doc => "application/msword",
    }
  }
}

/// A validated resume: at most [`MAX_RESUME_BYTES`], named `*.pdf`, `*.docx`
/// or `*.doc`.
#[derive(Clone, PartialEq, Eq)]
pub struct ResumeFile {
  file_name: String,
  kind:      ResumeKind,
  bytes:     Vec<u8>,
}

impl ResumeFile {
  pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self> {
    let file_name = file_name.into();
    if bytes.len() > MAX_RESUME_BYTES {
      return Err(ValidationError::ResumeTooLarge { size: bytes.len() });
    }
    let kind = ResumeKind::from_file_name(&file_name)
      .ok_or_else(|| ValidationError::UnsupportedResumeType {
        file_name: file_name.clone(),
      })?;
    Ok(Self { file_name, kind, bytes })
  }

  pub fn file_name(&self) -> &str { &self.file_name }

  pub fn kind(&self) -> ResumeKind { self.kind }

  pub fn into_bytes(self) -> Vec<u8> { self.bytes }
}

// Resume contents stay out of logs.
impl fmt::Debug for ResumeFile {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ResumeFile")
      .field("file_name", &self.file_name)
      .field("kind", &self.kind)
      .field("len", &self.bytes.len())
      .finish()
  }
}
