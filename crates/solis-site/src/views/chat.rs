//! The site chat assistant.

use solis_client::SiteApi;
use strum::Display;

use crate::notice::Notices;

pub const GREETING: &str = "Hello! How can I help you today?";
pub const APOLOGY: &str = "Sorry, I encountered an error. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Speaker {
  Bot,
  Visitor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLine {
  pub speaker: Speaker,
  pub text:    String,
}

/// The transcript. `send` borrows the view mutably until the reply lands, so
/// a second message cannot start while one is pending.
#[derive(Debug)]
pub struct ChatView {
  transcript: Vec<ChatLine>,
}

impl Default for ChatView {
  fn default() -> Self {
    Self {
      transcript: vec![ChatLine { speaker: Speaker::Bot, text: GREETING.into() }],
    }
  }
}

impl ChatView {
  pub fn new() -> Self { Self::default() }

  pub fn transcript(&self) -> &[ChatLine] { &self.transcript }

  /// Send one visitor message and append the reply. Blank input sends
  /// nothing.
  pub async fn send<A: SiteApi>(
    &mut self,
    api: &A,
    input: &str,
    notices: &mut Notices,
  ) -> bool {
    let message = input.trim();
    if message.is_empty() {
      return false;
    }
    self.push(Speaker::Visitor, message);

    match api.chat(message).await {
      Ok(text) => {
        self.push(Speaker::Bot, text);
        true
      }
      Err(e) => {
        notices.failure("Failed to get response. Please try again.", &e);
        self.push(Speaker::Bot, APOLOGY);
        false
      }
    }
  }

  fn push(&mut self, speaker: Speaker, text: impl Into<String>) {
    self.transcript.push(ChatLine { speaker, text: text.into() });
  }
}
