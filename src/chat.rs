//! Conversational botanist assistant backed by Gemini.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::context::ServiceContext;
use crate::error::PlantError;
use crate::inline_image::InlineImage;
use crate::model::CHAT_GENERATION_CONFIG;
use crate::ports::{ContentPart, GenerationRequest};
use crate::prompt::{ASSISTANT_LABEL, CHAT_PERSONA};

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The app user.
    User,
    /// The assistant.
    Assistant,
}

/// One turn of the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who wrote it.
    pub role: Role,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// A message from the user.
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

/// Assistant's reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Reply text with any leading persona label removed.
    pub message: String,
}

/// Build the prompt parts for a conversation whose last entry is the new message.
fn build_parts(history: &[ChatMessage], last: &ChatMessage, image: Option<&str>) -> Vec<ContentPart> {
    let mut parts = Vec::with_capacity(history.len() + 3);
    parts.push(ContentPart::text(CHAT_PERSONA));
    for message in history {
        let speaker = match message.role {
            Role::User => "User",
            Role::Assistant => ASSISTANT_LABEL,
        };
        parts.push(ContentPart::text(format!("{speaker}: {}", message.content)));
    }
    if let Some(image) = image {
        parts.push(ContentPart::image(InlineImage::normalize(image)));
    }
    parts.push(ContentPart::text(format!(
        "User: {}\n\nPlease respond as {ASSISTANT_LABEL}:",
        last.content
    )));
    parts
}

/// Drop a leading `Mr. Oliver:` label the model sometimes echoes.
fn strip_assistant_label(reply: &str) -> String {
    let reply = reply.trim();
    reply
        .strip_prefix(ASSISTANT_LABEL)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(reply)
        .trim()
        .to_string()
}

/// Send the conversation to the assistant and return its reply.
///
/// `messages` is the whole conversation, ending with the new user message.
/// `image` is raw base64 or a data URI attached to that message.
///
/// # Errors
///
/// Returns [`PlantError::Validation`] for an empty conversation, otherwise
/// any credential or generation error.
pub async fn send_chat_message(
    ctx: &ServiceContext,
    model: &str,
    messages: &[ChatMessage],
    image: Option<&str>,
) -> Result<ChatReply, PlantError> {
    let Some((last, history)) = messages.split_last() else {
        return Err(PlantError::Validation("No messages provided".to_string()));
    };

    let keys = ctx.credentials.fetch().await?;
    let request = GenerationRequest {
        model: model.to_string(),
        parts: build_parts(history, last, image),
        config: CHAT_GENERATION_CONFIG,
    };
    debug!(model, turns = messages.len(), with_image = image.is_some(), "sending chat message");

    let response = ctx.generator.generate(&keys.gemini, &request).await?;
    let message = strip_assistant_label(&response.text);
    info!(chars = message.len(), "assistant replied");
    Ok(ChatReply { message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{self, FakeCredentials, FakeGenerator, FakeImageSearch};

    #[test]
    fn transcript_labels_speakers() {
        let history = vec![
            ChatMessage::user("My fern is brown"),
            ChatMessage { role: Role::Assistant, content: "Try misting it.".into() },
        ];
        let parts = build_parts(&history, &ChatMessage::user("How often?"), None);
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[1], ContentPart::text("User: My fern is brown"));
        assert_eq!(parts[2], ContentPart::text("Mr. Oliver: Try misting it."));
        assert_eq!(parts[3], ContentPart::text("User: How often?\n\nPlease respond as Mr. Oliver:"));
    }

    #[test]
    fn image_goes_before_final_message() {
        let parts = build_parts(&[], &ChatMessage::user("What is this?"), Some("data:image/webp;base64,UklG"));
        assert_eq!(parts.len(), 3);
        assert_eq!(
            parts[1],
            ContentPart::image(InlineImage { mime_type: "image/webp".into(), data: "UklG".into() })
        );
    }

    #[test]
    fn label_is_stripped() {
        assert_eq!(strip_assistant_label("Mr. Oliver:  Water weekly."), "Water weekly.");
        assert_eq!(strip_assistant_label("  Water weekly.\n"), "Water weekly.");
        assert_eq!(strip_assistant_label("Mr. Oliver says hi"), "Mr. Oliver says hi");
    }

    #[tokio::test]
    async fn empty_conversation_is_rejected() {
        let credentials = FakeCredentials::ok();
        let ctx = testing::context(credentials.clone(), FakeGenerator::replying("hi"), FakeImageSearch::returning(0));
        let err = send_chat_message(&ctx, "gemini-2.5-flash", &[], None).await.unwrap_err();
        assert!(matches!(err, PlantError::Validation(_)));
        assert_eq!(credentials.calls(), 0);
    }

    #[tokio::test]
    async fn reply_uses_chat_sampling() {
        let generator = FakeGenerator::replying("Mr. Oliver: Bright, indirect light.");
        let ctx = testing::context(FakeCredentials::ok(), generator.clone(), FakeImageSearch::returning(0));

        let reply = send_chat_message(&ctx, "gemini-2.5-flash", &[ChatMessage::user("Light?")], None)
            .await
            .unwrap();

        assert_eq!(reply.message, "Bright, indirect light.");
        let (_, request) = generator.requests().remove(0);
        assert_eq!(request.config, CHAT_GENERATION_CONFIG);
    }
}
