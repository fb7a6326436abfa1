use anyhow::Context as AnyhowContext;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
    ChatCompletionRequestUserMessage, CreateChatCompletionRequest, CreateChatCompletionRequestArgs,
};

use crate::{config::Configuration, constant};

/// The seam between command dispatch and the completion service. Handlers
/// talk to this trait so they can be exercised without a network.
#[serenity::async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String>;
}

pub struct Ai {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    system_prompt: String,
}
impl Ai {
    pub fn new(config: &Configuration) -> Self {
        let client = async_openai::Client::with_config(
            async_openai::config::OpenAIConfig::default()
                .with_api_key(config.openai_api_key.as_str()),
        );

        Self {
            client,
            system_prompt: config.system_prompt.clone(),
        }
    }
}
#[serenity::async_trait]
impl TextGenerator for Ai {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String> {
        let response = self
            .client
            .chat()
            .create(build_request(&self.system_prompt, prompt)?)
            .await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .as_deref()
            .and_then(clean)
            .context("the completion service returned an empty response")
    }
}

/// Builds the two-turn request: the configured instruction text as the
/// system turn, the caller's prompt as the user turn.
fn build_request(
    system_prompt: &str,
    user_prompt: &str,
) -> anyhow::Result<CreateChatCompletionRequest> {
    Ok(CreateChatCompletionRequestArgs::default()
        .model(constant::generation::MODEL)
        .temperature(constant::generation::TEMPERATURE)
        .max_completion_tokens(constant::generation::MAX_OUTPUT_TOKENS)
        .messages([
            ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
                content: system_prompt.to_owned().into(),
                name: None,
            }),
            ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                content: user_prompt.to_owned().into(),
                name: None,
            }),
        ])
        .build()?)
}

/// A whitespace-only completion counts as no completion at all.
fn clean(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_openai::types::{
        ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessageContent,
    };

    #[test]
    fn request_carries_exactly_two_turns() {
        let request = build_request("Act as a trading assistant.", "What is RSI?").unwrap();

        assert_eq!(request.messages.len(), 2);
        match &request.messages[0] {
            ChatCompletionRequestMessage::System(msg) => match &msg.content {
                ChatCompletionRequestSystemMessageContent::Text(text) => {
                    assert_eq!(text, "Act as a trading assistant.")
                }
                other => panic!("unexpected system content: {other:?}"),
            },
            other => panic!("expected a system turn first, got {other:?}"),
        }
        match &request.messages[1] {
            ChatCompletionRequestMessage::User(msg) => match &msg.content {
                ChatCompletionRequestUserMessageContent::Text(text) => {
                    assert_eq!(text, "What is RSI?")
                }
                other => panic!("unexpected user content: {other:?}"),
            },
            other => panic!("expected a user turn second, got {other:?}"),
        }
    }

    #[test]
    fn request_uses_the_fixed_sampling_parameters() {
        let request = build_request("system", "user").unwrap();

        assert_eq!(request.model, constant::generation::MODEL);
        assert_eq!(request.temperature, Some(constant::generation::TEMPERATURE));
        assert_eq!(
            request.max_completion_tokens,
            Some(constant::generation::MAX_OUTPUT_TOKENS)
        );
    }

    #[test]
    fn clean_trims_surrounding_whitespace() {
        assert_eq!(clean("  pong \n"), Some("pong".to_owned()));
        assert_eq!(clean("already clean"), Some("already clean".to_owned()));
    }

    #[test]
    fn clean_rejects_blank_output() {
        assert_eq!(clean(""), None);
        assert_eq!(clean(" \n\t "), None);
    }
}
