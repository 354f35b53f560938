use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use tracing::info;

use crate::error::SummarizeError;
use crate::{SYSTEM_PROMPT, Summarizer, build_prompt};

const TEMPERATURE: f32 = 0.3;

/// Summarizes through the Bedrock Converse API.
#[derive(Debug, Clone)]
pub struct BedrockSummarizer {
    client: Client,
    model_id: String,
}

impl BedrockSummarizer {
    pub fn new(client: Client, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
        }
    }

    pub fn from_sdk_config(config: &aws_config::SdkConfig, model_id: impl Into<String>) -> Self {
        Self::new(Client::new(config), model_id)
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

impl Summarizer for BedrockSummarizer {
    async fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .system(SystemContentBlock::Text(SYSTEM_PROMPT.to_string()))
            .messages(
                Message::builder()
                    .role(ConversationRole::User)
                    .content(ContentBlock::Text(build_prompt(text)))
                    .build()
                    .map_err(|e| SummarizeError::Invocation(e.to_string()))?,
            )
            .inference_config(InferenceConfiguration::builder().temperature(TEMPERATURE).build())
            .send()
            .await
            .map_err(|e| SummarizeError::Invocation(e.into_service_error().to_string()))?;

        let output_message = response
            .output()
            .and_then(|o| o.as_message().ok())
            .ok_or_else(|| SummarizeError::ResponseParse("no message in response".to_string()))?;

        let summary = output_message
            .content()
            .iter()
            .filter_map(|block| {
                if let ContentBlock::Text(text) = block {
                    Some(text.as_str())
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        if let Some(usage) = response.usage() {
            info!(
                model_id = %self.model_id,
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "summary generated"
            );
        }

        let summary = summary.trim();
        if summary.is_empty() {
            return Err(SummarizeError::Empty);
        }
        Ok(summary.to_string())
    }
}

/// Load AWS configuration for a region, optionally from a named profile.
pub async fn load_sdk_config(region: &str, profile: Option<&str>) -> aws_config::SdkConfig {
    let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()));

    if let Some(profile) = profile {
        builder = builder.profile_name(profile);
    }

    builder.load().await
}
