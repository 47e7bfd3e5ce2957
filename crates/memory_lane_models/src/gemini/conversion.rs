//! Conversion between Memory Lane request types and Gemini wire types.

use super::dto::{Content, GeminiRequest, GeminiResponse, GenerationConfig, Part};
use memory_lane_core::{GenerateRequest, GenerateResponse, Input, Output, Role};
use memory_lane_error::{MemoryLaneResult, ServiceError, ServiceErrorKind};
use tracing::{debug, warn};

/// Build a `generateContent` body from a generic request.
///
/// System messages become the system instruction; a response schema switches
/// the reply to JSON mode.
pub fn to_gemini_request(
    req: &GenerateRequest,
    default_temperature: Option<f32>,
    default_max_tokens: Option<u32>,
) -> GeminiRequest {
    let mut system_parts = Vec::new();
    let mut contents = Vec::new();

    for message in req.messages() {
        let parts: Vec<Part> = message.content.iter().map(to_part).collect();
        match message.role {
            Role::System => system_parts.extend(parts),
            Role::User => contents.push(Content {
                role: Some("user".to_string()),
                parts,
            }),
            Role::Model => contents.push(Content {
                role: Some("model".to_string()),
                parts,
            }),
        }
    }

    let system_instruction = (!system_parts.is_empty()).then(|| Content {
        role: None,
        parts: system_parts,
    });

    let temperature = (*req.temperature()).or(default_temperature);
    let max_output_tokens = (*req.max_tokens()).or(default_max_tokens);
    let response_schema = req.response_schema().clone();
    let response_mime_type = response_schema
        .as_ref()
        .map(|_| "application/json".to_string());

    let generation_config = (temperature.is_some()
        || max_output_tokens.is_some()
        || response_schema.is_some())
    .then(|| GenerationConfig {
        temperature,
        max_output_tokens,
        response_mime_type,
        response_schema,
    });

    GeminiRequest {
        contents,
        system_instruction,
        generation_config,
    }
}

fn to_part(input: &Input) -> Part {
    match input {
        Input::Text(text) => Part::text(text.clone()),
        Input::Image(blob) => Part::inline(blob.mime().clone(), blob.base64()),
    }
}

/// Extract the first candidate's text from a `generateContent` reply.
///
/// When `structured` is set and the text parses as JSON the output is
/// [`Output::Json`]; otherwise it is [`Output::Text`] and the caller decides
/// how to read it.
pub fn from_gemini_response(
    response: &GeminiResponse,
    structured: bool,
) -> MemoryLaneResult<GenerateResponse> {
    let Some(candidate) = response.candidates.first() else {
        if let Some(reason) = response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.clone())
        {
            warn!(reason = %reason, "Prompt blocked by provider");
            return Err(ServiceError::new(ServiceErrorKind::Blocked(reason)).into());
        }
        return Err(ServiceError::new(ServiceErrorKind::EmptyResponse).into());
    };

    let text: String = candidate
        .content
        .iter()
        .flat_map(|content| &content.parts)
        .filter_map(|part| part.text.as_deref())
        .collect();

    if text.trim().is_empty() {
        return match candidate.finish_reason.as_deref() {
            Some(reason @ ("SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT")) => {
                Err(ServiceError::new(ServiceErrorKind::Blocked(reason.to_string())).into())
            }
            _ => Err(ServiceError::new(ServiceErrorKind::EmptyResponse).into()),
        };
    }

    debug!(
        chars = text.len(),
        finish_reason = ?candidate.finish_reason,
        "Received Gemini reply"
    );

    let output = if structured {
        match serde_json::from_str(&text) {
            Ok(value) => Output::Json(value),
            Err(_) => Output::Text(text),
        }
    } else {
        Output::Text(text)
    };

    Ok(GenerateResponse {
        outputs: vec![output],
    })
}
