//! Pull structured data out of model replies.
//!
//! Models asked for JSON usually return it bare, but some wrap it in a
//! markdown fence or surround it with commentary.

use memory_lane_core::{GenerateResponse, Output};
use memory_lane_error::{MemoryLaneResult, ServiceError, ServiceErrorKind};
use serde::de::DeserializeOwned;

/// Extract a JSON object or array from text that may contain markdown or prose.
///
/// Strategies, in order:
/// 1. Markdown code blocks: ```json ... ``` or a bare fence
/// 2. The first balanced `{ ... }` or `[ ... ]`, whichever opens first
///
/// # Errors
///
/// Returns a schema-mismatch error when no JSON is found.
///
/// # Examples
///
/// ```
/// use memory_lane_flows::extract_json;
///
/// let reply = "Sure! ```json\n{\"caption\": \"A quiet lake\"}\n```";
/// assert_eq!(extract_json(reply).unwrap(), "{\"caption\": \"A quiet lake\"}");
/// ```
pub fn extract_json(response: &str) -> MemoryLaneResult<String> {
    if let Some(json) = extract_from_code_block(response) {
        return Ok(json);
    }

    let by_bracket = || extract_balanced(response, '[', ']');
    let by_brace = || extract_balanced(response, '{', '}');

    let found = match (response.find('['), response.find('{')) {
        (Some(b), Some(c)) if b < c => by_bracket().or_else(by_brace),
        (Some(_), None) => by_bracket(),
        _ => by_brace().or_else(by_bracket),
    };

    found.ok_or_else(|| {
        tracing::error!(response_length = response.len(), "No JSON found in model reply");
        ServiceError::new(ServiceErrorKind::SchemaMismatch(format!(
            "no JSON found in reply (length: {})",
            response.len()
        )))
        .into()
    })
}

fn extract_from_code_block(response: &str) -> Option<String> {
    let start = response.find("```")? + 3;
    // Skip an optional language tag on the opening fence.
    let body_start = response[start..]
        .find('\n')
        .map(|n| start + n + 1)
        .unwrap_or(start);
    let body = &response[body_start..];
    let body = body.find("```").map_or(body, |end| &body[..end]);
    let trimmed = body.trim();
    (trimmed.starts_with('{') || trimmed.starts_with('[')).then(|| trimmed.to_string())
}

/// Content from the first `open` to its matching `close`, honoring string literals.
fn extract_balanced(response: &str, open: char, close: char) -> Option<String> {
    let start = response.find(open)?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }
        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(response[start..start + i + ch.len_utf8()].to_string());
                }
            }
            _ => {}
        }
    }

    None
}

/// Parse JSON text into `T`.
///
/// # Errors
///
/// Returns a schema-mismatch error when the text does not deserialize into `T`.
pub fn parse_json<T>(json_str: &str) -> MemoryLaneResult<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(json_str).map_err(|e| {
        let preview: String = json_str.chars().take(100).collect();
        tracing::error!(error = %e, json_preview = %preview, "Reply does not match schema");
        ServiceError::new(ServiceErrorKind::SchemaMismatch(e.to_string())).into()
    })
}

/// Decode the first output of a model reply into `T`.
///
/// Structured outputs are converted directly; text outputs go through
/// [`extract_json`] first.
pub fn decode_reply<T>(response: &GenerateResponse) -> MemoryLaneResult<T>
where
    T: DeserializeOwned,
{
    match response.outputs.first() {
        Some(Output::Json(value)) => serde_json::from_value(value.clone()).map_err(|e| {
            tracing::error!(error = %e, "Structured reply does not match schema");
            ServiceError::new(ServiceErrorKind::SchemaMismatch(e.to_string())).into()
        }),
        Some(Output::Text(text)) => parse_json(&extract_json(text)?),
        None => Err(ServiceError::new(ServiceErrorKind::EmptyResponse).into()),
    }
}
