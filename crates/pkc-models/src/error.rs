//! Best-effort rendering of backend error responses into a single
//! user-facing message. Backend error bodies are inconsistent: plain text,
//! message lists, or messages with JSON fragments and HTML markup embedded.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Failed response as seen by the submission path, transport details
/// already stripped.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpErrorResponse {
    pub status: Option<u16>,
    pub status_text: Option<String>,
    pub url: Option<String>,
    pub body: Option<ApiErrorBody>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiErrorBody {
    /// Transport-level failure; no response was received.
    Network,
    /// Response body that parsed as JSON.
    Json(Value),
    /// Plain-text response body.
    Text(String),
}

static EMBEDDED_JSON: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{[^}]*\}").unwrap());
static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Renders `err` under `headline`. Pure and total: any body shape yields a
/// message containing the headline.
pub fn extract_error(err: &HttpErrorResponse, headline: &str) -> String {
    let Some(body) = &err.body else {
        return headline.to_string();
    };

    // Validation responses carry a list of messages.
    if err.status == Some(422) {
        match body {
            ApiErrorBody::Text(text) => return format!("{headline} {text}"),
            ApiErrorBody::Json(Value::Array(items)) => {
                let joined = items
                    .iter()
                    .map(render_fragment)
                    .collect::<Vec<_>>()
                    .join(", ");
                return format!("{headline}. {joined}");
            }
            _ => {}
        }
    }

    match body {
        ApiErrorBody::Json(json) => match json.get("message").and_then(Value::as_str) {
            Some(message) => format!("{headline}: {}", expand_message(message)),
            None => headline.to_string(),
        },
        ApiErrorBody::Text(text) => {
            if let Ok(parsed) = serde_json::from_str::<Value>(text)
                && let Some(message) = parsed.get("message").and_then(Value::as_str)
            {
                return format!("{headline}: {message}");
            }
            format!("{headline}: {text}")
        }
        ApiErrorBody::Network => format!("{headline}: Network connection failure"),
    }
}

/// Strips HTML markup and inlines any embedded JSON objects as
/// `key: value` lines.
fn expand_message(message: &str) -> String {
    let stripped = HTML_TAG.replace_all(message, "");
    let expanded = EMBEDDED_JSON.replace_all(&stripped, |captures: &regex::Captures<'_>| {
        match serde_json::from_str::<Value>(&captures[0]) {
            Ok(Value::Object(fields)) => fields
                .iter()
                .map(|(key, value)| {
                    if key == "message" {
                        render_fragment(value)
                    } else {
                        format!("{key}: {}", render_fragment(value))
                    }
                })
                .collect::<Vec<_>>()
                .join("; "),
            _ => captures[0].to_string(),
        }
    });
    expanded.replace("\\n", "").trim().to_string()
}

fn render_fragment(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
