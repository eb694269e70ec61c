use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::AppState;

// The upstream context stays bounded even though the browser transcript
// grows for the whole page session: the system turn plus the most recent
// turns are forwarded, the rest is dropped.
const HISTORY_WINDOW: usize = 24;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatApiMessage {
    pub role: String,
    pub content: String,
}

#[derive(Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatApiMessage>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

pub(crate) fn validate_history(messages: &[ChatApiMessage]) -> Result<(), &'static str> {
    let Some(last) = messages.last() else {
        return Err("message history is empty");
    };
    if messages
        .iter()
        .any(|m| !matches!(m.role.as_str(), "system" | "user" | "assistant"))
    {
        return Err("message roles must be system, user or assistant");
    }
    if last.role != "user" {
        return Err("message history must end with a user turn");
    }
    Ok(())
}

pub(crate) fn windowed_history(messages: &[ChatApiMessage]) -> Vec<ChatApiMessage> {
    let (system, rest) = match messages.split_first() {
        Some((first, rest)) if first.role == "system" => (Some(first), rest),
        _ => (None, messages),
    };

    let tail_start = rest.len().saturating_sub(HISTORY_WINDOW);
    system
        .into_iter()
        .chain(&rest[tail_start..])
        .cloned()
        .collect()
}

pub async fn send_chat_message(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<serde_json::Value>)> {
    if let Err(message) = validate_history(&request.messages) {
        return Err((StatusCode::BAD_REQUEST, Json(json!({ "error": message }))));
    }

    let history = windowed_history(&request.messages);
    match state.completion.complete(&history).await {
        Ok(reply) => Ok(Json(ChatResponse { reply })),
        Err(e) => {
            tracing::error!("completion proxy call failed: {}", e);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": "assistant is unavailable" })),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(role: &str, content: &str) -> ChatApiMessage {
        ChatApiMessage {
            role: role.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn empty_history_is_rejected() {
        assert!(validate_history(&[]).is_err());
    }

    #[test]
    fn history_must_end_with_a_user_turn() {
        let history = vec![msg("system", "prompt"), msg("assistant", "hi")];
        assert!(validate_history(&history).is_err());

        let history = vec![msg("system", "prompt"), msg("user", "hello")];
        assert!(validate_history(&history).is_ok());
    }

    #[test]
    fn unknown_roles_are_rejected() {
        let history = vec![msg("tool", "output"), msg("user", "hello")];
        assert!(validate_history(&history).is_err());
    }

    #[test]
    fn short_history_passes_through_unchanged() {
        let history = vec![msg("system", "prompt"), msg("user", "hello")];
        assert_eq!(windowed_history(&history), history);
    }

    #[test]
    fn window_keeps_the_system_turn_and_the_tail() {
        let mut history = vec![msg("system", "prompt")];
        for i in 0..40 {
            let role = if i % 2 == 0 { "user" } else { "assistant" };
            history.push(msg(role, &format!("turn {i}")));
        }

        let windowed = windowed_history(&history);
        assert_eq!(windowed.len(), HISTORY_WINDOW + 1);
        assert_eq!(windowed[0].role, "system");
        assert_eq!(windowed.last().unwrap().content, "turn 39");
        assert_eq!(windowed[1].content, format!("turn {}", 40 - HISTORY_WINDOW));
    }

    #[test]
    fn window_without_a_system_turn_keeps_only_the_tail() {
        let mut history = Vec::new();
        for i in 0..30 {
            let role = if i % 2 == 0 { "user" } else { "assistant" };
            history.push(msg(role, &format!("turn {i}")));
        }

        let windowed = windowed_history(&history);
        assert_eq!(windowed.len(), HISTORY_WINDOW);
        assert_eq!(windowed[0].content, format!("turn {}", 30 - HISTORY_WINDOW));
    }
}
