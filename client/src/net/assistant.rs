//! Remote assistant endpoint client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, raced against a
//! `gloo-timers` deadline.
//! Server-side (SSR): the call fails immediately since the widget only sends
//! from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport errors, non-2xx statuses, undecodable bodies, and timeouts all
//! come back as [`AssistantError`]. The conversation treats them as one
//! failure class; callers use [`AssistantError::is_timeout`] only to log the
//! timeout case separately. A decodable body without a reply field is not an
//! error and resolves to [`FALLBACK_REPLY`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

use std::time::Duration;

use serde::Serialize;

/// Assistant text used when a successful response carries no reply.
pub const FALLBACK_REPLY: &str = "Sorry, I could not process that.";

/// Response fields checked for the reply, in priority order.
const REPLY_FIELDS: [&str; 2] = ["reply", "message"];

/// Request body sent for each user turn.
#[derive(Debug, Serialize)]
pub struct AssistantRequest<'a> {
    pub message: &'a str,
}

/// Failure of a single assistant request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AssistantError {
    #[error("assistant transport error: {0}")]
    Transport(String),
    #[error("assistant endpoint returned status {0}")]
    Status(u16),
    #[error("assistant response could not be decoded: {0}")]
    Decode(String),
    #[error("assistant request timed out after {}s", .0.as_secs())]
    Timeout(Duration),
}

impl AssistantError {
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

/// Pick the reply text out of a decoded response body.
///
/// The first non-empty string among [`REPLY_FIELDS`] wins; anything else
/// (missing fields, non-string values, non-object bodies) yields
/// [`FALLBACK_REPLY`].
#[must_use]
pub fn reply_text(body: &serde_json::Value) -> String {
    REPLY_FIELDS
        .iter()
        .filter_map(|field| body.get(field).and_then(serde_json::Value::as_str))
        .map(str::trim)
        .find(|text| !text.is_empty())
        .unwrap_or(FALLBACK_REPLY)
        .to_owned()
}

/// Send one prompt and wait for the reply text, giving up after `timeout`.
///
/// # Errors
///
/// Returns an [`AssistantError`] on transport failure, non-2xx status,
/// undecodable body, or when `timeout` elapses first.
pub async fn send_prompt(endpoint: &str, prompt: &str, timeout: Duration) -> Result<String, AssistantError> {
    #[cfg(feature = "hydrate")]
    {
        use futures::future::{Either, select};

        let request = Box::pin(post_prompt(endpoint, prompt));
        let deadline = Box::pin(gloo_timers::future::sleep(timeout));
        match select(request, deadline).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(AssistantError::Timeout(timeout)),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, prompt, timeout);
        Err(AssistantError::Transport("not available on server".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
async fn post_prompt(endpoint: &str, prompt: &str) -> Result<String, AssistantError> {
    let resp = gloo_net::http::Request::post(endpoint)
        .json(&AssistantRequest { message: prompt })
        .map_err(|e| AssistantError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| AssistantError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(AssistantError::Status(resp.status()));
    }
    let body: serde_json::Value = resp.json().await.map_err(|e| AssistantError::Decode(e.to_string()))?;
    Ok(reply_text(&body))
}
