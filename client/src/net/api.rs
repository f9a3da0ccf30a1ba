//! Single outbound call to the remote assistant endpoint.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`, bounded by a
//! timeout raced against the fetch.
//! Server-side (SSR): stub returning an error since the call is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a `Result` they map onto a fixed fallback message; no
//! failure mode here is allowed to panic or surface as a thrown error.

use super::types::{AskError, AskRequest};

#[cfg(feature = "hydrate")]
use super::types::extract_reply;

/// Remote completion endpoint the chat widget posts to.
pub const ASSISTANT_ENDPOINT: &str =
    "https://kp-automations.app.n8n.cloud/webhook/portfolio-assistant";

/// Upper bound on a single assistant call. The original behavior left a
/// hung request pending indefinitely; this bound treats a slow endpoint
/// the same as an unreachable one.
pub const REQUEST_TIMEOUT_SECS: u64 = 20;

/// POST the user's message plus prior transcript and extract the reply.
///
/// # Errors
///
/// Returns an [`AskError`] on transport failure, non-success status,
/// timeout, or a body with no usable reply text.
pub async fn ask_assistant(req: &AskRequest) -> Result<String, AskError> {
    #[cfg(feature = "hydrate")]
    {
        use futures::future::{Either, select};
        use std::pin::pin;

        let request = gloo_net::http::Request::post(ASSISTANT_ENDPOINT)
            .json(req)
            .map_err(|e| AskError::Transport(e.to_string()))?;

        let send = pin!(request.send());
        let deadline = pin!(gloo_timers::future::TimeoutFuture::new(
            u32::try_from(REQUEST_TIMEOUT_SECS * 1000).unwrap_or(u32::MAX),
        ));

        let resp = match select(send, deadline).await {
            Either::Left((sent, _)) => sent.map_err(|e| AskError::Transport(e.to_string()))?,
            Either::Right(((), _)) => return Err(AskError::Timeout(REQUEST_TIMEOUT_SECS)),
        };

        if !resp.ok() {
            return Err(AskError::Status(resp.status()));
        }

        let body: serde_json::Value = resp.json().await.map_err(|_| AskError::EmptyReply)?;
        extract_reply(&body).ok_or(AskError::EmptyReply)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(AskError::Transport("not available on server".to_owned()))
    }
}
