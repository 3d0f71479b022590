//! Handler for the contact form.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use folio_core::contact::ContactMessage;

use crate::error::AppResult;
use crate::mail::MailError;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /api/contact
///
/// Sends the owner notification and the sender acknowledgement. A failure
/// of either is reported as a single delivery failure.
pub async fn send(
    State(state): State<AppState>,
    payload: Result<Json<ContactMessage>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Json(message) = payload?;
    message.validate()?;

    let mailer = state.mailer.as_ref().ok_or(MailError::NotConfigured)?;
    mailer.send_contact(&message).await?;

    Ok(Json(MessageResponse {
        message: "Email sent successfully",
    }))
}
