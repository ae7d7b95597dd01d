//! Vote handler.

use axum::{
    extract::{Path, State},
    Json,
};

use picshare_core::gallery::{MessageResponse, VoteBody, VoteValue};

use crate::{context::Identity, handlers::ApiError, state::AppState};

/// Vote on an image (POST /images/{id}/vote).
///
/// Body `{"vote": -1|1}`; anything else is rejected. A repeat vote by the
/// same user on the same image overwrites the previous value in place.
pub async fn vote(
    State(state): State<AppState>,
    identity: Identity,
    Path(image_id): Path<i64>,
    Json(body): Json<VoteBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    let value = VoteValue::try_from(body.vote)
        .map_err(|err| ApiError::Validation(err.to_string()))?;

    state
        .votes
        .upsert_vote(identity.user_id, image_id, value)
        .await?;

    tracing::info!(image_id, user_id = identity.user_id, vote = value.as_i64(), "vote recorded");

    Ok(Json(MessageResponse::new("Vote recorded successfully")))
}
