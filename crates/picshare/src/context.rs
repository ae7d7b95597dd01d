//! Request identity context.
//!
//! Upload and vote handlers take an [`Identity`] argument instead of
//! reaching for a global. No session layer exists yet, so the extractor
//! resolves to the identity configured on [`AppState`]; swapping in a
//! session-backed extractor later touches only this module.

use std::convert::Infallible;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::state::AppState;

/// The user a request acts as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i64,
}

impl<S> FromRequestParts<S> for Identity
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app = AppState::from_ref(state);
        Ok(app.identity())
    }
}
