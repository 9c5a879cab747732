// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::web::session_key::IS_AUTHENTICATED;
use crate::web::state::AppState;
use leptos::prelude::*;
use leptos_axum::extract_with_state;
use tower_sessions::session::Session;

/// Gets the session for a request.
/// Must be used from a server function; relies on extracting request data.
async fn get_session_from_request() -> Result<Session, ServerFnError> {
	let state: AppState = expect_context();
	let session: Session = extract_with_state(&state).await?;
	Ok(session)
}

/// Whether the requesting session has passed the login gate.
pub async fn request_is_authenticated() -> Result<bool, ServerFnError> {
	let session = get_session_from_request().await?;
	let flag: Option<bool> = session.get(IS_AUTHENTICATED).await?;
	Ok(flag.unwrap_or(false))
}

pub async fn mark_request_authenticated() -> Result<(), ServerFnError> {
	let session = get_session_from_request().await?;
	session.insert(IS_AUTHENTICATED, true).await?;
	Ok(())
}

pub async fn clear_request_authenticated() -> Result<(), ServerFnError> {
	let session = get_session_from_request().await?;
	session.remove::<bool>(IS_AUTHENTICATED).await?;
	Ok(())
}
