// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::web::pages::utils::{Ticket, TicketDraft, TicketResponse, TicketStatus};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use thiserror::Error;

/// Failures talking to the ticket backend. Transport problems (connection, decode) and
/// non-success HTTP statuses are kept apart; neither is subdivided further.
#[derive(Debug, Error)]
pub enum BackendError {
	#[error("backend request failed: {0}")]
	Transport(#[from] reqwest::Error),
	#[error("backend returned status {0}")]
	Status(StatusCode),
}

/// Client for the remote ticket backend's REST API.
///
/// Every call is a single best-effort request; callers decide what to surface to the user.
#[derive(Clone, Debug)]
pub struct BackendClient {
	base_url: String,
	http: Client,
}

#[derive(Debug, Serialize)]
struct StatusUpdate {
	status: TicketStatus,
}

#[derive(Debug, Serialize)]
struct NewResponse<'a> {
	description: &'a str,
}

impl BackendClient {
	pub fn new(base_url: &str) -> Self {
		Self {
			base_url: base_url.trim_end_matches('/').to_string(),
			http: Client::new(),
		}
	}

	fn url(&self, path: &str) -> String {
		format!("{}{}", self.base_url, path)
	}

	fn check_status(response: Response) -> Result<Response, BackendError> {
		if response.status().is_success() {
			Ok(response)
		} else {
			tracing::error!(status = %response.status(), url = %response.url(), "Backend request failed");
			Err(BackendError::Status(response.status()))
		}
	}

	/// Creates a new ticket from the submission form's draft.
	/// The backend responds with the created ticket, but nothing past the success check is used.
	pub async fn create_ticket(&self, draft: &TicketDraft) -> Result<(), BackendError> {
		let response = self.http.post(self.url("/api/v1/tickets")).json(draft).send().await?;
		Self::check_status(response)?;
		Ok(())
	}

	/// Fetches the full ticket collection in the order the backend returns it.
	pub async fn tickets(&self) -> Result<Vec<Ticket>, BackendError> {
		let response = self.http.get(self.url("/api/v1/tickets")).send().await?;
		let tickets = Self::check_status(response)?.json().await?;
		Ok(tickets)
	}

	/// Point lookup of a single ticket. Absent tickets surface as [BackendError::Status].
	pub async fn ticket(&self, ticket_id: i64) -> Result<Ticket, BackendError> {
		let response = self
			.http
			.get(self.url(&format!("/api/v1/tickets/{}", ticket_id)))
			.send()
			.await?;
		let ticket = Self::check_status(response)?.json().await?;
		Ok(ticket)
	}

	pub async fn update_status(&self, ticket_id: i64, status: TicketStatus) -> Result<(), BackendError> {
		let response = self
			.http
			.put(self.url(&format!("/api/v1/tickets/{}", ticket_id)))
			.json(&StatusUpdate { status })
			.send()
			.await?;
		Self::check_status(response)?;
		Ok(())
	}

	/// Fetches the response collection for one ticket.
	pub async fn responses(&self, ticket_id: i64) -> Result<Vec<TicketResponse>, BackendError> {
		let response = self
			.http
			.get(self.url(&format!("/api/v1/tickets/{}/responses", ticket_id)))
			.send()
			.await?;
		let responses = Self::check_status(response)?.json().await?;
		Ok(responses)
	}

	/// Appends a response to a ticket. An empty description is sent as-is; the backend decides
	/// whether to accept it.
	pub async fn add_response(&self, ticket_id: i64, description: &str) -> Result<(), BackendError> {
		let response = self
			.http
			.post(self.url(&format!("/api/v1/tickets/{}/responses", ticket_id)))
			.json(&NewResponse { description })
			.send()
			.await?;
		Self::check_status(response)?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::extract::{Path, State};
	use axum::http::StatusCode;
	use axum::routing::get;
	use axum::{Json, Router};
	use chrono::{TimeZone, Utc};
	use std::sync::{Arc, Mutex};

	#[derive(Clone, Default)]
	struct Recorded {
		bodies: Arc<Mutex<Vec<(i64, serde_json::Value)>>>,
	}

	impl Recorded {
		fn take(&self) -> Vec<(i64, serde_json::Value)> {
			self.bodies.lock().unwrap().clone()
		}
	}

	fn sample_tickets() -> Vec<Ticket> {
		vec![
			Ticket {
				id: 1,
				name: String::from("First Reporter"),
				email: String::from("first@example.com"),
				description: String::from("The printer is on fire"),
				status: TicketStatus::Unset,
			},
			Ticket {
				id: 42,
				name: String::from("Second Reporter"),
				email: String::from("second@example.com"),
				description: String::from("Login page loops"),
				status: TicketStatus::InProgress,
			},
		]
	}

	fn sample_responses() -> Vec<TicketResponse> {
		vec![TicketResponse {
			description: String::from("We're looking into it"),
			created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
		}]
	}

	async fn get_tickets() -> Json<Vec<Ticket>> {
		Json(sample_tickets())
	}

	async fn get_ticket(Path(ticket_id): Path<i64>) -> Result<Json<Ticket>, StatusCode> {
		sample_tickets()
			.into_iter()
			.find(|ticket| ticket.id == ticket_id)
			.map(Json)
			.ok_or(StatusCode::NOT_FOUND)
	}

	async fn put_ticket(
		State(recorded): State<Recorded>,
		Path(ticket_id): Path<i64>,
		Json(body): Json<serde_json::Value>,
	) -> StatusCode {
		recorded.bodies.lock().unwrap().push((ticket_id, body));
		StatusCode::OK
	}

	async fn get_responses(Path(_ticket_id): Path<i64>) -> Json<Vec<TicketResponse>> {
		Json(sample_responses())
	}

	async fn post_response(
		State(recorded): State<Recorded>,
		Path(ticket_id): Path<i64>,
		Json(body): Json<serde_json::Value>,
	) -> StatusCode {
		recorded.bodies.lock().unwrap().push((ticket_id, body));
		StatusCode::CREATED
	}

	async fn post_ticket(State(recorded): State<Recorded>, Json(body): Json<serde_json::Value>) -> StatusCode {
		let failing = body.get("name").and_then(|name| name.as_str()) == Some("reject me");
		recorded.bodies.lock().unwrap().push((0, body));
		if failing { StatusCode::INTERNAL_SERVER_ERROR } else { StatusCode::CREATED }
	}

	async fn spawn_backend(recorded: Recorded) -> String {
		let app = Router::new()
			.route("/api/v1/tickets", get(get_tickets).post(post_ticket))
			.route("/api/v1/tickets/{id}", get(get_ticket).put(put_ticket))
			.route("/api/v1/tickets/{id}/responses", get(get_responses).post(post_response))
			.with_state(recorded);
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
		let addr = listener.local_addr().unwrap();
		tokio::spawn(async move {
			axum::serve(listener, app).await.unwrap();
		});
		format!("http://{}", addr)
	}

	#[tokio::test]
	async fn tickets_come_back_in_server_order() {
		let base_url = spawn_backend(Recorded::default()).await;
		let client = BackendClient::new(&base_url);

		let tickets = client.tickets().await.unwrap();
		let ids: Vec<i64> = tickets.iter().map(|ticket| ticket.id).collect();
		assert_eq!(ids, vec![1, 42]);
		assert_eq!(tickets[1].status, TicketStatus::InProgress);
	}

	#[tokio::test]
	async fn point_lookup_finds_existing_ticket() {
		let base_url = spawn_backend(Recorded::default()).await;
		let client = BackendClient::new(&base_url);

		let ticket = client.ticket(42).await.unwrap();
		assert_eq!(ticket.name, "Second Reporter");
	}

	#[tokio::test]
	async fn point_lookup_of_missing_ticket_is_a_status_error() {
		let base_url = spawn_backend(Recorded::default()).await;
		let client = BackendClient::new(&base_url);

		let error = client.ticket(9000).await.unwrap_err();
		match error {
			BackendError::Status(status) => assert_eq!(status, StatusCode::NOT_FOUND),
			BackendError::Transport(error) => panic!("expected status error, got {}", error),
		}
	}

	#[tokio::test]
	async fn status_update_sends_the_wire_label() {
		let recorded = Recorded::default();
		let base_url = spawn_backend(recorded.clone()).await;
		let client = BackendClient::new(&base_url);

		client.update_status(3, TicketStatus::Resolved).await.unwrap();

		let bodies = recorded.take();
		assert_eq!(bodies.len(), 1);
		assert_eq!(bodies[0].0, 3);
		assert_eq!(bodies[0].1, serde_json::json!({ "status": "Resolved" }));
	}

	#[tokio::test]
	async fn responses_deserialize_with_timestamps() {
		let base_url = spawn_backend(Recorded::default()).await;
		let client = BackendClient::new(&base_url);

		let responses = client.responses(1).await.unwrap();
		assert_eq!(responses.len(), 1);
		assert_eq!(responses[0].description, "We're looking into it");
	}

	#[tokio::test]
	async fn empty_response_draft_still_posts_an_empty_description() {
		let recorded = Recorded::default();
		let base_url = spawn_backend(recorded.clone()).await;
		let client = BackendClient::new(&base_url);

		client.add_response(7, "").await.unwrap();

		let bodies = recorded.take();
		assert_eq!(bodies[0].0, 7);
		assert_eq!(bodies[0].1, serde_json::json!({ "description": "" }));
	}

	#[tokio::test]
	async fn ticket_creation_reports_backend_rejection() {
		let recorded = Recorded::default();
		let base_url = spawn_backend(recorded.clone()).await;
		let client = BackendClient::new(&base_url);

		let accepted = TicketDraft {
			name: String::from("Reporter"),
			email: String::from("reporter@example.com"),
			description: String::from("It broke"),
		};
		client.create_ticket(&accepted).await.unwrap();

		let rejected = TicketDraft {
			name: String::from("reject me"),
			..TicketDraft::default()
		};
		let error = client.create_ticket(&rejected).await.unwrap_err();
		match error {
			BackendError::Status(status) => assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR),
			BackendError::Transport(error) => panic!("expected status error, got {}", error),
		}
	}

	#[tokio::test]
	async fn base_url_trailing_slash_is_tolerated() {
		let base_url = spawn_backend(Recorded::default()).await;
		let client = BackendClient::new(&format!("{}/", base_url));

		let tickets = client.tickets().await.unwrap();
		assert_eq!(tickets.len(), 2);
	}
}
