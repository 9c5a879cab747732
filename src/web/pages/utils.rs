// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A support request as the backend returns it.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Ticket {
	/// Backend-assigned identifier; never generated client-side.
	pub id: i64,
	pub name: String,
	pub email: String,
	pub description: String,
	#[serde(default)]
	pub status: TicketStatus,
}

/// The submission form's in-memory record; serializes into the ticket-creation POST body.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct TicketDraft {
	pub name: String,
	pub email: String,
	pub description: String,
}

/// An admin-authored note attached to one ticket. Append-only from the client's perspective.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TicketResponse {
	pub description: String,
	pub created_at: DateTime<Utc>,
}

/// Ticket lifecycle status. The backend stores the display label verbatim, with the empty
/// string for tickets whose status was never set; unrecognized labels degrade to unset.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(from = "String", into = "String")]
pub enum TicketStatus {
	#[default]
	Unset,
	InProgress,
	Resolved,
}

impl TicketStatus {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Unset => "",
			Self::InProgress => "In Progress",
			Self::Resolved => "Resolved",
		}
	}
}

impl From<String> for TicketStatus {
	fn from(value: String) -> Self {
		match value.as_str() {
			"In Progress" => Self::InProgress,
			"Resolved" => Self::Resolved,
			_ => Self::Unset,
		}
	}
}

impl From<TicketStatus> for String {
	fn from(status: TicketStatus) -> Self {
		status.as_str().to_string()
	}
}

impl fmt::Display for TicketStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn status_round_trips_through_wire_labels() {
		assert_eq!(TicketStatus::from(String::from("")), TicketStatus::Unset);
		assert_eq!(TicketStatus::from(String::from("In Progress")), TicketStatus::InProgress);
		assert_eq!(TicketStatus::from(String::from("Resolved")), TicketStatus::Resolved);
		assert_eq!(TicketStatus::Resolved.as_str(), "Resolved");
	}

	#[test]
	fn unknown_status_labels_degrade_to_unset() {
		assert_eq!(TicketStatus::from(String::from("Escalated")), TicketStatus::Unset);
	}

	#[test]
	fn ticket_deserializes_from_backend_shape() {
		let ticket: Ticket = serde_json::from_str(
			r#"{"id":7,"name":"Reporter","email":"reporter@example.com","description":"Broken","status":"In Progress"}"#,
		)
		.unwrap();
		assert_eq!(ticket.id, 7);
		assert_eq!(ticket.status, TicketStatus::InProgress);

		let unset: Ticket =
			serde_json::from_str(r#"{"id":8,"name":"","email":"","description":"","status":""}"#).unwrap();
		assert_eq!(unset.status, TicketStatus::Unset);
	}

	#[test]
	fn status_serializes_as_its_label() {
		let body = serde_json::to_string(&TicketStatus::InProgress).unwrap();
		assert_eq!(body, r#""In Progress""#);
	}
}
