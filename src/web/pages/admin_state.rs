// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::utils::{Ticket, TicketResponse, TicketStatus};
use std::collections::HashMap;

/// State the admin dashboard holds for one session.
///
/// Everything here mirrors whatever the backend last returned; each mutation happens in
/// response to a single user action and replaces the previous value outright. Nothing is
/// persisted.
#[derive(Clone, Debug, Default)]
pub struct AdminViewState {
	tickets: Vec<Ticket>,
	responses: HashMap<i64, Vec<TicketResponse>>,
	expanded_description: Option<i64>,
	expanded_responses: Option<i64>,
	response_drafts: HashMap<i64, String>,
	pending_status: TicketStatus,
	searched_ticket: Option<Ticket>,
}

impl AdminViewState {
	/// Replaces the ticket collection with a fresh load, keeping the backend's order.
	pub fn set_tickets(&mut self, tickets: Vec<Ticket>) {
		self.tickets = tickets;
	}

	/// The tickets to render: the searched ticket alone while a search is active, the full
	/// collection otherwise.
	pub fn visible_tickets(&self) -> &[Ticket] {
		match &self.searched_ticket {
			Some(ticket) => std::slice::from_ref(ticket),
			None => &self.tickets,
		}
	}

	pub fn description_expanded(&self, ticket_id: i64) -> bool {
		self.expanded_description == Some(ticket_id)
	}

	/// Expands one ticket's description, collapsing any other ticket's; selecting the ticket
	/// that's already expanded collapses it.
	pub fn toggle_description(&mut self, ticket_id: i64) {
		if self.expanded_description == Some(ticket_id) {
			self.expanded_description = None;
		} else {
			self.expanded_description = Some(ticket_id);
		}
	}

	pub fn responses_expanded(&self, ticket_id: i64) -> bool {
		self.expanded_responses == Some(ticket_id)
	}

	/// Shows a freshly-fetched response list for one ticket.
	pub fn expand_responses(&mut self, ticket_id: i64, responses: Vec<TicketResponse>) {
		self.expanded_responses = Some(ticket_id);
		self.responses.insert(ticket_id, responses);
	}

	/// Hides a ticket's response list and drops its cached responses, so the next expansion
	/// fetches them again instead of showing stale data.
	pub fn collapse_responses(&mut self, ticket_id: i64) {
		if self.expanded_responses == Some(ticket_id) {
			self.expanded_responses = None;
		}
		self.responses.remove(&ticket_id);
	}

	pub fn responses_for(&self, ticket_id: i64) -> Option<&[TicketResponse]> {
		self.responses.get(&ticket_id).map(Vec::as_slice)
	}

	pub fn draft(&self, ticket_id: i64) -> &str {
		self.response_drafts.get(&ticket_id).map(String::as_str).unwrap_or("")
	}

	pub fn set_draft(&mut self, ticket_id: i64, text: String) {
		self.response_drafts.insert(ticket_id, text);
	}

	pub fn clear_draft(&mut self, ticket_id: i64) {
		self.response_drafts.remove(&ticket_id);
	}

	/// The status the next "Update Status" press will submit. One value is shared across every
	/// rendered ticket's selector; changing it anywhere changes it everywhere.
	pub fn pending_status(&self) -> TicketStatus {
		self.pending_status
	}

	pub fn set_pending_status(&mut self, status: TicketStatus) {
		self.pending_status = status;
	}

	/// Rewrites one ticket's status in the held collection once the backend has confirmed the
	/// update. Every other ticket is untouched.
	pub fn apply_status(&mut self, ticket_id: i64, status: TicketStatus) {
		for ticket in &mut self.tickets {
			if ticket.id == ticket_id {
				ticket.status = status;
			}
		}
	}

	/// Replaces the rendered listing with a single searched ticket.
	pub fn set_search_result(&mut self, ticket: Ticket) {
		self.searched_ticket = Some(ticket);
	}

	/// Drops the searched-ticket override, restoring the full listing.
	pub fn clear_search(&mut self) {
		self.searched_ticket = None;
	}
}
