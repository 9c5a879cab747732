// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::admin_state::AdminViewState;
use super::utils::{Ticket, TicketResponse, TicketStatus};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

#[component]
pub fn AdminPage() -> impl IntoView {
	let state = RwSignal::new(AdminViewState::default());
	let notice = RwSignal::new(None::<String>);
	let search_query = RwSignal::new(String::new());

	// On mount: bounce sessions that never passed the login gate, then load the ticket
	// collection exactly once.
	let navigate = use_navigate();
	Effect::new(move |_| {
		let navigate = navigate.clone();
		spawn_local(async move {
			let authenticated = session_is_authenticated().await.unwrap_or(false);
			if !authenticated {
				navigate("/login", Default::default());
				return;
			}
			match get_tickets().await {
				Ok(tickets) => state.update(|view| view.set_tickets(tickets)),
				Err(error) => leptos::logging::error!("Failed to load tickets: {}", error),
			}
		});
	});

	let on_search = move |ev: SubmitEvent| {
		ev.prevent_default();
		let query = search_query.get_untracked();
		let query = query.trim().to_string();
		if query.is_empty() {
			state.update(|view| view.clear_search());
			return;
		}
		let Ok(ticket_id) = query.parse::<i64>() else {
			// The backend keys tickets by integer ID, so anything else can't exist.
			state.update(|view| view.clear_search());
			notice.set(Some(String::from("Ticket not found")));
			return;
		};
		spawn_local(async move {
			match find_ticket(ticket_id).await {
				Ok(ticket) => {
					state.update(|view| view.set_search_result(ticket));
					match get_ticket_responses(ticket_id).await {
						Ok(responses) => state.update(|view| view.expand_responses(ticket_id, responses)),
						Err(error) => {
							leptos::logging::error!("Failed to load responses for ticket {}: {}", ticket_id, error)
						}
					}
				}
				Err(error) => {
					leptos::logging::error!("Failed to look up ticket {}: {}", ticket_id, error);
					state.update(|view| view.clear_search());
					notice.set(Some(String::from("Ticket not found")));
				}
			}
		});
	};

	let on_search_input = move |ev| {
		let value = event_target_value(&ev);
		if value.trim().is_empty() {
			state.update(|view| view.clear_search());
		}
		search_query.set(value);
	};

	let logout_navigate = use_navigate();
	let on_logout = move |_| {
		let navigate = logout_navigate.clone();
		spawn_local(async move {
			if let Err(error) = log_out().await {
				leptos::logging::error!("Failed to log out: {}", error);
			}
			navigate("/login", Default::default());
		});
	};

	view! {
		<main class="admin_page">
			<h1>"Admin Dashboard"</h1>
			<div class="admin_actions">
				<form class="ticket_search" on:submit=on_search>
					<input
						type="text"
						placeholder="Search by ticket ID"
						prop:value=move || search_query.get()
						on:input=on_search_input
					/>
					<button type="submit">"Search"</button>
				</form>
				<button type="button" on:click=on_logout>"Logout"</button>
			</div>
			{move || notice.get().map(|text| view! { <div class="notice">{text}</div> })}
			<div class="ticket_list">
				{move || {
					state
						.with(|view| view.visible_tickets().to_vec())
						.into_iter()
						.map(|ticket| view! { <TicketEntry ticket=ticket state=state notice=notice /> })
						.collect::<Vec<_>>()
				}}
			</div>
			<div class="back_to_home">
				<a href="/">
					<button type="button">"Back to Home"</button>
				</a>
			</div>
		</main>
	}
}

#[component]
fn TicketEntry(ticket: Ticket, state: RwSignal<AdminViewState>, notice: RwSignal<Option<String>>) -> impl IntoView {
	let ticket_id = ticket.id;

	let on_toggle_description = move |_| state.update(|view| view.toggle_description(ticket_id));

	let on_toggle_responses = move |_| {
		let was_expanded = state.with_untracked(|view| view.responses_expanded(ticket_id));
		if was_expanded {
			state.update(|view| view.collapse_responses(ticket_id));
		} else {
			// The list only expands once the fetch lands, so a failed fetch leaves it closed.
			spawn_local(async move {
				match get_ticket_responses(ticket_id).await {
					Ok(responses) => state.update(|view| view.expand_responses(ticket_id, responses)),
					Err(error) => {
						leptos::logging::error!("Failed to load responses for ticket {}: {}", ticket_id, error)
					}
				}
			});
		}
	};

	let on_status_change = move |ev| {
		let status = TicketStatus::from(event_target_value(&ev));
		state.update(|view| view.set_pending_status(status));
	};

	let on_status_update = move |_| {
		let status = state.with_untracked(|view| view.pending_status());
		spawn_local(async move {
			match update_ticket_status(ticket_id, status).await {
				Ok(()) => {
					state.update(|view| view.apply_status(ticket_id, status));
					notice.set(Some(String::from("Ticket status updated successfully")));
				}
				Err(error) => {
					leptos::logging::error!("Failed to update status for ticket {}: {}", ticket_id, error);
					notice.set(Some(String::from("Failed to update ticket status")));
				}
			}
		});
	};

	let on_draft_input = move |ev| state.update(|view| view.set_draft(ticket_id, event_target_value(&ev)));

	let on_response_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let description = state.with_untracked(|view| view.draft(ticket_id).to_string());
		spawn_local(async move {
			// The draft clears and the notice shows whether or not the backend accepted the
			// response; failures only get traced. The visible list is not refreshed either;
			// collapsing and re-expanding it fetches the new response.
			if let Err(error) = add_ticket_response(ticket_id, description).await {
				leptos::logging::error!("Failed to submit response for ticket {}: {}", ticket_id, error);
			}
			state.update(|view| view.clear_draft(ticket_id));
			notice.set(Some(String::from("Response submitted successfully")));
		});
	};

	view! {
		<div class="ticket_entry">
			<h2>{format!("{} ({})", ticket.name, ticket.status)}</h2>
			<p>"Email: "{ticket.email.clone()}</p>
			{
				let description = ticket.description.clone();
				move || {
					state
						.with(|view| view.description_expanded(ticket_id))
						.then(|| view! { <p>"Description: "{description.clone()}</p> })
				}
			}
			<button type="button" on:click=on_toggle_description>
				{move || {
					if state.with(|view| view.description_expanded(ticket_id)) {
						"Hide Ticket Description"
					} else {
						"Show Ticket Description"
					}
				}}
			</button>
			<div class="status_update">
				<label for={format!("status_select_{}", ticket_id)}>"Status:"</label>
				<select
					id={format!("status_select_{}", ticket_id)}
					prop:value=move || state.with(|view| view.pending_status().as_str().to_string())
					on:change=on_status_change
				>
					<option value="">"Select Status"</option>
					<option value="In Progress">"In Progress"</option>
					<option value="Resolved">"Resolved"</option>
				</select>
				<button type="button" on:click=on_status_update>"Update Status"</button>
			</div>
			<form class="response_form" on:submit=on_response_submit>
				<textarea
					placeholder="Notify User"
					prop:value=move || state.with(|view| view.draft(ticket_id).to_string())
					on:input=on_draft_input
				></textarea>
				<button type="submit">"Submit Response"</button>
			</form>
			<button type="button" on:click=on_toggle_responses>
				{move || {
					if state.with(|view| view.responses_expanded(ticket_id)) {
						"Collapse Support Responses"
					} else {
						"Show Support Responses"
					}
				}}
			</button>
			{move || {
				state
					.with(|view| {
						view.responses_expanded(ticket_id)
							.then(|| view.responses_for(ticket_id).map(<[TicketResponse]>::to_vec))
							.flatten()
					})
					.map(|responses| {
						view! {
							<ul class="response_list">
								{
									responses
										.into_iter()
										.map(|response| {
											view! {
												<li>
													{response.description.clone()}
													" "
													{response.created_at.to_rfc3339()}
												</li>
											}
										})
										.collect::<Vec<_>>()
								}
							</ul>
						}
					})
			}}
		</div>
	}
}

#[server]
async fn session_is_authenticated() -> Result<bool, ServerFnError> {
	use crate::web::pages::server_utils::request_is_authenticated;

	request_is_authenticated().await
}

#[server]
async fn log_out() -> Result<(), ServerFnError> {
	use crate::web::pages::server_utils::clear_request_authenticated;

	clear_request_authenticated().await
}

#[server]
async fn get_tickets() -> Result<Vec<Ticket>, ServerFnError> {
	use crate::web::state::AppState;

	let state: AppState = expect_context();
	let tickets = state.backend.tickets().await?;
	Ok(tickets)
}

#[server]
async fn find_ticket(ticket_id: i64) -> Result<Ticket, ServerFnError> {
	use crate::web::state::AppState;

	let state: AppState = expect_context();
	let ticket = state.backend.ticket(ticket_id).await?;
	Ok(ticket)
}

#[server]
async fn get_ticket_responses(ticket_id: i64) -> Result<Vec<TicketResponse>, ServerFnError> {
	use crate::web::state::AppState;

	let state: AppState = expect_context();
	let responses = state.backend.responses(ticket_id).await?;
	Ok(responses)
}

#[server]
async fn add_ticket_response(ticket_id: i64, description: String) -> Result<(), ServerFnError> {
	use crate::web::state::AppState;

	let state: AppState = expect_context();
	state.backend.add_response(ticket_id, &description).await?;
	Ok(())
}

#[server]
async fn update_ticket_status(ticket_id: i64, status: TicketStatus) -> Result<(), ServerFnError> {
	use crate::web::state::AppState;

	let state: AppState = expect_context();
	state.backend.update_status(ticket_id, status).await?;
	Ok(())
}
