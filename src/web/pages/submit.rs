// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::utils::TicketDraft;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn SubmitPage() -> impl IntoView {
	let name = RwSignal::new(String::new());
	let email = RwSignal::new(String::new());
	let description = RwSignal::new(String::new());
	let notice = RwSignal::new(None::<String>);

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let draft = TicketDraft {
			name: name.get_untracked(),
			email: email.get_untracked(),
			description: description.get_untracked(),
		};
		spawn_local(async move {
			match create_ticket(draft).await {
				Ok(()) => {
					// Only a confirmed submission clears the form; failures keep the draft.
					name.set(String::new());
					email.set(String::new());
					description.set(String::new());
					notice.set(Some(String::from("Ticket submitted successfully!")));
				}
				Err(error) => {
					leptos::logging::error!("Failed to submit ticket: {}", error);
					notice.set(Some(String::from("Failed to submit ticket. Please try again.")));
				}
			}
		});
	};

	view! {
		<main class="submit_page">
			<h1>"Submit a Support Ticket"</h1>
			{move || notice.get().map(|text| view! { <div class="notice">{text}</div> })}
			<form class="ticket_form" on:submit=on_submit>
				<div class="input_group">
					<label for="name">"Name"</label>
					<input
						type="text"
						id="name"
						prop:value=move || name.get()
						on:input=move |ev| name.set(event_target_value(&ev))
						required=true
					/>
				</div>
				<div class="input_group">
					<label for="email">"Email"</label>
					<input
						type="email"
						id="email"
						prop:value=move || email.get()
						on:input=move |ev| email.set(event_target_value(&ev))
						required=true
					/>
				</div>
				<div class="input_group">
					<label for="description">"Description"</label>
					<textarea
						id="description"
						prop:value=move || description.get()
						on:input=move |ev| description.set(event_target_value(&ev))
						required=true
					></textarea>
				</div>
				<button type="submit" class="submit_button">"Submit Ticket"</button>
			</form>
			<a class="admin_link" href="/admin">
				<button type="button">"Go to Admin Page"</button>
			</a>
		</main>
	}
}

#[server]
async fn create_ticket(draft: TicketDraft) -> Result<(), ServerFnError> {
	use crate::web::state::AppState;

	let state: AppState = expect_context();
	state.backend.create_ticket(&draft).await?;
	Ok(())
}
