// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "password";

/// The admin gate's credential check. This is cosmetic, not an authentication mechanism: the
/// literals ship to every browser, and the page itself says so.
fn credentials_match(username: &str, password: &str) -> bool {
	username == ADMIN_USERNAME && password == ADMIN_PASSWORD
}

#[component]
pub fn LoginPage() -> impl IntoView {
	let username = RwSignal::new(String::new());
	let password = RwSignal::new(String::new());
	let notice = RwSignal::new(None::<String>);
	let navigate = use_navigate();

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		if credentials_match(&username.get_untracked(), &password.get_untracked()) {
			let navigate = navigate.clone();
			spawn_local(async move {
				match mark_authenticated().await {
					Ok(()) => navigate("/admin", Default::default()),
					Err(error) => {
						leptos::logging::error!("Failed to store the login flag: {}", error);
						notice.set(Some(String::from("Invalid credentials")));
					}
				}
			});
		} else {
			notice.set(Some(String::from("Invalid credentials")));
		}
	};

	view! {
		<main class="login_page">
			{move || notice.get().map(|text| view! { <div class="notice">{text}</div> })}
			<form class="login_form" on:submit=on_submit>
				<div>
					<label>"Username/password is admin, password. To be made more secure(maybe)"</label>
				</div>
				<div>
					<label>"Username:"</label>
					<input
						type="text"
						prop:value=move || username.get()
						on:input=move |ev| username.set(event_target_value(&ev))
					/>
				</div>
				<div>
					<label>"Password:"</label>
					<input
						type="password"
						prop:value=move || password.get()
						on:input=move |ev| password.set(event_target_value(&ev))
					/>
				</div>
				<button type="submit">"Login"</button>
				<div class="back_to_home">
					<a href="/">
						<button type="button">"Back to Home"</button>
					</a>
				</div>
			</form>
		</main>
	}
}

#[server]
async fn mark_authenticated() -> Result<(), ServerFnError> {
	use crate::web::pages::server_utils::mark_request_authenticated;

	mark_request_authenticated().await
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_the_fixed_literals_pass_the_gate() {
		assert!(credentials_match("admin", "password"));
		assert!(!credentials_match("admin", "hunter2"));
		assert!(!credentials_match("root", "password"));
		assert!(!credentials_match("", ""));
	}
}
