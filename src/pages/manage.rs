//! Account settings page.

use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::{AppSession, Identity};
use crate::util::format::format_unix_seconds;

/// Minimal account view: who is signed in and until when. Unauthenticated
/// visitors are bounced to the sign-in page.
#[component]
pub fn ManagePage() -> impl IntoView {
    let session = expect_context::<SendWrapper<Rc<AppSession>>>();
    let user = expect_context::<RwSignal<Option<Identity>>>();

    let navigate = use_navigate();
    Effect::new(move || {
        if user.get().is_none() {
            navigate("/account/signin", NavigateOptions::default());
        }
    });

    let username = move || user.get().map(|u| u.username).unwrap_or_default();
    let session_note = session.expires_at().map_or_else(
        || "No active session.".to_owned(),
        |exp| format!("Signed in until {}", format_unix_seconds(exp)),
    );

    view! {
        <div class="manage-page">
            <h2>"Settings"</h2>
            <p class="manage-page__user">{username}</p>
            <p class="manage-page__session">{session_note}</p>
        </div>
    }
}
