//! Top navigation bar and the session-driven route transitions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar owns the app's reaction to session events: every event
//! refreshes the shared identity signal, then `LoggedIn` routes home while
//! `LoggedOut`/`Registered` route to the sign-in page.

use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::{AppSession, Identity, SessionEvent};

/// Fixed top navigation bar. Anonymous visitors see Register/Login; signed-in
/// users see their username, Settings, and Logout.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SendWrapper<Rc<AppSession>>>();
    let user = expect_context::<RwSignal<Option<Identity>>>();
    let navigate = use_navigate();

    let bus_session = session.clone();
    session.events().subscribe(move |event| {
        user.set(bus_session.current_user());
        let target = match event {
            SessionEvent::LoggedIn => "/",
            SessionEvent::LoggedOut | SessionEvent::Registered => "/account/signin",
        };
        navigate(target, NavigateOptions::default());
    });

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand" title="Portal">"Portal"</a>
            <a href="/" class="navbar__link" title="Home">"Home"</a>
            <span class="navbar__spacer"></span>
            <Show
                when=move || user.get().is_some()
                fallback=|| view! {
                    <a href="/account/register" class="navbar__link" title="Register">"Register"</a>
                    <a href="/account/signin" class="navbar__link" title="Login">"Login"</a>
                }
            >
                <span class="navbar__user">
                    {move || user.get().map(|u| u.username).unwrap_or_default()}
                </span>
                <a href="/account/manage" class="navbar__link" title="Manage">"Settings"</a>
                <a href="/account/logout" class="navbar__link navbar__link--danger" title="Logout">"Logout"</a>
            </Show>
        </nav>
    }
}
