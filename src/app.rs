//! Root application component with routing and session context.

use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    home::HomePage, login::LoginPage, logout::LogoutPage, manage::ManagePage,
    register::RegisterPage,
};
use crate::session;
use crate::session::Identity;

/// Root application component.
///
/// Builds the shared session, provides it (plus a reactive identity mirror)
/// as context, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Rc::new(session::browser_session());
    let user = RwSignal::new(session.current_user());
    provide_context(SendWrapper::new(session));
    provide_context::<RwSignal<Option<Identity>>>(user);

    view! {
        <Title text="Portal"/>

        <Router>
            <Navbar/>
            <main class="container">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("account"), StaticSegment("register")) view=RegisterPage/>
                    <Route path=(StaticSegment("account"), StaticSegment("signin")) view=LoginPage/>
                    <Route path=(StaticSegment("account"), StaticSegment("logout")) view=LogoutPage/>
                    <Route path=(StaticSegment("account"), StaticSegment("manage")) view=ManagePage/>
                </Routes>
            </main>
        </Router>
    }
}
