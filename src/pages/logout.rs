//! Logout page: clears the session on entry.

use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;

use crate::session::AppSession;

/// Signs the user out as soon as the route renders; the resulting session
/// event then routes to the sign-in page.
#[component]
pub fn LogoutPage() -> impl IntoView {
    let session = expect_context::<SendWrapper<Rc<AppSession>>>();
    let status = RwSignal::new("Logging out...");

    Effect::new(move || {
        session.sign_out();
        status.set("Logged out");
    });

    view! { <h2 class="logout-page">{move || status.get()}</h2> }
}
