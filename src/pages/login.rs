//! Sign-in page: username/password with a remember-me toggle.

use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;

use crate::session::AppSession;

/// Sign-in form. Failure text from the session manager is surfaced verbatim
/// in the alert line.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SendWrapper<Rc<AppSession>>>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);
    let request_error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        request_error.set(None);

        #[cfg(feature = "csr")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                let result = session
                    .sign_in(
                        &username.get_untracked(),
                        &password.get_untracked(),
                        remember.get_untracked(),
                    )
                    .await;
                if let Err(err) = result {
                    leptos::logging::warn!("sign-in failed: {err}");
                    request_error.set(Some(err.to_string()));
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &session;
        }
    };

    view! {
        <div class="login-page">
            <h2>"Log in"</h2>
            <h4>"Log in using your account"</h4>
            <hr/>
            <form class="login-form" on:submit=on_submit>
                <Show when=move || request_error.get().is_some()>
                    <div class="alert alert--danger" role="alert">
                        {move || request_error.get().unwrap_or_default()}
                    </div>
                </Show>
                <label class="form-group">
                    "Username"
                    <input
                        class="form-control"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-group">
                    "Password"
                    <input
                        class="form-control"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-check">
                    "Remember me"
                    <input
                        type="checkbox"
                        prop:checked=move || remember.get()
                        on:change=move |ev| remember.set(event_target_checked(&ev))
                    />
                </label>
                <div class="form-group">
                    <button type="submit" class="btn btn--primary">"Log in"</button>
                </div>
            </form>
            <p>
                <a href="/account/register">"Register as a new user"</a>
            </p>
        </div>
    }
}
