//! Registration page with client-side field checks.

use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;

use crate::net::types::Registration;
use crate::session::AppSession;
use crate::util::validate::{valid_email, valid_password, valid_username};

const USERNAME_ERROR: &str = "Username can only contain a-z, A-Z, 0-9, - and _";
const EMAIL_ERROR: &str = "Email must be like 'myemail@provider.com'";
const PASSWORD_ERROR: &str = "Password must be at least 6 characters long";
const CONFIRM_ERROR: &str = "Passwords do not match";

/// Account creation form. Fields are checked locally before any network
/// call; a rejected registration surfaces the server's failure text.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SendWrapper<Rc<AppSession>>>();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());

    let username_error = RwSignal::new(false);
    let email_error = RwSignal::new(false);
    let password_error = RwSignal::new(false);
    let confirm_error = RwSignal::new(false);
    let request_error = RwSignal::new(None::<String>);

    let on_register = move |_| {
        let valid_user = valid_username(&username.get_untracked());
        let valid_mail = valid_email(&email.get_untracked());
        let valid_pass = valid_password(&password.get_untracked());
        let valid_confirm = password.get_untracked() == confirm.get_untracked();
        username_error.set(!valid_user);
        email_error.set(!valid_mail);
        password_error.set(!valid_pass);
        confirm_error.set(!valid_confirm);
        if !(valid_user && valid_mail && valid_pass && valid_confirm) {
            return;
        }
        request_error.set(None);

        let registration = Registration {
            username: username.get_untracked(),
            password: password.get_untracked(),
            email: email.get_untracked(),
        };
        #[cfg(feature = "csr")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                if let Err(err) = session.register(&registration).await {
                    leptos::logging::warn!("registration failed: {err}");
                    request_error.set(Some(err.to_string()));
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&session, registration);
        }
    };

    view! {
        <div class="register-page">
            <h2>"Register"</h2>
            <h4>"Create a new account."</h4>
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
                <Show when=move || username_error.get()>
                    <span class="text-danger">{USERNAME_ERROR}</span>
                </Show>
            </label>
            <label class="form-group">
                "Email"
                <input
                    class="form-control"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <Show when=move || email_error.get()>
                    <span class="text-danger">{EMAIL_ERROR}</span>
                </Show>
            </label>
            <label class="form-group">
                "Password"
                <input
                    class="form-control"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <Show when=move || password_error.get()>
                    <span class="text-danger">{PASSWORD_ERROR}</span>
                </Show>
            </label>
            <label class="form-group">
                "Confirm password"
                <input
                    class="form-control"
                    type="password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
                <Show when=move || confirm_error.get()>
                    <span class="text-danger">{CONFIRM_ERROR}</span>
                </Show>
            </label>
            <button class="btn btn--primary" on:click=on_register>"Register"</button>
        </div>
    }
}
