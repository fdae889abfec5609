//! Login Form Component
//!
//! Email/password sign-in checked by the configured authenticator.

use bizdesk_core::{Credentials, Route};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{store_login, use_shell_store};

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_shell_store();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials::new(email.get_untracked(), password.get_untracked());
        match store_login(&store, &ctx.authenticator(), &credentials) {
            Ok(name) => {
                set_error.set(None);
                set_password.set(String::new());
                ctx.navigate(Route::Dashboard);
                ctx.success(format!("Welcome, {}", name));
            }
            Err(message) => set_error.set(Some(message)),
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>{ctx.config().app_title}</h1>
                <p class="auth-subtitle">"Sign in to your account"</p>
                <label class="form-field">
                    "Email"
                    <input
                        type="email"
                        placeholder="admin@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                <button type="submit" class="primary-btn">
                    "Login"
                </button>
                <p class="auth-switch">
                    "Don't have an account? "
                    <a href="#/register">"Register"</a>
                </p>
            </form>
        </div>
    }
}
