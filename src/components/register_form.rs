//! Register Form Component

use bizdesk_core::{RegistrationForm, Route};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::context::AppContext;

/// Sign-up page. Nothing is stored; a valid form returns to the login page.
#[component]
pub fn RegisterForm() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let form = RwSignal::new(RegistrationForm::default());
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(RegistrationForm::validate) {
            Ok(()) => {
                tracing::info!(email = %form.with_untracked(|f| f.email.clone()), "registration accepted");
                form.set(RegistrationForm::default());
                set_error.set(None);
                ctx.navigate(Route::Login);
                ctx.success("Registration successful, please sign in");
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    let input = move |label: &'static str, kind: &'static str, field: fn(&mut RegistrationForm) -> &mut String| {
        view! {
            <label class="form-field">
                {label}
                <input
                    type=kind
                    prop:value=move || form.with(|f| field(&mut f.clone()).clone())
                    on:input=move |ev| form.update(|f| *field(f) = event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Create Account"</h1>
                {input("Full name", "text", |f| &mut f.full_name)}
                {input("Email", "email", |f| &mut f.email)}
                {input("Password", "password", |f| &mut f.password)}
                {input("Confirm password", "password", |f| &mut f.confirm_password)}
                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                <button type="submit" class="primary-btn">
                    "Register"
                </button>
                <p class="auth-switch">
                    "Already have an account? "
                    <a href="#/login">"Login"</a>
                </p>
            </form>
        </div>
    }
}
