//! Placeholder Component
//!
//! Shown for menu entries without a screen and for unknown paths.

use bizdesk_core::{menu_label, Route};
use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn Placeholder(path: String, known: bool) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let (title, message) = if known {
        (
            menu_label(&path).unwrap_or("Coming soon").to_string(),
            "This screen is not available yet.".to_string(),
        )
    } else {
        ("Page not found".to_string(), format!("Nothing lives at {}", path))
    };

    view! {
        <section class="placeholder">
            <h2 class="page-title">{title}</h2>
            <p>{message}</p>
            <button class="secondary-btn" on:click=move |_| ctx.navigate(Route::Dashboard)>
                "Back to Dashboard"
            </button>
        </section>
    }
}
