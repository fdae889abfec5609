//! Header Component
//!
//! Top bar with the sidebar toggle, organization name and session menu.

use bizdesk_core::Route;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{store_logout, store_toggle_sidebar, use_shell_store, ShellStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_shell_store();
    let organization = ctx.config().organization;
    let user_name = move || {
        store
            .auth()
            .read()
            .session
            .as_ref()
            .map(|session| session.name.clone())
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        store_logout(&store);
        ctx.navigate(Route::Login);
        ctx.success("Signed out");
    };

    view! {
        <header class="top-bar">
            <button class="menu-toggle" on:click=move |_| store_toggle_sidebar(&store)>
                "☰"
            </button>
            <span class="organization">{organization}</span>
            <div class="user-menu">
                <span class="user-name">{user_name}</span>
                <button class="logout-btn" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </header>
    }
}
