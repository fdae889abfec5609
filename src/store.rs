//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use bizdesk_core::{AuthState, Authenticator, Credentials, MenuState};
use leptos::prelude::*;
use reactive_stores::Store;

/// Shell state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ShellState {
    /// Signed-in session, if any
    pub auth: AuthState,
    /// Expanded menu sections and the mobile sidebar flag
    pub menu: MenuState,
}

/// Type alias for the store
pub type ShellStore = Store<ShellState>;

/// Get the shell store from context
pub fn use_shell_store() -> ShellStore {
    expect_context::<ShellStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Authenticate and keep the session; returns the display name
pub fn store_login(store: &ShellStore, auth: &impl Authenticator, credentials: &Credentials) -> Result<String, String> {
    store
        .auth()
        .write()
        .login(auth, credentials)
        .map(|session| session.name.clone())
        .map_err(|e| e.to_string())
}

pub fn store_logout(store: &ShellStore) {
    store.auth().write().logout();
}

pub fn store_toggle_section(store: &ShellStore, id: &str) {
    store.menu().write().toggle(id);
}

pub fn store_toggle_sidebar(store: &ShellStore) {
    store.menu().write().toggle_sidebar();
}

pub fn store_close_sidebar(store: &ShellStore) {
    store.menu().write().close_sidebar();
}
