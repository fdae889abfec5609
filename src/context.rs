//! Application Context
//!
//! Shared state provided via Leptos Context API.

use bizdesk_core::{AppConfig, PageSize, Route, StaticAuthenticator};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const TOAST_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Short-lived message shown in the corner after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current (unguarded) route - read
    pub route: ReadSignal<Route>,
    /// Current route - write
    set_route: WriteSignal<Route>,
    /// Visible toast - read
    pub toast: ReadSignal<Option<Toast>>,
    /// Visible toast - write
    set_toast: WriteSignal<Option<Toast>>,
    /// Loaded configuration
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(
        route: (ReadSignal<Route>, WriteSignal<Route>),
        toast: (ReadSignal<Option<Toast>>, WriteSignal<Option<Toast>>),
        config: AppConfig,
    ) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            toast: toast.0,
            set_toast: toast.1,
            config: StoredValue::new(config),
        }
    }

    /// Switch screens; a no-op when already there
    pub fn navigate(&self, route: Route) {
        if self.route.get_untracked() != route {
            tracing::debug!(path = %route.path(), "navigate");
            self.set_route.set(route);
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn page_size(&self) -> PageSize {
        self.config.with_value(|c| c.page_size())
    }

    pub fn authenticator(&self) -> StaticAuthenticator {
        StaticAuthenticator::new(self.config.with_value(|c| c.login.clone()))
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(ToastKind::Error, message.into());
    }

    /// Show a toast and clear it after a few seconds unless replaced
    fn notify(&self, kind: ToastKind, message: String) {
        let id = self.toast.get_untracked().map_or(1, |t| t.id + 1);
        self.set_toast.set(Some(Toast { id, kind, message }));

        let toast = self.toast;
        let set_toast = self.set_toast;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            if toast.get_untracked().is_some_and(|t| t.id == id) {
                set_toast.set(None);
            }
        });
    }

    pub fn dismiss_toast(&self) {
        self.set_toast.set(None);
    }
}
