//! BizDesk Frontend App
//!
//! Hash-routed shell: login and registration pages for visitors, sidebar
//! plus content area for signed-in users.

use bizdesk_core::{AppConfig, Route};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    Dashboard, Header, InvoicePage, LoginForm, OrdersPage, Placeholder, RecordScreenView, RegisterForm, Sidebar,
    ToastView,
};
use crate::context::{AppContext, Toast};
use crate::store::{ShellState, ShellStateStoreFields};

/// Current location hash, `""` when unavailable
fn current_hash() -> String {
    window().location().hash().unwrap_or_default()
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let (route, set_route) = signal(Route::from_path(&current_hash()));
    let (toast, set_toast) = signal::<Option<Toast>>(None);
    let store = Store::new(ShellState::default());

    // Provide context to all children
    let ctx = AppContext::new((route, set_route), (toast, set_toast), config);
    provide_context(ctx);
    provide_context(store);

    // Back/forward buttons and hand-edited URLs
    _ = window_event_listener(leptos::ev::hashchange, move |_| {
        ctx.navigate(Route::from_path(&current_hash()));
    });

    // Keep the address bar in step with the route
    Effect::new(move |_| {
        let path = route.get().path();
        if current_hash() != format!("#{}", path) {
            if let Err(e) = window().location().set_hash(&path) {
                tracing::warn!(?e, "failed to update location hash");
            }
        }
    });

    // Redirect to login whenever there is no session
    let guarded = Memo::new(move |_| route.get().guard(store.auth().read().is_authenticated()));
    Effect::new(move |_| {
        let target = guarded.get();
        if target != route.get_untracked() {
            ctx.navigate(target);
        }
    });

    view! {
        <Show
            when=move || !guarded.get().is_public()
            fallback=move || {
                if guarded.get() == Route::Register {
                    view! { <RegisterForm /> }.into_any()
                } else {
                    view! { <LoginForm /> }.into_any()
                }
            }
        >
            <Shell route=guarded />
        </Show>
        <ToastView />
    }
}

/// Sidebar, top bar and the screen for the current route
#[component]
fn Shell(route: Memo<Route>) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Sidebar route=route />
            <div class="main-area">
                <Header />
                <main class="main-content">
                    {move || screen(route.get())}
                </main>
            </div>
        </div>
    }
}

fn screen(route: Route) -> AnyView {
    match route {
        Route::Dashboard => view! { <Dashboard /> }.into_any(),
        Route::Record(screen) => view! { <RecordScreenView screen=screen /> }.into_any(),
        Route::Invoice(kind) => view! { <InvoicePage kind=kind /> }.into_any(),
        Route::Orders => view! { <OrdersPage /> }.into_any(),
        Route::Unavailable(path) => view! { <Placeholder path=path known=true /> }.into_any(),
        Route::NotFound(path) => view! { <Placeholder path=path known=false /> }.into_any(),
        // Public pages render outside the shell
        Route::Login | Route::Register => ().into_any(),
    }
}
