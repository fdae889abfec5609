//! Dashboard Component
//!
//! Landing screen after login: quick links and the recent activity log.

use bizdesk_core::{RecordScreen, Route};
use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_shell_store, ShellStateStoreFields};

const QUICK_LINKS: &[RecordScreen] = &[
    RecordScreen::Product,
    RecordScreen::Customer,
    RecordScreen::Supplier,
    RecordScreen::Employee,
];

/// Lines shown under "Recent activity", newest first
const ACTIVITY_LINES: usize = 15;

fn recent_activity() -> Vec<String> {
    rolling_logger::recent_lines().into_iter().rev().take(ACTIVITY_LINES).collect()
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_shell_store();
    let (activity, set_activity) = signal(recent_activity());
    let greeting = move || {
        store
            .auth()
            .read()
            .session
            .as_ref()
            .map(|session| format!("Welcome back, {}", session.name))
            .unwrap_or_default()
    };

    view! {
        <section class="dashboard">
            <h2 class="page-title">"Dashboard"</h2>
            <p class="dashboard-greeting">{greeting}</p>
            <p class="dashboard-org">{ctx.config().organization}</p>

            <div class="quick-links">
                {QUICK_LINKS
                    .iter()
                    .map(|screen| {
                        let screen = *screen;
                        view! {
                            <button class="quick-link" on:click=move |_| ctx.navigate(Route::Record(screen))>
                                {screen.title()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="activity-log">
                <div class="activity-header">
                    <h3>"Recent activity"</h3>
                    <button class="secondary-btn" on:click=move |_| set_activity.set(recent_activity())>
                        "Refresh"
                    </button>
                </div>
                <Show
                    when=move || !activity.get().is_empty()
                    fallback=|| view! { <p class="empty-row">"No activity yet"</p> }
                >
                    <ul class="activity-lines">
                        <For
                            each=move || activity.get().into_iter().enumerate()
                            key=|(index, line)| (*index, line.clone())
                            children=|(_, line)| view! { <li><code>{line}</code></li> }
                        />
                    </ul>
                </Show>
            </div>
        </section>
    }
}
