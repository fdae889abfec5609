//! Sidebar Component
//!
//! Collapsible menu sections built from the static menu tree.

use bizdesk_core::{MenuSection, Route, MENU};
use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{store_close_sidebar, store_toggle_section, use_shell_store, ShellStateStoreFields};

#[component]
pub fn Sidebar(route: Memo<Route>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_shell_store();
    let title = ctx.config().app_title;
    let is_open = move || store.menu().read().sidebar_open;

    view! {
        <aside class=move || if is_open() { "sidebar open" } else { "sidebar" }>
            <div class="sidebar-header">
                <span class="sidebar-title">{title}</span>
                <button class="sidebar-close" on:click=move |_| store_close_sidebar(&store)>
                    "×"
                </button>
            </div>
            <nav class="sidebar-menu">
                {MENU
                    .iter()
                    .map(|section| view! { <SectionLinks section=*section route=route /> })
                    .collect_view()}
            </nav>
        </aside>
        <Show when=is_open>
            <div class="sidebar-backdrop" on:click=move |_| store_close_sidebar(&store)></div>
        </Show>
    }
}

/// One section header and, when expanded, its links
#[component]
fn SectionLinks(section: MenuSection, route: Memo<Route>) -> impl IntoView {
    let store = use_shell_store();
    let id = section.id;
    let expanded = move || store.menu().read().is_open(id);
    let current = move |path: &str| route.with(|r| r.path() == path);

    let header = match section.path {
        Some(path) => view! {
            <a
                class=move || if current(path) { "section-label active" } else { "section-label" }
                href=format!("#{}", path)
                on:click=move |_| store_close_sidebar(&store)
            >
                {section.label}
            </a>
        }
        .into_any(),
        None => view! {
            <span class="section-label" on:click=move |_| store_toggle_section(&store, id)>
                {section.label}
            </span>
        }
        .into_any(),
    };

    view! {
        <div class="menu-section">
            <div class="menu-section-header">
                {header}
                <button class="section-toggle" on:click=move |_| store_toggle_section(&store, id)>
                    {move || if expanded() { "▾" } else { "▸" }}
                </button>
            </div>
            <Show when=expanded>
                <ul class="menu-items">
                    {section
                        .items
                        .iter()
                        .map(|item| {
                            let path = item.path;
                            view! {
                                <li>
                                    <a
                                        class=move || if current(path) { "menu-item active" } else { "menu-item" }
                                        href=format!("#{}", path)
                                        on:click=move |_| store_close_sidebar(&store)
                                    >
                                        {item.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}
