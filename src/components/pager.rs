//! Pager Components
//!
//! Search box and page-size selector above a list, page navigation below.
//! Both only dispatch `ListAction`s into the list's `ListState`.

use bizdesk_core::{ListAction, ListState, PageSize, PageView};
use leptos::prelude::*;

/// The non-row part of a `PageView`, small enough to copy into closures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PagerInfo {
    pub total_items: usize,
    pub total_pages: usize,
    pub page: usize,
    pub first_row: usize,
    pub last_row: usize,
    pub can_first: bool,
    pub can_prev: bool,
    pub can_next: bool,
    pub can_last: bool,
}

impl PagerInfo {
    pub fn of<R>(view: &PageView<'_, R>) -> Self {
        Self {
            total_items: view.total_items,
            total_pages: view.total_pages,
            page: view.page,
            first_row: view.first_row,
            last_row: view.last_row,
            can_first: view.can_first,
            can_prev: view.can_prev,
            can_next: view.can_next,
            can_last: view.can_last,
        }
    }
}

/// Owned copy of the visible rows plus pager numbers
pub fn snapshot<R: Clone>(view: PageView<'_, R>) -> (Vec<R>, PagerInfo) {
    let info = PagerInfo::of(&view);
    (view.items.into_iter().cloned().collect(), info)
}

#[component]
pub fn ListToolbar(list: RwSignal<ListState>, #[prop(into)] info: Signal<PagerInfo>) -> impl IntoView {
    let dispatch = move |action: ListAction| {
        let pages = info.get_untracked().total_pages;
        list.update(|state| state.apply(action, pages));
    };

    view! {
        <div class="list-toolbar">
            <label class="page-size">
                "Show "
                <select on:change=move |ev| {
                    if let Some(size) = event_target_value(&ev).parse::<usize>().ok().and_then(PageSize::from_usize) {
                        dispatch(ListAction::Resize(size));
                    }
                }>
                    {PageSize::ALL
                        .iter()
                        .map(|size| {
                            let size = *size;
                            view! {
                                <option
                                    value=size.as_usize().to_string()
                                    selected=move || list.with(|s| s.page_size == size)
                                >
                                    {size.as_usize()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                " entries"
            </label>
            <input
                class="search-input"
                type="search"
                placeholder="Search..."
                prop:value=move || list.with(|s| s.query.clone())
                on:input=move |ev| dispatch(ListAction::Search(event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn Pager(list: RwSignal<ListState>, #[prop(into)] info: Signal<PagerInfo>) -> impl IntoView {
    let (jump, set_jump) = signal(String::new());
    let dispatch = move |action: ListAction| {
        let pages = info.get_untracked().total_pages;
        list.update(|state| state.apply(action, pages));
    };

    view! {
        <div class="pager">
            <span class="pager-summary">
                {move || {
                    let i = info.get();
                    format!("Showing {} to {} of {} entries", i.first_row, i.last_row, i.total_items)
                }}
            </span>
            <div class="pager-buttons">
                <button disabled=move || !info.get().can_first on:click=move |_| dispatch(ListAction::First)>
                    "First"
                </button>
                <button disabled=move || !info.get().can_prev on:click=move |_| dispatch(ListAction::Prev)>
                    "Prev"
                </button>
                <span class="pager-page">
                    {move || format!("Page {} of {}", info.get().page, info.get().total_pages)}
                </span>
                <button disabled=move || !info.get().can_next on:click=move |_| dispatch(ListAction::Next)>
                    "Next"
                </button>
                <button disabled=move || !info.get().can_last on:click=move |_| dispatch(ListAction::Last)>
                    "Last"
                </button>
            </div>
            <form
                class="pager-jump"
                on:submit=move |ev| {
                    ev.prevent_default();
                    dispatch(ListAction::JumpTo(jump.get_untracked()));
                    set_jump.set(String::new());
                }
            >
                <input
                    type="text"
                    inputmode="numeric"
                    placeholder="Page"
                    prop:value=move || jump.get()
                    on:input=move |ev| set_jump.set(event_target_value(&ev))
                />
                <button type="submit">"Go"</button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizdesk_core::domain::seed;

    #[test]
    fn test_snapshot_copies_rows_and_numbers() {
        let banks = seed::banks();
        let state = ListState { page: 2, ..ListState::new(PageSize::Five) };

        let (rows, info) = snapshot(state.view(&banks));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 6);
        assert_eq!(info.page, 2);
        assert_eq!((info.first_row, info.last_row, info.total_items), (6, 6, 6));
        assert!(info.can_prev && !info.can_next);
    }
}
