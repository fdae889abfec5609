//! Delete Confirm Button Component
//!
//! Row action that asks "Delete Bank #3?" before removing anything.

use leptos::prelude::*;

/// Confirmation prompt for one record row
pub fn confirm_prompt(entity: &str, id: u32) -> String {
    format!("Delete {} #{}?", entity, id)
}

/// Two-step delete for a table row.
///
/// The first click arms the button and names the record; `on_confirm` only
/// runs from the armed state. Clicking "No" or leaving the row disarms it.
#[component]
pub fn DeleteConfirmButton(
    entity: &'static str,
    id: u32,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let armed = RwSignal::new(false);

    move || {
        if armed.get() {
            view! {
                <span class="delete-confirm" on:mouseleave=move |_| armed.set(false)>
                    <span class="delete-confirm-text">{confirm_prompt(entity, id)}</span>
                    <button
                        class="confirm-btn"
                        on:click=move |_| {
                            armed.set(false);
                            tracing::debug!(entity, id, "delete confirmed");
                            on_confirm.run(());
                        }
                    >
                        "Yes"
                    </button>
                    <button class="cancel-btn" on:click=move |_| armed.set(false)>
                        "No"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button class="delete-btn" title=confirm_prompt(entity, id) on:click=move |_| armed.set(true)>
                    "Delete"
                </button>
            }
            .into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_prompt_names_the_record() {
        assert_eq!(confirm_prompt("Bank", 3), "Delete Bank #3?");
        assert_eq!(confirm_prompt("Product Category", 12), "Delete Product Category #12?");
    }
}
