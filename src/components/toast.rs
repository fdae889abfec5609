//! Toast Component

use leptos::prelude::*;

use crate::context::{AppContext, ToastKind};

#[component]
pub fn ToastView() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    move || {
        ctx.toast.get().map(|toast| {
            let class = match toast.kind {
                ToastKind::Success => "toast toast-success",
                ToastKind::Error => "toast toast-error",
            };
            view! {
                <div class=class role="status" on:click=move |_| ctx.dismiss_toast()>
                    {toast.message}
                </div>
            }
        })
    }
}
