//! Online Orders Component
//!
//! Pending web-shop orders in a searchable, paged table. "View" opens the
//! details panel where an order is approved or rejected.

use bizdesk_core::domain::{seed, Order};
use bizdesk_core::{Collection, ListState, OrderReview, Record, Repository};
use leptos::prelude::*;

use crate::components::{snapshot, ListToolbar, Pager};
use crate::context::AppContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    Approve,
    Reject,
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let orders = RwSignal::new(Collection::from(seed::orders()));
    let list = RwSignal::new(ListState::new(ctx.page_size()));
    let review = RwSignal::new(None::<OrderReview>);

    let page = Memo::new(move |_| orders.with(|repo| list.with(|state| snapshot(state.view(repo.list())))));
    let info = Signal::derive(move || page.with(|(_, info)| *info));

    let on_decide = Callback::new(move |decision: Decision| {
        let Some(current) = review.get_untracked() else {
            return;
        };
        let result = orders.try_update(|repo| match decision {
            Decision::Approve => current.approve(repo),
            Decision::Reject => current.reject(repo),
        });
        match result {
            Some(Ok(order)) => {
                review.set(None);
                let verb = if decision == Decision::Approve { "approved" } else { "rejected" };
                ctx.success(format!("Order {} {}", order.order_no, verb));
            }
            Some(Err(e)) => ctx.error(e.to_string()),
            None => {}
        }
    });

    let row = move |order: Order| {
        let cells = Order::columns()
            .into_iter()
            .map(|spec| view! { <td>{order.field(spec.key)}</td> })
            .collect_view();
        view! {
            <tr>
                <td>
                    <button class="view-btn" on:click=move |_| review.set(Some(OrderReview::open(&order)))>
                        "View"
                    </button>
                </td>
                {cells}
            </tr>
        }
    };

    let column_count = Order::columns().len() + 1;

    view! {
        <section class="record-page">
            <h2 class="page-title">"Online Orders"</h2>
            <h3 class="section-title">"Pending Orders"</h3>

            <div class="record-list">
                <ListToolbar list=list info=info />
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"View"</th>
                            {Order::columns().into_iter().map(|spec| view! { <th>{spec.label}</th> }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let (items, _) = page.get();
                            if items.is_empty() {
                                view! {
                                    <tr>
                                        <td class="empty-row" colspan=column_count.to_string()>
                                            "No data available"
                                        </td>
                                    </tr>
                                }
                                .into_any()
                            } else {
                                items.into_iter().map(row).collect_view().into_any()
                            }
                        }}
                    </tbody>
                </table>
                <Pager list=list info=info />
            </div>

            <Show when=move || review.with(Option::is_some)>
                <OrderDetails review=review on_decide=on_decide />
            </Show>
        </section>
    }
}

/// Items of the open order with the approve and reject actions
#[component]
fn OrderDetails(review: RwSignal<Option<OrderReview>>, on_decide: Callback<Decision>) -> impl IntoView {
    let items = Memo::new(move |_| review.with(|r| r.as_ref().map(|r| r.order().items.clone()).unwrap_or_default()));
    let order_no = move || review.with(|r| r.as_ref().map(|r| r.order().order_no.clone()).unwrap_or_default());

    view! {
        <div class="modal-backdrop">
            <div class="modal order-details">
                <header class="modal-header">
                    <h3>"Order Details"</h3>
                    <button class="close-btn" on:click=move |_| review.set(None)>
                        "×"
                    </button>
                </header>
                <div class="modal-body">
                    <div class="order-items">
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Product Name"</th>
                                    <th>"Qty"</th>
                                    <th>"Stock"</th>
                                    <th>
                                        "Select "
                                        <input
                                            type="checkbox"
                                            prop:checked=move || review.with(|r| r.as_ref().is_some_and(|r| r.all_selected()))
                                            on:change=move |_| {
                                                review.update(|r| r.iter_mut().for_each(OrderReview::toggle_all))
                                            }
                                        />
                                    </th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    items
                                        .get()
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, item)| {
                                            let short = !item.in_stock();
                                            view! {
                                                <tr class=if short { "short-stock" } else { "" }>
                                                    <td>{item.product}</td>
                                                    <td>{item.quantity}</td>
                                                    <td>{item.stock}</td>
                                                    <td>
                                                        <input
                                                            type="checkbox"
                                                            prop:checked=move || {
                                                                review.with(|r| r.as_ref().is_some_and(|r| r.is_selected(index)))
                                                            }
                                                            on:change=move |_| {
                                                                review.update(|r| r.iter_mut().for_each(|r| r.toggle(index)))
                                                            }
                                                        />
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </tbody>
                        </table>
                        <div class="form-actions">
                            <button class="primary-btn" on:click=move |_| on_decide.run(Decision::Approve)>
                                "Approve"
                            </button>
                            <button class="secondary-btn" on:click=move |_| review.set(None)>
                                "Cancel"
                            </button>
                        </div>
                    </div>
                    <div class="order-decision">
                        <label class="form-field">
                            "Order No"
                            <input type="text" readonly=true prop:value=order_no />
                        </label>
                        <label class="form-field">
                            "Disapprove Cause"
                            <textarea
                                rows="5"
                                placeholder="Disapprove cause can't be empty"
                                prop:value=move || review.with(|r| r.as_ref().map(|r| r.cause.clone()).unwrap_or_default())
                                on:input=move |ev| {
                                    let cause = event_target_value(&ev);
                                    review.update(|r| r.iter_mut().for_each(|r| r.cause = cause.clone()));
                                }
                            ></textarea>
                        </label>
                        <div class="form-actions">
                            <button class="danger-btn" on:click=move |_| on_decide.run(Decision::Reject)>
                                "Reject"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
