//! Invoice Page Component
//!
//! Line-item entry for purchase, sales, adjustment and warehouse transfer
//! screens, with the invoices posted this session listed underneath.

use bizdesk_core::domain::{format_number, seed};
use bizdesk_core::{Collection, Invoice, InvoiceDraft, InvoiceKind, ListState, PayType, Record, Repository, Settlement};
use chrono::{Local, NaiveDate};
use leptos::prelude::*;

use crate::components::{snapshot, ListToolbar, Pager};
use crate::context::AppContext;

/// Names offered by the counterparty selector
fn party_names(kind: InvoiceKind) -> Vec<String> {
    match kind {
        InvoiceKind::Purchase | InvoiceKind::PurchaseReturn => {
            seed::suppliers().into_iter().map(|s| s.name).collect()
        }
        InvoiceKind::Sales | InvoiceKind::SalesReturn => {
            seed::customers().into_iter().map(|c| c.customer_name).collect()
        }
        InvoiceKind::Adjustment | InvoiceKind::WarehouseSend | InvoiceKind::WarehouseReceive => {
            seed::warehouses().into_iter().map(|w| w.name).collect()
        }
    }
}

fn options(names: &[String], selected: impl Fn() -> String + Copy + Send + Sync + 'static) -> impl IntoView {
    names
        .iter()
        .map(|name| {
            let name = name.clone();
            let value = name.clone();
            view! {
                <option value=value.clone() selected=move || selected() == value>
                    {name}
                </option>
            }
        })
        .collect_view()
}

#[component]
pub fn InvoicePage(kind: InvoiceKind) -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    // State, reset each time the screen is opened
    let draft = RwSignal::new(InvoiceDraft::new(kind, Local::now().date_naive()));
    let journal = RwSignal::new(Collection::<Invoice>::new());
    let list = RwSignal::new(ListState::new(ctx.page_size()));
    let products = StoredValue::new(seed::products());

    let parties = party_names(kind);
    let warehouses: Vec<String> = seed::warehouses().into_iter().map(|w| w.name).collect();
    let product_names: Vec<String> = products.with_value(|all| all.iter().map(|p| p.product_name.clone()).collect());

    let page = Memo::new(move |_| journal.with(|repo| list.with(|state| snapshot(state.view(repo.list())))));
    let info = Signal::derive(move || page.with(|(_, info)| *info));

    let on_product = move |ev: leptos::ev::Event| {
        let name = event_target_value(&ev);
        products.with_value(|all| match all.iter().find(|p| p.product_name == name) {
            Some(product) => draft.update(|d| d.select_product(product)),
            None => draft.update(|d| d.line.product.clear()),
        });
    };

    let on_add = move |_| {
        if let Some(Err(e)) = draft.try_update(|d| d.add_line()) {
            ctx.error(e.to_string());
        }
    };

    let on_finalize = move |_| match journal.try_update(|repo| draft.try_update(|d| d.finalize(repo))).flatten() {
        Some(Ok(invoice)) => ctx.success(format!("Invoice {} saved", invoice.invoice_no)),
        Some(Err(e)) => ctx.error(e.to_string()),
        None => {}
    };

    let on_clear = move |_| draft.update(|d| *d = InvoiceDraft::new(kind, d.date));

    // Committed on change so typing is never reformatted mid-number
    let amount = move |label: &'static str, field: fn(&mut Settlement) -> &mut f64| {
        view! {
            <label class="form-field">
                {label}
                <input
                    type="number"
                    step="any"
                    prop:value=move || draft.with(|d| format_number(*field(&mut d.settlement.clone())))
                    on:change=move |ev| {
                        let value = event_target_value(&ev).trim().parse::<f64>().unwrap_or(0.0);
                        draft.update(|d| *field(&mut d.settlement) = value);
                    }
                />
            </label>
        }
    };

    let party_label = kind.party_label();
    let needs_warehouse = kind.needs_warehouse();

    view! {
        <section class="invoice-page">
            <h2 class="page-title">{kind.title()}</h2>

            <div class="invoice-header form-grid">
                <label class="form-field">
                    {party_label}
                    <span class="required">" *"</span>
                    <select on:change=move |ev| draft.update(|d| d.party = event_target_value(&ev))>
                        <option value="" selected=move || draft.with(|d| d.party.is_empty())>
                            {format!("Select {}", party_label)}
                        </option>
                        {options(&parties, move || draft.with(|d| d.party.clone()))}
                    </select>
                </label>
                {needs_warehouse
                    .then(|| {
                        view! {
                            <label class="form-field">
                                "Warehouse"
                                <span class="required">" *"</span>
                                <select on:change=move |ev| draft.update(|d| d.warehouse = event_target_value(&ev))>
                                    <option value="" selected=move || draft.with(|d| d.warehouse.is_empty())>
                                        "Select Warehouse"
                                    </option>
                                    {options(&warehouses, move || draft.with(|d| d.warehouse.clone()))}
                                </select>
                            </label>
                        }
                    })}
                <label class="form-field">
                    "Date"
                    <input
                        type="date"
                        prop:value=move || draft.with(|d| d.date.format("%Y-%m-%d").to_string())
                        on:change=move |ev| {
                            if let Ok(date) = NaiveDate::parse_from_str(&event_target_value(&ev), "%Y-%m-%d") {
                                draft.update(|d| d.date = date);
                            }
                        }
                    />
                </label>
                <label class="form-field">
                    "Invoice No"
                    <input
                        type="text"
                        placeholder=format!("Auto ({}-xxxx)", kind.prefix())
                        prop:value=move || draft.with(|d| d.invoice_no.clone())
                        on:input=move |ev| draft.update(|d| d.invoice_no = event_target_value(&ev))
                    />
                </label>
            </div>

            <div class="line-entry form-grid">
                <label class="form-field">
                    "Product"
                    <select on:change=on_product>
                        <option value="" selected=move || draft.with(|d| d.line.product.is_empty())>
                            "Select Product"
                        </option>
                        {options(&product_names, move || draft.with(|d| d.line.product.clone()))}
                    </select>
                </label>
                <label class="form-field">
                    "Quantity"
                    <input
                        type="number"
                        step="any"
                        prop:value=move || draft.with(|d| d.line.quantity.clone())
                        on:input=move |ev| draft.update(|d| d.line.quantity = event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    "Price"
                    <input
                        type="number"
                        step="any"
                        prop:value=move || draft.with(|d| d.line.price.clone())
                        on:input=move |ev| draft.update(|d| d.line.price = event_target_value(&ev))
                    />
                </label>
                <div class="form-actions">
                    <button type="button" class="primary-btn" on:click=on_add>
                        "Add to List"
                    </button>
                </div>
            </div>

            <table class="data-table line-table">
                <thead>
                    <tr>
                        <th>"SL"</th>
                        <th>"Product"</th>
                        <th>"Quantity"</th>
                        <th>"Price"</th>
                        <th>"Total"</th>
                        <th>"Action"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || draft.with(|d| d.lines().iter().cloned().enumerate().collect::<Vec<_>>())
                        key=|(index, line)| (*index, line.id)
                        children=move |(index, line)| {
                            let id = line.id;
                            view! {
                                <tr>
                                    <td>{index + 1}</td>
                                    <td>{line.product.clone()}</td>
                                    <td>{format_number(line.quantity)}</td>
                                    <td>{format_number(line.price)}</td>
                                    <td>{format_number(line.total())}</td>
                                    <td class="row-actions">
                                        <button
                                            class="edit-btn"
                                            on:click=move |_| {
                                                draft.update(|d| {
                                                    d.edit_line(id);
                                                });
                                            }
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="delete-btn"
                                            on:click=move |_| {
                                                draft.update(|d| {
                                                    d.remove_line(id);
                                                });
                                            }
                                        >
                                            "Remove"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <div class="invoice-totals">
                <div class="total-row">
                    <span>"Sub Total"</span>
                    <strong>{move || format_number(draft.with(|d| d.subtotal()))}</strong>
                </div>
                <Show when=move || kind.has_settlement()>
                    <div class="settlement form-grid">
                        <label class="form-field">
                            "Pay Type"
                            <select on:change=move |ev| {
                                if let Some(pay_type) = PayType::from_label(&event_target_value(&ev)) {
                                    draft.update(|d| d.pay_type = pay_type);
                                }
                            }>
                                {PayType::ALL
                                    .iter()
                                    .map(|pay_type| {
                                        let pay_type = *pay_type;
                                        view! {
                                            <option
                                                value=pay_type.label()
                                                selected=move || draft.with(|d| d.pay_type == pay_type)
                                            >
                                                {pay_type.label()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </label>
                        {amount("Previous Due", |s| &mut s.previous_due)}
                        {amount("Shipping Cost", |s| &mut s.shipping)}
                        {amount("Less Amount", |s| &mut s.less)}
                        {amount("Paid Amount", |s| &mut s.paid)}
                    </div>
                    <div class="total-row">
                        <span>"Payable"</span>
                        <strong>{move || format_number(draft.with(|d| d.payable()))}</strong>
                    </div>
                    <div class="total-row">
                        <span>"Due"</span>
                        <strong>{move || format_number(draft.with(|d| d.due()))}</strong>
                    </div>
                </Show>
            </div>

            <div class="form-actions">
                <button type="button" class="primary-btn" on:click=on_finalize>
                    "Save Invoice"
                </button>
                <button type="button" class="secondary-btn" on:click=on_clear>
                    "Clear"
                </button>
            </div>

            <div class="record-list">
                <h3>"Saved Invoices"</h3>
                <ListToolbar list=list info=info />
                <table class="data-table">
                    <thead>
                        <tr>
                            {Invoice::columns().into_iter().map(|spec| view! { <th>{spec.label}</th> }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            page.with(|(items, _)| {
                                items
                                    .iter()
                                    .map(|invoice| {
                                        let cells = Invoice::columns()
                                            .into_iter()
                                            .map(|spec| view! { <td>{invoice.field(spec.key)}</td> })
                                            .collect_view();
                                        view! { <tr>{cells}</tr> }
                                    })
                                    .collect_view()
                            })
                        }}
                    </tbody>
                </table>
                <Pager list=list info=info />
            </div>
        </section>
    }
}
