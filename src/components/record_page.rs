//! Record Page Component
//!
//! Generic master-data screen: an entry form above a searchable, paged
//! table. Works for any `Editable` record; the field table drives both.
//! Read-only screens show just the table.

use bizdesk_core::{Collection, Editable, FieldError, FormController, FormError, ListState, Repository, SubmitOutcome};
use chrono::Local;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::{snapshot, DeleteConfirmButton, FieldInput, ListToolbar, Pager};
use crate::context::AppContext;

#[component]
pub fn RecordPage<R>(
    title: &'static str,
    seed: Vec<R>,
    #[prop(optional)] read_only: bool,
) -> impl IntoView
where
    R: Editable,
{
    let ctx = expect_context::<AppContext>();

    // State, reset each time the screen is opened
    let records = RwSignal::new(Collection::from(seed));
    let form = RwSignal::new(FormController::<R>::default().with_today(Local::now().date_naive()));
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let list = RwSignal::new(ListState::new(ctx.page_size()));

    let page = Memo::new(move |_| records.with(|repo| list.with(|state| snapshot(state.view(repo.list())))));
    let info = Signal::derive(move || page.with(|(_, info)| *info));
    let editing = move || form.with(|f| f.editing().is_some());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let result = records.try_update(|repo| form.try_update(|f| f.submit(repo))).flatten();
        match result {
            Some(Ok(outcome)) => {
                errors.set(Vec::new());
                ctx.success(match outcome {
                    SubmitOutcome::Created(id) => format!("{} #{} saved", R::ENTITY, id),
                    SubmitOutcome::Updated(id) => format!("{} #{} updated", R::ENTITY, id),
                });
            }
            Some(Err(FormError::Invalid(found))) => {
                ctx.error(format!("Please fill in all required {} fields", R::ENTITY.to_lowercase()));
                errors.set(found);
            }
            Some(Err(e)) => ctx.error(e.to_string()),
            None => {}
        }
    };

    let on_cancel = move |_| {
        form.update(|f| f.cancel());
        errors.set(Vec::new());
    };

    let on_edit = move |record: R| {
        let result = records.try_update(|repo| form.try_update(|f| f.edit(&record, repo))).flatten();
        if let Some(Err(e)) = result {
            ctx.error(e.to_string());
        }
        errors.set(Vec::new());
    };

    // Rows are removed by position so a duplicate id never takes a neighbour with it
    let on_delete = move |record: R| {
        let id = record.id();
        let result = records
            .try_update(|repo| {
                let row = repo.position_of(&record)?;
                Some(repo.delete_at(row).map(|_| row))
            })
            .flatten();
        match result {
            Some(Ok(row)) => {
                if form.try_update(|f| f.row_removed(row)).unwrap_or(false) {
                    errors.set(Vec::new());
                }
                ctx.success(format!("{} #{} deleted", R::ENTITY, id));
            }
            Some(Err(e)) => ctx.error(e.to_string()),
            None => ctx.error(format!("{} #{} is no longer listed", R::ENTITY, id)),
        }
    };

    let inputs = R::fields()
        .iter()
        .filter(|spec| spec.input)
        .map(|spec| {
            let key = spec.key;
            let value = Signal::derive(move || form.with(|f| f.get(key).to_string()));
            let error = Signal::derive(move || {
                errors.with(|found| found.iter().find(|e| e.key == key).map(|e| e.to_string()))
            });
            let on_change = Callback::new(move |value: String| {
                form.update(|f| {
                    f.set(key, value);
                });
                errors.update(|found| found.retain(|e| e.key != key));
            });
            view! { <FieldInput spec=*spec value=value on_change=on_change error=error /> }
        })
        .collect_view();

    let row = move |record: R| {
        let id = record.id();
        let position = records.with_untracked(|repo| repo.position_of(&record));
        let cells = R::columns()
            .into_iter()
            .map(|spec| view! { <td>{spec.display(&record.field(spec.key))}</td> })
            .collect_view();
        let for_edit = record.clone();
        view! {
            <tr class=move || {
                let row = form.with(|f| f.editing_row());
                if row.is_some() && row == position { "editing" } else { "" }
            }>
                <td>{id}</td>
                {cells}
                {(!read_only)
                    .then(|| {
                        view! {
                            <td class="row-actions">
                                <button class="edit-btn" on:click=move |_| on_edit(for_edit.clone())>
                                    "Edit"
                                </button>
                                <DeleteConfirmButton
                                    entity=R::ENTITY
                                    id=id
                                    on_confirm=move |_| on_delete(record.clone())
                                />
                            </td>
                        }
                    })}
            </tr>
        }
    };

    let column_count = R::columns().len() + if read_only { 1 } else { 2 };

    view! {
        <section class="record-page">
            <h2 class="page-title">
                {move || if editing() { format!("Edit {}", title) } else { title.to_string() }}
            </h2>

            {(!read_only)
                .then(|| {
                    view! {
                        <form class="record-form" on:submit=on_submit>
                            <div class="form-grid">{inputs}</div>
                            <div class="form-actions">
                                <button type="submit" class="primary-btn">
                                    {move || if editing() { "Update" } else { "Save" }}
                                </button>
                                <button type="button" class="secondary-btn" on:click=on_cancel>
                                    {move || if editing() { "Cancel" } else { "Reset" }}
                                </button>
                            </div>
                        </form>
                    }
                })}

            <div class="record-list">
                <ListToolbar list=list info=info />
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"SL"</th>
                            {R::columns().into_iter().map(|spec| view! { <th>{spec.label}</th> }).collect_view()}
                            {(!read_only).then(|| view! { <th>"Action"</th> })}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let (items, _) = page.get();
                            if items.is_empty() {
                                view! {
                                    <tr>
                                        <td class="empty-row" colspan=column_count.to_string()>
                                            "No records found"
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
        </section>
    }
}

