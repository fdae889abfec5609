//! Record Screens
//!
//! Binds each record screen to its record type and sample rows.

use bizdesk_core::domain::seed;
use bizdesk_core::{Editable, RecordScreen};
use leptos::prelude::*;

use crate::components::RecordPage;

fn page<R: Editable>(screen: RecordScreen, seed: Vec<R>) -> AnyView {
    view! { <RecordPage title=screen.title() seed=seed read_only=screen.is_read_only() /> }.into_any()
}

#[component]
pub fn RecordScreenView(screen: RecordScreen) -> impl IntoView {
    match screen {
        RecordScreen::Warehouse => page(screen, seed::warehouses()),
        RecordScreen::Brand => page(screen, seed::brands()),
        RecordScreen::ProductCategory => page(screen, seed::categories()),
        RecordScreen::Bank => page(screen, seed::banks()),
        RecordScreen::Branch => page(screen, seed::branches()),
        RecordScreen::Unit => page(screen, seed::units()),
        RecordScreen::Product => page(screen, seed::products()),
        RecordScreen::Supplier => page(screen, seed::suppliers()),
        RecordScreen::Designation => page(screen, seed::designations()),
        RecordScreen::Employee => page(screen, seed::employees()),
        RecordScreen::Size => page(screen, seed::sizes()),
        RecordScreen::Commission => page(screen, seed::commissions()),
        RecordScreen::Customer => page(screen, seed::customers()),
        RecordScreen::AccountGroup => page(screen, seed::account_groups()),
        RecordScreen::AccountHead => page(screen, seed::account_heads()),
        RecordScreen::User => page(screen, seed::users()),
        RecordScreen::ChequeAuthorization => page(screen, seed::cheques()),
        RecordScreen::Message => page(screen, seed::messages()),
        RecordScreen::PaymentReceived => page(screen, seed::payments()),
        RecordScreen::GeneralLedger => page(screen, seed::ledger_entries()),
        RecordScreen::ProductRecipe => page(screen, seed::recipe_materials()),
        RecordScreen::Production => page(screen, seed::production_runs()),
        RecordScreen::ManualConsumption => page(screen, seed::consumptions()),
    }
}
