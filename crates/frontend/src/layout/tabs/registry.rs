//! Tab key → page view. Every tab key the sidebar can open is listed here.

use crate::domain::a003_dc_stock::ui::list::DcStockList;
use crate::domain::a004_bgs_stock_request::ui::list::BgsStockRequestList;
use crate::domain::a005_pallet_deposit::ui::list::PalletDepositList;
use crate::domain::a006_pallet_counting::ui::list::PalletCountingList;
use crate::domain::a007_trolley_type::ui::list::TrolleyTypeList;
use crate::domain::a008_trolley::ui::list::TrolleyList;
use crate::domain::a009_transaction::ui::list::TransactionList;
use crate::domain::a010_uniform_condition::ui::list::UniformConditionList;
use crate::projections::p900_payroll::ui::list::PayrollList;
use leptos::prelude::*;

pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "a003_dc_stock" => view! { <DcStockList /> }.into_any(),
        "a004_bgs_stock_request" => view! { <BgsStockRequestList /> }.into_any(),
        "a005_pallet_deposit" => view! { <PalletDepositList /> }.into_any(),
        "a006_pallet_counting" => view! { <PalletCountingList /> }.into_any(),
        "a007_trolley_type" => view! { <TrolleyTypeList /> }.into_any(),
        "a008_trolley" => view! { <TrolleyList /> }.into_any(),
        "a009_transaction" => view! { <TransactionList /> }.into_any(),
        "a010_uniform_condition" => view! { <UniformConditionList /> }.into_any(),
        "p900_payroll" => view! { <PayrollList /> }.into_any(),
        unknown => {
            log::warn!("no page registered for tab '{}'", unknown);
            view! { <div class="placeholder">"Page not found"</div> }.into_any()
        }
    }
}
