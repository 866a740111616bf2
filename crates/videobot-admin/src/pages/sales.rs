//! Sales section

use leptos::*;

use crate::components::*;
use crate::controller::Action;
use crate::state::use_admin_state;
use crate::types::{SalesSummary, Transaction};

const PERIODS: [u32; 4] = [7, 30, 90, 365];

#[component]
pub fn SalesPage() -> impl IntoView {
    let state = use_admin_state();
    let panel = state.panel;

    let period = Signal::derive(move || panel.with(|p| p.sales_period_days.to_string()));
    let on_period = Callback::new(move |raw: String| match raw.parse::<u32>() {
        Ok(period_days) => state.run(Action::LoadSales { period_days }),
        Err(e) => tracing::warn!(value = %raw, error = %e, "bad sales period"),
    });

    let figure = move |pick: fn(&SalesSummary) -> u64| {
        Signal::derive(move || {
            panel.with(|p| p.sales.as_ref().map(pick).unwrap_or(0).to_string())
        })
    };
    let transactions = Signal::derive(move || {
        panel.with(|p| p.sales.as_ref().map(|s| s.transactions.clone()).unwrap_or_default())
    });

    view! {
        <section class="content-section" id="sales-section">
            <div class="page-header">
                <h1>"Sales"</h1>
                <Select
                    class="period-select"
                    value=period
                    on_change=on_period
                    options={
                        PERIODS
                            .iter()
                            .map(|d| (d.to_string(), format!("Last {d} days")))
                            .collect::<Vec<_>>()
                    }
                />
            </div>

            <div class="stats-grid">
                <StatCard
                    id="period-sales"
                    title="Sales"
                    value=figure(|s| s.sales)
                    icon=IconName::ShoppingCart
                    color="primary"
                />
                <StatCard
                    id="period-revenue"
                    title="Revenue (Stars)"
                    value=figure(|s| s.revenue)
                    icon=IconName::Star
                    color="success"
                />
                <StatCard
                    id="average-sale"
                    title="Average sale"
                    value=figure(|s| s.average)
                    icon=IconName::BarChart
                    color="info"
                />
            </div>

            <div class="card">
                <div class="card-header"><h2>"Transactions"</h2></div>
                <DataTable
                    headers=&["ID", "User", "Product", "Amount", "Status", "Date"]
                    rows=transactions
                    row=|t: Transaction| view! {
                        <tr>
                            <td>{t.id}</td>
                            <td>{t.user}</td>
                            <td>{t.product}</td>
                            <td>{format!("{} ⭐", t.amount_stars)}</td>
                            <td>{t.status}</td>
                            <td>{t.created_at}</td>
                        </tr>
                    }
                    empty_message="No transactions found"
                />
            </div>
        </section>
    }
}
