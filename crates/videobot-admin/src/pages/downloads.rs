//! Downloads section: delivery report and link maintenance

use leptos::*;

use crate::components::*;
use crate::controller::Action;
use crate::state::use_admin_state;
use crate::types::{DeliveryReport, ProductDeliveries};

#[component]
pub fn DownloadsPage() -> impl IntoView {
    let state = use_admin_state();
    let panel = state.panel;

    let metric = move |render: fn(&DeliveryReport) -> String| {
        Signal::derive(move || {
            panel.with(|p| render(p.delivery.as_ref().unwrap_or(&DeliveryReport::default())))
        })
    };
    let products = Signal::derive(move || {
        panel.with(|p| p.delivery.as_ref().map(|d| d.products.clone()).unwrap_or_default())
    });
    let loaded = move || panel.with(|p| p.delivery.is_some());

    let cleanup = {
        let state = state.clone();
        move |_| state.run(Action::CleanupExpiredDownloads)
    };
    let warn = move |_| state.run(Action::SendExpiryWarnings);

    view! {
        <section class="content-section" id="downloads-section">
            <div class="page-header">
                <h1>"Downloads"</h1>
                <div class="page-actions">
                    <button class="btn btn-outline-primary" on:click=warn>
                        <Icon name=IconName::Send size=IconSize::Sm />
                        "Send expiry warnings"
                    </button>
                    <button class="btn btn-warning" on:click=cleanup>
                        <Icon name=IconName::Trash size=IconSize::Sm />
                        "Clean up expired"
                    </button>
                </div>
            </div>

            <div class="stats-grid">
                <StatCard
                    id="active-downloads"
                    title="Active downloads"
                    value=metric(|d| d.active_downloads().to_string())
                    icon=IconName::Clock
                    color="primary"
                />
                <StatCard
                    id="total-downloads"
                    title="Total downloads"
                    value=metric(|d| d.total_downloads().to_string())
                    icon=IconName::Download
                    color="success"
                />
                <StatCard
                    id="unique-users"
                    title="Unique users"
                    value=metric(|d| d.unique_users().to_string())
                    icon=IconName::Users
                    color="info"
                />
                <StatCard
                    id="usage-rate"
                    title="Usage rate"
                    value=metric(|d| format!("{:.1}%", d.usage_rate()))
                    icon=IconName::BarChart
                    color="warning"
                />
            </div>

            <Show when=loaded fallback=|| view! { <SectionLoader label="Loading downloads..." /> }>
                <DataTable
                    headers=&["Product", "Deliveries", "Downloads"]
                    rows=products
                    row=|p: ProductDeliveries| view! {
                        <tr>
                            <td>{p.name}</td>
                            <td>{p.deliveries}</td>
                            <td>{p.downloads.unwrap_or(0)}</td>
                        </tr>
                    }
                    empty_message="No downloads found"
                />
            </Show>
        </section>
    }
}
