//! Dashboard section

use chrono::Utc;
use leptos::*;

use crate::charts::ChartSlot;
use crate::components::*;
use crate::controller::Action;
use crate::state::use_admin_state;
use crate::types::{ActivityEntry, StatCounters};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = use_admin_state();
    let panel = state.panel;
    let counter = move |pick: fn(&StatCounters) -> String| {
        Signal::derive(move || panel.with(|p| pick(&p.counters)))
    };

    view! {
        <section class="content-section" id="dashboard-section">
            <div class="page-header">
                <h1>"Dashboard"</h1>
                <button class="btn btn-ghost btn-sm" on:click=move |_| state.run(Action::RefreshDashboard)>
                    <Icon name=IconName::Refresh size=IconSize::Sm />
                    "Refresh"
                </button>
            </div>

            <div class="stats-grid">
                <StatCard
                    id="total-products"
                    title="Products"
                    value=counter(|c| c.products.to_string())
                    icon=IconName::Film
                    color="primary"
                />
                <StatCard
                    id="total-sales"
                    title="Sales"
                    value=counter(|c| c.sales.to_string())
                    icon=IconName::ShoppingCart
                    color="success"
                />
                <StatCard
                    id="total-revenue"
                    title="Revenue (Stars)"
                    value=counter(|c| c.revenue.to_string())
                    icon=IconName::Star
                    color="warning"
                />
                <StatCard
                    id="total-users"
                    title="Users"
                    value=counter(|c| c.users.to_string())
                    icon=IconName::Users
                    color="info"
                />
            </div>

            <div class="dashboard-grid">
                <div class="card">
                    <div class="card-header"><h2>"Sales this week"</h2></div>
                    <div class="card-body"><ChartCanvas chart=ChartSlot::Sales /></div>
                </div>
                <div class="card">
                    <div class="card-header"><h2>"Top products"</h2></div>
                    <div class="card-body"><ChartCanvas chart=ChartSlot::Products /></div>
                </div>
            </div>

            <div class="card">
                <div class="card-header"><h2>"Recent activity"</h2></div>
                <div class="card-body" id="recent-activity">
                    <Show
                        when=move || panel.with(|p| !p.activity.is_empty())
                        fallback=|| view! { <p class="text-muted">"No recent activity"</p> }
                    >
                        <ul class="activity-list">
                            {move || {
                                let now = Utc::now();
                                panel
                                    .with(|p| p.activity.clone())
                                    .into_iter()
                                    .map(|entry| view! { <ActivityItem entry=entry now=now /> })
                                    .collect_view()
                            }}
                        </ul>
                    </Show>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ActivityItem(entry: ActivityEntry, now: chrono::DateTime<Utc>) -> impl IntoView {
    let ago = entry.time_ago(now);
    view! {
        <li class="activity-item">
            <span class="activity-icon"><Icon name=IconName::from_name(entry.kind.icon()) size=IconSize::Sm /></span>
            <span class="activity-message">{entry.message}</span>
            <small class="activity-time text-muted">{ago}</small>
        </li>
    }
}
