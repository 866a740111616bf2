//! VideoBot Admin - Leptos/WASM front end
//!
//! Admin panel for the VideoBot shop: catalogue management, sales and
//! delivery reports, and bot settings, all over the shop's REST API.

use leptos::*;
use leptos_router::*;

pub mod api;
pub mod charts;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod pages;
pub mod state;
pub mod types;

use components::{sidebar::Sidebar, toast::ToastContainer};
use config::PanelConfig;
use controller::Section;
use pages::*;
use state::{provide_admin_state, use_admin_state};

#[component]
pub fn App() -> impl IntoView {
    provide_admin_state(PanelConfig::load());

    view! {
        <Router>
            <Routes>
                <Route path="/" view=AdminShell />
                <Route path="/admin" view=AdminShell />
                <Route path="/*any" view=NotFound />
            </Routes>
            <ToastContainer />
        </Router>
    }
}

/// Sidebar plus whichever section is current.
#[component]
fn AdminShell() -> impl IntoView {
    let state = use_admin_state();
    let panel = state.panel;
    let current = create_memo(move |_| panel.with(|p| p.current));

    // First paint always lands on the dashboard.
    state.navigate(Section::Dashboard.name());

    view! {
        <div class="app-shell">
            <Sidebar />
            <main class="main-content">
                {move || match current.get() {
                    Section::Dashboard => view! { <DashboardPage /> }.into_view(),
                    Section::Products => view! { <ProductsPage /> }.into_view(),
                    Section::Sales => view! { <SalesPage /> }.into_view(),
                    Section::Downloads => view! { <DownloadsPage /> }.into_view(),
                    Section::Users => view! { <UsersPage /> }.into_view(),
                    Section::Settings => view! { <SettingsPage /> }.into_view(),
                }}
            </main>
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"Nothing here."</p>
            <A href="/admin" class="btn btn-primary">"Back to the panel"</A>
        </div>
    }
}

/// WASM entry point
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}
