//! Loading indicators

use leptos::*;

#[component]
pub fn Spinner(#[prop(default = 32)] size: u32) -> impl IntoView {
    view! {
        <svg class="spinner" width=size height=size viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
            <circle cx="12" cy="12" r="10" fill="none" stroke="var(--border)" stroke-width="3" />
            <circle
                cx="12"
                cy="12"
                r="10"
                fill="none"
                stroke="var(--primary)"
                stroke-width="3"
                stroke-linecap="round"
                stroke-dasharray="31.4 31.4"
                class="spinner-arc"
            />
        </svg>
    }
}

/// Placeholder shown until a section's first load lands.
#[component]
pub fn SectionLoader(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <div class="loading-state">
            <Spinner />
            <p>{label}</p>
        </div>
    }
}
