//! Counter cards

use leptos::*;

use crate::components::icons::*;

#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
    icon: IconName,
    #[prop(into)] color: String,
    /// Element id, so the counter can be found from outside the app.
    #[prop(optional, into)]
    id: String,
) -> impl IntoView {
    view! {
        <div class=format!("stats-card stats-card-{}", color)>
            <div class="stats-icon"><Icon name=icon size=IconSize::Lg /></div>
            <div class="stats-content">
                <span class="stats-value" id=id>{move || value.get()}</span>
                <span class="stats-title">{title}</span>
            </div>
        </div>
    }
}
