//! Sidebar navigation

use leptos::*;

use crate::components::icons::*;
use crate::controller::Section;
use crate::state::use_admin_state;

fn section_icon(section: Section) -> IconName {
    match section {
        Section::Dashboard => IconName::Dashboard,
        Section::Products => IconName::Film,
        Section::Sales => IconName::ShoppingCart,
        Section::Downloads => IconName::Download,
        Section::Users => IconName::Users,
        Section::Settings => IconName::Settings,
    }
}

#[component]
fn SidebarItem(section: Section) -> impl IntoView {
    let state = use_admin_state();
    let panel = state.panel;
    let is_active = move || panel.with(|p| p.current == section);

    view! {
        <a
            href=format!("#{}", section.name())
            class=move || format!("sidebar-item nav-link {}", if is_active() { "active" } else { "" })
            data-section=section.name()
            on:click=move |e| {
                e.prevent_default();
                state.navigate(section.name());
            }
        >
            <span class="sidebar-icon"><Icon name=section_icon(section) /></span>
            <span class="sidebar-label">{section.title()}</span>
        </a>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <Icon name=IconName::Film size=IconSize::Lg />
                <span>"VideoBot Admin"</span>
            </div>
            <nav class="sidebar-content">
                {Section::ALL
                    .into_iter()
                    .map(|section| view! { <SidebarItem section=section /> })
                    .collect_view()}
            </nav>
        </aside>
    }
}
