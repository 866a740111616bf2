//! Users section

use leptos::*;

use crate::components::*;
use crate::controller::Action;
use crate::state::use_admin_state;
use crate::types::UserRow;

#[component]
pub fn UsersPage() -> impl IntoView {
    let state = use_admin_state();
    let panel = state.panel;

    // What is typed; the table only filters once Enter is pressed.
    let draft = create_rw_signal(panel.with_untracked(|p| p.user_query.clone()));
    let rows = Signal::derive(move || panel.with(|p| p.filtered_users()));

    view! {
        <section class="content-section" id="users-section">
            <div class="page-header">
                <h1>"Users"</h1>
                <TextInput
                    class="user-search"
                    input_type=InputType::Search
                    placeholder="Search users..."
                    value=draft
                    on_input=Callback::new(move |v: String| draft.set(v))
                    on_enter=Callback::new(move |query: String| state.run(Action::SearchUsers(query)))
                />
            </div>

            <DataTable
                headers=&["ID", "Username", "Name", "Joined", "Status"]
                rows=rows
                row=|u: UserRow| view! {
                    <tr>
                        <td>{u.id}</td>
                        <td>{u.username}</td>
                        <td>{u.first_name}</td>
                        <td>{u.joined_at}</td>
                        <td>
                            <StatusBadge
                                label={if u.is_active { "Active" } else { "Inactive" }}
                                class={if u.is_active { "badge-success" } else { "badge-secondary" }}
                            />
                        </td>
                    </tr>
                }
                empty_message="No users found"
            />
        </section>
    }
}
