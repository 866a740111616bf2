//! Tables and badges

use leptos::*;

/// Table with fixed headers. While `rows` is empty the body is a single
/// full-width row with `empty_message`.
#[component]
pub fn DataTable<R, V>(
    headers: &'static [&'static str],
    #[prop(into)] rows: Signal<Vec<R>>,
    row: fn(R) -> V,
    #[prop(into)] empty_message: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView
where
    R: Clone + 'static,
    V: IntoView + 'static,
{
    let columns = headers.len();
    let empty_message = store_value(empty_message);

    view! {
        <div class=format!("table-container {}", class)>
            <table class="data-table">
                <thead>
                    <tr>
                        {headers.iter().map(|h| view! { <th>{*h}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let current = rows.get();
                        if current.is_empty() {
                            view! {
                                <tr>
                                    <td colspan=columns class="table-empty text-center">
                                        {empty_message.get_value()}
                                    </td>
                                </tr>
                            }
                            .into_view()
                        } else {
                            current.into_iter().map(row).collect_view()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] label: String, #[prop(into)] class: String) -> impl IntoView {
    view! { <span class=format!("badge {}", class)>{label}</span> }
}
