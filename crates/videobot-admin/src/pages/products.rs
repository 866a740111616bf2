//! Products section: catalogue table and the add-product modal

use leptos::*;
use web_sys::File;

use crate::api::ProductUpload;
use crate::components::*;
use crate::controller::Action;
use crate::state::{use_admin_state, ToastKind};
use crate::types::{Product, ProductForm};

#[component]
pub fn ProductsPage() -> impl IntoView {
    let state = use_admin_state();
    let panel = state.panel;

    let pending_delete = create_rw_signal::<Option<Product>>(None);
    provide_context(pending_delete);

    let rows = Signal::derive(move || panel.with(|p| p.products.clone().unwrap_or_default()));
    let loaded = move || panel.with(|p| p.products.is_some());

    let confirm_message = Signal::derive(move || {
        pending_delete
            .get()
            .map(|p| format!("Delete \"{}\"? This cannot be undone.", p.name))
            .unwrap_or_default()
    });
    let on_confirm = {
        let state = state.clone();
        Callback::new(move |_: ()| {
            if let Some(product) = pending_delete.get_untracked() {
                state.run(Action::DeleteProduct(product.id));
            }
            pending_delete.set(None);
        })
    };

    view! {
        <section class="content-section" id="products-section">
            <div class="page-header">
                <h1>"Products"</h1>
                <button
                    class="btn btn-primary"
                    on:click=move |_| panel.update(|p| p.add_product_open = true)
                >
                    <Icon name=IconName::Plus size=IconSize::Sm />
                    "Add product"
                </button>
            </div>

            <Show when=loaded fallback=|| view! { <SectionLoader label="Loading products..." /> }>
                <DataTable
                    headers=&["ID", "Name", "Price", "Sales", "Status", "Actions"]
                    rows=rows
                    row=|product: Product| view! { <ProductRow product=product /> }
                    empty_message="No products found"
                />
            </Show>

            <AddProductModal />
            <ConfirmDialog
                show=Signal::derive(move || pending_delete.with(Option::is_some))
                message=confirm_message
                on_confirm=on_confirm
                on_cancel=Callback::new(move |_: ()| pending_delete.set(None))
            />
        </section>
    }
}

#[component]
fn ProductRow(product: Product) -> impl IntoView {
    let state = use_admin_state();
    let pending_delete = expect_context::<RwSignal<Option<Product>>>();

    let id = product.id;
    let active = product.is_active;
    let for_delete = product.clone();

    view! {
        <tr>
            <td>{id}</td>
            <td>{product.name.clone()}</td>
            <td>{format!("{} ⭐", product.price_stars)}</td>
            <td>"0"</td>
            <td><StatusBadge label=product.status_label() class=product.badge_class() /></td>
            <td class="table-actions">
                <button
                    class="btn btn-sm btn-outline-primary"
                    title={if active { "Deactivate" } else { "Activate" }}
                    on:click=move |_| state.run(Action::ToggleProduct { id, active: !active })
                >
                    <Icon name=IconName::Edit size=IconSize::Sm />
                </button>
                <button
                    class="btn btn-sm btn-outline-danger"
                    title="Delete"
                    on:click=move |_| pending_delete.set(Some(for_delete.clone()))
                >
                    <Icon name=IconName::Trash size=IconSize::Sm />
                </button>
            </td>
        </tr>
    }
}

#[component]
fn AddProductModal() -> impl IntoView {
    let state = use_admin_state();
    let panel = state.panel;

    let field = move |get: fn(&ProductForm) -> &String, set: fn(&mut ProductForm, String)| {
        let value = Signal::derive(move || panel.with(|p| get(&p.product_form).clone()));
        let on_input = Callback::new(move |v: String| panel.update(|p| set(&mut p.product_form, v)));
        (value, on_input)
    };
    let (name, set_name) = field(|f| &f.name, |f, v| f.name = v);
    let (price, set_price) = field(|f| &f.price_stars, |f, v| f.price_stars = v);
    let (description, set_description) = field(|f| &f.description, |f, v| f.description = v);

    let video = store_value::<Option<File>>(None);
    let thumbnail = store_value::<Option<File>>(None);

    let open = create_memo(move |_| panel.with(|p| p.add_product_open));
    create_effect(move |_| {
        if !open.get() {
            video.set_value(None);
            thumbnail.set_value(None);
        }
    });

    let close = Callback::new(move |_: ()| panel.update(|p| p.add_product_open = false));

    let submit = Callback::new(move |e: web_sys::SubmitEvent| {
        e.prevent_default();
        let form = panel.with_untracked(|p| p.product_form.clone());
        if let Some(hint) = form.missing_hint() {
            state.notify(ToastKind::Info, hint);
            return;
        }
        state.run(Action::AddProduct(ProductUpload {
            form,
            file: video.get_value(),
            thumbnail: thumbnail.get_value(),
        }));
    });

    view! {
        <Modal
            show=open
            on_close=close
            title="Add product"
        >
            <form id="add-product-form" on:submit=move |e| submit.call(e)>
                <TextInput label="Name" value=name on_input=set_name required=true />
                <TextInput
                    label="Price (Stars)"
                    input_type=InputType::Number
                    value=price
                    on_input=set_price
                    required=true
                />
                <TextArea label="Description" value=description on_input=set_description />
                <FileInput
                    label="Video file"
                    accept="video/*"
                    on_select=Callback::new(move |f: Option<File>| video.set_value(f))
                />
                <FileInput
                    label="Thumbnail"
                    accept="image/*"
                    on_select=Callback::new(move |f: Option<File>| thumbnail.set_value(f))
                />
                <div class="modal-actions">
                    <button type="button" class="btn btn-ghost" on:click=move |_| close.call(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary">"Save"</button>
                </div>
            </form>
        </Modal>
    }
}
