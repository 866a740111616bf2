//! Settings section

use leptos::*;

use crate::components::*;
use crate::controller::Action;
use crate::state::use_admin_state;
use crate::types::SettingsForm;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let state = use_admin_state();
    let panel = state.panel;

    // Edits stay local until saved; a rejected save leaves them in place.
    let form = create_rw_signal(panel.with_untracked(|p| p.settings.clone()));
    let saved = create_memo(move |_| panel.with(|p| p.settings.clone()));
    create_effect(move |_| form.set(saved.get()));

    let field = move |get: fn(&SettingsForm) -> &String, set: fn(&mut SettingsForm, String)| {
        (
            Signal::derive(move || form.with(|f| get(f).clone())),
            Callback::new(move |v: String| form.update(|f| set(f, v))),
        )
    };
    let (expiry, set_expiry) = field(|f| &f.download_expiry, |f, v| f.download_expiry = v);
    let (max_downloads, set_max_downloads) = field(|f| &f.max_downloads, |f, v| f.max_downloads = v);
    let (token, set_token) = field(|f| &f.bot_token, |f, v| f.bot_token = v);
    let (webhook, set_webhook) = field(|f| &f.webhook_url, |f, v| f.webhook_url = v);

    let save = move |e: web_sys::SubmitEvent| {
        e.prevent_default();
        state.run(Action::SaveSettings(form.get_untracked()));
    };

    view! {
        <section class="content-section" id="settings-section">
            <div class="page-header">
                <h1>"Settings"</h1>
            </div>

            <form class="card settings-form" id="settings-form" on:submit=save>
                <div class="card-body">
                    <TextInput
                        label="Download expiry (hours)"
                        input_type=InputType::Number
                        value=expiry
                        on_input=set_expiry
                        required=true
                    />
                    <TextInput
                        label="Max downloads per purchase"
                        input_type=InputType::Number
                        value=max_downloads
                        on_input=set_max_downloads
                        required=true
                    />
                    <TextInput
                        label="Bot token"
                        input_type=InputType::Password
                        value=token
                        on_input=set_token
                        helper_text="Not stored by the panel"
                    />
                    <TextInput
                        label="Webhook URL"
                        input_type=InputType::Url
                        placeholder="https://"
                        value=webhook
                        on_input=set_webhook
                    />
                </div>
                <div class="card-footer">
                    <button type="submit" class="btn btn-primary">"Save settings"</button>
                </div>
            </form>
        </section>
    }
}
