//! Form inputs
//!
//! Inputs are controlled: the value comes in as a signal and every edit goes
//! out through a callback, so the panel state stays the single source.

use leptos::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputType {
    #[default]
    Text,
    Number,
    Password,
    Url,
    Search,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Password => "password",
            Self::Url => "url",
            Self::Search => "search",
        }
    }
}

#[component]
fn FieldLabel(label: String, required: bool) -> impl IntoView {
    (!label.is_empty()).then(|| {
        view! {
            <label class="form-label">
                {label}
                {required.then(|| view! { <span class="required-mark">"*"</span> })}
            </label>
        }
    })
}

#[component]
pub fn TextInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(default = InputType::Text)] input_type: InputType,
    #[prop(optional, into)] label: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] helper_text: String,
    #[prop(default = false)] required: bool,
    /// Fired with the current value when Enter is pressed.
    #[prop(optional)]
    on_enter: Option<Callback<String>>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <div class=format!("form-group {}", class)>
            <FieldLabel label=label required=required />
            <input
                type=input_type.as_str()
                class="form-input"
                placeholder=placeholder
                required=required
                min=(input_type == InputType::Number).then_some("1")
                prop:value=move || value.get()
                on:input=move |e| on_input.call(event_target_value(&e))
                on:keydown=move |e| {
                    if e.key() == "Enter" {
                        if let Some(cb) = on_enter {
                            e.prevent_default();
                            cb.call(event_target_value(&e));
                        }
                    }
                }
            />
            {(!helper_text.is_empty()).then(|| view! { <p class="form-helper">{helper_text}</p> })}
        </div>
    }
}

#[component]
pub fn TextArea(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] label: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(default = 3)] rows: u32,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <FieldLabel label=label required=false />
            <textarea
                class="form-textarea"
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |e| on_input.call(event_target_value(&e))
            />
        </div>
    }
}

/// Dropdown over a fixed list of `(value, label)` pairs.
#[component]
pub fn Select(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    options: Vec<(String, String)>,
    #[prop(optional, into)] label: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <div class=format!("form-group {}", class)>
            <FieldLabel label=label required=false />
            <select class="form-select" on:change=move |e| on_change.call(event_target_value(&e))>
                {options
                    .into_iter()
                    .map(|(option, text)| {
                        let selected = {
                            let option = option.clone();
                            move || value.get() == option
                        };
                        view! { <option value=option selected=selected>{text}</option> }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

/// Single file picker.
#[component]
pub fn FileInput(
    #[prop(into)] on_select: Callback<Option<web_sys::File>>,
    #[prop(optional, into)] label: String,
    #[prop(optional, into)] accept: String,
    #[prop(default = false)] required: bool,
) -> impl IntoView {
    let on_change = move |e: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&e);
        let file = input.files().and_then(|files| files.get(0));
        on_select.call(file);
    };

    view! {
        <div class="form-group">
            <FieldLabel label=label required=required />
            <input
                type="file"
                class="form-input form-file"
                accept=accept
                required=required
                on:change=on_change
            />
        </div>
    }
}
