use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

const INPUT_CLASS: &str = "flex h-10 w-full rounded-md border border-gray-700 bg-gray-800 px-3 py-2 text-sm text-white placeholder:text-gray-500 focus:outline-none focus:ring-2 focus:ring-emerald-500 disabled:cursor-not-allowed disabled:opacity-50";

/// Inline error under a field
#[component]
fn FieldMessage(error: Option<Signal<Option<String>>>) -> impl IntoView {
    move || {
        error.and_then(|e| e.get()).map(|err| view! {
            <p class="flex items-center gap-1 text-sm text-red-500" role="alert">
                <Icon name=icons::ALERT_CIRCLE class="w-4 h-4"/>
                <span>{err}</span>
            </p>
        })
    }
}

/// Labelled text input with an optional inline error
#[component]
pub fn FormField(
    /// Element id, also used by the label
    id: &'static str,
    /// Field label text
    label: &'static str,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, tel, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether the input is disabled
    #[prop(optional, into)]
    disabled: Signal<bool>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label for=id class="text-sm font-medium leading-none text-gray-300">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <input
                id=id
                name=id
                type=input_type
                class=INPUT_CLASS
                class:border-red-500=move || error.and_then(|e| e.get()).is_some()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
                aria-invalid=move || error.and_then(|e| e.get()).is_some().to_string()
            />
            <FieldMessage error=error/>
        </div>
    }
}

/// Dropdown with a disabled placeholder option
#[component]
pub fn SelectField(
    id: &'static str,
    label: &'static str,
    /// Text shown while nothing is selected
    placeholder: &'static str,
    /// Selected option value, empty when none
    value: Signal<String>,
    on_change: Callback<String>,
    /// Options as (value, display_text) pairs
    options: Vec<(String, String)>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label for=id class="text-sm font-medium">{label}</label>
            <select
                id=id
                class=INPUT_CLASS
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" disabled=true selected=move || value.get().is_empty()>
                    {placeholder}
                </option>
                {options.into_iter().map(|(val, text)| {
                    view! { <option value=val>{text}</option> }
                }).collect_view()}
            </select>
        </div>
    }
}

/// Checkbox with a rich label and an optional inline error
#[component]
pub fn CheckboxField(
    id: &'static str,
    /// Current checked state
    checked: Signal<bool>,
    /// Change event callback
    on_change: Callback<bool>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
    /// Label content
    children: Children,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <div class="flex flex-row items-start space-x-3">
                <input
                    id=id
                    name=id
                    type="checkbox"
                    class="mt-1 h-4 w-4 rounded border-gray-600 bg-gray-800 accent-emerald-500"
                    prop:checked=move || checked.get()
                    on:change=move |ev| on_change.run(event_target_checked(&ev))
                    disabled=move || disabled.get()
                />
                <label for=id class="text-sm leading-snug text-gray-300">{children()}</label>
            </div>
            <FieldMessage error=error/>
        </div>
    }
}
