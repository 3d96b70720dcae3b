//! Labeled input widgets bound to a value signal and a setter callback.
//!
//! DESIGN
//! ======
//! Widgets carry no logic beyond change propagation; validation and state
//! updates belong to the editor that owns the draft.

use leptos::prelude::*;

/// Single-line text input with a label.
#[component]
pub fn ShortTextField(
    #[prop(into)] value: Signal<String>,
    set_value: Callback<String>,
    #[prop(default = "")] label: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    #[prop(default = Signal::from(false), into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <label class="field field--text">
            <Show when=move || !label.is_empty()>
                <span class="field__label">{label}</span>
            </Show>
            <input
                class="field__input"
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| set_value.run(event_target_value(&ev))
            />
        </label>
    }
}

/// Multi-line text input with a label.
#[component]
pub fn LongTextField(
    #[prop(into)] value: Signal<String>,
    set_value: Callback<String>,
    #[prop(default = "")] label: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    #[prop(default = 3)] rows: u32,
) -> impl IntoView {
    view! {
        <label class="field field--long-text">
            <Show when=move || !label.is_empty()>
                <span class="field__label">{label}</span>
            </Show>
            <textarea
                class="field__textarea"
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| set_value.run(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

/// Numeric input; the bound value stays a string like every field value.
#[component]
pub fn NumberField(
    #[prop(into)] value: Signal<String>,
    set_value: Callback<String>,
    #[prop(default = "")] label: &'static str,
    #[prop(optional)] min: Option<i64>,
    #[prop(optional)] max: Option<i64>,
) -> impl IntoView {
    view! {
        <label class="field field--number">
            <Show when=move || !label.is_empty()>
                <span class="field__label">{label}</span>
            </Show>
            <input
                class="field__input"
                type="number"
                min=min.map(|m| m.to_string())
                max=max.map(|m| m.to_string())
                prop:value=move || value.get()
                on:input=move |ev| set_value.run(event_target_value(&ev))
            />
        </label>
    }
}

/// Checkbox toggle with a label.
#[component]
pub fn ToggleField(
    #[prop(into)] value: Signal<bool>,
    set_value: Callback<bool>,
    #[prop(default = "")] label: &'static str,
) -> impl IntoView {
    view! {
        <label class="field field--toggle">
            <input
                class="field__checkbox"
                type="checkbox"
                prop:checked=move || value.get()
                on:change=move |ev| set_value.run(event_target_checked(&ev))
            />
            <span class="field__label">{label}</span>
        </label>
    }
}

/// Dropdown over `(value, label)` option pairs.
#[component]
pub fn DropdownField(
    #[prop(into)] value: Signal<String>,
    set_value: Callback<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(default = "")] label: &'static str,
) -> impl IntoView {
    view! {
        <label class="field field--dropdown">
            <Show when=move || !label.is_empty()>
                <span class="field__label">{label}</span>
            </Show>
            <select
                class="field__select"
                prop:value=move || value.get()
                on:change=move |ev| set_value.run(event_target_value(&ev))
            >
                {move || {
                    let current = value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|(option_value, option_label)| {
                            let selected = option_value == current;
                            view! {
                                <option value=option_value selected=selected>
                                    {option_label}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
        </label>
    }
}
