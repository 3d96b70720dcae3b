//! Type-to-confirm dialog gating destructive actions.

#[cfg(test)]
#[path = "delete_popup_test.rs"]
mod delete_popup_test;

use leptos::prelude::*;

use crate::components::fields::ShortTextField;
use crate::components::message_box::MessageBox;
use crate::components::modal::Modal;

pub(crate) const CONFIRM_MISMATCH: &str = "Confirmation text does not match.";

/// Whether the typed confirmation satisfies the required phrase.
///
/// The match is exact and case-sensitive. Without a required phrase the
/// dialog is a plain yes/no confirmation.
pub(crate) fn confirmation_matches(required: Option<&str>, input: &str) -> bool {
    required.is_none_or(|phrase| phrase == input)
}

/// Confirmation dialog for irreversible actions.
///
/// `on_confirm` only runs when the typed text matches `confirm_phrase`
/// exactly; mismatches show an inline error and leave the dialog open.
#[component]
pub fn DeletePopup(
    #[prop(into)] title: Signal<String>,
    #[prop(optional)] confirm_phrase: Option<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(default = Signal::from(false), into)] busy: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let confirm_input = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let phrase = StoredValue::new(confirm_phrase);
    let has_phrase = phrase.get_value().is_some();
    let phrase_text = phrase.get_value().unwrap_or_default();

    let submit = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        if !confirmation_matches(phrase.get_value().as_deref(), &confirm_input.get()) {
            error.set(CONFIRM_MISMATCH.to_owned());
            return;
        }
        error.set(String::new());
        on_confirm.run(());
    });

    let cancel = Callback::new(move |()| {
        confirm_input.set(String::new());
        error.set(String::new());
        on_cancel.run(());
    });

    view! {
        <Modal title=title on_close=cancel>
            <div class="delete-popup">
                {children()}
                <p class="delete-popup__warning">
                    <strong>"WARNING:"</strong>
                    " THIS ACTION IS IRREVERSIBLE"
                </p>

                <Show when=move || has_phrase>
                    <p class="delete-popup__hint">
                        "Type \""
                        <strong class="delete-popup__phrase">{phrase_text.clone()}</strong>
                        "\" to confirm this action. (Case Sensitive)"
                    </p>
                    <ShortTextField
                        value=confirm_input
                        set_value=Callback::new(move |value| confirm_input.set(value))
                        placeholder="Confirmation text"
                        disabled=busy
                    />
                </Show>

                <MessageBox message=error/>

                <div class="dialog__actions">
                    <button class="btn" disabled=move || busy.get() on:click=move |_| cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=move || busy.get()
                        on:click=move |_| submit.run(())
                    >
                        "Confirm"
                    </button>
                </div>
            </div>
        </Modal>
    }
}
