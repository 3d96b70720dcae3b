//! Inline message box for errors and warnings.
//!
//! Renders nothing while the message is empty, so callers can bind an error
//! signal directly without wrapping the box in a visibility check.

use leptos::prelude::*;

/// Visual tone of a [`MessageBox`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MessageKind {
    #[default]
    Error,
    Warning,
}

/// Inline message shown on the same screen as the action that produced it.
#[component]
pub fn MessageBox(
    #[prop(into)] message: Signal<String>,
    #[prop(default = MessageKind::Error)] kind: MessageKind,
) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <p
                class="message-box"
                class:message-box--error=move || kind == MessageKind::Error
                class:message-box--warning=move || kind == MessageKind::Warning
            >
                {move || message.get()}
            </p>
        </Show>
    }
}
