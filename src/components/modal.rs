//! Backdrop + dialog scaffold shared by every modal editor.

use leptos::prelude::*;

/// Modal dialog with a title bar. Clicking the backdrop or pressing Escape
/// closes it; clicks inside the dialog do not propagate to the backdrop.
#[component]
pub fn Modal(#[prop(into)] title: Signal<String>, on_close: Callback<()>, children: Children) -> impl IntoView {
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <h2>{move || title.get()}</h2>
                {children()}
            </div>
        </div>
    }
}
