//! Tab strip for switching between editor sub-views.

use leptos::prelude::*;

/// Layout direction for a [`TabGroup`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TabOrientation {
    #[default]
    Horizontal,
    Vertical,
}

/// A row or column of tab buttons bound to a zero-based selection signal.
#[component]
pub fn TabGroup(
    #[prop(into)] tabs: Signal<Vec<String>>,
    current: RwSignal<usize>,
    #[prop(default = TabOrientation::Horizontal)] orientation: TabOrientation,
    #[prop(default = Signal::from(false), into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div
            class="tab-group"
            class:tab-group--vertical=move || orientation == TabOrientation::Vertical
        >
            {move || {
                tabs.get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, name)| {
                        view! {
                            <button
                                class="tab-group__tab"
                                class:tab-group__tab--active=move || current.get() == index
                                disabled=move || disabled.get()
                                on:click=move |_| current.set(index)
                            >
                                {name}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
