//! Generic listing component for homogeneous entity collections.
//!
//! DESIGN
//! ======
//! The list stays agnostic to what an item is: callers supply a summary
//! renderer and a name extractor, and every collection gets identical
//! search/filter/paginate/view behavior from `state::list`. The only
//! external state change this component can cause is invoking the optional
//! create/edit callbacks; the item collection itself is never mutated.

#[cfg(test)]
#[path = "generic_list_test.rs"]
mod generic_list_test;

use leptos::prelude::*;

use crate::state::list::{self, DEFAULT_LIMIT, LIMIT_OPTIONS, ListView};

fn empty_message(item_label: &str) -> String {
    format!("No {item_label}s found.")
}

fn no_match_message(item_label: &str) -> String {
    format!("No {item_label}s found matching your search.")
}

fn loading_message(item_label: &str) -> String {
    format!("Loading {item_label}s...")
}

fn search_placeholder(item_label: &str) -> String {
    format!("Search {item_label}s by name...")
}

/// Parse a one-based page input into a clamped zero-based index.
fn page_input_to_index(input: &str, pages: usize) -> Option<usize> {
    let entered: usize = input.trim().parse().ok()?;
    Some(list::clamp_page(entered.saturating_sub(1), pages))
}

/// Searchable, paginated, view-switchable list over an opaque item type.
///
/// `highlighted` switches the list into single-selection picker mode:
/// clicking a card highlights it instead of opening an editor.
#[component]
pub fn GenericList<T, N, D, V>(
    /// Reactive source collection; display order is the collection order.
    #[prop(into)] items: Signal<Vec<T>>,
    /// Human-readable item-type label, e.g. `"world"`.
    item_label: &'static str,
    /// Name extractor used for search.
    get_name: N,
    /// Caller-supplied summary renderer for one item.
    render_details: D,
    #[prop(optional)] on_refresh: Option<Callback<()>>,
    #[prop(optional)] on_create: Option<Callback<()>>,
    #[prop(optional)] on_edit: Option<Callback<T>>,
    #[prop(default = Signal::from(false), into)] loading: Signal<bool>,
    #[prop(default = true)] search: bool,
    #[prop(default = false)] view_selector: bool,
    #[prop(default = ListView::Grid)] default_view: ListView,
    #[prop(default = false)] limit_selector: bool,
    #[prop(default = DEFAULT_LIMIT)] default_limit: usize,
    #[prop(default = false)] pagination: bool,
    #[prop(optional)] highlighted: Option<RwSignal<Option<T>>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView
where
    T: Clone + PartialEq + Send + Sync + 'static,
    N: Fn(&T) -> String + Copy + Send + Sync + 'static,
    D: Fn(T) -> V + Copy + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let query = RwSignal::new(String::new());
    let view_mode = RwSignal::new(default_view);
    let limit = RwSignal::new(default_limit);
    let page = RwSignal::new(0usize);

    let filtered = Memo::new(move |_| list::filter_by_name(&items.get(), &query.get(), get_name));
    let pages = Memo::new(move |_| list::page_count(filtered.get().len(), limit.get()));

    // Snap the page back into range when the filtered set or limit shrinks.
    Effect::new(move || {
        let pages_now = pages.get();
        let current = page.get_untracked();
        let clamped = list::clamp_page(current, pages_now);
        if clamped != current {
            page.set(clamped);
        }
    });

    let has_items = move || !items.get().is_empty();
    let has_matches = move || !filtered.get().is_empty();

    let create_shortcut = move || {
        on_create.map(|create| {
            view! {
                <button class="btn btn--primary" on:click=move |_| create.run(())>
                    "Create one now!"
                </button>
            }
        })
    };

    view! {
        <div class="generic-list">
            <div class="generic-list__controls">
                {on_refresh.map(|refresh| {
                    view! {
                        <button
                            class="btn generic-list__refresh"
                            disabled=move || loading.get()
                            on:click=move |_| refresh.run(())
                        >
                            "Refresh"
                        </button>
                    }
                })}
                <Show when=move || search>
                    <input
                        class="generic-list__search"
                        type="text"
                        placeholder=search_placeholder(item_label)
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                </Show>
                <Show when=move || view_selector>
                    <select
                        class="generic-list__view"
                        on:change=move |ev| {
                            view_mode.set(match event_target_value(&ev).as_str() {
                                "list" => ListView::List,
                                _ => ListView::Grid,
                            });
                        }
                    >
                        {[ListView::Grid, ListView::List]
                            .into_iter()
                            .map(|mode| {
                                view! {
                                    <option
                                        value=mode.as_str()
                                        selected=move || view_mode.get() == mode
                                    >
                                        {mode.as_str()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </Show>
                <Show when=move || limit_selector>
                    <select
                        class="generic-list__limit"
                        on:change=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse::<usize>() {
                                limit.set(value);
                            }
                        }
                    >
                        {LIMIT_OPTIONS
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <option
                                        value=option.to_string()
                                        selected=move || limit.get() == option
                                    >
                                        {option.to_string()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </Show>
                {on_create.map(|create| {
                    view! {
                        <button
                            class="btn btn--primary generic-list__create"
                            disabled=move || loading.get()
                            on:click=move |_| create.run(())
                        >
                            "Create"
                        </button>
                    }
                })}
                {children.map(|extra| extra())}
            </div>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="generic-list__loading">{loading_message(item_label)}</p> }
            >
                <Show
                    when=has_items
                    fallback=move || {
                        view! {
                            <div class="generic-list__empty">
                                <p>{empty_message(item_label)}</p>
                                {create_shortcut()}
                            </div>
                        }
                    }
                >
                    <Show
                        when=has_matches
                        fallback=move || {
                            view! {
                                <div class="generic-list__empty">
                                    <p>{no_match_message(item_label)}</p>
                                    {create_shortcut()}
                                </div>
                            }
                        }
                    >
                        <div
                            class="generic-list__items"
                            class:generic-list__items--grid=move || view_mode.get() == ListView::Grid
                            class:generic-list__items--list=move || view_mode.get() == ListView::List
                        >
                            {move || {
                                let slice =
                                    list::page_slice(&filtered.get(), page.get(), limit.get());
                                slice
                                    .into_iter()
                                    .map(|item| {
                                        let is_highlighted = highlighted
                                            .is_some_and(|h| h.get().as_ref() == Some(&item));
                                        let pick_item = item.clone();
                                        let edit_item = item.clone();
                                        let details = render_details(item);
                                        view! {
                                            <div
                                                class="generic-list__card"
                                                class:generic-list__card--highlighted=is_highlighted
                                                on:click=move |_| {
                                                    if let Some(h) = highlighted {
                                                        h.set(Some(pick_item.clone()));
                                                    }
                                                }
                                            >
                                                {details}
                                                {on_edit.map(|edit| {
                                                    let edit_item = edit_item.clone();
                                                    view! {
                                                        <button
                                                            class="btn generic-list__edit"
                                                            on:click=move |ev: leptos::ev::MouseEvent| {
                                                                ev.stop_propagation();
                                                                edit.run(edit_item.clone());
                                                            }
                                                        >
                                                            "Edit"
                                                        </button>
                                                    }
                                                })}
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                        <Show when=move || pagination>
                            <div class="generic-list__pagination">
                                <button
                                    class="btn"
                                    disabled=move || page.get() == 0
                                    on:click=move |_| page.update(|p| *p = p.saturating_sub(1))
                                >
                                    "Prev"
                                </button>
                                <span class="generic-list__page-label">
                                    "Page "
                                    <input
                                        class="generic-list__page-input"
                                        type="number"
                                        min="1"
                                        prop:value=move || (page.get() + 1).to_string()
                                        on:change=move |ev| {
                                            if let Some(index) = page_input_to_index(
                                                &event_target_value(&ev),
                                                pages.get_untracked(),
                                            ) {
                                                page.set(index);
                                            }
                                        }
                                    />
                                    " of "
                                    {move || pages.get().to_string()}
                                </span>
                                <button
                                    class="btn"
                                    disabled=move || page.get() + 1 >= pages.get()
                                    on:click=move |_| {
                                        page.update(|p| *p = list::clamp_page(*p + 1, pages.get_untracked()));
                                    }
                                >
                                    "Next"
                                </button>
                            </div>
                        </Show>
                    </Show>
                </Show>
            </Show>
        </div>
    }
}
