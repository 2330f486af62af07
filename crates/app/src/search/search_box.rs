use dioxus::prelude::*;
use shared_types::{HitTarget, SearchSettings};
use shared_ui::components::{FloatingPanel, Spinner};
use std::time::Duration;

use super::debounce::use_debounced;
use super::dispatcher::use_search_dispatcher;
use super::navigation::{apply, NavKey, NavOutcome};
use super::outside::use_outside_interaction;
use super::panel::{error_message, no_results_message, panel_view, PanelView};
use super::results::ResultList;
use crate::routes::Route;

const CONTAINER_ID: &str = "catalog-search";
const INPUT_ID: &str = "catalog-search-input";

/// Delay before focus returns to the input after a selection.
const FOCUS_RESTORE_DELAY: Duration = Duration::from_millis(100);

fn route_for(target: HitTarget) -> Route {
    match target {
        HitTarget::Work { slug } => Route::WorkDetail { slug },
        HitTarget::Person { slug } => Route::PersonDetail { slug },
    }
}

fn focus_input() {
    document::eval(&format!(
        r#"document.getElementById("{INPUT_ID}")?.focus();"#
    ));
}

fn blur_input() {
    document::eval(&format!(
        r#"document.getElementById("{INPUT_ID}")?.blur();"#
    ));
}

/// Search-as-you-type box for works and people.
///
/// Typing is debounced, each settled term of two or more characters is sent
/// to the catalog, and results open in a panel below the input. Arrow keys
/// move through the results, Enter opens the highlighted one and Escape or a
/// press outside the widget closes the panel.
#[component]
pub fn SearchBox() -> Element {
    let settings = use_context::<SearchSettings>();
    let nav = navigator();

    let mut term = use_signal(String::new);
    let mut open = use_signal(|| false);
    let mut cursor = use_signal(|| None::<usize>);

    let debounced = use_debounced(term, Duration::from_millis(settings.debounce_ms));
    let query = use_search_dispatcher();
    let state = query.state();

    // One dispatch per settled term; short terms only close the panel.
    use_effect(move || {
        let value = debounced.read().clone();
        if settings.accepts(&value) {
            query.search(value);
            open.set(true);
        } else {
            open.set(false);
        }
    });

    let results = use_memo(move || state.read().results().clone());
    use_effect(move || {
        let _ = results.read();
        cursor.set(None);
    });

    use_outside_interaction(
        CONTAINER_ID,
        Callback::new(move |_| {
            open.set(false);
        }),
    );

    let mut select = move |index: usize| {
        let Some(entry) = results.read().get(index).cloned() else {
            return;
        };
        open.set(false);
        nav.push(route_for(entry.hit.target()));
        spawn(async move {
            dioxus_sdk_time::sleep(FOCUS_RESTORE_DELAY).await;
            focus_input();
        });
    };

    let mut close = move || {
        open.set(false);
        blur_input();
    };

    let current_term = term.read().clone();
    let view = panel_view(open(), &current_term, &settings, &state.read());
    let loading = state.read().loading();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./search.css") }

        div { id: CONTAINER_ID, class: "catalog-search",
            div { class: "catalog-search-input-wrap",
                input {
                    id: INPUT_ID,
                    class: "catalog-search-input",
                    r#type: "text",
                    placeholder: "Search movies, TV shows, and people...",
                    autocomplete: "off",
                    value: "{current_term}",
                    oninput: move |e: FormEvent| term.set(e.value()),
                    onfocus: move |_| {
                        if settings.accepts(&term.read()) {
                            open.set(true);
                        }
                    },
                    onkeydown: move |e: KeyboardEvent| {
                        let Some(key) = NavKey::from_key(&e.key()) else {
                            return;
                        };
                        e.prevent_default();
                        let len = results.read().len();
                        match apply(key, cursor(), len) {
                            NavOutcome::Moved(next) => cursor.set(next),
                            NavOutcome::Select(index) => select(index),
                            NavOutcome::Dismiss => close(),
                            NavOutcome::Ignored => {}
                        }
                    },
                }
                if loading {
                    div { class: "catalog-search-spinner",
                        Spinner { label: "Searching" }
                    }
                }
            }

            match view {
                PanelView::Closed => rsx! {},
                PanelView::Searching => rsx! {
                    FloatingPanel { class: "catalog-search-panel", label: "Search results",
                        div { class: "catalog-search-status", "Searching..." }
                    }
                },
                PanelView::Error(message) => rsx! {
                    FloatingPanel { class: "catalog-search-panel", label: "Search results",
                        div { class: "catalog-search-status catalog-search-error",
                            {error_message(&message)}
                        }
                    }
                },
                PanelView::NoResults(searched) => rsx! {
                    FloatingPanel { class: "catalog-search-panel", label: "Search results",
                        div { class: "catalog-search-status", {no_results_message(&searched)} }
                    }
                },
                PanelView::Results(list) => rsx! {
                    FloatingPanel { class: "catalog-search-panel", label: "Search results",
                        ResultList {
                            results: list,
                            term: current_term.clone(),
                            cursor: cursor(),
                            max_height_vh: settings.max_panel_vh,
                            on_select: move |index| select(index),
                            on_hover: move |index| cursor.set(Some(index)),
                        }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_route_to_detail_pages() {
        assert_eq!(
            route_for(HitTarget::Work {
                slug: "the-wedding-party".into()
            }),
            Route::WorkDetail {
                slug: "the-wedding-party".into()
            }
        );
        assert_eq!(
            route_for(HitTarget::Person {
                slug: "genevieve-nnaji".into()
            }),
            Route::PersonDetail {
                slug: "genevieve-nnaji".into()
            }
        );
    }
}
