use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdFilm, LdUser};
use dioxus_free_icons::Icon;
use shared_types::{
    clean_bio_text, collection_count_label, infer_role, work_snippet, NormalizedResults,
    ResultEntry, ValidHit,
};
use shared_ui::components::{Badge, BadgeVariant, HighlightedText};

/// Display fields for one result row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowContent {
    pub title: String,
    pub badge: &'static str,
    pub snippet: String,
    pub thumbnail: Option<String>,
    pub is_work: bool,
}

impl RowContent {
    pub fn from_hit(hit: &ValidHit) -> Self {
        match hit {
            ValidHit::Work(work) => Self {
                title: work.title.clone(),
                badge: work.work_type.badge(),
                snippet: work_snippet(work),
                thumbnail: work.poster.as_ref().map(|p| p.thumbnail().to_string()),
                is_work: true,
            },
            ValidHit::Person(person) => Self {
                title: person.name.clone(),
                badge: infer_role(person.bio.as_deref()).badge(),
                snippet: clean_bio_text(person.bio.as_deref()),
                thumbnail: person.headshot.as_ref().map(|h| h.thumbnail().to_string()),
                is_work: false,
            },
        }
    }
}

/// Grouped result list. `cursor` is the highlighted flat index.
#[component]
pub fn ResultList(
    results: NormalizedResults,
    term: String,
    cursor: Option<usize>,
    max_height_vh: u8,
    on_select: EventHandler<usize>,
    on_hover: EventHandler<usize>,
) -> Element {
    rsx! {
        div {
            class: "search-results-scroll",
            style: "max-height: {max_height_vh}vh;",
            role: "listbox",
            for group in results.groups.iter() {
                div { key: "{group.name}", class: "search-results-group",
                    div { class: "search-results-group-header",
                        span { class: "search-results-group-count",
                            {collection_count_label(&group.display_name, group.count)}
                        }
                        span { class: "search-results-group-name", "{group.display_name}" }
                    }
                    for (index, entry) in results.group_entries(group) {
                        ResultRow {
                            key: "{entry.key}",
                            entry: entry.clone(),
                            term: term.clone(),
                            selected: cursor == Some(index),
                            on_select: move |_| on_select.call(index),
                            on_hover: move |_| on_hover.call(index),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ResultRow(
    entry: ResultEntry,
    term: String,
    selected: bool,
    on_select: EventHandler<()>,
    on_hover: EventHandler<()>,
) -> Element {
    let row = RowContent::from_hit(&entry.hit);
    let alt = row.title.clone();
    let badge_variant = if row.is_work {
        BadgeVariant::Work
    } else {
        BadgeVariant::Person
    };

    rsx! {
        div {
            class: if selected { "search-result search-result-active" } else { "search-result" },
            role: "option",
            aria_selected: "{selected}",
            // mousedown keeps focus in the input until the click lands
            onmousedown: move |e: MouseEvent| e.prevent_default(),
            onclick: move |_| on_select.call(()),
            onmouseenter: move |_| on_hover.call(()),

            div { class: "search-result-thumb",
                match row.thumbnail {
                    Some(src) => rsx! {
                        img { src: "{src}", alt: "{alt}", loading: "lazy" }
                    },
                    None if row.is_work => rsx! {
                        Icon::<LdFilm> { icon: LdFilm, width: 16, height: 16 }
                    },
                    None => rsx! {
                        Icon::<LdUser> { icon: LdUser, width: 16, height: 16 }
                    },
                }
            }
            div { class: "search-result-body",
                div { class: "search-result-heading",
                    h4 { class: "search-result-title",
                        HighlightedText { text: row.title.clone(), term }
                    }
                    Badge { variant: badge_variant, "{row.badge}" }
                }
                p { class: "search-result-snippet", "{row.snippet}" }
            }
        }
    }
}
