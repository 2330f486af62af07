use dioxus::prelude::*;
use shared_types::{format_date, work_metadata, AppError, Work};
use shared_ui::components::{
    Badge, BadgeVariant, DetailList, DetailSkeleton, PosterImage,
};

use super::PageHead;
use crate::routes::Route;

/// Secondary facts shown beside the poster, in display order.
fn work_facts(work: &Work) -> Vec<(&'static str, String)> {
    let mut facts = Vec::new();
    if let Some(date) = work.release_date.as_deref() {
        facts.push(("Released", format_date(date)));
    } else if let Some(year) = work.release_year {
        facts.push(("Released", year.to_string()));
    }
    if let Some(minutes) = work.runtime {
        facts.push(("Runtime", format!("{minutes} min")));
    }
    if let Some(rating) = work.content_rating.as_deref() {
        facts.push(("Rated", rating.to_string()));
    }
    if !work.spoken_languages.is_empty() {
        facts.push(("Languages", work.spoken_languages.join(", ")));
    }
    facts
}

/// Detail page for a movie or TV show.
#[component]
pub fn WorkDetail(slug: ReadSignal<String>) -> Element {
    let work = use_server_future(move || async move { server::api::get_work(slug()).await })?;

    let content = match &*work.read() {
        Some(Ok(work)) => rsx! { WorkView { work: work.clone() } },
        Some(Err(err)) => {
            let err = AppError::from_server_error_or_internal(&err.to_string());
            if !err.is_not_found() {
                tracing::warn!(slug = %slug.peek().as_str(), error = %err, "work lookup failed");
            }
            let metadata = work_metadata(None);
            rsx! {
                PageHead { metadata: metadata.clone() }
                div { class: "detail-missing",
                    h1 { class: "detail-title", "{metadata.title}" }
                    p { "{metadata.description}" }
                    Link { to: Route::Home {}, "Back to search" }
                }
            }
        }
        None => rsx! {
            DetailSkeleton {}
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./work_detail.css") }
        {content}
    }
}

#[component]
fn WorkView(work: Work) -> Element {
    let facts = work_facts(&work);
    let kind_badge = work.work_type.badge();
    let kind_label = work.work_type.label();
    let cast = work.billed_cast().into_iter().cloned().collect::<Vec<_>>();
    let crew = work
        .crew
        .iter()
        .filter(|c| c.person.is_some())
        .cloned()
        .collect::<Vec<_>>();
    let poster = work.poster.as_ref().map(|p| p.url.clone());
    let poster_alt = work
        .poster
        .as_ref()
        .map(|p| p.alt_or(&work.title).to_string())
        .unwrap_or_else(|| work.title.clone());

    rsx! {
        PageHead { metadata: work_metadata(Some(&work)) }

        div { class: "work-detail",
            div { class: "work-detail-aside",
                PosterImage { src: poster, alt: poster_alt }
                DetailList { items: facts }
            }

            div { class: "work-detail-main",
                h1 { class: "detail-title", "{work.title}" }
                div { class: "work-detail-tags",
                    Badge { "{kind_badge}" }
                    for genre in work.genres.iter() {
                        Badge { key: "{genre.id}", variant: BadgeVariant::Genre, "{genre.name}" }
                    }
                }
                p { class: "work-detail-kind", "{kind_label}" }

                if let Some(description) = work.description() {
                    p { class: "work-detail-description", "{description}" }
                }

                if !cast.is_empty() {
                    section { class: "work-detail-credits",
                        h3 { class: "detail-section-title", "Cast" }
                        ul {
                            for member in cast {
                                if let Some(person) = member.person {
                                    li { key: "{member.id}",
                                        Link { to: Route::PersonDetail { slug: person.slug.clone() },
                                            "{person.name}"
                                        }
                                        if let Some(character) = member.character_name {
                                            span { class: "work-detail-credit-role", " as {character}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                if !crew.is_empty() {
                    section { class: "work-detail-credits",
                        h3 { class: "detail-section-title", "Crew" }
                        ul {
                            for member in crew {
                                if let Some(person) = member.person {
                                    li { key: "{member.id}",
                                        Link { to: Route::PersonDetail { slug: person.slug.clone() },
                                            "{person.name}"
                                        }
                                        span { class: "work-detail-credit-role", " · {member.role}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
