use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdExternalLink, LdUser};
use dioxus_free_icons::Icon;
use shared_types::{
    calculate_age, clean_bio_text, format_date, infer_role, person_metadata, AppError, Person,
};
use shared_ui::components::{DetailList, DetailSkeleton, PosterImage};

use super::PageHead;
use crate::routes::Route;

/// Label/value pairs for the "Personal Info" column. Fields without a
/// value are omitted.
fn personal_info(person: &Person, today: chrono::NaiveDate) -> Vec<(&'static str, String)> {
    let mut info = vec![(
        "Known For",
        infer_role(person.bio.as_deref()).known_for().to_string(),
    )];

    if let Some(gender) = person.gender_label() {
        info.push(("Gender", gender));
    }

    if let Some(birth_date) = person.birth_date.as_deref() {
        let born = match person.birth_place.as_deref() {
            Some(place) => format!("{} in {place}", format_date(birth_date)),
            None => format_date(birth_date),
        };
        info.push(("Born", born));
    }

    let age = person.age.or_else(|| {
        person
            .birth_date
            .as_deref()
            .and_then(|birth| calculate_age(birth, today))
    });
    if let Some(age) = age {
        info.push(("Age", age.to_string()));
    }

    if person.deceased {
        if let Some(death_date) = person.death_date.as_deref() {
            info.push(("Died", format_date(death_date)));
        }
    }

    if !person.aliases.is_empty() {
        info.push(("Also Known As", person.aliases.join(", ")));
    }

    info
}

fn biography(person: &Person) -> String {
    match person.bio.as_deref().filter(|b| !b.trim().is_empty()) {
        Some(bio) => clean_bio_text(Some(bio)),
        None => format!("We don't have a biography for {}.", person.name),
    }
}

/// Detail page for an actor, director or other credited person.
#[component]
pub fn PersonDetail(slug: ReadSignal<String>) -> Element {
    let person = use_server_future(move || async move { server::api::get_person(slug()).await })?;

    let content = match &*person.read() {
        Some(Ok(person)) => rsx! { PersonView { person: person.clone() } },
        Some(Err(err)) => {
            let err = AppError::from_server_error_or_internal(&err.to_string());
            if !err.is_not_found() {
                tracing::warn!(slug = %slug.peek().as_str(), error = %err, "person lookup failed");
            }
            let metadata = person_metadata(None);
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
        document::Link { rel: "stylesheet", href: asset!("./person_detail.css") }
        {content}
    }
}

#[component]
fn PersonView(person: Person) -> Element {
    let today = chrono::Local::now().date_naive();
    let info = personal_info(&person, today);
    let bio = biography(&person);
    let known_for = person.known_for_works();
    let links: Vec<(String, String, String)> = person
        .external_links
        .iter()
        .map(|link| {
            let title = link.platform.clone().unwrap_or_else(|| "Social Link".to_string());
            let label = link
                .label
                .clone()
                .or_else(|| link.platform.clone())
                .unwrap_or_else(|| link.url.clone());
            (link.url.clone(), title, label)
        })
        .collect();
    let headshot_alt = person
        .headshot
        .as_ref()
        .map(|h| h.alt_or(&person.name).to_string())
        .unwrap_or_else(|| person.name.clone());

    rsx! {
        PageHead { metadata: person_metadata(Some(&person)) }

        div { class: "person-detail",
            aside { class: "person-detail-aside",
                div { class: "person-detail-headshot",
                    match person.headshot.as_ref() {
                        Some(headshot) => rsx! {
                            img {
                                src: "{headshot.url}",
                                alt: "{headshot_alt}",
                            }
                        },
                        None => rsx! {
                            div { class: "person-detail-headshot-placeholder",
                                Icon::<LdUser> { icon: LdUser, width: 96, height: 96 }
                            }
                        },
                    }
                }

                DetailList { items: info, heading: "Personal Info" }

                if !links.is_empty() {
                    div { class: "person-detail-links",
                        for (url, title, label) in links {
                            a {
                                key: "{url}",
                                href: "{url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                title: "{title}",
                                Icon::<LdExternalLink> { icon: LdExternalLink, width: 16, height: 16 }
                                span { "{label}" }
                            }
                        }
                    }
                }
            }

            div { class: "person-detail-main",
                h1 { class: "detail-title", "{person.name}" }

                section { class: "person-detail-bio",
                    h3 { class: "detail-section-title", "Biography" }
                    p { "{bio}" }
                }

                if !known_for.is_empty() {
                    section { class: "person-detail-known-for",
                        h3 { class: "detail-section-title", "Known For" }
                        div { class: "person-detail-grid",
                            for work in known_for {
                                Link {
                                    key: "{work.id}",
                                    to: Route::WorkDetail { slug: work.slug.clone() },
                                    class: "person-detail-work",
                                    PosterImage {
                                        src: work.poster.as_ref().map(|p| p.thumbnail().to_string()),
                                        alt: work.title.clone(),
                                    }
                                    h4 { "{work.title}" }
                                    if let Some(year) = work.release_year {
                                        p { "{year}" }
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
