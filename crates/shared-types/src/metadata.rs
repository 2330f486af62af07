use serde::{Deserialize, Serialize};

use crate::catalog::{Person, Work};

/// Site name appended to every page title.
pub const SITE_NAME: &str = "Nollywood.com";

/// Title of the search landing page.
pub const HOME_TITLE: &str = "Nollywood.com Search – Movies, TV Shows & Stars";

/// Document metadata for a page: `<title>`, description and social image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl PageMetadata {
    pub fn home() -> Self {
        Self {
            title: HOME_TITLE.to_string(),
            description: "The digital operating system for Nollywood. Search for your favorite movies, TV shows, actors, and directors."
                .to_string(),
            image: None,
        }
    }

    fn not_found(what: &str) -> Self {
        Self {
            title: format!("{what} Not Found"),
            description: format!("The requested {} could not be found.", what.to_lowercase()),
            image: None,
        }
    }
}

/// Metadata for a work detail page. `None` yields the "Work Not Found" page.
pub fn work_metadata(work: Option<&Work>) -> PageMetadata {
    let Some(work) = work else {
        return PageMetadata::not_found("Work");
    };
    PageMetadata {
        title: format!("{} - {SITE_NAME}", work.title),
        description: format!("{}: {}", work.work_type.label(), work.title),
        image: work.poster.as_ref().map(|p| p.url.clone()),
    }
}

/// Metadata for a person detail page. `None` yields the "Person Not Found" page.
pub fn person_metadata(person: Option<&Person>) -> PageMetadata {
    let Some(person) = person else {
        return PageMetadata::not_found("Person");
    };
    let description = person
        .bio
        .as_deref()
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("{} - Nollywood", person.name));
    PageMetadata {
        title: format!("{} - {SITE_NAME}", person.name),
        description,
        image: person.headshot.as_ref().map(|h| h.url.clone()),
    }
}
