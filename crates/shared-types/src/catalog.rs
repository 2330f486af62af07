use serde::{Deserialize, Deserializer, Serialize};

/// GraphQL sends `null` for empty lists and unset flags; treat it as the default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Kind of catalog work. Any code other than `MOVIE` reads as a TV show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkType {
    Movie,
    TvShow,
}

impl<'de> Deserialize<'de> for WorkType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(if code == "MOVIE" {
            WorkType::Movie
        } else {
            WorkType::TvShow
        })
    }
}

impl WorkType {
    /// Human-readable label ("Movie" / "TV Show").
    pub fn label(&self) -> &'static str {
        match self {
            WorkType::Movie => "Movie",
            WorkType::TvShow => "TV Show",
        }
    }

    /// Upper-case badge text shown beside search rows.
    pub fn badge(&self) -> &'static str {
        match self {
            WorkType::Movie => "MOVIE",
            WorkType::TvShow => "TV SHOW",
        }
    }
}

// ---------------------------------------------------------------------------
// Media
// ---------------------------------------------------------------------------

/// A poster, headshot or backdrop served by the media CDN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub thumbnail_image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

impl Image {
    /// URL suited to small renditions. Falls back to the full-size URL when
    /// the CDN did not produce a thumbnail.
    pub fn thumbnail(&self) -> &str {
        if self.thumbnail_image_url.is_empty() {
            &self.url
        } else {
            &self.thumbnail_image_url
        }
    }

    /// Alt text, or the supplied fallback (usually the work title or person name).
    pub fn alt_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.alt_text
            .as_deref()
            .filter(|alt| !alt.is_empty())
            .unwrap_or(fallback)
    }
}

/// A trailer clip attached to a work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Trailer {
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub thumbnail_image_url: String,
    #[serde(default)]
    pub title: Option<String>,
}

// ---------------------------------------------------------------------------
// Summaries (carried by search hits)
// ---------------------------------------------------------------------------

/// The Work reference carried by a search hit or a person's filmography.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct WorkSummary {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub release_year: Option<i32>,
    pub work_type: WorkType,
    #[serde(default)]
    pub poster: Option<Image>,
}

/// The Person reference carried by a search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PersonSummary {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub headshot: Option<Image>,
}

// ---------------------------------------------------------------------------
// Full records
// ---------------------------------------------------------------------------

/// A genre or theme label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Minimal person reference inside cast and crew listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreditedPerson {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub headshot: Option<Image>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CastMember {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub department: String,
    #[serde(default)]
    pub character_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_lead: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_featured: bool,
    pub person: Option<CreditedPerson>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CrewMember {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub department: String,
    pub person: Option<CreditedPerson>,
}

/// Full work record returned by `getWork`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Work {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub work_type: WorkType,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    /// Runtime in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub content_rating: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_streamable: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_in_theatre: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub spoken_languages: Vec<String>,
    #[serde(default)]
    pub poster: Option<Image>,
    #[serde(default)]
    pub backdrop: Option<Image>,
    #[serde(default)]
    pub trailer: Option<Trailer>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<Tag>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub themes: Vec<Tag>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cast: Vec<CastMember>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub crew: Vec<CrewMember>,
}

impl Work {
    /// Long-form description, preferring the synopsis over the summary.
    pub fn description(&self) -> Option<&str> {
        self.synopsis
            .as_deref()
            .or(self.summary.as_deref())
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    /// Cast entries with a resolved person, leads first, otherwise in catalog order.
    pub fn billed_cast(&self) -> Vec<&CastMember> {
        let mut cast: Vec<&CastMember> = self.cast.iter().filter(|c| c.person.is_some()).collect();
        cast.sort_by_key(|c| !c.is_lead);
        cast
    }
}

/// A social or reference link on a person profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ExternalLink {
    pub url: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
}

/// Wrapper matching the catalog's paginated `works { items }` shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct WorkPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<WorkSummary>,
}

/// Full person record returned by `getPerson`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub aliases: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nationality: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub deceased: bool,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub birth_name: Option<String>,
    #[serde(default)]
    pub birth_place: Option<String>,
    #[serde(default)]
    pub death_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub verified: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub external_links: Vec<ExternalLink>,
    #[serde(default)]
    pub headshot: Option<Image>,
    #[serde(default)]
    pub works: Option<WorkPage>,
}

/// Number of works shown in a person's "Known For" grid.
pub const KNOWN_FOR_LIMIT: usize = 8;

impl Person {
    /// Most recent works first (missing years sort last), capped at
    /// [`KNOWN_FOR_LIMIT`].
    pub fn known_for_works(&self) -> Vec<WorkSummary> {
        let mut works: Vec<WorkSummary> = self
            .works
            .as_ref()
            .map(|page| page.items.clone())
            .unwrap_or_default();
        works.sort_by_key(|w| std::cmp::Reverse(w.release_year.unwrap_or(0)));
        works.truncate(KNOWN_FOR_LIMIT);
        works
    }

    /// Display form of the catalog's gender code.
    pub fn gender_label(&self) -> Option<String> {
        self.gender.as_deref().map(|g| match g {
            "MALE" => "Male".to_string(),
            "FEMALE" => "Female".to_string(),
            other => other.to_string(),
        })
    }
}
