//! Search wire types and the result normalizer.
//!
//! The catalog returns results grouped into collections whose hits are a
//! tagged union over works and people. Upstream data can be partially null
//! even when a request succeeds, so everything downstream (counting, keyboard
//! indices, row keys, rendering) works from [`NormalizedResults`], which only
//! ever contains hits whose referenced entity is present.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::catalog::{PersonSummary, WorkSummary};

/// Terms shorter than this many characters never reach the catalog.
pub const MIN_TERM_LEN: usize = 2;

/// The collections every catalog search is scoped to, in display order.
pub const CATALOG_COLLECTIONS: [&str; 2] = ["works", "people"];

/// Whether a term is long enough to query (characters, not bytes).
pub fn is_searchable(term: &str) -> bool {
    term.chars().count() >= MIN_TERM_LEN
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Variables for the `search` query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchInput {
    pub term: String,
    pub collections: Vec<String>,
}

impl SearchInput {
    /// A search scoped to the catalog's fixed collection set.
    pub fn catalog(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            collections: CATALOG_COLLECTIONS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// One server-reported match, tagged by GraphQL `__typename`.
///
/// The referenced entity may be null even on a successful response; use
/// [`SearchHit::validate`] before touching it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "__typename")]
pub enum SearchHit {
    WorkSearchHit {
        #[serde(default)]
        work: Option<WorkSummary>,
    },
    PersonSearchHit {
        #[serde(default)]
        person: Option<PersonSummary>,
    },
    /// Any result kind this client does not know, or a hit that failed to
    /// decode. Never valid.
    #[serde(other)]
    Unsupported,
}

impl SearchHit {
    /// The hit with its entity guaranteed present, or `None` for malformed hits.
    pub fn validate(&self) -> Option<ValidHit> {
        match self {
            SearchHit::WorkSearchHit { work: Some(work) } => Some(ValidHit::Work(work.clone())),
            SearchHit::PersonSearchHit {
                person: Some(person),
            } => Some(ValidHit::Person(person.clone())),
            SearchHit::WorkSearchHit { work: None }
            | SearchHit::PersonSearchHit { person: None }
            | SearchHit::Unsupported => None,
        }
    }
}

/// A named bucket of hits sharing a result kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub name: String,
    pub display_name: String,
    /// Server-reported total. May count hits whose entity is null; never
    /// shown to users.
    #[serde(default)]
    pub found: u64,
    #[serde(default, deserialize_with = "hits_or_unsupported")]
    pub hits: Vec<SearchHit>,
}

/// Decode each hit on its own so one malformed entity cannot sink the
/// whole response.
fn hits_or_unsupported<'de, D>(deserializer: D) -> Result<Vec<SearchHit>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|hit| serde_json::from_value(hit).unwrap_or(SearchHit::Unsupported))
        .collect())
}

/// Payload of the `search` query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "crate::catalog::null_as_default")]
    pub collections: Vec<Collection>,
}

impl SearchResponse {
    pub fn normalize(&self) -> NormalizedResults {
        normalize(&self.collections)
    }
}

// ---------------------------------------------------------------------------
// Normalized view
// ---------------------------------------------------------------------------

/// A hit whose referenced entity is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum ValidHit {
    Work(WorkSummary),
    Person(PersonSummary),
}

/// Where selecting a hit navigates to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    Work { slug: String },
    Person { slug: String },
}

impl ValidHit {
    /// GraphQL typename of the originating hit; part of the row key.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidHit::Work(_) => "WorkSearchHit",
            ValidHit::Person(_) => "PersonSearchHit",
        }
    }

    /// Work title or person name.
    pub fn title(&self) -> &str {
        match self {
            ValidHit::Work(work) => &work.title,
            ValidHit::Person(person) => &person.name,
        }
    }

    pub fn slug(&self) -> &str {
        match self {
            ValidHit::Work(work) => &work.slug,
            ValidHit::Person(person) => &person.slug,
        }
    }

    pub fn target(&self) -> HitTarget {
        match self {
            ValidHit::Work(work) => HitTarget::Work {
                slug: work.slug.clone(),
            },
            ValidHit::Person(person) => HitTarget::Person {
                slug: person.slug.clone(),
            },
        }
    }
}

/// One row of the flat, navigable result list.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultEntry {
    /// `{collection}-{hitKind}-{indexWithinCollection}`; stable across renders.
    pub key: String,
    pub collection: String,
    pub hit: ValidHit,
}

/// A rendered collection: header data plus the slice of the flat list it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultGroup {
    pub name: String,
    pub display_name: String,
    /// Count of valid hits; this is what the header shows.
    pub count: usize,
    /// Indices into [`NormalizedResults::entries`].
    pub range: Range<usize>,
}

/// Validity-filtered, order-preserving concatenation of every collection's
/// hits. The single index space for keyboard selection and rendering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedResults {
    pub groups: Vec<ResultGroup>,
    pub entries: Vec<ResultEntry>,
}

impl NormalizedResults {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ResultEntry> {
        self.entries.get(index)
    }

    /// Entries belonging to `group`, paired with their flat index.
    pub fn group_entries<'a>(
        &'a self,
        group: &ResultGroup,
    ) -> impl Iterator<Item = (usize, &'a ResultEntry)> + 'a {
        let range = group.range.clone();
        range.clone().zip(self.entries[range].iter())
    }
}

/// Flatten raw collections into the navigable result list.
///
/// Malformed hits are dropped, collections left empty are omitted, and each
/// kept collection reports its valid-hit count.
pub fn normalize(collections: &[Collection]) -> NormalizedResults {
    let mut out = NormalizedResults::default();

    for collection in collections {
        let start = out.entries.len();
        for (index, hit) in collection.hits.iter().filter_map(SearchHit::validate).enumerate() {
            out.entries.push(ResultEntry {
                key: format!("{}-{}-{}", collection.name, hit.kind(), index),
                collection: collection.name.clone(),
                hit,
            });
        }
        let end = out.entries.len();
        if end > start {
            out.groups.push(ResultGroup {
                name: collection.name.clone(),
                display_name: collection.display_name.clone(),
                count: end - start,
                range: start..end,
            });
        }
    }

    out
}

/// Header line for a collection, e.g. "Found 1 work" / "Found 3 people".
///
/// The singular form drops the display name's last character, which is how
/// the catalog names its collections ("Works", "Movies").
pub fn collection_count_label(display_name: &str, count: usize) -> String {
    let plural = display_name.to_lowercase();
    if count == 1 {
        let mut chars = display_name.chars();
        chars.next_back();
        format!("Found {count} {}", chars.as_str().to_lowercase())
    } else {
        format!("Found {count} {plural}")
    }
}
