use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shared_types::{
    message_indicates_not_found, AppError, CatalogConfig, Person, SearchInput, SearchResponse,
    Work,
};
use std::time::Duration;

use crate::error_convert::ReqwestErrorExt;

// --- GraphQL documents ---
//
// Each document selects exactly the fields the catalog types deserialize.

pub const SEARCH_QUERY: &str = r#"
query Search($input: SearchInput!) {
  search(input: $input) {
    collections {
      name
      displayName
      found
      hits {
        __typename
        ... on WorkSearchHit {
          work { id title slug releaseYear workType poster { url thumbnailImageUrl altText } }
        }
        ... on PersonSearchHit {
          person { id name slug bio headshot { url thumbnailImageUrl altText } }
        }
      }
    }
  }
}
"#;

pub const GET_WORK_QUERY: &str = r#"
query GetWork($identifier: String!) {
  getWork(identifier: $identifier) {
    id title slug workType summary synopsis releaseDate releaseYear runtime
    contentRating isStreamable isInTheatre languages spokenLanguages
    poster { id url thumbnailImageUrl altText }
    backdrop { id url thumbnailImageUrl altText }
    trailer { url thumbnailImageUrl title }
    genres { id name slug description }
    themes { id name slug description }
    cast {
      id role department characterName isLead isFeatured
      person { id name slug headshot { url thumbnailImageUrl altText } }
    }
    crew {
      id role department
      person { id name slug headshot { url thumbnailImageUrl altText } }
    }
  }
}
"#;

pub const GET_PERSON_QUERY: &str = r#"
query GetPerson($identifier: String!) {
  getPerson(identifier: $identifier) {
    id name slug bio age gender aliases nationality deceased
    birthDate birthName birthPlace deathDate status verified featured
    externalLinks { url label icon platform }
    headshot { url thumbnailImageUrl altText }
    works {
      items { id title slug workType releaseYear poster { url thumbnailImageUrl altText } }
    }
  }
}
"#;

// --- Envelope ---

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a, V> {
    query: &'a str,
    variables: V,
}

/// A single entry of the GraphQL `errors` array.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default)]
    pub extensions: Option<serde_json::Value>,
}

impl GraphQlError {
    fn code(&self) -> Option<&str> {
        self.extensions.as_ref()?.get("code")?.as_str()
    }

    pub fn is_not_found(&self) -> bool {
        message_indicates_not_found(&self.message)
            || self
                .code()
                .is_some_and(|code| code.eq_ignore_ascii_case("NOT_FOUND"))
    }

    pub fn into_app_error(self) -> AppError {
        if self.is_not_found() {
            AppError::not_found(self.message)
        } else {
            AppError::upstream(self.message)
        }
    }
}

/// `{ data?, errors? }` as returned by the catalog.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    #[serde(default = "none")]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

fn none<T>() -> Option<T> {
    None
}

impl<T> GraphQlResponse<T> {
    /// Resolve the envelope down to one root field.
    ///
    /// A present field wins; accompanying errors are only logged. A missing
    /// field (no `data`, or `data` with the field nulled out) takes the
    /// first error as the result, and is `Ok(None)` when there are none.
    pub fn into_field<U>(self, field: impl FnOnce(T) -> Option<U>) -> Result<Option<U>, AppError> {
        let mut errors = self.errors.unwrap_or_default().into_iter();
        match self.data.and_then(field) {
            Some(value) => {
                for error in errors {
                    tracing::warn!(message = %error.message, "catalog returned partial data");
                }
                Ok(Some(value))
            }
            None => match errors.next() {
                Some(first) => Err(first.into_app_error()),
                None => Ok(None),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchData {
    #[serde(default)]
    search: Option<SearchResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorkData {
    #[serde(default)]
    get_work: Option<Work>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersonData {
    #[serde(default)]
    get_person: Option<Person>,
}

/// Treat a not-found error as an absent record.
fn absent_on_not_found<T>(result: Result<Option<T>, AppError>) -> Result<Option<T>, AppError> {
    match result {
        Err(err) if err.is_not_found() => Ok(None),
        other => other,
    }
}

// --- Client ---

/// Typed client for the catalog GraphQL service.
///
/// Built once at startup from [`CatalogConfig`] and shared by cloning;
/// the underlying connection pool is reference-counted.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    endpoint: String,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build catalog client: {e}")))?;
        Ok(Self {
            http,
            endpoint: config.graphql_endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn execute<V, T>(&self, query: &str, variables: V) -> Result<GraphQlResponse<T>, AppError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&GraphQlRequest { query, variables })
            .send()
            .await
            .map_err(|e| e.into_app_error())?;

        let status = response.status();
        let body = response.text().await.map_err(|e| e.into_app_error())?;

        match serde_json::from_str::<GraphQlResponse<T>>(&body) {
            Ok(envelope) => Ok(envelope),
            Err(_) if !status.is_success() => Err(AppError::upstream(format!(
                "Catalog responded with {status}"
            ))),
            Err(e) => Err(AppError::decode(format!("Unreadable catalog response: {e}"))),
        }
    }

    /// Run the catalog search. A response without data is an empty result.
    #[tracing::instrument(skip(self, input), fields(term = %input.term))]
    pub async fn search(&self, input: &SearchInput) -> Result<SearchResponse, AppError> {
        let envelope: GraphQlResponse<SearchData> = self
            .execute(SEARCH_QUERY, serde_json::json!({ "input": input }))
            .await?;
        let response = envelope.into_field(|data| data.search)?.unwrap_or_default();
        tracing::debug!(collections = response.collections.len(), "search completed");
        Ok(response)
    }

    /// Fetch a work by slug or id. `Ok(None)` when the catalog has no such work.
    #[tracing::instrument(skip(self))]
    pub async fn get_work(&self, identifier: &str) -> Result<Option<Work>, AppError> {
        let envelope: GraphQlResponse<WorkData> = self
            .execute(GET_WORK_QUERY, serde_json::json!({ "identifier": identifier }))
            .await?;
        absent_on_not_found(envelope.into_field(|data| data.get_work))
    }

    /// Fetch a person by slug or id. `Ok(None)` when the catalog has no such person.
    #[tracing::instrument(skip(self))]
    pub async fn get_person(&self, identifier: &str) -> Result<Option<Person>, AppError> {
        let envelope: GraphQlResponse<PersonData> = self
            .execute(GET_PERSON_QUERY, serde_json::json!({ "identifier": identifier }))
            .await?;
        absent_on_not_found(envelope.into_field(|data| data.get_person))
    }
}
