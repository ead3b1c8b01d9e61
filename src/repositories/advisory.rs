//! Advisory repository: advisory records and their link to a city.
//!
//! An advisory is a standalone node; the city owns the single-valued
//! `advisory` edge pointing at it. The only retrieval path is "the advisory
//! currently linked to city X" - advisories are never listed or looked up by
//! their own id from the outside.
//!
//! The replace protocol is three non-transactional remote steps (delete the
//! old advisory, add the new one, relink the city) composed into one
//! user-visible operation. See [`AdvisoryRepository::replace`] for the
//! partial-failure policy.

use std::sync::Arc;

use serde::Deserialize;

use crate::error::AppError;
use crate::graph::{float_literal, string_literal, GraphExecutor, QueryExt};
use crate::models::Advisory;

/// Repository for advisory operations, keyed by city.
#[derive(Clone)]
pub struct AdvisoryRepository {
    graph: Arc<dyn GraphExecutor>,
}

impl AdvisoryRepository {
    /// Creates a repository over the given execution capability.
    pub fn new(graph: Arc<dyn GraphExecutor>) -> Self {
        Self { graph }
    }

    /// Returns the advisory currently linked to the city.
    ///
    /// Fails with [`AppError::NotFound`] when the city has no linked
    /// advisory, when the city itself does not exist, or when the decoded
    /// advisory carries no id.
    pub async fn one(&self, city_id: &str) -> Result<Advisory, AppError> {
        let document = one_document(city_id);

        let result: OneResult = self
            .graph
            .query(&document)
            .await
            .map_err(|e| e.wrap("query failed"))?;

        match result.get_city.and_then(|city| city.advisory) {
            Some(advisory) if advisory.id.is_some() => Ok(advisory),
            _ => Err(AppError::NotFound),
        }
    }

    /// Replaces the city's advisory with a freshly created one.
    ///
    /// Three remote steps run strictly in sequence:
    ///
    /// 1. Delete the currently linked advisory. A city with no advisory
    ///    counts as already done.
    /// 2. Add the new advisory as an unlinked node.
    /// 3. Relink the city to it.
    ///
    /// The steps are not transactional. Between 1 and 2 the city observably
    /// has no advisory; if 3 fails after 2 succeeded, the new advisory is
    /// left as an unlinked orphan and the city without an advisory. Callers
    /// must treat that as a failure state requiring reconciliation - no
    /// compensating delete is attempted. Returns the new advisory with its
    /// server-assigned id on full success.
    pub async fn replace(&self, city_id: &str, advisory: Advisory) -> Result<Advisory, AppError> {
        if let Err(err) = self.delete(city_id).await {
            if !err.is_not_found() {
                return Err(err.wrap("deleting advisory from database"));
            }
        }

        let advisory = self
            .add(advisory)
            .await
            .map_err(|e| e.wrap("adding advisory to database"))?;

        self.update_city_link(city_id, &advisory)
            .await
            .map_err(|e| e.wrap("replace advisory in city"))?;

        Ok(advisory)
    }

    /// Creates an advisory as an unlinked node.
    ///
    /// The input must not carry an id. On success, returns the input with
    /// the server-assigned id populated; no other field is trusted from the
    /// server, they echo the input.
    async fn add(&self, advisory: Advisory) -> Result<Advisory, AppError> {
        if advisory.id.is_some() {
            return Err(AppError::InvalidArgument(
                "advisory already carries an id".to_string(),
            ));
        }

        let document = add_document(&advisory);

        let result: AddResult = self
            .graph
            .query(&document)
            .await
            .map_err(|e| e.wrap("failed to add advisory"))?;

        let mut ids = result
            .add_advisory
            .map(|payload| payload.advisory)
            .unwrap_or_default();
        if ids.len() != 1 {
            return Err(AppError::InconsistentResponse(format!(
                "expected one created advisory id, found {}",
                ids.len()
            )));
        }

        Ok(Advisory {
            id: Some(ids.remove(0).id),
            ..advisory
        })
    }

    /// Points the city's `advisory` edge at the given advisory.
    ///
    /// The advisory must carry an id. The reply echoes the updated city's
    /// id, which is logged but deliberately not matched against `city_id`.
    async fn update_city_link(&self, city_id: &str, advisory: &Advisory) -> Result<(), AppError> {
        let Some(advisory_id) = advisory.id.as_deref() else {
            return Err(AppError::InvalidArgument(
                "advisory is missing an id".to_string(),
            ));
        };

        let document = update_city_document(city_id, advisory_id, advisory);

        let result: UpdateCityResult = self
            .graph
            .query(&document)
            .await
            .map_err(|e| e.wrap("failed to update city"))?;

        let updated = result.update_city.map(|p| p.city.len()).unwrap_or_default();
        tracing::debug!(updated, city_id, advisory_id, "relinked advisory");

        Ok(())
    }

    /// Deletes the advisory currently linked to the city.
    ///
    /// Deletion addresses advisories by their own id, so the id is first
    /// resolved through the parent city. A missing link propagates as
    /// [`AppError::NotFound`] unchanged, letting callers distinguish
    /// "nothing to delete" from real failures.
    async fn delete(&self, city_id: &str) -> Result<(), AppError> {
        let advisory = self.one(city_id).await?;
        let Some(advisory_id) = advisory.id.as_deref() else {
            // one() only returns advisories that carry an id
            return Err(AppError::NotFound);
        };

        let document = delete_document(advisory_id);

        let result: DeleteResult = self
            .graph
            .query(&document)
            .await
            .map_err(|e| e.wrap("failed to delete advisory"))?;

        let payload = result.delete_advisory.unwrap_or_default();
        if payload.num_uids != 1 {
            return Err(AppError::InconsistentResponse(format!(
                "failed to delete advisory: numUids: {}  msg: {}",
                payload.num_uids, payload.msg
            )));
        }

        Ok(())
    }
}

// ============================================================================
// Document builders
//
// Every interpolated value is rendered through string_literal/float_literal,
// never spliced in raw. Each builder embeds its decoder's document() so the
// request asks for exactly the subtree the decoder expects.

fn one_document(city_id: &str) -> String {
    format!(
        "query {{
    getCity(id: {id}) {{
        advisory {{
            id
            continent
            country
            country_code
            last_updated
            message
            score
            source
        }}
    }}
}}",
        id = string_literal(city_id),
    )
}

fn add_document(advisory: &Advisory) -> String {
    format!(
        "mutation {{
    addAdvisory(input: [{{
        continent: {continent}
        country: {country}
        country_code: {country_code}
        last_updated: {last_updated}
        message: {message}
        score: {score}
        source: {source}
    }}])
    {document}
}}",
        continent = string_literal(&advisory.continent),
        country = string_literal(&advisory.country),
        country_code = string_literal(&advisory.country_code),
        last_updated = string_literal(&advisory.last_updated),
        message = string_literal(&advisory.message),
        score = float_literal(advisory.score),
        source = string_literal(&advisory.source),
        document = AddResult::document(),
    )
}

fn update_city_document(city_id: &str, advisory_id: &str, advisory: &Advisory) -> String {
    format!(
        "mutation {{
    updateCity(input: {{
        filter: {{
            id: [{city_id}]
        }},
        set: {{
            advisory: {{
                id: {id}
                continent: {continent}
                country: {country}
                country_code: {country_code}
                last_updated: {last_updated}
                message: {message}
                score: {score}
                source: {source}
            }}
        }}
    }})
    {document}
}}",
        city_id = string_literal(city_id),
        id = string_literal(advisory_id),
        continent = string_literal(&advisory.continent),
        country = string_literal(&advisory.country),
        country_code = string_literal(&advisory.country_code),
        last_updated = string_literal(&advisory.last_updated),
        message = string_literal(&advisory.message),
        score = float_literal(advisory.score),
        source = string_literal(&advisory.source),
        document = UpdateCityResult::document(),
    )
}

fn delete_document(advisory_id: &str) -> String {
    format!(
        "mutation {{
    deleteAdvisory(filter: {{ id: [{id}] }})
    {document}
}}",
        id = string_literal(advisory_id),
        document = DeleteResult::document(),
    )
}

// ============================================================================
// Response decoders
//
// One struct per operation, mirroring exactly the reply subtree its
// document() asked for. All payload fields are optional or defaulted:
// a transport-level success with an empty payload must decode cleanly and
// then fail the operation's own verification, never the decode step.

/// Reply shape for the `getCity` query.
#[derive(Debug, Deserialize)]
struct OneResult {
    #[serde(rename = "getCity", default)]
    get_city: Option<CityNode>,
}

#[derive(Debug, Deserialize)]
struct CityNode {
    #[serde(default)]
    advisory: Option<Advisory>,
}

/// Reply shape for the `addAdvisory` mutation.
#[derive(Debug, Deserialize)]
struct AddResult {
    #[serde(rename = "addAdvisory", default)]
    add_advisory: Option<AddPayload>,
}

#[derive(Debug, Deserialize)]
struct AddPayload {
    #[serde(default)]
    advisory: Vec<NodeId>,
}

impl AddResult {
    fn document() -> &'static str {
        "{
        advisory {
            id
        }
    }"
    }
}

/// Reply shape for the `updateCity` mutation.
#[derive(Debug, Deserialize)]
struct UpdateCityResult {
    #[serde(rename = "updateCity", default)]
    update_city: Option<UpdateCityPayload>,
}

#[derive(Debug, Deserialize)]
struct UpdateCityPayload {
    #[serde(default)]
    city: Vec<NodeId>,
}

impl UpdateCityResult {
    fn document() -> &'static str {
        "{
        city {
            id
        }
    }"
    }
}

/// Reply shape for the `deleteAdvisory` mutation.
#[derive(Debug, Deserialize)]
struct DeleteResult {
    #[serde(rename = "deleteAdvisory", default)]
    delete_advisory: Option<DeletePayload>,
}

#[derive(Debug, Default, Deserialize)]
struct DeletePayload {
    #[serde(default)]
    msg: String,
    #[serde(rename = "numUids", default)]
    num_uids: i64,
}

impl DeleteResult {
    fn document() -> &'static str {
        "{
        msg
        numUids
    }"
    }
}

#[derive(Debug, Deserialize)]
struct NodeId {
    id: String,
}
