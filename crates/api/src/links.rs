//! Navigational hyperlinks derived from planter records.
//!
//! Links are computed at response time and never persisted; they are a
//! pure function of the record under the fixed `/api/v1` path convention.

use grovetrack_db::models::planter::Planter;
use serde::Serialize;

/// Named hyperlinks for a single planter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanterLinks {
    /// Canonical URL of this planter.
    #[serde(rename = "self")]
    pub self_link: String,
    /// Trees recorded by this planter.
    pub trees: String,
    /// The planter's organization. Omitted when the record carries no
    /// organization id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
}

impl PlanterLinks {
    /// Derive the link set for a planter record.
    pub fn for_planter(planter: &Planter) -> Self {
        Self {
            self_link: format!("/planters/{}", planter.id),
            trees: format!("/trees?planter_id={}", planter.id),
            organization: planter
                .organization_id
                .map(|org_id| format!("/organizations/{org_id}")),
        }
    }
}

/// A planter record augmented with its derived links, as serialized in
/// every planter response.
#[derive(Debug, Clone, Serialize)]
pub struct PlanterWithLinks {
    #[serde(flatten)]
    pub planter: Planter,
    pub links: PlanterLinks,
}

impl PlanterWithLinks {
    pub fn new(planter: Planter) -> Self {
        let links = PlanterLinks::for_planter(&planter);
        Self { planter, links }
    }
}

/// Augment a batch of records, preserving order.
pub fn with_links(planters: Vec<Planter>) -> Vec<PlanterWithLinks> {
    planters.into_iter().map(PlanterWithLinks::new).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
