use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Source
// ---------------------------------------------------------------------------

/// A citation attached to a talking point or follow-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub url: String,
}

// ---------------------------------------------------------------------------
// FollowUp
// ---------------------------------------------------------------------------

/// A nested question/answer node. Children may nest arbitrarily deep, and
/// authored content is not guaranteed to be acyclic once it has been
/// expanded by hand, so every walk over `follow_ups` goes through
/// [`crate::followup`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUp {
    #[serde(default)]
    pub id: String,
    /// Question form, shown where a talking point shows its title.
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Source>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub follow_ups: Vec<FollowUp>,
}

// ---------------------------------------------------------------------------
// TalkingPoint
// ---------------------------------------------------------------------------

/// A top-level topic a candidate can present. `id` is unique within its
/// candidate; reuse across candidates is reported by the QA checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalkingPoint {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Source>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub follow_ups: Vec<FollowUp>,
}

// ---------------------------------------------------------------------------
// Candidate
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub party: String,
    /// URL of the candidate's headshot image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headshot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub issues: Vec<String>,
    /// Display and selection order.
    #[serde(default)]
    pub talking_points: Vec<TalkingPoint>,
}

impl Candidate {
    pub fn talking_point(&self, id: &str) -> Option<&TalkingPoint> {
        self.talking_points.iter().find(|tp| tp.id == id)
    }
}

// ---------------------------------------------------------------------------
// CandidateDocument
// ---------------------------------------------------------------------------

/// Top-level shape of the content file: `{ "candidates": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateDocument {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
