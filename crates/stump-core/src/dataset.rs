use crate::error::{Result, StumpError};
use crate::followup::count_follow_ups;
use crate::types::{Candidate, CandidateDocument, TalkingPoint};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::path::Path;

// ---------------------------------------------------------------------------
// CandidateTalkingPoint
// ---------------------------------------------------------------------------

/// A top-level talking point paired with the candidate that owns it, plus
/// the composite anchor id used for deep links.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateTalkingPoint<'a> {
    pub candidate_id: &'a str,
    pub candidate_name: &'a str,
    pub candidate_party: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_headshot: Option<&'a str>,
    pub talking_point: &'a TalkingPoint,
    /// `trim(candidate_id) + "-" + trim(talking_point.id)`
    pub anchor_id: String,
}

/// Build the deep-link anchor for a candidate / talking point pair.
pub fn anchor_id(candidate_id: &str, talking_point_id: &str) -> String {
    format!("{}-{}", candidate_id.trim(), talking_point_id.trim())
}

// ---------------------------------------------------------------------------
// Dataset
// ---------------------------------------------------------------------------

/// Read-only view over the loaded candidate document. Loaded once, never
/// mutated; every lookup is a linear scan.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    candidates: Vec<Candidate>,
}

impl Dataset {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    pub fn from_document(doc: CandidateDocument) -> Self {
        Self::new(doc.candidates)
    }

    pub fn from_json_str(data: &str) -> Result<Self> {
        let doc: CandidateDocument = serde_json::from_str(data)?;
        Ok(Self::from_document(doc))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(StumpError::ContentNotFound(path.to_path_buf()));
        }
        let data = std::fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&data)?;
        tracing::debug!(
            path = %path.display(),
            candidates = dataset.candidate_count(),
            "loaded candidate content"
        );
        Ok(dataset)
    }

    // -----------------------------------------------------------------------
    // Candidates
    // -----------------------------------------------------------------------

    /// All candidates, in document order.
    pub fn all_candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// First candidate whose id equals `id` exactly.
    pub fn candidate_by_id(&self, id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    // -----------------------------------------------------------------------
    // Talking points
    // -----------------------------------------------------------------------

    /// Top-level talking points for a candidate; empty when the candidate
    /// does not exist.
    pub fn talking_points_by_candidate(&self, candidate_id: &str) -> &[TalkingPoint] {
        self.candidate_by_id(candidate_id)
            .map(|c| c.talking_points.as_slice())
            .unwrap_or(&[])
    }

    /// Uniform random pick among a candidate's talking points using the
    /// thread-local generator. See [`Dataset::random_talking_point_with`].
    pub fn random_talking_point(
        &self,
        candidate_id: &str,
        exclude_id: Option<&str>,
    ) -> Option<&TalkingPoint> {
        self.random_talking_point_with(&mut rand::thread_rng(), candidate_id, exclude_id)
    }

    /// Uniform random pick among a candidate's talking points, skipping the
    /// one whose id equals `exclude_id`. When the exclusion would leave
    /// nothing to pick from, it is dropped and the full list is used.
    /// Returns `None` only when the candidate has no talking points.
    pub fn random_talking_point_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        candidate_id: &str,
        exclude_id: Option<&str>,
    ) -> Option<&TalkingPoint> {
        let all = self.talking_points_by_candidate(candidate_id);
        if all.is_empty() {
            return None;
        }

        let pool: Vec<&TalkingPoint> = match exclude_id {
            Some(ex) => all.iter().filter(|tp| tp.id != ex).collect(),
            None => all.iter().collect(),
        };

        if pool.is_empty() {
            return all.choose(rng);
        }
        pool.choose(rng).copied()
    }

    /// Every (candidate, talking point) pair that has a non-blank id on both
    /// sides, in candidate order then talking-point order.
    pub fn all_candidate_talking_points(&self) -> Vec<CandidateTalkingPoint<'_>> {
        self.candidates
            .iter()
            .filter(|c| !c.id.trim().is_empty())
            .flat_map(|c| {
                c.talking_points
                    .iter()
                    .filter(|tp| !tp.id.trim().is_empty())
                    .map(move |tp| CandidateTalkingPoint {
                        candidate_id: &c.id,
                        candidate_name: &c.name,
                        candidate_party: &c.party,
                        candidate_headshot: c.headshot.as_deref(),
                        talking_point: tp,
                        anchor_id: anchor_id(&c.id, &tp.id),
                    })
            })
            .collect()
    }

    /// First flattened entry whose anchor id equals `anchor`.
    pub fn find_candidate_talking_point(&self, anchor: &str) -> Option<CandidateTalkingPoint<'_>> {
        self.all_candidate_talking_points()
            .into_iter()
            .find(|entry| entry.anchor_id == anchor)
    }

    // -----------------------------------------------------------------------
    // Follow-ups
    // -----------------------------------------------------------------------

    /// Total follow-ups under every talking point of every candidate,
    /// subject to [`crate::followup::MAX_FOLLOW_UP_DEPTH`].
    pub fn count_all_follow_ups(&self) -> usize {
        self.candidates
            .iter()
            .flat_map(|c| c.talking_points.iter())
            .map(|tp| count_follow_ups(&tp.follow_ups))
            .sum()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
