use crate::dataset::Dataset;
use crate::types::TalkingPoint;
use rand::Rng;

/// Per-candidate "spin" session: picks a random talking point without
/// showing the same one twice in a row.
#[derive(Debug, Clone)]
pub struct SpinState<'a> {
    dataset: &'a Dataset,
    candidate_id: String,
    active_id: Option<String>,
    last_id: Option<String>,
    current: Option<&'a TalkingPoint>,
}

impl<'a> SpinState<'a> {
    pub fn new(dataset: &'a Dataset, candidate_id: impl Into<String>) -> Self {
        Self {
            dataset,
            candidate_id: candidate_id.into(),
            active_id: None,
            last_id: None,
            current: None,
        }
    }

    pub fn candidate_id(&self) -> &str {
        &self.candidate_id
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// Id of the last point shown. Survives [`SpinState::reset`].
    pub fn last_id(&self) -> Option<&str> {
        self.last_id.as_deref()
    }

    pub fn current(&self) -> Option<&'a TalkingPoint> {
        self.current
    }

    pub fn spin(&mut self) -> Option<&'a TalkingPoint> {
        self.spin_with(&mut rand::thread_rng())
    }

    /// Pick a new point, avoiding the last one shown. With no talking points
    /// the active fields are cleared and `last_id` is left as it was.
    pub fn spin_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&'a TalkingPoint> {
        let dataset = self.dataset;
        let picked =
            dataset.random_talking_point_with(rng, &self.candidate_id, self.last_id.as_deref());

        match picked {
            Some(tp) => {
                self.active_id = Some(tp.id.clone());
                self.last_id = Some(tp.id.clone());
                self.current = Some(tp);
            }
            None => {
                self.active_id = None;
                self.current = None;
            }
        }
        picked
    }

    /// Clear the active selection; the next spin still avoids the last point.
    pub fn reset(&mut self) {
        self.active_id = None;
        self.current = None;
    }

    /// Clear everything, so the previous point may come up again.
    pub fn clear_all(&mut self) {
        self.reset();
        self.last_id = None;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
