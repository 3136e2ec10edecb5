//! Per-node cause strings for one analysis run.

use cascade_core::config::ExplanationPolicy;
use cascade_core::types::{DependencyStrength, NodeId, SystemStatus};
use rustc_hash::FxHashMap;

/// Accumulates one explanation per node whose status changed, plus the
/// fixed source line for every seed.
#[derive(Debug)]
pub struct ExplanationRecorder {
    policy: ExplanationPolicy,
    causes: FxHashMap<NodeId, Cause>,
}

#[derive(Debug)]
struct Cause {
    text: String,
    /// Severity key for the `MostSevere` policy. Seeds rank at the top.
    rank: (SystemStatus, DependencyStrength),
}

impl ExplanationRecorder {
    pub fn new(policy: ExplanationPolicy) -> Self {
        Self {
            policy,
            causes: FxHashMap::default(),
        }
    }

    /// Fixed explanation for an externally marked failure.
    pub fn record_seed(&mut self, id: NodeId, name: &str) {
        self.causes.insert(
            id,
            Cause {
                text: format!("{name} is FAILED (source)."),
                rank: (SystemStatus::Failed, DependencyStrength::Critical),
            },
        );
    }

    /// Record a cascade-applied status change.
    ///
    /// Under `LastWriter` the newest applied change always overwrites; under
    /// `MostSevere` an existing cause survives unless the new one carries a
    /// strictly worse (status, strength) pair.
    pub fn record_cascade(
        &mut self,
        id: NodeId,
        name: &str,
        status: SystemStatus,
        strength: DependencyStrength,
        via: &str,
    ) {
        let text = if status == SystemStatus::Failed {
            format!("{name} FAILED due to {} dependency on {via}.", strength.label())
        } else {
            format!("{name} degraded due to {} dependency on {via}.", strength.label())
        };
        let cause = Cause {
            text,
            rank: (status, strength),
        };
        match self.policy {
            ExplanationPolicy::LastWriter => {
                self.causes.insert(id, cause);
            }
            ExplanationPolicy::MostSevere => match self.causes.get(&id) {
                Some(existing) if existing.rank >= cause.rank => {}
                _ => {
                    self.causes.insert(id, cause);
                }
            },
        }
    }

    pub fn cause(&self, id: NodeId) -> Option<&str> {
        self.causes.get(&id).map(|c| c.text.as_str())
    }

    pub fn len(&self) -> usize {
        self.causes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.causes.is_empty()
    }

    /// Consume the recorder: lexicographically sorted lines for display plus
    /// the per-node cause map.
    pub fn finish(self) -> (Vec<String>, FxHashMap<NodeId, String>) {
        let causes: FxHashMap<NodeId, String> =
            self.causes.into_iter().map(|(id, c)| (id, c.text)).collect();
        let mut lines: Vec<String> = causes.values().cloned().collect();
        lines.sort();
        (lines, causes)
    }
}
