#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

/// View state of a single analyze control.
///
/// The three variants are mutually exclusive; presentation projects straight
/// from this enum, so a page can never show a spinner and a result at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnalysisPhase {
    #[default]
    Idle,
    InFlight,
    Complete,
}

/// Sequence-guarded lifecycle shared by every analyze control.
///
/// Each submission takes a token from `begin`. A response may only land if
/// its token is still the latest one issued, so a superseded request that
/// resolves late is dropped instead of overwriting newer state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnalysisLifecycle {
    pub phase: AnalysisPhase,
    seq: u64,
}

impl AnalysisLifecycle {
    /// Start a new request, superseding any outstanding one.
    /// Returns the token the eventual response must present.
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.phase = AnalysisPhase::InFlight;
        self.seq
    }

    /// Whether `token` belongs to the latest submission.
    #[must_use]
    pub fn is_current(&self, token: u64) -> bool {
        self.seq == token
    }

    /// Mark the request identified by `token` complete.
    /// Returns `false` (and changes nothing) for a stale token.
    pub fn complete(&mut self, token: u64) -> bool {
        if self.is_current(token) && self.phase == AnalysisPhase::InFlight {
            self.phase = AnalysisPhase::Complete;
            true
        } else {
            false
        }
    }

    /// Mark the request identified by `token` failed, returning to idle.
    /// Returns `false` (and changes nothing) for a stale token.
    pub fn fail(&mut self, token: u64) -> bool {
        if self.is_current(token) && self.phase == AnalysisPhase::InFlight {
            self.phase = AnalysisPhase::Idle;
            true
        } else {
            false
        }
    }

    /// Drop back to idle, e.g. when the input is cleared.
    pub fn reset(&mut self) {
        self.phase = AnalysisPhase::Idle;
    }
}
