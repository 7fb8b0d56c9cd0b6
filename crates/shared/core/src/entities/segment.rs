use serde::{Deserialize, Serialize};
use std::fmt;

/// A timed segment of a bout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    /// The whole period
    Period,
    /// Time between jams
    Lineup,
    /// A single jam
    Jam,
    /// A team or official timeout
    Timeout,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Segment::Period => "period",
            Segment::Lineup => "lineup",
            Segment::Jam => "jam",
            Segment::Timeout => "timeout",
        };
        f.write_str(name)
    }
}

/// Phase of play within a period, as shown on the scoreboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodPhase {
    /// Before the period begins
    #[default]
    Start,
    /// Lineup before the next jam
    JamPending,
    /// A jam is in progress
    JamActive,
    /// A timeout is in effect
    Timeout,
    /// End of regular play
    End,
}

impl PeriodPhase {
    /// The segment whose clock is counting in this phase, if any
    pub fn active_segment(&self) -> Option<Segment> {
        match self {
            PeriodPhase::JamPending => Some(Segment::Lineup),
            PeriodPhase::JamActive => Some(Segment::Jam),
            PeriodPhase::Timeout => Some(Segment::Timeout),
            PeriodPhase::Start | PeriodPhase::End => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_segment() {
        assert_eq!(PeriodPhase::Start.active_segment(), None);
        assert_eq!(PeriodPhase::JamActive.active_segment(), Some(Segment::Jam));
        assert_eq!(
            PeriodPhase::JamPending.active_segment(),
            Some(Segment::Lineup)
        );
    }

    #[test]
    fn test_phase_serde() {
        let phase: PeriodPhase = serde_json::from_str("\"jam_pending\"").unwrap();
        assert_eq!(phase, PeriodPhase::JamPending);
    }
}
