use crate::constants::{RANK_FAN_MIN, RANK_HABITUAL_MIN, RANK_POETA_MIN};
use std::fmt;

/// Coarse fan-level bucket for a final score out of ten.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RankTier {
    Poeta,
    Fan,
    Habitual,
    Turista,
}

impl RankTier {
    pub fn from_score(score: usize) -> Self {
        match score {
            s if s >= RANK_POETA_MIN => RankTier::Poeta,
            s if s >= RANK_FAN_MIN => RankTier::Fan,
            s if s >= RANK_HABITUAL_MIN => RankTier::Habitual,
            _ => RankTier::Turista,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RankTier::Poeta => "Poeta",
            RankTier::Fan => "Fan",
            RankTier::Habitual => "Habitual",
            RankTier::Turista => "Turista",
        }
    }
}

impl fmt::Display for RankTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
