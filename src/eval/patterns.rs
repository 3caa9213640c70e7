//! Pattern definitions and move-scoring weights
//!
//! A pattern classifies a five-cell window by how many stones of one color
//! and how many empty cells it holds. Only two urgency tiers are modelled.

/// Window classifications the threat detector looks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// 4 stones + 1 empty: one move from five in a row
    Immediate,
    /// 3 stones + 2 empty: one move from an open four
    OpenThree,
}

impl Pattern {
    /// Stones of the scanned color required in the window
    #[inline]
    pub const fn stones(self) -> usize {
        match self {
            Pattern::Immediate => 4,
            Pattern::OpenThree => 3,
        }
    }

    /// Empty cells required in the window
    #[inline]
    pub const fn empty(self) -> usize {
        match self {
            Pattern::Immediate => 1,
            Pattern::OpenThree => 2,
        }
    }
}

/// Weights used by [`super::score_move`]
pub struct MoveScore;

impl MoveScore {
    /// Per neighbouring cell holding any stone
    pub const ADJACENT_STONE: i32 = 2;

    // Threat bonuses, evaluated with our stone placed
    /// We now have a four (one move from five)
    pub const OWN_IMMEDIATE: i32 = 50;
    /// Opponent still has a four somewhere
    pub const OPPONENT_IMMEDIATE: i32 = 45;
    /// We now have an open three
    pub const OWN_OPEN_THREE: i32 = 20;
    /// Opponent still has an open three somewhere
    pub const OPPONENT_OPEN_THREE: i32 = 15;
}
