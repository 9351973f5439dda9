use serde::{Deserialize, Serialize};
use std::fmt;

/// Adjacency scan direction relative to the anchor vertex
///
/// Determines which endpoint of a stored edge record is treated as "other":
/// - `Out`: edges whose source is the anchor; other = destination
/// - `In`: edges whose destination is the anchor; other = source
/// - `Both`: edges touching the anchor at either end
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Out,
    In,
    Both,
}

impl Direction {
    /// Name of the direction as the store spells it
    pub fn name(&self) -> &'static str {
        match self {
            Direction::Out => "OUT",
            Direction::In => "IN",
            Direction::Both => "BOTH",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
