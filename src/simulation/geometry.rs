//! Geometric utility functions for distance calculations and bounds clamping.
//!
//! The world is a square of integer coordinates. Agents never wrap or bounce;
//! movement is truncated at the edges by [`clamp_to_world`].

/// Trait for agents with an integer position in the world.
///
/// Implemented by animals and the hunter so distance checks can mix the two.
pub trait Located {
    /// X coordinate of the agent.
    fn x(&self) -> i32;
    /// Y coordinate of the agent.
    fn y(&self) -> i32;
}

/// Calculates the Manhattan distance between two located agents.
///
/// # Returns
///
/// `|a.x - b.x| + |a.y - b.y|`.
pub fn manhattan_distance(a: &impl Located, b: &impl Located) -> i32 {
    (a.x() - b.x()).abs() + (a.y() - b.y()).abs()
}

/// Clamps a coordinate into the world bounds `[0, world_size - 1]`.
pub fn clamp_to_world(v: i32, world_size: i32) -> i32 {
    v.clamp(0, world_size - 1)
}

/// Integer midpoint of two coordinates, rounding halves up.
///
/// Offspring are placed at the midpoint of their parents, so `midpoint(0, 3)`
/// is `2`, matching `round((0 + 3) / 2)`.
pub fn midpoint(a: i32, b: i32) -> i32 {
    (a + b + 1) / 2
}
