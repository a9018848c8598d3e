/// Tile-to-place assignments and rule scoring
pub mod arrangement;
/// Compact bitset of placed tiles
pub mod bitset;
/// Dense enumeration of permutation and rotation candidates
pub mod enumeration;
/// Search engine, scoring modes and search events
pub mod executor;
/// Cooperative cancellation signal
pub mod interrupt;
/// Adjacency rules between places
pub mod rules;
