//! Cover art resolution and placement

/// Validated generator and its image-loading entry points
pub mod generator;
/// Candidate-to-cell assignment
pub mod placement;
/// Archive URLs and the missing-artwork policy
pub mod resolver;

pub use generator::CoverArtGenerator;
pub use placement::{CoverCandidate, PlacedImage};
