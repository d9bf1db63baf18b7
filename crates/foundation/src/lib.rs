pub mod geo;
pub mod overlay;
pub mod viewport;

// Dependency-free geometry primitives shared by every widget.
pub use geo::*;
pub use overlay::*;
pub use viewport::*;
