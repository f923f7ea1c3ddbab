//! Feature slices for the dataset detail surface.
pub mod compliance;
pub mod links;
