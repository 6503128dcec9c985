pub mod asset;
pub mod geometry;
pub mod sizing;

pub use asset::AssetResolver;
pub use geometry::{InMemoryLinkGeometry, LinkGeometryProvider, ProviderError};
pub use sizing::{AnchorSizer, NameLengthSizer, StoredExtentSizer};
