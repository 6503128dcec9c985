//! Providers backed by the local filesystem.
//!
//! ## Available Providers
//!
//! - [`FilesystemAssetResolver`]: finds page artwork under an asset root
//! - [`JsonLinkStore`]: persists SVG anchors and template hyperlinks in a JSON file
//!
//! ## Re-exports
//!
//! For convenience, we also re-export the in-memory provider from lootpixel-traits:
//! - [`InMemoryLinkGeometry`]: Pre-populated in-memory storage

mod filesystem;
mod store;

pub use filesystem::{FilesystemAssetResolver, asset_relative_path};
pub use store::{JsonLinkStore, LinkStoreData};

pub use lootpixel_traits::InMemoryLinkGeometry;
