pub mod config;
pub mod geometry;
pub mod links;
pub mod page;

pub use config::{NO_DAILY_LAYOUT, Orientation, PlannerConfig};
pub use geometry::Rect;
pub use links::{AnchorElement, AnchorKind, LinkDestination, PdfHyperlink, SvgAnchor};
pub use page::{PageCategory, PageSlot, slot_name};
