//! Planner build pipeline.
//!
//! - [`PlannerBuilder`]: fluent builder wiring the asset resolver, link
//!   geometry and anchor sizing strategy
//! - [`Planner`]: runs builds; each build composites pages, assembles them,
//!   then resolves hyperlinks in one pass over the merged document
//! - [`BuildReport`]: pages emitted, links injected and links skipped
//!
//! # Example
//!
//! ```ignore
//! use lootpixel::{PlannerBuilder, PlannerConfig, Orientation};
//!
//! let planner = PlannerBuilder::new().with_asset_root("static/assets").build()?;
//! let config = PlannerConfig::new(1, Orientation::Portrait, "minimal", "boxed");
//! let report = planner.build(&config, "out/planner.pdf".as_ref())?;
//! println!("{} pages", report.page_count());
//! ```

mod builder;
mod concurrency;
pub mod config;
pub mod context;
pub mod destinations;
mod orchestrator;
pub mod plan;
pub mod report;
pub mod resolver;

pub use builder::PlannerBuilder;
pub use concurrency::BuildRequest;
pub use orchestrator::Planner;
pub use report::{BuildReport, InjectedLink, LinkOrigin, SkipReason, SkippedLink};
