//! Core domain types shared across the Lingo-Map workspace.
//!
//! Nothing in this crate performs I/O. The hover controller decides *when* a
//! lookup is needed and how its outcome lands in state; the renderer turns
//! that state into a hover card. Transport lives in `lingomap-client`.

mod error;
pub mod hover;
pub mod language;
pub mod layout;
pub mod region;
pub mod render;

pub use error::{CoreError, CoreResult};
pub use hover::{Applied, HoverController, LookupStatus, LookupTicket, DEFAULT_NUM_LANGUAGES};
pub use language::{LanguageEntry, LanguageRequest, LanguageResponse};
pub use layout::{ColorScale, MapLayout, Rgb};
pub use region::{GeoBounds, GeoPoint, Region, RegionData, RegionValue};
pub use render::{render_hover, HoverBody, HoverInfo};
