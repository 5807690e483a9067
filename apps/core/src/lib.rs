//! Loading and rendering pipeline for the issue digest.
//!
//! Two JSON documents produced by the extractor (company cards and macro
//! themes) are fetched through [`fetch::fetch_first_ok`], coerced into view
//! models by [`normalize`], and projected into markup by [`markup`]. The
//! transport is supplied by the caller, so the same pipeline drives the
//! browser build and the terminal viewer.

pub mod dashboard;
pub mod disclosure;
pub mod error;
pub mod fetch;
pub mod markup;
pub mod model;
pub mod normalize;

pub use dashboard::{load_dashboard, Dashboard, LoadEvent, LoadState, Sources};
pub use disclosure::{DisclosureKey, DisclosureState};
pub use error::{FetchError, LoadError, RenderError, TransitionError};
pub use fetch::fetch_first_ok;
pub use markup::RenderedView;
pub use model::Resource;
pub use normalize::{CompanyView, EvidenceView, Recommendation, ThemeView};
