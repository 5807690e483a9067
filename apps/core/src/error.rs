use thiserror::Error;

use crate::dashboard::{LoadEvent, LoadState};
use crate::model::Resource;

/// Failure of a single candidate location, or of a whole candidate list.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error for {location}: {message}")]
    Transport { location: String, message: String },

    #[error("HTTP {status} for {location}")]
    Status { location: String, status: u16 },

    #[error("invalid JSON from {location}: {message}")]
    Parse { location: String, message: String },

    #[error("all {attempts} candidate locations failed, last error: {last}")]
    Exhausted {
        attempts: usize,
        last: Box<FetchError>,
    },

    #[error("Failed to load JSON")]
    NoCandidates,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("{resource} payload is null")]
    NullPayload { resource: Resource },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to load {resource}: {source}")]
    Fetch {
        resource: Resource,
        #[source]
        source: FetchError,
    },

    #[error(transparent)]
    Render(#[from] RenderError),
}

#[derive(Debug, Error)]
#[error("invalid load transition from {from} with event {event}")]
pub struct TransitionError {
    pub from: LoadState,
    pub event: LoadEvent,
}
