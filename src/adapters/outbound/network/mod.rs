/// Network adapters for external API calls
mod dependency_track_client;

pub use dependency_track_client::{DependencyTrackClient, API_KEY_VARIABLE};
