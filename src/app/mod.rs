pub mod config;
pub mod state;

pub use state::{AppState, SwipeOutcome};
