pub mod config;
pub mod navigator;
pub mod state;
pub mod store;

pub use config::NavigatorConfig;
pub use navigator::{Navigator, ReviewItem, SubmitOutcome};
pub use state::{SessionState, ViewState};
pub use store::{JsonFileStore, SessionStore};
