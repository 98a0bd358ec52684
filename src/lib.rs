pub mod clock;
pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod models;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::AppConfig;
pub use database::Store;
pub use error::{Error, Result};
pub use models::{AppState, ReviewQueue, ReviewState};
