pub mod app_state;
pub mod content;
pub mod kana;
pub mod memory_match;
pub mod quiz;
pub mod review_queue;
pub mod review_state;
pub mod srs;

pub use app_state::{AppState, FontSize, LangUi, Settings, SrsBook, Stats};
pub use content::{EmailTemplate, GrammarPoint, Phrase, Roleplay};
pub use kana::KanaSet;
pub use memory_match::{FlipOutcome, MemoryMatch};
pub use quiz::{Quiz, QuizDirection};
pub use review_queue::{QueueMode, ReviewQueue};
pub use review_state::ReviewState;
