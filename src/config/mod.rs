pub mod settings;

pub use settings::{AppConfig, ScoringSettings, ServerSettings, StoreSettings};
