pub mod app;
pub mod config;
pub mod error;
pub mod features;
pub mod gateway;
pub mod gemini;
pub mod logger;
pub mod models;

#[cfg(test)]
pub(crate) mod testing;

pub use app::{AppState, Dashboards, Session, User, UserRole, View};
pub use config::{Config, GeminiConfig};
pub use error::{FoomaxError, Result};
pub use features::Feature;
pub use gateway::ContentGateway;
pub use gemini::{GeminiTextClient, GenerationBackend};
pub use models::{GenerationRequest, GenerationResult, OutputSchema, Recipe};
