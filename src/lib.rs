//! Financial Companion Core
//!
//! Client-side session and data-orchestration logic for a two-view
//! financial companion app:
//! - A conversation engine that exchanges turn-based messages with an
//!   LLM-backed chat endpoint and converts every failure into a visible
//!   assistant message
//! - A company data loader that fetches a structured snapshot and a logo
//!   artifact per selected ticker, with stale-write rejection and local
//!   caching of the artifact
//!
//! The presentation layer is an external collaborator: it raises
//! `submit`/`select` intents and renders the state snapshots this crate
//! produces.

pub mod cache;
pub mod config;
pub mod conversation;
pub mod error;
pub mod models;
pub mod selection;
pub mod transport;

pub use error::Result;

// Re-export common types
pub use cache::ArtifactCache;
pub use config::CompanionConfig;
pub use conversation::{ConversationEngine, SubmitOutcome};
pub use models::{CompanyDetails, Message, Sender, Ticker};
pub use selection::{CompanyDataLoader, SelectionState};
