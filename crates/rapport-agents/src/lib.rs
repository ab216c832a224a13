//! # Rapport-Agents
//!
//! Outreach copywriting for relationship management.
//!
//! ## Pipeline
//!
//! ```text
//! core desire + core fear
//!     ↓
//! [score → resolve]            (rapport-core)
//!     → archetype: dreamer | lover | scholar | boss | balanced
//!     ↓
//! [describe]                   emphasis description + writing directives
//!     ↓
//! [prompt assembly] ← business profile, contact, history, goal, tone
//!     ↓
//! [CompletionBackend]          language model (or offline drafts)
//!     ↓
//! [parse]                      → draft message variants
//! ```

pub mod agent;
pub mod backend;
pub mod emphasis;
pub mod orchestrator;
pub mod outreach;
pub mod prompts;

pub use agent::*;
pub use backend::*;
pub use emphasis::*;
pub use orchestrator::*;
pub use outreach::*;
pub use prompts::*;
