// Supporting modules
pub mod config;
pub mod error;

// Domain layer (core logic)
pub mod contact;
pub mod sequencer;
pub mod template;

// Boundaries toward the host platform
pub mod composer;
pub mod directory;

// Orchestration
pub mod dispatch;
