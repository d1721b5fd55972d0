//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `form/` - Form state implementations (in-memory JSON document)
//! - `repositories/` - Form documents persisted as JSON files
//! - `group_source` - Loading group structures from files or arguments

pub mod form;
pub mod group_source;
pub mod repositories;

// Re-export for convenience
pub use form::MemoryFormState;
pub use group_source::load_group_input;
pub use repositories::JsonFormRepository;
