//! Domain Layer
//!
//! This is the core of Tariff - pure pricing logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Group structures and range rows
//! - `value_objects/` - Immutable value types (DiffLevel, RangeField, FieldPath)
//! - `services/` - Domain services (GroupDiffer, RangeTable)
//! - `ports/` - Interface definitions for infrastructure (FormStore)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services take data in and hand new data back
//! 3. **Ports & Adapters** - Form state is reached through a trait-defined port

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
