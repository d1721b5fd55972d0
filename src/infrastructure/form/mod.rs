//! Form State Implementations

mod memory;

pub use memory::MemoryFormState;
