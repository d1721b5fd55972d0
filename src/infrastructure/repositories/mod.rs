//! Repository Implementations

mod form_document;

pub use form_document::JsonFormRepository;
