/// interface of the model document the translation network is materialized into,
/// its error type and the atomic file writer
pub mod model_document;
/// in-memory document serialized to JSON with serde_json
pub mod json_document;

pub use json_document::JsonModelDocument;
pub use model_document::{Compartment, DocumentError, ModelDocument, ModelUnits, Parameter, write_file};
