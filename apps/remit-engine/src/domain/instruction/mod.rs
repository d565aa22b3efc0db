//! Bank instruction serialization.

mod serializer;

pub use serializer::{FIELD_SEPARATOR, instruction_file_name, serialize_batch, serialize_order};
