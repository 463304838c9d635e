// Exchange service module
// JSON file export and import of the full event store

mod export;
mod import;

pub use export::{default_filename, to_json, write_to};
pub use import::{from_json, read_from};
