// Service module exports

pub mod database;
pub mod exchange;
pub mod grid;
pub mod holidays;
pub mod settings;
pub mod store;
pub mod summary;
pub mod sync;
