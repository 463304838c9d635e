// Shift Calendar Library
// Exports all modules for testing and reuse

pub mod models;
pub mod services;
pub mod utils;
