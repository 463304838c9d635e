// Module exports for models

pub mod category;
pub mod date_key;
pub mod grid;
pub mod settings;
pub mod summary;

pub use category::ShiftCategory;
pub use date_key::DateKey;
pub use grid::GridCell;
pub use settings::{AppSettings, FirstDayOfWeek};
pub use summary::{MonthSummary, WorkingDays};
