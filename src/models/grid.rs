// Calendar grid cell model

use crate::models::DateKey;

/// One cell of the rendered month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    /// Day-of-month number shown in the cell (of the cell's own month).
    pub day: u32,
    pub date_key: DateKey,
    /// True for leading/trailing cells drawn from the adjacent months.
    pub outside_month: bool,
}

impl GridCell {
    pub fn new(day: u32, date_key: DateKey, outside_month: bool) -> Self {
        Self {
            day,
            date_key,
            outside_month,
        }
    }
}
