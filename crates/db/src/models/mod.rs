//! Row types for the `items` and `item_details` tables, plus the inputs
//! accepted by repository writes.

pub mod item;
pub mod item_detail;
