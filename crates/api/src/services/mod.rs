//! Resource services.
//!
//! Each service is constructed with the store it persists through and
//! orchestrates fetch, map, persist and map-back for one resource. Every
//! fault propagates to the caller; nothing is retried or recovered here.

pub mod item;
pub mod item_detail;

pub use item::ItemService;
pub use item_detail::ItemDetailService;
