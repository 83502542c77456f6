//! Wire-facing request and response shapes, and the mapping between them
//! and the database entities.
//!
//! Each resource has two independent directions:
//!
//! - "to response": entity → response DTO (`From` impls), exposing the id
//!   and server-generated fields.
//! - "to entity": request DTO → write input (`into_*` methods), excluding
//!   the id and server-generated fields.

pub mod item;
pub mod item_detail;
