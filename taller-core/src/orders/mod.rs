//! Order domain operations
//!
//! Creation, editing, status lifecycle, and item handling. All functions
//! are pure:
//! they take the current entity plus an explicit `now` and return new
//! values for the caller to persist.

mod create;
mod items;
mod lifecycle;
mod update;

pub use create::create_order;
pub use items::{insert_item, push_item, remove_item, renumber, validate_item};
pub use lifecycle::{
    is_due_today, is_forward_transition, is_overdue, set_status, validate_transition,
};
pub use update::update_order;
