//! Roles, work items and the selection of the items handed to the execution engine
//!
//! Each role owns a fixed, ordered list of seven work items rendered from the
//! profile. Selection only truncates those lists by position.

mod role;
mod selector;
pub mod templates;
mod work_item;

pub use role::*;
pub use selector::*;
pub use work_item::*;
