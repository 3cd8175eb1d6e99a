//! Fixed work item templates, seven per role, in dispatch order

mod finance;
mod marketing;
mod positioning;

use super::{Role, WorkItem};
use crate::profile::Profile;

/// Number of work items every role produces
pub const ITEMS_PER_ROLE: usize = 7;

/// Builds the full ordered list of work items of `role` for `profile`
pub fn build_for(role: Role, profile: &Profile) -> Vec<WorkItem> {
    let items = match role {
        Role::Positioning => positioning::build(profile),
        Role::Finance => finance::build(profile),
        Role::Marketing => marketing::build(profile),
    };
    debug_assert_eq!(items.len(), ITEMS_PER_ROLE);
    items
}
