//! The registry of every operation the client knows.

use crate::descriptor::OperationDescriptor;

use super::{action_batches, cellular_gateway, uplink_settings};

const AREAS: &[&[&OperationDescriptor]] = &[
    action_batches::OPERATIONS,
    cellular_gateway::OPERATIONS,
    uplink_settings::OPERATIONS,
];

/// Every registered descriptor.
pub fn operations() -> impl Iterator<Item = &'static OperationDescriptor> {
    AREAS.iter().flat_map(|area| area.iter().copied())
}

/// Look up a descriptor by operation id.
pub fn find(operation_id: &str) -> Option<&'static OperationDescriptor> {
    operations().find(|d| d.id() == operation_id)
}

/// Descriptors carrying `tag`.
pub fn tagged(tag: &str) -> impl Iterator<Item = &'static OperationDescriptor> + '_ {
    operations().filter(move |d| d.tags().iter().any(|t| *t == tag))
}
