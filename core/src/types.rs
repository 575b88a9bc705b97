//! Typed request bodies for a few common operations.
//!
//! # Design
//! Wrapper methods accept any body that serializes to a JSON object, so
//! these structs are a convenience, not a requirement. Optional fields use
//! `skip_serializing_if` so an unset field never reaches the allow-list
//! filter as `null`. Field names serialize to the API's camelCase names.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One change inside an action batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Action {
    /// Resource path the action applies to, e.g. `/devices/{serial}/cellularGateway/settings`.
    pub resource: String,
    /// `create`, `update`, `destroy`, ...
    pub operation: String,
    pub body: Value,
}

/// Body for `createOrganizationActionBatch`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewActionBatch {
    pub actions: Vec<Action>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synchronous: Option<bool>,
}

/// Body for `updateOrganizationActionBatch`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ActionBatchUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synchronous: Option<bool>,
}

/// Up and down limits for one uplink, in Kbps.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BandwidthLimit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_up: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_down: Option<u32>,
}

/// Body for the uplink settings updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UplinkSettingsUpdate {
    pub bandwidth_limits: UplinkBandwidthLimits,
}

/// Per-uplink limits. MG networks only use `cellular`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UplinkBandwidthLimits {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wan1: Option<BandwidthLimit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wan2: Option<BandwidthLimit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cellular: Option<BandwidthLimit>,
}

/// Body for `updateNetworkCellularGatewaySubnetPool`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SubnetPoolUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr: Option<String>,
}
