//! MX uplink settings.

operations! {
    /// Uplink settings of an MX network.
    area UplinkSettings, AsyncUplinkSettings;

    /// Return the uplink settings for an MX network.
    GET_NETWORK_UPLINK_SETTINGS = Get "/networks/{networkId}/uplinkSettings"
        => get_network_uplink_settings(network_id) {
            id: "getNetworkUplinkSettings",
            tags: ["Uplink settings"],
        }

    /// Update the uplink settings for an MX network. `bandwidthLimits` maps
    /// each uplink to its bandwidth settings.
    UPDATE_NETWORK_UPLINK_SETTINGS = Put "/networks/{networkId}/uplinkSettings"
        => update_network_uplink_settings(network_id) {
            id: "updateNetworkUplinkSettings",
            tags: ["Uplink settings"],
            body: ["bandwidthLimits"],
        }
}
