//! MG cellular gateway configuration, per device and per network.

operations! {
    /// Cellular gateway (MG) endpoints.
    area CellularGateway, AsyncCellularGateway;

    /// Show the LAN settings of an MG.
    GET_DEVICE_CELLULAR_GATEWAY_SETTINGS = Get "/devices/{serial}/cellularGateway/settings"
        => get_device_cellular_gateway_settings(serial) {
            id: "getDeviceCellularGatewaySettings",
            tags: ["cellularGateway", "configure", "settings"],
        }

    /// Update the LAN settings of an MG.
    UPDATE_DEVICE_CELLULAR_GATEWAY_SETTINGS = Put "/devices/{serial}/cellularGateway/settings"
        => update_device_cellular_gateway_settings(serial) {
            id: "updateDeviceCellularGatewaySettings",
            tags: ["cellularGateway", "configure", "settings"],
            body: ["reservedIpRanges", "fixedIpAssignments"],
        }

    /// Return the port forwarding rules of an MG.
    GET_DEVICE_CELLULAR_GATEWAY_SETTINGS_PORT_FORWARDING_RULES =
        Get "/devices/{serial}/cellularGateway/settings/portForwardingRules"
        => get_device_cellular_gateway_settings_port_forwarding_rules(serial) {
            id: "getDeviceCellularGatewaySettingsPortForwardingRules",
            tags: ["cellularGateway", "configure", "settings", "portForwardingRules"],
        }

    /// Replace the port forwarding rules of an MG.
    UPDATE_DEVICE_CELLULAR_GATEWAY_SETTINGS_PORT_FORWARDING_RULES =
        Put "/devices/{serial}/cellularGateway/settings/portForwardingRules"
        => update_device_cellular_gateway_settings_port_forwarding_rules(serial) {
            id: "updateDeviceCellularGatewaySettingsPortForwardingRules",
            tags: ["cellularGateway", "configure", "settings", "portForwardingRules"],
            body: ["rules"],
        }

    /// Return the connectivity testing destinations of an MG network.
    GET_NETWORK_CELLULAR_GATEWAY_CONNECTIVITY_MONITORING_DESTINATIONS =
        Get "/networks/{networkId}/cellularGateway/connectivityMonitoringDestinations"
        => get_network_cellular_gateway_connectivity_monitoring_destinations(network_id) {
            id: "getNetworkCellularGatewayConnectivityMonitoringDestinations",
            tags: ["cellularGateway", "configure", "connectivityMonitoringDestinations"],
        }

    /// Replace the connectivity testing destinations of an MG network.
    UPDATE_NETWORK_CELLULAR_GATEWAY_CONNECTIVITY_MONITORING_DESTINATIONS =
        Put "/networks/{networkId}/cellularGateway/connectivityMonitoringDestinations"
        => update_network_cellular_gateway_connectivity_monitoring_destinations(network_id) {
            id: "updateNetworkCellularGatewayConnectivityMonitoringDestinations",
            tags: ["cellularGateway", "configure", "connectivityMonitoringDestinations"],
            body: ["destinations"],
        }

    /// Return the common DHCP settings of an MG network.
    GET_NETWORK_CELLULAR_GATEWAY_SETTINGS_DHCP = Get "/networks/{networkId}/cellularGateway/settings/dhcp"
        => get_network_cellular_gateway_settings_dhcp(network_id) {
            id: "getNetworkCellularGatewaySettingsDhcp",
            tags: ["cellularGateway", "configure", "settings", "dhcp"],
        }

    /// Update the common DHCP settings of an MG network.
    UPDATE_NETWORK_CELLULAR_GATEWAY_SETTINGS_DHCP = Put "/networks/{networkId}/cellularGateway/settings/dhcp"
        => update_network_cellular_gateway_settings_dhcp(network_id) {
            id: "updateNetworkCellularGatewaySettingsDhcp",
            tags: ["cellularGateway", "configure", "settings", "dhcp"],
            body: ["dhcpLeaseTime", "dnsNameservers", "dnsCustomNameservers"],
        }

    /// Return the uplink settings of an MG network.
    GET_NETWORK_CELLULAR_GATEWAY_SETTINGS_UPLINK = Get "/networks/{networkId}/cellularGateway/settings/uplink"
        => get_network_cellular_gateway_settings_uplink(network_id) {
            id: "getNetworkCellularGatewaySettingsUplink",
            tags: ["cellularGateway", "configure", "settings", "uplink"],
        }

    /// Update the uplink settings of an MG network.
    UPDATE_NETWORK_CELLULAR_GATEWAY_SETTINGS_UPLINK = Put "/networks/{networkId}/cellularGateway/settings/uplink"
        => update_network_cellular_gateway_settings_uplink(network_id) {
            id: "updateNetworkCellularGatewaySettingsUplink",
            tags: ["cellularGateway", "configure", "settings", "uplink"],
            body: ["bandwidthLimits"],
        }

    /// Return the subnet pool and mask of an MG network.
    GET_NETWORK_CELLULAR_GATEWAY_SUBNET_POOL = Get "/networks/{networkId}/cellularGateway/subnetPool"
        => get_network_cellular_gateway_subnet_pool(network_id) {
            id: "getNetworkCellularGatewaySubnetPool",
            tags: ["cellularGateway", "configure", "subnetPool"],
        }

    /// Update the subnet pool and mask of an MG network.
    UPDATE_NETWORK_CELLULAR_GATEWAY_SUBNET_POOL = Put "/networks/{networkId}/cellularGateway/subnetPool"
        => update_network_cellular_gateway_subnet_pool(network_id) {
            id: "updateNetworkCellularGatewaySubnetPool",
            tags: ["cellularGateway", "configure", "subnetPool"],
            body: ["mask", "cidr"],
        }
}
