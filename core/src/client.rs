//! Client facades over the dispatcher.
//!
//! # Design
//! `DashboardClient` and `AsyncDashboardClient` hold a single `Dispatcher`
//! and hand out per-area wrappers borrowing it. Both are generic over the
//! transport; the constructors taking a `ClientConfig` pick the bundled
//! ureq and reqwest transports.

use serde::Serialize;
use serde_json::Value;

use crate::api::{
    ActionBatches, AsyncActionBatches, AsyncCellularGateway, AsyncUplinkSettings, CellularGateway,
    UplinkSettings,
};
use crate::dispatcher::Dispatcher;
use crate::error::ApiError;
use crate::payload::body_args;
use crate::transport::{AsyncTransport, Transport};

/// Blocking Dashboard API client.
#[derive(Debug, Clone)]
pub struct DashboardClient<T> {
    dispatcher: Dispatcher<T>,
}

#[cfg(feature = "blocking")]
impl DashboardClient<crate::transport::BlockingTransport> {
    pub fn new(config: crate::config::ClientConfig) -> Self {
        Self::with_transport(crate::transport::BlockingTransport::new(config))
    }

    /// Build a client from `MERAKI_DASHBOARD_API_KEY` and `MERAKI_BASE_URL`.
    pub fn from_env() -> Result<Self, crate::error::ConfigError> {
        Ok(Self::new(crate::config::ClientConfig::from_env()?))
    }
}

impl<T> DashboardClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            dispatcher: Dispatcher::new(transport),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher<T> {
        &self.dispatcher
    }

    pub fn action_batches(&self) -> ActionBatches<'_, T> {
        ActionBatches::new(&self.dispatcher)
    }

    pub fn cellular_gateway(&self) -> CellularGateway<'_, T> {
        CellularGateway::new(&self.dispatcher)
    }

    pub fn uplink_settings(&self) -> UplinkSettings<'_, T> {
        UplinkSettings::new(&self.dispatcher)
    }
}

impl<T: Transport> DashboardClient<T> {
    /// Invoke any registered operation by id.
    pub fn call<B: Serialize + ?Sized>(
        &self,
        operation_id: &str,
        path_args: &[&str],
        body: &B,
    ) -> Result<Value, ApiError> {
        self.dispatcher
            .call(operation_id, path_args, body_args(body)?)
    }
}

/// Async Dashboard API client.
#[derive(Debug, Clone)]
pub struct AsyncDashboardClient<T> {
    dispatcher: Dispatcher<T>,
}

#[cfg(feature = "async")]
impl AsyncDashboardClient<crate::transport::ReqwestTransport> {
    pub fn new(config: crate::config::ClientConfig) -> Result<Self, crate::error::TransportError> {
        Ok(Self::with_transport(
            crate::transport::ReqwestTransport::new(config)?,
        ))
    }

    /// Build a client from `MERAKI_DASHBOARD_API_KEY` and `MERAKI_BASE_URL`.
    pub fn from_env() -> Result<Self, crate::error::ConfigError> {
        Ok(Self::new(crate::config::ClientConfig::from_env()?)?)
    }
}

impl<T> AsyncDashboardClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            dispatcher: Dispatcher::new(transport),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher<T> {
        &self.dispatcher
    }

    pub fn action_batches(&self) -> AsyncActionBatches<'_, T> {
        AsyncActionBatches::new(&self.dispatcher)
    }

    pub fn cellular_gateway(&self) -> AsyncCellularGateway<'_, T> {
        AsyncCellularGateway::new(&self.dispatcher)
    }

    pub fn uplink_settings(&self) -> AsyncUplinkSettings<'_, T> {
        AsyncUplinkSettings::new(&self.dispatcher)
    }
}

impl<T: AsyncTransport> AsyncDashboardClient<T> {
    /// Invoke any registered operation by id.
    pub async fn call<B: Serialize + ?Sized + Sync>(
        &self,
        operation_id: &str,
        path_args: &[&str],
        body: &B,
    ) -> Result<Value, ApiError> {
        let body_args = body_args(body)?;
        self.dispatcher
            .call_async(operation_id, path_args, body_args)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::descriptor::OperationDescriptor;
    use crate::error::TransportError;
    use crate::http::HttpMethod;
    use crate::payload::Payload;
    use crate::types::{Action, NewActionBatch};

    /// Echoes the method, operation id, path and payload of each request.
    #[derive(Default)]
    struct Echo {
        calls: Mutex<usize>,
    }

    impl Echo {
        fn echo(
            &self,
            method: HttpMethod,
            d: &OperationDescriptor,
            path: &str,
            payload: Option<&Payload>,
        ) -> Value {
            *self.calls.lock().unwrap() += 1;
            json!({
                "method": method.as_str(),
                "operation": d.id(),
                "path": path,
                "payload": payload.map(|p| Value::Object(p.as_map().clone())),
            })
        }
    }

    impl Transport for Echo {
        fn get(&self, d: &OperationDescriptor, path: &str) -> Result<Value, TransportError> {
            Ok(self.echo(HttpMethod::Get, d, path, None))
        }

        fn post(&self, d: &OperationDescriptor, path: &str, p: &Payload) -> Result<Value, TransportError> {
            Ok(self.echo(HttpMethod::Post, d, path, Some(p)))
        }

        fn put(&self, d: &OperationDescriptor, path: &str, p: &Payload) -> Result<Value, TransportError> {
            Ok(self.echo(HttpMethod::Put, d, path, Some(p)))
        }

        fn delete(&self, d: &OperationDescriptor, path: &str) -> Result<Value, TransportError> {
            Ok(self.echo(HttpMethod::Delete, d, path, None))
        }
    }

    #[async_trait]
    impl AsyncTransport for Echo {
        async fn get(&self, d: &OperationDescriptor, path: &str) -> Result<Value, TransportError> {
            Ok(self.echo(HttpMethod::Get, d, path, None))
        }

        async fn post(&self, d: &OperationDescriptor, path: &str, p: &Payload) -> Result<Value, TransportError> {
            Ok(self.echo(HttpMethod::Post, d, path, Some(p)))
        }

        async fn put(&self, d: &OperationDescriptor, path: &str, p: &Payload) -> Result<Value, TransportError> {
            Ok(self.echo(HttpMethod::Put, d, path, Some(p)))
        }

        async fn delete(&self, d: &OperationDescriptor, path: &str) -> Result<Value, TransportError> {
            Ok(self.echo(HttpMethod::Delete, d, path, None))
        }
    }

    #[test]
    fn typed_wrappers_route_to_their_descriptors() {
        let client = DashboardClient::with_transport(Echo::default());

        let got = client.uplink_settings().get_network_uplink_settings("N_1").unwrap();
        assert_eq!(got["operation"], "getNetworkUplinkSettings");
        assert_eq!(got["path"], "/networks/N_1/uplinkSettings");
        assert_eq!(got["payload"], Value::Null);

        let got = client
            .cellular_gateway()
            .update_network_cellular_gateway_subnet_pool(
                "N_1",
                &json!({"mask": 24, "cidr": "192.168.0.0/16", "extra": true}),
            )
            .unwrap();
        assert_eq!(got["method"], "PUT");
        assert_eq!(got["payload"], json!({"mask": 24, "cidr": "192.168.0.0/16"}));

        let got = client
            .action_batches()
            .delete_organization_action_batch("O_1", "B_7")
            .unwrap();
        assert_eq!(got["method"], "DELETE");
        assert_eq!(got["path"], "/organizations/O_1/actionBatches/B_7");
    }

    #[test]
    fn typed_body_struct() {
        let client = DashboardClient::with_transport(Echo::default());
        let batch = NewActionBatch {
            actions: vec![Action {
                resource: "/devices/Q2XX-AAAA-0001/cellularGateway/settings".to_string(),
                operation: "update".to_string(),
                body: json!({"reservedIpRanges": []}),
            }],
            confirmed: Some(true),
            synchronous: None,
        };
        let got = client
            .action_batches()
            .create_organization_action_batch("O_1", &batch)
            .unwrap();
        assert_eq!(got["method"], "POST");
        assert_eq!(got["payload"]["confirmed"], true);
        assert!(got["payload"].get("synchronous").is_none());
        assert_eq!(got["payload"]["actions"][0]["operation"], "update");
    }

    #[test]
    fn generic_call_matches_typed_wrapper() {
        let client = DashboardClient::with_transport(Echo::default());
        let body = json!({"rules": [{"lanIp": "192.168.128.2", "publicPort": "8080"}]});
        let typed = client
            .cellular_gateway()
            .update_device_cellular_gateway_settings_port_forwarding_rules("Q2XX-AAAA-0001", &body)
            .unwrap();
        let generic = client
            .call(
                "updateDeviceCellularGatewaySettingsPortForwardingRules",
                &["Q2XX-AAAA-0001"],
                &body,
            )
            .unwrap();
        assert_eq!(typed, generic);
        assert_eq!(*client.dispatcher().transport().calls.lock().unwrap(), 2);
    }

    #[test]
    fn non_object_body_fails_before_dispatch() {
        let client = DashboardClient::with_transport(Echo::default());
        let err = client
            .uplink_settings()
            .update_network_uplink_settings("N_1", &json!("wan1"))
            .unwrap_err();
        assert!(matches!(err, ApiError::BodyNotObject { .. }));
        assert_eq!(*client.dispatcher().transport().calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn async_wrappers_route_to_their_descriptors() {
        let client = AsyncDashboardClient::with_transport(Echo::default());

        let got = client
            .action_batches()
            .get_organization_action_batch("O_1", "B_2")
            .await
            .unwrap();
        assert_eq!(got["operation"], "getOrganizationActionBatch");
        assert_eq!(got["path"], "/organizations/O_1/actionBatches/B_2");

        let got = client
            .cellular_gateway()
            .update_network_cellular_gateway_settings_dhcp(
                "N_2",
                &json!({"dhcpLeaseTime": "1 hour", "dnsNameservers": null}),
            )
            .await
            .unwrap();
        assert_eq!(got["payload"], json!({"dhcpLeaseTime": "1 hour"}));

        let got = client
            .call("getNetworkCellularGatewaySubnetPool", &["N_2"], &())
            .await
            .unwrap();
        assert_eq!(got["path"], "/networks/N_2/cellularGateway/subnetPool");
    }

    #[tokio::test]
    async fn async_malformed_request() {
        let client = AsyncDashboardClient::with_transport(Echo::default());
        let err = client
            .call("getOrganizationActionBatch", &["O_1"], &())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::MalformedRequest { .. }));
        assert_eq!(*client.dispatcher().transport().calls.lock().unwrap(), 0);
    }
}
