//! Verify request preparation and response interpretation against the JSON
//! test vectors stored in `test-vectors/`.
//!
//! Each dispatch case names an operation id, the call's arguments, and the
//! request it must produce (or the error it must raise before any I/O).
//! Each response case is a raw HTTP response and its interpretation.
//! Bodies are compared as parsed JSON, so key order never matters.

use std::time::Duration;

use meraki_core::api::catalog;
use meraki_core::http::interpret;
use meraki_core::{
    body_args, ApiError, ClientConfig, Dispatcher, HttpMethod, HttpRequest, HttpResponse,
    TransportError,
};
use serde_json::Value;

const BASE_URL: &str = "http://localhost:3000/api/v1";

fn config() -> ClientConfig {
    ClientConfig::new("test-key").with_base_url(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn header<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
    req.headers
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
}

/// Run one dispatch case up to the point where a transport would take over.
fn build(case: &Value) -> Result<HttpRequest, ApiError> {
    let operation = case["operation"].as_str().unwrap();
    let descriptor = catalog::find(operation)
        .ok_or_else(|| ApiError::UnknownOperation(operation.to_string()))?;
    let path_args: Vec<&str> = case["path_args"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a.as_str().unwrap())
        .collect();
    let call = Dispatcher::<()>::prepare(descriptor, &path_args, body_args(&case["body"])?)?;
    Ok(HttpRequest::new(&config(), call.method(), call.path(), call.payload()))
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

#[test]
fn dispatch_test_vectors() {
    let raw = include_str!("../../test-vectors/dispatch.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        if let Some(expected) = case["expected_error"].as_str() {
            let err = build(case).expect_err(name);
            match expected {
                "malformed" => {
                    assert!(matches!(err, ApiError::MalformedRequest { .. }), "{name}: {err:?}")
                }
                "unknown_operation" => {
                    assert!(matches!(err, ApiError::UnknownOperation(_)), "{name}: {err:?}")
                }
                other => panic!("{name}: unknown expected_error {other}"),
            }
            continue;
        }

        let expected = &case["expected_request"];
        let req = build(case).unwrap_or_else(|e| panic!("{name}: {e}"));

        assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(
            req.url,
            format!("{BASE_URL}{}", expected["path"].as_str().unwrap()),
            "{name}: url"
        );
        assert_eq!(header(&req, "authorization"), Some("Bearer test-key"), "{name}: auth");
        assert_eq!(header(&req, "accept"), Some("application/json"), "{name}: accept");

        match &expected["body"] {
            Value::Null => {
                assert!(req.body.is_none(), "{name}: unexpected body");
                assert!(header(&req, "content-type").is_none(), "{name}: content-type");
            }
            body => {
                let sent: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
                assert_eq!(&sent, body, "{name}: body");
                assert_eq!(header(&req, "content-type"), Some("application/json"), "{name}: content-type");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[test]
fn response_test_vectors() {
    let raw = include_str!("../../test-vectors/responses.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let r = &case["response"];
        let response = HttpResponse {
            status: r["status"].as_u64().unwrap() as u16,
            headers: r["headers"]
                .as_array()
                .unwrap()
                .iter()
                .map(|h| {
                    let arr = h.as_array().unwrap();
                    (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
                })
                .collect(),
            body: r["body"].as_str().unwrap().to_string(),
        };
        let expected = &case["expected"];
        let result = interpret(response);

        if let Some(ok) = expected.get("ok") {
            assert_eq!(&result.unwrap_or_else(|e| panic!("{name}: {e}")), ok, "{name}");
            continue;
        }

        let err = result.expect_err(name);
        match (expected["error"].as_str().unwrap(), err) {
            ("deserialization", TransportError::Deserialization(_)) => {}
            ("not_found", TransportError::NotFound) => {}
            ("rate_limited", TransportError::RateLimited { retry_after }) => {
                assert_eq!(
                    retry_after,
                    expected["retry_after"].as_u64().map(Duration::from_secs),
                    "{name}: retry_after"
                );
            }
            ("client", TransportError::Client { status, errors }) => {
                assert_eq!(u64::from(status), expected["status"].as_u64().unwrap(), "{name}: status");
                let want: Vec<String> = serde_json::from_value(expected["errors"].clone()).unwrap();
                assert_eq!(errors, want, "{name}: errors");
            }
            ("server", TransportError::Server { status, .. }) => {
                assert_eq!(u64::from(status), expected["status"].as_u64().unwrap(), "{name}: status");
            }
            ("unexpected_status", TransportError::UnexpectedStatus { status, .. }) => {
                assert_eq!(u64::from(status), expected["status"].as_u64().unwrap(), "{name}: status");
            }
            (want, got) => panic!("{name}: expected {want}, got {got:?}"),
        }
    }
}
