//! Dispatcher behavior against a scripted transport: retry accounting,
//! envelope translation, and the submit/echo round trip.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::Arc;
use url::Url;

use vesta_client::client::VestaClient;
use vesta_client::codes;
use vesta_client::dispatch::Dispatcher;
use vesta_client::error::{ApiError, ErrorKind};
use vesta_client::requests::Request;
use vesta_client::transport::{HttpRequest, HttpResponse, HttpTransport, TransportError};
use vesta_core::builder::{OrderBuilder, OrderItemBuilder};
use vesta_core::menu::{MenuItem, Variation};
use vesta_core::money::Money;
use vesta_core::order::{Order, OrderStatus};

// =============================================================================
// Scripted Transport
// =============================================================================

/// Pops one scripted result per call and records every outgoing request.
struct ScriptedTransport {
    script: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    seen: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    fn new(script: Vec<Result<HttpResponse, TransportError>>) -> Arc<Self> {
        Arc::new(ScriptedTransport {
            script: Mutex::new(script.into()),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn attempts(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    fn last_body(&self) -> Vec<u8> {
        self.seen.lock().unwrap().last().unwrap().body.clone()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.seen.lock().unwrap().push(request);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .expect("transport called more times than scripted")
    }
}

fn ok_response(data: serde_json::Value) -> Result<HttpResponse, TransportError> {
    Ok(HttpResponse {
        status: 200,
        body: serde_json::to_vec(&serde_json::json!({"ok": true, "data": data})).unwrap(),
    })
}

fn error_response(code: &str, message: &str) -> Result<HttpResponse, TransportError> {
    Ok(HttpResponse {
        status: 400,
        body: serde_json::to_vec(
            &serde_json::json!({"ok": false, "error": {"code": code, "message": message}}),
        )
        .unwrap(),
    })
}

fn reset() -> Result<HttpResponse, TransportError> {
    Err(TransportError::Connection("connection reset".to_string()))
}

fn dispatcher(transport: Arc<ScriptedTransport>, retries: u32) -> Dispatcher {
    Dispatcher::new(
        transport,
        Url::parse("https://api.example.test/v2/").unwrap(),
        retries,
    )
}

fn get_order_request() -> Request {
    Request::GetOrder {
        access_token: None,
        owner_token: Some("tok".to_string()),
        order_id: "o-1".to_string(),
        view_mode: vesta_client::requests::Actor::Customer,
    }
}

// =============================================================================
// Retry Accounting
// =============================================================================

#[tokio::test]
async fn transport_failure_on_every_attempt_exhausts_retries() {
    let transport = ScriptedTransport::new(vec![reset(), reset(), reset()]);
    let dispatcher = dispatcher(transport.clone(), 2);

    let err = dispatcher
        .dispatch::<Order>(&get_order_request())
        .await
        .unwrap_err();

    // retries = 2 -> exactly 3 attempts, then Communication.
    assert_eq!(transport.attempts(), 3);
    match err {
        ApiError::Communication { attempts, .. } => assert_eq!(attempts, 3),
        other => panic!("expected Communication, got {other:?}"),
    }
}

#[tokio::test]
async fn success_after_transient_failures_returns_normally() {
    let transport = ScriptedTransport::new(vec![
        reset(),
        reset(),
        ok_response(serde_json::json!({"restaurantId": "r-1", "price": 0})),
    ]);
    let dispatcher = dispatcher(transport.clone(), 3);

    let order: Order = dispatcher.dispatch(&get_order_request()).await.unwrap();

    assert_eq!(transport.attempts(), 3);
    assert_eq!(order.restaurant_id, "r-1");
}

#[tokio::test]
async fn zero_retries_means_single_attempt() {
    let transport = ScriptedTransport::new(vec![reset()]);
    let dispatcher = dispatcher(transport.clone(), 0);

    let err = dispatcher
        .dispatch::<Order>(&get_order_request())
        .await
        .unwrap_err();

    assert_eq!(transport.attempts(), 1);
    assert!(matches!(err, ApiError::Communication { attempts: 1, .. }));
}

// =============================================================================
// Envelope Translation
// =============================================================================

#[tokio::test]
async fn error_envelope_is_authoritative_and_never_retried() {
    let transport =
        ScriptedTransport::new(vec![error_response(codes::INVALID_DATA, "bad order")]);
    // Plenty of retries available; none may be used.
    let dispatcher = dispatcher(transport.clone(), 5);

    let err = dispatcher
        .dispatch::<Order>(&get_order_request())
        .await
        .unwrap_err();

    assert_eq!(transport.attempts(), 1);
    match err {
        ApiError::Service { kind, code, message } => {
            assert_eq!(kind, ErrorKind::InvalidData);
            assert_eq!(code, codes::INVALID_DATA);
            assert_eq!(message, "bad order");
        }
        other => panic!("expected Service, got {other:?}"),
    }
}

#[tokio::test]
async fn unrecognized_code_surfaces_with_original_fields() {
    let code = "https://www.vestaorders.com/errors/something_new";
    let transport = ScriptedTransport::new(vec![error_response(code, "try the new client")]);
    let dispatcher = dispatcher(transport, 0);

    let err = dispatcher
        .dispatch::<Order>(&get_order_request())
        .await
        .unwrap_err();

    match err {
        ApiError::Service { kind, code: got_code, message } => {
            assert_eq!(kind, ErrorKind::Other);
            assert_eq!(got_code, code);
            assert_eq!(message, "try the new client");
        }
        other => panic!("expected Service, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_protocol_error() {
    let transport = ScriptedTransport::new(vec![Ok(HttpResponse {
        status: 502,
        body: b"<html>Bad Gateway</html>".to_vec(),
    })]);
    let dispatcher = dispatcher(transport.clone(), 3);

    let err = dispatcher
        .dispatch::<Order>(&get_order_request())
        .await
        .unwrap_err();

    // A received body, even garbage, is not a transport failure: no retry.
    assert_eq!(transport.attempts(), 1);
    assert!(matches!(err, ApiError::Protocol(_)));
}

// =============================================================================
// Submit Round Trip
// =============================================================================

fn sample_order() -> Order {
    let small = MenuItem {
        id: "small".to_string(),
        price: Money::from_minor(250),
        ..Default::default()
    };
    let size = Variation {
        id: "size".to_string(),
        item_ids: vec!["small".to_string()],
        ..Default::default()
    };
    let coke = MenuItem {
        id: "coke".to_string(),
        price: Money::from_minor(300),
        variations: vec![size.clone()],
        ..Default::default()
    };

    OrderBuilder::new()
        .developer("org.example")
        .restaurant("r-1")
        .locale("en_US")
        .currency("USD")
        .item(
            OrderItemBuilder::new(&coke)
                .count(2)
                .unwrap()
                .choice(0, OrderItemBuilder::as_choice(&small, &size).build())
                .unwrap()
                .build(),
        )
        .build()
}

#[tokio::test]
async fn submitted_order_round_trips_with_server_fields() {
    let order = sample_order();

    // The server echoes the order back, adding its own fields.
    let mut echoed = order.clone();
    echoed.id = Some("order-123".to_string());
    echoed.status = Some(OrderStatus::New);
    echoed.owner_token = Some("owner-tok".to_string());

    let transport = ScriptedTransport::new(vec![ok_response(
        serde_json::json!({"order": serde_json::to_value(&echoed).unwrap()}),
    )]);
    let client = VestaClient::with_transport(
        transport.clone(),
        Url::parse("https://api.example.test/v2/").unwrap(),
        1,
    );

    let confirmed = client.submit_order(None, order.clone()).await.unwrap();

    // Server-assigned fields arrive; everything else matches field-for-field.
    assert_eq!(confirmed, echoed);
    assert_eq!(confirmed.id.as_deref(), Some("order-123"));
    assert_eq!(confirmed.owner_token.as_deref(), Some("owner-tok"));

    // The outgoing request was the tagged submit shape carrying the
    // original order unchanged.
    let sent: serde_json::Value = serde_json::from_slice(&transport.last_body()).unwrap();
    assert_eq!(sent["type"], "submit_order");
    assert_eq!(sent["order"], serde_json::to_value(&order).unwrap());
    // Total: (300 + 0 choice) * 2 = 600 minor units.
    assert_eq!(sent["order"]["price"], 600);
}

#[tokio::test]
async fn dispatch_posts_json_to_the_configured_endpoint() {
    let transport = ScriptedTransport::new(vec![ok_response(
        serde_json::json!({"restaurantId": "r-1", "price": 0}),
    )]);
    let dispatcher = dispatcher(transport.clone(), 0);

    let _: Order = dispatcher.dispatch(&get_order_request()).await.unwrap();

    let seen = transport.seen.lock().unwrap();
    let request = &seen[0];
    assert_eq!(request.url, "https://api.example.test/v2/");
    assert!(request
        .headers
        .iter()
        .any(|(name, value)| name == "Content-Type" && value == "application/json"));
}
