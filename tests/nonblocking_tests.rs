mod common;

use campbx::{ApiValue, CampBx, CampBxAsync, Endpoint, EventLoop, Params, Pending};
use campbx::exchanges::campbx::build_connector;
use common::*;
use rust_decimal_macros::dec;
use std::time::{Duration, Instant};
use tokio_test::assert_ok;
use wiremock::ResponseTemplate;

const SLOW_RESPONSE: Duration = Duration::from_millis(750);

#[test]
fn test_call_returns_before_response_arrives() {
    let rt = mock_runtime();
    let server = rt.block_on(setup_mock_server());
    rt.block_on(mount_response(
        &server,
        "xticker",
        ResponseTemplate::new(200)
            .set_body_raw(TICKER_BODY.as_bytes().to_vec(), "application/json")
            .set_delay(SLOW_RESPONSE),
    ));

    let client = assert_ok!(CampBxAsync::new(test_config(&server)));

    let started = Instant::now();
    let pending = client.xticker(Params::new());
    assert!(started.elapsed() < SLOW_RESPONSE);

    let ticker = pending.wait();
    assert!(started.elapsed() >= SLOW_RESPONSE);
    assert_eq!(ticker["Best Bid"].as_decimal(), Some(dec!(123.456789012345)));
    client.stop();
}

#[test]
fn test_resolves_to_same_value_as_blocking_call() {
    let rt = mock_runtime();
    let server = rt.block_on(setup_mock_server());
    rt.block_on(mount_json(&server, "xdepth", DEPTH_BODY));
    rt.block_on(mount_json(&server, "myfunds", FUNDS_BODY));

    let blocking = assert_ok!(CampBx::new(test_config(&server)));
    let non_blocking = assert_ok!(CampBxAsync::new(test_config(&server)));

    let depth = non_blocking.xdepth(Params::new());
    let funds = non_blocking.my_funds(Params::new());

    assert_eq!(depth.wait(), blocking.xdepth(Params::new()));
    assert_eq!(funds.wait(), blocking.my_funds(Params::new()));
}

#[test]
fn test_every_endpoint_returns_a_handle() {
    let rt = mock_runtime();
    let server = rt.block_on(setup_mock_server());
    rt.block_on(mount_every_endpoint(&server));

    let client = assert_ok!(CampBxAsync::new(test_config(&server)));
    let calls: [(Endpoint, fn(&CampBxAsync, Params) -> Pending<ApiValue>); 11] = [
        (Endpoint::XDepth, CampBxAsync::xdepth),
        (Endpoint::XTicker, CampBxAsync::xticker),
        (Endpoint::MyFunds, CampBxAsync::my_funds),
        (Endpoint::MyOrders, CampBxAsync::my_orders),
        (Endpoint::MyMargins, CampBxAsync::my_margins),
        (Endpoint::GetBtcAddress, CampBxAsync::get_btc_address),
        (Endpoint::SendInstant, CampBxAsync::send_instant),
        (Endpoint::SendBtc, CampBxAsync::send_btc),
        (Endpoint::TradeCancel, CampBxAsync::trade_cancel),
        (Endpoint::TradeEnter, CampBxAsync::trade_enter),
        (Endpoint::TradeAdvanced, CampBxAsync::trade_advanced),
    ];

    // all requests in flight before any is waited on
    let pending: Vec<_> = calls
        .iter()
        .map(|(endpoint, call)| (*endpoint, call(&client, Params::new())))
        .collect();
    for (endpoint, handle) in pending {
        assert_eq!(handle.wait()["endpoint"].as_str(), Some(endpoint.path()));
    }

    let requests = rt.block_on(server.received_requests()).unwrap();
    assert_eq!(requests.len(), calls.len());
    assert_credential_policy(&requests);
    client.stop();
}

#[test]
fn test_failure_resolves_to_empty_mapping() {
    let rt = mock_runtime();
    let server = rt.block_on(setup_mock_server());
    rt.block_on(mount_response(
        &server,
        "tradecancel",
        ResponseTemplate::new(404),
    ));

    let client = assert_ok!(CampBxAsync::new(test_config(&server)));
    assert_eq!(client.trade_cancel(Params::new()).wait(), ApiValue::empty());

    let unreachable = assert_ok!(CampBxAsync::new(unreachable_config()));
    assert_eq!(unreachable.xdepth(Params::new()).wait(), ApiValue::empty());
}

#[test]
fn test_stop_resolves_in_flight_requests_to_empty_mapping() {
    let rt = mock_runtime();
    let server = rt.block_on(setup_mock_server());
    rt.block_on(mount_response(
        &server,
        "xdepth",
        ResponseTemplate::new(200)
            .set_body_raw(DEPTH_BODY.as_bytes().to_vec(), "application/json")
            .set_delay(Duration::from_secs(3)),
    ));

    let client = assert_ok!(CampBxAsync::new(test_config(&server)));
    let pending = client.xdepth(Params::new());
    client.stop();

    assert_eq!(pending.wait(), ApiValue::empty());
}

#[test]
fn test_shared_event_loop() {
    let rt = mock_runtime();
    let server = rt.block_on(setup_mock_server());
    rt.block_on(mount_json(&server, "xticker", TICKER_BODY));

    let event_loop = assert_ok!(EventLoop::start("shared-loop"));
    let connector = assert_ok!(build_connector(test_config(&server)));
    let client = CampBxAsync::with_event_loop(connector, event_loop);

    let ticker = client.xticker(Params::new()).wait();
    assert!(ticker.contains_key("Last Trade"));
}

#[tokio::test]
async fn test_pending_handle_is_awaitable() {
    let server = setup_mock_server().await;
    mount_json(&server, "xticker", TICKER_BODY).await;

    let client = assert_ok!(CampBxAsync::new(test_config(&server)));
    let ticker = client.xticker(Params::new()).await;
    assert!(ticker.contains_key("Best Ask"));

    // stopping joins the loop thread
    tokio::task::spawn_blocking(move || client.stop())
        .await
        .unwrap();
}
