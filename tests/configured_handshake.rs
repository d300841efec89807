//! End-to-end: configuration → decorator → upgrade messages.

use handshake_decorator::config::{parse_config, ConfiguredDecorator};
use handshake_decorator::http::{build_upgrade_request, build_upgrade_response, generate_key};
use handshake_decorator::DecoratorHandle;
use http::header::{SEC_WEBSOCKET_ACCEPT, SERVER, USER_AGENT};
use http::StatusCode;

const CONFIG: &str = r#"
[decorator.identity]
product = "Relay"
version = "4.1"

[decorator.response_headers]
x-served-by = "node-a"
"#;

#[test]
fn test_configured_decorator_on_both_sides() {
    let config = parse_config(CONFIG).unwrap();
    let mut client = DecoratorHandle::new(ConfiguredDecorator::from_config(&config.decorator).unwrap());
    let mut server = client.clone();

    let req = build_upgrade_request("example.com", "/ws", &generate_key(), &mut client).unwrap();
    let res = build_upgrade_response(&req, &mut server).unwrap();

    assert_eq!(req.headers()[USER_AGENT], "Relay/4.1");
    assert_eq!(res.status(), StatusCode::SWITCHING_PROTOCOLS);
    assert!(res.headers().contains_key(SEC_WEBSOCKET_ACCEPT));
    assert_eq!(res.headers()[SERVER], "Relay/4.1");
    assert_eq!(res.headers()["x-served-by"], "node-a");
}

#[test]
fn test_default_config_matches_default_handle() {
    let config = parse_config("").unwrap();
    let mut configured = DecoratorHandle::new(ConfiguredDecorator::from_config(&config.decorator).unwrap());
    let mut default = DecoratorHandle::default();

    let a = build_upgrade_request("h", "/", "a2V5", &mut configured).unwrap();
    let b = build_upgrade_request("h", "/", "a2V5", &mut default).unwrap();

    assert_eq!(a.headers(), b.headers());
}
