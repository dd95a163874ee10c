//! Every resource method, checked against the request it must issue and the
//! three outcome properties shared by all of them: a 200 body comes back
//! unmodified, an unreachable endpoint fails with `NOT_REACHABLE`, and an
//! error envelope fails with the provider's code and message.

use std::sync::Mutex;

use robot_core::{
    HttpMethod, HttpRequest, HttpResponse, MarketOrder, ResetType, RobotClient, RobotError, ServerOrder,
    TrafficLimits, TrafficQuery, TrafficRange, TrafficType, Transport, TransportError, USER_AGENT,
};
use serde_json::{json, Value};

const BASE_URL: &str = "https://robot-ws.your-server.de";
const IP: &str = "1.1.1.1";
const FP: &str = "15:28:b0:03:95:f0:77:b3:10:56:15:6b:77:22:a5:bb";

/// Answers every request with the same outcome and records what it saw.
struct Recorder {
    outcome: Result<HttpResponse, TransportError>,
    seen: Mutex<Vec<HttpRequest>>,
}

impl Recorder {
    fn replying(status: u16, body: &str) -> Self {
        Self {
            outcome: Ok(HttpResponse::new(status, body)),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn unreachable() -> Self {
        Self {
            outcome: Err(TransportError::Unreachable("connection refused".to_string())),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn seen(&self) -> Vec<HttpRequest> {
        self.seen.lock().unwrap().clone()
    }
}

impl Transport for Recorder {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.seen.lock().unwrap().push(request.clone());
        self.outcome.clone()
    }
}

type Client = RobotClient<Recorder>;

struct Case {
    name: &'static str,
    call: fn(&Client) -> Result<Value, RobotError>,
    method: HttpMethod,
    path: &'static str,
    body: Option<&'static str>,
}

macro_rules! case {
    ($name:literal, $call:expr, $method:ident, $path:expr) => {
        Case {
            name: $name,
            call: $call,
            method: HttpMethod::$method,
            path: $path,
            body: None,
        }
    };
    ($name:literal, $call:expr, $method:ident, $path:expr, $body:expr) => {
        Case {
            name: $name,
            call: $call,
            method: HttpMethod::$method,
            path: $path,
            body: Some($body),
        }
    };
}

fn month_range() -> TrafficRange {
    TrafficRange::raw(TrafficType::Month, "2024-01-01", "2024-01-31")
}

fn cases() -> Vec<Case> {
    vec![
        // failover
        case!("failover_get all", |c| c.failover_get(None), Get, "/failover"),
        case!("failover_get one", |c| c.failover_get(Some("123.123.123.123")), Get, "/failover/123.123.123.123"),
        case!("failover_get_by_server_ip", |c| c.failover_get_by_server_ip(IP), Get, "/failover?server_ip=1.1.1.1"),
        case!(
            "failover_route",
            |c| c.failover_route("123.123.123.123", "213.133.104.190"),
            Post,
            "/failover/123.123.123.123",
            "active_server_ip=213.133.104.190"
        ),
        // reset
        case!("reset_get all", |c| c.reset_get(None), Get, "/reset"),
        case!("reset_get one", |c| c.reset_get(Some(IP)), Get, "/reset/1.1.1.1"),
        case!("reset_execute", |c| c.reset_execute(IP, ResetType::Hardware), Post, "/reset/1.1.1.1", "type=hw"),
        // boot
        case!("boot_get", |c| c.boot_get(IP), Get, "/boot/1.1.1.1"),
        case!("rescue_get", |c| c.rescue_get(IP), Get, "/boot/1.1.1.1/rescue"),
        case!(
            "rescue_activate",
            |c| c.rescue_activate(IP, "linux", 64, &[FP]),
            Post,
            "/boot/1.1.1.1/rescue",
            "os=linux&arch=64&authorized_key%5B%5D=15%3A28%3Ab0%3A03%3A95%3Af0%3A77%3Ab3%3A10%3A56%3A15%3A6b%3A77%3A22%3Aa5%3Abb"
        ),
        case!("rescue_deactivate", |c| c.rescue_deactivate(IP), Delete, "/boot/1.1.1.1/rescue"),
        case!("rescue_get_last", |c| c.rescue_get_last(IP), Get, "/boot/1.1.1.1/rescue/last"),
        case!("linux_get", |c| c.linux_get(IP), Get, "/boot/1.1.1.1/linux"),
        case!(
            "linux_activate",
            |c| c.linux_activate::<&str>(IP, "Debian 12 base", 64, "en", &[]),
            Post,
            "/boot/1.1.1.1/linux",
            "dist=Debian+12+base&arch=64&lang=en"
        ),
        case!("linux_deactivate", |c| c.linux_deactivate(IP), Delete, "/boot/1.1.1.1/linux"),
        case!("linux_get_last", |c| c.linux_get_last(IP), Get, "/boot/1.1.1.1/linux/last"),
        case!("vnc_get", |c| c.vnc_get(IP), Get, "/boot/1.1.1.1/vnc"),
        case!(
            "vnc_activate",
            |c| c.vnc_activate(IP, "Fedora-39", 64, "de"),
            Post,
            "/boot/1.1.1.1/vnc",
            "dist=Fedora-39&arch=64&lang=de"
        ),
        case!("vnc_deactivate", |c| c.vnc_deactivate(IP), Delete, "/boot/1.1.1.1/vnc"),
        case!("windows_get", |c| c.windows_get(IP), Get, "/boot/1.1.1.1/windows"),
        case!("windows_activate", |c| c.windows_activate(IP, "en"), Post, "/boot/1.1.1.1/windows", "lang=en"),
        case!("windows_deactivate", |c| c.windows_deactivate(IP), Delete, "/boot/1.1.1.1/windows"),
        case!("cpanel_get", |c| c.cpanel_get(IP), Get, "/boot/1.1.1.1/cpanel"),
        case!(
            "cpanel_activate",
            |c| c.cpanel_activate(IP, "CentOS", 64, "en", "host.example.com"),
            Post,
            "/boot/1.1.1.1/cpanel",
            "dist=CentOS&arch=64&lang=en&hostname=host.example.com"
        ),
        case!("cpanel_deactivate", |c| c.cpanel_deactivate(IP), Delete, "/boot/1.1.1.1/cpanel"),
        case!("plesk_get", |c| c.plesk_get(IP), Get, "/boot/1.1.1.1/plesk"),
        case!(
            "plesk_activate",
            |c| c.plesk_activate(IP, "Debian", 64, "en", "host.example.com"),
            Post,
            "/boot/1.1.1.1/plesk",
            "dist=Debian&arch=64&lang=en&hostname=host.example.com"
        ),
        case!("plesk_deactivate", |c| c.plesk_deactivate(IP), Delete, "/boot/1.1.1.1/plesk"),
        // wol
        case!("wol_get", |c| c.wol_get(IP), Get, "/wol/1.1.1.1"),
        case!("wol_send", |c| c.wol_send(IP), Post, "/wol/1.1.1.1", "server_ip=1.1.1.1"),
        // rdns
        case!("rdns_get", |c| c.rdns_get(IP), Get, "/rdns/1.1.1.1"),
        case!("rdns_create", |c| c.rdns_create(IP, "host.example.com"), Put, "/rdns/1.1.1.1", "ptr=host.example.com"),
        case!("rdns_update", |c| c.rdns_update(IP, "host.example.com"), Post, "/rdns/1.1.1.1", "ptr=host.example.com"),
        case!("rdns_delete", |c| c.rdns_delete(IP), Delete, "/rdns/1.1.1.1"),
        // server
        case!("server_get_all", |c| c.server_get_all(), Get, "/server"),
        case!("server_get", |c| c.server_get(IP), Get, "/server/1.1.1.1"),
        case!("server_name_update", |c| c.server_name_update(IP, "web-1"), Post, "/server/1.1.1.1", "server_name=web-1"),
        case!("server_cancellation_get", |c| c.server_cancellation_get(IP), Get, "/server/1.1.1.1/cancellation"),
        case!(
            "server_cancel",
            |c| c.server_cancel(IP, "2030-01-31", Some("")),
            Post,
            "/server/1.1.1.1/cancellation",
            "cancellation_date=2030-01-31"
        ),
        case!(
            "server_cancellation_delete",
            |c| c.server_cancellation_delete(IP),
            Delete,
            "/server/1.1.1.1/cancellation"
        ),
        // ip
        case!("ip_get_all", |c| c.ip_get_all(), Get, "/ip"),
        case!("ip_get_by_server_ip", |c| c.ip_get_by_server_ip(IP), Get, "/ip?server_ip=1.1.1.1"),
        case!("ip_get", |c| c.ip_get(IP), Get, "/ip/1.1.1.1"),
        case!(
            "ip_enable_traffic_warnings",
            |c| c.ip_enable_traffic_warnings(IP),
            Post,
            "/ip/1.1.1.1",
            "traffic_warnings=true"
        ),
        case!(
            "ip_disable_traffic_warnings",
            |c| c.ip_disable_traffic_warnings(IP),
            Post,
            "/ip/1.1.1.1",
            "traffic_warnings=false"
        ),
        case!(
            "ip_set_traffic_warning_limits",
            |c| c.ip_set_traffic_warning_limits(IP, TrafficLimits { hourly: 200, daily: 2000, monthly: 20 }),
            Post,
            "/ip/1.1.1.1",
            "traffic_hourly=200&traffic_daily=2000&traffic_monthly=20"
        ),
        // subnet
        case!("subnet_get_all", |c| c.subnet_get_all(), Get, "/subnet"),
        case!("subnet_get_by_server_ip", |c| c.subnet_get_by_server_ip(IP), Get, "/subnet?server_ip=1.1.1.1"),
        case!("subnet_get", |c| c.subnet_get("2a01:4f8:111:4221::"), Get, "/subnet/2a01:4f8:111:4221::"),
        case!(
            "subnet_enable_traffic_warnings",
            |c| c.subnet_enable_traffic_warnings("10.0.0.0"),
            Post,
            "/subnet/10.0.0.0",
            "traffic_warnings=true"
        ),
        case!(
            "subnet_disable_traffic_warnings",
            |c| c.subnet_disable_traffic_warnings("10.0.0.0"),
            Post,
            "/subnet/10.0.0.0",
            "traffic_warnings=false"
        ),
        case!(
            "subnet_set_traffic_warning_limits",
            |c| c.subnet_set_traffic_warning_limits("10.0.0.0", TrafficLimits { hourly: 1, daily: 2, monthly: 3 }),
            Post,
            "/subnet/10.0.0.0",
            "traffic_hourly=1&traffic_daily=2&traffic_monthly=3"
        ),
        // mac
        case!("separate_mac_get", |c| c.separate_mac_get(IP), Get, "/ip/1.1.1.1/mac"),
        case!("separate_mac_create", |c| c.separate_mac_create(IP), Put, "/ip/1.1.1.1/mac"),
        case!("separate_mac_delete", |c| c.separate_mac_delete(IP), Delete, "/ip/1.1.1.1/mac"),
        case!("subnet_mac_get", |c| c.subnet_mac_get("10.0.0.0"), Get, "/subnet/10.0.0.0/mac"),
        case!(
            "subnet_mac_set",
            |c| c.subnet_mac_set("10.0.0.0", "00:21:85:62:3e:9d"),
            Put,
            "/subnet/10.0.0.0/mac",
            "mac=00%3A21%3A85%3A62%3A3e%3A9d"
        ),
        case!("subnet_mac_reset", |c| c.subnet_mac_reset("10.0.0.0"), Delete, "/subnet/10.0.0.0/mac"),
        // traffic
        case!(
            "traffic_get",
            |c| c.traffic_get(&TrafficQuery::new(month_range()).ips([IP]).subnets(["10.0.0.0"]).single_values(true)),
            Post,
            "/traffic",
            "ip%5B%5D=1.1.1.1&subnet%5B%5D=10.0.0.0&type=month&from=2024-01-01&to=2024-01-31&single_values=true"
        ),
        case!(
            "traffic_get_for_ip",
            |c| c.traffic_get_for_ip(&[IP, "2.2.2.2"], month_range()),
            Post,
            "/traffic",
            "ip%5B%5D=1.1.1.1&ip%5B%5D=2.2.2.2&type=month&from=2024-01-01&to=2024-01-31"
        ),
        case!(
            "traffic_get_for_subnet",
            |c| c.traffic_get_for_subnet(&["10.0.0.0"], month_range()),
            Post,
            "/traffic",
            "subnet%5B%5D=10.0.0.0&type=month&from=2024-01-01&to=2024-01-31"
        ),
        // key
        case!("key_get_all", |c| c.key_get_all(), Get, "/key"),
        case!("key_get", |c| c.key_get(FP), Get, "/key/15:28:b0:03:95:f0:77:b3:10:56:15:6b:77:22:a5:bb"),
        case!(
            "key_create",
            |c| c.key_create("laptop", "ssh-ed25519 AAAA user@host"),
            Post,
            "/key",
            "name=laptop&data=ssh-ed25519+AAAA+user%40host"
        ),
        case!(
            "key_update",
            |c| c.key_update(FP, "desktop"),
            Post,
            "/key/15:28:b0:03:95:f0:77:b3:10:56:15:6b:77:22:a5:bb",
            "name=desktop"
        ),
        case!("key_delete", |c| c.key_delete(FP), Delete, "/key/15:28:b0:03:95:f0:77:b3:10:56:15:6b:77:22:a5:bb"),
        // order
        case!("order_server_product_get_all", |c| c.order_server_product_get_all(), Get, "/order/server/product"),
        case!("order_server_product_get", |c| c.order_server_product_get("EX40"), Get, "/order/server/product/EX40"),
        case!(
            "order_server_transaction_get_all",
            |c| c.order_server_transaction_get_all(),
            Get,
            "/order/server/transaction"
        ),
        case!(
            "order_server_transaction_get",
            |c| c.order_server_transaction_get("B20150121-344958-251479"),
            Get,
            "/order/server/transaction/B20150121-344958-251479"
        ),
        case!(
            "order_server",
            |c| c.order_server(&ServerOrder::new("EX40").password("s3cret").dist("Rescue system").arch(64).lang("en")),
            Post,
            "/order/server/transaction",
            "product_id=EX40&password=s3cret&dist=Rescue+system&arch=64&lang=en"
        ),
        case!(
            "order_server_market_product_get_all",
            |c| c.order_server_market_product_get_all(),
            Get,
            "/order/server_market/product"
        ),
        case!(
            "order_server_market_product_get",
            |c| c.order_server_market_product_get("276113"),
            Get,
            "/order/server_market/product/276113"
        ),
        case!(
            "order_server_market_transaction_get_all",
            |c| c.order_server_market_transaction_get_all(),
            Get,
            "/order/server_market/transaction"
        ),
        case!(
            "order_server_market_transaction_get",
            |c| c.order_server_market_transaction_get("B20150121-344957-251478"),
            Get,
            "/order/server_market/transaction/B20150121-344957-251478"
        ),
        case!(
            "order_market_server",
            |c| c.order_market_server(&MarketOrder::new("276113").authorized_keys([FP]).password("ignored").test(true)),
            Post,
            "/order/server_market/transaction",
            "product_id=276113&authorized_key%5B%5D=15%3A28%3Ab0%3A03%3A95%3Af0%3A77%3Ab3%3A10%3A56%3A15%3A6b%3A77%3A22%3Aa5%3Abb&test=true"
        ),
    ]
}

#[test]
fn every_method_issues_its_request() {
    for case in cases() {
        let client = RobotClient::new(BASE_URL, Recorder::replying(200, "{}"));
        (case.call)(&client).unwrap_or_else(|e| panic!("{}: {e}", case.name));

        let seen = client.transport().seen();
        assert_eq!(seen.len(), 1, "{}: exactly one round trip", case.name);
        let request = &seen[0];
        assert_eq!(request.method, case.method, "{}: method", case.name);
        assert_eq!(request.url, format!("{BASE_URL}{}", case.path), "{}: url", case.name);
        assert_eq!(request.body.as_deref(), case.body, "{}: body", case.name);
        assert_eq!(request.header("Accept"), Some("application/json"), "{}: accept", case.name);
        assert_eq!(request.header("User-Agent"), Some(USER_AGENT), "{}: user agent", case.name);
    }
}

#[test]
fn every_method_builds_identical_requests_twice() {
    for case in cases() {
        let client = RobotClient::new(BASE_URL, Recorder::replying(200, "{}"));
        (case.call)(&client).unwrap();
        (case.call)(&client).unwrap();
        let seen = client.transport().seen();
        assert_eq!(seen[0], seen[1], "{}", case.name);
    }
}

#[test]
fn every_method_returns_success_body_unmodified() {
    let body = r#"{"payload":{"nested":[1,2,3],"flag":true,"name":"x"}}"#;
    for case in cases() {
        let client = RobotClient::new(BASE_URL, Recorder::replying(200, body));
        let value = (case.call)(&client).unwrap();
        assert_eq!(value, json!({"payload": {"nested": [1, 2, 3], "flag": true, "name": "x"}}), "{}", case.name);
    }
}

#[test]
fn every_method_returns_empty_object_for_empty_body() {
    for case in cases() {
        let client = RobotClient::new(BASE_URL, Recorder::replying(200, ""));
        assert_eq!((case.call)(&client).unwrap(), json!({}), "{}", case.name);
    }
}

#[test]
fn every_method_reports_unreachable_endpoint() {
    for case in cases() {
        let client = RobotClient::new(BASE_URL, Recorder::unreachable());
        let err = (case.call)(&client).unwrap_err();
        assert_eq!(err.code(), "NOT_REACHABLE", "{}", case.name);
        assert!(matches!(err, RobotError::NotReachable(_)), "{}", case.name);
    }
}

#[test]
fn every_method_surfaces_provider_errors() {
    let body = r#"{"error":{"status":404,"code":"C","message":"M"}}"#;
    for case in cases() {
        let client = RobotClient::new(BASE_URL, Recorder::replying(404, body));
        let err = (case.call)(&client).unwrap_err();
        assert_eq!(err.code(), "C", "{}", case.name);
        assert_eq!(err.message(), "M", "{}", case.name);
        assert_eq!(err.status(), Some(404), "{}", case.name);
    }
}

#[test]
fn every_method_reports_undecodable_bodies() {
    for case in cases() {
        let client = RobotClient::new(BASE_URL, Recorder::replying(200, "<html>maintenance</html>"));
        let err = (case.call)(&client).unwrap_err();
        assert_eq!(err.code(), "RESPONSE_DECODE_ERROR", "{}", case.name);
    }
}

#[test]
fn server_order_never_sends_both_keys_and_password() {
    let client = RobotClient::new(BASE_URL, Recorder::replying(200, "{}"));
    client
        .order_server(&ServerOrder::new("EX40").authorized_keys([FP]).password("s3cret"))
        .unwrap();
    client.order_server(&ServerOrder::new("EX40").password("s3cret")).unwrap();

    let seen = client.transport().seen();
    let with_keys = seen[0].body.as_deref().unwrap();
    assert!(with_keys.contains("authorized_key%5B%5D="));
    assert!(!with_keys.contains("password"));
    let with_password = seen[1].body.as_deref().unwrap();
    assert!(with_password.contains("password=s3cret"));
    assert!(!with_password.contains("authorized_key"));
}

#[test]
fn rescue_with_two_keys_repeats_the_field() {
    let client = RobotClient::new(BASE_URL, Recorder::replying(200, "{}"));
    client.rescue_activate(IP, "linux", 64, &["aa:bb", "cc:dd"]).unwrap();

    let body = client.transport().seen()[0].body.clone().unwrap();
    assert_eq!(body.matches("authorized_key%5B%5D=").count(), 2);
    assert!(body.ends_with("authorized_key%5B%5D=aa%3Abb&authorized_key%5B%5D=cc%3Add"));
}
