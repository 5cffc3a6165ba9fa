use geo_toolkit::sdk::config::GeocodeConfig;
use geo_toolkit::sdk::geocoding::{GeocodeClient, GeocodeError, GeocodeResult, HttpTransport, Transport};
use reqwest::blocking::Client;
use serde_json::json;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

// Bypass any proxy configured in the environment so requests reach the local stub.
fn local_transport() -> HttpTransport {
    HttpTransport::with_client(Client::builder().no_proxy().build().unwrap())
}

fn local_client(config: GeocodeConfig) -> GeocodeClient {
    GeocodeClient::with_transport(config, local_transport())
}

/// Serves one canned HTTP response and hands back the raw request head.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/maps/api/geocode/json", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        String::from_utf8_lossy(&request).into_owned()
    });

    (url, handle)
}

#[test]
fn transport_returns_status_and_body() {
    let (url, server) = serve_once("200 OK", r#"{"status":"OK"}"#);
    let transport = local_transport();

    let response = transport.get(&url, &[("latlng", "1,2"), ("key", "k")]).unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.body, r#"{"status":"OK"}"#);

    let request = server.join().unwrap();
    assert!(request.starts_with("GET /maps/api/geocode/json?"));
}

#[test]
fn lookup_encodes_query_parameters() {
    let (url, server) = serve_once("200 OK", r#"{"results":[],"status":"ZERO_RESULTS"}"#);
    let client = local_client(GeocodeConfig::new("test-key").with_base_url(url));

    let result = client.lookup(48.8584, 2.2945).unwrap();
    assert_eq!(
        result,
        GeocodeResult::Found(json!({ "results": [], "status": "ZERO_RESULTS" }))
    );

    let request = server.join().unwrap();
    let request_line = request.lines().next().unwrap();
    assert!(request_line.contains("latlng=48.8584%2C2.2945"), "{}", request_line);
    assert!(request_line.contains("key=test-key"), "{}", request_line);
}

#[test]
fn lookup_maps_error_status_to_no_result() {
    let (url, server) = serve_once("403 Forbidden", r#"{"error_message":"denied"}"#);
    let client = local_client(GeocodeConfig::new("").with_base_url(url));

    assert_eq!(
        client.lookup(0.0, 0.0).unwrap(),
        GeocodeResult::NoResult { status: 403 }
    );
    server.join().unwrap();
}

#[test]
fn refused_connection_is_a_transport_error() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let config = GeocodeConfig::new("secret-key").with_base_url(format!("http://{}/json", addr));
    let client = local_client(config);

    let err = client.lookup(1.0, 2.0).unwrap_err();
    assert!(matches!(err, GeocodeError::Transport(_)));
    assert!(!err.to_string().contains("secret-key"));
}
