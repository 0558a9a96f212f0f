//! Builder behavior against an in-memory sender

use std::collections::{BTreeMap, HashMap, HashSet};
use std::io::{self, Read};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use bytes::{Bytes, BytesMut};
use courier::{
    ContentType, HttpRequest, HttpResponse, JsonMap, Method, Parameters, RequestBuilder,
    ResponseBody, Result, StatusCode,
};
use serde::{Serialize, Serializer};

/// Records every request it sees and answers with a fixed status and body.
#[derive(Clone)]
struct MockSender {
    calls: Arc<AtomicUsize>,
    seen: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockSender {
    fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn last_request(&self) -> HttpRequest {
        self.seen
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("a request was sent")
    }

    fn builder(&self, method: Method, status: u16, body: &'static str) -> RequestBuilder {
        let calls = self.calls.clone();
        let seen = self.seen.clone();
        let status = StatusCode::from_u16(status).unwrap();
        RequestBuilder::with_sender(
            method,
            "http://api.test/items?keep=1",
            move |request: &HttpRequest| -> Result<HttpResponse> {
                calls.fetch_add(1, Ordering::SeqCst);
                seen.lock().unwrap().push(request.clone());
                Ok(HttpResponse::new(status).with_body(body))
            },
        )
    }
}

fn refusing(calls: Arc<AtomicUsize>) -> RequestBuilder {
    RequestBuilder::with_sender(
        Method::GET,
        "http://api.test/down",
        move |_: &HttpRequest| -> Result<HttpResponse> {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(courier_client::error::connect(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "connection refused",
            )))
        },
    )
}

/// Yields a few bytes, then fails as if the peer reset the connection.
struct TruncatedBody {
    sent: bool,
}

impl Read for TruncatedBody {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.sent {
            return Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset mid-body"));
        }
        self.sent = true;
        let chunk = b"partial";
        buf[..chunk.len()].copy_from_slice(chunk);
        Ok(chunk.len())
    }
}

struct Unsupported;

impl Serialize for Unsupported {
    fn serialize<S: Serializer>(&self, _serializer: S) -> std::result::Result<S::Ok, S::Error> {
        Err(serde::ser::Error::custom("unsupported field"))
    }
}

#[test]
fn every_accessor_shares_one_dispatch() {
    env_logger::try_init().ok();
    let mock = MockSender::new();

    let _ = mock
        .builder(Method::POST, 200, r#"{"x":1}"#)
        .debug()
        .on_response(|_, _, body, _| assert_eq!(body.map(Bytes::len), Some(7)))
        .on_response(|_, _, _, _| {})
        .on_response_bytes(|_, _, body, _| assert_eq!(body, br#"{"x":1}"#))
        .on_response_string(|_, _, text, _| assert_eq!(text, r#"{"x":1}"#))
        .on_response_json(|_, _, data, _| assert_eq!(data["x"], 1))
        .check_status_code(&[])
        .on_response_json(|_, _, _, err| assert!(err.is_none()));

    assert_eq!(mock.calls(), 1);
}

#[test]
fn url_encoding_methods_ignore_parameters() {
    let mock = MockSender::new();

    for method in [Method::GET, Method::HEAD, Method::DELETE] {
        let builder = mock
            .builder(method.clone(), 200, "")
            .parameters(BTreeMap::from([("a", "1")]))
            .parameters("raw text")
            .parameters(b"raw bytes")
            .parameters(42_i64)
            .json(&Unsupported);

        assert!(builder.body().is_none(), "{method} must not carry a body");
        assert!(builder.error().is_none(), "{method} must not record an error");

        let _ = builder.on_response(|req, _, _, _| {
            assert!(req.and_then(HttpRequest::body).is_none());
        });
    }
}

#[test]
fn form_parameters_round_trip() {
    let mock = MockSender::new();
    let params = HashMap::from([
        ("a".to_string(), "1".to_string()),
        ("b".to_string(), "2 3".to_string()),
    ]);

    let _ = mock
        .builder(Method::POST, 200, "")
        .parameters(params.clone())
        .on_response(|_, _, _, err| assert!(err.is_none()));

    let request = mock.last_request();
    assert_eq!(
        request.content_type(),
        Some("application/x-www-form-urlencoded")
    );
    let body = request.body().expect("form body");
    assert_eq!(request.content_length(), Some(body.len() as u64));

    let decoded: HashMap<String, String> = url::form_urlencoded::parse(body)
        .into_owned()
        .collect();
    assert_eq!(decoded, params);
}

#[test]
fn explicit_content_type_is_kept() {
    let mock = MockSender::new();

    let _ = mock
        .builder(Method::PUT, 200, "")
        .content_type(ContentType::TextPlain)
        .parameters("hello")
        .on_response(|_, _, _, _| {});

    let request = mock.last_request();
    assert_eq!(request.content_type(), Some("text/plain"));
    assert_eq!(request.body(), Some(&Bytes::from_static(b"hello")));
}

#[test]
fn bare_value_marshals_to_json() {
    let mock = MockSender::new();
    let builder = mock.builder(Method::POST, 200, "").parameters(42_i64);
    assert_eq!(builder.body(), Some(&Bytes::from_static(b"42")));

    let builder = mock
        .builder(Method::PATCH, 200, "")
        .json(&serde_json::json!({"name": "courier", "tags": ["http"]}));
    assert_eq!(builder.headers()["content-type"], "application/json");
    let sent: serde_json::Value = serde_json::from_slice(builder.body().unwrap()).unwrap();
    assert_eq!(sent["tags"][0], "http");
}

#[test]
fn bytes_and_buffers_are_adopted() {
    let mock = MockSender::new();

    let raw = mock
        .builder(Method::POST, 200, "")
        .parameters(vec![0_u8, 159, 146, 150]);
    assert_eq!(raw.body().map(Bytes::len), Some(4));

    let mut buf = BytesMut::with_capacity(64);
    buf.extend_from_slice(b"buffered");
    let buffered = mock.builder(Method::POST, 200, "").parameters(buf);
    assert_eq!(buffered.body(), Some(&Bytes::from_static(b"buffered")));

    let adopted = mock
        .builder(Method::POST, 200, "")
        .parameters(Parameters::buffer(&b"from a slice"[..]));
    assert_eq!(adopted.body(), Some(&Bytes::from_static(b"from a slice")));
}

#[test]
fn marshal_failure_is_sticky_encoding_error() {
    let mock = MockSender::new();

    let builder = mock
        .builder(Method::POST, 200, "ok")
        .parameters(Parameters::json(&Unsupported))
        .parameters("would have been fine");

    assert!(builder.body().is_none());
    assert!(builder.error().is_some_and(courier::Error::is_encode));

    let _ = builder
        .on_response_bytes(|req, res, body, err| {
            assert!(req.is_none());
            assert!(res.is_none());
            assert!(body.is_empty());
            assert!(err.is_some_and(courier::Error::is_encode));
        })
        .on_response_json(|_, _, data, err| {
            assert!(data.is_empty());
            assert!(err.is_some_and(courier::Error::is_encode));
        });

    assert_eq!(mock.calls(), 0);
}

#[test]
fn default_status_range_is_2xx() {
    let mock = MockSender::new();

    for status in [200, 299] {
        let builder = mock.builder(Method::GET, status, "").check_status_code(&[]);
        assert!(builder.error().is_none(), "{status} should pass");
    }

    for status in [199, 300] {
        let builder = mock.builder(Method::GET, status, "").check_status_code(&[]);
        let err = builder.error().expect("status rejected");
        assert!(err.is_status());
        assert_eq!(err.status().map(|s| s.as_u16()), Some(status));
        assert!(err.to_string().contains(&format!("invalid status code {status}")));
    }
}

#[test]
fn explicit_status_codes_match_exactly() {
    let mock = MockSender::new();

    for (status, ok) in [(201, true), (204, true), (200, false), (202, false)] {
        let builder = mock
            .builder(Method::POST, status, "")
            .check_status_code(&[201, 204]);
        assert_eq!(builder.error().is_none(), ok, "status {status}");
    }
}

#[test]
fn rejected_status_reaches_later_accessors_with_body() {
    let mock = MockSender::new();

    let _ = mock
        .builder(Method::GET, 404, "missing")
        .check_status_code(&[])
        .on_response_string(|_, res, text, err| {
            assert_eq!(res.map(|r| r.status), Some(StatusCode::NOT_FOUND));
            assert_eq!(text, "missing");
            assert_eq!(err.and_then(courier::Error::status), Some(StatusCode::NOT_FOUND));
        });

    assert_eq!(mock.calls(), 1);
}

#[test]
fn body_read_failure_outranks_rejected_status() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();

    let builder = RequestBuilder::with_sender(
        Method::GET,
        "http://api.test/flaky",
        move |_: &HttpRequest| -> Result<HttpResponse> {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(HttpResponse::new(StatusCode::INTERNAL_SERVER_ERROR)
                .with_body(ResponseBody::new(TruncatedBody { sent: false })))
        },
    )
    .check_status_code(&[]);

    let err = builder.error().expect("body error recorded");
    assert!(err.is_transport());
    assert_eq!(err.kind(), &courier::Kind::Body);
    assert!(!err.is_status());

    let _ = builder.on_response(|_, res, body, err| {
        assert_eq!(res.map(|r| r.status), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(body.is_none());
        assert!(err.is_some_and(|e| e.to_string().contains("reset mid-body")));
    });

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn json_object_is_decoded() {
    let mock = MockSender::new();
    let mut received = JsonMap::new();

    let _ = mock
        .builder(Method::GET, 200, r#"{"x":1}"#)
        .on_response_json(|_, _, data, err| {
            assert!(err.is_none());
            received = data;
        });

    let expected: JsonMap = serde_json::from_str(r#"{"x":1}"#).unwrap();
    assert_eq!(received, expected);
}

#[test]
fn decode_failure_does_not_poison_cache() {
    let mock = MockSender::new();

    let builder = mock
        .builder(Method::GET, 200, "not json")
        .on_response_json(|_, res, data, err| {
            assert!(res.is_some());
            assert!(data.is_empty());
            assert!(err.is_some_and(courier::Error::is_decode));
        })
        .on_response_bytes(|_, _, body, err| {
            assert_eq!(body, b"not json");
            assert!(err.is_none());
        });

    assert!(builder.error().is_none());
    assert_eq!(mock.calls(), 1);
}

#[test]
fn transport_failure_reaches_every_accessor() {
    let calls = Arc::new(AtomicUsize::new(0));
    let errors = Arc::new(Mutex::new(Vec::new()));
    let record = |err: Option<&courier::Error>| {
        let err = err.expect("transport error delivered");
        assert!(err.is_transport());
        errors.lock().unwrap().push(err.to_string());
    };

    let _ = refusing(calls.clone())
        .on_response(|_, res, body, err| {
            assert!(res.is_none());
            assert!(body.is_none());
            record(err);
        })
        .on_response_bytes(|_, _, body, err| {
            assert!(body.is_empty());
            record(err);
        })
        .on_response_string(|_, _, text, err| {
            assert!(text.is_empty());
            record(err);
        })
        .on_response_json(|_, _, data, err| {
            assert!(data.is_empty());
            record(err);
        })
        .check_status_code(&[]);

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    let errors = errors.lock().unwrap();
    assert_eq!(errors.len(), 4);
    assert!(errors.iter().collect::<HashSet<_>>().len() == 1);
    assert!(errors[0].contains("connection refused"));
}

#[test]
fn query_and_request_metadata_reach_callback() {
    let mock = MockSender::new();

    let _ = mock
        .builder(Method::GET, 200, "")
        .query([("q", "a b"), ("page", "2")])
        .header("x-request-id", "abc")
        .on_response(|req, _, _, _| {
            let req = req.expect("request built");
            assert_eq!(req.method(), &Method::GET);
            assert_eq!(req.url().as_str(), "http://api.test/items?q=a+b&page=2");
            assert_eq!(req.headers()["x-request-id"], "abc");
        });
}

#[test]
fn invalid_url_never_dispatches() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let _ = RequestBuilder::with_sender(
        Method::POST,
        "://nope",
        move |_: &HttpRequest| -> Result<HttpResponse> {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(HttpResponse::new(StatusCode::OK))
        },
    )
    .query("a=1")
    .on_response(|req, _, _, err| {
        assert!(req.is_none());
        assert!(err.is_some_and(courier::Error::is_builder));
    });

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn configuration_after_dispatch_does_not_resend() {
    let mock = MockSender::new();

    let builder = mock
        .builder(Method::POST, 200, "first")
        .on_response_string(|_, _, text, _| assert_eq!(text, "first"))
        .parameters("changed")
        .header("x-late", "1")
        .on_response_string(|_, _, text, _| assert_eq!(text, "first"));

    assert_eq!(mock.calls(), 1);
    assert!(mock.last_request().body().is_none());
    assert_eq!(builder.body(), Some(&Bytes::from_static(b"changed")));
}

#[test]
fn unimplemented_extension_points_change_nothing() {
    let mock = MockSender::new();
    let accepted = HashMap::from([("json".to_string(), "application/json".to_string())]);

    let builder = mock
        .builder(Method::POST, 200, "")
        .authenticate("ada", "secret")
        .progress()
        .validate();

    assert!(builder.headers().is_empty());
    assert!(builder.check_accept_content_type(&accepted));
    assert!(builder.validate_accept_content_type(&accepted));
    builder.cancel();
    assert!(!builder.is_dispatched());
    assert_eq!(mock.calls(), 0);
}
