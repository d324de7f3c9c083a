//! ArticClient against a local stub HTTP server.
//!
//! The stub answers every request with a fixed status and body and records
//! the request target, so URL construction, decoding and status mapping are
//! exercised over a real socket.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use http_body_util::Full;
use hyper::Request;
use hyper::Response;
use hyper::StatusCode;
use hyper::body::Bytes;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use artic_lib::ArticClient;
use artic_lib::Error;
use artic_lib::api::PageRequest;
use artic_lib::error::ApiError;
use artic_lib::model::ARTWORK_FIELDS;
use artic_lib::view::ArtworkView;
use artic_lib::view::FailureKind;

const TWO_ARTWORKS: &str = r#"{
    "pagination": {"total": 42, "limit": 2, "offset": 0, "total_pages": 21, "current_page": 1},
    "data": [
        {"id": 129884, "title": "Starry Night and the Astronauts", "artist_display": "Alma Thomas",
         "date_display": "1972", "place_of_origin": "United States", "inscriptions": null,
         "date_start": 1972, "date_end": 1972, "image_url": null},
        {"id": 27992, "title": "A Sunday on La Grande Jatte", "artist_display": "Georges Seurat",
         "date_display": "1884-86", "place_of_origin": "France", "inscriptions": null,
         "date_start": 1884, "date_end": 1886,
         "image_url": "https://www.artic.edu/iiif/2/2d484387/full/843,/0/default.jpg"}
    ]
}"#;

struct Stub {
    addr: SocketAddr,
    targets: Arc<Mutex<Vec<String>>>,
}

impl Stub {
    fn base_url(&self) -> String {
        format!("http://{}/api/v1", self.addr)
    }

    fn targets(&self) -> Vec<String> {
        self.targets.lock().unwrap().clone()
    }
}

async fn serve(status: StatusCode, body: &'static str, delay: Duration) -> Stub {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let targets = Arc::new(Mutex::new(Vec::new()));

    let recorded = targets.clone();
    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                return;
            };
            let recorded = recorded.clone();
            tokio::spawn(async move {
                let service = service_fn(move |req: Request<Incoming>| {
                    let recorded = recorded.clone();
                    async move {
                        let target = req
                            .uri()
                            .path_and_query()
                            .map(|pq| pq.to_string())
                            .unwrap_or_default();
                        recorded.lock().unwrap().push(target);
                        tokio::time::sleep(delay).await;
                        Ok::<_, Infallible>(
                            Response::builder()
                                .status(status)
                                .header("Content-Type", "application/json")
                                .body(Full::new(Bytes::from(body)))
                                .unwrap(),
                        )
                    }
                });
                let _ = http1::Builder::new()
                    .serve_connection(TokioIo::new(stream), service)
                    .await;
            });
        }
    });

    Stub { addr, targets }
}

#[tokio::test]
async fn test_fetches_and_decodes_page() {
    let stub = serve(StatusCode::OK, TWO_ARTWORKS, Duration::ZERO).await;
    let client = ArticClient::builder().url(stub.base_url()).build().unwrap();

    let page = client.artworks(PageRequest::new(0, 2)).await.unwrap();

    assert_eq!(stub.targets(), vec!["/api/v1/artworks?page=1&limit=2".to_string()]);
    assert_eq!(page.total(), 42);
    assert_eq!(page.len(), 2);
    assert!(!page.is_empty());
    assert_eq!(page.records()[0].id, 129884);
    assert_eq!(page.records()[1].date_end, Some(1886));
    assert_eq!(page.request().next(page.total()), Some(PageRequest::new(1, 2)));
}

#[tokio::test]
async fn test_sends_field_projection() {
    let stub = serve(StatusCode::OK, TWO_ARTWORKS, Duration::ZERO).await;
    let client = ArticClient::builder()
        .url(stub.base_url())
        .fields(ARTWORK_FIELDS)
        .build()
        .unwrap();

    client.artworks(PageRequest::new(4, 2)).await.unwrap();

    let target = stub.targets().remove(0);
    assert!(target.starts_with("/api/v1/artworks?page=5&limit=2&fields=id%2Ctitle%2C"));
    assert!(target.ends_with("image_url"));
}

#[tokio::test]
async fn test_error_status_maps_to_http_error() {
    let body = r#"{"status": 403, "error": "Invalid limit", "detail": "You have requested too many resources per page."}"#;
    let stub = serve(StatusCode::FORBIDDEN, body, Duration::ZERO).await;
    let client = ArticClient::builder().url(stub.base_url()).build().unwrap();

    let err = client.artworks(PageRequest::new(0, 1000)).await.unwrap_err();

    match err {
        Error::Api(ApiError::Http { status, message }) => {
            assert_eq!(status, 403);
            assert!(message.starts_with("Invalid limit"));
        }
        other => panic!("expected HTTP error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let stub = serve(StatusCode::OK, r#"{"data": [{"id": 1}]}"#, Duration::ZERO).await;
    let client = ArticClient::builder().url(stub.base_url()).build().unwrap();

    let err = client.artworks(PageRequest::first()).await.unwrap_err();

    assert!(err.is_decode());
}

#[tokio::test]
async fn test_configured_timeout_is_reported() {
    let stub = serve(StatusCode::OK, TWO_ARTWORKS, Duration::from_secs(5)).await;
    let client = ArticClient::builder()
        .url(stub.base_url())
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let err = client.artworks(PageRequest::first()).await.unwrap_err();

    assert!(matches!(err, Error::Api(ApiError::Timeout(_))));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ArticClient::builder()
        .url(format!("http://{}", addr))
        .build()
        .unwrap();
    let err = client.artworks(PageRequest::first()).await.unwrap_err();

    assert!(matches!(err, Error::Api(ApiError::Network(_))));
}

#[tokio::test]
async fn test_view_over_client_records_decode_failure() {
    let stub = serve(StatusCode::OK, "<html>maintenance</html>", Duration::ZERO).await;
    let client = ArticClient::builder().url(stub.base_url()).build().unwrap();
    let view = ArtworkView::new(client);

    assert!(view.mount().await.is_err());

    let state = view.page();
    assert!(!state.is_loading());
    assert_eq!(state.error().unwrap().kind, FailureKind::Decode);
    assert_eq!(stub.targets(), vec!["/api/v1/artworks?page=1&limit=10".to_string()]);
}
