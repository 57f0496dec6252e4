use std::fs;
use std::path::Path;

use fileharvest_core::{resolve_link, CategoryKind, LinkCategory, ResolvedUrl};
use fileharvest_engine::{
    CategoryDownloader, DownloadError, DownloadOutcome, FailureKind, FetchSettings,
    ReqwestFetcher,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn resolved(server: &MockServer, file_path: &str) -> ResolvedUrl {
    resolve_link(file_path, &server.uri()).expect("valid link")
}

fn fetcher() -> ReqwestFetcher {
    engine_logging::initialize_for_tests();
    ReqwestFetcher::new(FetchSettings::default()).expect("client")
}

fn entries(dir: &Path) -> usize {
    fs::read_dir(dir).map(|d| d.count()).unwrap_or(0)
}

#[tokio::test]
async fn not_found_fails_without_creating_a_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/manual.pdf"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    let temp = TempDir::new().unwrap();
    let fetcher = fetcher();
    let category = LinkCategory::with_defaults(CategoryKind::Document);

    let outcome = CategoryDownloader::new(&fetcher)
        .download(&resolved(&server, "/files/manual.pdf"), &category, temp.path())
        .await;

    match outcome {
        DownloadOutcome::Failed {
            error: DownloadError::Fetch(err),
            ..
        } => assert_eq!(err.kind, FailureKind::HttpStatus(404)),
        other => panic!("unexpected outcome {other:?}"),
    }
    assert_eq!(entries(temp.path()), 0);
}

#[tokio::test]
async fn wrong_content_type_fails_without_creating_a_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/manual.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>login</html>", "text/html"))
        .mount(&server)
        .await;
    let temp = TempDir::new().unwrap();
    let fetcher = fetcher();
    let category = LinkCategory::with_defaults(CategoryKind::Document);

    let outcome = CategoryDownloader::new(&fetcher)
        .download(&resolved(&server, "/files/manual.pdf"), &category, temp.path())
        .await;

    assert!(matches!(
        outcome,
        DownloadOutcome::Failed {
            error: DownloadError::Fetch(ref err),
            ..
        } if matches!(err.kind, FailureKind::UnsupportedContentType { .. })
    ));
    assert_eq!(entries(temp.path()), 0);
}

#[tokio::test]
async fn empty_body_fails_without_creating_a_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/empty.zip"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(Vec::<u8>::new(), "application/zip"))
        .mount(&server)
        .await;
    let temp = TempDir::new().unwrap();
    let fetcher = fetcher();
    let category = LinkCategory::with_defaults(CategoryKind::ArchiveZip);

    let outcome = CategoryDownloader::new(&fetcher)
        .download(&resolved(&server, "/files/empty.zip"), &category, temp.path())
        .await;

    assert!(matches!(
        outcome,
        DownloadOutcome::Failed {
            error: DownloadError::EmptyBody,
            ..
        }
    ));
    assert_eq!(entries(temp.path()), 0);
}

#[tokio::test]
async fn matching_response_is_written_byte_for_byte() {
    let payload: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/Frame_STL.stl"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(payload.clone(), "application/vnd.ms-pki.stl"),
        )
        .expect(1)
        .mount(&server)
        .await;
    let temp = TempDir::new().unwrap();
    let fetcher = fetcher();
    let category = LinkCategory::with_defaults(CategoryKind::ModelStl);

    let outcome = CategoryDownloader::new(&fetcher)
        .download(&resolved(&server, "/files/Frame_STL.stl"), &category, temp.path())
        .await;

    let expected_path = temp.path().join("frame.stl");
    match outcome {
        DownloadOutcome::Downloaded { path, bytes } => {
            assert_eq!(path, expected_path);
            assert_eq!(bytes, payload.len() as u64);
        }
        other => panic!("unexpected outcome {other:?}"),
    }
    assert_eq!(fs::read(&expected_path).unwrap(), payload);
    assert_eq!(entries(temp.path()), 1);
}

#[tokio::test]
async fn existing_target_is_skipped_without_a_request() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_raw("new", "application/pdf"))
        .expect(0)
        .mount(&server)
        .await;
    let temp = TempDir::new().unwrap();
    let existing = temp.path().join("manual.pdf");
    fs::write(&existing, b"old").unwrap();
    let fetcher = fetcher();
    let category = LinkCategory::with_defaults(CategoryKind::Document);

    let outcome = CategoryDownloader::new(&fetcher)
        .download(&resolved(&server, "/files/Manual.pdf"), &category, temp.path())
        .await;

    match outcome {
        DownloadOutcome::Skipped { path } => assert_eq!(path, existing),
        other => panic!("unexpected outcome {other:?}"),
    }
    assert_eq!(fs::read(&existing).unwrap(), b"old");
}
