use library_wishlist::{run, CollectionFilter, LibraryClient, LibraryError, RunOptions, RunOutcome};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::NamedTempFile;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LIBRARY_ID: &str = "E2E-LIBRARY";

fn create_sample_export() -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(
        temp_file,
        "objectname,objectid,own,wishlist,wanttoplay,wishlistpriority\n\
         Catan,101,0,1,0,2\n\
         Wingspan,202,0,1,0,1\n\
         Not In Library,303,0,1,1,1\n"
    )
    .unwrap();
    temp_file
}

async fn start_library() -> MockServer {
    let mock_server = MockServer::start().await;
    let body = serde_json::json!({
        "result": {
            "items": [
                { "bgg_id": 101, "name": "Catan", "catalog_number": null, "is_checked_out": false },
                { "bgg_id": 202, "name": "Wingspan", "catalog_number": null, "is_checked_out": true },
                { "bgg_id": 404, "name": "Not Wanted", "catalog_number": "7", "is_checked_out": false }
            ],
            "paging": { "total_pages": 1 }
        }
    });

    Mock::given(method("GET"))
        .and(path(format!("/api/library/{LIBRARY_ID}/librarygames")))
        .and(query_param("_page_number", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    mock_server
}

fn options(csv_path: PathBuf, show_checked_out: bool) -> RunOptions {
    RunOptions {
        csv_path,
        show_checked_out,
        library_name: "Test Library".to_string(),
        ..RunOptions::default()
    }
}

async fn run_blocking(uri: String, options: RunOptions) -> library_wishlist::Result<RunOutcome> {
    tokio::task::spawn_blocking(move || {
        let client = LibraryClient::new(&uri, LIBRARY_ID).with_page_delay(Duration::ZERO);
        run(&client, &options)
    })
    .await
    .unwrap()
}

#[tokio::test]
async fn default_run_hides_checked_out_games() {
    let mock_server = start_library().await;
    let export = create_sample_export();

    let outcome = run_blocking(
        mock_server.uri(),
        options(export.path().to_path_buf(), false),
    )
    .await
    .unwrap();

    assert_eq!(
        outcome,
        RunOutcome::Report(
            "Found 2 matching games!\n\
             (1 currently checked out, use --show-checked-out to include)\n\
             \n\
             Games available in the Test Library:\n\
             --------------------------------------------------\n\
             - [Wishlist 2] Catan"
                .to_string()
        )
    );
}

#[tokio::test]
async fn show_checked_out_lists_everything_by_priority() {
    let mock_server = start_library().await;
    let export = create_sample_export();

    let outcome = run_blocking(
        mock_server.uri(),
        options(export.path().to_path_buf(), true),
    )
    .await
    .unwrap();

    let report = match outcome {
        RunOutcome::Report(report) => report,
        other => panic!("Expected a report, got: {other:?}"),
    };
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines[0], "Found 2 matching games!");
    assert!(!report.contains("currently checked out,"));
    assert_eq!(
        &lines[lines.len() - 2..],
        &[
            "- [Wishlist 1] Wingspan [CHECKED OUT]",
            "- [Wishlist 2] Catan"
        ]
    );
}

#[tokio::test]
async fn want_to_play_only_with_no_library_match() {
    let mock_server = start_library().await;
    let export = create_sample_export();
    let mut run_options = options(export.path().to_path_buf(), false);
    // The only want-to-play game in the export isn't held by the library
    run_options.filter = CollectionFilter {
        include_wishlist: false,
        include_want_to_play: true,
    };

    let outcome = run_blocking(mock_server.uri(), run_options).await.unwrap();

    match outcome {
        RunOutcome::Report(report) => assert!(report.starts_with("Found 0 matching games!")),
        other => panic!("Expected a report, got: {other:?}"),
    }
}

#[tokio::test]
async fn export_with_no_tagged_rows_is_empty_collection() {
    let mock_server = start_library().await;
    let mut export = NamedTempFile::new().unwrap();
    write!(
        export,
        "objectname,objectid,own,wishlist,wanttoplay,wishlistpriority\nCatan,101,1,0,0,\n"
    )
    .unwrap();

    let outcome = run_blocking(
        mock_server.uri(),
        options(export.path().to_path_buf(), false),
    )
    .await
    .unwrap();

    assert_eq!(outcome, RunOutcome::EmptyCollection);
}

#[tokio::test]
async fn missing_export_fails_before_fetching() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = run_blocking(
        mock_server.uri(),
        options(PathBuf::from("/nonexistent/bgg_games.csv"), false),
    )
    .await;

    assert!(matches!(result, Err(LibraryError::CsvNotFound(_))));
}

#[tokio::test]
async fn library_failure_aborts_run() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;
    let export = create_sample_export();

    let result = run_blocking(
        mock_server.uri(),
        options(export.path().to_path_buf(), false),
    )
    .await;

    assert!(matches!(result, Err(LibraryError::HttpStatus(_))));
}
