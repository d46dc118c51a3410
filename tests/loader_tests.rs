use std::fs;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use scatter_rs::ScatterError;
use scatter_rs::api::LoadConfig;
use scatter_rs::loader::{
    DEFAULT_DATASET_URL, DatasetSource, FileDatasetSource, HttpDatasetSource, source_for_location,
};

fn temp_dataset(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("scatter-rs-{}-{name}", std::process::id()));
    fs::write(&path, contents).expect("write temp dataset");
    path
}

#[test]
fn file_source_reads_json_array() {
    let path = temp_dataset(
        "valid.json",
        r#"[{"Time": "36:50", "Year": 1995, "Doping": "EPO"}, {"Time": "37:15", "Year": 1996}]"#,
    );

    let source = FileDatasetSource::new(&path);
    let raw = source.load().expect("load");
    assert_eq!(raw.len(), 2);
    assert_eq!(raw[0].doping, "EPO");
    assert_eq!(source.describe(), path.display().to_string());

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn missing_file_is_a_load_error() {
    let source = FileDatasetSource::new("/definitely/not/here/cyclists.json");
    assert!(matches!(source.load(), Err(ScatterError::Load(_))));
}

#[test]
fn invalid_json_is_a_json_error() {
    let path = temp_dataset("broken.json", "[{\"Year\": 1995,");
    let result = FileDatasetSource::new(&path).load();
    assert!(matches!(result, Err(ScatterError::Json(_))));
    fs::remove_file(path).expect("cleanup");
}

#[test]
fn location_picks_source_kind() {
    let http = source_for_location(DEFAULT_DATASET_URL, LoadConfig::default());
    assert_eq!(http.describe(), DEFAULT_DATASET_URL);

    let file = source_for_location("data/cyclists.json", LoadConfig::default());
    assert_eq!(file.describe(), "data/cyclists.json");
}

#[test]
fn failed_fetch_is_retried_before_giving_up() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
    let addr = listener.local_addr().expect("listener addr");
    let accepted = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&accepted);
    thread::spawn(move || {
        for stream in listener.incoming() {
            counter.fetch_add(1, Ordering::SeqCst);
            drop(stream);
        }
    });

    let source = HttpDatasetSource::new(format!("http://{addr}/cyclist-data.json"))
        .with_load_config(LoadConfig {
            timeout_ms: 2_000,
            retries: 1,
        });
    let err = source.load().expect_err("connection is closed without a response");

    assert!(matches!(err, ScatterError::Load(_)));
    assert!(err.to_string().contains("after 2 attempts"), "{err}");
    assert_eq!(accepted.load(Ordering::SeqCst), 2);
}

#[test]
fn unreachable_host_reports_attempt_count() {
    let source = HttpDatasetSource::new("http://127.0.0.1:9/cyclist-data.json").with_load_config(
        LoadConfig {
            timeout_ms: 500,
            retries: 2,
        },
    );
    let err = source.load().expect_err("nothing listens on the discard port");
    assert!(matches!(err, ScatterError::Load(_)));
    assert!(err.to_string().contains("after 3 attempts"), "{err}");
}
