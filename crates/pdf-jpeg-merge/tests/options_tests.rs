use pdf_jpeg_merge::*;
use std::path::PathBuf;

#[test]
fn test_default_options() {
    let options = MergeOptions::default();
    assert_eq!(options.folder, None);
    assert_eq!(options.files, None);
    assert_eq!(options.output, PathBuf::from("merged_pdf.pdf"));
    assert_eq!(options.output, PathBuf::from(DEFAULT_OUTPUT_FILE));
}

#[test]
fn test_no_input_is_usage_error() {
    let options = MergeOptions::default();
    assert!(matches!(options.input_source(), Err(MergeError::Usage)));
    assert!(matches!(options.validate(), Err(MergeError::Usage)));
}

#[test]
fn test_empty_strings_count_as_unset() {
    let options = MergeOptions {
        folder: Some(PathBuf::new()),
        files: Some(String::new()),
        ..Default::default()
    };
    assert!(matches!(options.input_source(), Err(MergeError::Usage)));
}

#[test]
fn test_folder_takes_precedence_over_files() {
    let options = MergeOptions {
        folder: Some(PathBuf::from("scans")),
        files: Some("a.jpg,b.jpg".to_string()),
        ..Default::default()
    };
    assert_eq!(
        options.input_source().unwrap(),
        InputSource::Folder(PathBuf::from("scans"))
    );
}

#[test]
fn test_files_used_when_folder_empty() {
    let options = MergeOptions {
        folder: Some(PathBuf::new()),
        files: Some("a.jpg, b.jpg".to_string()),
        ..Default::default()
    };
    assert_eq!(
        options.input_source().unwrap(),
        InputSource::List("a.jpg, b.jpg".to_string())
    );
}

#[test]
fn test_validation_empty_output() {
    let options = MergeOptions {
        files: Some("a.jpg".to_string()),
        output: PathBuf::new(),
        ..Default::default()
    };
    match options.validate() {
        Err(MergeError::Config(msg)) => assert!(msg.contains("No output file")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[test]
fn test_usage_error_message() {
    assert_eq!(
        MergeError::Usage.to_string(),
        "Please provide either a folder path or a list of JPEG files"
    );
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_full_options() {
    use tempfile::NamedTempFile;

    let options = MergeOptions {
        folder: Some(PathBuf::from("photos")),
        files: Some("x.jpg,y.jpg".to_string()),
        output: PathBuf::from("album.pdf"),
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    std::fs::write(path, serde_json::to_string_pretty(&options).unwrap()).unwrap();
    let loaded = MergeOptions::load(path).await.unwrap();

    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_partial_options_uses_defaults() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), r#"{ "files": "a.jpg" }"#).unwrap();

    let loaded = MergeOptions::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.files.as_deref(), Some("a.jpg"));
    assert_eq!(loaded.folder, None);
    assert_eq!(loaded.output, PathBuf::from(DEFAULT_OUTPUT_FILE));
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_invalid_json_is_config_error() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), b"not json").unwrap();

    let result = MergeOptions::load(temp_file.path()).await;
    assert!(matches!(result, Err(MergeError::Config(_))));
}
