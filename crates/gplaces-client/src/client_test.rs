use super::*;

fn test_client(base_url: &str, api_key: Option<&str>) -> PlacesClient {
    let config = PlacesConfig {
        api_key: api_key.map(str::to_owned),
        base_url: base_url.to_owned(),
        ..PlacesConfig::default()
    };
    PlacesClient::new(&config).expect("client construction should not fail")
}

#[test]
fn endpoint_url_puts_key_first() {
    let client = test_client("https://maps.googleapis.com/maps/api/place", Some("test-key"));
    let url = client
        .endpoint_url("nearbysearch", &[("location", "1.5,2.5".to_owned())])
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://maps.googleapis.com/maps/api/place/nearbysearch/json?key=test-key&location=1.5%2C2.5"
    );
}

#[test]
fn endpoint_url_strips_trailing_slash() {
    let client = test_client("https://maps.googleapis.com/maps/api/place/", Some("k"));
    let url = client.endpoint_url("details", &[]).unwrap();
    assert_eq!(
        url.as_str(),
        "https://maps.googleapis.com/maps/api/place/details/json?key=k"
    );
}

#[test]
fn endpoint_url_encodes_special_characters() {
    let client = test_client("https://example.com", Some("k"));
    let url = client
        .endpoint_url("textsearch", &[("query", "fish & chips".to_owned())])
        .unwrap();
    assert!(
        url.as_str().contains("query=fish+%26+chips"),
        "query param should be percent-encoded: {url}"
    );
}

#[test]
fn endpoint_url_requires_api_key() {
    let client = test_client("https://example.com", None);
    let err = client.endpoint_url("nearbysearch", &[]).unwrap_err();
    assert!(matches!(err, PlacesError::MissingApiKey), "got: {err:?}");
}

#[test]
fn blank_api_key_counts_as_missing() {
    let client = test_client("https://example.com", Some("  "));
    let err = client.endpoint_url("nearbysearch", &[]).unwrap_err();
    assert!(matches!(err, PlacesError::MissingApiKey), "got: {err:?}");
}

#[test]
fn new_rejects_unparseable_base_url() {
    let config = PlacesConfig {
        base_url: "not a url".to_owned(),
        ..PlacesConfig::default()
    };
    let result = PlacesClient::new(&config);
    assert!(
        matches!(result, Err(PlacesError::InvalidBaseUrl { .. })),
        "expected InvalidBaseUrl"
    );
}

#[test]
fn request_retry_overrides_client_default() {
    let client = test_client("https://example.com", Some("k"));
    let custom = RetryConfig::new(["OVER_QUERY_LIMIT"], 4, Duration::ZERO);
    assert_eq!(client.retry_for(Some(&custom)).max_retries, 4);
    assert_eq!(client.retry_for(None), &RetryConfig::default());
}

#[test]
fn debug_output_redacts_api_key() {
    let client = test_client("https://example.com", Some("super-secret-key"));
    let rendered = format!("{client:?}");
    assert!(!rendered.contains("super-secret-key"), "key leaked: {rendered}");
    assert!(rendered.contains("[redacted]"));
    assert!(rendered.contains("https://example.com/"));
}
