//! Integration tests for `PlacesClient::find_spot`.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gplaces_client::{ApiStatus, DetailsRequest, PlacesClient, PlacesConfig, RetryConfig};

fn test_client(base_url: &str) -> PlacesClient {
    let config = PlacesConfig {
        api_key: Some("test-key".to_owned()),
        base_url: base_url.to_owned(),
        page_token_delay_ms: 0,
        ..PlacesConfig::default()
    };
    PlacesClient::new(&config).expect("client construction should not fail")
}

fn details_body() -> serde_json::Value {
    json!({
        "status": "OK",
        "result": {
            "name": "Google Sydney",
            "reference": "CnRkAAAA",
            "place_id": "ChIJN1t_tDeuEmsRUsoyG83frY4",
            "formatted_address": "48 Pirrama Rd, Pyrmont NSW 2009, Australia",
            "formatted_phone_number": "(02) 9374 4000",
            "geometry": { "location": { "lat": -33.866_651, "lng": 151.195_827 } },
            "address_components": [
                { "long_name": "48", "short_name": "48", "types": ["street_number"] },
                { "long_name": "Pirrama Road", "short_name": "Pirrama Rd", "types": ["route"] },
                { "long_name": "Pyrmont", "short_name": "Pyrmont", "types": ["locality", "political"] },
                { "long_name": "New South Wales", "short_name": "NSW", "types": ["administrative_area_level_1", "political"] },
                { "long_name": "Australia", "short_name": "AU", "types": ["country", "political"] },
                { "long_name": "2009", "short_name": "2009", "types": ["postal_code"] }
            ],
            "rating": 4.4,
            "url": "https://maps.google.com/?cid=10281119596374313554",
            "website": "https://www.google.com.au/",
            "reviews": [
                {
                    "author_name": "Jane",
                    "text": "Great views.",
                    "time": 1_325_376_000,
                    "aspects": [{ "rating": 3, "type": "overall" }]
                }
            ]
        }
    })
}

#[tokio::test]
async fn find_spot_maps_details_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .and(query_param("key", "test-key"))
        .and(query_param("reference", "CnRkAAAA"))
        .and(query_param("language", "en"))
        .and(query_param("sensor", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(details_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let spot = client
        .find_spot(&DetailsRequest::new("CnRkAAAA").with_language("en"))
        .await
        .expect("details lookup should succeed");

    assert_eq!(spot.name.as_deref(), Some("Google Sydney"));
    assert_eq!(spot.street_number.as_deref(), Some("48"));
    assert_eq!(spot.street.as_deref(), Some("Pirrama Road"));
    assert_eq!(spot.city.as_deref(), Some("Pyrmont"));
    assert_eq!(spot.region.as_deref(), Some("New South Wales"));
    assert_eq!(spot.postal_code.as_deref(), Some("2009"));
    assert_eq!(spot.country.as_deref(), Some("Australia"));
    assert_eq!(spot.cid, Some(10_281_119_596_374_313_554));
    assert_eq!(spot.reviews.len(), 1);
    assert_eq!(spot.reviews[0].rating, Some(3));
    assert_eq!(spot.reviews[0].time, 1_325_376_000);
}

#[tokio::test]
async fn find_spot_without_language_omits_it() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .and(query_param("reference", "CnRkAAAA"))
        .and(query_param_is_missing("language"))
        .respond_with(ResponseTemplate::new(200).set_body_json(details_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    client
        .find_spot(&DetailsRequest::new("CnRkAAAA"))
        .await
        .expect("details lookup should succeed");
}

#[tokio::test]
async fn find_spot_without_result_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "OK" })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .find_spot(&DetailsRequest::new("gone"))
        .await
        .expect_err("a success envelope without a result is not a spot");

    assert_eq!(err.api_status(), Some(&ApiStatus::NotFound));
}

#[tokio::test]
async fn find_spot_surfaces_invalid_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "INVALID_REQUEST",
            "error_message": "Missing the reference parameter."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .find_spot(&DetailsRequest::new(""))
        .await
        .expect_err("INVALID_REQUEST is terminal");

    assert_eq!(err.api_status(), Some(&ApiStatus::InvalidRequest));
    assert!(err.to_string().contains("Missing the reference parameter."));
}

#[tokio::test]
async fn find_spot_retries_unknown_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "UNKNOWN_ERROR"
        })))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/details/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(details_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let request = DetailsRequest::new("CnRkAAAA").with_retry(RetryConfig::new(
        ["UNKNOWN_ERROR"],
        1,
        Duration::ZERO,
    ));
    let spot = client
        .find_spot(&request)
        .await
        .expect("retry should recover");
    assert_eq!(spot.name.as_deref(), Some("Google Sydney"));
}
