//! Client tests against a wiremock server: status translation, the `data`
//! envelope, search behavior, and geohash truncation on the request paths.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bom_core::{Client, Error, Location};

fn location_result_body() -> serde_json::Value {
    json!({
        "data": [
            {"id": "A-r1", "geohash": "r1", "state": "NSW", "name": "A", "postcode": "1"},
            {"id": "B-r2", "geohash": "r2", "state": "VIC", "name": "B", "postcode": "2"},
        ]
    })
}

#[tokio::test]
async fn empty_search_issues_no_request() {
    let server = MockServer::start().await;
    let client = Client::with_base_url(server.uri());

    let results = client.search_locations("").await.unwrap();

    assert!(results.is_empty());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn search_maps_results_in_server_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/locations"))
        .and(query_param("search", "A"))
        .respond_with(ResponseTemplate::new(200).set_body_json(location_result_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::with_base_url(server.uri());
    let results = client.search_locations("A").await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].id.as_deref(), Some("A-r1"));
    assert_eq!(results[0].geohash, "r1");
    assert_eq!(results[0].state.as_deref(), Some("NSW"));
    assert_eq!(results[0].name.as_deref(), Some("A"));
    assert_eq!(results[0].postcode.as_deref(), Some("1"));
    assert_eq!(results[1].geohash, "r2");
}

#[tokio::test]
async fn status_400_maps_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_string("no such geohash"))
        .mount(&server)
        .await;

    let client = Client::with_base_url(server.uri());
    let location = Location::from_geohash(&client, "xxxxxxx");

    match location.info().await {
        Err(Error::NotFound { body }) => assert_eq!(body, "no such geohash"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn status_500_maps_to_request_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = Client::with_base_url(server.uri());

    match client.search_locations("Sydney").await {
        Err(Error::Request { status, body }) => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected Request, got {other:?}"),
    }
}

#[tokio::test]
async fn info_and_warnings_use_the_full_geohash() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/locations/r3gk01s"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": "Cordeaux Heights-r3gk01s",
                "geohash": "r3gk01s",
                "state": "NSW",
                "name": "Cordeaux Heights",
                "has_wave": true,
                "latitude": -34.44,
                "longitude": 150.85,
                "timezone": "Australia/Sydney",
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/locations/r3gk01s/warnings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": "NSW_GW013",
                "geohash": "r3gk01s",
                "type": "gale_warning",
                "title": "Gale Warning",
                "issue_time": "2022-05-13T15:05:48Z",
                "expiry_time": "2022-05-14T15:05:48Z",
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::with_base_url(server.uri());
    let location = Location::from_geohash(&client, "r3gk01s");

    let info = location.info().await.unwrap();
    assert_eq!(info.geohash, "r3gk01s");
    assert_eq!(info.has_wave, Some(true));
    assert_eq!(info.marine_area_id, None);

    let warnings = location.warnings().await.unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].warning_type.as_deref(), Some("gale_warning"));
}

#[tokio::test]
async fn observations_and_forecasts_use_the_truncated_geohash() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/locations/r3gk01/observations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "gust": 30,
                "humidity": 71,
                "rain_since_9am": 0.0,
                "station": {"bom_id": "068228", "name": "Bellambi", "distance": 9},
                "temp": 17.2,
                "temp_feels_like": 15.8,
                "wind": {"direction": "SSW", "speed_kilometre": 13},
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/locations/r3gk01/forecasts/daily"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "date": "2022-05-14T14:00:00Z",
                "temp_min": 9,
                "temp_max": 17,
                "icon_descriptor": "mostly_sunny",
                "rain": {"amount": {"min": 0, "units": "mm"}, "chance": 5},
                "astronomical": {"sunrise_time": "2022-05-14T20:43:24Z"},
                "uv": {"category": "moderate", "max_index": 3},
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/locations/r3gk01/forecasts/3-hourly"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "time": "2022-05-13T18:00:00Z",
                "is_night": true,
                "temp": 12,
                "icon_descriptor": "shower",
                "rain": {"amount": {"min": 0, "max": 1.2, "units": "mm"}, "chance": 40},
                "wind": {"direction": "SW", "speed_kilometre": 20},
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    // Full 7-char geohash: the paths above only match its 6-char prefix.
    let client = Client::with_base_url(server.uri());
    let location = Location::from_geohash(&client, "r3gk01s");

    let obs = location.observations().await.unwrap();
    assert_eq!(obs.temp, Some(17.2));
    assert_eq!(obs.station.bom_id.as_deref(), Some("068228"));
    assert_eq!(obs.wind.speed, Some(13));

    let daily = location.forecast_daily().await.unwrap();
    assert_eq!(daily.len(), 1);
    assert_eq!(daily[0].temp_max, Some(17));
    assert_eq!(daily[0].rain.units.as_deref(), Some("mm"));

    let hourly = location.forecast_3_hourly().await.unwrap();
    assert_eq!(hourly.len(), 1);
    assert_eq!(hourly[0].is_night, Some(true));
}

#[tokio::test]
async fn missing_data_envelope_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"metadata": {}})))
        .mount(&server)
        .await;

    let client = Client::with_base_url(server.uri());
    let location = Location::from_geohash(&client, "r3gk01s");

    assert!(matches!(location.info().await, Err(Error::Malformed(_))));
}

#[tokio::test]
async fn missing_required_nested_object_is_malformed() {
    let server = MockServer::start().await;

    // Observation payload without the required `station` object.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "temp": 17.2,
                "wind": {"direction": "SSW", "speed_kilometre": 13},
            }
        })))
        .mount(&server)
        .await;

    let client = Client::with_base_url(server.uri());
    let location = Location::from_geohash(&client, "r3gk01s");

    match location.observations().await {
        Err(Error::Malformed(err)) => assert!(err.to_string().contains("station")),
        other => panic!("expected Malformed, got {other:?}"),
    }
}
