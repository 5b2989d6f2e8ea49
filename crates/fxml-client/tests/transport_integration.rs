//! Wire-level integration tests against a mock FlightXML2 server

use fxml_client::transport::Transport;
use fxml_client::{AlertSpec, FlightScheduleQuery, FlightXmlClient, SearchQuery};
use fxml_core::{Config, Endpoint, Error, MissingResultPolicy};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> Config {
    Config {
        username: Some("joe".to_string()),
        api_key: Some("abc123".to_string()),
        base_url: server.uri(),
        ..Config::default()
    }
}

fn client_for(server: &MockServer) -> FlightXmlClient {
    FlightXmlClient::new(config_for(server)).expect("Failed to create client")
}

#[tokio::test]
async fn test_aircraft_type_unwraps_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/AircraftType"))
        .and(body_string_contains("type=GALX"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "AircraftTypeResult": {
                "manufacturer": "IAI",
                "type": "Gulfstream G200",
                "description": "twin-jet"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let info = client.aircraft().aircraft_type("GALX").await.expect("Request failed");
    assert_eq!(info.manufacturer, "IAI");
    assert_eq!(info.aircraft_type, "Gulfstream G200");
    assert_eq!(info.description, "twin-jet");
}

#[tokio::test]
async fn test_raw_call_passes_full_envelope_through() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/AircraftType"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "AircraftTypeResult": { "manufacturer": "IAI" }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = vec![("type".to_string(), "GALX".to_string())];
    let envelope = client.raw_call(Endpoint::AircraftType, &params).await.expect("Request failed");
    assert_eq!(envelope["AircraftTypeResult"]["manufacturer"], "IAI");
}

#[tokio::test]
async fn test_get_flight_id_uses_capitalized_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/GetFlightID"))
        .and(body_string_contains("ident=N415PW"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "GetFlightIDResult": "N415PW-1457118526-1-0"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let id = client.flights().get_flight_id("N415PW", 1_457_118_526).await.expect("Request failed");
    assert_eq!(id, "N415PW-1457118526-1-0");
}

#[tokio::test]
async fn test_challenge_is_answered_with_stored_pair() {
    let server = MockServer::start().await;

    // The authorized retry matches first; the bare first attempt falls
    // through to the 401 challenge.
    Mock::given(method("POST"))
        .and(path("/AllAirlines"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "AllAirlinesResult": { "data": ["UAL", "SWA"] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/AllAirlines"))
        .respond_with(ResponseTemplate::new(401).set_body_string("challenge"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let airlines = client.airlines().all_airlines().await.expect("Request failed");
    assert_eq!(airlines.data, vec!["UAL", "SWA"]);
}

#[tokio::test]
async fn test_unset_pair_never_answers_challenge() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/AllAirlines"))
        .respond_with(ResponseTemplate::new(401).set_body_string("AUTH DENIED"))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config { base_url: server.uri(), ..Config::default() };
    let client = FlightXmlClient::new(config).expect("Failed to create client");
    let err = client.airlines().all_airlines().await.unwrap_err();
    assert!(matches!(err, Error::Unauthorized { code: 401, .. }));
    assert_eq!(err.response_text(), Some("AUTH DENIED"));
}

#[tokio::test]
async fn test_status_classification() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Metar"))
        .respond_with(ResponseTemplate::new(410).set_body_string("no such method"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/Taf"))
        .respond_with(ResponseTemplate::new(500).set_body_string("server fell over"))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let err = client.weather().metar("KSFO").await.unwrap_err();
    assert!(matches!(err, Error::InvalidRequestUri { code: 410, .. }));
    assert_eq!(err.response_text(), Some("no such method"));

    let err = client.weather().taf("KSFO").await.unwrap_err();
    assert!(matches!(err, Error::BadRequest { code: 500, .. }));
    assert_eq!(err.status_code(), Some(500));
}

#[tokio::test]
async fn test_malformed_body_is_a_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Metar"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.weather().metar("KSFO").await.unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
    assert_eq!(err.response_text(), Some("<html>not json</html>"));
}

#[tokio::test]
async fn test_missing_result_lenient_yields_null() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Metar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unrelated": 1})))
        .mount(&server)
        .await;

    let transport = Transport::new(&config_for(&server)).expect("Failed to create transport");
    let payload: serde_json::Value =
        transport.call(Endpoint::Metar, &[]).await.expect("Request failed");
    assert!(payload.is_null());
}

#[tokio::test]
async fn test_missing_result_lenient_typed_decode_fails() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Metar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unrelated": 1})))
        .mount(&server)
        .await;

    // A String payload cannot absorb the lenient null, so the typed
    // surface reports a decode failure rather than a missing field.
    let client = client_for(&server);
    let err = client.weather().metar("KSFO").await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn test_missing_result_strict_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Metar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unrelated": 1})))
        .mount(&server)
        .await;

    let config = Config {
        missing_result: MissingResultPolicy::Strict,
        ..config_for(&server)
    };
    let client = FlightXmlClient::new(config).expect("Failed to create client");
    let err = client.weather().metar("KSFO").await.unwrap_err();
    assert!(matches!(err, Error::MissingResult(field) if field == "MetarResult"));
}

#[tokio::test]
async fn test_delete_alert_empty_id_issues_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/DeleteAlert"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"DeleteAlertResult": 1})))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.alerts().delete_alert("").await.unwrap_err();
    assert!(matches!(err, Error::MissingAlertId));
}

#[tokio::test]
async fn test_delete_alert_posts_identifier() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/DeleteAlert"))
        .and(body_string_contains("alert_id=4530"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"DeleteAlertResult": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.alerts().delete_alert("4530").await.expect("Request failed");
    assert_eq!(result, 1);
}

#[tokio::test]
async fn test_set_alert_posts_spec_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/SetAlert"))
        .and(body_string_contains("alert_id=0"))
        .and(body_string_contains("ident=N415PW"))
        .and(body_string_contains("enabled=true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"SetAlertResult": 4530})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let spec = AlertSpec::new().ident("N415PW").channels("16 e_departure e_arrival");
    let alert_id = client.alerts().set_alert(spec).await.expect("Request failed");
    assert_eq!(alert_id, 4530);
}

#[tokio::test]
async fn test_schedule_window_reaches_the_wire() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/AirlineFlightSchedules"))
        .and(body_string_contains("startDate=1442008560"))
        .and(body_string_contains("endDate=1442094960"))
        .and(body_string_contains("airline=SWA"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "AirlineFlightSchedulesResult": { "next_offset": -1, "data": [] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = FlightScheduleQuery::new()
        .start_date(1_442_008_560)
        .end_date(1_442_094_960)
        .airline("SWA");
    let schedules =
        client.airlines().airline_flight_schedules(query).await.expect("Request failed");
    assert!(schedules.data.is_empty());
}

#[tokio::test]
async fn test_search_query_grammar_reaches_the_wire() {
    let server = MockServer::start().await;

    // Form encoding turns the leading and separating spaces into '+'.
    Mock::given(method("POST"))
        .and(path("/Search"))
        .and(body_string_contains("-type+B77*"))
        .and(body_string_contains("-destination+KLAX"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "SearchResult": {
                "next_offset": -1,
                "aircraft": [{
                    "faFlightID": "UAL123-1457118526-1-0",
                    "ident": "UAL123",
                    "prefix": "",
                    "type": "B772",
                    "suffix": "",
                    "origin": "KSFO",
                    "destination": "KLAX",
                    "timeout": "ok",
                    "timestamp": 1457118526,
                    "departureTime": 1457118000,
                    "firstPositionTime": 1457118100,
                    "arrivalTime": 0,
                    "longitude": -122.0,
                    "latitude": 37.0,
                    "lowLongitude": -123.0,
                    "lowLatitude": 36.0,
                    "highLongitude": -121.0,
                    "highLatitude": 38.0,
                    "groundspeed": 480,
                    "altitude": 350,
                    "heading": 120,
                    "altitudeStatus": "",
                    "updateType": "TA",
                    "altitudeChange": "",
                    "waypoints": ""
                }]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = SearchQuery::new()
        .parameter("type", "B77*")
        .parameter("destination", "KLAX");
    let result = client.search().search(query).await.expect("Request failed");
    assert_eq!(result.aircraft.len(), 1);
    assert_eq!(result.aircraft[0].ident, "UAL123");
}

#[tokio::test]
async fn test_search_count() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/SearchCount"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"SearchCountResult": 7})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = SearchQuery::new().query("-destination KLAX");
    let count = client.search().search_count(query).await.expect("Request failed");
    assert_eq!(count, 7);
}

#[tokio::test]
async fn test_credentials_swapped_between_calls() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/AllAirports"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "AllAirportsResult": { "data": ["KSFO"] }
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/AllAirports"))
        .respond_with(ResponseTemplate::new(401).set_body_string("challenge"))
        .mount(&server)
        .await;

    let config = Config { base_url: server.uri(), ..Config::default() };
    let client = FlightXmlClient::new(config).expect("Failed to create client");

    // There is no pair to answer the challenge with yet.
    let err = client.airports().all_airports().await.unwrap_err();
    assert!(matches!(err, Error::Unauthorized { .. }));

    client.set_credentials(Some("joe".to_string()), Some("abc123".to_string()));
    let airports = client.airports().all_airports().await.expect("Request failed");
    assert_eq!(airports.data, vec!["KSFO"]);
}
