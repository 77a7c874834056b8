/// Tests for the reqwest-based API client against a local mock server
mod test_utilities;

use serde_json::json;
use sysdig_sbom_export::prelude::*;
use test_utilities::mock_api::{received_targets, runtime, start_server};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> SysdigClient {
    SysdigClient::new(ApiEndpoints::from_base_url(&server.uri()), "test-token").unwrap()
}

#[test]
fn test_runtime_results_request_shape() {
    let rt = runtime();
    let server = start_server(&rt);
    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/v1/runtime-results"))
            .and(query_param("limit", "1000"))
            .and(query_param("offset", "2000"))
            .and(header("authorization", "Bearer test-token"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"sbomId": "a"}, {"sbomId": "b", "mainAssetName": "nginx"}]
            })))
            .expect(1)
            .mount(&server),
    );
    let client = client_for(&server);

    let page = client.fetch_runtime_results_page(1000, 2000).unwrap();

    let ids: Vec<&str> = page.entries().iter().map(|e| e.sbom_id()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(
        received_targets(&rt, &server),
        vec!["/v1/runtime-results?limit=1000&offset=2000"]
    );
}

#[test]
fn test_runtime_results_non_200_is_fatal_error() {
    let rt = runtime();
    let server = start_server(&rt);
    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/v1/runtime-results"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"message": "Unauthorized"})),
            )
            .expect(1)
            .mount(&server),
    );
    let client = client_for(&server);

    let err = client.fetch_runtime_results_page(1000, 0).unwrap_err();

    match err.downcast_ref::<SbomError>() {
        Some(SbomError::RuntimeResultsFetchError { status, body }) => {
            assert_eq!(*status, 401);
            assert!(body.contains("Unauthorized"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_runtime_results_invalid_json_is_error() {
    let rt = runtime();
    let server = start_server(&rt);
    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/v1/runtime-results"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server),
    );
    let client = client_for(&server);

    let err = client.fetch_runtime_results_page(1000, 0).unwrap_err();
    assert!(err.to_string().contains("Failed to parse runtime results page"));
}

#[test]
fn test_fetch_sbom_retrieved() {
    let rt = runtime();
    let server = start_server(&rt);
    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/v1beta1/sboms"))
            .and(query_param("bomIdentifier", "sha256:abc"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"bomFormat": "CycloneDX", "components": []})),
            )
            .expect(1)
            .mount(&server),
    );
    let client = client_for(&server);

    let outcome = client.fetch_sbom("sha256:abc").unwrap();

    assert_eq!(
        outcome,
        SbomFetchOutcome::Retrieved(json!({"bomFormat": "CycloneDX", "components": []}))
    );
    assert_eq!(
        received_targets(&rt, &server),
        vec!["/v1beta1/sboms?bomIdentifier=sha256%3Aabc"]
    );
}

#[test]
fn test_fetch_sbom_not_found_is_rejected_outcome() {
    let rt = runtime();
    let server = start_server(&rt);
    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/v1beta1/sboms"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({})))
            .expect(1)
            .mount(&server),
    );
    let client = client_for(&server);

    let outcome = client.fetch_sbom("x").unwrap();
    assert_eq!(outcome, SbomFetchOutcome::Rejected { status: 404 });
}

#[test]
fn test_fetch_sbom_other_2xx_is_rejected_outcome() {
    let rt = runtime();
    let server = start_server(&rt);
    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/v1beta1/sboms"))
            .respond_with(ResponseTemplate::new(202))
            .mount(&server),
    );
    let client = client_for(&server);

    let outcome = client.fetch_sbom("x").unwrap();
    assert_eq!(outcome, SbomFetchOutcome::Rejected { status: 202 });
}

#[test]
fn test_fetch_sbom_invalid_json_is_error() {
    let rt = runtime();
    let server = start_server(&rt);
    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/v1beta1/sboms"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server),
    );
    let client = client_for(&server);

    assert!(client.fetch_sbom("x").is_err());
}

#[test]
fn test_connection_refused_is_error() {
    // Bind then drop to obtain a port nothing listens on
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let endpoints = ApiEndpoints::from_base_url(&format!("http://127.0.0.1:{}", port));
    let client = SysdigClient::new(endpoints, "test-token").unwrap();

    assert!(client.fetch_runtime_results_page(1000, 0).is_err());
    let err = client.fetch_sbom("x").unwrap_err();
    assert!(err.to_string().contains("Failed to request SBOM x"));
}
