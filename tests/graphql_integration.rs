//! Integration tests against a live GraphQL endpoint.
//!
//! These tests require a running Dgraph-style endpoint with the advisory
//! schema loaded and one seeded city. Run with:
//! `WAYFARE_TEST_CITY_ID=0x... cargo test --features integration --test graphql_integration`

#![cfg(feature = "integration")]

use std::sync::Arc;

use serial_test::serial;
use wayfare::graph::backends::http::HttpClient;
use wayfare::models::Advisory;
use wayfare::repositories::AdvisoryRepository;

fn endpoint() -> String {
    std::env::var("WAYFARE_GRAPHQL_URL")
        .unwrap_or_else(|_| "http://localhost:8080/graphql".to_string())
}

/// The tests need an existing city to hang advisories off; creating cities
/// is outside this layer, so the id comes from the environment.
fn test_city() -> String {
    std::env::var("WAYFARE_TEST_CITY_ID")
        .expect("WAYFARE_TEST_CITY_ID must point at a seeded city")
}

fn create_repository() -> AdvisoryRepository {
    let mut client = HttpClient::new(endpoint());
    if let Ok(token) = std::env::var("WAYFARE_GRAPHQL_TOKEN") {
        client = client.with_token(token);
    }
    AdvisoryRepository::new(Arc::new(client))
}

fn test_advisory(country: &str, code: &str, score: f64) -> Advisory {
    Advisory {
        id: None,
        continent: "Asia".to_string(),
        country: country.to_string(),
        country_code: code.to_string(),
        last_updated: "2021-01-01".to_string(),
        message: "integration test advisory".to_string(),
        score,
        source: "integration-test".to_string(),
    }
}

// All tests mutate the same seeded city, so they run serially
#[serial]
mod endpoint_tests {
    use super::*;

    #[tokio::test]
    async fn test_replace_then_one_roundtrip() {
        let repository = create_repository();
        let city_id = test_city();

        let replaced = repository
            .replace(&city_id, test_advisory("Japan", "JP", 1.0))
            .await
            .expect("replace failed");
        assert!(replaced.id.is_some());

        let fetched = repository.one(&city_id).await.expect("one failed");
        assert_eq!(fetched.id, replaced.id);
        assert_eq!(fetched.country, "Japan");
        assert_eq!(fetched.score, 1.0);
    }

    #[tokio::test]
    async fn test_replace_swaps_ids() {
        let repository = create_repository();
        let city_id = test_city();

        let first = repository
            .replace(&city_id, test_advisory("Japan", "JP", 1.0))
            .await
            .expect("first replace failed");
        let second = repository
            .replace(&city_id, test_advisory("Laos", "LA", 4.0))
            .await
            .expect("second replace failed");

        assert_ne!(first.id, second.id);

        let fetched = repository.one(&city_id).await.expect("one failed");
        assert_eq!(fetched.id, second.id);
        assert_eq!(fetched.country, "Laos");
    }

    #[tokio::test]
    async fn test_one_unknown_city_is_not_found() {
        let repository = create_repository();

        let err = repository.one("0xffffffffffffffff").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
