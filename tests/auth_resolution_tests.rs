use chrono::{Duration, Utc};
use recotem_cli::auth::{AuthResolver, Credential};
use recotem_cli::client::RecotemClient;
use recotem_cli::config::models::RecotemConfig;
use recotem_cli::error::Error;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn jwt_config(url: &str, expires_in: Duration) -> RecotemConfig {
    RecotemConfig {
        access_token: "old-access".to_string(),
        refresh_token: "refresh".to_string(),
        expires_at: Some(Utc::now() + expires_in),
        ..RecotemConfig::new(url)
    }
}

#[tokio::test]
async fn test_api_key_wins_without_touching_the_server() {
    let server = MockServer::start().await;
    let client = RecotemClient::new(&server.uri()).unwrap();
    let mut config = RecotemConfig {
        api_key: "rk_live_1".to_string(),
        token: "legacy".to_string(),
        ..jwt_config(&server.uri(), Duration::seconds(-10))
    };

    let resolved = AuthResolver::default()
        .resolve(&mut config, &client)
        .await
        .unwrap();
    assert_eq!(resolved.credential, Credential::ApiKey("rk_live_1".to_string()));
    assert!(!resolved.refreshed);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_valid_jwt_is_used_as_is() {
    let server = MockServer::start().await;
    let client = RecotemClient::new(&server.uri()).unwrap();
    let mut config = jwt_config(&server.uri(), Duration::minutes(4));

    let resolved = AuthResolver::default()
        .resolve(&mut config, &client)
        .await
        .unwrap();
    assert_eq!(resolved.credential, Credential::Bearer("old-access".to_string()));
    assert!(!resolved.refreshed);
}

#[tokio::test]
async fn test_expiring_jwt_is_refreshed_first() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/token/refresh/"))
        .and(body_json(json!({"refresh": "refresh"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "new-access"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/project/"))
        .and(header("Authorization", "Bearer new-access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = RecotemClient::new(&server.uri()).unwrap();
    // Inside the 30 second grace window.
    let mut config = jwt_config(&server.uri(), Duration::seconds(20));

    let resolved = AuthResolver::default()
        .resolve(&mut config, &client)
        .await
        .unwrap();
    assert!(resolved.refreshed);
    assert_eq!(config.access_token, "new-access");
    assert_eq!(config.refresh_token, "refresh");
    assert!(!config.is_token_expired());

    let projects = client
        .with_credential(resolved.credential)
        .list_projects(None, None)
        .await
        .unwrap();
    assert!(projects.is_empty());
}

#[tokio::test]
async fn test_rejected_refresh_asks_for_login() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/token/refresh/"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(r#"{"detail":"Token is blacklisted"}"#),
        )
        .mount(&server)
        .await;

    let client = RecotemClient::new(&server.uri()).unwrap();
    let mut config = jwt_config(&server.uri(), Duration::minutes(-5));

    let err = AuthResolver::default()
        .resolve(&mut config, &client)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::TokenRefresh { .. }));
    assert!(err.to_string().contains("please login again"));
    assert_eq!(config.access_token, "old-access");
}

#[tokio::test]
async fn test_legacy_token_is_last_resort() {
    let server = MockServer::start().await;
    let client = RecotemClient::new(&server.uri()).unwrap();
    let mut config = RecotemConfig {
        token: "legacy".to_string(),
        ..RecotemConfig::new(server.uri())
    };

    let resolved = AuthResolver::default()
        .resolve(&mut config, &client)
        .await
        .unwrap();
    assert_eq!(resolved.credential, Credential::Token("legacy".to_string()));
}

#[tokio::test]
async fn test_no_credentials_is_not_authenticated() {
    let client = RecotemClient::new("http://127.0.0.1:9").unwrap();
    let mut config = RecotemConfig::new("http://127.0.0.1:9");

    let err = AuthResolver::default()
        .resolve(&mut config, &client)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotAuthenticated));
}
