#![allow(dead_code)]

use httpmock::MockServer;
use myflix_api_models::User;
use myflix_test_support::fixtures::{self, TOKEN};
use myflix_ui::config::ClientConfig;
use myflix_ui::core::session::SessionStore;
use myflix_ui::services::api::ApiClient;

pub fn client_for(server: &MockServer) -> ApiClient {
    let config = ClientConfig::new(&server.base_url()).expect("mock server URL is valid");
    ApiClient::new(&config, SessionStore::in_memory()).expect("client builds")
}

pub fn signed_in_client(server: &MockServer, favorites: &[&str]) -> ApiClient {
    let client = client_for(server);
    let user: User =
        serde_json::from_value(fixtures::user("ann", favorites)).expect("fixture decodes");
    client.session().set(&user, TOKEN).expect("session write");
    client
}

pub fn stored_favorites(client: &ApiClient) -> Vec<String> {
    client
        .session()
        .get()
        .map(|user| user.favorites)
        .unwrap_or_default()
}
