mod common;

use httpmock::prelude::*;
use myflix_api_models::Credentials;
use myflix_test_support::fixtures::{self, TOKEN};
use myflix_ui::core::toast::ToastKind;
use myflix_ui::error::ApiError;
use myflix_ui::features::login::api::log_in;
use myflix_ui::features::login::state::{LOGIN_SUCCESS, LoginState};
use myflix_ui::features::movies::api::load_movies;
use myflix_ui::features::movies::state::MovieListState;
use myflix_ui::features::navbar::state::logout;
use myflix_ui::features::profile::api::{delete_account, load_profile, save_profile};
use myflix_ui::features::profile::state::{
    ACCOUNT_DELETED, DeletionStep, PROFILE_UPDATED, ProfileState,
};
use myflix_ui::features::welcome::state::WelcomeDialog;
use serde_json::json;

use common::{client_for, signed_in_client, stored_favorites};

#[tokio::test]
async fn login_persists_user_and_token() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/login");
        then.status(200).json_body(fixtures::login_response("ann"));
    });

    let client = client_for(&server);
    let mut state = LoginState::default();
    state.form.username = "ann".to_string();
    state.form.password = "x".to_string();
    let credentials = state.begin().expect("valid form");
    let result = log_in(&client, &credentials).await;
    let notice = state.finish(&result);

    assert_eq!(notice.message, LOGIN_SUCCESS);
    assert!(state.is_done());
    assert_eq!(
        client.session().get().map(|user| user.username).as_deref(),
        Some("ann")
    );
    assert_eq!(client.session().token().as_deref(), Some(TOKEN));
}

#[tokio::test]
async fn rejected_login_stores_nothing() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/login");
        then.status(400).json_body(json!({ "message": "Incorrect username or password." }));
    });

    let client = client_for(&server);
    let err = log_in(
        &client,
        &Credentials {
            username: "ann".to_string(),
            password: "wrong".to_string(),
        },
    )
    .await
    .expect_err("rejected");
    assert!(err.is_request_failed());
    assert_eq!(client.session().get(), None);
    assert_eq!(client.session().token(), None);
}

#[tokio::test]
async fn movie_list_keeps_previous_movies_when_reload_fails() {
    let server = MockServer::start_async().await;
    let mut ok = server.mock(|when, then| {
        when.method(GET).path("/movies");
        then.status(200).json_body(fixtures::movies());
    });

    let client = signed_in_client(&server, &[]);
    let mut state = MovieListState::default();
    state.begin_load();
    assert!(state.finish_load(load_movies(&client).await).is_none());
    assert_eq!(state.movies.len(), 3);

    ok.delete();
    server.mock(|when, then| {
        when.method(GET).path("/movies");
        then.status(503);
    });
    state.begin_load();
    let notice = state
        .finish_load(load_movies(&client).await)
        .expect("failure toast");
    assert_eq!(notice.kind, ToastKind::Error);
    assert_eq!(state.movies.len(), 3);
}

#[tokio::test]
async fn profile_loads_only_favorite_movies() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/users/ann");
        then.status(200).json_body(fixtures::user("ann", &["m3", "m1"]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/movies");
        then.status(200).json_body(fixtures::movies());
    });

    let client = signed_in_client(&server, &[]);
    let mut state = ProfileState::default();
    state.begin_load();
    assert!(state.finish_load(load_profile(&client).await).is_none());

    let ids: Vec<&str> = state.favorites.iter().map(|movie| movie.id.as_str()).collect();
    assert_eq!(ids, vec!["m1", "m3"]);
    assert_eq!(state.title(), "ann's Profile");
    assert_eq!(state.form.birthday, "1990-04-12");
}

#[tokio::test]
async fn profile_update_replaces_stored_user() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/users/ann")
            .header("authorization", format!("Bearer {TOKEN}"))
            .json_body(json!({
                "username": "annie",
                "email": "annie@example.com",
                "birthday": "1990-04-12",
            }));
        then.status(200).json_body(fixtures::user("annie", &["m1"]));
    });

    let client = signed_in_client(&server, &["m1"]);
    let user = client.session().get().expect("signed in");
    let mut state = ProfileState::default();
    state.finish_load(Ok((user, Vec::new())));
    state.form.username = "annie".to_string();
    state.form.email = "annie@example.com".to_string();

    let (current, update) = state.begin_update().expect("valid form");
    let result = save_profile(&client, &current, &update).await;
    let notice = state.finish_update(result);

    mock.assert();
    assert_eq!(notice.message, PROFILE_UPDATED);
    assert_eq!(
        client.session().get().map(|user| user.username).as_deref(),
        Some("annie")
    );
    assert_eq!(client.session().token().as_deref(), Some(TOKEN));
}

#[tokio::test]
async fn account_deletion_clears_session() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(DELETE).path("/users/ann");
        then.status(200).body("ann was deleted.");
    });

    let client = signed_in_client(&server, &["m1"]);
    let user = client.session().get().expect("signed in");
    let mut state = ProfileState::default();
    state.finish_load(Ok((user, Vec::new())));
    state.request_delete();
    let username = state.confirm_delete().expect("confirmed");

    let result = delete_account(&client, &username).await;
    let notice = state.finish_delete(&result);
    assert_eq!(notice.message, ACCOUNT_DELETED);
    assert_eq!(state.deletion, DeletionStep::Deleted);
    assert_eq!(client.session().get(), None);
    assert_eq!(client.session().token(), None);
    assert!(stored_favorites(&client).is_empty());
}

#[tokio::test]
async fn failed_deletion_keeps_session() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(DELETE).path("/users/ann");
        then.status(500);
    });

    let client = signed_in_client(&server, &[]);
    let err = delete_account(&client, "ann").await.expect_err("rejected");
    assert!(matches!(err, ApiError::RequestFailed { status: Some(500), .. }));
    assert!(client.session().get().is_some());
}

#[tokio::test]
async fn logout_resets_session_and_welcome_dialog() {
    let server = MockServer::start_async().await;
    let client = signed_in_client(&server, &["m1"]);
    let mut welcome = WelcomeDialog::for_session(client.session());
    welcome.toggle_dont_show();
    welcome.close(client.session()).expect("flag written");
    assert!(!WelcomeDialog::for_session(client.session()).open);

    logout(client.session());
    assert_eq!(client.session().get(), None);
    assert_eq!(client.session().token(), None);
    assert!(WelcomeDialog::for_session(client.session()).open);
}
