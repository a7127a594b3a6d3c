mod common;

use httpmock::prelude::*;
use myflix_test_support::fixtures::{self, TOKEN};
use myflix_ui::error::ApiError;
use myflix_ui::features::favorites::api::{FavoriteChange, toggle_favorite};

use common::{client_for, signed_in_client, stored_favorites};

#[tokio::test]
async fn add_then_remove_tracks_confirmed_changes() {
    let server = MockServer::start_async().await;
    let add = server.mock(|when, then| {
        when.method(POST)
            .path("/users/ann/movies/m1")
            .header("authorization", format!("Bearer {TOKEN}"));
        then.status(200).json_body(fixtures::user("ann", &["m1"]));
    });
    let remove = server.mock(|when, then| {
        when.method(DELETE).path("/users/ann/movies/m1");
        then.status(200).json_body(fixtures::user("ann", &[]));
    });

    let client = signed_in_client(&server, &[]);
    client.add_favorite("ann", "m1").await.expect("added");
    assert_eq!(stored_favorites(&client), vec!["m1".to_string()]);
    assert!(client.is_favorite("m1"));

    client.remove_favorite("ann", "m1").await.expect("removed");
    assert!(stored_favorites(&client).is_empty());
    assert!(!client.is_favorite("m1"));
    add.assert();
    remove.assert();
}

#[tokio::test]
async fn adding_twice_keeps_one_entry() {
    let server = MockServer::start_async().await;
    let add = server.mock(|when, then| {
        when.method(POST).path("/users/ann/movies/m1");
        then.status(200).json_body(fixtures::user("ann", &["m1"]));
    });

    let client = signed_in_client(&server, &[]);
    client.add_favorite("ann", "m1").await.expect("first add");
    client.add_favorite("ann", "m1").await.expect("second add");
    add.assert_calls(2);
    assert_eq!(stored_favorites(&client), vec!["m1".to_string()]);
}

#[tokio::test]
async fn failed_change_leaves_favorites_untouched() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/users/ann/movies/m3");
        then.status(500);
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/users/ann/movies/m2");
        then.status(404);
    });

    let client = signed_in_client(&server, &["m2"]);
    let err = client.add_favorite("ann", "m3").await.expect_err("server error");
    assert_eq!(err.status(), Some(500));
    let err = client
        .remove_favorite("ann", "m2")
        .await
        .expect_err("not found");
    assert_eq!(err.status(), Some(404));
    assert_eq!(stored_favorites(&client), vec!["m2".to_string()]);
}

#[tokio::test]
async fn stored_copy_updates_even_when_body_does_not_decode() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/users/ann/movies/m1");
        then.status(201).body("ok");
    });

    let client = signed_in_client(&server, &[]);
    let err = client.add_favorite("ann", "m1").await.expect_err("not JSON");
    assert!(matches!(err, ApiError::Decode { .. }));
    assert_eq!(stored_favorites(&client), vec!["m1".to_string()]);
}

#[tokio::test]
async fn toggle_picks_direction_from_session() {
    let server = MockServer::start_async().await;
    let remove = server.mock(|when, then| {
        when.method(DELETE).path("/users/ann/movies/m2");
        then.status(200).json_body(fixtures::user("ann", &[]));
    });
    let add = server.mock(|when, then| {
        when.method(POST).path("/users/ann/movies/m2");
        then.status(200).json_body(fixtures::user("ann", &["m2"]));
    });

    let client = signed_in_client(&server, &["m2"]);
    let change = toggle_favorite(&client, "m2").await.expect("removed");
    assert_eq!(change, FavoriteChange::Removed);
    let change = toggle_favorite(&client, "m2").await.expect("added");
    assert_eq!(change, FavoriteChange::Added);
    remove.assert();
    add.assert();
}

#[tokio::test]
async fn toggle_without_session_is_user_not_found() {
    let server = MockServer::start_async().await;
    let client = client_for(&server);
    let err = toggle_favorite(&client, "m1").await.expect_err("no session");
    assert!(matches!(err, ApiError::UserNotFound));
}

#[tokio::test]
async fn cleared_session_has_no_favorites() {
    let server = MockServer::start_async().await;
    let client = signed_in_client(&server, &["m1"]);
    assert!(client.is_favorite("m1"));
    client.session().clear();
    assert!(!client.is_favorite("m1"));
}

#[tokio::test]
async fn change_for_another_user_leaves_session_copy_alone() {
    let server = MockServer::start_async().await;
    let add = server.mock(|when, then| {
        when.method(POST).path("/users/bob/movies/m9");
        then.status(200).json_body(fixtures::user("bob", &["m9"]));
    });

    let client = signed_in_client(&server, &[]);
    let bob = client.add_favorite("bob", "m9").await.expect("added for bob");
    add.assert();
    assert_eq!(bob.favorites, vec!["m9".to_string()]);
    assert!(stored_favorites(&client).is_empty());
    assert!(!client.is_favorite("m9"));
}
