//! Canned JSON payloads shaped like the myFlix API responses.

use serde_json::{Value, json};

/// Token returned by [`login_response`].
pub const TOKEN: &str = "t1";

/// A single movie payload with embedded genre and director.
#[must_use]
pub fn movie(id: &str, title: &str) -> Value {
    json!({
        "_id": id,
        "title": title,
        "description": format!("{title} synopsis."),
        "genre": { "name": "Drama", "description": "Serious stories." },
        "director": {
            "name": "Jane Doe",
            "bio": "Filmmaker.",
            "birth": "1960-01-01",
            "death": null
        },
        "imagePath": format!("https://img.example/{id}.jpg"),
        "featured": false
    })
}

/// Three movies, `m1` through `m3`.
#[must_use]
pub fn movies() -> Value {
    json!([
        movie("m1", "Alien"),
        movie("m2", "Blade Runner"),
        movie("m3", "Gladiator"),
    ])
}

/// A user profile payload.
#[must_use]
pub fn user(username: &str, favorites: &[&str]) -> Value {
    json!({
        "_id": format!("u-{username}"),
        "username": username,
        "email": format!("{username}@example.com"),
        "birthday": "1990-04-12T00:00:00.000Z",
        "favorites": favorites,
    })
}

/// Login response for `username` with an empty favorites list and [`TOKEN`].
#[must_use]
pub fn login_response(username: &str) -> Value {
    json!({
        "user": user(username, &[]),
        "token": TOKEN,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movies_fixture_has_unique_ids() {
        let movies = movies();
        let ids: Vec<&str> = movies
            .as_array()
            .map(|list| list.iter().filter_map(|m| m["_id"].as_str()).collect())
            .unwrap_or_default();
        assert_eq!(ids, vec!["m1", "m2", "m3"]);
    }

    #[test]
    fn login_fixture_embeds_token() {
        let login = login_response("ann");
        assert_eq!(login["token"], TOKEN);
        assert_eq!(login["user"]["username"], "ann");
        assert_eq!(login["user"]["favorites"], json!([]));
    }
}
