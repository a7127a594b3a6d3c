//! Informational dialogs opened from a movie card.

use myflix_api_models::{Director, Genre, Movie};

/// Title and body of an informational dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoDialog {
    /// Dialog heading.
    pub title: String,
    /// Dialog body text.
    pub content: String,
}

impl InfoDialog {
    /// Synopsis dialog for a movie.
    #[must_use]
    pub fn synopsis(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            content: non_empty_or(&movie.description, "No synopsis available."),
        }
    }

    /// Genre dialog.
    #[must_use]
    pub fn genre(genre: &Genre) -> Self {
        Self {
            title: genre.name.clone(),
            content: non_empty_or(&genre.description, "No description available."),
        }
    }

    /// Director dialog, with life years in the heading when known.
    #[must_use]
    pub fn director(director: &Director) -> Self {
        let title = director.lifespan().map_or_else(
            || director.name.clone(),
            |years| format!("{} ({years})", director.name),
        );
        Self {
            title,
            content: non_empty_or(&director.bio, "No biography available."),
        }
    }
}

/// Which informational dialog a card asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InfoRequest {
    /// Movie synopsis.
    Synopsis,
    /// Embedded genre.
    Genre,
    /// Embedded director.
    Director,
}

impl InfoRequest {
    /// Build the dialog from the movie's embedded data; `None` when the movie
    /// carries no such entry.
    #[must_use]
    pub fn from_movie(self, movie: &Movie) -> Option<InfoDialog> {
        match self {
            Self::Synopsis => Some(InfoDialog::synopsis(movie)),
            Self::Genre => movie.genre.as_ref().map(InfoDialog::genre),
            Self::Director => movie.director.as_ref().map(InfoDialog::director),
        }
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn director_heading_includes_years() {
        let director = Director {
            name: "Ridley Scott".to_string(),
            bio: "English director.".to_string(),
            birth: Some("1937".to_string()),
            death: None,
        };
        let dialog = InfoDialog::director(&director);
        assert_eq!(dialog.title, "Ridley Scott (b. 1937)");
        assert_eq!(dialog.content, "English director.");
    }

    #[test]
    fn requests_resolve_from_embedded_data() {
        let movie = Movie {
            id: "m1".to_string(),
            title: "Alien".to_string(),
            description: "In space.".to_string(),
            genre: None,
            director: None,
            image_path: None,
            featured: false,
        };
        let synopsis = InfoRequest::Synopsis.from_movie(&movie);
        assert_eq!(synopsis.map(|d| d.content).as_deref(), Some("In space."));
        assert_eq!(InfoRequest::Genre.from_movie(&movie), None);
    }

    #[test]
    fn empty_text_falls_back() {
        let genre = Genre {
            name: "Noir".to_string(),
            description: "  ".to_string(),
        };
        assert_eq!(InfoDialog::genre(&genre).content, "No description available.");
    }
}
