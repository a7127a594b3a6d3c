use myflix_api_models::Movie;
use yew::prelude::*;

use crate::features::movies::dialogs::InfoRequest;

#[derive(Properties, PartialEq)]
pub(crate) struct MovieCardProps {
    pub movie: Movie,
    pub favorite: bool,
    pub on_toggle_favorite: Callback<String>,
    pub on_info: Callback<(Movie, InfoRequest)>,
}

#[function_component(MovieCard)]
pub(crate) fn movie_card(props: &MovieCardProps) -> Html {
    let movie = &props.movie;
    let info = |request: InfoRequest| {
        let on_info = props.on_info.clone();
        let movie = movie.clone();
        Callback::from(move |_: MouseEvent| on_info.emit((movie.clone(), request)))
    };
    let genre = movie.genre.as_ref().map(|genre| genre.name.clone());
    let director = movie.director.as_ref().map(|director| director.name.clone());
    let toggle = {
        let on_toggle = props.on_toggle_favorite.clone();
        let id = movie.id.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(id.clone()))
    };

    html! {
        <article class="movie-card">
            if let Some(src) = movie.image_path.clone() {
                <img src={src} alt={movie.title.clone()} draggable="false" />
            }
            <h3>{movie.title.clone()}</h3>
            <div class="movie-card-actions">
                if let Some(name) = genre {
                    <button onclick={info(InfoRequest::Genre)}>{name}</button>
                }
                if let Some(name) = director {
                    <button onclick={info(InfoRequest::Director)}>{name}</button>
                }
                <button onclick={info(InfoRequest::Synopsis)}>{"Synopsis"}</button>
                <button
                    class={classes!("favorite", props.favorite.then_some("active"))}
                    aria-pressed={props.favorite.to_string()}
                    onclick={toggle}
                >
                    {if props.favorite { "Unfavorite" } else { "Favorite" }}
                </button>
            </div>
        </article>
    }
}
