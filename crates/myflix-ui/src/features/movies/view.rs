//! Movie list screen.

use myflix_api_models::Movie;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

use crate::app::{ApiCtx, Route, notify, sync_session};
use crate::components::info_dialog::InfoDialogView;
use crate::components::movie_card::MovieCard;
use crate::components::scroll_strip::ScrollStrip;
use crate::core::store::AppStore;
use crate::core::toast::Notice;
use crate::features::favorites::api::toggle_favorite;
use crate::features::movies::api::load_movies;
use crate::features::movies::dialogs::InfoRequest;
use crate::features::movies::state::MovieListState;
use crate::features::welcome::view::WelcomeNotice;

#[function_component(MoviesScreen)]
pub(crate) fn movies_screen() -> Html {
    let ctx = use_context::<ApiCtx>();
    let user = use_selector(|store: &AppStore| store.user.clone());
    let state = use_mut_ref(MovieListState::default);
    let redraw = use_force_update();

    {
        let ctx = ctx.clone();
        let state = state.clone();
        let redraw = redraw.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(ctx) = ctx {
                    if state.borrow_mut().begin_load() {
                        redraw.force_update();
                        spawn_local(async move {
                            let result = load_movies(&ctx.client).await;
                            if let Some(notice) = state.borrow_mut().finish_load(result) {
                                notify(notice);
                            }
                            redraw.force_update();
                        });
                    }
                }
                || ()
            },
            (),
        );
    }

    let Some(ctx) = ctx else {
        return html! {};
    };
    if ctx.session().get().is_none() {
        return html! { <Redirect<Route> to={Route::Welcome} /> };
    }

    let on_toggle_favorite = {
        let ctx = ctx.clone();
        Callback::from(move |movie_id: String| {
            let ctx = ctx.clone();
            spawn_local(async move {
                match toggle_favorite(&ctx.client, &movie_id).await {
                    Ok(change) => notify(change.notice()),
                    Err(err) => notify(Notice::error(err.to_string())),
                }
                sync_session(&ctx);
            });
        })
    };

    let on_info = {
        let state = state.clone();
        let redraw = redraw.clone();
        Callback::from(move |(movie, request): (Movie, InfoRequest)| {
            if let Some(dialog) = request.from_movie(&movie) {
                state.borrow_mut().open_dialog(dialog);
                redraw.force_update();
            }
        })
    };

    let on_close_dialog = {
        let state = state.clone();
        let redraw = redraw.clone();
        Callback::from(move |()| {
            state.borrow_mut().close_dialog();
            redraw.force_update();
        })
    };

    let snapshot = state.borrow().clone();
    let is_favorite = |movie: &Movie| {
        (*user)
            .as_ref()
            .is_some_and(|user| user.has_favorite(&movie.id))
    };

    html! {
        <section class="movies">
            <WelcomeNotice />
            if snapshot.phase.is_pending() && snapshot.movies.is_empty() {
                <p class="loading">{"Loading movies..."}</p>
            }
            <ScrollStrip>
                {for snapshot.movies.iter().map(|movie| html! {
                    <MovieCard
                        key={movie.id.clone()}
                        movie={movie.clone()}
                        favorite={is_favorite(movie)}
                        on_toggle_favorite={on_toggle_favorite.clone()}
                        on_info={on_info.clone()}
                    />
                })}
            </ScrollStrip>
            if let Some(dialog) = snapshot.dialog {
                <InfoDialogView {dialog} on_close={on_close_dialog} />
            }
        </section>
    }
}
