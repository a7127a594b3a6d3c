//! Profile screen: edit form, favorites strip and account deletion.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::dialogs::confirm;
use myflix_api_models::Movie;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::{ApiCtx, Route, notify, sync_session};
use crate::components::info_dialog::InfoDialogView;
use crate::components::movie_card::MovieCard;
use crate::components::scroll_strip::ScrollStrip;
use crate::core::phase::SubmitRejected;
use crate::core::toast::Notice;
use crate::features::favorites::api::{FavoriteChange, remove_favorite};
use crate::features::movies::dialogs::{InfoDialog, InfoRequest};
use crate::features::profile::api::{delete_account, load_profile, save_profile};
use crate::features::profile::state::{DELETE_PROMPT, DeletionStep, ProfileForm, ProfileState};

type Shared = Rc<RefCell<ProfileState>>;

fn field_input(state: &Shared, apply: fn(&mut ProfileForm, String)) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |event: InputEvent| {
        let value = event.target_unchecked_into::<HtmlInputElement>().value();
        apply(&mut state.borrow_mut().form, value);
    })
}

#[function_component(ProfileScreen)]
pub(crate) fn profile_screen() -> Html {
    let ctx = use_context::<ApiCtx>();
    let navigator = use_navigator();
    let state = use_mut_ref(ProfileState::default);
    let info = use_state(|| None::<InfoDialog>);
    let redraw = use_force_update();

    {
        let ctx = ctx.clone();
        let state = state.clone();
        let redraw = redraw.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(ctx) = ctx {
                    if state.borrow_mut().begin_load() {
                        spawn_local(async move {
                            let result = load_profile(&ctx.client).await;
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
    if ctx.session().get().is_none() && state.borrow().deletion != DeletionStep::Deleted {
        return html! { <Redirect<Route> to={Route::Welcome} /> };
    }

    let on_username = field_input(&state, |form, value| form.username = value);
    let on_password = field_input(&state, |form, value| form.password = value);
    let on_email = field_input(&state, |form, value| form.email = value);
    let on_birthday = field_input(&state, |form, value| form.birthday = value);

    let on_submit = {
        let ctx = ctx.clone();
        let state = state.clone();
        let redraw = redraw.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let (current, update) = match state.borrow_mut().begin_update() {
                Ok(request) => request,
                Err(SubmitRejected::Busy) => return,
                Err(rejected) => {
                    notify(Notice::error(rejected.to_string()));
                    return;
                }
            };
            redraw.force_update();
            let ctx = ctx.clone();
            let state = state.clone();
            let redraw = redraw.clone();
            spawn_local(async move {
                let result = save_profile(&ctx.client, &current, &update).await;
                let notice = state.borrow_mut().finish_update(result);
                notify(notice);
                sync_session(&ctx);
                redraw.force_update();
            });
        })
    };

    let on_delete = {
        let ctx = ctx.clone();
        let state = state.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            state.borrow_mut().request_delete();
            if !confirm(DELETE_PROMPT) {
                state.borrow_mut().cancel_delete();
                return;
            }
            let Some(username) = state.borrow_mut().confirm_delete() else {
                return;
            };
            redraw.force_update();
            let ctx = ctx.clone();
            let state = state.clone();
            let redraw = redraw.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let result = delete_account(&ctx.client, &username).await;
                let notice = state.borrow_mut().finish_delete(&result);
                notify(notice);
                if result.is_ok() {
                    sync_session(&ctx);
                    if let Some(navigator) = navigator {
                        navigator.push(&Route::Welcome);
                    }
                } else {
                    redraw.force_update();
                }
            });
        })
    };

    let on_toggle_favorite = {
        let ctx = ctx.clone();
        let state = state.clone();
        let redraw = redraw.clone();
        Callback::from(move |movie_id: String| {
            let ctx = ctx.clone();
            let state = state.clone();
            let redraw = redraw.clone();
            spawn_local(async move {
                match remove_favorite(&ctx.client, &movie_id).await {
                    Ok(()) => {
                        state.borrow_mut().favorite_removed(&movie_id);
                        notify(FavoriteChange::Removed.notice());
                    }
                    Err(err) => notify(Notice::error(err.to_string())),
                }
                sync_session(&ctx);
                redraw.force_update();
            });
        })
    };

    let on_info = {
        let info = info.clone();
        Callback::from(move |(movie, request): (Movie, InfoRequest)| {
            info.set(request.from_movie(&movie));
        })
    };
    let on_close_info = {
        let info = info.clone();
        Callback::from(move |()| info.set(None))
    };

    let snapshot = state.borrow().clone();
    let busy = snapshot.save.is_pending() || snapshot.deletion == DeletionStep::Pending;
    html! {
        <section class="profile">
            <h1>{snapshot.title()}</h1>
            <form class="profile-form" onsubmit={on_submit}>
                <label>
                    {"Username"}
                    <input value={snapshot.form.username} oninput={on_username} required=true />
                </label>
                <label>
                    {"New password"}
                    <input type="password" value={snapshot.form.password} oninput={on_password} />
                </label>
                <label>
                    {"Email"}
                    <input type="email" value={snapshot.form.email} oninput={on_email} required=true />
                </label>
                <label>
                    {"Birthday"}
                    <input type="date" value={snapshot.form.birthday} oninput={on_birthday} />
                </label>
                <div class="profile-actions">
                    <button type="submit" disabled={busy}>{"Update profile"}</button>
                    <button type="button" class="danger" disabled={busy} onclick={on_delete}>
                        {"Delete account"}
                    </button>
                </div>
            </form>
            <h2>{"Favorite movies"}</h2>
            if snapshot.favorites.is_empty() {
                <p class="empty">{"No favorites yet."}</p>
            }
            <ScrollStrip>
                {for snapshot.favorites.iter().map(|movie| html! {
                    <MovieCard
                        key={movie.id.clone()}
                        movie={movie.clone()}
                        favorite={true}
                        on_toggle_favorite={on_toggle_favorite.clone()}
                        on_info={on_info.clone()}
                    />
                })}
            </ScrollStrip>
            if let Some(dialog) = (*info).clone() {
                <InfoDialogView {dialog} on_close={on_close_info} />
            }
        </section>
    }
}
