//! Login dialog component.

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::{ApiCtx, Route, notify, sync_session};
use crate::core::phase::SubmitRejected;
use crate::core::toast::Notice;
use crate::features::login::api::log_in;
use crate::features::login::state::LoginState;

#[derive(Properties, PartialEq)]
pub(crate) struct LoginDialogProps {
    pub on_close: Callback<()>,
}

#[function_component(LoginDialog)]
pub(crate) fn login_dialog(props: &LoginDialogProps) -> Html {
    let ctx = use_context::<ApiCtx>();
    let navigator = use_navigator();
    let state = use_mut_ref(LoginState::default);
    let redraw = use_force_update();

    let on_username = {
        let state = state.clone();
        Callback::from(move |event: InputEvent| {
            state.borrow_mut().form.username = event.target_unchecked_into::<HtmlInputElement>().value();
        })
    };
    let on_password = {
        let state = state.clone();
        Callback::from(move |event: InputEvent| {
            state.borrow_mut().form.password = event.target_unchecked_into::<HtmlInputElement>().value();
        })
    };

    let on_submit = {
        let state = state.clone();
        let redraw = redraw.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(ctx) = ctx.clone() else { return };
            let credentials = match state.borrow_mut().begin() {
                Ok(credentials) => credentials,
                Err(SubmitRejected::Busy) => return,
                Err(rejected) => {
                    notify(Notice::error(rejected.to_string()));
                    return;
                }
            };
            redraw.force_update();
            let state = state.clone();
            let redraw = redraw.clone();
            let on_close = on_close.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let result = log_in(&ctx.client, &credentials).await;
                let notice = state.borrow_mut().finish(&result);
                notify(notice);
                if state.borrow().is_done() {
                    sync_session(&ctx);
                    on_close.emit(());
                    if let Some(navigator) = navigator {
                        navigator.push(&Route::Movies);
                    }
                } else {
                    redraw.force_update();
                }
            });
        })
    };

    let snapshot = state.borrow().clone();
    let on_cancel = props.on_close.reform(|_: MouseEvent| ());
    html! {
        <div class="dialog-backdrop">
            <form class="dialog" onsubmit={on_submit}>
                <h2>{"Log in"}</h2>
                <label>
                    {"Username"}
                    <input value={snapshot.form.username} oninput={on_username} required=true />
                </label>
                <label>
                    {"Password"}
                    <input type="password" value={snapshot.form.password} oninput={on_password} required=true />
                </label>
                if let Some(message) = snapshot.phase.error() {
                    <p class="error">{message.to_string()}</p>
                }
                <div class="dialog-actions">
                    <button type="button" onclick={on_cancel}>{"Cancel"}</button>
                    <button type="submit" disabled={snapshot.phase.is_pending()}>{"Log in"}</button>
                </div>
            </form>
        </div>
    }
}
