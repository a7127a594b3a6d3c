//! Registration dialog component.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::app::{ApiCtx, notify};
use crate::core::phase::SubmitRejected;
use crate::core::toast::Notice;
use crate::features::registration::api::register;
use crate::features::registration::state::{RegistrationForm, RegistrationState};

#[derive(Properties, PartialEq)]
pub(crate) struct RegistrationDialogProps {
    pub on_close: Callback<()>,
}

fn field_input(
    state: &Rc<RefCell<RegistrationState>>,
    apply: fn(&mut RegistrationForm, String),
) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |event: InputEvent| {
        let value = event.target_unchecked_into::<HtmlInputElement>().value();
        apply(&mut state.borrow_mut().form, value);
    })
}

#[function_component(RegistrationDialog)]
pub(crate) fn registration_dialog(props: &RegistrationDialogProps) -> Html {
    let ctx = use_context::<ApiCtx>();
    let state = use_mut_ref(RegistrationState::default);
    let redraw = use_force_update();

    let on_username = field_input(&state, |form, value| form.username = value);
    let on_password = field_input(&state, |form, value| form.password = value);
    let on_email = field_input(&state, |form, value| form.email = value);
    let on_birthday = field_input(&state, |form, value| form.birthday = value);

    let on_submit = {
        let state = state.clone();
        let redraw = redraw.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(ctx) = ctx.clone() else { return };
            let new_user = match state.borrow_mut().begin() {
                Ok(new_user) => new_user,
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
            spawn_local(async move {
                let result = register(&ctx.client, &new_user).await;
                let notice = state.borrow_mut().finish(&result);
                notify(notice);
                if state.borrow().is_done() {
                    on_close.emit(());
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
                <h2>{"Sign up"}</h2>
                <label>
                    {"Username"}
                    <input value={snapshot.form.username} oninput={on_username} required=true />
                </label>
                <label>
                    {"Password"}
                    <input type="password" value={snapshot.form.password} oninput={on_password} required=true />
                </label>
                <label>
                    {"Email"}
                    <input type="email" value={snapshot.form.email} oninput={on_email} required=true />
                </label>
                <label>
                    {"Birthday"}
                    <input type="date" value={snapshot.form.birthday} oninput={on_birthday} />
                </label>
                if let Some(message) = snapshot.phase.error() {
                    <p class="error">{message.to_string()}</p>
                }
                <div class="dialog-actions">
                    <button type="button" onclick={on_cancel}>{"Cancel"}</button>
                    <button type="submit" disabled={snapshot.phase.is_pending()}>{"Sign up"}</button>
                </div>
            </form>
        </div>
    }
}
