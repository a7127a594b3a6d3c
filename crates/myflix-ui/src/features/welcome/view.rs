//! Landing screen and the per-session welcome dialog.

use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::{ApiCtx, Route};
use crate::features::login::view::LoginDialog;
use crate::features::registration::view::RegistrationDialog;
use crate::features::welcome::state::WelcomeDialog;

#[derive(Clone, Copy, PartialEq, Eq)]
enum OpenForm {
    None,
    Login,
    Registration,
}

/// Landing page with the login and sign-up entry points.
#[function_component(LandingScreen)]
pub(crate) fn landing_screen() -> Html {
    let ctx = use_context::<ApiCtx>();
    let open = use_state(|| OpenForm::None);

    if ctx.as_ref().is_some_and(|ctx| ctx.session().get().is_some()) {
        return html! { <Redirect<Route> to={Route::Movies} /> };
    }

    let show = |form: OpenForm| {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(form))
    };
    let on_close = {
        let open = open.clone();
        Callback::from(move |()| open.set(OpenForm::None))
    };

    html! {
        <section class="landing">
            <h1>{"Welcome to myFlix"}</h1>
            <div class="landing-actions">
                <button onclick={show(OpenForm::Registration)}>{"Sign up"}</button>
                <button onclick={show(OpenForm::Login)}>{"Log in"}</button>
            </div>
            {match *open {
                OpenForm::None => html! {},
                OpenForm::Login => html! { <LoginDialog {on_close} /> },
                OpenForm::Registration => html! { <RegistrationDialog {on_close} /> },
            }}
        </section>
    }
}

/// Per-session welcome dialog shown over the movie list.
#[function_component(WelcomeNotice)]
pub(crate) fn welcome_notice() -> Html {
    let ctx = use_context::<ApiCtx>();
    let dialog = {
        let ctx = ctx.clone();
        use_state(move || {
            ctx.map(|ctx| WelcomeDialog::for_session(ctx.session()))
                .unwrap_or_default()
        })
    };

    if !dialog.open {
        return html! {};
    }

    let on_toggle = {
        let dialog = dialog.clone();
        Callback::from(move |event: Event| {
            let checked = event.target_unchecked_into::<HtmlInputElement>().checked();
            let mut next = *dialog;
            if next.dont_show_again != checked {
                next.toggle_dont_show();
            }
            dialog.set(next);
        })
    };
    let on_close = {
        let dialog = dialog.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *dialog;
            if let Some(ctx) = ctx.as_ref() {
                if let Err(err) = next.close(ctx.session()) {
                    tracing::warn!(error = %err, "welcome preference not saved");
                }
            } else {
                next.open = false;
            }
            dialog.set(next);
        })
    };

    html! {
        <div class="dialog-backdrop">
            <div class="dialog welcome" role="dialog" aria-modal="true">
                <h2>{"Welcome to myFlix!"}</h2>
                <p>{"Drag the strip or use the mouse wheel to browse movies. Tap a genre, director or synopsis for details, and mark favorites to find them on your profile."}</p>
                <label>
                    <input type="checkbox" checked={dialog.dont_show_again} onchange={on_toggle} />
                    {"Don't show this again"}
                </label>
                <button onclick={on_close}>{"Got it"}</button>
            </div>
        </div>
    }
}
