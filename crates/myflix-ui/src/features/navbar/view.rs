//! Navigation bar component.

use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

use crate::app::{ApiCtx, Route, sync_session};
use crate::core::store::AppStore;
use crate::features::navbar::state::{NavLink, logout, visible_links};

fn route_for(link: NavLink) -> Route {
    match link {
        NavLink::Movies => Route::Movies,
        NavLink::Profile => Route::Profile,
    }
}

#[function_component(Navbar)]
pub(crate) fn navbar() -> Html {
    let ctx = use_context::<ApiCtx>();
    let navigator = use_navigator();
    let location = use_location();
    let signed_in = use_selector(AppStore::signed_in);
    let current_path = location
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    let on_logout = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(ctx) = ctx.as_ref() {
                logout(ctx.session());
                sync_session(ctx);
            }
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::Welcome);
            }
        })
    };

    let links = visible_links(*signed_in).iter().map(|link| {
        let link = *link;
        let onclick = {
            let navigator = navigator.clone();
            Callback::from(move |_: MouseEvent| {
                if let Some(navigator) = navigator.as_ref() {
                    navigator.push(&route_for(link));
                }
            })
        };
        html! {
            <button
                class={classes!("nav-link", link.is_active(&current_path).then_some("active"))}
                {onclick}
            >
                {link.label()}
            </button>
        }
    });

    html! {
        <nav class="navbar">
            <span class="brand">{"myFlix"}</span>
            {for links}
            if *signed_in {
                <button class="nav-link logout" onclick={on_logout}>{"Log out"}</button>
            }
        </nav>
    }
}
