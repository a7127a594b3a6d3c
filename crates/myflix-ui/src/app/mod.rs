//! Application shell: context, routing and global chrome.

use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

use crate::components::toast::ToastHost;
use crate::core::store::AppStore;
use crate::core::toast::Notice;
use crate::features::movies::view::MoviesScreen;
use crate::features::navbar::view::Navbar;
use crate::features::profile::view::ProfileScreen;
use crate::features::welcome::view::LandingScreen;
use crate::telemetry::{LoggingConfig, init_logging};

pub(crate) use api::ApiCtx;
pub(crate) use routes::Route;

mod api;
mod routes;

/// Queue a toast on the global store.
pub(crate) fn notify(notice: Notice) {
    Dispatch::<AppStore>::new().reduce_mut(|store| {
        store.notify(notice);
    });
}

/// Refresh the store's copy of the signed-in user.
pub(crate) fn sync_session(ctx: &ApiCtx) {
    let session = ctx.session().clone();
    Dispatch::<AppStore>::new().reduce_mut(move |store| store.sync_session(&session));
}

#[function_component(MyFlixApp)]
fn myflix_app() -> Html {
    let ctx = use_memo(
        |_| {
            ApiCtx::from_env()
                .map_err(|err| tracing::error!(error = %err, "client configuration rejected"))
                .ok()
        },
        (),
    );

    match (*ctx).clone() {
        Some(ctx) => html! {
            <ContextProvider<ApiCtx> context={ctx}>
                <BrowserRouter>
                    <Shell />
                </BrowserRouter>
            </ContextProvider<ApiCtx>>
        },
        None => html! {
            <main class="fatal">
                <p>{"The myFlix client is misconfigured."}</p>
            </main>
        },
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let ctx = use_context::<ApiCtx>();
    {
        let ctx = ctx.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(ctx) = ctx.as_ref() {
                    sync_session(ctx);
                }
                || ()
            },
            (),
        );
    }
    let toasts = use_selector(|store: &AppStore| store.toasts.items().to_vec());
    let on_dismiss = Callback::from(|id: u64| {
        Dispatch::<AppStore>::new().reduce_mut(|store| store.toasts.dismiss(id));
    });

    html! {
        <>
            <Navbar />
            <main class="content">
                <Switch<Route> render={switch} />
            </main>
            <ToastHost toasts={(*toasts).clone()} {on_dismiss} />
        </>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::Welcome => html! { <LandingScreen /> },
        Route::Movies => html! { <MoviesScreen /> },
        Route::Profile => html! { <ProfileScreen /> },
        Route::NotFound => html! {
            <section class="not-found">
                <h1>{"Page not found"}</h1>
                <Link<Route> to={Route::Welcome}>{"Back to myFlix"}</Link<Route>>
            </section>
        },
    }
}

/// Mount the client into `#root`, or the document body when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Err(err) = init_logging(&LoggingConfig::default()) {
        gloo::console::error!(format!("logging disabled: {err}"));
    }
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<MyFlixApp>::with_root(root).render();
    } else {
        yew::Renderer::<MyFlixApp>::new().render();
    }
}
