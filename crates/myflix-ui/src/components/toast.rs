use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::core::toast::{TOAST_DURATION_MS, Toast, ToastKind};

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    html! {
        <div class="toast-host" aria-live="polite" aria-atomic="true">
            {for props.toasts.iter().map(|toast| html! {
                <ToastItem
                    key={toast.id.to_string()}
                    toast={toast.clone()}
                    on_dismiss={props.on_dismiss.clone()}
                />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u64>,
}

/// One toast; its countdown starts when it mounts and survives list changes.
#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id: &u64| {
                let id = *id;
                let handle = Timeout::new(TOAST_DURATION_MS, move || on_dismiss.emit(id));
                move || drop(handle)
            },
            id,
        );
    }

    let class = match props.toast.kind {
        ToastKind::Info => "info",
        ToastKind::Success => "success",
        ToastKind::Error => "error",
    };
    let on_close = props.on_dismiss.reform(move |_: MouseEvent| id);

    html! {
        <div class={classes!("toast", class)} role="status">
            <span>{props.toast.message.clone()}</span>
            <button class="ghost" aria-label="Dismiss" onclick={on_close}>{"OK"}</button>
        </div>
    }
}
