use yew::prelude::*;

use crate::features::movies::dialogs::InfoDialog;

#[derive(Properties, PartialEq)]
pub(crate) struct InfoDialogProps {
    pub dialog: InfoDialog,
    pub on_close: Callback<()>,
}

#[function_component(InfoDialogView)]
pub(crate) fn info_dialog_view(props: &InfoDialogProps) -> Html {
    let on_close = props.on_close.reform(|_: MouseEvent| ());
    html! {
        <div class="dialog-backdrop">
            <div class="dialog" role="dialog" aria-modal="true">
                <h2>{props.dialog.title.clone()}</h2>
                <p>{props.dialog.content.clone()}</p>
                <button onclick={on_close}>{"Close"}</button>
            </div>
        </div>
    }
}
