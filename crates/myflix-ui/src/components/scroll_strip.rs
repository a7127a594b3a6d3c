//! Horizontal strip scrolled by dragging or with the mouse wheel.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::core::drag_scroll::{DragScroll, wheel_scroll};

#[derive(Properties, PartialEq)]
pub(crate) struct ScrollStripProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ScrollStrip)]
pub(crate) fn scroll_strip(props: &ScrollStripProps) -> Html {
    let node = use_node_ref();
    let drag = use_mut_ref(DragScroll::default);

    let element = {
        let node = node.clone();
        move || node.cast::<HtmlElement>()
    };

    let onmousedown = {
        let drag = drag.clone();
        let element = element.clone();
        Callback::from(move |event: MouseEvent| {
            if let Some(strip) = element() {
                drag.borrow_mut()
                    .pointer_down(event.page_x(), strip.offset_left(), strip.scroll_left());
            }
        })
    };
    let onmousemove = {
        let drag = drag.clone();
        let element = element.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(strip) = element() else { return };
            if let Some(offset) = drag.borrow().pointer_move(event.page_x(), strip.offset_left()) {
                event.prevent_default();
                strip.set_scroll_left(offset);
            }
        })
    };
    let onmouseup = {
        let drag = drag.clone();
        Callback::from(move |_: MouseEvent| drag.borrow_mut().pointer_up())
    };
    let onmouseleave = {
        let drag = drag.clone();
        Callback::from(move |_: MouseEvent| drag.borrow_mut().pointer_leave())
    };
    let onwheel = Callback::from(move |event: WheelEvent| {
        let Some(strip) = event
            .current_target()
            .and_then(|target| target.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        event.prevent_default();
        strip.set_scroll_left(wheel_scroll(strip.scroll_left(), event.delta_y()));
    });

    html! {
        <div
            class="scroll-strip"
            ref={node}
            {onmousedown}
            {onmousemove}
            {onmouseup}
            {onmouseleave}
            {onwheel}
        >
            {for props.children.iter()}
        </div>
    }
}
