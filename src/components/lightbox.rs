use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, KeyboardEvent, MouseEvent, TouchEvent, WheelEvent};
use yew::prelude::*;

use super::zoom_controls::ZoomControls;
use crate::state::lightbox::CLEAR_SOURCE_DELAY_MS;
use crate::state::{LightboxAction, LightboxState};
use crate::util;

#[derive(Properties, PartialEq, Clone)]
pub struct LightboxProps {
    pub state: UseReducerHandle<LightboxState>,
}

// Snapshot read by the raw listeners, which outlive individual renders.
#[derive(Default, Clone, Copy)]
struct ViewerFlags {
    open: bool,
    can_pan: bool,
}

fn first_touch(event: &Event) -> Option<(f64, f64)> {
    let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some((touch.client_x() as f64, touch.client_y() as f64))
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let overlay_ref = use_node_ref();
    let img_ref = use_node_ref();
    let flags = use_mut_ref(ViewerFlags::default);
    let state = props.state.clone();

    {
        let flags = flags.clone();
        let snapshot = ViewerFlags {
            open: state.open,
            can_pan: state.zoom.can_pan(),
        };
        use_effect_with((snapshot.open, snapshot.can_pan), move |_| {
            *flags.borrow_mut() = snapshot;
            || ()
        });
    }

    // Page scroll is locked while open; the image is dropped once the
    // fade-out has had time to run.
    {
        let dispatcher = state.dispatcher();
        let generation = state.generation;
        use_effect_with(state.open, move |open| {
            util::set_page_scroll_locked(*open);
            let pending = (!*open).then(|| {
                Timeout::new(CLEAR_SOURCE_DELAY_MS, move || {
                    dispatcher.dispatch(LightboxAction::ClearSource { generation })
                })
            });
            move || drop(pending)
        });
    }

    // Wheel and touchmove must be able to cancel scrolling, which Yew's
    // passive handlers cannot, so these go on the elements directly.
    {
        let dispatcher = state.dispatcher();
        let overlay_ref = overlay_ref.clone();
        let img_ref = img_ref.clone();
        let flags = flags.clone();
        use_effect_with((), move |_| {
            let mut listeners: Vec<EventListener> = Vec::new();

            if let Some(document) = util::document() {
                let d = dispatcher.clone();
                listeners.push(EventListener::new(&document, "keydown", move |event| {
                    if let Some(e) = event.dyn_ref::<KeyboardEvent>() {
                        if e.key() == "Escape" {
                            d.dispatch(LightboxAction::Close);
                        }
                    }
                }));
                let d = dispatcher.clone();
                listeners.push(EventListener::new(&document, "mousemove", move |event| {
                    if let Some(e) = event.dyn_ref::<MouseEvent>() {
                        d.dispatch(LightboxAction::DragMove {
                            x: e.client_x() as f64,
                            y: e.client_y() as f64,
                        });
                    }
                }));
                let d = dispatcher.clone();
                listeners.push(EventListener::new(&document, "mouseup", move |_| {
                    d.dispatch(LightboxAction::DragEnd)
                }));
            }

            if let Some(overlay) = overlay_ref.cast::<HtmlElement>() {
                let d = dispatcher.clone();
                let flags = flags.clone();
                listeners.push(EventListener::new_with_options(
                    &overlay,
                    "wheel",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        if !flags.borrow().open {
                            return;
                        }
                        event.prevent_default();
                        if let Some(e) = event.dyn_ref::<WheelEvent>() {
                            d.dispatch(LightboxAction::Wheel { delta_y: e.delta_y() });
                        }
                    },
                ));
            }

            if let Some(img) = img_ref.cast::<HtmlElement>() {
                let d = dispatcher.clone();
                listeners.push(EventListener::new(&img, "touchstart", move |event| {
                    if let Some((x, y)) = first_touch(event) {
                        d.dispatch(LightboxAction::DragStart { x, y });
                    }
                }));
                let d = dispatcher.clone();
                listeners.push(EventListener::new_with_options(
                    &img,
                    "touchmove",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        if !flags.borrow().can_pan {
                            return;
                        }
                        event.prevent_default();
                        if let Some((x, y)) = first_touch(event) {
                            d.dispatch(LightboxAction::DragMove { x, y });
                        }
                    },
                ));
                let d = dispatcher.clone();
                listeners.push(EventListener::new(&img, "touchend", move |_| {
                    d.dispatch(LightboxAction::DragEnd)
                }));
            }

            move || drop(listeners)
        });
    }

    let on_close = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(LightboxAction::Close))
    };
    // Only clicks on the dimmed backdrop itself close the viewer.
    let on_backdrop = {
        let state = state.clone();
        let overlay_ref = overlay_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let overlay = overlay_ref.cast::<web_sys::Element>();
            if overlay.is_some() && e.target_dyn_into::<web_sys::Element>() == overlay {
                state.dispatch(LightboxAction::Close);
            }
        })
    };
    let on_mousedown = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            state.dispatch(LightboxAction::DragStart {
                x: e.client_x() as f64,
                y: e.client_y() as f64,
            })
        })
    };
    let zoom_in = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(LightboxAction::ZoomIn))
    };
    let zoom_out = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(LightboxAction::ZoomOut))
    };
    let reset = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(LightboxAction::ResetZoom))
    };

    let cursor = if state.drag.active {
        "grabbing"
    } else if state.zoom.can_pan() {
        "move"
    } else {
        "default"
    };
    let img_style = format!("transform:{}; cursor:{};", state.zoom.css_transform(), cursor);

    html! {<div id="lightbox" ref={overlay_ref} class={classes!("lightbox", state.open.then_some("active"))} aria-hidden={(!state.open).to_string()} onclick={on_backdrop}>
        <button class="lightbox-close" aria-label="Close" onclick={on_close}>{"×"}</button>
        <img id="lightbox-img" ref={img_ref} src={state.src.clone()} alt="Portfolio image" draggable="false" style={img_style} onmousedown={on_mousedown} />
        <ZoomControls zoom_label={state.zoom.percent_label()} on_zoom_in={zoom_in} on_zoom_out={zoom_out} on_reset={reset} />
    </div>}
}
