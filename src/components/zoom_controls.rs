use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ZoomControlsProps {
    pub zoom_label: String,
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component(ZoomControls)]
pub fn zoom_controls(props: &ZoomControlsProps) -> Html {
    let zi = {
        let cb = props.on_zoom_in.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let zo = {
        let cb = props.on_zoom_out.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let zr = {
        let cb = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {<div class="lightbox-controls">
        <button class="zoom-out" title="Zoom out" onclick={zo}>{"-"}</button>
        <button class="zoom-reset" title="Reset zoom" onclick={zr}>{ props.zoom_label.clone() }</button>
        <button class="zoom-in" title="Zoom in" onclick={zi}>{"+"}</button>
    </div>}
}
