use crate::model::GalleryEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GalleryItemProps {
    pub entry: GalleryEntry,
    pub on_open: Callback<String>,
}

#[function_component(GalleryItem)]
pub fn gallery_item(props: &GalleryItemProps) -> Html {
    let onclick = {
        let cb = props.on_open.clone();
        let src = props.entry.src.clone();
        Callback::from(move |_: MouseEvent| cb.emit(src.clone()))
    };
    html! {<div class="gallery-item" style="cursor:pointer;" {onclick}>
        <img loading="lazy" decoding="async" src={props.entry.src.clone()} alt={props.entry.alt_text()} />
    </div>}
}
