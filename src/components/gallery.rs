use yew::platform::spawn_local;
use yew::prelude::*;

use super::empty_gallery::EmptyGallery;
use super::gallery_item::GalleryItem;
use crate::config::GalleryConfig;
use crate::net::HttpSource;
use crate::resolver::resolve;
use crate::state::{GalleryAction, GalleryState};

#[derive(Properties, PartialEq, Clone)]
pub struct GalleryProps {
    pub config: GalleryConfig,
    pub on_open: Callback<String>,
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let gallery = use_reducer(GalleryState::default);

    // Discovery runs once per mount; entries stream in through the reducer.
    {
        let gallery = gallery.clone();
        let config = props.config.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let dispatcher = gallery.dispatcher();
                let outcome = resolve(&config, &HttpSource, |entry| {
                    dispatcher.dispatch(GalleryAction::Found(entry))
                })
                .await;
                dispatcher.dispatch(GalleryAction::Finished(outcome));
            });
            || ()
        });
    }

    html! {<div id="gallery" class="gallery-grid" aria-busy={gallery.outcome.is_none().to_string()}>
        { for gallery.entries.iter().map(|entry| html! {
            <GalleryItem key={entry.index} entry={entry.clone()} on_open={props.on_open.clone()} />
        }) }
        if gallery.show_placeholder() {
            <EmptyGallery config={props.config.clone()} />
        }
    </div>}
}
