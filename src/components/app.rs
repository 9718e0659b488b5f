use super::{gallery::Gallery, lightbox::Lightbox};
use crate::config::GalleryConfig;
use crate::state::{LightboxAction, LightboxState};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: GalleryConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let lightbox = use_reducer(LightboxState::default);

    // Gallery items hand their source to the viewer.
    let open = {
        let lightbox = lightbox.clone();
        Callback::from(move |src: String| lightbox.dispatch(LightboxAction::Open(src)))
    };

    html! {<>
        <Gallery config={props.config.clone()} on_open={open} />
        <Lightbox state={lightbox} />
    </>}
}
