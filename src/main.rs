mod components;
mod config;
mod error;
mod logging;
mod model;
mod net;
mod page;
mod resolver;
mod state;
mod util;

use components::{App, AppProps};
use config::GalleryConfig;

/// Element the gallery and viewer render into; may carry a `data-config`
/// JSON override.
const MOUNT_ID: &str = "portfolio-app";

fn main() {
    logging::init();

    let Some(window) = web_sys::window() else {
        tracing::error!("no global `window`; nothing to do");
        return;
    };
    let Some(document) = window.document() else {
        tracing::error!("window has no document");
        return;
    };

    match document.get_element_by_id(MOUNT_ID) {
        Some(root) => {
            let config = GalleryConfig::from_element(&root);
            yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
        }
        None => tracing::warn!("#{MOUNT_ID} not found; gallery disabled"),
    }

    page::install(&window, &document);
}
