use crate::config::GalleryConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EmptyGalleryProps {
    pub config: GalleryConfig,
}

/// Shown when neither the manifest nor probing found anything.
#[function_component(EmptyGallery)]
pub fn empty_gallery(props: &EmptyGalleryProps) -> Html {
    let examples = example_names(&props.config);
    html! {<div class="gallery-empty" style="grid-column:1/-1; text-align:center; color:var(--text-muted); padding:60px 20px;">
        <p style="font-size:16px;">
            {"Add images to "}
            <code style="background:rgba(77,159,255,0.1); padding:2px 8px; border-radius:4px;">{ props.config.path.clone() }</code>
        </p>
        <p style="margin-top:12px; font-size:14px;">
            {"Name them like "}
            { for examples.into_iter().map(|name| html!{ <><strong>{ name }</strong>{", "}</> }) }
            {"etc., or list them in "}
            <code>{"manifest.json"}</code>
        </p>
    </div>}
}

pub fn example_names(config: &GalleryConfig) -> Vec<String> {
    let n = config.extensions.len().max(1);
    [1, 0]
        .into_iter()
        .enumerate()
        .filter_map(|(i, ext_index)| {
            config
                .extensions
                .get(ext_index % n)
                .map(|ext| format!("{}{}.{}", config.prefix, i + 1, ext))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn examples_follow_prefix_and_extensions() {
        let config = GalleryConfig::default();
        assert_eq!(example_names(&config), vec!["work-1.png", "work-2.webp"]);

        let single = GalleryConfig {
            prefix: "shot".to_string(),
            extensions: vec!["avif".to_string()],
            ..Default::default()
        };
        assert_eq!(example_names(&single), vec!["shot1.avif", "shot2.avif"]);
    }
}
