//! Access to the static host serving the gallery images.

use gloo::net::http::{Method, Request, RequestBuilder};
use web_sys::RequestCache;

use crate::error::GalleryError;

/// Where the resolver reads the manifest and checks candidate files.
///
/// Futures are awaited one at a time on the page's event loop, so
/// implementations need not be `Send`.
pub trait ImageSource {
    /// Body of `url`, provided the host answered with a success status.
    async fn fetch_text(&self, url: &str) -> Result<String, GalleryError>;

    /// Whether `url` exists, without transferring its body.
    async fn exists(&self, url: &str) -> Result<bool, GalleryError>;
}

/// Fetch-API backed source. Both calls bypass the HTTP cache so that newly
/// uploaded images show up on a plain reload.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpSource;

impl ImageSource for HttpSource {
    async fn fetch_text(&self, url: &str) -> Result<String, GalleryError> {
        let response = Request::get(url)
            .cache(RequestCache::NoStore)
            .send()
            .await
            .map_err(|err| network(url, err))?;
        if !response.ok() {
            return Err(GalleryError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }
        response.text().await.map_err(|err| network(url, err))
    }

    async fn exists(&self, url: &str) -> Result<bool, GalleryError> {
        let response = RequestBuilder::new(url)
            .method(Method::HEAD)
            .cache(RequestCache::NoStore)
            .send()
            .await
            .map_err(|err| network(url, err))?;
        Ok(response.ok())
    }
}

fn network(url: &str, err: gloo::net::Error) -> GalleryError {
    GalleryError::Network {
        url: url.to_string(),
        reason: err.to_string(),
    }
}
