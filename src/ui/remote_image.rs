// SPDX-License-Identifier: MPL-2.0
//! Fetching card images from their remote host.

use crate::error::{Error, Result};
use iced::widget::image::Handle;
use reqwest::Url;

/// Query parameter the image host reads the requested width from.
const WIDTH_PARAM: &str = "w";

/// Result of fetching one card image.
#[derive(Debug, Clone)]
pub enum ImageState {
    Ready(Handle),
    Failed,
}

impl ImageState {
    /// Folds a fetch result into the cached state, logging failures.
    pub fn from_result(what: &str, result: Result<Handle>) -> Self {
        match result {
            Ok(handle) => ImageState::Ready(handle),
            Err(err) => {
                log::warn!("Image of {what} unavailable: {err}");
                ImageState::Failed
            }
        }
    }
}

/// One image to download for a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub url: &'static str,
    pub width_hint: u32,
}

impl ImageRequest {
    #[must_use]
    pub fn new(url: &'static str, width_hint: u32) -> Self {
        Self { url, width_hint }
    }

    /// The image URL with its width parameter set to `width_hint`.
    ///
    /// Other query parameters keep their order; the width parameter is
    /// appended when the URL has none.
    pub fn request_url(&self) -> Result<Url> {
        let mut url =
            Url::parse(self.url).map_err(|err| Error::Image(format!("{}: {err}", self.url)))?;

        let width = self.width_hint.to_string();
        let mut replaced = false;
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(key, value)| {
                if key == WIDTH_PARAM {
                    replaced = true;
                    (key.into_owned(), width.clone())
                } else {
                    (key.into_owned(), value.into_owned())
                }
            })
            .collect();

        {
            let mut query = url.query_pairs_mut();
            query.clear();
            for (key, value) in &pairs {
                query.append_pair(key, value);
            }
            if !replaced {
                query.append_pair(WIDTH_PARAM, &width);
            }
        }

        Ok(url)
    }
}

/// Downloads the image for `request` and wraps it in an iced handle.
pub async fn fetch(client: reqwest::Client, request: ImageRequest) -> Result<Handle> {
    let url = request.request_url()?;
    log::debug!("Fetching image {url}");

    let bytes = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;

    if bytes.is_empty() {
        return Err(Error::Image(format!("empty response for {}", request.url)));
    }

    Ok(Handle::from_bytes(bytes.to_vec()))
}
