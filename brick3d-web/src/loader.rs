/// Asynchronous image loading through `HTMLImageElement.decode()`
use brick3d_core::TextureSet;
use js_sys::Promise;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

use crate::error::{describe, WebError};

/// An image whose fetch has started
struct PendingImage {
    url: String,
    image: HtmlImageElement,
    decoded: Promise,
}

fn start(url: &str) -> Result<PendingImage, WebError> {
    let image = HtmlImageElement::new().map_err(WebError::js)?;
    image.set_src(url);
    let decoded = image.decode();
    Ok(PendingImage {
        url: url.to_string(),
        image,
        decoded,
    })
}

async fn finish(pending: PendingImage) -> Result<HtmlImageElement, WebError> {
    JsFuture::from(pending.decoded)
        .await
        .map_err(|err| WebError::ImageLoad {
            url: pending.url.clone(),
            reason: describe(&err),
        })?;
    log::debug!(
        "loaded {} ({}x{})",
        pending.url,
        pending.image.natural_width(),
        pending.image.natural_height()
    );
    Ok(pending.image)
}

/// Fetch all three maps concurrently and resolve once every one has
/// decoded. The first failure is returned.
pub async fn load_images(urls: &TextureSet<String>) -> Result<TextureSet<HtmlImageElement>, WebError> {
    let TextureSet {
        diffuse,
        normal,
        specular,
    } = urls.try_map(|_, url| start(url))?;

    let images = TextureSet {
        diffuse: finish(diffuse).await?,
        normal: finish(normal).await?,
        specular: finish(specular).await?,
    };
    log::info!("texture images loaded");
    Ok(images)
}
