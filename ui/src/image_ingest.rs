//! Turning a user-picked file into an image embedded in a request body.
//!
//! The file is read as a data URL, the base64 payload after the header is
//! kept, and the pixel size comes from the browser decoding that data URL,
//! so any format the browser can display is accepted. Payload, media type
//! and size come back together as one [`EmbeddedImage`].

use futures::channel::oneshot;
use payloads::requests::EmbeddedImage;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Event, File, FileReader, HtmlImageElement};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageIngestError {
    #[error("Please select an image file.")]
    NotAnImage,
    #[error("Failed to read the image. Please try again.")]
    ReadFailed,
}

pub fn check_media_type(media_type: &str) -> Result<(), ImageIngestError> {
    if media_type.starts_with("image/") {
        Ok(())
    } else {
        Err(ImageIngestError::NotAnImage)
    }
}

/// Everything after the first comma of a data URL, or an empty string if
/// there is no comma.
pub fn data_url_payload(data_url: &str) -> &str {
    data_url
        .split_once(',')
        .map(|(_, payload)| payload)
        .unwrap_or_default()
}

/// Build the embedded image from a file's media type, its data URL and the
/// size the browser decoded.
///
/// A data URL without a comma embeds an empty payload.
pub fn embed_data_url(
    media_type: &str,
    data_url: &str,
    (width, height): (u32, u32),
) -> Result<EmbeddedImage, ImageIngestError> {
    check_media_type(media_type)?;
    Ok(EmbeddedImage {
        data: data_url_payload(data_url).to_string(),
        media_type: media_type.to_string(),
        width,
        height,
    })
}

type SharedSender<T> = Rc<RefCell<Option<oneshot::Sender<T>>>>;

/// An event handler that sends `make()` down the channel the first time it
/// fires.
fn send_once<T: 'static>(
    tx: &SharedSender<T>,
    make: impl Fn() -> T + 'static,
) -> Closure<dyn FnMut(Event)> {
    let tx = tx.clone();
    Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        if let Some(tx) = tx.borrow_mut().take() {
            let _ = tx.send(make());
        }
    })
}

/// Read a file as a `data:` URL.
pub async fn read_as_data_url(file: &File) -> Result<String, ImageIngestError> {
    let reader =
        FileReader::new().map_err(|_| ImageIngestError::ReadFailed)?;
    let (tx, rx) = oneshot::channel::<Result<String, ImageIngestError>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let onload = {
        let reader = reader.clone();
        send_once(&tx, move || {
            reader
                .result()
                .ok()
                .and_then(|value| value.as_string())
                .ok_or(ImageIngestError::ReadFailed)
        })
    };
    let onerror = send_once(&tx, || Err(ImageIngestError::ReadFailed));

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    reader
        .read_as_data_url(file)
        .map_err(|_| ImageIngestError::ReadFailed)?;

    let result = rx.await.unwrap_or(Err(ImageIngestError::ReadFailed));

    // The closures are dropped on return, so detach them first.
    reader.set_onload(None);
    reader.set_onerror(None);
    result
}

/// Natural width and height of an image, as decoded by the browser.
pub async fn decode_dimensions(
    data_url: &str,
) -> Result<(u32, u32), ImageIngestError> {
    let image =
        HtmlImageElement::new().map_err(|_| ImageIngestError::ReadFailed)?;
    let (tx, rx) = oneshot::channel::<bool>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let onload = send_once(&tx, || true);
    let onerror = send_once(&tx, || false);

    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    image.set_src(data_url);

    let loaded = rx.await.unwrap_or(false);

    image.set_onload(None);
    image.set_onerror(None);

    if !loaded {
        tracing::warn!("Browser could not decode the selected image");
        return Err(ImageIngestError::ReadFailed);
    }
    Ok((image.natural_width(), image.natural_height()))
}

/// Validate, read and measure a picked file.
///
/// Files that are not images are rejected before anything is read.
pub async fn ingest_file(file: &File) -> Result<EmbeddedImage, ImageIngestError> {
    let media_type = file.type_();
    check_media_type(&media_type)?;
    let data_url = read_as_data_url(file).await?;
    let dimensions = decode_dimensions(&data_url).await?;
    embed_data_url(&media_type, &data_url, dimensions)
}

/// Tracks the most recent file selection so results of earlier, slower
/// reads can be discarded.
#[derive(Debug, Default)]
pub struct SelectionCounter(Cell<u64>);

impl SelectionCounter {
    /// Start a new selection, returning its ticket.
    pub fn next(&self) -> u64 {
        let ticket = self.0.get() + 1;
        self.0.set(ticket);
        ticket
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.get() == ticket
    }
}

/// Take the picked file and reset the picker, so choosing the same file
/// again still fires a change.
pub fn take_picked<F>(picked: Option<F>, reset: impl FnOnce()) -> Option<F> {
    reset();
    picked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_image_media_type_is_rejected() {
        let err = embed_data_url("text/plain", "data:text/plain;base64,aGk=", (1, 1))
            .unwrap_err();
        assert_eq!(err, ImageIngestError::NotAnImage);
        assert_eq!(err.to_string(), "Please select an image file.");
    }

    #[test]
    fn any_image_media_type_is_embedded() {
        let svg = "data:image/svg+xml;base64,PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciIHdpZHRoPSIxMCIgaGVpZ2h0PSI1Ii8+";
        for media_type in ["image/svg+xml", "image/avif", "image/tiff", "image/x-icon"] {
            let image = embed_data_url(media_type, svg, (10, 5)).unwrap();
            assert_eq!(image.media_type, media_type);
            assert_eq!((image.width, image.height), (10, 5));
            assert!(image.data.starts_with("PHN2Zy"));
            assert!(!image.data.starts_with("data:"));
        }
    }

    #[test]
    fn data_url_without_comma_embeds_empty_payload() {
        let image =
            embed_data_url("image/png", "data:image/png;base64", (4, 2)).unwrap();
        assert_eq!(image.data, "");
        assert_eq!(image.media_type, "image/png");
        assert_eq!((image.width, image.height), (4, 2));
    }

    #[test]
    fn payload_is_everything_after_the_first_comma() {
        assert_eq!(data_url_payload("data:image/png;base64,abc,def"), "abc,def");
        assert_eq!(data_url_payload("no comma here"), "");
    }

    #[test]
    fn read_failure_message() {
        assert_eq!(
            ImageIngestError::ReadFailed.to_string(),
            "Failed to read the image. Please try again."
        );
    }

    #[test]
    fn picker_resets_whatever_was_picked() {
        let resets = Cell::new(0);
        let reset = || resets.set(resets.get() + 1);

        assert_eq!(take_picked(Some("plan.png"), reset), Some("plan.png"));
        assert_eq!(take_picked(None::<&str>, reset), None);
        assert_eq!(resets.get(), 2);
    }

    #[test]
    fn only_the_latest_selection_is_current() {
        let counter = SelectionCounter::default();
        let first = counter.next();
        let second = counter.next();
        assert!(!counter.is_current(first));
        assert!(counter.is_current(second));
    }
}
