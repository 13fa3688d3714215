//! Payment proof preview

use std::io::Cursor;

use image::DynamicImage;
use tracing::debug;

use super::file::{ProofError, ProofFile, data_url};

/// Longest side of the preview thumbnail, in pixels
pub const THUMBNAIL_MAX_SIDE: u32 = 200;

/// JPEG quality for thumbnails
const JPEG_QUALITY: u8 = 85;

/// Preview shown under the file input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofPreview {
    pub file_name: String,
    /// `data:` URL for the `<img>`
    pub thumbnail: String,
}

impl ProofPreview {
    /// Read `file` and build its preview
    ///
    /// Images are scaled down to fit [`THUMBNAIL_MAX_SIDE`]; anything that
    /// does not decode as an image is shown from its raw data URL.
    pub async fn load(file: &ProofFile) -> Result<Self, ProofError> {
        let bytes = file.read().await?;
        let thumbnail = match image::load_from_memory(&bytes) {
            Ok(img) => encode_thumbnail(&img).unwrap_or_else(|e| {
                debug!(file = %file.name(), error = %e, "Thumbnail encoding failed, using original");
                data_url(&file.mime_type(), &bytes)
            }),
            Err(e) => {
                debug!(file = %file.name(), error = %e, "Not a decodable image, using original");
                data_url(&file.mime_type(), &bytes)
            }
        };

        Ok(Self {
            file_name: file.name().to_string(),
            thumbnail,
        })
    }

    /// Caption shown next to the thumbnail
    pub fn caption(&self) -> String {
        format!("Payment proof uploaded: {}", self.file_name)
    }
}

/// Fit within the thumbnail box (never upscale) and encode as JPEG
fn encode_thumbnail(img: &DynamicImage) -> Result<String, image::ImageError> {
    let img = if img.width() > THUMBNAIL_MAX_SIDE || img.height() > THUMBNAIL_MAX_SIDE {
        img.thumbnail(THUMBNAIL_MAX_SIDE, THUMBNAIL_MAX_SIDE)
    } else {
        img.clone()
    };

    let mut buffer = Vec::new();
    {
        let mut cursor = Cursor::new(&mut buffer);
        let rgb_img = img.to_rgb8();
        let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut cursor, JPEG_QUALITY);
        rgb_img.write_with_encoder(encoder)?;
    }

    Ok(data_url("image/jpeg", &buffer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD as BASE64;
    use image::{ImageFormat, RgbImage};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::new(width, height));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn decode_data_url(url: &str) -> DynamicImage {
        let payload = url.strip_prefix("data:image/jpeg;base64,").unwrap();
        let bytes = BASE64.decode(payload).unwrap();
        image::load_from_memory(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_large_image_is_scaled_down() {
        let file = ProofFile::from_bytes("slip.png", png_bytes(400, 300));
        let preview = ProofPreview::load(&file).await.unwrap();

        assert_eq!(preview.file_name, "slip.png");
        assert_eq!(preview.caption(), "Payment proof uploaded: slip.png");

        let thumb = decode_data_url(&preview.thumbnail);
        assert_eq!((thumb.width(), thumb.height()), (200, 150));
    }

    #[tokio::test]
    async fn test_small_image_keeps_size() {
        let file = ProofFile::from_bytes("slip.png", png_bytes(40, 20));
        let preview = ProofPreview::load(&file).await.unwrap();

        let thumb = decode_data_url(&preview.thumbnail);
        assert_eq!((thumb.width(), thumb.height()), (40, 20));
    }

    #[tokio::test]
    async fn test_non_image_falls_back_to_raw() {
        let file = ProofFile::from_bytes("proof.pdf", b"%PDF".to_vec());
        let preview = ProofPreview::load(&file).await.unwrap();
        assert_eq!(preview.thumbnail, "data:application/pdf;base64,JVBERg==");
    }
}
