//! Blob encoding to data URLs and image decoding from them.

use std::io::Cursor;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::CollaboratorError;
use crate::value::Blob;

const FALLBACK_MIME: &str = "application/octet-stream";

/// Encodes a blob as a `data:` URL.
#[async_trait]
pub trait BlobEncoder: Send + Sync {
    async fn to_data_url(&self, blob: &Blob) -> Result<String, CollaboratorError>;
}

/// `data:<mime>;base64,<payload>` encoder.
#[derive(Debug, Default, Clone, Copy)]
pub struct Base64Encoder;

#[async_trait]
impl BlobEncoder for Base64Encoder {
    async fn to_data_url(&self, blob: &Blob) -> Result<String, CollaboratorError> {
        let mime = if blob.mime_type().is_empty() {
            FALLBACK_MIME
        } else {
            blob.mime_type()
        };
        Ok(format!("data:{mime};base64,{}", STANDARD.encode(blob.data())))
    }
}

/// Natural pixel dimensions of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
}

/// Decodes a `data:` URL into an image.
#[async_trait]
pub trait ImageDecoder: Send + Sync {
    async fn decode(&self, data_url: &str) -> Result<DecodedImage, CollaboratorError>;
}

/// Decodes base64 data URLs and reads the header with the `image` crate.
///
/// Only the dimensions are read; pixel data is never decoded.
#[derive(Debug, Default, Clone, Copy)]
pub struct DataUrlImageDecoder;

#[async_trait]
impl ImageDecoder for DataUrlImageDecoder {
    async fn decode(&self, data_url: &str) -> Result<DecodedImage, CollaboratorError> {
        let bytes = parse_data_url(data_url)?;
        let (width, height) = image::ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()?
            .into_dimensions()?;
        Ok(DecodedImage { width, height })
    }
}

/// Extracts the payload bytes of a base64 `data:` URL.
pub fn parse_data_url(data_url: &str) -> Result<Vec<u8>, CollaboratorError> {
    let rest = data_url
        .strip_prefix("data:")
        .ok_or(CollaboratorError::InvalidDataUrl("missing `data:` scheme"))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or(CollaboratorError::InvalidDataUrl("missing payload separator"))?;
    if !header.ends_with(";base64") {
        return Err(CollaboratorError::NotBase64);
    }
    Ok(STANDARD.decode(payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::new(width, height);
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[tokio::test]
    async fn test_encode_then_decode_dimensions() {
        let blob = Blob::new(png(32, 16), "image/png");
        let url = Base64Encoder.to_data_url(&blob).await.unwrap();
        assert!(url.starts_with("data:image/png;base64,"));

        let image = DataUrlImageDecoder.decode(&url).await.unwrap();
        assert_eq!(image, DecodedImage { width: 32, height: 16 });
    }

    #[tokio::test]
    async fn test_missing_mime_falls_back() {
        let blob = Blob::new(vec![1u8, 2, 3], "");
        let url = Base64Encoder.to_data_url(&blob).await.unwrap();
        assert_eq!(url, "data:application/octet-stream;base64,AQID");
    }

    #[test]
    fn test_parse_data_url_errors() {
        assert!(matches!(
            parse_data_url("http://example.com"),
            Err(CollaboratorError::InvalidDataUrl(_))
        ));
        assert!(matches!(
            parse_data_url("data:text/plain"),
            Err(CollaboratorError::InvalidDataUrl(_))
        ));
        assert!(matches!(
            parse_data_url("data:text/plain,hello"),
            Err(CollaboratorError::NotBase64)
        ));
        assert!(matches!(
            parse_data_url("data:text/plain;base64,***"),
            Err(CollaboratorError::Base64(_))
        ));
    }

    #[tokio::test]
    async fn test_decode_non_image_fails() {
        let url = Base64Encoder
            .to_data_url(&Blob::new(b"plain text".to_vec(), "text/plain"))
            .await
            .unwrap();
        assert!(DataUrlImageDecoder.decode(&url).await.is_err());
    }
}
