//! Uploaded image validation.
//!
//! Checks run independently and every failing check contributes its own
//! message, in this order: `minWidth`, `maxWidth`, `minHeight`, `maxHeight`,
//! `size`, `type`. Only the dimension checks decode the image, and only when
//! at least one bound is set.

use std::sync::Arc;

use async_trait::async_trait;
use regex::{Regex, RegexBuilder};

use crate::collaborators::{
    BlobEncoder, Collaborators, DecodedImage, DiagnosticSink, ImageDecoder, SizeParser,
};
use crate::error::CollaboratorError;
use crate::handler::{AsyncValidate, Verdict};
use crate::options::{FromOptions, ImageOptions, ValidatorOptions};
use crate::predicates::is_text_includes;
use crate::value::{Blob, Value};

/// The `image` validator.
///
/// Values that are not blobs are a caller mistake: they produce a diagnostic
/// and pass. Decoding failures and unparsable size limits do the same for
/// the affected checks.
#[derive(Clone)]
pub struct ImageValidator {
    encoder: Arc<dyn BlobEncoder>,
    decoder: Arc<dyn ImageDecoder>,
    sizes: Arc<dyn SizeParser>,
    sink: Arc<dyn DiagnosticSink>,
}

impl ImageValidator {
    /// Name the validator is registered under.
    pub const NAME: &'static str = "image";

    #[must_use]
    pub fn new(collaborators: &Collaborators) -> Self {
        Self {
            encoder: Arc::clone(&collaborators.encoder),
            decoder: Arc::clone(&collaborators.decoder),
            sizes: Arc::clone(&collaborators.sizes),
            sink: Arc::clone(&collaborators.sink),
        }
    }

    async fn dimensions(&self, blob: &Blob) -> Result<DecodedImage, CollaboratorError> {
        let data_url = self.encoder.to_data_url(blob).await?;
        self.decoder.decode(&data_url).await
    }

    fn check_dimensions(image: DecodedImage, opts: &ImageOptions, errors: &mut Vec<String>) {
        let base = &opts.base;
        if let Some(min) = opts.min_width
            && image.width < min
        {
            errors.push(base.resolve_check("minWidth", || {
                format!("Image width must be at least {min}px")
            }));
        }
        if let Some(max) = opts.max_width
            && image.width > max
        {
            errors.push(base.resolve_check("maxWidth", || {
                format!("Image width must be at most {max}px")
            }));
        }
        if let Some(min) = opts.min_height
            && image.height < min
        {
            errors.push(base.resolve_check("minHeight", || {
                format!("Image height must be at least {min}px")
            }));
        }
        if let Some(max) = opts.max_height
            && image.height > max
        {
            errors.push(base.resolve_check("maxHeight", || {
                format!("Image height must be at most {max}px")
            }));
        }
    }
}

#[async_trait]
impl AsyncValidate for ImageValidator {
    async fn validate(&self, value: &Value, options: &ValidatorOptions) -> Verdict {
        let Value::Blob(blob) = value else {
            self.sink.warn(&format!(
                "image validator expects a blob, got {}; skipping checks",
                value.type_name()
            ));
            return Verdict::Valid;
        };
        if !matches!(options, ValidatorOptions::Image(_)) {
            self.sink.warn(&format!(
                "image validator received `{}` options; using defaults",
                options.kind()
            ));
        }
        let opts = ImageOptions::from_options(options);
        let mut errors = Vec::new();

        if opts.has_dimension_bounds() {
            match self.dimensions(blob).await {
                Ok(image) => Self::check_dimensions(image, &opts, &mut errors),
                Err(e) => self.sink.warn(&format!(
                    "could not read image dimensions: {e}; skipping dimension checks"
                )),
            }
        }

        if let Some(limit) = &opts.size {
            match self.sizes.parse(limit) {
                Ok(max_bytes) if blob.size() > max_bytes => {
                    errors.push(opts.base.resolve_check("size", || {
                        format!("File size must not exceed {limit}")
                    }));
                }
                Ok(_) => {}
                Err(e) => self.sink.warn(&format!(
                    "invalid size limit '{limit}': {e}; skipping size check"
                )),
            }
        }

        if let Some(filter) = &opts.mime_type {
            let allowed = filter.patterns();
            let matchers: Vec<Regex> = allowed.iter().copied().filter_map(type_matcher).collect();
            if !allowed.is_empty() && !is_text_includes(&matchers, blob.mime_type()) {
                errors.push(opts.base.resolve_check("type", || {
                    format!("File type must be one of: {}", allowed.join(", "))
                }));
            }
        }

        Verdict::from_messages(errors)
    }
}

/// Compiles a MIME type pattern case-insensitively. A pattern that is not a
/// valid regex matches as literal text.
fn type_matcher(pattern: &str) -> Option<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .or_else(|_| {
            RegexBuilder::new(&regex::escape(pattern))
                .case_insensitive(true)
                .build()
        })
        .ok()
}

impl std::fmt::Debug for ImageValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageValidator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::BaseOptions;
    use parking_lot::Mutex;
    use std::io::Cursor;

    fn png(width: u32, height: u32) -> Blob {
        let img = image::RgbImage::new(width, height);
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        Blob::new(bytes, "image/png")
    }

    fn validator_with_log() -> (ImageValidator, Arc<Mutex<Vec<String>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink_log = Arc::clone(&log);
        let collaborators = Collaborators::default()
            .with_sink(move |message: &str| sink_log.lock().push(message.to_owned()));
        (ImageValidator::new(&collaborators), log)
    }

    #[tokio::test]
    async fn test_dimension_violations_accumulate() {
        let (validator, _) = validator_with_log();
        let options = ImageOptions::new()
            .min_width(100)
            .max_height(10)
            .into();
        let verdict = validator.validate(&png(50, 20).into(), &options).await;
        assert_eq!(
            verdict.into_messages(),
            [
                "Image width must be at least 100px",
                "Image height must be at most 10px"
            ]
        );
    }

    #[tokio::test]
    async fn test_within_bounds_is_valid() {
        let (validator, log) = validator_with_log();
        let options = ImageOptions::new()
            .min_width(10)
            .max_width(100)
            .min_height(10)
            .max_height(100)
            .into();
        let verdict = validator.validate(&png(64, 48).into(), &options).await;
        assert_eq!(verdict, Verdict::Valid);
        assert!(log.lock().is_empty());
    }

    #[tokio::test]
    async fn test_size_limit() {
        let (validator, _) = validator_with_log();
        let blob = Blob::new(vec![0u8; 2048], "image/png");

        let tight = ImageOptions::new().size("1kb").into();
        assert_eq!(
            validator.validate(&blob.clone().into(), &tight).await,
            Verdict::Messages(vec!["File size must not exceed 1kb".into()])
        );

        let loose = ImageOptions::new().size(4096).into();
        assert_eq!(validator.validate(&blob.into(), &loose).await, Verdict::Valid);
    }

    #[tokio::test]
    async fn test_unparsable_size_warns_and_skips() {
        let (validator, log) = validator_with_log();
        let blob = Blob::new(vec![0u8; 2048], "image/png");
        let options = ImageOptions::new().size("huge").into();

        assert_eq!(validator.validate(&blob.into(), &options).await, Verdict::Valid);
        assert_eq!(log.lock().len(), 1);
        assert!(log.lock()[0].contains("huge"));
    }

    #[tokio::test]
    async fn test_type_filter_is_case_insensitive() {
        let (validator, _) = validator_with_log();
        let blob = Blob::new(vec![1u8], "IMAGE/PNG");

        let ok = ImageOptions::new().mime_type("image/jpeg, image/png").into();
        assert_eq!(validator.validate(&blob.clone().into(), &ok).await, Verdict::Valid);

        let prefix = ImageOptions::new().mime_type(vec!["^image/"]).into();
        assert_eq!(validator.validate(&blob.clone().into(), &prefix).await, Verdict::Valid);

        let bad = ImageOptions::new().mime_type("image/gif").into();
        assert_eq!(
            validator.validate(&blob.into(), &bad).await,
            Verdict::Messages(vec!["File type must be one of: image/gif".into()])
        );
    }

    #[tokio::test]
    async fn test_blank_type_filter_skips_check() {
        let (validator, _) = validator_with_log();
        let blob = Blob::new(vec![1u8], "image/png");

        for filter in ["", " , "] {
            let options = ImageOptions::new().mime_type(filter).into();
            assert_eq!(validator.validate(&blob.clone().into(), &options).await, Verdict::Valid);
        }
        let options = ImageOptions::new().mime_type(Vec::<&str>::new()).into();
        assert_eq!(validator.validate(&blob.into(), &options).await, Verdict::Valid);
    }

    #[tokio::test]
    async fn test_type_pattern_keeps_its_escapes() {
        let (validator, _) = validator_with_log();
        let blob = Blob::new(vec![1u8], "Image/PNG");

        let non_space = ImageOptions::new().mime_type(vec![r"^image/\S+$"]).into();
        assert_eq!(validator.validate(&blob.clone().into(), &non_space).await, Verdict::Valid);

        let no_digit = ImageOptions::new().mime_type(vec![r"^\D+$"]).into();
        assert_eq!(validator.validate(&blob.clone().into(), &no_digit).await, Verdict::Valid);

        let literal = ImageOptions::new().mime_type(vec!["image/png("]).into();
        assert_eq!(
            validator.validate(&blob.into(), &literal).await,
            Verdict::Messages(vec!["File type must be one of: image/png(".into()])
        );
    }

    #[tokio::test]
    async fn test_per_check_messages() {
        let (validator, _) = validator_with_log();
        let base = BaseOptions::default()
            .with_message("bad image")
            .with_check_message("type", "only gifs");
        let options = ImageOptions::new()
            .size(1)
            .mime_type("image/gif")
            .with_base(base)
            .into();
        let blob = Blob::new(vec![0u8; 8], "image/png");

        assert_eq!(
            validator.validate(&blob.into(), &options).await.into_messages(),
            ["bad image", "only gifs"]
        );
    }

    #[tokio::test]
    async fn test_non_blob_warns_once() {
        let (validator, log) = validator_with_log();
        let options = ImageOptions::new().min_width(1).into();

        let verdict = validator.validate(&Value::from("photo.png"), &options).await;
        assert_eq!(verdict, Verdict::Valid);
        assert_eq!(log.lock().len(), 1);
    }

    #[tokio::test]
    async fn test_undecodable_blob_warns_and_skips_dimensions() {
        let (validator, log) = validator_with_log();
        let blob = Blob::new(b"not an image".to_vec(), "image/png");
        let options = ImageOptions::new().min_width(1).into();

        assert_eq!(validator.validate(&blob.into(), &options).await, Verdict::Valid);
        assert_eq!(log.lock().len(), 1);
    }
}
