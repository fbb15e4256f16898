//! Capabilities the validators consume but do not implement.
//!
//! Every collaborator is a trait with a default implementation, so hosts can
//! swap in their own (a browser bridge, a test double, a different image
//! backend) without touching the validators.
//!
//! | Collaborator        | Trait               | Default                 |
//! |---------------------|---------------------|-------------------------|
//! | diagnostics         | [`DiagnosticSink`]  | [`TracingSink`]         |
//! | system appearance   | [`AppearanceQuery`] | [`EnvAppearance`]       |
//! | blob -> data URL    | [`BlobEncoder`]     | [`Base64Encoder`]       |
//! | data URL -> image   | [`ImageDecoder`]    | [`DataUrlImageDecoder`] |
//! | size descriptor     | [`SizeParser`]      | [`HumanSizeParser`]     |

use std::fmt;
use std::sync::Arc;

pub mod appearance;
pub mod data_url;
pub mod diagnostics;
pub mod size;

pub use appearance::{AppearanceQuery, EnvAppearance, FixedAppearance, colorfgbg_is_dark};
pub use data_url::{
    Base64Encoder, BlobEncoder, DataUrlImageDecoder, DecodedImage, ImageDecoder, parse_data_url,
};
pub use diagnostics::{DiagnosticSink, TracingSink};
pub use size::{HumanSizeParser, SizeLimit, SizeParser};

/// The collaborators a validation engine hands to its validators.
#[derive(Clone)]
pub struct Collaborators {
    pub sink: Arc<dyn DiagnosticSink>,
    pub encoder: Arc<dyn BlobEncoder>,
    pub decoder: Arc<dyn ImageDecoder>,
    pub sizes: Arc<dyn SizeParser>,
}

impl Collaborators {
    #[must_use]
    pub fn with_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    #[must_use]
    pub fn with_encoder(mut self, encoder: impl BlobEncoder + 'static) -> Self {
        self.encoder = Arc::new(encoder);
        self
    }

    #[must_use]
    pub fn with_decoder(mut self, decoder: impl ImageDecoder + 'static) -> Self {
        self.decoder = Arc::new(decoder);
        self
    }

    #[must_use]
    pub fn with_size_parser(mut self, sizes: impl SizeParser + 'static) -> Self {
        self.sizes = Arc::new(sizes);
        self
    }
}

impl Default for Collaborators {
    fn default() -> Self {
        Self {
            sink: Arc::new(TracingSink),
            encoder: Arc::new(Base64Encoder),
            decoder: Arc::new(DataUrlImageDecoder),
            sizes: Arc::new(HumanSizeParser),
        }
    }
}

impl fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}
