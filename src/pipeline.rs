//! The plant identification pipeline.
//!
//! validate → fetch keys → normalize images → prompt → Gemini → parse →
//! photo enrichment → assemble. Every stage waits on the previous one and
//! the first failure ends the run; only photo lookups are allowed to fail
//! quietly.

use tracing::{debug, error, info};

use crate::assemble::{assemble, disease_title};
use crate::context::ServiceContext;
use crate::error::PlantError;
use crate::gallery::PhotoResolver;
use crate::inline_image::InlineImage;
use crate::model::ScannerMode;
use crate::params::validate_image_count;
use crate::parse::parse_identification;
use crate::plant::PlantInformation;
use crate::ports::{ContentPart, GenerationRequest};
use crate::prompt::build_identification_prompt;

/// Receives the human-readable message of every failed run.
pub type ErrorCallback = Box<dyn Fn(&str) + Send + Sync>;

/// Identifies plants using the ports of a [`ServiceContext`].
pub struct PlantIdentifier<'a> {
    ctx: &'a ServiceContext,
    model: String,
    on_error: Option<ErrorCallback>,
}

impl<'a> PlantIdentifier<'a> {
    /// Create an identifier that calls `model` through `ctx`.
    pub fn new(ctx: &'a ServiceContext, model: impl Into<String>) -> Self {
        Self { ctx, model: model.into(), on_error: None }
    }

    /// Register a callback invoked with the message of each failure.
    #[must_use]
    pub fn on_error(mut self, callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Box::new(callback));
        self
    }

    /// Identify the plant shown in `images`.
    ///
    /// Each image is raw base64 or a data URI. `identify` takes exactly one
    /// image; `diagnose` and `multiple` take exactly three.
    ///
    /// # Errors
    ///
    /// Returns the first failing stage's error; see [`PlantError`].
    pub async fn identify(
        &self,
        images: &[String],
        mode: ScannerMode,
    ) -> Result<PlantInformation, PlantError> {
        let result = self.run(images, mode).await;
        if let Err(ref e) = result {
            error!(%mode, error = %e, "plant identification failed");
            if let Some(ref callback) = self.on_error {
                callback(&e.to_string());
            }
        }
        result
    }

    async fn run(
        &self,
        images: &[String],
        mode: ScannerMode,
    ) -> Result<PlantInformation, PlantError> {
        validate_image_count(mode, images.len()).map_err(PlantError::Validation)?;

        let keys = self.ctx.credentials.fetch().await?;
        debug!("fetched API keys");

        let mut parts: Vec<ContentPart> =
            images.iter().map(|i| ContentPart::image(InlineImage::normalize(i))).collect();
        parts.push(ContentPart::text(build_identification_prompt(mode)));

        let request = GenerationRequest {
            model: self.model.clone(),
            parts,
            config: mode.generation_config(),
        };
        debug!(model = %request.model, %mode, images = images.len(), "requesting identification");
        let response = self.ctx.generator.generate(&keys.gemini, &request).await?;

        let raw = parse_identification(&response.text)?;
        debug!(name = raw.name(), diseases = raw.diseases().len(), "parsed identification");

        let resolver = PhotoResolver::new(self.ctx.image_search.as_ref(), &keys.pexels);
        let titles: Vec<String> = raw.diseases().iter().map(disease_title).collect();
        let (gallery, disease_photos) =
            futures::join!(resolver.gallery(raw.name()), resolver.disease_photos(&titles));

        let info = assemble(&raw, gallery, &disease_photos);
        info!(name = %info.name, images = info.images.len(), "identified plant");
        Ok(info)
    }
}
