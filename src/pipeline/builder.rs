// src/pipeline/builder.rs
use super::orchestrator::DocumentPipeline;
use crate::brand;
use crate::error::PipelineError;
use chrono::{DateTime, Utc};
use skyedoc_render_docx::DocxOptions;
use skyedoc_resource::FilesystemResourceProvider;
use skyedoc_style::{DesignTokens, PageGeometry, Preset, TokenSet};
use skyedoc_traits::ResourceProvider;
use std::sync::Arc;

/// A builder for creating a `DocumentPipeline`.
///
/// Every setting has a SkyeTrain default: the built-in tokens, the wide
/// preset and the logo at [`brand::DEFAULT_LOGO_PATH`] read from disk.
pub struct PipelineBuilder {
    tokens: TokenSet,
    geometry: PageGeometry,
    logo_path: String,
    resources: Option<Arc<dyn ResourceProvider>>,
    created: Option<DateTime<Utc>>,
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self {
            tokens: brand::tokens(),
            geometry: PageGeometry::wide(),
            logo_path: brand::DEFAULT_LOGO_PATH.to_string(),
            resources: None,
            created: None,
        }
    }
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Replaces the design tokens. They are validated in [`Self::build`].
    pub fn with_tokens(mut self, tokens: TokenSet) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn with_preset(self, preset: Preset) -> Self {
        self.with_geometry(PageGeometry::preset(preset))
    }

    /// Path of the logo image. Without a custom resource provider it is read
    /// from the filesystem; with one, it is the key passed to that provider.
    pub fn with_logo_path(mut self, path: impl Into<String>) -> Self {
        self.logo_path = path.into();
        self
    }

    pub fn with_resource_provider(mut self, provider: Arc<dyn ResourceProvider>) -> Self {
        self.resources = Some(provider);
        self
    }

    /// Fixes the creation timestamp in the document properties, making the
    /// output reproducible.
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Consumes the builder and creates the `DocumentPipeline`.
    pub fn build(self) -> Result<DocumentPipeline, PipelineError> {
        let tokens = DesignTokens::from_token_set(&self.tokens)?;
        if self.logo_path.trim().is_empty() {
            return Err(PipelineError::Config("No logo path has been configured.".to_string()));
        }

        let (resources, logo): (Arc<dyn ResourceProvider>, String) = match self.resources {
            Some(provider) => (provider, self.logo_path),
            None => {
                let (provider, file) = FilesystemResourceProvider::for_file(&self.logo_path);
                (Arc::new(provider), file)
            }
        };
        log::debug!(
            "Building pipeline for the {} preset with resources from {}",
            self.geometry.preset,
            resources.name()
        );

        let mut options = DocxOptions::default();
        if let Some(created) = self.created {
            options = options.with_created(created);
        }

        Ok(DocumentPipeline::new(
            Arc::new(tokens),
            self.geometry,
            resources,
            logo,
            options,
        ))
    }
}
