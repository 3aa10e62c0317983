// src/pipeline/orchestrator.rs
use crate::content::Content;
use crate::error::PipelineError;
use crate::renderer::{LOGO_RESOURCE, render};
use log::{debug, info};
use skyedoc_idf::Document;
use skyedoc_render_docx::{DocxOptions, render_to_bytes};
use skyedoc_style::{DesignTokens, PageGeometry};
use skyedoc_traits::ResourceProvider;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tokio::task;

/// The document generation pipeline.
///
/// Loading the logo and building the block tree happen on the caller's
/// thread; serialization runs on a blocking task and is the only point where
/// [`DocumentPipeline::generate`] suspends.
pub struct DocumentPipeline {
    tokens: Arc<DesignTokens>,
    geometry: PageGeometry,
    resources: Arc<dyn ResourceProvider>,
    logo: String,
    options: DocxOptions,
}

impl DocumentPipeline {
    pub fn new(
        tokens: Arc<DesignTokens>,
        geometry: PageGeometry,
        resources: Arc<dyn ResourceProvider>,
        logo: String,
        options: DocxOptions,
    ) -> Self {
        Self {
            tokens,
            geometry,
            resources,
            logo,
            options,
        }
    }

    pub fn tokens(&self) -> &DesignTokens {
        &self.tokens
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Loads the logo and renders the content into a document with the logo
    /// attached. Fails before any block is built if the logo is unusable.
    pub fn prepare(&self, content: &Content) -> Result<Document, PipelineError> {
        let logo = self.resources.load_image(&self.logo)?;
        debug!(
            "Loaded logo '{}' ({}, {} bytes) from {}",
            logo.path,
            logo.format.mime_type(),
            logo.data.len(),
            self.resources.name()
        );

        let mut document = render(content, &self.tokens, &self.geometry);
        document.add_resource(LOGO_RESOURCE, logo.data);
        Ok(document)
    }

    /// Generates the complete `.docx` package in memory.
    pub async fn generate(&self, content: &Content) -> Result<Vec<u8>, PipelineError> {
        let start = Instant::now();
        let document = self.prepare(content)?;
        let options = self.options.clone();
        let bytes = task::spawn_blocking(move || render_to_bytes(&document, options)).await??;
        info!(
            "Generated {} preset document ({} bytes) in {:.2?}",
            self.geometry.preset,
            bytes.len(),
            start.elapsed()
        );
        Ok(bytes)
    }

    /// Generates the document and writes it to `path`, replacing any existing
    /// file.
    pub async fn generate_to_file<P: AsRef<Path>>(
        &self,
        content: &Content,
        path: P,
    ) -> Result<(), PipelineError> {
        let path = path.as_ref();
        let bytes = self.generate(content).await?;
        tokio::fs::write(path, &bytes).await?;
        info!("Wrote {}", path.display());
        Ok(())
    }
}
