pub mod docx_assertions;
pub mod fixtures;

use chrono::{DateTime, TimeZone, Utc};
use skyedoc::{Content, DocumentPipeline, PipelineBuilder, PipelineError, Preset};
use skyedoc_traits::InMemoryResourceProvider;
use std::io::{Cursor, Read};
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// The logo key used by pipelines built with [`pipeline`].
pub const LOGO_KEY: &str = "skyetrain-logo.png";

/// Wrapper around a generated package with helper methods
pub struct GeneratedDocx {
    pub bytes: Vec<u8>,
}

impl GeneratedDocx {
    /// Names of every part in the package, sorted.
    pub fn part_names(&self) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        let archive = zip::ZipArchive::new(Cursor::new(self.bytes.as_slice()))?;
        let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
        names.sort();
        Ok(names)
    }

    /// The decoded contents of one XML part.
    pub fn part(&self, name: &str) -> Result<String, Box<dyn std::error::Error>> {
        let mut archive = zip::ZipArchive::new(Cursor::new(self.bytes.as_slice()))?;
        let mut file = archive.by_name(name)?;
        let mut out = String::new();
        file.read_to_string(&mut out)?;
        Ok(out)
    }

    pub fn document_xml(&self) -> Result<String, Box<dyn std::error::Error>> {
        self.part("word/document.xml")
    }
}

pub fn fixed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap()
}

/// A pipeline for `preset` whose logo comes from memory and whose timestamp
/// is fixed.
pub fn pipeline(preset: Preset) -> Result<DocumentPipeline, PipelineError> {
    let resources = InMemoryResourceProvider::new().with(LOGO_KEY, fixtures::LOGO_PNG.to_vec())?;
    PipelineBuilder::new()
        .with_preset(preset)
        .with_resource_provider(Arc::new(resources))
        .with_logo_path(LOGO_KEY)
        .with_created(fixed_timestamp())
        .build()
}

/// Generate a package for `content` with the given preset
pub fn generate_docx(preset: Preset, content: &Content) -> Result<GeneratedDocx, PipelineError> {
    let pipeline = pipeline(preset)?;
    let bytes = tokio::runtime::Runtime::new()?.block_on(pipeline.generate(content))?;
    Ok(GeneratedDocx { bytes })
}
