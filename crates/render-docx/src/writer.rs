use skyedoc_render_core::RenderError;
use std::io::{Seek, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Writes OPC parts into a zip container.
///
/// Entry timestamps are pinned to the zip epoch so that identical documents
/// produce identical archives.
pub struct PackageWriter<W: Write + Seek> {
    zip: ZipWriter<W>,
    options: SimpleFileOptions,
    parts_written: usize,
}

impl<W: Write + Seek> PackageWriter<W> {
    pub fn new(writer: W) -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());
        Self {
            zip: ZipWriter::new(writer),
            options,
            parts_written: 0,
        }
    }

    /// Adds one part. `name` is the part name without a leading slash, e.g.
    /// `word/document.xml`.
    pub fn write_part(&mut self, name: &str, bytes: &[u8]) -> Result<(), RenderError> {
        self.zip
            .start_file(name, self.options)
            .map_err(|e| RenderError::Archive(format!("{}: {}", name, e)))?;
        self.zip.write_all(bytes)?;
        self.parts_written += 1;
        log::debug!("Wrote package part {} ({} bytes)", name, bytes.len());
        Ok(())
    }

    pub fn parts_written(&self) -> usize {
        self.parts_written
    }

    pub fn finish(self) -> Result<W, RenderError> {
        self.zip
            .finish()
            .map_err(|e| RenderError::Archive(e.to_string()))
    }
}
