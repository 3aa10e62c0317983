use skyedoc_idf::{ImageFormat, SharedData};
use skyedoc_render_core::RenderError;
use std::collections::BTreeMap;

/// One embedded image, numbered in registration order starting at 1.
#[derive(Debug, Clone)]
pub(crate) struct MediaEntry {
    pub index: usize,
    pub format: ImageFormat,
    pub data: SharedData,
}

impl MediaEntry {
    /// Relationship target, relative to the `word/` directory.
    pub fn target(&self) -> String {
        format!("media/image{}.{}", self.index, self.format.extension())
    }

    pub fn part_name(&self) -> String {
        format!("word/{}", self.target())
    }

    /// Every story part that shows this image uses the same id in its own
    /// relationship part.
    pub fn rel_id(&self) -> String {
        format!("rIdImage{}", self.index)
    }
}

#[derive(Debug, Default)]
pub(crate) struct MediaTable {
    entries: BTreeMap<String, MediaEntry>,
}

impl MediaTable {
    pub fn register(&mut self, src: &str, data: SharedData) -> Result<&MediaEntry, RenderError> {
        let format = ImageFormat::sniff(&data).ok_or_else(|| {
            RenderError::Other(format!("Resource '{}' is not a PNG, JPEG or GIF image", src))
        })?;
        let index = self.entries.len() + 1;
        Ok(self
            .entries
            .entry(src.to_string())
            .or_insert(MediaEntry { index, format, data }))
    }

    pub fn get(&self, src: &str) -> Option<&MediaEntry> {
        self.entries.get(src)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries ordered by their index.
    pub fn entries(&self) -> Vec<(&str, &MediaEntry)> {
        let mut entries: Vec<_> = self.entries.iter().map(|(k, v)| (k.as_str(), v)).collect();
        entries.sort_by_key(|(_, e)| e.index);
        entries
    }

    /// The distinct formats present, for the content-type defaults.
    pub fn formats(&self) -> Vec<ImageFormat> {
        let mut formats: Vec<ImageFormat> = Vec::new();
        for (_, entry) in self.entries() {
            if !formats.contains(&entry.format) {
                formats.push(entry.format);
            }
        }
        formats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    const PNG: &[u8] = b"\x89PNG\r\n\x1a\n0000";

    #[test]
    fn numbers_entries_in_registration_order() {
        let mut table = MediaTable::default();
        table.register("logo", Arc::new(PNG.to_vec())).unwrap();
        table.register("photo", Arc::new(vec![0xFF, 0xD8, 0xFF, 0xE0])).unwrap();
        table.register("logo", Arc::new(PNG.to_vec())).unwrap();

        assert_eq!(table.len(), 2);
        let logo = table.get("logo").unwrap();
        assert_eq!(logo.part_name(), "word/media/image1.png");
        assert_eq!(logo.rel_id(), "rIdImage1");
        assert_eq!(table.get("photo").unwrap().target(), "media/image2.jpeg");
        assert_eq!(table.formats(), vec![ImageFormat::Png, ImageFormat::Jpeg]);
    }

    #[test]
    fn rejects_unknown_formats() {
        let mut table = MediaTable::default();
        let err = table.register("vector", Arc::new(b"<svg/>".to_vec())).unwrap_err();
        assert!(err.to_string().contains("vector"));
    }
}
