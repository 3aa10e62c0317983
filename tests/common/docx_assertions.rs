/// Count the non-overlapping occurrences of `needle` in `haystack`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// The text of every `<w:t>` element, in document order, concatenated per
/// paragraph.
pub fn paragraph_texts(xml: &str) -> Vec<String> {
    xml.split("<w:p>")
        .skip(1)
        .map(|paragraph| {
            let mut text = String::new();
            let mut rest = paragraph;
            while let Some(start) = rest.find("<w:t xml:space=\"preserve\">") {
                let after = &rest[start + "<w:t xml:space=\"preserve\">".len()..];
                let end = after.find("</w:t>").unwrap_or(after.len());
                text.push_str(&after[..end]);
                rest = &after[end..];
            }
            text
        })
        .collect()
}

/// Assert that a package part contains a string
#[macro_export]
macro_rules! assert_part_contains {
    ($docx:expr, $part:expr, $text:expr) => {
        let xml = $docx.part($part)?;
        assert!(
            xml.contains($text),
            "{} should contain '{}', but it was:\n{}",
            $part,
            $text,
            xml
        );
    };
}

/// Assert that a package part does NOT contain a string
#[macro_export]
macro_rules! assert_part_not_contains {
    ($docx:expr, $part:expr, $text:expr) => {
        let xml = $docx.part($part)?;
        assert!(
            !xml.contains($text),
            "{} should NOT contain '{}', but it was found in:\n{}",
            $part,
            $text,
            xml
        );
    };
}
