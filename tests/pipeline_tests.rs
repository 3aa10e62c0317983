mod common;

use common::docx_assertions::{count, paragraph_texts};
use common::fixtures::*;
use common::{GeneratedDocx, LOGO_KEY, TestResult, fixed_timestamp, generate_docx, pipeline};
use skyedoc::{PipelineBuilder, PipelineError, Preset, TokenSet, brand};
use skyedoc_style::TokenError;
use skyedoc_traits::{InMemoryResourceProvider, ResourceError};
use std::sync::Arc;

#[test]
fn test_package_has_all_parts() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let docx = generate_docx(Preset::Wide, &brand::content())?;
    assert_eq!(
        docx.part_names()?,
        vec![
            "[Content_Types].xml",
            "_rels/.rels",
            "docProps/core.xml",
            "word/_rels/document.xml.rels",
            "word/document.xml",
            "word/footer1.xml",
            "word/header1.xml",
            "word/media/image1.png",
            "word/numbering.xml",
            "word/styles.xml",
        ]
    );
    Ok(())
}

#[test]
fn test_wide_and_book_page_sizes() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let wide = generate_docx(Preset::Wide, &title_only())?;
    assert_part_contains!(wide, "word/document.xml", "<w:pgSz w:w=\"11906\" w:h=\"16838\"/>");
    assert_part_contains!(wide, "word/document.xml", "<wp:extent cx=\"1714500\" cy=\"400050\"/>");

    let book = generate_docx(Preset::Book, &title_only())?;
    assert_part_contains!(book, "word/document.xml", "<w:pgSz w:w=\"8640\" w:h=\"12960\"/>");
    assert_part_contains!(book, "word/document.xml", "<wp:extent cx=\"1428750\" cy=\"333375\"/>");
    Ok(())
}

#[test]
fn test_zero_sections_document_text() -> TestResult {
    let docx = generate_docx(Preset::Wide, &title_only())?;
    let texts: Vec<String> = paragraph_texts(&docx.document_xml()?)
        .into_iter()
        .filter(|t| !t.is_empty())
        .collect();
    assert_eq!(texts, vec!["Field Guide", "For new starters", "by Jo Bloggs"]);
    assert_part_not_contains!(docx, "word/document.xml", "<w:keepNext/>");
    Ok(())
}

#[test]
fn test_bullets_reference_the_shared_definition() -> TestResult {
    let docx = generate_docx(Preset::Wide, &bullets_only(3))?;
    let body = docx.document_xml()?;
    assert_eq!(count(&body, "<w:numId w:val=\"1\"/>"), 3);
    assert_part_contains!(docx, "word/numbering.xml", "<w:lvlText w:val=\"\u{2022}\"/>");
    assert_part_contains!(docx, "word/numbering.xml", "<w:num w:numId=\"1\">");
    Ok(())
}

#[test]
fn test_heading_hints_reach_the_package() -> TestResult {
    let docx = generate_docx(Preset::Wide, &sections(2))?;
    let body = docx.document_xml()?;
    assert_eq!(count(&body, "<w:keepNext/><w:keepLines/>"), 2);
    // Four body paragraphs carry widow control.
    assert_eq!(count(&body, "<w:widowControl/>"), 4);
    // Accent-blue left border on each heading.
    assert_eq!(count(&body, "<w:left w:val=\"single\" w:sz=\"24\" w:space=\"6\" w:color=\"1F6FB2\"/>"), 2);
    Ok(())
}

#[test]
fn test_header_and_footer_labels() -> TestResult {
    let docx = generate_docx(Preset::Book, &title_only())?;
    assert_part_contains!(docx, "word/header1.xml", brand::HEADER_LABEL);
    assert_part_contains!(docx, "word/header1.xml", "<w:jc w:val=\"right\"/>");
    assert_part_contains!(docx, "word/header1.xml", "<w:bottom w:val=\"single\"");
    assert_part_contains!(docx, "word/footer1.xml", brand::SITE_LABEL);
    assert_part_contains!(docx, "word/footer1.xml", "<w:i/>");
    assert_part_contains!(docx, "word/footer1.xml", "<w:top w:val=\"single\"");
    assert_part_contains!(docx, "word/document.xml", "<w:footerReference w:type=\"default\" r:id=\"rIdFooter1\"/>");
    Ok(())
}

#[test]
fn test_output_is_reproducible() -> TestResult {
    let first = generate_docx(Preset::Wide, &brand::content())?;
    let second = generate_docx(Preset::Wide, &brand::content())?;
    assert_eq!(first.bytes, second.bytes);
    assert_part_contains!(first, "docProps/core.xml", "2025-01-15T09:00:00Z");
    Ok(())
}

#[test]
fn test_generate_to_file_overwrites() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir()?;
    let path = dir.path().join(brand::output_file_name(Preset::Book));
    std::fs::write(&path, b"stale")?;

    let pipeline = pipeline(Preset::Book)?;
    tokio::runtime::Runtime::new()?.block_on(pipeline.generate_to_file(&brand::content(), &path))?;

    let docx = GeneratedDocx {
        bytes: std::fs::read(&path)?,
    };
    assert!(docx.bytes.starts_with(b"PK"));
    assert_part_contains!(docx, "word/document.xml", "Welcome to SkyeTrain");
    Ok(())
}

#[test]
fn test_logo_from_filesystem() -> TestResult {
    let dir = tempfile::tempdir()?;
    let logo = dir.path().join("logo.png");
    std::fs::write(&logo, LOGO_PNG)?;

    let pipeline = PipelineBuilder::new()
        .with_logo_path(logo.to_string_lossy())
        .with_created(fixed_timestamp())
        .build()?;
    let document = pipeline.prepare(&title_only())?;
    assert_eq!(document.resources.len(), 1);
    assert_eq!(document.image_sources(), vec![skyedoc::renderer::LOGO_RESOURCE]);
    Ok(())
}

#[test]
fn test_missing_logo_is_fatal() -> TestResult {
    let dir = tempfile::tempdir()?;
    let pipeline = PipelineBuilder::new()
        .with_logo_path(dir.path().join("missing.png").to_string_lossy())
        .build()?;

    let err = pipeline.prepare(&title_only()).unwrap_err();
    assert!(matches!(err, PipelineError::Resource(ResourceError::NotFound(_))), "{err}");
    Ok(())
}

#[test]
fn test_logo_must_be_an_image() -> TestResult {
    let resources = InMemoryResourceProvider::new().with(LOGO_KEY, b"not an image".to_vec())?;
    let pipeline = PipelineBuilder::new()
        .with_resource_provider(Arc::new(resources))
        .with_logo_path(LOGO_KEY)
        .build()?;

    let err = pipeline.prepare(&title_only()).unwrap_err();
    assert!(matches!(err, PipelineError::Resource(ResourceError::InvalidFormat(_))));
    Ok(())
}

#[test]
fn test_incomplete_tokens_fail_at_build() -> TestResult {
    let mut tokens = brand::tokens();
    tokens.palette.remove("accent-red");
    tokens.sizes.remove("footer");

    let Err(err) = PipelineBuilder::new().with_tokens(tokens).build() else {
        panic!("build should fail");
    };
    match err {
        PipelineError::Tokens(TokenError::Missing(keys)) => {
            assert_eq!(keys, vec!["palette.accent-red", "sizes.footer"]);
        }
        other => panic!("unexpected error: {other}"),
    }

    let Err(err) = PipelineBuilder::new().with_tokens(TokenSet::default()).build() else {
        panic!("empty token set should fail");
    };
    assert!(matches!(err, PipelineError::Tokens(TokenError::Missing(keys)) if keys.len() == 31));
    Ok(())
}

#[test]
fn test_content_loaded_from_json() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("content.json");
    std::fs::write(
        &path,
        r#"{
            "title": "From JSON",
            "subtitle": "Shorthand spans",
            "author": "Tester",
            "sections": [
                { "heading": "Only", "paragraphs": ["plain", [{ "text": "strong", "bold": true }]] }
            ]
        }"#,
    )?;

    let content = skyedoc::Content::from_file(&path)?;
    let docx = generate_docx(Preset::Wide, &content)?;
    let texts = paragraph_texts(&docx.document_xml()?);
    assert!(texts.iter().any(|t| t == "strong"));
    assert_part_contains!(docx, "word/document.xml", "w:ascii=\"Arial\"");
    Ok(())
}

#[test]
fn test_pasted_control_characters_keep_package_valid() -> TestResult {
    let content = title_only().section(
        skyedoc::Section::new("Pasted").paragraph("bad\u{000B}char\u{0007} and\ttab"),
    );
    let docx = generate_docx(Preset::Wide, &content)?;
    let body = docx.document_xml()?;
    assert!(!body.contains('\u{000B}'));
    assert!(!body.contains('\u{0007}'));
    assert_part_contains!(docx, "word/document.xml", "<w:t xml:space=\"preserve\">badchar and</w:t><w:tab/>");
    Ok(())
}
