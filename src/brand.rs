//! Built-in SkyeTrain tokens, labels, paths and guide content.
//!
//! Tokens are kept in their raw [`TokenSet`] form so they go through the same
//! validation as a token file would.

use crate::content::{Content, Paragraph, Section, Span};
use skyedoc_style::{Preset, TokenSet};

/// Right-aligned label in the running header.
pub const HEADER_LABEL: &str = "SKYETRAIN";
/// Centered label in the running footer.
pub const SITE_LABEL: &str = "www.skyetrain.com";
/// Written into the document properties as the creating organisation.
pub const CREATOR: &str = "SkyeTrain";

pub const DEFAULT_LOGO_PATH: &str = "assets/skyetrain-logo.png";

/// Output file name for each page preset.
pub fn output_file_name(preset: Preset) -> &'static str {
    match preset {
        Preset::Wide => "SkyeTrain_Guide.docx",
        Preset::Book => "SkyeTrain_Guide_Mobile.docx",
    }
}

pub fn tokens() -> TokenSet {
    TokenSet::default()
        .color("ink", "#1A1A2E")
        .color("navy", "#14213D")
        .color("muted", "#5C6B7A")
        .color("accent-red", "#C8102E")
        .color("accent-blue", "#1F6FB2")
        .font("body", "Georgia")
        .font("heading", "Arial")
        .size("title", 28.0)
        .size("subtitle", 13.0)
        .size("author", 11.0)
        .size("heading", 15.0)
        .size("body", 11.0)
        .size("header", 8.0)
        .size("footer", 8.0)
        .gap("logo-after", 18.0)
        .gap("title-tracking", 2.0)
        .gap("title-after", 6.0)
        .gap("subtitle-after", 14.0)
        .gap("rule-weight", 1.5)
        .gap("rule-after", 12.0)
        .gap("author-after", 24.0)
        .gap("heading-before", 18.0)
        .gap("heading-after", 8.0)
        .gap("heading-border-weight", 3.0)
        .gap("heading-border-gap", 6.0)
        .gap("paragraph-after", 8.0)
        .gap("bullet-after", 4.0)
        .gap("bullet-indent", 18.0)
        .gap("bullet-hanging", 12.0)
        .gap("spacer", 6.0)
        .gap("line-height", 1.35)
}

pub fn content() -> Content {
    Content::new(
        "SkyeTrain",
        "The Learner Guide",
        "The SkyeTrain Team",
    )
    .section(
        Section::new("Welcome to SkyeTrain")
            .paragraph(
                "SkyeTrain delivers short, practical courses for people who learn best by doing. \
                 This guide explains how a course runs, what is expected of you and where to \
                 turn when you need a hand.",
            )
            .paragraph(vec![
                Span::plain("Keep it nearby during your first weeks. Everything in it applies to "),
                Span::bold("every"),
                Span::plain(" course, whichever track you have chosen."),
            ]),
    )
    .section(
        Section::new("How a Course Is Structured")
            .paragraph("Each course is split into modules. A module combines three elements:")
            .bullets([
                "A short video lesson introducing the topic",
                "A guided exercise you complete in your own workspace",
                "A review session with your trainer",
            ])
            .after(vec![
                Span::plain("Modules unlock in order. You can revisit finished modules at any time, but "),
                Span::italic("new"),
                Span::plain(" modules open only once the previous review is complete."),
            ]),
    )
    .section(
        Section::new("Your First Week")
            .paragraph("Before the first session, make sure the basics are in place.")
            .bullets([
                "Sign in to the learner portal and complete your profile",
                "Check that your camera and microphone work",
                "Read the course outline for your track",
            ])
            .after("Your trainer will contact you by the end of the first day to agree a schedule.")
            .bullets2([
                "Attend the welcome call",
                "Finish the first module exercise",
            ])
            .after2(Paragraph::new(vec![
                Span::plain("Reaching both milestones in week one keeps you "),
                Span {
                    text: "on track".to_string(),
                    bold: true,
                    italic: true,
                },
                Span::plain(" for certification."),
            ])),
    )
    .section(
        Section::new("Getting Help")
            .paragraph(
                "Questions about course material go to your trainer through the portal. \
                 Account and billing questions go to the support team.",
            )
            .bullets([
                "Portal messages are answered within one working day",
                "Urgent issues can be raised by phone during office hours",
            ]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyedoc_style::DesignTokens;

    #[test]
    fn built_in_tokens_are_complete() {
        let tokens = DesignTokens::from_token_set(&tokens()).unwrap();
        assert_eq!(tokens.fonts.body, "Georgia");
        assert_eq!(tokens.fonts.heading, "Arial");
        assert_eq!(tokens.spacing.line_height, 1.35);
    }

    #[test]
    fn built_in_content_exercises_every_list() {
        let content = content();
        assert!(!content.sections.is_empty());
        assert!(content.sections.iter().any(|s| !s.after2.is_empty()));
        assert!(content.sections.iter().any(|s| !s.bullets.is_empty() && s.after.is_empty()));
    }

    #[test]
    fn output_names_differ_per_preset() {
        assert_eq!(output_file_name(Preset::Wide), "SkyeTrain_Guide.docx");
        assert_eq!(output_file_name(Preset::Book), "SkyeTrain_Guide_Mobile.docx");
    }
}
