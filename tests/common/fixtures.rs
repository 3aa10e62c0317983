use skyedoc::{Content, Section, Span};

/// The logo shipped in `assets/`.
pub const LOGO_PNG: &[u8] = include_bytes!("../../assets/skyetrain-logo.png");

/// Content with a title block and nothing else.
pub fn title_only() -> Content {
    Content::new("Field Guide", "For new starters", "Jo Bloggs")
}

/// `n` sections, each with a heading and two paragraphs.
pub fn sections(n: usize) -> Content {
    (1..=n).fold(title_only(), |content, i| {
        content.section(
            Section::new(&format!("Section {}", i))
                .paragraph(format!("First paragraph of section {}.", i).as_str())
                .paragraph(vec![
                    Span::plain("Second paragraph with "),
                    Span::bold("bold"),
                    Span::plain(" and "),
                    Span::italic("italic"),
                    Span::plain(" text."),
                ]),
        )
    })
}

/// One section whose only lists are `count` bullets.
pub fn bullets_only(count: usize) -> Content {
    let bullets: Vec<String> = (1..=count).map(|i| format!("Bullet {}", i)).collect();
    title_only().section(Section::new("Checklist").bullets(bullets))
}

/// One section with bullets followed by `after` paragraphs.
pub fn bullets_and_after() -> Content {
    title_only().section(
        Section::new("Next steps")
            .bullets(["Read the outline", "Book a session"])
            .after("Then wait for confirmation.")
            .after("Confirmation usually arrives within a day."),
    )
}
