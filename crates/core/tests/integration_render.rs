//! Integration tests for banner rendering through the public API

use console::measure_text_width;
use proem_core::layout::Align;
use proem_core::proem::{Proem, Spacing};

#[test]
fn test_every_line_spans_the_same_columns() {
    let proem = Proem::builder("my-app")
        .tagline("fast and friendly")
        .version("2.1.0")
        .repo_url("https://example.com/my-app")
        .description("Renders banners for CLI applications.")
        .width(36)
        .build()
        .unwrap();
    let rendered = proem.render();

    for line in rendered.lines() {
        assert_eq!(
            measure_text_width(line),
            36,
            "line {:?} should span the full box width",
            line
        );
    }
}

#[test]
fn test_description_chunks_recover_the_input() {
    let description = "abcdefghijklmnopqrstABCDEFGHIJ";
    let proem = Proem::builder("app")
        .description(description)
        .width(24)
        .no_color()
        .build()
        .unwrap();
    let rendered = proem.render();

    // Interior width 22 leaves 20-character chunks, so the description
    // splits into exactly two lines.
    assert!(rendered.contains("# abcdefghijklmnopqrst #"));

    let rejoined: String = rendered
        .lines()
        .filter(|line| line.contains(|c: char| c.is_ascii_alphabetic()))
        .skip(1) // title line
        .map(|line| line.trim_matches('#').trim().to_string())
        .collect();
    assert_eq!(rejoined, description);
}

#[test]
fn test_full_banner_layout() {
    let proem = Proem::builder("my-app")
        .tagline("fast and friendly")
        .version("2.1.0")
        .repo_url("https://example.com/my-app")
        .description("Renders banners.")
        .width(30)
        .no_color()
        .build()
        .unwrap();

    let expected = "\
##############################
#           my-app           #
#     fast and friendly      #
#                            #
#           2.1.0            #
#                            #
# https://example.com/my-app #
#                            #
# Renders banners.           #
##############################
";
    assert_eq!(proem.render(), expected);
}

#[test]
fn test_compact_banner_drops_blank_lines() {
    let proem = Proem::builder("my-app")
        .tagline("fast and friendly")
        .version("2.1.0")
        .repo_url("https://example.com/my-app")
        .description("Renders banners.")
        .width(30)
        .no_color()
        .spacing(Spacing::Compact)
        .build()
        .unwrap();

    let expected = "\
##############################
#           my-app           #
#     fast and friendly      #
#           2.1.0            #
# https://example.com/my-app #
# Renders banners.           #
##############################
";
    assert_eq!(proem.render(), expected);
}

#[test]
fn test_centered_and_right_aligned_descriptions() {
    let base = || {
        Proem::builder("app")
            .description("centered text")
            .width(21)
            .no_color()
    };

    let centered = base().align(Align::Center).build().unwrap();
    assert!(centered.render().contains("#   centered text   #"));

    let right = base().align(Align::Right).build().unwrap();
    assert!(right.render().contains("#     centered text #"));
}

#[test]
fn test_empty_title_is_an_error() {
    assert!(Proem::builder("").width(20).build().is_err());
}
