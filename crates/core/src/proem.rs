//! Banner construction and rendering
//!
//! A proem is a bordered block of startup information (title, optional
//! tagline, version, repository URL, and description) printed at the top of
//! a CLI application's output. Options are collected on [`ProemBuilder`]
//! and resolved once by [`ProemBuilder::build`]: validation, color lookup,
//! the terminal-width query, and width clamping all happen there, so the
//! resulting [`Proem`] renders without I/O and without failure.

use crate::color;
use crate::errors::{ProemError, Result};
use crate::layout::{self, Align};
use crate::term;
use console::Style;
use std::fmt;

/// Default box width in border positions
pub const DEFAULT_WIDTH: i32 = 80;
/// Default border glyph
pub const DEFAULT_BORDER_CHAR: &str = "#";
/// Default border color name
pub const DEFAULT_BORDER_COLOR: &str = "magenta";

/// Vertical spacing between field groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spacing {
    /// A blank interior line before each of the version, repository, and
    /// description groups
    #[default]
    Spaced,
    /// Field groups rendered back to back
    Compact,
}

/// A fully resolved banner, ready to render
///
/// Built via [`Proem::builder`]. Width and color are fixed at build time;
/// [`Proem::render`] is pure and infallible, and rendering twice yields
/// identical output.
///
/// # Examples
///
/// ```
/// use proem_core::proem::Proem;
///
/// let proem = Proem::builder("my-app").width(20).build().unwrap();
/// assert_eq!(proem.render().lines().count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Proem {
    title: String,
    tagline: Option<String>,
    version: Option<String>,
    repo_url: Option<String>,
    description: Option<String>,
    glyph: String,
    width: usize,
    interior: usize,
    style: Option<Style>,
    align: Align,
    spacing: Spacing,
}

impl Proem {
    /// Start building a proem for the given application title
    pub fn builder(title: impl Into<String>) -> ProemBuilder {
        ProemBuilder::new(title)
    }

    /// Resolved box width in border positions
    pub fn width(&self) -> usize {
        self.width
    }

    /// Content columns between the two side glyphs
    pub fn interior_width(&self) -> usize {
        self.interior
    }

    /// Render the banner
    ///
    /// Every line, including the last border line, is `\n`-terminated. The
    /// output is byte-identical across calls and independent of whether
    /// stdout is a terminal.
    pub fn render(&self) -> String {
        let border = format!("{}\n", self.paint(&self.glyph.repeat(self.width)));
        let chunk_width = self.interior.saturating_sub(2);

        let mut out = String::new();
        out.push_str(&border);

        self.push_field(&mut out, &self.title, Align::Center, chunk_width);
        if let Some(tagline) = &self.tagline {
            self.push_field(&mut out, tagline, Align::Center, chunk_width);
        }
        if let Some(version) = &self.version {
            self.push_separator(&mut out);
            self.push_field(&mut out, version, Align::Center, chunk_width);
        }
        if let Some(repo_url) = &self.repo_url {
            self.push_separator(&mut out);
            self.push_field(&mut out, repo_url, Align::Center, chunk_width);
        }
        if let Some(description) = &self.description {
            self.push_separator(&mut out);
            self.push_field(&mut out, description, self.align, chunk_width);
        }

        out.push_str(&border);
        out
    }

    fn paint(&self, text: &str) -> String {
        match &self.style {
            Some(style) => style.apply_to(text).to_string(),
            None => text.to_string(),
        }
    }

    fn push_interior_line(&self, out: &mut String, text: &str, align: Align) {
        let side = self.paint(&self.glyph);
        out.push_str(&side);
        out.push_str(&layout::pad(text, self.interior, align));
        out.push_str(&side);
        out.push('\n');
    }

    fn push_field(&self, out: &mut String, text: &str, align: Align, chunk_width: usize) {
        for chunk in layout::wrap(text, chunk_width) {
            self.push_interior_line(out, &chunk, align);
        }
    }

    fn push_separator(&self, out: &mut String) {
        if self.spacing == Spacing::Spaced {
            self.push_interior_line(out, "", Align::Center);
        }
    }
}

impl fmt::Display for Proem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Builder for [`Proem`]
///
/// Raw options are held as given; nothing is validated or resolved until
/// [`build`](Self::build). Defaults: width 80, `#` border, magenta color,
/// left-aligned description, spaced layout.
#[derive(Debug, Clone)]
pub struct ProemBuilder {
    title: String,
    tagline: Option<String>,
    version: Option<String>,
    repo_url: Option<String>,
    description: Option<String>,
    width: i32,
    border_char: String,
    border_color: Option<String>,
    align: Align,
    spacing: Spacing,
}

impl ProemBuilder {
    /// Create a builder with the default style options
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tagline: None,
            version: None,
            repo_url: None,
            description: None,
            width: DEFAULT_WIDTH,
            border_char: DEFAULT_BORDER_CHAR.to_string(),
            border_color: Some(DEFAULT_BORDER_COLOR.to_string()),
            align: Align::default(),
            spacing: Spacing::default(),
        }
    }

    /// Short tagline shown directly under the title
    pub fn tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = Some(tagline.into());
        self
    }

    /// Version string to display
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Repository URL to display
    pub fn repo_url(mut self, repo_url: impl Into<String>) -> Self {
        self.repo_url = Some(repo_url.into());
        self
    }

    /// Long description, wrapped to fit the box
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Requested box width in border positions
    ///
    /// Zero or negative means "use the terminal width" (falling back to 80
    /// when there is no terminal to ask).
    pub fn width(mut self, width: i32) -> Self {
        self.width = width;
        self
    }

    /// Border glyph; may be more than one character
    pub fn border_char(mut self, border_char: impl Into<String>) -> Self {
        self.border_char = border_char.into();
        self
    }

    /// Border color name (black, red, green, yellow, blue, magenta, cyan,
    /// white; case-insensitive)
    ///
    /// Unknown names are not an error: `build` logs a warning and renders
    /// without color.
    pub fn border_color(mut self, border_color: impl Into<String>) -> Self {
        self.border_color = Some(border_color.into());
        self
    }

    /// Render without any escape sequences
    pub fn no_color(mut self) -> Self {
        self.border_color = None;
        self
    }

    /// Alignment of the description text (other fields are centered)
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Spacing between field groups
    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Validate the options and resolve them into a render-ready [`Proem`]
    ///
    /// Performs the single terminal-width query. Structural problems (empty
    /// title, empty border glyph) are errors; an unknown color name or an
    /// unsatisfiable width degrades with a warning instead.
    pub fn build(self) -> Result<Proem> {
        self.build_with_columns(term::detect_columns())
    }

    /// Build against an explicit terminal column count (or none)
    ///
    /// Split out from [`build`](Self::build) so width resolution is testable
    /// without a live terminal.
    pub(crate) fn build_with_columns(self, columns: Option<usize>) -> Result<Proem> {
        if self.title.is_empty() {
            return Err(ProemError::EmptyTitle);
        }
        if self.border_char.is_empty() {
            return Err(ProemError::EmptyBorderChar);
        }

        let style = match &self.border_color {
            Some(name) => match color::lookup(name) {
                Some(color) => Some(color::border_style(color)),
                None => {
                    tracing::warn!("Unknown border color '{}', rendering without color", name);
                    None
                }
            },
            None => None,
        };

        let tagline = normalize(self.tagline);
        let version = normalize(self.version);
        let repo_url = normalize(self.repo_url);
        let description = normalize(self.description);

        let glyph_len = self.border_char.chars().count();

        // The single-line fields must fit between the margins; the
        // description is excluded because it wraps to whatever width
        // resolves.
        let longest = [
            Some(self.title.as_str()),
            tagline.as_deref(),
            version.as_deref(),
            repo_url.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(|text| text.chars().count())
        .max()
        .unwrap_or(0);

        // Smallest width whose interior, (width - 2) * glyph_len, holds the
        // longest field plus its one-space margins.
        let min_width = (longest + 2 + glyph_len - 1) / glyph_len + 2;

        let mut width = if self.width > 0 {
            self.width as usize
        } else {
            columns.unwrap_or(DEFAULT_WIDTH as usize)
        };

        if let Some(columns) = columns {
            if width > columns {
                tracing::debug!("Clamping width {} to terminal width {}", width, columns);
                width = columns;
            }
        }

        if width < min_width {
            tracing::warn!(
                "Width {} is less than the proem text. Setting to minimum width {}.",
                width,
                min_width
            );
            width = min_width;
        }

        let interior = (width - 2) * glyph_len;
        tracing::debug!(
            "Resolved proem width: {} positions, {} interior columns",
            width,
            interior
        );

        Ok(Proem {
            title: self.title,
            tagline,
            version,
            repo_url,
            description,
            glyph: self.border_char,
            width,
            interior,
            style,
            align: self.align,
            spacing: self.spacing,
        })
    }
}

/// Treat empty optional fields as absent
fn normalize(field: Option<String>) -> Option<String> {
    field.filter(|text| !text.is_empty())
}
