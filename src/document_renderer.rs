/*!
 * Paginated PDF layout for assembled transcripts.
 *
 * The first page carries the video title and identifier; body paragraphs
 * follow in reading order with a gap between them. Every page after the
 * first opens with a centered, de-emphasized `- N -` marker, emitted by
 * the page decorator so each page transition is marked exactly once.
 */

use std::io;
use std::path::{Path, PathBuf};

use genpdf::elements::{Break, LinearLayout, Paragraph};
use genpdf::fonts::{FontData, FontFamily};
use genpdf::style::{Color, Style, StyledString};
use genpdf::{Alignment, Element, Margins, SimplePageDecorator};
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::app_config::RenderConfig;
use crate::errors::RenderError;
use crate::file_utils::FileManager;

// @const: Characters that have no place in a file name
static NON_ALNUM_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9]").unwrap());

// @const: Collapsible underscore runs left by sanitization
static UNDERSCORE_RUN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"_+").unwrap());

/// Upper bound on the sanitized file name stem
const MAX_FILENAME_LEN: usize = 50;

/// Grey used for the video identifier line and page markers
const DE_EMPHASIS_GREY: Color = Color::Rgb(128, 128, 128);

/// Font file quadruples (regular, bold, italic, bold italic) known to
/// ship with common systems, tried against every candidate directory.
const FONT_FILE_SETS: [[&str; 4]; 3] = [
    [
        "DejaVuSans.ttf",
        "DejaVuSans-Bold.ttf",
        "DejaVuSans-Oblique.ttf",
        "DejaVuSans-BoldOblique.ttf",
    ],
    [
        "LiberationSans-Regular.ttf",
        "LiberationSans-Bold.ttf",
        "LiberationSans-Italic.ttf",
        "LiberationSans-BoldItalic.ttf",
    ],
    [
        "Arial.ttf",
        "Arial Bold.ttf",
        "Arial Italic.ttf",
        "Arial Bold Italic.ttf",
    ],
];

/// System directories searched for the font file sets
const FONT_DIR_CANDIDATES: [&str; 6] = [
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/TTF",
    "/usr/share/fonts/dejavu",
    "/System/Library/Fonts/Supplemental",
    "C:\\Windows\\Fonts",
];

/// Finished document artifact handed back to the caller.
///
/// The caller owns the file; deleting it after use is the caller's
/// responsibility.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    /// Path of the written PDF
    pub file_path: PathBuf,

    /// Title the document was rendered under
    pub title: String,
}

/// Lays out assembled paragraphs into a paginated PDF document
#[derive(Debug)]
pub struct DocumentRenderer {
    output_dir: PathBuf,
    config: RenderConfig,
}

impl DocumentRenderer {
    /// Create a renderer writing into the given scratch directory
    pub fn new(output_dir: impl Into<PathBuf>, config: RenderConfig) -> Self {
        DocumentRenderer {
            output_dir: output_dir.into(),
            config,
        }
    }

    /// True when a usable font family can be located on this system
    pub fn font_available(&self) -> bool {
        self.load_font_family().is_ok()
    }

    /// Render the paragraphs into `<sanitized title>.pdf` under the
    /// scratch directory, creating the directory if needed.
    ///
    /// Returns only after the backend has written and closed the file;
    /// any write failure fails the whole render.
    pub fn render(
        &self,
        title: &str,
        video_id: &str,
        paragraphs: &[String],
    ) -> Result<RenderedDocument, RenderError> {
        let font_family = self.load_font_family()?;

        FileManager::ensure_dir(&self.output_dir).map_err(|source| RenderError::Io {
            path: self.output_dir.clone(),
            source,
        })?;

        let file_name = format!("{}.pdf", sanitize_title(title));
        let output_path = self.output_dir.join(file_name);

        let mut doc = genpdf::Document::new(font_family);
        doc.set_title(title);
        doc.set_font_size(self.config.body_font_size);
        doc.set_line_spacing(self.config.line_spacing);

        let mut decorator = SimplePageDecorator::new();
        let margin = self.config.margin_mm;
        decorator.set_margins(Margins::trbl(margin, margin, margin, margin));

        let marker_style = Style::new()
            .with_font_size(self.config.body_font_size)
            .with_color(DE_EMPHASIS_GREY);
        decorator.set_header(move |page| {
            let mut header = LinearLayout::vertical();
            if let Some(marker) = page_marker_text(page) {
                header.push(
                    Paragraph::new(StyledString::new(marker, marker_style.clone()))
                        .aligned(Alignment::Center),
                );
                header.push(Break::new(1.0));
            }
            header
        });
        doc.set_page_decorator(decorator);

        let title_style = Style::new()
            .bold()
            .with_font_size(self.config.title_font_size);
        doc.push(Paragraph::new(StyledString::new(title, title_style)).aligned(Alignment::Center));
        doc.push(Break::new(1.0));

        let meta_style = Style::new()
            .with_font_size(self.config.body_font_size)
            .with_color(DE_EMPHASIS_GREY);
        doc.push(
            Paragraph::new(StyledString::new(format!("Video ID: {}", video_id), meta_style))
                .aligned(Alignment::Center),
        );
        doc.push(Break::new(2.0));

        for (index, paragraph) in paragraphs.iter().enumerate() {
            let indent = Margins::trbl(0.0, 0.0, 0.0, self.config.indent_mm);
            doc.push(Paragraph::new(paragraph.as_str()).padded(indent));
            if index < paragraphs.len() - 1 {
                doc.push(Break::new(1.0));
            }
        }

        doc.render_to_file(&output_path)
            .map_err(|e| RenderError::Io {
                path: output_path.clone(),
                source: io::Error::new(io::ErrorKind::Other, e.to_string()),
            })?;

        info!("Rendered transcript document to {:?}", output_path);
        Ok(RenderedDocument {
            file_path: output_path,
            title: title.to_string(),
        })
    }

    /// Locate a complete font family, trying the configured directory
    /// first and the known system locations after it
    fn load_font_family(&self) -> Result<FontFamily<FontData>, RenderError> {
        let mut directories: Vec<PathBuf> = Vec::new();
        if let Some(dir) = &self.config.font_dir {
            directories.push(dir.clone());
        }
        directories.extend(FONT_DIR_CANDIDATES.iter().map(PathBuf::from));

        let mut searched = 0;
        for directory in &directories {
            for file_set in &FONT_FILE_SETS {
                searched += 1;
                if let Some(family) = Self::try_load_family(directory, file_set) {
                    debug!("Loaded font family from {:?}", directory);
                    return Ok(family);
                }
            }
        }

        Err(RenderError::NoFont { searched })
    }

    /// Load one font quadruple from a directory, or nothing if any file
    /// is missing or unparsable
    fn try_load_family(directory: &Path, files: &[&str; 4]) -> Option<FontFamily<FontData>> {
        let load = |name: &str| -> Option<FontData> {
            let bytes = std::fs::read(directory.join(name)).ok()?;
            FontData::new(bytes, None).ok()
        };

        Some(FontFamily {
            regular: load(files[0])?,
            bold: load(files[1])?,
            italic: load(files[2])?,
            bold_italic: load(files[3])?,
        })
    }
}

/// Centered marker text opening the given page, if the page needs one.
/// Page one carries the document header instead of a marker.
pub fn page_marker_text(page: usize) -> Option<String> {
    if page > 1 {
        Some(format!("- {} -", page))
    } else {
        None
    }
}

/// Reduce a video title to a filesystem-safe file name stem.
///
/// Every character outside `[A-Za-z0-9]` becomes an underscore,
/// underscore runs collapse, leading/trailing underscores go away, and
/// the lowercased result is cut at 50 characters.
pub fn sanitize_title(title: &str) -> String {
    let replaced = NON_ALNUM_REGEX.replace_all(title, "_");
    let collapsed = UNDERSCORE_RUN_REGEX.replace_all(&replaced, "_");
    let trimmed = collapsed.trim_matches('_');

    trimmed.to_lowercase().chars().take(MAX_FILENAME_LEN).collect()
}
