use std::fmt;

use printpdf::{BuiltinFont, Mm, PdfDocument};
use tracing::debug;

use crate::domain::{
    common::entities::app_errors::CoreError, report::ports::DocumentConverter,
};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const LAYER_NAME: &str = "content";
const PT_TO_MM: f32 = 0.3528;

/// Lays out report markup on A4 pages with the built-in Helvetica fonts.
///
/// Markup is line oriented:
/// - `# ` title
/// - `## ` section heading
/// - `- ` bullet
/// - blank line for vertical space
/// - anything else is a paragraph
#[derive(Debug, Clone)]
pub struct PdfDocumentConverter {
    title: String,
}

impl PdfDocumentConverter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Block {
    Title(String),
    Heading(String),
    Bullet(String),
    Paragraph(String),
    Gap,
}

struct Style {
    font_size: f32,
    bold: bool,
    indent_mm: f32,
    max_chars: usize,
    space_after_mm: f32,
}

impl Style {
    fn line_height_mm(&self) -> f32 {
        self.font_size * PT_TO_MM * 1.35
    }
}

impl Block {
    fn text(&self) -> Option<&str> {
        match self {
            Block::Title(text)
            | Block::Heading(text)
            | Block::Bullet(text)
            | Block::Paragraph(text) => Some(text),
            Block::Gap => None,
        }
    }

    fn style(&self) -> Style {
        match self {
            Block::Title(_) => Style {
                font_size: 20.0,
                bold: true,
                indent_mm: 0.0,
                max_chars: 45,
                space_after_mm: 4.0,
            },
            Block::Heading(_) => Style {
                font_size: 13.0,
                bold: true,
                indent_mm: 0.0,
                max_chars: 70,
                space_after_mm: 1.0,
            },
            Block::Bullet(_) => Style {
                font_size: 11.0,
                bold: false,
                indent_mm: 5.0,
                max_chars: 85,
                space_after_mm: 0.5,
            },
            Block::Paragraph(_) => Style {
                font_size: 11.0,
                bold: false,
                indent_mm: 0.0,
                max_chars: 90,
                space_after_mm: 0.5,
            },
            Block::Gap => Style {
                font_size: 11.0,
                bold: false,
                indent_mm: 0.0,
                max_chars: 0,
                space_after_mm: 3.0,
            },
        }
    }
}

impl DocumentConverter for PdfDocumentConverter {
    fn convert(&self, markup: &str) -> Result<Vec<u8>, CoreError> {
        let blocks = parse_markup(markup);
        if !blocks.iter().any(|block| block.text().is_some()) {
            return Err(CoreError::DocumentConversion(
                "markup has no content".to_string(),
            ));
        }

        let (document, page, layer) = PdfDocument::new(
            self.title.as_str(),
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            LAYER_NAME,
        );
        let regular = document
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(conversion_error)?;
        let bold = document
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(conversion_error)?;

        let mut current_layer = document.get_page(page).get_layer(layer);
        let mut cursor_mm = PAGE_HEIGHT_MM - MARGIN_MM;
        let mut pages = 1;

        for block in &blocks {
            let style = block.style();
            let Some(text) = block.text() else {
                cursor_mm -= style.space_after_mm;
                continue;
            };
            let font = if style.bold { &bold } else { &regular };
            let line_height = style.line_height_mm();

            for (index, line) in wrap_text(text, style.max_chars).into_iter().enumerate() {
                if cursor_mm - line_height < MARGIN_MM {
                    let (page, layer) =
                        document.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
                    current_layer = document.get_page(page).get_layer(layer);
                    cursor_mm = PAGE_HEIGHT_MM - MARGIN_MM;
                    pages += 1;
                }
                cursor_mm -= line_height;

                if index == 0 && matches!(block, Block::Bullet(_)) {
                    current_layer.use_text(
                        "-",
                        style.font_size,
                        Mm(MARGIN_MM),
                        Mm(cursor_mm),
                        font,
                    );
                }
                current_layer.use_text(
                    line,
                    style.font_size,
                    Mm(MARGIN_MM + style.indent_mm),
                    Mm(cursor_mm),
                    font,
                );
            }
            cursor_mm -= style.space_after_mm;
        }

        debug!(pages, blocks = blocks.len(), "pdf document laid out");

        document.save_to_bytes().map_err(conversion_error)
    }
}

fn conversion_error(error: impl fmt::Debug) -> CoreError {
    CoreError::DocumentConversion(format!("{:?}", error))
}

fn parse_markup(markup: &str) -> Vec<Block> {
    let mut blocks: Vec<Block> = markup
        .lines()
        .map(|line| {
            let line = line.trim_end();
            if let Some(title) = line.strip_prefix("# ") {
                Block::Title(title.trim().to_string())
            } else if let Some(heading) = line.strip_prefix("## ") {
                Block::Heading(heading.trim().to_string())
            } else if let Some(item) = line.strip_prefix("- ") {
                Block::Bullet(item.trim().to_string())
            } else if line.trim().is_empty() {
                Block::Gap
            } else {
                Block::Paragraph(line.trim().to_string())
            }
        })
        .collect();

    blocks.dedup_by(|next, previous| *next == Block::Gap && *previous == Block::Gap);
    blocks
}

/// Greedy word wrap on character count. Words longer than a line are split.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word = word;

        while word.chars().count() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let split = word
                .char_indices()
                .nth(max_chars)
                .map_or(word.len(), |(index, _)| index);
            lines.push(word[..split].to_string());
            word = &word[split..];
        }
        if word.is_empty() {
            continue;
        }

        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > max_chars {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
