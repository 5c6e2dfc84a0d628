//! Cursor-based page layout over printpdf.
//!
//! A single `y` cursor (millimetres, descending from the top margin) tracks
//! the vertical write position. Every block reserves its height before
//! committing content; when the reservation would cross the bottom margin a
//! new page is started. Overflow is never an error and there is no page cap.

use std::io::BufWriter;

use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
    Point,
};
use tracing::debug;

use invoice_core::InvoiceError;

pub(crate) const PAGE_WIDTH: f32 = 210.0;
pub(crate) const PAGE_HEIGHT: f32 = 297.0;
pub(crate) const MARGIN_LEFT: f32 = 15.0;
pub(crate) const MARGIN_RIGHT: f32 = 195.0;
pub(crate) const MARGIN_BOTTOM: f32 = 18.0;
// First baseline on a fresh page.
pub(crate) const TOP_Y: f32 = 282.0;
pub(crate) const LINE_HEIGHT: f32 = 5.0;
pub(crate) const ROW_HEIGHT: f32 = 6.0;

/// Fixed x offset plus the character budget used to clip cell text.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Column {
    pub x: f32,
    pub max_chars: usize,
}

pub(crate) struct PageComposer {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    font: IndirectFontRef,
    font_bold: IndirectFontRef,
    y: f32,
    page_count: usize,
}

impl PageComposer {
    pub fn new(title: &str) -> Result<Self, InvoiceError> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let layer = doc.get_page(page).get_layer(layer);
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| InvoiceError::Pdf(e.to_string()))?;
        let font_bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| InvoiceError::Pdf(e.to_string()))?;

        Ok(Self {
            doc,
            layer,
            font,
            font_bold,
            y: TOP_Y,
            page_count: 1,
        })
    }

    /// Start a new page if the next `needed` millimetres would cross the
    /// bottom margin.
    pub fn ensure_space(&mut self, needed: f32) {
        if self.y - needed < MARGIN_BOTTOM {
            self.new_page();
        }
    }

    fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = TOP_Y;
        self.page_count += 1;
        debug!(page = self.page_count, "page break");
    }

    pub fn text(&self, text: &str, font_size: f32, x: f32) {
        self.layer
            .use_text(text, font_size, Mm(x), Mm(self.y), &self.font);
    }

    pub fn text_bold(&self, text: &str, font_size: f32, x: f32) {
        self.layer
            .use_text(text, font_size, Mm(x), Mm(self.y), &self.font_bold);
    }

    pub fn advance(&mut self, dy: f32) {
        self.y -= dy;
    }

    /// Horizontal rule across the content width at the current cursor.
    pub fn rule(&self) {
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(MARGIN_LEFT), Mm(self.y)), false),
                (Point::new(Mm(MARGIN_RIGHT), Mm(self.y)), false),
            ],
            is_closed: false,
        });
    }

    /// Write pre-wrapped lines. A single line is never split across pages;
    /// the block continues onto the next page between lines.
    pub fn paragraph(&mut self, lines: &[String], font_size: f32, x: f32) {
        for line in lines {
            self.ensure_space(LINE_HEIGHT);
            self.text(line, font_size, x);
            self.advance(LINE_HEIGHT);
        }
    }

    /// Fixed-column table. Each row reserves its height up front so a row is
    /// never split across a page boundary; the header row repeats on every
    /// new page the table spills onto.
    pub fn table(&mut self, headers: &[&str], columns: &[Column], rows: &[Vec<String>]) {
        self.ensure_space(ROW_HEIGHT * 2.0);
        self.table_header(headers, columns);
        for row in rows {
            if self.y - ROW_HEIGHT < MARGIN_BOTTOM {
                self.new_page();
                self.table_header(headers, columns);
            }
            for (cell, column) in row.iter().zip(columns) {
                self.text(&clip(cell, column.max_chars), 9.0, column.x);
            }
            self.advance(ROW_HEIGHT);
        }
    }

    fn table_header(&mut self, headers: &[&str], columns: &[Column]) {
        for (header, column) in headers.iter().zip(columns) {
            self.text_bold(header, 9.0, column.x);
        }
        self.advance(2.0);
        self.rule();
        self.advance(LINE_HEIGHT);
    }

    /// Serialize the document. Rendering to bytes is the terminal step; the
    /// composer never writes to storage itself.
    pub fn finish(self) -> Result<(Vec<u8>, usize), InvoiceError> {
        let page_count = self.page_count;
        let mut writer = BufWriter::new(Vec::new());
        self.doc
            .save(&mut writer)
            .map_err(|e| InvoiceError::Pdf(e.to_string()))?;
        let bytes = writer
            .into_inner()
            .map_err(|e| InvoiceError::Pdf(e.to_string()))?;
        Ok((bytes, page_count))
    }
}

/// Greedy word wrap to a character budget. Blocks are wrapped before any
/// content is committed so required-space checks are accurate.
pub(crate) fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for source_line in text.lines() {
        let mut current = String::new();
        for word in source_line.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(current);
                current = word.to_string();
            }
        }
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn clip(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let mut clipped: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        clipped.push_str("...");
        clipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_the_character_budget() {
        let lines = wrap_text("one two three four five six seven", 12);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.chars().count() <= 12, "line too long: {line:?}");
        }
    }

    #[test]
    fn wrap_keeps_explicit_newlines() {
        let lines = wrap_text("first\nsecond", 40);
        assert_eq!(lines, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn wrap_of_empty_text_yields_one_empty_line() {
        assert_eq!(wrap_text("", 40), vec![String::new()]);
    }

    #[test]
    fn overlong_word_stays_on_its_own_line() {
        let lines = wrap_text("short antidisestablishmentarianism", 10);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn clip_truncates_with_ellipsis() {
        assert_eq!(clip("short", 10), "short");
        assert_eq!(clip("a very long description", 10), "a very ...");
    }
}
