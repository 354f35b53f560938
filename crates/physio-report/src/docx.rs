use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, Paragraph, Run, RunFonts, Style, StyleType};
use tracing::info;

use crate::blocks::{Block, Span, parse_blocks};
use crate::error::ExportError;
use crate::styles::DocumentStyles;

const HEADING_STYLE: &str = "Heading1";

/// Write compiled report markup to a DOCX document.
///
/// Section titles and the session banner become headings, list items
/// become bullet paragraphs, and inline `<strong>` labels stay bold.
pub fn export_docx(markup: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let blocks = parse_blocks(markup);

    let mut docx = Docx::new().add_style(
        Style::new(HEADING_STYLE, StyleType::Paragraph)
            .name("heading 1")
            .size(styles.heading_size * 2), // OOXML uses half-points
    );

    for block in &blocks {
        let paragraph = match block {
            Block::Heading { text, color } => heading_paragraph(text, color.as_deref(), styles),
            Block::Paragraph(spans) => body_paragraph(spans, styles),
            Block::Bullet(spans) => bullet_paragraph(spans, styles),
        };
        docx = docx.add_paragraph(paragraph);
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    let bytes = buf.into_inner();
    info!(blocks = blocks.len(), bytes = bytes.len(), "report exported to docx");
    Ok(bytes)
}

fn heading_paragraph(text: &str, color: Option<&str>, styles: &DocumentStyles) -> Paragraph {
    let mut run = Run::new()
        .add_text(text)
        .bold()
        .size(styles.heading_size * 2)
        .fonts(RunFonts::new().ascii(&styles.heading_font));

    if let Some(color) = color.filter(|_| styles.colored_headings) {
        run = run.color(color.trim_start_matches('#'));
    }

    Paragraph::new().style(HEADING_STYLE).add_run(run)
}

fn bullet_paragraph(spans: &[Span], styles: &DocumentStyles) -> Paragraph {
    let bullet = body_run("\u{2022} ", false, styles);
    spans
        .iter()
        .fold(Paragraph::new().align(AlignmentType::Left).add_run(bullet), |para, span| {
            para.add_run(body_run(&span.text, span.bold, styles))
        })
}

fn body_paragraph(spans: &[Span], styles: &DocumentStyles) -> Paragraph {
    spans
        .iter()
        .fold(Paragraph::new().align(AlignmentType::Left), |para, span| {
            para.add_run(body_run(&span.text, span.bold, styles))
        })
}

fn body_run(text: &str, bold: bool, styles: &DocumentStyles) -> Run {
    let run = Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font));
    if bold { run.bold() } else { run }
}
