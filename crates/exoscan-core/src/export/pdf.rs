//! PDF export: a title line, then one text line per card.
//!
//! Layout mirrors the other artifacts' flat structure: fixed font sizes, a
//! fixed left margin, and a constant vertical step per line, continuing on
//! a fresh page when the current one runs out. Streams are left
//! uncompressed; the artifact is small and stays greppable.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use super::card_lines;
use crate::error::ExportError;
use crate::predict::PredictionResult;

const PAGE_WIDTH: f32 = 595.28;
const PAGE_HEIGHT: f32 = 841.89;
/// Millimeters to PDF points; the layout is specified in millimeters.
const MM: f32 = 72.0 / 25.4;

const LEFT_MARGIN_MM: f32 = 10.0;
const TOP_OFFSET_MM: f32 = 10.0;
const LINE_STEP_MM: f32 = 10.0;
const BOTTOM_MARGIN_MM: f32 = 10.0;

const TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 12.0;

const TITLE: &str = "Exoplanet Analysis Results";

/// Renders the results to a PDF document, returned as raw bytes.
///
/// Each card becomes one line, `"{name}: {comma-joined detail strings}"`,
/// where the detail strings are the card's `"Label: value"` lines.
pub fn results_to_pdf(results: &[PredictionResult]) -> Result<Vec<u8>, ExportError> {
    let mut pages: Vec<Vec<Operation>> = Vec::new();
    let mut ops: Vec<Operation> = Vec::new();

    let mut y_mm = TOP_OFFSET_MM;
    push_text_line(&mut ops, TITLE, TITLE_SIZE, y_mm);
    y_mm += LINE_STEP_MM;

    for result in results {
        if y_mm > PAGE_HEIGHT / MM - BOTTOM_MARGIN_MM {
            pages.push(std::mem::take(&mut ops));
            y_mm = TOP_OFFSET_MM;
        }
        let details: Vec<String> = card_lines(result)
            .into_iter()
            .map(|(label, value)| format!("{label}: {value}"))
            .collect();
        let line = format!("{}: {}", result.name, details.join(", "));
        push_text_line(&mut ops, &line, BODY_SIZE, y_mm);
        y_mm += LINE_STEP_MM;
    }
    pages.push(ops);

    assemble_document(pages)
}

/// Appends one line of text at `y_mm` from the top of the page.
fn push_text_line(ops: &mut Vec<Operation>, text: &str, size: f32, y_mm: f32) {
    let x = LEFT_MARGIN_MM * MM;
    let y = PAGE_HEIGHT - y_mm * MM;
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec!["F1".into(), size.into()]));
    ops.push(Operation::new("Td", vec![x.into(), y.into()]));
    ops.push(Operation::new("Tj", vec![Object::string_literal(text)]));
    ops.push(Operation::new("ET", vec![]));
}

fn assemble_document(pages: Vec<Vec<Operation>>) -> Result<Vec<u8>, ExportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations };
        let encoded = content
            .encode()
            .map_err(|e| ExportError::Pdf(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    Ok(bytes)
}
