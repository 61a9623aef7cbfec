//! Replay of layout draw instructions as printpdf operations.

use printpdf::*;

use spellbook_layout::{Document, DrawOp, FontStyle, PageFormat, Rgb8};

fn builtin_font(style: FontStyle) -> BuiltinFont {
    match style {
        FontStyle::Regular => BuiltinFont::TimesRoman,
        FontStyle::Bold => BuiltinFont::TimesBold,
        FontStyle::Italic => BuiltinFont::TimesItalic,
        FontStyle::BoldItalic => BuiltinFont::TimesBoldItalic,
    }
}

fn pdf_color(color: Rgb8) -> Color {
    Color::Rgb(Rgb {
        r: color.r as f32 / 255.0,
        g: color.g as f32 / 255.0,
        b: color.b as f32 / 255.0,
        icc_profile: None,
    })
}

/// Layout coordinates are top-down; PDF user space is bottom-up.
fn point(format: &PageFormat, x: f32, y: f32) -> Point {
    Point {
        x: Mm(x).into_pt(),
        y: Mm(format.height - y).into_pt(),
    }
}

fn line_point(format: &PageFormat, x: f32, y: f32) -> LinePoint {
    LinePoint {
        p: point(format, x, y),
        bezier: false,
    }
}

fn push_op(ops: &mut Vec<Op>, format: &PageFormat, op: &DrawOp) {
    match op {
        DrawOp::Text {
            text,
            x,
            y,
            style,
            size,
        } => {
            let font = builtin_font(*style);
            ops.push(Op::StartTextSection);
            ops.push(Op::SetTextCursor {
                pos: point(format, *x, *y),
            });
            ops.push(Op::SetFontSizeBuiltinFont {
                font,
                size: Pt(*size),
            });
            ops.push(Op::WriteTextBuiltinFont {
                items: vec![TextItem::Text(text.clone())],
                font,
            });
            ops.push(Op::EndTextSection);
        }
        DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            width,
            color,
        } => {
            ops.push(Op::SetOutlineColor {
                col: pdf_color(*color),
            });
            ops.push(Op::SetOutlineThickness {
                pt: Mm(*width).into_pt(),
            });
            ops.push(Op::DrawLine {
                line: Line {
                    points: vec![
                        line_point(format, *x1, *y1),
                        line_point(format, *x2, *y2),
                    ],
                    is_closed: false,
                },
            });
        }
        DrawOp::Rect {
            x,
            y,
            width,
            height,
            line_width,
            color,
        } => {
            ops.push(Op::SetOutlineColor {
                col: pdf_color(*color),
            });
            ops.push(Op::SetOutlineThickness {
                pt: Mm(*line_width).into_pt(),
            });
            ops.push(Op::DrawPolygon {
                polygon: Polygon {
                    rings: vec![PolygonRing {
                        points: vec![
                            line_point(format, *x, *y),
                            line_point(format, *x + *width, *y),
                            line_point(format, *x + *width, *y + *height),
                            line_point(format, *x, *y + *height),
                        ],
                    }],
                    mode: PaintMode::Stroke,
                    winding_order: WindingOrder::NonZero,
                },
            });
        }
        DrawOp::Triangle { points, color } => {
            ops.push(Op::SetFillColor {
                col: pdf_color(*color),
            });
            ops.push(Op::DrawPolygon {
                polygon: Polygon {
                    rings: vec![PolygonRing {
                        points: points
                            .iter()
                            .map(|[x, y]| line_point(format, *x, *y))
                            .collect(),
                    }],
                    mode: PaintMode::Fill,
                    winding_order: WindingOrder::NonZero,
                },
            });
        }
    }
}

/// Serialize a rendered document to PDF bytes.
pub fn document_to_pdf_bytes(document: &Document, format: &PageFormat) -> Vec<u8> {
    let mut doc = PdfDocument::new(&document.title);

    for page in &document.pages {
        let mut ops = Vec::with_capacity(page.ops.len() * 3);
        for op in &page.ops {
            push_op(&mut ops, format, op);
        }
        doc.pages
            .push(PdfPage::new(Mm(format.width), Mm(format.height), ops));
    }

    let mut warnings = Vec::new();
    doc.save(&PdfSaveOptions::default(), &mut warnings)
}
