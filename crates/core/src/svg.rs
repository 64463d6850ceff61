//! SVG renderer: converts `RenderCommand` lists into standalone SVG strings.

use std::fmt::Write as _;

use eld_log_protocol::{Point, RenderCommand, RenderModel, TextAlign, ThemeToken};

use crate::layout::SheetLayout;
use crate::views::log_sheet::{SheetOptions, render_log_sheet};

/// Render a list of commands as an SVG document string.
///
/// `width` and `height` define the SVG viewBox dimensions.
/// `dark` selects the color palette.
pub fn render_svg(commands: &[RenderCommand], width: f64, height: f64, dark: bool) -> String {
    let mut svg = String::with_capacity(commands.len() * 120);
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" style="font-family:system-ui,-apple-system,sans-serif">"#,
    );

    for cmd in commands {
        match cmd {
            RenderCommand::DrawRect {
                rect,
                color,
                border_color,
                label,
            } => {
                let fill = resolve_color(*color, dark);
                let _ = write!(
                    svg,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{fill}""#,
                    rect.x, rect.y, rect.w, rect.h,
                );
                if let Some(border) = border_color {
                    let _ = write!(svg, r#" stroke="{}""#, resolve_color(*border, dark));
                }
                svg.push('>');
                if let Some(label) = label {
                    let _ = write!(svg, "<title>{}</title>", escape_xml(label));
                }
                svg.push_str("</rect>");
            }
            RenderCommand::DrawLine {
                from,
                to,
                color,
                width: line_width,
            } => {
                let stroke = resolve_color(*color, dark);
                let _ = write!(
                    svg,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}" stroke-width="{line_width}"/>"#,
                    from.x, from.y, to.x, to.y,
                );
            }
            RenderCommand::DrawPolyline {
                points,
                color,
                width: line_width,
            } => {
                if points.len() < 2 {
                    continue;
                }
                let stroke = resolve_color(*color, dark);
                let _ = write!(
                    svg,
                    r#"<path d="{}" fill="none" stroke="{stroke}" stroke-width="{line_width}" stroke-linejoin="miter"/>"#,
                    path_data(points),
                );
            }
            RenderCommand::DrawText {
                position,
                text,
                color,
                font_size,
                align,
                bold,
            } => {
                let fill = resolve_color(*color, dark);
                let anchor = match align {
                    TextAlign::Left => "start",
                    TextAlign::Center => "middle",
                    TextAlign::Right => "end",
                };
                let weight = if *bold { r#" font-weight="bold""# } else { "" };
                let _ = write!(
                    svg,
                    r#"<text x="{}" y="{}" font-size="{font_size}" text-anchor="{anchor}"{weight} fill="{fill}">{}</text>"#,
                    position.x,
                    position.y,
                    escape_xml(text),
                );
            }
            RenderCommand::BeginGroup { id, label } => {
                let _ = write!(svg, r#"<g id="{}""#, escape_xml(id));
                if let Some(label) = label {
                    let _ = write!(svg, r#" aria-label="{}""#, escape_xml(label));
                }
                svg.push('>');
            }
            RenderCommand::EndGroup => svg.push_str("</g>"),
        }
    }

    svg.push_str("</svg>");
    svg
}

/// Lay out and render one day's sheet as a standalone SVG document.
pub fn render_model_svg(model: &RenderModel, layout: &SheetLayout, options: &SheetOptions) -> String {
    let commands = render_log_sheet(model, layout, options);
    render_svg(&commands, layout.width(), layout.height, options.dark)
}

/// SVG path data for an open polyline: `M x y L x y ...`.
fn path_data(points: &[Point]) -> String {
    let mut d = String::with_capacity(points.len() * 16);
    for (i, p) in points.iter().enumerate() {
        let op = if i == 0 { "M" } else { " L" };
        let _ = write!(d, "{op} {} {}", p.x, p.y);
    }
    d
}

fn resolve_color(token: ThemeToken, dark: bool) -> &'static str {
    if dark {
        match token {
            ThemeToken::Background => "#181818",
            ThemeToken::SheetBorder | ThemeToken::RowLine => "#bdbdbd",
            ThemeToken::GridMajor => "#4a4a4a",
            ThemeToken::GridMinor => "#303030",
            ThemeToken::DutyPath => "#ececec",
            ThemeToken::TextPrimary => "#ececec",
            ThemeToken::TextSecondary => "#9e9e9e",
            ThemeToken::TextMuted => "#757575",
            ThemeToken::StatusOffDuty => "#81c784",
            ThemeToken::StatusSleeper => "#64b5f6",
            ThemeToken::StatusDriving => "#ffb74d",
            ThemeToken::StatusOnDuty => "#e57373",
            ThemeToken::PlaceholderBackground => "#2a1f1f",
            ThemeToken::PlaceholderText => "#ff8a80",
        }
    } else {
        match token {
            ThemeToken::Background => "#ffffff",
            ThemeToken::SheetBorder | ThemeToken::RowLine => "#000000",
            ThemeToken::GridMajor => "#dddddd",
            ThemeToken::GridMinor => "#eeeeee",
            ThemeToken::DutyPath => "#000000",
            ThemeToken::TextPrimary => "#1a1a2e",
            ThemeToken::TextSecondary => "#444455",
            ThemeToken::TextMuted => "#666677",
            ThemeToken::StatusOffDuty => "#2e7d32",
            ThemeToken::StatusSleeper => "#1565c0",
            ThemeToken::StatusDriving => "#e65100",
            ThemeToken::StatusOnDuty => "#c62828",
            ThemeToken::PlaceholderBackground => "#fff5f5",
            ThemeToken::PlaceholderText => "#c62828",
        }
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::render;
    use eld_log_protocol::{DailyLog, DutyStatus, Rect, SegmentRecord};

    #[test]
    fn basic_svg_output() {
        let commands = vec![RenderCommand::DrawRect {
            rect: Rect::new(10.0, 20.0, 100.0, 18.0),
            color: ThemeToken::StatusDriving,
            border_color: None,
            label: Some("driving".into()),
        }];
        let svg = render_svg(&commands, 800.0, 400.0, true);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("<title>driving</title>"));
        assert!(svg.contains("#ffb74d"));
    }

    #[test]
    fn escapes_xml_entities() {
        let commands = vec![RenderCommand::DrawText {
            position: Point::new(0.0, 0.0),
            text: "O'Neil & <Sons>".into(),
            color: ThemeToken::TextPrimary,
            font_size: 12.0,
            align: TextAlign::Left,
            bold: false,
        }];
        let svg = render_svg(&commands, 400.0, 100.0, false);
        assert!(svg.contains("O&apos;Neil &amp; &lt;Sons&gt;"));
    }

    #[test]
    fn polyline_becomes_single_path() {
        let commands = vec![RenderCommand::DrawPolyline {
            points: vec![
                Point::new(90.0, 60.0),
                Point::new(390.0, 60.0),
                Point::new(390.0, 150.0),
            ],
            color: ThemeToken::DutyPath,
            width: 2.0,
        }];
        let svg = render_svg(&commands, 900.0, 280.0, false);
        assert!(svg.contains(r#"d="M 90 60 L 390 60 L 390 150""#));
        assert_eq!(svg.matches("<path").count(), 1);
    }

    #[test]
    fn full_sheet_svg() {
        let log = DailyLog {
            day: 1,
            segments: vec![
                SegmentRecord::new(0.0, 7.5, DutyStatus::OffDuty),
                SegmentRecord::new(7.5, 24.0, DutyStatus::Driving),
            ],
        };
        let layout = SheetLayout::default();
        let model = render(&log, &layout).unwrap();
        let svg = render_model_svg(&model, &layout, &SheetOptions::default());
        assert!(svg.contains(r#"viewBox="0 0 900 280""#));
        assert!(svg.contains(r#"d="M 90 60 L 315 60 L 315 120 L 810 120""#));
        assert!(svg.contains("Driver Signature:"));
        assert!(svg.contains(r#"<g id="day-1""#));
        assert_eq!(svg.matches("<g").count(), svg.matches("</g>").count());
    }
}
