use eld_log_protocol::{Point, Rect, RenderCommand, RenderModel, TextAlign, ThemeToken};
use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::layout::SheetLayout;

const HOUR_LABEL_FONT_SIZE: f64 = 10.0;
const ROW_FONT_SIZE: f64 = 11.0;
const TITLE_FONT_SIZE: f64 = 12.0;
const SIGNATURE_FONT_SIZE: f64 = 16.0;
const DRIVER_FONT_SIZE: f64 = 12.0;

const ROW_LABEL_X: f64 = 10.0;
const ROW_TEXT_BASELINE: f64 = 4.0;
const HOUR_LABEL_DX: f64 = 2.0;
const TOTALS_DX: f64 = 20.0;
const DRIVER_NAME_DX: f64 = 150.0;
const PATH_WIDTH: f64 = 2.0;

/// Presentation options for a log sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetOptions {
    /// Printed next to "Driver Signature:".
    pub driver_name: String,
    pub dark: bool,
    /// Per-status hour totals in the right margin.
    pub show_totals: bool,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            driver_name: "AUTO SIGNED".to_string(),
            dark: false,
            show_totals: true,
        }
    }
}

/// Lay out a full paper-style log sheet for one day.
///
/// Draw order: background, grid, borders and row lines, labels, totals,
/// duty path, signature row.
pub fn render_log_sheet(
    model: &RenderModel,
    layout: &SheetLayout,
    options: &SheetOptions,
) -> Vec<RenderCommand> {
    let left = layout.left_margin;
    let right = left + layout.grid_width();
    let mut commands = Vec::with_capacity(model.grid_lines.len() + model.hour_labels.len() + 32);

    commands.push(RenderCommand::BeginGroup {
        id: format!("day-{}", model.day),
        label: Some(format!("Day {}", model.day)),
    });

    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(0.0, 0.0, layout.width(), layout.height),
        color: ThemeToken::Background,
        border_color: None,
        label: None,
    });

    commands.push(RenderCommand::DrawText {
        position: Point::new(ROW_LABEL_X, layout.label_y),
        text: format!("Day {}", model.day),
        color: ThemeToken::TextPrimary,
        font_size: TITLE_FONT_SIZE,
        align: TextAlign::Left,
        bold: true,
    });

    // Quarter-hour grid
    commands.push(RenderCommand::BeginGroup {
        id: "grid".into(),
        label: None,
    });
    for line in &model.grid_lines {
        let (color, width) = if line.major {
            (ThemeToken::GridMajor, 1.0)
        } else {
            (ThemeToken::GridMinor, 0.5)
        };
        commands.push(RenderCommand::DrawLine {
            from: Point::new(line.x, layout.grid_top),
            to: Point::new(line.x, layout.grid_bottom),
            color,
            width,
        });
    }

    // Sheet borders
    for x in [left, right] {
        commands.push(RenderCommand::DrawLine {
            from: Point::new(x, layout.grid_top),
            to: Point::new(x, layout.grid_bottom),
            color: ThemeToken::SheetBorder,
            width: 1.0,
        });
    }
    for y in [layout.grid_top, layout.grid_bottom] {
        commands.push(RenderCommand::DrawLine {
            from: Point::new(left, y),
            to: Point::new(right, y),
            color: ThemeToken::SheetBorder,
            width: 1.0,
        });
    }

    // Duty rows
    for (_, y) in model.row_positions.iter() {
        commands.push(RenderCommand::DrawLine {
            from: Point::new(left, *y),
            to: Point::new(right, *y),
            color: ThemeToken::RowLine,
            width: 1.0,
        });
    }
    commands.push(RenderCommand::EndGroup);

    for label in &model.hour_labels {
        commands.push(RenderCommand::DrawText {
            position: Point::new(label.x + HOUR_LABEL_DX, layout.label_y),
            text: label.label.clone(),
            color: ThemeToken::TextSecondary,
            font_size: HOUR_LABEL_FONT_SIZE,
            align: TextAlign::Left,
            bold: false,
        });
    }

    for (status, y) in model.row_positions.iter() {
        commands.push(RenderCommand::DrawText {
            position: Point::new(ROW_LABEL_X, y + ROW_TEXT_BASELINE),
            text: status.label().to_string(),
            color: status.theme_token(),
            font_size: ROW_FONT_SIZE,
            align: TextAlign::Left,
            bold: true,
        });
    }

    if options.show_totals {
        let x = right + TOTALS_DX;
        for (status, hours) in model.totals.iter() {
            commands.push(RenderCommand::DrawText {
                position: Point::new(x, model.row_positions[status] + ROW_TEXT_BASELINE),
                text: format_hours(*hours),
                color: ThemeToken::TextPrimary,
                font_size: ROW_FONT_SIZE,
                align: TextAlign::Left,
                bold: false,
            });
        }
        commands.push(RenderCommand::DrawText {
            position: Point::new(x, layout.grid_bottom + ROW_FONT_SIZE + ROW_TEXT_BASELINE),
            text: format!("= {}", format_hours(model.total_hours())),
            color: ThemeToken::TextPrimary,
            font_size: ROW_FONT_SIZE,
            align: TextAlign::Left,
            bold: true,
        });
    }

    commands.push(RenderCommand::BeginGroup {
        id: "duty-path".into(),
        label: Some("Duty status".into()),
    });
    commands.push(RenderCommand::DrawPolyline {
        points: model.path.clone(),
        color: ThemeToken::DutyPath,
        width: PATH_WIDTH,
    });
    commands.push(RenderCommand::EndGroup);

    commands.push(RenderCommand::DrawText {
        position: Point::new(left, layout.signature_y),
        text: "Driver Signature:".into(),
        color: ThemeToken::TextPrimary,
        font_size: SIGNATURE_FONT_SIZE,
        align: TextAlign::Left,
        bold: true,
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(left + DRIVER_NAME_DX, layout.signature_y),
        text: options.driver_name.clone(),
        color: ThemeToken::TextPrimary,
        font_size: DRIVER_FONT_SIZE,
        align: TextAlign::Left,
        bold: false,
    });

    commands.push(RenderCommand::EndGroup);
    commands
}

/// Inline placeholder drawn in place of a day that failed to render.
pub fn render_unavailable(day: u32, error: &RenderError, layout: &SheetLayout) -> Vec<RenderCommand> {
    let left = layout.left_margin;
    let grid_height = layout.grid_bottom - layout.grid_top;

    vec![
        RenderCommand::BeginGroup {
            id: format!("day-{day}"),
            label: Some(format!("Day {day} (unavailable)")),
        },
        RenderCommand::DrawRect {
            rect: Rect::new(0.0, 0.0, layout.width(), layout.height),
            color: ThemeToken::Background,
            border_color: None,
            label: None,
        },
        RenderCommand::DrawText {
            position: Point::new(ROW_LABEL_X, layout.label_y),
            text: format!("Day {day}"),
            color: ThemeToken::TextPrimary,
            font_size: TITLE_FONT_SIZE,
            align: TextAlign::Left,
            bold: true,
        },
        RenderCommand::DrawRect {
            rect: Rect::new(left, layout.grid_top, layout.grid_width(), grid_height),
            color: ThemeToken::PlaceholderBackground,
            border_color: Some(ThemeToken::SheetBorder),
            label: Some(error.to_string()),
        },
        RenderCommand::DrawText {
            position: Point::new(
                left + layout.grid_width() / 2.0,
                layout.grid_top + grid_height / 2.0 + ROW_TEXT_BASELINE,
            ),
            text: format!("Day {day}: log unavailable ({})", error.reason()),
            color: ThemeToken::PlaceholderText,
            font_size: SIGNATURE_FONT_SIZE,
            align: TextAlign::Center,
            bold: true,
        },
        RenderCommand::EndGroup,
    ]
}

/// Hours with two decimals, as printed in the totals column.
pub fn format_hours(hours: f64) -> String {
    format!("{hours:.2}")
}
