use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    Background,
    SheetBorder,
    RowLine,
    GridMajor,
    GridMinor,

    DutyPath,

    TextPrimary,
    TextSecondary,
    TextMuted,

    // Per-status accents (row labels, totals)
    StatusOffDuty,
    StatusSleeper,
    StatusDriving,
    StatusOnDuty,

    // Placeholder shown when a day cannot be rendered
    PlaceholderBackground,
    PlaceholderText,
}
