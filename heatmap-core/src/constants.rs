//! Fixed grid geometry shared by the layout and the scene.

/// Side length of one day cell.
pub const CELL_SIZE: u32 = 16;

/// Gap between neighbouring cells.
pub const CELL_SPACING: u32 = 4;

/// Distance from one cell's origin to the next.
pub const CELL_PITCH: u32 = CELL_SIZE + CELL_SPACING;

/// Room left of the grid for weekday labels.
pub const LEFT_MARGIN: u32 = 60;

/// Room above the grid for month labels.
pub const TOP_MARGIN: u32 = 30;

/// Column slots reserved for every month, whether or not it needs them all.
pub const WEEKS_PER_MONTH: u32 = 5;

pub const MONTHS_PER_YEAR: u32 = 12;

pub const DAYS_PER_WEEK: u32 = 7;

/// Total grid columns: 12 months of 5 week-slots each.
pub const GRID_COLUMNS: u32 = MONTHS_PER_YEAR * WEEKS_PER_MONTH;

pub const CANVAS_WIDTH: u32 = LEFT_MARGIN + GRID_COLUMNS * CELL_PITCH;

pub const CANVAS_HEIGHT: u32 = TOP_MARGIN + DAYS_PER_WEEK * CELL_PITCH;

/// Horizontal position of the weekday labels.
pub const WEEKDAY_LABEL_X: u32 = 10;

/// Distance of month labels above the first row.
pub const MONTH_LABEL_OFFSET: u32 = 10;

pub const WEEKDAY_LABELS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
