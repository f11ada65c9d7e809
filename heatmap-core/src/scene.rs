//! Renderable description of a heatmap.

use chrono::NaiveDate;

use crate::constants::{
    CANVAS_HEIGHT, CANVAS_WIDTH, CELL_PITCH, CELL_SIZE, LEFT_MARGIN, MONTH_LABEL_OFFSET,
    MONTH_LABELS, TOP_MARGIN, WEEKDAY_LABEL_X, WEEKDAY_LABELS,
};
use crate::date_count::DateCount;
use crate::layout::GridLayout;
use crate::palette::ColorBucket;
use crate::year::Year;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Weekday,
    Month,
}

/// A text mark, vertically centered on `y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub kind: LabelKind,
    pub text: &'static str,
    pub x: u32,
    pub y: u32,
}

/// A colored day square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub column: u32,
    /// Weekday, 0 = Sunday.
    pub row: u32,
    pub x: u32,
    pub y: u32,
    pub size: u32,
    pub date: NaiveDate,
    pub count: u32,
    pub bucket: ColorBucket,
}

/// Everything a rasterizer needs to draw one year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    pub year: Year,
    pub width: u32,
    pub height: u32,
    pub labels: Vec<Label>,
    pub cells: Vec<Cell>,
}

impl Scene {
    /// Lay out `year` and color each day by its count in `counts`.
    pub fn render(counts: &DateCount, year: &Year) -> Self {
        let grid = GridLayout::for_year(year);

        let mut labels: Vec<Label> = WEEKDAY_LABELS
            .iter()
            .zip(0u32..)
            .map(|(&text, row)| Label {
                kind: LabelKind::Weekday,
                text,
                x: WEEKDAY_LABEL_X,
                y: row_y(row) + CELL_SIZE / 2,
            })
            .collect();

        let mut cells = Vec::new();

        for month in &grid.months {
            if let Some(column) = month.label_column() {
                labels.push(Label {
                    kind: LabelKind::Month,
                    text: MONTH_LABELS[month.month as usize],
                    x: column_x(column) + CELL_SIZE / 2,
                    y: TOP_MARGIN - MONTH_LABEL_OFFSET,
                });
            }

            for slot in month.slots() {
                let Some(date) = year.date(month.month, slot.day) else {
                    continue;
                };
                let count = counts.get(date);

                cells.push(Cell {
                    column: slot.column,
                    row: slot.row,
                    x: column_x(slot.column),
                    y: row_y(slot.row),
                    size: CELL_SIZE,
                    date,
                    count,
                    bucket: ColorBucket::for_count(count),
                });
            }
        }

        Scene {
            year: *year,
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            labels,
            cells,
        }
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&Cell> {
        self.cells.iter().find(|c| c.date == date)
    }

    /// Number of cells in each color bucket, lightest first.
    pub fn bucket_totals(&self) -> [usize; 5] {
        let mut totals = [0; 5];
        for cell in &self.cells {
            totals[cell.bucket.index()] += 1;
        }
        totals
    }
}

fn column_x(column: u32) -> u32 {
    LEFT_MARGIN + column * CELL_PITCH
}

fn row_y(row: u32) -> u32 {
    TOP_MARGIN + row * CELL_PITCH
}
