//! Board geometry shared by hit-testing and drop detection.

use super::BoardView;
use crate::board::domain::DropTarget;
use crate::board::gesture::{DropZone, Point, Rect};
use crate::task::domain::TaskId;

/// Fixed-grid layout: columns side by side, cards stacked under a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top-left corner of the first column.
    pub origin: Point,
    /// Column width.
    pub column_width: i32,
    /// Horizontal gap between columns.
    pub column_gap: i32,
    /// Height of the column title area.
    pub header_height: i32,
    /// Card height.
    pub card_height: i32,
    /// Vertical gap between cards.
    pub card_gap: i32,
    /// Minimum column height.
    pub min_column_height: i32,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            origin: Point::new(0, 0),
            column_width: 280,
            column_gap: 16,
            header_height: 48,
            card_height: 96,
            card_gap: 8,
            min_column_height: 480,
        }
    }
}

impl BoardLayout {
    /// Rectangle of the column at `column_index` holding `card_count` cards.
    #[must_use]
    pub fn column_rect(&self, column_index: usize, card_count: usize) -> Rect {
        let column_pitch = self.column_width.saturating_add(self.column_gap);
        let x = self.origin.x.saturating_add(scaled(column_index, column_pitch));
        let content = self
            .header_height
            .saturating_add(scaled(card_count, self.card_pitch()));
        Rect::new(
            x,
            self.origin.y,
            self.column_width,
            content.max(self.min_column_height),
        )
    }

    /// Rectangle of the card at `row` in the column at `column_index`.
    #[must_use]
    pub fn card_rect(&self, column_index: usize, row: usize) -> Rect {
        let column = self.column_rect(column_index, 0);
        let y = column
            .y
            .saturating_add(self.header_height)
            .saturating_add(scaled(row, self.card_pitch()));
        Rect::new(column.x, y, self.column_width, self.card_height)
    }

    /// Drop zones in document order: each column, then its cards top to
    /// bottom, columns left to right.
    #[must_use]
    pub fn drop_zones(&self, view: &BoardView) -> Vec<DropZone> {
        let mut zones = Vec::new();
        for (column_index, column) in view.columns.iter().enumerate() {
            zones.push(DropZone {
                target: DropTarget::Column(column.id),
                rect: self.column_rect(column_index, column.cards.len()),
            });
            zones.extend(column.cards.iter().enumerate().map(|(row, card)| DropZone {
                target: DropTarget::Task(card.id),
                rect: self.card_rect(column_index, row),
            }));
        }
        zones
    }

    /// Finds the card under `point`.
    #[must_use]
    pub fn card_at(&self, view: &BoardView, point: Point) -> Option<(TaskId, Rect)> {
        view.columns
            .iter()
            .enumerate()
            .flat_map(|(column_index, column)| {
                column
                    .cards
                    .iter()
                    .enumerate()
                    .map(move |(row, card)| (card.id, self.card_rect(column_index, row)))
            })
            .find(|(_, rect)| rect.contains(point))
    }

    const fn card_pitch(&self) -> i32 {
        self.card_height.saturating_add(self.card_gap)
    }
}

fn scaled(count: usize, step: i32) -> i32 {
    i32::try_from(count)
        .unwrap_or(i32::MAX)
        .saturating_mul(step)
}
