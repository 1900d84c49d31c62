use ratatui::layout::Rect;

use crate::geometry::Point;

/// Maps terminal cells inside the rendered clock face to the widget's local
/// frame: origin at the face center, radius 1, y growing downward.
///
/// The face is drawn twice as wide as it is tall in cells, which makes it
/// round on a terminal with 1:2 cells, so x and y are scaled separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    area: Rect,
}

impl Viewport {
    pub fn new(area: Rect) -> Self {
        Self { area }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.x.saturating_add(self.area.width)
            && row >= self.area.y
            && row < self.area.y.saturating_add(self.area.height)
    }

    /// Local position of the center of a cell. Cells outside the face map
    /// past radius 1, which is fine while a drag is running.
    pub fn to_local(&self, column: u16, row: u16) -> Point {
        let half_w = (f64::from(self.area.width) / 2.0).max(0.5);
        let half_h = (f64::from(self.area.height) / 2.0).max(0.5);
        let center_x = f64::from(self.area.x) + f64::from(self.area.width) / 2.0;
        let center_y = f64::from(self.area.y) + f64::from(self.area.height) / 2.0;

        Point::new(
            (f64::from(column) + 0.5 - center_x) / half_w,
            (f64::from(row) + 0.5 - center_y) / half_h,
        )
    }
}
