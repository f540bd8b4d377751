use macroquad::prelude::*;

/// Always-visible selection list: a labeled column of choices with a
/// highlighted pick. Long item lists scroll with the mouse wheel while
/// hovered. Nothing is selected until the user clicks a row.
#[derive(Clone)]
pub struct SelectionList {
    x: f32,
    y: f32,
    width: f32,
    row_height: f32,
    label: String,
    items: Vec<String>,
    selected: Option<usize>,
    scroll: usize,
    visible_rows: usize,
}

impl SelectionList {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            row_height: 26.0,
            label: label.into(),
            items,
            selected: None,
            scroll: 0,
            visible_rows: 6,
        }
    }

    /// Limit how many rows show at once (builder pattern)
    pub fn with_visible_rows(mut self, rows: usize) -> Self {
        self.visible_rows = rows.max(1);
        self
    }

    /// Get currently selected index, if the user has picked one
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Set selected index and scroll it into view
    pub fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = Some(index);
            if index < self.scroll || index >= self.scroll + self.visible_rows {
                self.scroll = index.saturating_sub(self.visible_rows / 2);
                self.clamp_scroll();
            }
        }
    }

    /// Total height of the widget, label row included
    pub fn height(&self) -> f32 {
        let rows = self.visible_rows.min(self.items.len());
        self.row_height * rows as f32 + 20.0
    }

    /// Handle clicks and wheel scrolling; returns true if the selection
    /// changed this frame
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if self.is_hovered(mouse_pos) {
            let wheel = mouse_wheel().1;
            if wheel < 0.0 {
                self.scroll += 1;
                self.clamp_scroll();
            } else if wheel > 0.0 {
                self.scroll = self.scroll.saturating_sub(1);
            }
        }

        if is_mouse_button_pressed(MouseButton::Left) {
            if let Some(row) = self.row_at(mouse_pos) {
                if self.selected != Some(row) {
                    self.selected = Some(row);
                    return true;
                }
            }
        }
        false
    }

    /// Draw label, visible rows, and scroll hints
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 16.0, LIGHTGRAY);

        let shown = self.visible_rows.min(self.items.len());
        for offset in 0..shown {
            let index = self.scroll + offset;
            let row_y = self.y + offset as f32 * self.row_height;

            let row_color = if self.selected == Some(index) {
                Color::from_rgba(106, 153, 78, 255)
            } else if self.row_at(mouse_pos) == Some(index) {
                Color::from_rgba(74, 103, 65, 255)
            } else {
                Color::from_rgba(40, 54, 36, 255)
            };

            draw_rectangle(self.x, row_y, self.width, self.row_height, row_color);
            draw_rectangle_lines(
                self.x,
                row_y,
                self.width,
                self.row_height,
                1.0,
                Color::from_rgba(80, 90, 70, 255),
            );
            draw_text(
                &self.clipped(&self.items[index]),
                self.x + 6.0,
                row_y + self.row_height - 8.0,
                16.0,
                WHITE,
            );
        }

        // Scroll hints when rows are hidden above/below
        let list_bottom = self.y + shown as f32 * self.row_height;
        if self.scroll > 0 {
            draw_text("▲", self.x + self.width - 14.0, self.y - 5.0, 14.0, GRAY);
        }
        if self.scroll + shown < self.items.len() {
            draw_text("▼", self.x + self.width - 14.0, list_bottom + 12.0, 14.0, GRAY);
        }
    }

    fn clipped(&self, text: &str) -> String {
        let max_width = self.width - 12.0;
        if measure_text(text, None, 16, 1.0).width <= max_width {
            return text.to_string();
        }
        let mut truncated = text.to_string();
        while !truncated.is_empty()
            && measure_text(&format!("{truncated}..."), None, 16, 1.0).width > max_width
        {
            truncated.pop();
        }
        format!("{truncated}...")
    }

    fn clamp_scroll(&mut self) {
        let shown = self.visible_rows.min(self.items.len());
        self.scroll = self.scroll.min(self.items.len() - shown);
    }

    fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        let shown = self.visible_rows.min(self.items.len()) as f32;
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + shown * self.row_height
    }

    fn row_at(&self, mouse_pos: (f32, f32)) -> Option<usize> {
        if !self.is_hovered(mouse_pos) {
            return None;
        }
        let row = ((mouse_pos.1 - self.y) / self.row_height) as usize + self.scroll;
        (row < self.items.len()).then_some(row)
    }
}
