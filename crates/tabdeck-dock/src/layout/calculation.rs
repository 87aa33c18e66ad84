//! Layout calculation: tab bar headers and the content rect.

use tabdeck_common::Rect;

use super::{DockGeometry, DockLayout, HeaderGeometry, HeaderHit};

impl DockLayout {
    /// Place headers for tabs with the given closability, left to right.
    pub fn compute(&self, bounds: Rect, closable: &[bool]) -> DockGeometry {
        let bar_height = self.tab_bar_height.min(bounds.height).max(0.0);
        let count = closable.len();

        let tab_width = if count == 0 {
            self.tab_width
        } else {
            (bounds.width / count as f64)
                .min(self.tab_width)
                .max(self.min_tab_width)
        };

        let headers = closable
            .iter()
            .enumerate()
            .map(|(i, &can_close)| {
                let header = Rect {
                    x: bounds.x + i as f64 * tab_width,
                    y: bounds.y,
                    width: tab_width,
                    height: bar_height,
                };
                let close = can_close.then(|| {
                    let w = self.close_width.min(tab_width);
                    Rect {
                        x: header.x + header.width - w,
                        y: header.y,
                        width: w,
                        height: bar_height,
                    }
                });
                HeaderGeometry { header, close }
            })
            .collect();

        let content_height = (bounds.height - bar_height).max(0.0);
        let content = (content_height > 0.0).then_some(Rect {
            x: bounds.x,
            y: bounds.y + bar_height,
            width: bounds.width,
            height: content_height,
        });

        DockGeometry { headers, content }
    }
}

impl DockGeometry {
    /// Hit-test a point against the tab bar. Close buttons win over the
    /// header they sit on.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<HeaderHit> {
        self.headers.iter().enumerate().find_map(|(i, h)| {
            if h.close.is_some_and(|c| c.contains(x, y)) {
                Some(HeaderHit::Close(i))
            } else if h.header.contains(x, y) {
                Some(HeaderHit::Tab(i))
            } else {
                None
            }
        })
    }
}
