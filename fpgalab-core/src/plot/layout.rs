//! Figure layout arithmetic in normalized coordinates.
//!
//! The plot box sits inside fixed base margins; adding sliders grows the
//! bottom margin and shrinks the right margin so the strips never collide
//! with the axes. All rectangles are computed once at construction.

use super::PlotError;

/// Base plot-box margins of an empty figure.
const BASE_LEFT: f64 = 0.125;
const BASE_RIGHT: f64 = 0.9;
const BASE_BOTTOM: f64 = 0.11;
const BASE_TOP: f64 = 0.88;

/// Margin growth per slider.
const BOTTOM_MARGIN_STEP: f64 = 0.05;
const RIGHT_MARGIN_STEP: f64 = 0.065;

/// Slider strip geometry.
const STRIP_THICKNESS: f64 = 0.03;
const BOTTOM_STRIP_BASE: f64 = 0.05;
const BOTTOM_STRIP_PITCH: f64 = 0.05;
const RIGHT_STRIP_GAP: f64 = 0.08;
const RIGHT_STRIP_PITCH: f64 = 0.065;

/// With at most one right slider the bottom strips end short of the reset
/// box; with two or more, the shrunken right margin already clears it.
const BOTTOM_STRIP_NARROW: f64 = 0.12;

/// Gap between axes cells in the subplot grid.
const GRID_GAP: f64 = 0.05;

/// Rectangle in normalized figure coordinates, origin bottom-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FracRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl FracRect {
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn top(&self) -> f64 {
        self.y + self.h
    }

    /// True if the interiors intersect. Shared edges do not count.
    pub fn overlaps(&self, other: &FracRect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.top()
            && other.y < self.top()
    }
}

/// Every rectangle of a figure: axes cells, slider strips, reset box.
#[derive(Debug, Clone)]
pub struct FigureLayout {
    /// Axes cells, row-major from the top-left.
    pub axes: Vec<FracRect>,
    /// Horizontal strips stacking upward from the figure bottom.
    pub bottom_sliders: Vec<FracRect>,
    /// Vertical strips stacking rightward from the plot area.
    pub right_sliders: Vec<FracRect>,
    pub reset_button: FracRect,
}

impl FigureLayout {
    /// Compute the layout for `num_plots` axes and the given slider counts.
    ///
    /// Fails with [`PlotError::InvalidPlotCount`] for counts outside 1-4,
    /// before any geometry is built.
    pub fn compute(
        num_plots: usize,
        n_bottom: usize,
        n_right: usize,
    ) -> Result<FigureLayout, PlotError> {
        if !(1..=4).contains(&num_plots) {
            return Err(PlotError::InvalidPlotCount(num_plots));
        }

        let left = BASE_LEFT;
        let right = BASE_RIGHT - RIGHT_MARGIN_STEP * n_right as f64;
        let bottom = BASE_BOTTOM + BOTTOM_MARGIN_STEP * n_bottom as f64;
        let top = BASE_TOP;

        let plot_box = FracRect {
            x: left,
            y: bottom,
            w: right - left,
            h: top - bottom,
        };

        let narrow = if n_right <= 1 { BOTTOM_STRIP_NARROW } else { 0.0 };
        let bottom_sliders = (0..n_bottom)
            .map(|i| FracRect {
                x: left,
                y: BOTTOM_STRIP_BASE + BOTTOM_STRIP_PITCH * i as f64,
                w: (right - left) - narrow,
                h: STRIP_THICKNESS,
            })
            .collect();

        let right_sliders = (0..n_right)
            .map(|i| FracRect {
                x: right + RIGHT_STRIP_GAP + RIGHT_STRIP_PITCH * i as f64,
                y: bottom,
                w: STRIP_THICKNESS,
                h: top - bottom,
            })
            .collect();

        let reset_button = FracRect {
            x: 0.86,
            y: 0.05,
            w: 0.09,
            h: 0.03,
        };

        Ok(FigureLayout {
            axes: axes_grid(num_plots, plot_box),
            bottom_sliders,
            right_sliders,
            reset_button,
        })
    }

    /// Every rectangle of the layout, for overlap checks and rendering.
    pub fn all_rects(&self) -> impl Iterator<Item = &FracRect> {
        self.axes
            .iter()
            .chain(&self.bottom_sliders)
            .chain(&self.right_sliders)
            .chain(std::iter::once(&self.reset_button))
    }
}

/// Split the plot box into axes cells, row-major from the top-left.
///
/// 1 → the full box; 2 → two stacked rows; 3 → a 2x2 grid with the
/// bottom-right cell left empty; 4 → the full 2x2 grid.
fn axes_grid(num_plots: usize, plot_box: FracRect) -> Vec<FracRect> {
    let FracRect { x, y, w, h } = plot_box;
    match num_plots {
        1 => vec![plot_box],
        2 => {
            let row_h = (h - GRID_GAP) / 2.0;
            vec![
                FracRect { x, y: y + row_h + GRID_GAP, w, h: row_h },
                FracRect { x, y, w, h: row_h },
            ]
        }
        n => {
            let col_w = (w - GRID_GAP) / 2.0;
            let row_h = (h - GRID_GAP) / 2.0;
            let top_y = y + row_h + GRID_GAP;
            let mut cells = vec![
                FracRect { x, y: top_y, w: col_w, h: row_h },
                FracRect { x: x + col_w + GRID_GAP, y: top_y, w: col_w, h: row_h },
                FracRect { x, y, w: col_w, h: row_h },
                FracRect { x: x + col_w + GRID_GAP, y, w: col_w, h: row_h },
            ];
            cells.truncate(n);
            cells
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_count_matches_axes_count() {
        for n in 1..=4 {
            let layout = FigureLayout::compute(n, 2, 2).unwrap();
            assert_eq!(layout.axes.len(), n);
        }
    }

    #[test]
    fn plot_count_outside_range_is_rejected() {
        assert!(matches!(
            FigureLayout::compute(0, 0, 0),
            Err(PlotError::InvalidPlotCount(0))
        ));
        assert!(matches!(
            FigureLayout::compute(5, 0, 0),
            Err(PlotError::InvalidPlotCount(5))
        ));
    }

    #[test]
    fn two_plots_stack_vertically() {
        let layout = FigureLayout::compute(2, 0, 0).unwrap();
        let (upper, lower) = (&layout.axes[0], &layout.axes[1]);
        assert!(upper.y > lower.y);
        assert_eq!(upper.x, lower.x);
        assert_eq!(upper.w, lower.w);
    }

    #[test]
    fn three_plots_fill_grid_row_major_with_empty_cell() {
        let layout = FigureLayout::compute(3, 0, 0).unwrap();
        let [a, b, c] = [&layout.axes[0], &layout.axes[1], &layout.axes[2]];
        // Top row left-to-right, then bottom-left.
        assert_eq!(a.y, b.y);
        assert!(b.x > a.x);
        assert_eq!(c.x, a.x);
        assert!(c.y < a.y);
    }

    #[test]
    fn margins_scale_with_slider_counts() {
        let bare = FigureLayout::compute(1, 0, 0).unwrap();
        let loaded = FigureLayout::compute(1, 3, 2).unwrap();
        assert!(loaded.axes[0].y > bare.axes[0].y);
        assert!(loaded.axes[0].right() < bare.axes[0].right());
    }

    #[test]
    fn bottom_sliders_stack_upward() {
        let layout = FigureLayout::compute(1, 3, 0).unwrap();
        for pair in layout.bottom_sliders.windows(2) {
            assert!(pair[1].y >= pair[0].top());
        }
    }

    #[test]
    fn right_sliders_stack_rightward_of_plot() {
        let layout = FigureLayout::compute(1, 0, 3).unwrap();
        let plot_right = layout.axes[0].right();
        let mut last_edge = plot_right;
        for strip in &layout.right_sliders {
            assert!(strip.x >= last_edge);
            last_edge = strip.right();
        }
    }

    #[test]
    fn nothing_overlaps_anything() {
        for num_plots in 1..=4 {
            for n_bottom in 0..=4 {
                for n_right in 0..=4 {
                    let layout =
                        FigureLayout::compute(num_plots, n_bottom, n_right).unwrap();
                    let rects: Vec<&FracRect> = layout.all_rects().collect();
                    for (i, a) in rects.iter().enumerate() {
                        for b in &rects[i + 1..] {
                            assert!(
                                !a.overlaps(b),
                                "{num_plots}/{n_bottom}/{n_right}: {a:?} vs {b:?}"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn everything_stays_inside_the_figure() {
        for n_bottom in 0..=4 {
            for n_right in 0..=4 {
                let layout = FigureLayout::compute(4, n_bottom, n_right).unwrap();
                for rect in layout.all_rects() {
                    assert!(rect.x >= 0.0 && rect.y >= 0.0, "{rect:?}");
                    assert!(rect.right() <= 1.0 && rect.top() <= 1.0, "{rect:?}");
                }
            }
        }
    }
}
