//! Grid layout strategy
//!
//! Places node `i` at column `i mod columns_per_row` and row
//! `i / columns_per_row`, with constant spacing from a fixed origin. There is
//! no collision avoidance and no awareness of label sizes.

use archgraph_core::geometry::Point;

/// Parameters of the grid strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridOptions {
    pub columns_per_row: usize,
    pub horizontal_spacing: f32,
    pub vertical_spacing: f32,
    /// Position of the first cell.
    pub origin: Point,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            columns_per_row: 3,
            horizontal_spacing: 300.0,
            vertical_spacing: 200.0,
            origin: Point::new(100.0, 100.0),
        }
    }
}

impl GridOptions {
    /// Position of the node at `index`, or `None` when `columns_per_row` is zero.
    pub fn cell(&self, index: usize) -> Option<Point> {
        let column = index.checked_rem(self.columns_per_row)?;
        let row = index.checked_div(self.columns_per_row)?;

        Some(self.origin.add_point(Point::new(
            column as f32 * self.horizontal_spacing,
            row as f32 * self.vertical_spacing,
        )))
    }
}

/// Positions for `count` nodes in row-major order.
///
/// Returns no positions when `columns_per_row` is zero.
pub fn positions(count: usize, options: &GridOptions) -> Vec<Point> {
    (0..count).map_while(|index| options.cell(index)).collect()
}

#[cfg(test)]
mod tests {
    use float_cmp::{approx_eq, assert_approx_eq};
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_first_row() {
        let options = GridOptions::default();
        let points = positions(3, &options);

        assert_eq!(points[0], Point::new(100.0, 100.0));
        assert_eq!(points[1], Point::new(400.0, 100.0));
        assert_eq!(points[2], Point::new(700.0, 100.0));
    }

    #[test]
    fn test_wraps_after_columns_per_row() {
        let options = GridOptions::default();
        let points = positions(5, &options);

        assert_eq!(points[3], Point::new(100.0, 300.0));
        assert_eq!(points[4], Point::new(400.0, 300.0));
    }

    #[test]
    fn test_zero_columns() {
        let options = GridOptions {
            columns_per_row: 0,
            ..GridOptions::default()
        };
        assert!(positions(4, &options).is_empty());
    }

    #[test]
    fn test_cell_with_zero_columns() {
        let options = GridOptions {
            columns_per_row: 0,
            ..GridOptions::default()
        };
        assert_eq!(options.cell(0), None);
        assert_eq!(options.cell(7), None);
    }

    #[test]
    fn test_cell() {
        let options = GridOptions::default();
        assert_eq!(options.cell(0), Some(Point::new(100.0, 100.0)));
        assert_eq!(options.cell(5), Some(Point::new(700.0, 300.0)));
    }

    #[test]
    fn test_zero_count() {
        assert!(positions(0, &GridOptions::default()).is_empty());
    }

    #[test]
    fn test_single_column() {
        let options = GridOptions {
            columns_per_row: 1,
            vertical_spacing: 50.0,
            origin: Point::default(),
            ..GridOptions::default()
        };
        let points = positions(3, &options);

        for (row, point) in points.iter().enumerate() {
            assert_approx_eq!(f32, point.x(), 0.0);
            assert_approx_eq!(f32, point.y(), row as f32 * 50.0);
        }
    }

    fn options_strategy() -> impl Strategy<Value = GridOptions> {
        (1usize..8, 1.0f32..500.0, 1.0f32..500.0, -500.0f32..500.0, -500.0f32..500.0).prop_map(
            |(columns_per_row, horizontal_spacing, vertical_spacing, x, y)| GridOptions {
                columns_per_row,
                horizontal_spacing,
                vertical_spacing,
                origin: Point::new(x, y),
            },
        )
    }

    proptest! {
        #[test]
        fn next_row_shares_column(options in options_strategy(), count in 0usize..40) {
            let points = positions(count, &options);
            prop_assert_eq!(points.len(), count);

            for i in 0..count.saturating_sub(options.columns_per_row) {
                let above = points[i];
                let below = points[i + options.columns_per_row];
                prop_assert!(approx_eq!(f32, below.x(), above.x(), ulps = 4));
                prop_assert!(approx_eq!(
                    f32,
                    below.y() - above.y(),
                    options.vertical_spacing,
                    epsilon = 1e-2
                ));
            }
        }

        #[test]
        fn positions_are_deterministic(options in options_strategy(), count in 0usize..40) {
            prop_assert_eq!(positions(count, &options), positions(count, &options));
        }
    }
}
