//! Meshgrid construction over sampled axes.

use ndarray::{Array2, Zip};

/// A pair of coordinate arrays over the flow × diameter plane.
///
/// Orientation follows the usual meshgrid convention: the row index walks
/// the diameter samples, the column index walks the flow samples, so both
/// arrays share the shape `(diameters.len(), flows.len())`.
#[derive(Debug, Clone)]
pub struct Grid {
    /// Flow-rate coordinate at every grid point [mL/min]
    pub x: Array2<f64>,
    /// Diameter coordinate at every grid point [µm]
    pub y: Array2<f64>,
}

impl Grid {
    /// Outer product of two sampled axes.
    pub fn mesh(flows: &[f64], diameters: &[f64]) -> Self {
        let shape = (diameters.len(), flows.len());
        let x = Array2::from_shape_fn(shape, |(_, j)| flows[j]);
        let y = Array2::from_shape_fn(shape, |(i, _)| diameters[i]);
        Self { x, y }
    }

    pub fn shape(&self) -> (usize, usize) {
        self.x.dim()
    }

    /// Apply a `(flow, diameter)` function at every grid point.
    pub fn map_field(&self, f: impl Fn(f64, f64) -> f64) -> Array2<f64> {
        let mut out = Array2::zeros(self.x.raw_dim());
        Zip::from(&mut out)
            .and(&self.x)
            .and(&self.y)
            .for_each(|o, &x, &y| *o = f(x, y));
        out
    }
}

/// Constant overlay plane with the same shape as a grid field.
pub fn boundary_plane(shape: (usize, usize), value: f64) -> Array2<f64> {
    Array2::from_elem(shape, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_orientation() {
        let grid = Grid::mesh(&[1.0, 2.0, 3.0], &[10.0, 20.0]);
        assert_eq!(grid.shape(), (2, 3));
        // x repeats the flow sequence along every row
        assert_eq!(grid.x[[0, 0]], 1.0);
        assert_eq!(grid.x[[1, 0]], 1.0);
        assert_eq!(grid.x[[0, 2]], 3.0);
        // y repeats the diameter sequence down every column
        assert_eq!(grid.y[[0, 0]], 10.0);
        assert_eq!(grid.y[[0, 2]], 10.0);
        assert_eq!(grid.y[[1, 1]], 20.0);
    }

    #[test]
    fn map_field_visits_every_point() {
        let grid = Grid::mesh(&[1.0, 2.0], &[3.0, 4.0]);
        let sums = grid.map_field(|x, y| x + y);
        assert_eq!(sums[[0, 0]], 4.0);
        assert_eq!(sums[[0, 1]], 5.0);
        assert_eq!(sums[[1, 0]], 5.0);
        assert_eq!(sums[[1, 1]], 6.0);
    }

    #[test]
    fn boundary_plane_is_constant() {
        let plane = boundary_plane((4, 5), 2000.0);
        assert_eq!(plane.dim(), (4, 5));
        assert!(plane.iter().all(|&v| v == 2000.0));
    }
}
