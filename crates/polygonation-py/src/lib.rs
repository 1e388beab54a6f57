//! PyO3 bindings for `polygonation`.
//!
//! Notes
//! - Keep bindings thin and predictable: points cross the boundary as
//!   `(x, y)` tuples, shapes as lists of point indices.
//! - `find_shape` returns -1 outside the convex hull, matching the Python
//!   package this mirrors.

use nalgebra::Vector2;
use polygonation::{EdgePolicy, PolygonateCfg};
use pyo3::prelude::*;

mod common;

use common::{map_polygonation_err, points_from_py};

/// Whether the polygon with vertices `polygon` (in order) is convex.
#[pyfunction]
fn is_convex(polygon: Vec<(f64, f64)>) -> bool {
    polygonation::is_convex(&points_from_py(&polygon))
}

/// Tessellate a set of points with non-overlapping polygons.
#[pyclass(name = "Polygonate", frozen)]
struct PyPolygonate {
    inner: polygonation::Polygonate,
}

#[pymethods]
impl PyPolygonate {
    #[new]
    #[pyo3(signature = (points, *, pickedge = "", convex = true))]
    fn new(points: Vec<(f64, f64)>, pickedge: &str, convex: bool) -> PyResult<Self> {
        let cfg = PolygonateCfg {
            policy: EdgePolicy::from_prefix(pickedge),
            convex,
        };
        let inner = polygonation::Polygonate::new(points_from_py(&points), cfg)
            .map_err(map_polygonation_err)?;
        Ok(Self { inner })
    }

    /// The (x, y) coordinates of the points.
    #[getter]
    fn points(&self) -> Vec<(f64, f64)> {
        self.inner.points().iter().map(|p| (p.x, p.y)).collect()
    }

    /// The point-indices of the vertices of each shape.
    #[getter]
    fn shapes(&self) -> Vec<Vec<usize>> {
        self.inner.shapes().to_vec()
    }

    /// The neighbors of each shape.
    #[getter]
    fn neighbors(&self) -> Vec<Vec<usize>> {
        self.inner.neighbors().to_vec()
    }

    /// Index of the shape containing `point`, or -1 (also for NaN or
    /// infinite coordinates).
    fn find_shape(&self, point: (f64, f64)) -> i64 {
        self.inner
            .find_shape(Vector2::new(point.0, point.1))
            .map_or(-1, |si| si as i64)
    }
}

#[pymodule]
fn polygonation_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(is_convex, m)?)?;
    m.add_class::<PyPolygonate>()?;
    Ok(())
}
