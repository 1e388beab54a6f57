use polygonation::{Point, PolygonationError};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub fn points_from_py(points: &[(f64, f64)]) -> Vec<Point> {
    points.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

pub fn map_polygonation_err(err: PolygonationError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
