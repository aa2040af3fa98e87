use crate::domain::model::Shape;
use crate::utils::error::Result;
use std::f64::consts::PI;

/// `second` is only read for rectangles.
pub fn area(shape: Shape, first: f64, second: f64) -> f64 {
    match shape {
        Shape::Circle => PI * first * first,
        Shape::Rectangle => first * second,
        Shape::Square => first * first,
    }
}

pub fn area_by_name(shape: &str, first: f64, second: f64) -> Result<f64> {
    let shape: Shape = shape.parse()?;
    Ok(area(shape, first, second))
}
