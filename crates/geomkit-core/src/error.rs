//! 几何运算错误定义

use crate::point::Point;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("degenerate line: both defining points are {point:?}")]
    DegenerateLine { point: Point },

    #[error("invalid circle radius: {0}")]
    InvalidRadius(f64),
}

pub type Result<T> = std::result::Result<T, GeometryError>;
