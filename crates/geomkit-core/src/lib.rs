//! geomkit 核心几何库
//!
//! 提供二维点、刚体变换以及直线/圆之间的解析求交。
//!
//! # 示例
//!
//! ```rust
//! use geomkit_core::prelude::*;
//!
//! let a: Shape = Circle::new(Point::new(0.0, -4.0), 5.0).into();
//! let b: Shape = Circle::new(Point::new(0.0, 4.0), 5.0).into();
//!
//! let points = intersect(&a, &b);
//! assert_eq!(points.len(), 2);
//! ```

pub mod error;
pub mod intersect;
pub mod math;
pub mod point;
pub mod shape;
pub mod transform;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::error::{GeometryError, Result};
    pub use crate::intersect::{intersect, Intersect, Intersection};
    pub use crate::point::Point;
    pub use crate::shape::{Circle, Line, Shape};
    pub use crate::transform::{mirror_horizontal, mirror_vertical, rotate, Transform2D};
}
