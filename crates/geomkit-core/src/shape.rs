//! 几何图元定义
//!
//! 支持的图元：
//! - 直线 (Line)：由两个不同的点确定的无限长直线
//! - 圆 (Circle)：圆心 + 半径
//!
//! `Shape` 是二者的封闭枚举，求交分派见 [`crate::intersect`]。

use crate::error::{GeometryError, Result};
use crate::point::Point;
use serde::{Deserialize, Serialize};

/// 图元枚举
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Line(Line),
    Circle(Circle),
}

impl Shape {
    /// 获取图元的类型名称
    pub fn type_name(&self) -> &'static str {
        match self {
            Shape::Line(_) => "Line",
            Shape::Circle(_) => "Circle",
        }
    }
}

impl From<Line> for Shape {
    fn from(line: Line) -> Self {
        Shape::Line(line)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

/// 直线
///
/// 两个定义点相同时直线退化，`new` 不做检查，求交结果会出现 NaN/Inf；
/// 需要校验时使用 [`Line::try_new`]。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub p0: Point,
    pub p1: Point,
}

impl Line {
    pub fn new(p0: Point, p1: Point) -> Self {
        Self { p0, p1 }
    }

    /// 创建直线并拒绝两点重合的情况
    pub fn try_new(p0: Point, p1: Point) -> Result<Self> {
        if p0 == p1 {
            return Err(GeometryError::DegenerateLine { point: p0 });
        }
        Ok(Self::new(p0, p1))
    }

    pub fn to_tuple(self) -> (Point, Point) {
        (self.p0, self.p1)
    }

    /// 隐式方程 `a·x + b·y = c` 的系数
    pub fn implicit_params(&self) -> (f64, f64, f64) {
        let (x1, y1) = self.p0.to_tuple();
        let (x2, y2) = self.p1.to_tuple();
        let a = y2 - y1;
        let b = x1 - x2;
        let c = a * x1 + b * y1;
        (a, b, c)
    }
}

/// 圆
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// 创建圆并要求半径为正的有限值
    pub fn try_new(center: Point, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeometryError::InvalidRadius(radius));
        }
        Ok(Self::new(center, radius))
    }

    pub fn to_tuple(self) -> (Point, f64) {
        (self.center, self.radius)
    }

    /// 经过 `p1`、`p2` 且半径为 `radius` 的两个圆的圆心
    ///
    /// 两点重合或半径小于两点距离的一半时返回 `None`；
    /// 半径恰好等于一半距离时两个圆心重合。
    pub fn centers_through(p1: Point, p2: Point, radius: f64) -> Option<(Point, Point)> {
        let d = p2 - p1;
        let q = d.norm();
        let half = q / 2.0;
        if q == 0.0 || radius * radius < half * half {
            return None;
        }

        let mid = (p1 + p2) / 2.0;
        let perp = Point::new(-d.y, d.x);
        let s = (radius * radius - half * half).sqrt();
        let t = s / q * perp;
        Some((mid + t, mid - t))
    }
}
