//! 二维点（向量）值类型
//!
//! `Point` 同时充当位置和位移向量，所有运算都返回新值，不做原地修改。
//! 相等比较是逐分量的精确浮点比较，不带容差。

use crate::error::{GeometryError, Result};
use nalgebra as na;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// 二维点
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// 原点 (0, 0)
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// 欧几里得长度
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// 按分量展开为元组
    pub fn to_tuple(self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// 标量除法，除数为零时报错
    ///
    /// `/` 运算符遵循 IEEE 语义（得到 Inf/NaN），需要显式报错时使用本方法。
    pub fn try_div(self, k: f64) -> Result<Self> {
        if k == 0.0 {
            return Err(GeometryError::DivisionByZero);
        }
        Ok(self / k)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

// NaN 分量不满足自反性，调用方需自行避免把 NaN 点放入集合。
impl Eq for Point {}

/// `0.0 == -0.0`，因此哈希前统一成正零
fn canonical_bits(v: f64) -> u64 {
    if v == 0.0 {
        0
    } else {
        v.to_bits()
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.x).hash(state);
        canonical_bits(self.y).hash(state);
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, k: f64) -> Self::Output {
        Self::new(self.x * k, self.y * k)
    }
}

impl Mul<Point> for f64 {
    type Output = Point;

    fn mul(self, p: Point) -> Self::Output {
        p * self
    }
}

impl Div<f64> for Point {
    type Output = Self;

    fn div(self, k: f64) -> Self::Output {
        Self::new(self.x / k, self.y / k)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        p.to_tuple()
    }
}

impl From<Point> for na::Point2<f64> {
    fn from(p: Point) -> Self {
        na::Point2::new(p.x, p.y)
    }
}

impl From<na::Point2<f64>> for Point {
    fn from(p: na::Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point> for na::Vector2<f64> {
    fn from(p: Point) -> Self {
        na::Vector2::new(p.x, p.y)
    }
}

impl From<na::Vector2<f64>> for Point {
    fn from(v: na::Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}
