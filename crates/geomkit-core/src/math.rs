//! 数学基础类型
//!
//! 基于 nalgebra 的矩阵别名。

use nalgebra as na;

/// 2D齐次变换矩阵
pub type Matrix3 = na::Matrix3<f64>;

/// 测试用容差，库本身只做精确比较
#[cfg(test)]
pub(crate) const EPSILON: f64 = 1e-10;

/// 判断两个浮点数是否近似相等
#[cfg(test)]
#[inline]
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// 判断两个2D点是否近似相等
#[cfg(test)]
#[inline]
pub(crate) fn points_approx_eq(a: &crate::point::Point, b: &crate::point::Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}
