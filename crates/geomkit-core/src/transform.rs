//! 2D刚体变换
//!
//! 提供绕点旋转和沿水平/竖直轴线镜像。
//!
//! 旋转时先把 sin/cos 舍入到小数点后 4 位再代入旋转矩阵，
//! 这样 90°、180° 等常用角度能得到精确结果。

use crate::math::Matrix3;
use crate::point::Point;
use serde::{Deserialize, Serialize};

/// 舍入的小数位数对应的倍率
const TRIG_SCALE: f64 = 1e4;

fn round_trig(v: f64) -> f64 {
    (v * TRIG_SCALE).round_ties_even() / TRIG_SCALE
}

/// 舍入后的 (sin, cos)，角度单位为度
fn rounded_sin_cos(angle_degrees: f64) -> (f64, f64) {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    (round_trig(sin), round_trig(cos))
}

/// 将点绕 `center`（默认原点）逆时针旋转 `angle_degrees` 度
pub fn rotate(point: Point, angle_degrees: f64, center: Option<Point>) -> Point {
    let center = center.unwrap_or_default();
    let (sa, ca) = rounded_sin_cos(angle_degrees);
    let q = point - center;
    let x = q.x * ca - q.y * sa;
    let y = q.x * sa + q.y * ca;
    Point::new(x, y) + center
}

/// 沿竖直线 `X = x` 镜像
pub fn mirror_vertical(point: Point, x: f64) -> Point {
    let dx = x - point.x;
    Point::new(point.x + 2.0 * dx, point.y)
}

/// 沿水平线 `Y = y` 镜像
pub fn mirror_horizontal(point: Point, y: f64) -> Point {
    let dy = y - point.y;
    Point::new(point.x, point.y + 2.0 * dy)
}

/// 可组合的2D仿射变换
///
/// 与上面的自由函数使用相同的舍入三角函数，但经过矩阵组合后结果
/// 只保证数值上接近，不保证逐位相同。
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Transform2D {
    matrix: Matrix3,
}

impl Transform2D {
    /// 创建单位变换
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    /// 创建平移变换
    pub fn translation(dx: f64, dy: f64) -> Self {
        Self {
            matrix: Matrix3::new(
                1.0, 0.0, dx,
                0.0, 1.0, dy,
                0.0, 0.0, 1.0,
            ),
        }
    }

    /// 创建绕指定点的旋转变换（角度单位为度）
    pub fn rotation_degrees(angle_degrees: f64, center: Point) -> Self {
        let (sin, cos) = rounded_sin_cos(angle_degrees);
        let rotation = Self {
            matrix: Matrix3::new(
                cos, -sin, 0.0,
                sin, cos, 0.0,
                0.0, 0.0, 1.0,
            ),
        };
        Self::translation(center.x, center.y)
            .then(&rotation)
            .then(&Self::translation(-center.x, -center.y))
    }

    /// 沿竖直线 `X = x` 镜像
    pub fn mirror_vertical(x: f64) -> Self {
        Self {
            matrix: Matrix3::new(
                -1.0, 0.0, 2.0 * x,
                0.0, 1.0, 0.0,
                0.0, 0.0, 1.0,
            ),
        }
    }

    /// 沿水平线 `Y = y` 镜像
    pub fn mirror_horizontal(y: f64) -> Self {
        Self {
            matrix: Matrix3::new(
                1.0, 0.0, 0.0,
                0.0, -1.0, 2.0 * y,
                0.0, 0.0, 1.0,
            ),
        }
    }

    /// 组合两个变换（self 在后，other 在前）
    pub fn then(&self, other: &Transform2D) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// 变换一个点
    pub fn transform_point(&self, point: &Point) -> Point {
        let v = self.matrix * nalgebra::Vector3::new(point.x, point.y, 1.0);
        Point::new(v.x, v.y)
    }

    /// 获取逆变换
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|m| Self { matrix: m })
    }

    /// 获取变换矩阵
    pub fn matrix(&self) -> &Matrix3 {
        &self.matrix
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Transform2D {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.then(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::points_approx_eq;

    #[test]
    fn test_rotate() {
        let p = Point::new(1.0, 2.0);
        let q = Point::new(-2.0, 1.0);

        assert_eq!(rotate(p, 90.0, None), q);
        assert_eq!(rotate(p, 180.0, None), -p);
        assert_eq!(rotate(p, -90.0, None), -q);
        assert_eq!(rotate(p, -90.0, None), -rotate(p, 90.0, None));
    }

    #[test]
    fn test_rotate_around_center() {
        let center = Point::new(1.0, 1.0);
        let p = Point::new(2.0, 1.0);

        assert_eq!(rotate(p, 90.0, Some(center)), Point::new(1.0, 2.0));
        assert_eq!(rotate(center, 37.0, Some(center)), center);
    }

    #[test]
    fn test_rotate_uses_rounded_trig() {
        // sin(45°) = cos(45°) = 0.7071 after rounding
        let r = rotate(Point::new(1.0, 0.0), 45.0, None);
        assert_eq!(r, Point::new(0.7071, 0.7071));
    }

    #[test]
    fn test_mirror() {
        let p = Point::new(1.0, 2.0);

        assert_eq!(mirror_vertical(p, 0.0), Point::new(-1.0, 2.0));
        assert_eq!(mirror_horizontal(p, 0.0), Point::new(1.0, -2.0));
        assert_eq!(mirror_vertical(p, 3.0), Point::new(5.0, 2.0));
        assert_eq!(mirror_horizontal(p, 3.0), Point::new(1.0, 4.0));
    }

    #[test]
    fn test_transform_matches_free_functions() {
        let p = Point::new(3.5, -1.25);
        let center = Point::new(-2.0, 4.0);

        let t = Transform2D::rotation_degrees(30.0, center);
        assert!(points_approx_eq(
            &t.transform_point(&p),
            &rotate(p, 30.0, Some(center))
        ));

        let m = Transform2D::mirror_vertical(3.0).then(&Transform2D::mirror_horizontal(3.0));
        assert!(points_approx_eq(
            &m.transform_point(&p),
            &mirror_horizontal(mirror_vertical(p, 3.0), 3.0)
        ));
    }

    #[test]
    fn test_inverse() {
        let t = Transform2D::translation(10.0, 20.0)
            * Transform2D::rotation_degrees(90.0, Point::new(1.0, 1.0))
            * Transform2D::mirror_vertical(2.0);

        let inv = t.inverse().unwrap();
        let p = Point::new(100.0, 200.0);
        let restored = inv.transform_point(&t.transform_point(&p));

        assert!(points_approx_eq(&restored, &p));
    }

    #[test]
    fn test_mirror_is_involution() {
        let m = Transform2D::mirror_horizontal(-7.5);
        let p = Point::new(4.0, 9.0);
        assert!(points_approx_eq(&m.then(&m).transform_point(&p), &p));
        assert!(points_approx_eq(
            &Transform2D::default().transform_point(&p),
            &p
        ));
    }
}
