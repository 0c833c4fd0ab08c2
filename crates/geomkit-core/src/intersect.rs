//! 直线与圆的求交
//!
//! 三个基本算法：
//! - 直线-直线：隐式方程 + Cramer 法则
//! - 直线-圆：平移到圆心坐标系后解二次方程
//! - 圆-圆：根轴中点 + 垂直偏移
//!
//! 退化判断（`det == 0`、`d == 0`、判别式为零）全部使用精确浮点比较，
//! 输入存在舍入误差时相切可能被判为相离或相割。
//!
//! 圆-圆求交例外：距离检查通过后 `d` 落在 `[|r0−r1|, r0+r1]` 内，
//! 此时 `r0² − a²` 为负只可能来自舍入，按相切处理，返回单个切点。
//!
//! `Shape` 之间的分派是对 (左, 右) 类型对的穷尽匹配，`Circle × Line`
//! 直接交换参数复用 `Line × Circle`。

use crate::point::Point;
use crate::shape::{Circle, Line, Shape};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// 求交结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "points", rename_all = "snake_case")]
pub enum Intersection {
    /// 平行或重合的直线，没有唯一交点（两种情况不做区分）
    NoUniquePoint,
    /// 0、1 或 2 个交点
    Points(Vec<Point>),
}

impl Intersection {
    pub fn empty() -> Self {
        Intersection::Points(Vec::new())
    }

    /// 交点切片，`NoUniquePoint` 时为空
    pub fn points(&self) -> &[Point] {
        match self {
            Intersection::NoUniquePoint => &[],
            Intersection::Points(points) => points,
        }
    }

    pub fn into_points(self) -> Vec<Point> {
        match self {
            Intersection::NoUniquePoint => Vec::new(),
            Intersection::Points(points) => points,
        }
    }

    pub fn len(&self) -> usize {
        self.points().len()
    }

    /// 是否为零个交点
    ///
    /// `NoUniquePoint` 不算空：重合直线有无穷多个公共点。
    pub fn is_empty(&self) -> bool {
        matches!(self, Intersection::Points(points) if points.is_empty())
    }

    pub fn is_no_unique_point(&self) -> bool {
        matches!(self, Intersection::NoUniquePoint)
    }
}

impl IntoIterator for Intersection {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_points().into_iter()
    }
}

/// 直线-直线交点
pub fn line_line(l1: &Line, l2: &Line) -> Intersection {
    let (a1, b1, c1) = l1.implicit_params();
    let (a2, b2, c2) = l2.implicit_params();

    let det = a1 * b2 - a2 * b1;
    if det == 0.0 {
        trace!("lines are parallel or coincident");
        return Intersection::NoUniquePoint;
    }

    let p = Point::new(b2 * c1 - b1 * c2, a1 * c2 - a2 * c1) / det;
    Intersection::Points(vec![p])
}

/// 直线-圆交点
///
/// 两交点时 x 方向偏移量的符号取自 `dy·dx`，对应标准公式中的 `sgn(dy)·dx`。
pub fn line_circle(line: &Line, circle: &Circle) -> Intersection {
    let (c, r) = circle.to_tuple();
    let p0 = line.p0 - c;
    let p1 = line.p1 - c;

    let dx = p1.x - p0.x;
    let dy = p1.y - p0.y;
    let dr2 = dx * dx + dy * dy;
    let det = p0.x * p1.y - p1.x * p0.y;
    let discriminant = r * r * dr2 - det * det;

    if discriminant < 0.0 {
        trace!(discriminant, "line misses circle");
        return Intersection::empty();
    }

    if discriminant == 0.0 {
        trace!("line is tangent to circle");
        let p = Point::new(det * dy / dr2, -det * dx / dr2) + c;
        return Intersection::Points(vec![p]);
    }

    let sd = discriminant.sqrt();
    let xdiff = (dx * sd).copysign(dy * dx);
    let ydiff = dy.abs() * sd;

    Intersection::Points(vec![
        Point::new(det * dy - xdiff, -det * dx - ydiff) / dr2 + c,
        Point::new(det * dy + xdiff, -det * dx + ydiff) / dr2 + c,
    ])
}

/// 圆-圆交点
///
/// 相离、内含和同心时返回空结果。
pub fn circle_circle(c0: &Circle, c1: &Circle) -> Intersection {
    let (p0, r0) = c0.to_tuple();
    let (p1, r1) = c1.to_tuple();

    let q = p1 - p0;
    let d = q.norm();
    if d > r0 + r1 || d < (r0 - r1).abs() || d == 0.0 {
        trace!(distance = d, "circles do not intersect");
        return Intersection::empty();
    }

    let a = (r0 * r0 - r1 * r1 + d * d) / (2.0 * d);
    let h_sq = r0 * r0 - a * a;
    let p2 = p0 + a * q / d;

    if h_sq <= 0.0 {
        trace!(h_sq, "circles are tangent");
        return Intersection::Points(vec![p2]);
    }

    let h = h_sq.sqrt();
    let qq = Point::new(-q.y, q.x);
    Intersection::Points(vec![p2 + h * qq / d, p2 - h * qq / d])
}

/// 按类型对静态分派的求交
///
/// 只为支持的组合实现，不支持的组合在编译期报错。
pub trait Intersect<Rhs = Self> {
    fn intersect(&self, other: &Rhs) -> Intersection;
}

impl Intersect for Line {
    fn intersect(&self, other: &Line) -> Intersection {
        line_line(self, other)
    }
}

impl Intersect<Circle> for Line {
    fn intersect(&self, other: &Circle) -> Intersection {
        line_circle(self, other)
    }
}

impl Intersect<Line> for Circle {
    fn intersect(&self, other: &Line) -> Intersection {
        line_circle(other, self)
    }
}

impl Intersect for Circle {
    fn intersect(&self, other: &Circle) -> Intersection {
        circle_circle(self, other)
    }
}

/// 任意两个图元求交
pub fn intersect(a: &Shape, b: &Shape) -> Intersection {
    trace!(a = a.type_name(), b = b.type_name(), "intersect");
    match (a, b) {
        (Shape::Line(l1), Shape::Line(l2)) => l1.intersect(l2),
        (Shape::Line(line), Shape::Circle(circle)) => line.intersect(circle),
        (Shape::Circle(circle), Shape::Line(line)) => circle.intersect(line),
        (Shape::Circle(c0), Shape::Circle(c1)) => c0.intersect(c1),
    }
}
