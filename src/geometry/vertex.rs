use nalgebra::{Point2, Vector3, Vector4};
use std::ops::{Add, Mul, Sub};

/// 齐次裁剪空间坐标 (x, y, z, w)，z 保留但不参与光栅化
pub type ClipVertex = Vector4<f64>;

/// RGB 颜色，各分量范围 [0.0, 1.0]
pub type Color = Vector3<f64>;

/// 插值时的驱动轴
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// 可被 DDA 线性插值的属性记录
///
/// 要求支持逐分量加减和标量乘法，并能按驱动轴读写坐标。
pub trait Interpolant:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f64, Output = Self>
{
    /// 读取驱动轴上的坐标
    fn coord(&self, axis: Axis) -> f64;

    /// 返回替换了驱动轴坐标的副本
    fn with_coord(self, axis: Axis, value: f64) -> Self;
}

/// 屏幕空间顶点：像素坐标 + 颜色
///
/// 三角形边遍历 (驱动轴 y) 和水平跨度遍历 (驱动轴 x) 共用这一类型。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexAttributes {
    pub position: Point2<f64>,
    pub color: Color,
}

impl VertexAttributes {
    pub fn new(position: Point2<f64>, color: Color) -> Self {
        Self { position, color }
    }

    pub fn from_components(x: f64, y: f64, r: f64, g: f64, b: f64) -> Self {
        Self::new(Point2::new(x, y), Color::new(r, g, b))
    }
}

impl Add for VertexAttributes {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            position: Point2::from(self.position.coords + rhs.position.coords),
            color: self.color + rhs.color,
        }
    }
}

impl Sub for VertexAttributes {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            position: Point2::from(self.position.coords - rhs.position.coords),
            color: self.color - rhs.color,
        }
    }
}

impl Mul<f64> for VertexAttributes {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self {
            position: Point2::from(self.position.coords * rhs),
            color: self.color * rhs,
        }
    }
}

impl Interpolant for VertexAttributes {
    #[inline]
    fn coord(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.position.x,
            Axis::Y => self.position.y,
        }
    }

    #[inline]
    fn with_coord(mut self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::X => self.position.x = value,
            Axis::Y => self.position.y = value,
        }
        self
    }
}
