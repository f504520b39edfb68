use super::vertex::ClipVertex;
use nalgebra::Point2;

/// 视口变换：裁剪空间 -> NDC -> 像素坐标
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// 透视除法后将 NDC [-1, 1] 映射到 [0, width) x [0, height)
    ///
    /// w 为 0 或结果非有限值时返回 `None`，调用者应将其视为退化顶点。
    pub fn clip_to_screen(&self, clip: &ClipVertex) -> Option<Point2<f64>> {
        if clip.w == 0.0 {
            return None;
        }

        let ndc = clip_to_ndc(clip);
        let screen = ndc_to_pixel(ndc, f64::from(self.width), f64::from(self.height));

        if screen.x.is_finite() && screen.y.is_finite() {
            Some(screen)
        } else {
            None
        }
    }
}

/// 透视除法
#[inline]
pub fn clip_to_ndc(clip: &ClipVertex) -> Point2<f64> {
    Point2::new(clip.x / clip.w, clip.y / clip.w)
}

/// NDC 坐标转像素坐标
#[inline]
pub fn ndc_to_pixel(ndc: Point2<f64>, width: f64, height: f64) -> Point2<f64> {
    Point2::new((ndc.x + 1.0) * width / 2.0, (ndc.y + 1.0) * height / 2.0)
}
