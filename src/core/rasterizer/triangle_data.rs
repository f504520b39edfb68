use crate::geometry::vertex::VertexAttributes;
use std::cmp::Ordering;

/// 按高度分类后的三角形顶点
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortedTriangle {
    pub top: VertexAttributes,
    pub middle: VertexAttributes,
    pub bottom: VertexAttributes,
}

impl SortedTriangle {
    /// 按 y 升序分类三个顶点
    ///
    /// `top` 取 y 最小者，`bottom` 取 y 最大者，`middle` 为剩余顶点。
    /// 并列时取输入顺序中最先出现的顶点，结果完全确定。
    /// 零高度三角形（top.y == bottom.y）返回 `None`。
    pub fn classify(vertices: &[VertexAttributes; 3]) -> Option<Self> {
        let y = |i: usize| vertices[i].position.y;

        let mut top = 0;
        let mut bottom = 0;
        for i in 1..3 {
            if y(i) < y(top) {
                top = i;
            }
            if y(i) > y(bottom) {
                bottom = i;
            }
        }

        // NaN 无法比较，这里一并排除
        if y(top).partial_cmp(&y(bottom)) != Some(Ordering::Less) {
            return None;
        }

        let middle = 3 - top - bottom;
        Some(Self {
            top: vertices[top],
            middle: vertices[middle],
            bottom: vertices[bottom],
        })
    }
}
