//! 基础几何类型
//!
//! 提供站点坐标 [`Pos`] 与边界框 [`Bounds`]。
//! 所有坐标使用 `f64`，与 `delaunator` 的输入类型一致。

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

// ============================================================================
// 坐标点
// ============================================================================

/// 二维坐标点
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pos {
    pub x: f64,
    pub y: f64,
}

impl Pos {
    /// 创建坐标点
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// 到另一点的欧氏距离
    #[inline]
    pub fn distance(self, other: Pos) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// 两个坐标是否都是有限值
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// 从成对的 x / y 坐标数组组装点集
    ///
    /// 对应按分量存储坐标的调用方。两个数组长度不一致时报错。
    pub fn zip(xs: &[f64], ys: &[f64]) -> Result<Vec<Pos>, GraphError> {
        if xs.len() != ys.len() {
            return Err(GraphError::InvalidInput(format!(
                "coordinate arrays differ in length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        Ok(xs
            .iter()
            .zip(ys.iter())
            .map(|(&x, &y)| Pos::new(x, y))
            .collect())
    }
}

// ============================================================================
// 边界框
// ============================================================================

/// 轴对齐边界框
///
/// 要求 `min_x <= max_x` 且 `min_y <= max_y`（零面积是合法的退化情况）。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// 创建边界框
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// 校验边界框是否合法
    ///
    /// 非有限分量或 min > max 都视为非法输入。
    pub fn validate(&self) -> Result<(), GraphError> {
        let finite = self.min_x.is_finite()
            && self.max_x.is_finite()
            && self.min_y.is_finite()
            && self.max_y.is_finite();
        if !finite {
            return Err(GraphError::InvalidInput(
                "bounding box has non-finite coordinates".into(),
            ));
        }
        if self.min_x > self.max_x || self.min_y > self.max_y {
            return Err(GraphError::InvalidInput(format!(
                "malformed bounding box: ({}, {}) x ({}, {})",
                self.min_x, self.max_x, self.min_y, self.max_y
            )));
        }
        Ok(())
    }

    /// 边界框宽度
    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// 边界框高度
    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// 对角线长度
    #[inline]
    pub fn diagonal(&self) -> f64 {
        self.width().hypot(self.height())
    }

    /// 把点压回边界框内
    pub fn clamp(&self, p: Pos) -> Pos {
        Pos::new(
            p.x.clamp(self.min_x, self.max_x),
            p.y.clamp(self.min_y, self.max_y),
        )
    }

    /// 将线段裁剪到边界框内（Liang–Barsky）
    ///
    /// # 返回值
    /// 裁剪后的线段端点；线段完全在框外时返回 `None`。
    pub fn clip_segment(&self, p1: Pos, p2: Pos) -> Option<(Pos, Pos)> {
        let dx = p2.x - p1.x;
        let dy = p2.y - p1.y;

        let mut t0 = 0.0_f64;
        let mut t1 = 1.0_f64;

        // 依次检查左、右、下、上四条边
        let checks = [
            (-dx, p1.x - self.min_x),
            (dx, self.max_x - p1.x),
            (-dy, p1.y - self.min_y),
            (dy, self.max_y - p1.y),
        ];

        for (p, q) in checks {
            if p.abs() < 1e-15 {
                // 平行于该边界，且在外侧
                if q < 0.0 {
                    return None;
                }
            } else {
                let t = q / p;
                if p < 0.0 {
                    if t > t1 {
                        return None;
                    }
                    if t > t0 {
                        t0 = t;
                    }
                } else {
                    if t < t0 {
                        return None;
                    }
                    if t < t1 {
                        t1 = t;
                    }
                }
            }
        }

        Some((
            Pos::new(p1.x + t0 * dx, p1.y + t0 * dy),
            Pos::new(p1.x + t1 * dx, p1.y + t1 * dy),
        ))
    }
}

// ============================================================================
// 测试
// ============================================================================
