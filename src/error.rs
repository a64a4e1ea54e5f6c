//! 错误类型
//!
//! 本库只有两类错误，都是调用边界上的快速失败：
//! - [`GraphError::InvalidInput`]: 非法的几何输入（非有限坐标、畸形边界框、
//!   长度不一致的坐标数组、负数或 NaN 半径）
//! - [`GraphError::IndexOutOfRange`]: 站点索引超出 `[0, size())`
//!
//! 退化的几何输入（零面积边界框、被合并的重复点）不是错误，
//! 它们产生合法的、可能为空的结果。

use thiserror::Error;

/// 邻近图库的错误类型
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// 非法输入，不重试，直接返回给调用方
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// 站点索引越界
    #[error("index {index} out of range (graph has {size} sites)")]
    IndexOutOfRange {
        /// 调用方传入的索引
        index: usize,
        /// 当前图的站点数量
        size: usize,
    },
}
