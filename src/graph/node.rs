//! 站点节点
//!
//! 节点存放在 [`crate::graph::ProximityGraph`] 的节点数组里，
//! 邻接关系用节点索引表达而不是引用，避免引用成环。

use serde::{Deserialize, Serialize};

use crate::geometry::Pos;

/// 站点节点
///
/// 一个输入站点加上它的邻接索引表。`id` 与节点在图中的下标一致，
/// 即 `graph.node(i).id() == i`。邻接表由图在编译阶段填充，
/// 对调用方只读。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteNode {
    id: u32,
    pos: Pos,
    neighbors: Vec<u32>,
}

impl SiteNode {
    /// 创建没有邻接关系的节点
    pub(crate) fn new(id: u32, pos: Pos) -> Self {
        Self {
            id,
            pos,
            neighbors: Vec::new(),
        }
    }

    /// 站点编号（等于输入顺序下标）
    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// 站点坐标
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// 邻接站点的索引表
    #[inline]
    pub fn neighbors(&self) -> &[u32] {
        &self.neighbors
    }

    /// 到另一节点的欧氏距离
    #[inline]
    pub fn distance(&self, other: &SiteNode) -> f64 {
        self.pos.distance(other.pos)
    }

    pub(crate) fn push_neighbor(&mut self, idx: u32) {
        self.neighbors.push(idx);
    }
}
