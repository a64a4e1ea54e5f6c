//! 邻近图
//!
//! 把引擎输出的邻接边列表编译成可查询的无向图，并回答
//! "从站点 X 出发、沿邻接边可达、且在给定半径内"的查询。
//!
//! # 生命周期
//!
//! ```text
//! Unbuilt ──build()──▶ Built ──首次查询──▶ Compiled
//!    ▲                                        │
//!    └────────────── build() ◀────────────────┘
//! ```
//!
//! 每次 `build()` 原子地替换全部节点和边；邻接表在首次查询时惰性编译，
//! 每次构建至多编译一次（状态枚举做幂等保护，重复触发是空操作，
//! 否则每个邻接表都会翻倍）。
//!
//! # 并发
//!
//! 单线程设计。所有可能触发编译的操作都要求 `&mut self`，
//! 互斥性由借用检查器在编译期保证。遍历用的访问标记是每次调用
//! 新建的局部数组，不同查询之间不会互相干扰。

use crate::engine::{compute_diagram, DiagramEdge};
use crate::error::GraphError;
use crate::geometry::{Bounds, Pos};
use crate::graph::node::SiteNode;

// ============================================================================
// 状态
// ============================================================================

/// 图实例的生命周期状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GraphState {
    /// 尚未构建
    Unbuilt,
    /// 已有节点和边，邻接表未编译
    Built,
    /// 邻接表已编译，可以查询
    Compiled,
}

// ============================================================================
// 邻近图
// ============================================================================

/// 站点邻近图
///
/// 持有全部 [`SiteNode`] 的节点数组（arena），节点之间用索引互相引用。
///
/// # 使用示例
/// ```ignore
/// let mut graph = ProximityGraph::with_min_separation(0.1);
/// graph.build(&points, Bounds::new(-1.0, 21.0, -1.0, 16.0))?;
///
/// // 站点 0 半径 5 以内、沿邻接边可达的站点
/// let close = graph.close_to(0, 5.0)?;
/// ```
#[derive(Debug, Clone)]
pub struct ProximityGraph {
    /// 近重复站点合并阈值，传给引擎
    min_separation: f64,
    /// 全部节点，下标即站点编号
    nodes: Vec<SiteNode>,
    /// 引擎输出的邻接边，原样保存
    edges: Vec<DiagramEdge>,
    state: GraphState,
}

impl Default for ProximityGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl ProximityGraph {
    /// 创建空图，不合并近重复站点
    pub fn new() -> Self {
        Self::with_min_separation(0.0)
    }

    /// 创建空图并指定最小站点间距（负值按 0 处理）
    pub fn with_min_separation(min_separation: f64) -> Self {
        Self {
            min_separation: if min_separation > 0.0 {
                min_separation
            } else {
                0.0
            },
            nodes: Vec::new(),
            edges: Vec::new(),
            state: GraphState::Unbuilt,
        }
    }

    /// 用给定站点集构建图
    ///
    /// 每个站点按输入顺序分配编号，邻接边由引擎计算后原样保存，
    /// 成功时完全替换这个实例之前的全部状态。邻接表留到首次查询时编译。
    ///
    /// # 参数
    /// - `points`: 站点坐标，要求分量有限
    /// - `bounds`: 边界框
    ///
    /// # 返回值
    /// 本次构建的邻接边列表
    ///
    /// # 错误
    /// 原样传出引擎的 [`GraphError::InvalidInput`]，此时旧状态保持不变。
    pub fn build(
        &mut self,
        points: &[Pos],
        bounds: Bounds,
    ) -> Result<&[DiagramEdge], GraphError> {
        let edges = compute_diagram(points, self.min_separation, bounds)?;

        self.nodes = points
            .iter()
            .enumerate()
            .map(|(i, &p)| SiteNode::new(i as u32, p))
            .collect();
        self.edges = edges;
        self.state = GraphState::Built;

        log::debug!(
            "邻近图构建完成: {} 个站点, {} 条边",
            self.nodes.len(),
            self.edges.len()
        );
        Ok(&self.edges)
    }

    /// 最近一次构建的站点数量（从未构建时为 0）
    #[inline]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// 最近一次构建的邻接边列表
    #[inline]
    pub fn edges(&self) -> &[DiagramEdge] {
        &self.edges
    }

    /// 获取一个站点节点
    ///
    /// 首次访问会触发邻接表编译。
    ///
    /// # 错误
    /// `index >= size()` 时返回 [`GraphError::IndexOutOfRange`]。
    pub fn node(&mut self, index: usize) -> Result<&SiteNode, GraphError> {
        self.check_index(index)?;
        self.compile_adjacency();
        Ok(&self.nodes[index])
    }

    /// 查找给定半径内、沿邻接边可达的站点
    ///
    /// 深度优先遍历，带访问标记和半径剪枝：
    /// 一个站点一旦超出半径，既不收入结果，也**不再向它的邻居扩展**。
    /// 因此只能经过暂时出界的中间站点才可达的近处站点会被漏掉，
    /// 这是有意保留的剪枝语义，不要改成先全遍历再过滤。
    ///
    /// 距离边界是闭的（`d <= radius` 算在内）。
    ///
    /// # 参数
    /// - `origin`: 出发站点编号
    /// - `radius`: 搜索半径，要求非负
    ///
    /// # 返回值
    /// 可达站点编号的无序列表，不含 `origin` 自身。
    ///
    /// # 错误
    /// `origin` 越界时返回 [`GraphError::IndexOutOfRange`]；
    /// `radius` 为负或 NaN 时返回 [`GraphError::InvalidInput`]。
    pub fn close_to(&mut self, origin: usize, radius: f64) -> Result<Vec<u32>, GraphError> {
        self.check_index(origin)?;
        if radius.is_nan() || radius < 0.0 {
            return Err(GraphError::InvalidInput(format!(
                "radius must be non-negative, got {radius}"
            )));
        }
        self.compile_adjacency();

        // 访问标记是本次调用的局部状态，出发点先标记但不收入结果
        let mut visited = vec![false; self.nodes.len()];
        visited[origin] = true;

        let mut result = Vec::new();
        let mut stack: Vec<u32> = self.nodes[origin].neighbors().to_vec();

        while let Some(idx) = stack.pop() {
            let i = idx as usize;
            if visited[i] {
                continue;
            }
            visited[i] = true;

            // 先标记后测距：出界站点同样只处理一次，这也是环的终止条件
            if self.nodes[i].distance(&self.nodes[origin]) > radius {
                continue;
            }

            result.push(idx);
            stack.extend_from_slice(self.nodes[i].neighbors());
        }

        Ok(result)
    }

    // ========================================================================
    // 内部方法
    // ========================================================================

    fn check_index(&self, index: usize) -> Result<(), GraphError> {
        if index >= self.nodes.len() {
            return Err(GraphError::IndexOutOfRange {
                index,
                size: self.nodes.len(),
            });
        }
        Ok(())
    }

    /// 把保存的边列表编译成对称的邻接表
    ///
    /// 每次构建至多执行一次；每条边 `(a, b)` 把 b 追加进 a 的邻接表、
    /// a 追加进 b 的邻接表，建立对称邻接不变量。O(E)。
    fn compile_adjacency(&mut self) {
        if self.state != GraphState::Built {
            return;
        }

        let nodes = &mut self.nodes;
        for edge in &self.edges {
            nodes[edge.a as usize].push_neighbor(edge.b);
            nodes[edge.b as usize].push_neighbor(edge.a);
        }

        self.state = GraphState::Compiled;
        log::debug!("邻接表编译完成: {} 条边", self.edges.len());
    }
}
