//! 邻近图引擎模块
//!
//! 把站点点集变成邻接边列表，是图核心 ([`crate::graph`]) 的上游：
//!
//! ```text
//! 站点点集 (Vec<Pos>) + 边界框 (Bounds)
//!        │
//!        ▼
//! ┌───────────────────┐
//! │ compute_diagram() │  ── Delaunay 剖分 + 对偶棱提取
//! └─────────┬─────────┘
//!           │
//!           ▼
//!   邻接边列表 (Vec<DiagramEdge>)
//! ```
//!
//! # 模块结构
//! - `diagram`: 邻接边提取（去重、剖分、对偶棱裁剪）
//! - `mesh`: delaunator 输出的半边视图

mod diagram;
mod mesh;

pub use diagram::{compute_diagram, DiagramEdge};
pub use mesh::DelaunayMesh;
