//! 邻近图模块
//!
//! 图核心：把引擎输出的邻接边编译成节点 arena 上的无向图，
//! 提供半径限定的可达性查询。
//!
//! # 主要类型
//! - [`ProximityGraph`]: 图的持有者与查询入口
//! - [`SiteNode`]: 单个站点节点（编号、坐标、邻接索引表）

mod node;
mod proximity;


pub use node::SiteNode;
pub use proximity::ProximityGraph;
