//! 邻近图引擎适配层
//!
//! 输入站点坐标、最小站点间距与边界框，输出站点邻接边列表。
//!
//! # 算法流程
//! 1. 校验输入（坐标有限、边界框合法）
//! 2. 合并间距小于阈值的近重复站点
//! 3. 用 `delaunator` 对保留站点做 Delaunay 三角剖分
//! 4. 每条对偶棱长度非零的 Delaunay 边输出为一条 [`DiagramEdge`]
//! 5. 为每条边附带对偶 Voronoi 棱的端点坐标（裁剪到边界框）
//!
//! Delaunay 图与 Voronoi 图互为对偶：两个站点的 Voronoi 单元格共享一条棱，
//! 当且仅当它们之间存在一条 Delaunay 边。唯一的例外是四点共圆：
//! 三角剖分必须任选一条对角线，但对角两个单元格只在公共 Voronoi 顶点上
//! 相触，对偶棱长度为零，这样的站点对不算相邻，不输出。
//!
//! 退化输入不报错：共线点集退化为沿线相邻的链，两个站点退化为单条边，
//! 少于两个站点输出空边表。

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::engine::mesh::DelaunayMesh;
use crate::error::GraphError;
use crate::geometry::{Bounds, Pos};

// ============================================================================
// 公开类型定义
// ============================================================================

/// 一条邻接边
///
/// `a` 与 `b` 是几何相邻的两个站点在**原始输入**中的索引。
/// `start` / `end` 是两站点之间对偶 Voronoi 棱的端点坐标，
/// 已裁剪到边界框内；图核心只使用 `(a, b)`，坐标仅供展示。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramEdge {
    /// 站点 A 的原始索引
    pub a: u32,
    /// 站点 B 的原始索引
    pub b: u32,
    /// 对偶棱起点
    pub start: Pos,
    /// 对偶棱终点
    pub end: Pos,
}

// ============================================================================
// 公开 API
// ============================================================================

/// 计算站点集的邻接边列表
///
/// # 参数
/// - `points`: 站点坐标，索引即站点编号
/// - `min_separation`: 最小站点间距，间距更小的站点被合并（负值按 0 处理）
/// - `bounds`: 边界框，用于裁剪对偶棱坐标
///
/// # 返回值
/// 邻接边列表。被合并的站点不出现在任何边中，但索引空间不变。
///
/// # 错误
/// 坐标含非有限值或边界框畸形时返回 [`GraphError::InvalidInput`]。
pub fn compute_diagram(
    points: &[Pos],
    min_separation: f64,
    bounds: Bounds,
) -> Result<Vec<DiagramEdge>, GraphError> {
    bounds.validate()?;

    for (i, p) in points.iter().enumerate() {
        if !p.is_finite() {
            return Err(GraphError::InvalidInput(format!(
                "point {} has non-finite coordinates ({}, {})",
                i, p.x, p.y
            )));
        }
    }

    let min_separation = if min_separation > 0.0 {
        min_separation
    } else {
        0.0
    };

    // 合并近重复站点，kept[i] 是保留站点的原始索引
    let (kept, kept_points) = merge_close_sites(points, min_separation);

    if kept.len() != points.len() {
        log::debug!(
            "合并近重复站点: {} 个输入, {} 个保留",
            points.len(),
            kept.len()
        );
    }

    let edges = match kept.len() {
        0 | 1 => Vec::new(),
        2 => {
            // 两个站点：单条边，对偶棱是垂直平分线
            vec![make_edge(
                kept[0],
                kept[1],
                bisector_segment(kept_points[0], kept_points[1], bounds),
                bounds,
            )]
        }
        _ => triangulated_edges(&kept, &kept_points, bounds),
    };

    log::debug!("邻接边提取完成: {} 条边", edges.len());
    Ok(edges)
}

// ============================================================================
// 内部实现
// ============================================================================

/// 对偶棱短于这个长度视为退化（两侧外心重合，即四点共圆）
const DEGENERATE_RIDGE: f64 = 1e-9;

/// 合并间距小于阈值的站点
///
/// 网格桶查找：格子尺寸等于阈值，候选点只可能落在周围 3x3 个格子里。
/// 阈值为 0 时不做合并（完全重合的点由 delaunator 自行忽略）。
fn merge_close_sites(points: &[Pos], min_separation: f64) -> (Vec<u32>, Vec<Pos>) {
    if min_separation <= 0.0 {
        let kept = (0..points.len() as u32).collect();
        return (kept, points.to_vec());
    }

    let mut grid: HashMap<(i64, i64), Vec<u32>> = HashMap::new();
    let mut kept: Vec<u32> = Vec::with_capacity(points.len());
    let mut kept_points: Vec<Pos> = Vec::with_capacity(points.len());

    let cell_of = |p: Pos| {
        (
            (p.x / min_separation).floor() as i64,
            (p.y / min_separation).floor() as i64,
        )
    };

    'next_point: for (i, &p) in points.iter().enumerate() {
        let (cx, cy) = cell_of(p);

        for gx in cx - 1..=cx + 1 {
            for gy in cy - 1..=cy + 1 {
                if let Some(bucket) = grid.get(&(gx, gy)) {
                    for &k in bucket {
                        if kept_points[k as usize].distance(p) < min_separation {
                            // 与已保留站点过近，合并（丢弃）
                            continue 'next_point;
                        }
                    }
                }
            }
        }

        let slot = kept.len() as u32;
        grid.entry((cx, cy)).or_default().push(slot);
        kept.push(i as u32);
        kept_points.push(p);
    }

    (kept, kept_points)
}

/// 从三角剖分提取邻接边
fn triangulated_edges(kept: &[u32], kept_points: &[Pos], bounds: Bounds) -> Vec<DiagramEdge> {
    let delaunay_points: Vec<delaunator::Point> = kept_points
        .iter()
        .map(|p| delaunator::Point { x: p.x, y: p.y })
        .collect();

    let triangulation = delaunator::triangulate(&delaunay_points);

    if triangulation.triangles.is_empty() {
        // 共线退化：没有三角形，凸包即沿线排序的全部站点，相邻站点成链
        let mut edges = Vec::new();
        for pair in triangulation.hull.windows(2) {
            let (sa, sb) = (pair[0], pair[1]);
            let (pa, pb) = (kept_points[sa], kept_points[sb]);
            edges.push(make_edge(kept[sa], kept[sb], bisector_segment(pa, pb, bounds), bounds));
        }
        return edges;
    }

    let mesh = DelaunayMesh::from_delaunator(kept_points.to_vec(), &triangulation);

    // 遍历所有半边，内部边只在 he < twin 时处理一次，边界边没有 twin
    let mut edges = Vec::with_capacity(mesh.halfedge_count());
    for he in 0..mesh.halfedge_count() as u32 {
        let twin = mesh.twin(he);
        if !mesh.is_boundary(he) && he > twin {
            continue;
        }

        let sa = mesh.halfedge_start(he) as usize;
        let sb = mesh.halfedge_end(he) as usize;
        let (pa, pb) = (kept_points[sa], kept_points[sb]);

        let segment = if !mesh.is_boundary(he) {
            // 内部边：对偶棱连接两侧三角形的外心
            let t1 = DelaunayMesh::triangle_of_halfedge(he);
            let t2 = DelaunayMesh::triangle_of_halfedge(twin);
            let (c1, c2) = (mesh.circumcenter(t1), mesh.circumcenter(t2));

            // 四点共圆时两侧外心重合，对偶棱长度为零：
            // 对角两个单元格只在一个 Voronoi 顶点上相触，没有共享棱
            if c1.distance(c2) < DEGENERATE_RIDGE {
                continue;
            }
            (c1, c2)
        } else {
            // 凸包边：对偶棱是从外心出发的射线，方向垂直于边指向凸包外侧。
            // delaunator 的三角形按逆时针排列，半边右侧即外侧。
            let cc = mesh.circumcenter(DelaunayMesh::triangle_of_halfedge(he));
            let dx = pb.x - pa.x;
            let dy = pb.y - pa.y;
            let len = dx.hypot(dy).max(1e-12);
            let far = ray_reach(cc, bounds);
            (
                cc,
                Pos::new(cc.x + dy / len * far, cc.y - dx / len * far),
            )
        };

        edges.push(make_edge(kept[sa], kept[sb], segment, bounds));
    }

    edges
}

/// 射线需要延伸多远才保证穿出边界框
fn ray_reach(from: Pos, bounds: Bounds) -> f64 {
    let center = Pos::new(
        (bounds.min_x + bounds.max_x) / 2.0,
        (bounds.min_y + bounds.max_y) / 2.0,
    );
    2.0 * bounds.diagonal() + from.distance(center) + 1.0
}

/// 两站点垂直平分线在边界框附近的一段
fn bisector_segment(pa: Pos, pb: Pos, bounds: Bounds) -> (Pos, Pos) {
    let mid = Pos::new((pa.x + pb.x) / 2.0, (pa.y + pb.y) / 2.0);
    let dx = pb.x - pa.x;
    let dy = pb.y - pa.y;
    let len = dx.hypot(dy).max(1e-12);
    let far = ray_reach(mid, bounds);

    (
        Pos::new(mid.x - dy / len * far, mid.y + dx / len * far),
        Pos::new(mid.x + dy / len * far, mid.y - dx / len * far),
    )
}

/// 组装一条邻接边，把对偶棱裁剪到边界框内
///
/// 对偶棱完全在框外时坐标退化为压回框内的端点，邻接关系本身保留。
fn make_edge(a: u32, b: u32, segment: (Pos, Pos), bounds: Bounds) -> DiagramEdge {
    let (start, end) = bounds
        .clip_segment(segment.0, segment.1)
        .unwrap_or_else(|| (bounds.clamp(segment.0), bounds.clamp(segment.1)));

    DiagramEdge { a, b, start, end }
}

// ============================================================================
// 测试
// ============================================================================
