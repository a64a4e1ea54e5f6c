//! 半边视图 (Half-Edge)
//!
//! 对 `delaunator` 三角剖分结果的轻量包装，提供提取邻接边所需的拓扑查询：
//! - `triangles[i]` = 半边 i 的起点
//! - `halfedges[i]` = 半边 i 的对偶半边（twin）
//! - 三角形 t 的三条半边索引为 `3*t`, `3*t+1`, `3*t+2`
//!
//! 每条 Delaunay 边对应一对 twin 半边（凸包边界上只有一条），
//! 边的两个端点站点正是 Voronoi 图中共享一条棱的两个站点。

use crate::geometry::Pos;

/// 无效索引标记（对应 delaunator::EMPTY）
pub const EMPTY: u32 = u32::MAX;

/// Delaunay 网格（半边表示）
#[derive(Debug, Clone)]
pub struct DelaunayMesh {
    /// 参与剖分的站点坐标
    pub points: Vec<Pos>,

    /// 三角形顶点索引：triangles[i] 是半边 i 的起点
    /// 每3个连续索引构成一个三角形
    pub triangles: Vec<u32>,

    /// 半边数组：halfedges[i] 存储半边 i 的对偶半边索引
    /// 如果 halfedges[i] == EMPTY，则半边 i 在凸包边界上
    pub halfedges: Vec<u32>,

    /// 凸包顶点索引（逆时针顺序）
    pub hull: Vec<u32>,
}

impl DelaunayMesh {
    /// 从 delaunator 结果构建半边视图
    pub fn from_delaunator(points: Vec<Pos>, triangulation: &delaunator::Triangulation) -> Self {
        let triangles: Vec<u32> = triangulation.triangles.iter().map(|&i| i as u32).collect();

        let halfedges: Vec<u32> = triangulation
            .halfedges
            .iter()
            .map(|&i| if i == delaunator::EMPTY { EMPTY } else { i as u32 })
            .collect();

        let hull: Vec<u32> = triangulation.hull.iter().map(|&i| i as u32).collect();

        Self {
            points,
            triangles,
            halfedges,
            hull,
        }
    }

    // ========================================================================
    // 基本查询
    // ========================================================================

    /// 获取三角形数量
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// 获取半边数量
    #[inline]
    pub fn halfedge_count(&self) -> usize {
        self.triangles.len()
    }

    /// 获取半边的起点索引
    #[inline]
    pub fn halfedge_start(&self, he: u32) -> u32 {
        self.triangles[he as usize]
    }

    /// 获取半边的终点索引
    #[inline]
    pub fn halfedge_end(&self, he: u32) -> u32 {
        self.triangles[Self::next_halfedge(he) as usize]
    }

    /// 获取半边的对偶半边
    #[inline]
    pub fn twin(&self, he: u32) -> u32 {
        self.halfedges[he as usize]
    }

    /// 获取同一三角形内的下一条半边（逆时针）
    #[inline]
    pub fn next_halfedge(he: u32) -> u32 {
        if he % 3 == 2 {
            he - 2
        } else {
            he + 1
        }
    }

    /// 获取半边所属的三角形索引
    #[inline]
    pub fn triangle_of_halfedge(he: u32) -> u32 {
        he / 3
    }

    /// 检查半边是否在凸包边界上
    #[inline]
    pub fn is_boundary(&self, he: u32) -> bool {
        self.halfedges[he as usize] == EMPTY
    }

    // ========================================================================
    // 三角形操作
    // ========================================================================

    /// 获取三角形的三个顶点索引
    pub fn triangle_vertices(&self, tri: u32) -> [u32; 3] {
        let base = (tri * 3) as usize;
        [
            self.triangles[base],
            self.triangles[base + 1],
            self.triangles[base + 2],
        ]
    }

    /// 获取三角形的三个顶点坐标
    pub fn triangle_points(&self, tri: u32) -> [Pos; 3] {
        let [i, j, k] = self.triangle_vertices(tri);
        [
            self.points[i as usize],
            self.points[j as usize],
            self.points[k as usize],
        ]
    }

    /// 计算三角形的外心（Voronoi 顶点）
    pub fn circumcenter(&self, tri: u32) -> Pos {
        let [a, b, c] = self.triangle_points(tri);
        compute_circumcenter(a, b, c)
    }
}

// ============================================================================
// 辅助函数
// ============================================================================

/// 计算三角形的外心
///
/// 外心是三角形外接圆的圆心，到三个顶点的距离相等。
fn compute_circumcenter(a: Pos, b: Pos, c: Pos) -> Pos {
    // 边的中点
    let ab_mid = Pos::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
    let bc_mid = Pos::new((b.x + c.x) / 2.0, (b.y + c.y) / 2.0);

    // 边的法线方向（垂直于边）
    let ab_normal = Pos::new(-(b.y - a.y), b.x - a.x);
    let bc_normal = Pos::new(-(c.y - b.y), c.x - b.x);

    // 检查是否退化（两条法线平行）
    let det = ab_normal.x * bc_normal.y - ab_normal.y * bc_normal.x;
    if det.abs() < 1e-12 {
        // 退化三角形，返回重心
        return Pos::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0);
    }

    // 求解 ab_mid + t * ab_normal = bc_mid + s * bc_normal
    let t = ((bc_mid.x - ab_mid.x) * bc_normal.y - (bc_mid.y - ab_mid.y) * bc_normal.x) / det;

    Pos::new(ab_mid.x + t * ab_normal.x, ab_mid.y + t * ab_normal.y)
}

// ============================================================================
// 测试
// ============================================================================
