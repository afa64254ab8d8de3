//! 邻接表
//!
//! 顶点数在构造时确定，每个顶点保存有序的出邻居序列

use super::access::{Adjacency, AdjacencyMut, EdgeLookup};
use crate::error::{check_vertex, Result};
use crate::types::VertexId;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// 单个顶点的出邻居，小度数时不分配堆内存
type Row = SmallVec<[VertexId; 4]>;

/// 有向图（邻接表）
///
/// 无向图用对称的有向弧表示，见 [`Graph::add_edge`]。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    rows: Vec<Row>,
}

impl Graph {
    /// 创建含 n 个孤立顶点的图
    pub fn new(vertex_count: usize) -> Self {
        Self {
            rows: vec![Row::new(); vertex_count],
        }
    }

    /// 从邻接表构造，校验所有邻居编号都在 `[0, n)` 内
    pub fn from_rows<R>(rows: Vec<R>) -> Result<Self>
    where
        R: AsRef<[VertexId]>,
    {
        let n = rows.len();
        let mut graph = Self::new(n);
        for (u, row) in rows.iter().enumerate() {
            for &v in row.as_ref() {
                graph.add_arc(u, v)?;
            }
        }
        Ok(graph)
    }

    /// 由边权表导出图：表中有值的位置即为一条弧
    ///
    /// 对角线上的值不产生自环。
    pub fn from_weights<W, T>(weights: &T) -> Self
    where
        T: EdgeLookup<W>,
    {
        let n = weights.dimension();
        let mut graph = Self::new(n);
        for u in 0..n {
            for v in 0..n {
                if u != v && weights.weight(u, v).is_some() {
                    graph.push_arc(u, v);
                }
            }
        }
        graph
    }

    /// 添加无向边（两条对称弧）
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        self.add_arc(u, v)?;
        if u != v {
            self.add_arc(v, u)?;
        }
        Ok(())
    }

    /// 追加弧，调用方保证编号合法
    pub(crate) fn push_arc(&mut self, u: VertexId, v: VertexId) {
        self.rows[u].push(v);
    }

    /// 顶点 u 的出邻居切片
    pub fn row(&self, u: VertexId) -> &[VertexId] {
        &self.rows[u]
    }
}

impl Adjacency for Graph {
    fn vertex_count(&self) -> usize {
        self.rows.len()
    }

    fn degree(&self, u: VertexId) -> usize {
        self.rows[u].len()
    }

    fn neighbor(&self, u: VertexId, index: usize) -> VertexId {
        self.rows[u][index]
    }

    fn has_arc(&self, u: VertexId, v: VertexId) -> bool {
        self.rows[u].contains(&v)
    }
}

impl AdjacencyMut for Graph {
    fn add_arc(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        let n = self.rows.len();
        check_vertex(u, n)?;
        check_vertex(v, n)?;
        self.rows[u].push(v);
        Ok(())
    }
}
