//! 图访问接口
//!
//! 算法只通过这里的 trait 读取邻接结构和边权，
//! 与底层是邻接表、稠密矩阵还是邻接字典无关。

use crate::error::{check_dimension, Result};
use crate::types::{VertexId, Weight};

/// 邻接结构：按顺序遍历每个顶点的出邻居
pub trait Adjacency {
    /// 顶点数 n，顶点编号为 `0..n`
    fn vertex_count(&self) -> usize;

    /// 出度
    fn degree(&self, u: VertexId) -> usize;

    /// 第 `index` 个出邻居，`index < degree(u)`
    fn neighbor(&self, u: VertexId, index: usize) -> VertexId;

    /// 是否存在弧 (u, v)
    fn has_arc(&self, u: VertexId, v: VertexId) -> bool {
        (0..self.degree(u)).any(|index| self.neighbor(u, index) == v)
    }

    /// 出邻居迭代器
    fn neighbors(&self, u: VertexId) -> Neighbors<'_, Self> {
        Neighbors {
            graph: self,
            vertex: u,
            cursor: 0,
        }
    }

    /// 弧总数
    fn arc_count(&self) -> usize {
        (0..self.vertex_count()).map(|u| self.degree(u)).sum()
    }
}

/// 可追加弧的邻接结构
pub trait AdjacencyMut: Adjacency {
    /// 在 u 的邻居序列末尾追加 v
    fn add_arc(&mut self, u: VertexId, v: VertexId) -> Result<()>;
}

/// 边权 / 容量查询
pub trait EdgeLookup<W> {
    /// 表的维度（顶点数）
    fn dimension(&self) -> usize;

    /// 弧 (u, v) 的权重，不存在返回 `None`
    fn weight(&self, u: VertexId, v: VertexId) -> Option<W>;
}

/// 可写的边权 / 容量表
pub trait EdgeLookupMut<W>: EdgeLookup<W> {
    fn set_weight(&mut self, u: VertexId, v: VertexId, weight: W) -> Result<()>;
}

/// 出邻居迭代器
pub struct Neighbors<'a, G: ?Sized> {
    graph: &'a G,
    vertex: VertexId,
    cursor: usize,
}

impl<'a, G: Adjacency + ?Sized> Iterator for Neighbors<'a, G> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        if self.cursor < self.graph.degree(self.vertex) {
            let v = self.graph.neighbor(self.vertex, self.cursor);
            self.cursor += 1;
            Some(v)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.graph.degree(self.vertex) - self.cursor;
        (rest, Some(rest))
    }
}

/// 为流算法补齐反向弧
///
/// 对每条弧 (u, v)，若 (v, u) 不存在则追加到 v 的邻居末尾并置容量 0。
/// 再次调用不会产生任何改动；自环保持原样。
pub fn add_reverse_arcs<G, C, W>(graph: &mut G, capacity: &mut C) -> Result<usize>
where
    G: AdjacencyMut,
    C: EdgeLookupMut<W>,
    W: Weight,
{
    let n = graph.vertex_count();
    check_dimension(n, capacity.dimension())?;

    let mut added = 0;
    for u in 0..n {
        for index in 0..graph.degree(u) {
            let v = graph.neighbor(u, index);
            if !graph.has_arc(v, u) {
                graph.add_arc(v, u)?;
                capacity.set_weight(v, u, W::ZERO)?;
                added += 1;
            }
        }
    }

    tracing::debug!(vertices = n, added, "补齐反向弧");
    Ok(added)
}
