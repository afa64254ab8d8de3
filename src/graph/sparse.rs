//! 邻接字典
//!
//! 每个顶点保存 "邻居 -> 权重" 的有序映射，适合大而稀疏的图。
//! 同一个结构既是邻接结构，也是边权表。

use super::access::{Adjacency, AdjacencyMut, EdgeLookup, EdgeLookupMut};
use super::graph::Graph;
use super::matrix::WeightMatrix;
use crate::error::{check_dimension, check_vertex, Error, Result};
use crate::types::{VertexId, Weight};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 带权邻接字典
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparseWeights<W> {
    rows: Vec<IndexMap<VertexId, W>>,
}

impl<W: Weight> SparseWeights<W> {
    /// 创建含 n 个孤立顶点的字典
    pub fn new(vertex_count: usize) -> Self {
        Self {
            rows: vec![IndexMap::new(); vertex_count],
        }
    }

    /// 由邻接表和边权表构造，邻居顺序与邻接表一致
    pub fn from_graph_weights<T>(graph: &Graph, weights: &T) -> Result<Self>
    where
        T: EdgeLookup<W>,
    {
        let n = graph.vertex_count();
        check_dimension(n, weights.dimension())?;

        let mut sparse = Self::new(n);
        for u in 0..n {
            for v in graph.neighbors(u) {
                let w = weights
                    .weight(u, v)
                    .ok_or(Error::MissingWeight(u, v))?;
                sparse.rows[u].insert(v, w);
            }
        }
        Ok(sparse)
    }

    /// 拆分为邻接表和稠密边权表
    pub fn to_graph_weights(&self) -> (Graph, WeightMatrix<W>) {
        let n = self.rows.len();
        let mut graph = Graph::new(n);
        let mut weights = WeightMatrix::filled(n, None);
        for (u, row) in self.rows.iter().enumerate() {
            for (&v, &w) in row {
                graph.push_arc(u, v);
                weights[(u, v)] = Some(w);
            }
        }
        (graph, weights)
    }

    /// 插入或覆盖弧 (u, v) 的权重
    pub fn insert(&mut self, u: VertexId, v: VertexId, weight: W) -> Result<()> {
        let n = self.rows.len();
        check_vertex(u, n)?;
        check_vertex(v, n)?;
        self.rows[u].insert(v, weight);
        Ok(())
    }

    /// 为流算法补齐反向弧（容量 0），幂等
    pub fn add_reverse_arcs(&mut self) -> usize {
        let mut added = 0;
        for u in 0..self.rows.len() {
            for index in 0..self.rows[u].len() {
                let Some((&v, _)) = self.rows[u].get_index(index) else {
                    continue;
                };
                if !self.rows[v].contains_key(&u) {
                    self.rows[v].insert(u, W::ZERO);
                    added += 1;
                }
            }
        }
        tracing::debug!(vertices = self.rows.len(), added, "补齐反向弧");
        added
    }
}

impl<W> Adjacency for SparseWeights<W> {
    fn vertex_count(&self) -> usize {
        self.rows.len()
    }

    fn degree(&self, u: VertexId) -> usize {
        self.rows[u].len()
    }

    fn neighbor(&self, u: VertexId, index: usize) -> VertexId {
        self.rows[u]
            .get_index(index)
            .map(|(&v, _)| v)
            .expect("邻居下标越界")
    }

    fn has_arc(&self, u: VertexId, v: VertexId) -> bool {
        self.rows[u].contains_key(&v)
    }
}

impl<W: Weight> AdjacencyMut for SparseWeights<W> {
    /// 追加一条权重为 0 的弧，已存在则不变
    fn add_arc(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        let n = self.rows.len();
        check_vertex(u, n)?;
        check_vertex(v, n)?;
        self.rows[u].entry(v).or_insert(W::ZERO);
        Ok(())
    }
}

impl<W: Weight> EdgeLookup<W> for SparseWeights<W> {
    fn dimension(&self) -> usize {
        self.rows.len()
    }

    fn weight(&self, u: VertexId, v: VertexId) -> Option<W> {
        self.rows[u].get(&v).copied()
    }
}

impl<W: Weight> EdgeLookupMut<W> for SparseWeights<W> {
    fn set_weight(&mut self, u: VertexId, v: VertexId, weight: W) -> Result<()> {
        self.insert(u, v, weight)
    }
}
