//! 稠密方阵
//!
//! 行优先存储的 n×n 矩阵，用作稠密边权表、容量表和流量表

use super::access::{EdgeLookup, EdgeLookupMut};
use crate::error::{check_dimension, check_vertex, Result};
use crate::types::{VertexId, Weight};
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// n×n 方阵
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareMatrix<T> {
    n: usize,
    data: Vec<T>,
}

/// 稠密边权表，`None` 表示无边（+∞）
pub type WeightMatrix<W> = SquareMatrix<Option<W>>;

/// 流量矩阵，满足 `flow[(u, v)] == -flow[(v, u)]`
pub type FlowMatrix<W> = SquareMatrix<W>;

impl<T: Clone> SquareMatrix<T> {
    /// 创建所有元素为 `value` 的 n×n 矩阵
    pub fn filled(n: usize, value: T) -> Self {
        Self {
            n,
            data: vec![value; n * n],
        }
    }

    /// 从行向量构造，要求每行长度都等于行数
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for row in rows {
            check_dimension(n, row.len())?;
            data.extend(row);
        }
        Ok(Self { n, data })
    }
}

impl<T> SquareMatrix<T> {
    /// 维度 n
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// 第 u 行
    pub fn row(&self, u: VertexId) -> &[T] {
        &self.data[u * self.n..(u + 1) * self.n]
    }

    /// 转换为行向量
    pub fn into_rows(self) -> Vec<Vec<T>> {
        if self.n == 0 {
            return Vec::new();
        }
        let n = self.n;
        let mut rows = Vec::with_capacity(n);
        let mut data = self.data.into_iter();
        for _ in 0..n {
            rows.push(data.by_ref().take(n).collect());
        }
        rows
    }
}

impl<W: Weight> SquareMatrix<Option<W>> {
    /// 无边的 n×n 权重表，对角线为 0
    pub fn with_zero_diagonal(n: usize) -> Self {
        let mut matrix = Self::filled(n, None);
        for v in 0..n {
            matrix[(v, v)] = Some(W::ZERO);
        }
        matrix
    }
}

impl<W: Weight> SquareMatrix<W> {
    /// 第 u 行元素之和（流量矩阵中即 u 的净流出量）
    pub fn row_sum(&self, u: VertexId) -> W {
        self.row(u).iter().fold(W::ZERO, |acc, &x| acc + x)
    }
}

impl<T> Index<(VertexId, VertexId)> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, (u, v): (VertexId, VertexId)) -> &T {
        debug_assert!(u < self.n && v < self.n);
        &self.data[u * self.n + v]
    }
}

impl<T> IndexMut<(VertexId, VertexId)> for SquareMatrix<T> {
    fn index_mut(&mut self, (u, v): (VertexId, VertexId)) -> &mut T {
        debug_assert!(u < self.n && v < self.n);
        &mut self.data[u * self.n + v]
    }
}

impl<W: Weight> EdgeLookup<W> for SquareMatrix<Option<W>> {
    fn dimension(&self) -> usize {
        self.n
    }

    fn weight(&self, u: VertexId, v: VertexId) -> Option<W> {
        self[(u, v)]
    }
}

impl<W: Weight> EdgeLookupMut<W> for SquareMatrix<Option<W>> {
    fn set_weight(&mut self, u: VertexId, v: VertexId, weight: W) -> Result<()> {
        check_vertex(u, self.n)?;
        check_vertex(v, self.n)?;
        self[(u, v)] = Some(weight);
        Ok(())
    }
}
