//! 搜索前沿
//!
//! - [`FifoQueue`]：双栈实现的先进先出队列，用于广度优先搜索
//! - [`DistanceFrontier`]：按暂定距离取最小顶点的优先队列接口，
//!   有惰性重插入堆 [`LazyHeap`] 和带更新键的堆 [`IndexedHeap`] 两种实现

use crate::types::{VertexId, Weight};
use priority_queue::PriorityQueue;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// 双栈 FIFO 队列
///
/// 入队压入尾栈；出队时若头栈为空，把尾栈整体倒入头栈。
/// 所有操作均摊 O(1)。
#[derive(Debug, Clone)]
pub struct FifoQueue<T> {
    in_stack: Vec<T>,
    out_stack: Vec<T>,
}

impl<T> FifoQueue<T> {
    pub fn new() -> Self {
        Self {
            in_stack: Vec::new(),
            out_stack: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.in_stack.len() + self.out_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.in_stack.is_empty() && self.out_stack.is_empty()
    }

    pub fn push(&mut self, item: T) {
        self.in_stack.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.out_stack.is_empty() {
            // 头栈为空，翻转尾栈
            self.out_stack.extend(self.in_stack.drain(..).rev());
        }
        self.out_stack.pop()
    }

    /// 按出队顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.out_stack.iter().rev().chain(self.in_stack.iter())
    }
}

impl<T> Default for FifoQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// 前沿策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontierKind {
    /// 惰性堆：重复插入，出堆时跳过已定型顶点
    #[default]
    Lazy,
    /// 更新键堆：原地降低已有元素的优先级
    DecreaseKey,
}

/// Dijkstra 的前沿接口
///
/// `pop_min` 保证每个顶点至多被取出一次，取出即定型。
pub trait DistanceFrontier<W: Weight> {
    /// 为 n 个顶点创建空前沿
    fn with_vertices(vertex_count: usize) -> Self;

    /// 以暂定距离 `dist` 插入 v，或把已在前沿中的 v 的距离降为 `dist`
    fn offer(&mut self, v: VertexId, dist: W);

    /// 取出暂定距离最小且尚未定型的顶点
    fn pop_min(&mut self) -> Option<(VertexId, W)>;

    fn is_empty(&self) -> bool;
}

/// 惰性重插入堆
///
/// 同一顶点可能有多个 (距离, 顶点) 条目；出堆时已定型的条目直接丢弃。
#[derive(Debug, Clone)]
pub struct LazyHeap<W: Weight> {
    heap: BinaryHeap<Reverse<(W, VertexId)>>,
    finalized: Vec<bool>,
}

impl<W: Weight> DistanceFrontier<W> for LazyHeap<W> {
    fn with_vertices(vertex_count: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            finalized: vec![false; vertex_count],
        }
    }

    fn offer(&mut self, v: VertexId, dist: W) {
        self.heap.push(Reverse((dist, v)));
    }

    fn pop_min(&mut self) -> Option<(VertexId, W)> {
        while let Some(Reverse((dist, v))) = self.heap.pop() {
            if !self.finalized[v] {
                self.finalized[v] = true;
                return Some((v, dist));
            }
        }
        None
    }

    fn is_empty(&self) -> bool {
        // 残留条目可能全是过期的，这里只反映堆本身
        self.heap.is_empty()
    }
}

/// 带更新键的堆
///
/// 每个顶点在堆中至多一个条目，降距离时原地调整位置。
#[derive(Debug, Clone)]
pub struct IndexedHeap<W: Weight> {
    queue: PriorityQueue<VertexId, Reverse<(W, VertexId)>>,
}

impl<W: Weight> DistanceFrontier<W> for IndexedHeap<W> {
    fn with_vertices(vertex_count: usize) -> Self {
        Self {
            queue: PriorityQueue::with_capacity(vertex_count),
        }
    }

    fn offer(&mut self, v: VertexId, dist: W) {
        // 已存在时 push 只更新优先级
        self.queue.push(v, Reverse((dist, v)));
    }

    fn pop_min(&mut self) -> Option<(VertexId, W)> {
        self.queue
            .pop()
            .map(|(v, Reverse((dist, _)))| (v, dist))
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = FifoQueue::new();
        queue.push(1);
        queue.push(2);
        assert_eq!(queue.pop(), Some(1));
        queue.push(3);
        queue.push(4);

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(queue.pop(), Some(2));
        assert_eq!(queue.pop(), Some(3));
        assert_eq!(queue.pop(), Some(4));
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
    }

    fn drain<F: DistanceFrontier<u32>>(mut frontier: F) -> Vec<(VertexId, u32)> {
        let mut out = Vec::new();
        while let Some(item) = frontier.pop_min() {
            out.push(item);
        }
        out
    }

    #[test]
    fn test_lazy_heap_skips_stale() {
        let mut heap = LazyHeap::with_vertices(3);
        heap.offer(0, 10);
        heap.offer(1, 5);
        heap.offer(0, 3);

        // 顶点 0 的旧条目 10 被丢弃
        assert_eq!(drain(heap), vec![(0, 3), (1, 5)]);
    }

    #[test]
    fn test_indexed_heap_decrease_key() {
        let mut heap = IndexedHeap::with_vertices(3);
        heap.offer(0, 10);
        heap.offer(1, 5);
        heap.offer(2, 7);
        heap.offer(0, 3);

        assert_eq!(drain(heap), vec![(0, 3), (1, 5), (2, 7)]);
    }

    #[test]
    fn test_ties_break_by_vertex() {
        let mut lazy = LazyHeap::with_vertices(3);
        let mut indexed = IndexedHeap::with_vertices(3);
        for v in [2, 0, 1] {
            lazy.offer(v, 4);
            indexed.offer(v, 4);
        }

        assert_eq!(drain(lazy), drain(indexed));
    }

    #[test]
    fn test_frontier_kind_serde() {
        let kind: FrontierKind = serde_json::from_str("\"decrease_key\"").unwrap();
        assert_eq!(kind, FrontierKind::DecreaseKey);
        assert_eq!(FrontierKind::default(), FrontierKind::Lazy);
    }
}
