//! 单源最短路径
//!
//! 广度优先搜索（单位权）、0/1 权图上的双端队列 BFS，以及两种 Dijkstra：
//! 惰性重插入堆和更新键堆。所有算法返回距离表和前驱表。
//!
//! 顶点状态：未见（距离 +∞）-> 前沿（暂定距离）-> 定型（距离确定，不再访问）。
//!
//! 距离与权重同类型。某顶点的最短距离超出该类型范围时返回
//! [`Error::DistanceOverflow`]，不会回绕。

use super::frontier::{DistanceFrontier, FifoQueue, FrontierKind, IndexedHeap, LazyHeap};
use crate::error::{check_dimension, check_vertex, Error, Result};
use crate::graph::{extract_path, Adjacency, EdgeLookup};
use crate::types::{VertexId, Weight};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, trace};

/// 最短路径搜索配置
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// 目标顶点定型后立即停止
    pub target: Option<VertexId>,
    /// Dijkstra 使用的前沿策略
    pub frontier: FrontierKind,
}

impl SearchConfig {
    /// 设置提前终止的目标顶点
    pub fn with_target(mut self, target: VertexId) -> Self {
        self.target = Some(target);
        self
    }

    /// 设置前沿策略
    pub fn with_frontier(mut self, frontier: FrontierKind) -> Self {
        self.frontier = frontier;
        self
    }
}

/// 单源最短路径结果
///
/// `dist[v] == None` 表示不可达（+∞）；源点和不可达顶点的前驱为 `None`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPaths<W> {
    pub dist: Vec<Option<W>>,
    pub prec: Vec<Option<VertexId>>,
}

impl<W: Copy> ShortestPaths<W> {
    fn new(vertex_count: usize, source: VertexId, zero: W) -> Self {
        let mut dist = vec![None; vertex_count];
        dist[source] = Some(zero);
        Self {
            dist,
            prec: vec![None; vertex_count],
        }
    }

    /// 源点到 v 的距离
    pub fn distance(&self, v: VertexId) -> Option<W> {
        self.dist.get(v).copied().flatten()
    }

    /// v 在最短路径树上的前驱
    pub fn predecessor(&self, v: VertexId) -> Option<VertexId> {
        self.prec.get(v).copied().flatten()
    }

    pub fn is_reachable(&self, v: VertexId) -> bool {
        self.distance(v).is_some()
    }

    /// 已到达（距离有限）的顶点数
    pub fn reached(&self) -> usize {
        self.dist.iter().filter(|d| d.is_some()).count()
    }

    /// 源点到 v 的最短路径，不可达返回 `None`
    pub fn path_to(&self, v: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reachable(v) {
            return None;
        }
        extract_path(&self.prec, v).ok()
    }
}

/// 广度优先搜索：单位权最短路径
///
/// 复杂度 O(|V| + |E|)
pub fn bfs<G: Adjacency>(graph: &G, source: VertexId) -> Result<ShortestPaths<usize>> {
    let n = graph.vertex_count();
    check_vertex(source, n)?;

    let mut paths = ShortestPaths::new(n, source, 0);
    let mut to_visit = FifoQueue::new();
    to_visit.push(source);

    while let Some(node) = to_visit.pop() {
        let next = paths.dist[node].map(|d| d + 1);
        for neighbor in graph.neighbors(node) {
            if paths.dist[neighbor].is_none() {
                paths.dist[neighbor] = next;
                paths.prec[neighbor] = Some(node);
                to_visit.push(neighbor);
            }
        }
    }

    debug!(source, reached = paths.reached(), "BFS 完成");
    Ok(paths)
}

/// 0/1 权图最短路径
///
/// 0 权邻居压入队首、1 权邻居压入队尾，保证同层顶点先于下一层处理。
/// 给定 `target` 时，目标定型即停止。复杂度 O(|V| + |E|)
pub fn dist01<G, T, W>(
    graph: &G,
    weights: &T,
    source: VertexId,
    target: Option<VertexId>,
) -> Result<ShortestPaths<W>>
where
    G: Adjacency,
    T: EdgeLookup<W>,
    W: Weight,
{
    let n = check_inputs(graph, weights.dimension(), source, target)?;
    for u in 0..n {
        for v in graph.neighbors(u) {
            let w: W = arc_weight(weights, u, v)?;
            if w != W::ZERO && w != W::ONE {
                return Err(Error::NonBinaryWeight(u, v));
            }
        }
    }

    let mut paths = ShortestPaths::new(n, source, W::ZERO);
    let mut finalized = vec![false; n];
    let mut overflowed = Vec::new();
    let mut stopped = false;
    let mut gray = VecDeque::from([source]);

    while let Some(node) = gray.pop_front() {
        if finalized[node] {
            continue;
        }
        finalized[node] = true;
        if Some(node) == target {
            stopped = true;
            break;
        }
        let Some(dist_node) = paths.dist[node] else {
            continue;
        };

        for neighbor in graph.neighbors(node) {
            let w: W = arc_weight(weights, node, neighbor)?;
            let Some(ell) = dist_node.checked_add(w) else {
                overflowed.push((node, neighbor));
                continue;
            };
            if finalized[neighbor] || paths.dist[neighbor].is_some_and(|d| d <= ell) {
                continue;
            }
            paths.dist[neighbor] = Some(ell);
            paths.prec[neighbor] = Some(node);
            if w == W::ZERO {
                gray.push_front(neighbor);
            } else {
                gray.push_back(neighbor);
            }
        }
    }

    if !stopped {
        check_overflow(&paths, &overflowed)?;
    }
    debug!(source, ?target, reached = paths.reached(), "0/1 BFS 完成");
    Ok(paths)
}

/// Dijkstra（惰性重插入堆）
///
/// 要求所有权重非负。复杂度 O((|V| + |E|) log |V|)
pub fn dijkstra<G, T, W>(
    graph: &G,
    weights: &T,
    source: VertexId,
    target: Option<VertexId>,
) -> Result<ShortestPaths<W>>
where
    G: Adjacency,
    T: EdgeLookup<W>,
    W: Weight,
{
    dijkstra_with::<LazyHeap<W>, _, _, _>(graph, weights, source, target)
}

/// Dijkstra（更新键堆）
///
/// 结果与 [`dijkstra`] 完全一致，区别只在于堆中每个顶点至多一个条目。
pub fn dijkstra_update_heap<G, T, W>(
    graph: &G,
    weights: &T,
    source: VertexId,
    target: Option<VertexId>,
) -> Result<ShortestPaths<W>>
where
    G: Adjacency,
    T: EdgeLookup<W>,
    W: Weight,
{
    dijkstra_with::<IndexedHeap<W>, _, _, _>(graph, weights, source, target)
}

/// 按配置选择前沿策略执行 Dijkstra
pub fn shortest_paths<G, T, W>(
    graph: &G,
    weights: &T,
    source: VertexId,
    config: &SearchConfig,
) -> Result<ShortestPaths<W>>
where
    G: Adjacency,
    T: EdgeLookup<W>,
    W: Weight,
{
    match config.frontier {
        FrontierKind::Lazy => dijkstra(graph, weights, source, config.target),
        FrontierKind::DecreaseKey => dijkstra_update_heap(graph, weights, source, config.target),
    }
}

/// 以任意前沿实现执行 Dijkstra
pub fn dijkstra_with<F, G, T, W>(
    graph: &G,
    weights: &T,
    source: VertexId,
    target: Option<VertexId>,
) -> Result<ShortestPaths<W>>
where
    F: DistanceFrontier<W>,
    G: Adjacency,
    T: EdgeLookup<W>,
    W: Weight,
{
    let n = check_inputs(graph, weights.dimension(), source, target)?;
    for u in 0..n {
        for v in graph.neighbors(u) {
            let w: W = arc_weight(weights, u, v)?;
            if w.is_negative() {
                return Err(Error::NegativeWeight(u, v));
            }
        }
    }

    let mut paths = ShortestPaths::new(n, source, W::ZERO);
    let mut overflowed = Vec::new();
    let mut stopped = false;
    let mut frontier = F::with_vertices(n);
    frontier.offer(source, W::ZERO);

    while let Some((node, dist_node)) = frontier.pop_min() {
        trace!(node, ?dist_node, "顶点定型");
        if Some(node) == target {
            stopped = true;
            break;
        }
        for neighbor in graph.neighbors(node) {
            let w: W = arc_weight(weights, node, neighbor)?;
            let Some(candidate) = dist_node.checked_add(w) else {
                overflowed.push((node, neighbor));
                continue;
            };
            if paths.dist[neighbor].map_or(true, |d| candidate < d) {
                paths.dist[neighbor] = Some(candidate);
                paths.prec[neighbor] = Some(node);
                frontier.offer(neighbor, candidate);
            }
        }
    }

    if !stopped {
        check_overflow(&paths, &overflowed)?;
    }
    debug!(source, ?target, reached = paths.reached(), "Dijkstra 完成");
    Ok(paths)
}

/// 校验源点、目标和边权表维度，返回顶点数
fn check_inputs<G: Adjacency>(
    graph: &G,
    dimension: usize,
    source: VertexId,
    target: Option<VertexId>,
) -> Result<usize> {
    let n = graph.vertex_count();
    check_dimension(n, dimension)?;
    check_vertex(source, n)?;
    if let Some(t) = target {
        check_vertex(t, n)?;
    }
    Ok(n)
}

/// 溢出的候选距离大于任何可表示的距离，只有当顶点最终仍没有有限距离时，
/// 才说明它的最短距离确实超出范围
fn check_overflow<W>(paths: &ShortestPaths<W>, overflowed: &[(VertexId, VertexId)]) -> Result<()> {
    match overflowed.iter().find(|&&(_, v)| paths.dist[v].is_none()) {
        Some(&(u, v)) => Err(Error::DistanceOverflow(u, v)),
        None => Ok(()),
    }
}

fn arc_weight<T, W>(weights: &T, u: VertexId, v: VertexId) -> Result<W>
where
    T: EdgeLookup<W>,
{
    weights.weight(u, v).ok_or(Error::MissingWeight(u, v))
}
