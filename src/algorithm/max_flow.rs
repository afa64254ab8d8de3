//! 最大流算法
//!
//! 实现 Ford-Fulkerson（深度优先寻找增广路）。
//! 复杂度 O(|V| * |E| * 最大流值)，与容量大小相关而非仅与图规模相关；
//! 增广路的选取顺序由邻居顺序决定，不换成 BFS（Edmonds-Karp）。
//!
//! 流量矩阵反对称，容量类型必须是有符号整数（[`SignedWeight`]）。

use crate::error::{check_dimension, check_vertex, Error, Result};
use crate::graph::{
    add_reverse_arcs, Adjacency, AdjacencyMut, EdgeLookup, EdgeLookupMut, FlowMatrix,
    SparseWeights,
};
use crate::types::{SignedWeight, VertexId, Weight};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, trace};

/// 最大流结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxFlow<W> {
    /// 最大流量值（源点净流出量）
    pub value: W,
    /// 流量矩阵，满足 `flow[(u, v)] == -flow[(v, u)]`
    pub flow: FlowMatrix<W>,
    /// 最小割的源侧顶点集（升序）
    pub source_side: Vec<VertexId>,
}

impl<W: SignedWeight> MaxFlow<W> {
    /// 最小割：从源侧指向汇侧、容量为正的弧
    pub fn min_cut<G, C>(&self, graph: &G, capacity: &C) -> Vec<(VertexId, VertexId, W)>
    where
        G: Adjacency,
        C: EdgeLookup<W>,
    {
        let n = graph.vertex_count();
        let mut in_source_side = vec![false; n];
        for &v in &self.source_side {
            in_source_side[v] = true;
        }

        let mut cut = Vec::new();
        for &u in &self.source_side {
            for v in graph.neighbors(u) {
                if in_source_side[v] {
                    continue;
                }
                if let Some(c) = capacity.weight(u, v).filter(|&c| c > W::ZERO) {
                    cut.push((u, v, c));
                }
            }
        }
        cut
    }

    /// 饱和弧：流量等于容量的正容量弧，即限制流量的瓶颈
    pub fn saturated_arcs<G, C>(&self, graph: &G, capacity: &C) -> Vec<(VertexId, VertexId, W)>
    where
        G: Adjacency,
        C: EdgeLookup<W>,
    {
        let mut arcs = Vec::new();
        for u in 0..graph.vertex_count() {
            for v in graph.neighbors(u) {
                if let Some(c) = capacity.weight(u, v) {
                    if c > W::ZERO && self.flow[(u, v)] == c {
                        arcs.push((u, v, c));
                    }
                }
            }
        }
        arcs
    }
}

/// 计算从 source 到 target 的最大流
///
/// 先为每条弧补齐容量为 0 的反向弧，这会修改调用方的 `graph` 和 `capacity`。
/// 输入校验失败时两者保持原样。
///
/// 无符号容量在编译期被拒绝：
///
/// ```compile_fail
/// use graphkit::{ford_fulkerson, AdjacencyMut, Graph, WeightMatrix};
///
/// let mut graph = Graph::new(2);
/// graph.add_arc(0, 1).unwrap();
/// let mut capacity: WeightMatrix<u32> = WeightMatrix::filled(2, None);
/// capacity[(0, 1)] = Some(5);
/// ford_fulkerson(&mut graph, &mut capacity, 0, 1).unwrap();
/// ```
pub fn ford_fulkerson<G, C, W>(
    graph: &mut G,
    capacity: &mut C,
    source: VertexId,
    target: VertexId,
) -> Result<MaxFlow<W>>
where
    G: AdjacencyMut,
    C: EdgeLookupMut<W>,
    W: SignedWeight,
{
    let n = graph.vertex_count();
    check_dimension(n, capacity.dimension())?;
    check_vertex(source, n)?;
    check_vertex(target, n)?;
    check_capacities::<G, C, W>(&*graph, &*capacity)?;

    add_reverse_arcs::<G, C, W>(graph, capacity)?;
    run(&*graph, &*capacity, source, target)
}

/// 在邻接字典表示的网络上计算最大流，网络同时充当邻接结构和容量表
pub fn ford_fulkerson_sparse<W: SignedWeight>(
    network: &mut SparseWeights<W>,
    source: VertexId,
    target: VertexId,
) -> Result<MaxFlow<W>> {
    let n = network.vertex_count();
    check_vertex(source, n)?;
    check_vertex(target, n)?;
    check_capacities::<_, _, W>(&*network, &*network)?;

    network.add_reverse_arcs();
    run(&*network, &*network, source, target)
}

/// 增广搜索栈帧
struct Frame<W> {
    vertex: VertexId,
    cursor: usize,
    /// 到达本顶点的路径上的最小残余容量，`None` 表示 +∞
    bound: Option<W>,
}

/// 增广路搜索状态，跨轮复用访问标记和栈
struct Augmenter<'a, G, C, W> {
    graph: &'a G,
    capacity: &'a C,
    source: VertexId,
    target: VertexId,
    /// visited[v] 记录最后一次访问 v 的轮次
    visited: Vec<usize>,
    stack: Vec<Frame<W>>,
    round: usize,
}

impl<'a, G, C, W> Augmenter<'a, G, C, W>
where
    G: Adjacency,
    C: EdgeLookup<W>,
    W: SignedWeight,
{
    fn new(graph: &'a G, capacity: &'a C, source: VertexId, target: VertexId) -> Self {
        Self {
            graph,
            capacity,
            source,
            target,
            visited: vec![usize::MAX; graph.vertex_count()],
            stack: Vec::new(),
            round: 0,
        }
    }

    /// 深度优先寻找一条残余容量为正的 source -> target 路径，
    /// 找到则沿路增广并返回增量
    fn augment(&mut self, flow: &mut FlowMatrix<W>) -> Result<Option<W>> {
        self.round += 1;
        let round = self.round;

        self.stack.clear();
        self.visited[self.source] = round;
        self.stack.push(Frame {
            vertex: self.source,
            cursor: 0,
            bound: None,
        });

        while let Some(frame) = self.stack.last_mut() {
            let u = frame.vertex;
            if u == self.target {
                let Some(delta) = frame.bound else {
                    return Ok(None);
                };
                // 栈上相邻两帧即路径上的一条弧
                for arc in self.stack.windows(2) {
                    let (a, b) = (arc[0].vertex, arc[1].vertex);
                    flow[(a, b)] = flow[(a, b)] + delta;
                    flow[(b, a)] = flow[(b, a)] - delta;
                }
                return Ok(Some(delta));
            }

            if frame.cursor == self.graph.degree(u) {
                self.stack.pop();
                continue;
            }
            let v = self.graph.neighbor(u, frame.cursor);
            frame.cursor += 1;
            if self.visited[v] == round {
                continue;
            }

            let c = self
                .capacity
                .weight(u, v)
                .ok_or(Error::MissingWeight(u, v))?;
            // 反向流量为负时残余容量可能超出类型上界，饱和后不影响取最小值
            let residual = c.saturating_sub(flow[(u, v)]);
            if residual > W::ZERO {
                let bound = Some(frame.bound.map_or(residual, |b| b.min(residual)));
                self.visited[v] = round;
                self.stack.push(Frame {
                    vertex: v,
                    cursor: 0,
                    bound,
                });
            }
        }
        Ok(None)
    }
}

/// 每条弧都要有非负容量
fn check_capacities<G, C, W>(graph: &G, capacity: &C) -> Result<()>
where
    G: Adjacency,
    C: EdgeLookup<W>,
    W: Weight,
{
    for u in 0..graph.vertex_count() {
        for v in graph.neighbors(u) {
            let c = capacity.weight(u, v).ok_or(Error::MissingWeight(u, v))?;
            if c.is_negative() {
                return Err(Error::NegativeCapacity(u, v));
            }
        }
    }
    Ok(())
}

fn run<G, C, W>(graph: &G, capacity: &C, source: VertexId, target: VertexId) -> Result<MaxFlow<W>>
where
    G: Adjacency,
    C: EdgeLookup<W>,
    W: SignedWeight,
{
    let n = graph.vertex_count();
    let mut flow = FlowMatrix::filled(n, W::ZERO);
    let mut rounds = 0;
    if source != target {
        let mut augmenter = Augmenter::new(graph, capacity, source, target);
        while let Some(delta) = augmenter.augment(&mut flow)? {
            rounds += 1;
            trace!(round = rounds, ?delta, "找到增广路");
        }
    }

    let value = flow
        .row(source)
        .iter()
        .try_fold(W::ZERO, |acc, &f| acc.checked_add(f))
        .ok_or(Error::FlowOverflow(source))?;
    let source_side = residual_reachable(graph, capacity, &flow, source)?;
    debug!(source, target, ?value, rounds, "最大流完成");

    Ok(MaxFlow {
        value,
        flow,
        source_side,
    })
}

/// 残余网络中从 source 可达的顶点（最小割源侧）
fn residual_reachable<G, C, W>(
    graph: &G,
    capacity: &C,
    flow: &FlowMatrix<W>,
    source: VertexId,
) -> Result<Vec<VertexId>>
where
    G: Adjacency,
    C: EdgeLookup<W>,
    W: SignedWeight,
{
    let n = graph.vertex_count();
    let mut visited = vec![false; n];
    let mut queue = VecDeque::new();

    visited[source] = true;
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        for v in graph.neighbors(u) {
            let c = capacity.weight(u, v).ok_or(Error::MissingWeight(u, v))?;
            if !visited[v] && c.saturating_sub(flow[(u, v)]) > W::ZERO {
                visited[v] = true;
                queue.push_back(v);
            }
        }
    }

    Ok((0..n).filter(|&v| visited[v]).collect())
}
