//! 二分图最大匹配
//!
//! 左右两侧顶点都编号为 `0..n`。依次为每个左顶点寻找交错增广路，
//! 用显式栈代替递归，深度只受内存限制。

use crate::error::{check_vertex, Result};
use crate::graph::Adjacency;
use crate::types::VertexId;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// 匹配结果：`mate[v] == Some(u)` 当且仅当 (u, v) 在匹配中
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matching {
    mate: Vec<Option<VertexId>>,
}

impl Matching {
    /// 右顶点 v 的匹配对象（左顶点）
    pub fn mate(&self, v: VertexId) -> Option<VertexId> {
        self.mate.get(v).copied().flatten()
    }

    /// 匹配边数
    pub fn len(&self) -> usize {
        self.mate.iter().filter(|m| m.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 所有匹配边 (左, 右)，按右顶点排序
    pub fn pairs(&self) -> Vec<(VertexId, VertexId)> {
        self.mate
            .iter()
            .enumerate()
            .filter_map(|(v, m)| m.map(|u| (u, v)))
            .collect()
    }

    /// 按右顶点索引的匹配表
    pub fn as_slice(&self) -> &[Option<VertexId>] {
        &self.mate
    }
}

/// 搜索栈帧：当前左顶点、下一个待看邻居的下标、进入本帧所经过的右顶点
struct Frame {
    left: VertexId,
    cursor: usize,
    via: Option<VertexId>,
}

/// 二分图最大匹配
///
/// `bigraph` 的第 u 行是左顶点 u 的右邻居。左顶点处理顺序只影响
/// 找到的是哪一个最大匹配，不影响匹配大小。
///
/// 复杂度 O(|V| * |E|)
pub fn max_bipartite_matching<G: Adjacency>(bigraph: &G) -> Result<Matching> {
    let n = bigraph.vertex_count();
    for u in 0..n {
        for v in bigraph.neighbors(u) {
            check_vertex(v, n)?;
        }
    }

    let mut mate = vec![None; n];
    // visited[v] 记录最后一次访问 v 的轮次，省去每轮清空
    let mut visited = vec![usize::MAX; n];
    let mut stack = Vec::new();
    for u in 0..n {
        let found = augment(bigraph, u, &mut mate, &mut visited, &mut stack);
        trace!(left = u, found, "增广");
    }

    let matching = Matching { mate };
    debug!(vertices = n, size = matching.len(), "二分图匹配完成");
    Ok(matching)
}

/// 从左顶点 root 出发寻找交错增广路，找到则沿路翻转匹配
fn augment<G: Adjacency>(
    bigraph: &G,
    root: VertexId,
    mate: &mut [Option<VertexId>],
    visited: &mut [usize],
    stack: &mut Vec<Frame>,
) -> bool {
    stack.clear();
    stack.push(Frame {
        left: root,
        cursor: 0,
        via: None,
    });

    while let Some(frame) = stack.last_mut() {
        if frame.cursor == bigraph.degree(frame.left) {
            // 此左顶点无路可走，回到上一层继续
            stack.pop();
            continue;
        }
        let v = bigraph.neighbor(frame.left, frame.cursor);
        frame.cursor += 1;
        if visited[v] == root {
            continue;
        }
        visited[v] = root;

        match mate[v] {
            None => {
                // v 未匹配：栈上的路径即增广路，自顶向下重新配对
                let mut right = v;
                while let Some(f) = stack.pop() {
                    mate[right] = Some(f.left);
                    match f.via {
                        Some(r) => right = r,
                        None => break,
                    }
                }
                return true;
            }
            Some(partner) => stack.push(Frame {
                left: partner,
                cursor: 0,
                via: Some(v),
            }),
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::graph::Graph;

    #[test]
    fn test_matching_conflict() {
        // 左 0、1 都只连右 0
        let bigraph = Graph::from_rows(vec![vec![0], vec![0]]).unwrap();
        let matching = max_bipartite_matching(&bigraph).unwrap();

        assert_eq!(matching.len(), 1);
        assert!(matches!(matching.mate(0), Some(0) | Some(1)));
        assert_eq!(matching.mate(1), None);
    }

    #[test]
    fn test_matching_reroutes_partner() {
        // 左 0 先占右 0，左 1 只能连右 0，迫使左 0 改配右 1
        let bigraph = Graph::from_rows(vec![vec![0, 1], vec![0]]).unwrap();
        let matching = max_bipartite_matching(&bigraph).unwrap();

        assert_eq!(matching.len(), 2);
        assert_eq!(matching.pairs(), vec![(1, 0), (0, 1)]);
    }

    #[test]
    fn test_matching_long_alternating_path() {
        // 左 i 连右 i 和右 i+1，左 n-1 只连右 0：需要整条链翻转
        let n = 6;
        let mut rows: Vec<Vec<VertexId>> = (0..n - 1).map(|i| vec![i, i + 1]).collect();
        rows.push(vec![0]);
        let bigraph = Graph::from_rows(rows).unwrap();

        let matching = max_bipartite_matching(&bigraph).unwrap();
        assert_eq!(matching.len(), n);
        assert_eq!(matching.mate(0), Some(n - 1));
    }

    #[test]
    fn test_matching_empty() {
        let bigraph = Graph::new(3);
        let matching = max_bipartite_matching(&bigraph).unwrap();
        assert!(matching.is_empty());
        assert_eq!(matching.as_slice(), &[None, None, None]);
    }

    #[test]
    fn test_matching_deep_chain_no_overflow() {
        // 长链上的增广路深度与 n 同阶，显式栈不会溢出
        let n = 20_000;
        let mut rows: Vec<Vec<VertexId>> = (0..n - 1).map(|i| vec![i, i + 1]).collect();
        rows.push(vec![0]);
        let bigraph = Graph::from_rows(rows).unwrap();

        let matching = max_bipartite_matching(&bigraph).unwrap();
        assert_eq!(matching.len(), n);
    }

    struct OutOfRange;

    impl Adjacency for OutOfRange {
        fn vertex_count(&self) -> usize {
            2
        }

        fn degree(&self, _u: VertexId) -> usize {
            1
        }

        fn neighbor(&self, _u: VertexId, _index: usize) -> VertexId {
            5
        }
    }

    #[test]
    fn test_matching_rejects_bad_right_vertex() {
        assert_eq!(
            max_bipartite_matching(&OutOfRange),
            Err(Error::VertexOutOfRange {
                vertex: 5,
                vertex_count: 2
            })
        );
    }
}
