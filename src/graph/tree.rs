//! 树的两种表示互转，以及从前驱表中取出路径

use super::access::Adjacency;
use super::graph::Graph;
use crate::error::{check_vertex, Error, Result};
use crate::types::VertexId;

/// 前驱表 -> 邻接表
///
/// 每个非根顶点的第一个邻居是其父节点，随后是它的孩子；根只有孩子。
/// 未挂在树上的顶点（前驱为 `None` 且不是根）保持孤立。
pub fn tree_prec_to_adj(prec: &[Option<VertexId>], root: VertexId) -> Result<Graph> {
    let n = prec.len();
    check_vertex(root, n)?;

    let mut rows: Vec<Vec<VertexId>> = prec
        .iter()
        .map(|p| p.iter().copied().collect())
        .collect();
    rows[root].clear();

    for (u, p) in prec.iter().enumerate() {
        if u == root {
            continue;
        }
        if let Some(parent) = *p {
            check_vertex(parent, n)?;
            rows[parent].push(u);
        }
    }
    Graph::from_rows(rows)
}

/// 邻接表 -> 前驱表
///
/// 从根做深度优先遍历；若图不是树，得到的是一棵 DFS 生成树。
pub fn tree_adj_to_prec<G: Adjacency>(graph: &G, root: VertexId) -> Result<Vec<Option<VertexId>>> {
    let n = graph.vertex_count();
    check_vertex(root, n)?;

    let mut prec = vec![None; n];
    let mut seen = vec![false; n];
    seen[root] = true;
    let mut to_visit = vec![root];

    while let Some(node) = to_visit.pop() {
        for neighbor in graph.neighbors(node) {
            if !seen[neighbor] {
                seen[neighbor] = true;
                prec[neighbor] = Some(node);
                to_visit.push(neighbor);
            }
        }
    }
    Ok(prec)
}

/// 沿前驱表回溯出 "源点 -> v" 的顶点序列
///
/// 前驱表中出现环时返回 [`Error::MalformedPredecessors`]，不会死循环。
pub fn extract_path(prec: &[Option<VertexId>], v: VertexId) -> Result<Vec<VertexId>> {
    let n = prec.len();
    check_vertex(v, n)?;

    let mut path = vec![v];
    let mut current = v;
    while let Some(p) = prec[current] {
        check_vertex(p, n)?;
        if path.len() > n {
            return Err(Error::MalformedPredecessors(p));
        }
        path.push(p);
        current = p;
    }
    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prec_adj_round_trip() {
        //     0
        //    / \
        //   1   2
        //   |
        //   3
        let prec = vec![None, Some(0), Some(0), Some(1)];
        let graph = tree_prec_to_adj(&prec, 0).unwrap();

        assert_eq!(graph.row(0), &[1, 2]);
        assert_eq!(graph.row(1), &[0, 3]);
        assert_eq!(graph.row(3), &[1]);

        assert_eq!(tree_adj_to_prec(&graph, 0).unwrap(), prec);
    }

    #[test]
    fn test_adj_to_prec_on_cycle() {
        let graph = Graph::from_rows(vec![vec![1, 2], vec![2], vec![0]]).unwrap();
        let prec = tree_adj_to_prec(&graph, 0).unwrap();

        assert_eq!(prec[0], None);
        assert_eq!(prec[1], Some(0));
        assert_eq!(prec[2], Some(0));
    }

    #[test]
    fn test_extract_path() {
        let prec = vec![None, Some(0), Some(1), None];

        assert_eq!(extract_path(&prec, 2).unwrap(), vec![0, 1, 2]);
        assert_eq!(extract_path(&prec, 0).unwrap(), vec![0]);
        // 不可达顶点只有自身
        assert_eq!(extract_path(&prec, 3).unwrap(), vec![3]);
    }

    #[test]
    fn test_extract_path_malformed() {
        let prec = vec![Some(1), Some(0)];
        assert!(matches!(
            extract_path(&prec, 0),
            Err(Error::MalformedPredecessors(_))
        ));
    }
}
