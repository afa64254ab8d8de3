//! 全源最短路径（Floyd-Warshall）

use crate::graph::WeightMatrix;
use crate::types::Weight;
use tracing::debug;

/// Floyd-Warshall 全源最短路径，原地改写权重矩阵
///
/// 输入：`weight[(u, v)]` 为边权，`None` 表示无边（+∞），对角线应为 0。
/// 允许负权。返回 `true` 表示存在负环，此时矩阵内容不再有意义。
///
/// 复杂度 O(|V|^3)
pub fn floyd_warshall<W: Weight>(weight: &mut WeightMatrix<W>) -> bool {
    let n = weight.dimension();

    for k in 0..n {
        for u in 0..n {
            let Some(uk) = weight[(u, k)] else {
                continue;
            };
            for v in 0..n {
                let Some(kv) = weight[(k, v)] else {
                    continue;
                };
                let through_k = uk.saturating_add(kv);
                if weight[(u, v)].map_or(true, |uv| through_k < uv) {
                    weight[(u, v)] = Some(through_k);
                }
            }
        }
    }

    let negative_cycle = (0..n).any(|v| weight[(v, v)].is_some_and(|d| d.is_negative()));
    debug!(vertices = n, negative_cycle, "Floyd-Warshall 完成");
    negative_cycle
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<Option<i64>>>) -> WeightMatrix<i64> {
        WeightMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_floyd_warshall_basic() {
        let mut w = matrix(vec![
            vec![Some(0), Some(1), Some(4)],
            vec![None, Some(0), Some(1)],
            vec![None, None, Some(0)],
        ]);

        assert!(!floyd_warshall(&mut w));
        assert_eq!(w[(0, 2)], Some(2));
        assert_eq!(w[(1, 0)], None);
    }

    #[test]
    fn test_floyd_warshall_negative_edge() {
        let mut w = matrix(vec![
            vec![Some(0), Some(4), Some(1)],
            vec![None, Some(0), None],
            vec![None, Some(-2), Some(0)],
        ]);

        assert!(!floyd_warshall(&mut w));
        assert_eq!(w[(0, 1)], Some(-1));
    }

    #[test]
    fn test_floyd_warshall_negative_cycle() {
        // 0 -> 1 (1), 1 -> 0 (-2)
        let mut w = matrix(vec![vec![Some(0), Some(1)], vec![Some(-2), Some(0)]]);
        assert!(floyd_warshall(&mut w));
    }

    #[test]
    fn test_floyd_warshall_idempotent() {
        let mut w = matrix(vec![
            vec![Some(0), Some(3), None, Some(7)],
            vec![Some(8), Some(0), Some(2), None],
            vec![Some(5), None, Some(0), Some(1)],
            vec![Some(2), None, None, Some(0)],
        ]);
        assert!(!floyd_warshall(&mut w));

        let once = w.clone();
        assert!(!floyd_warshall(&mut w));
        assert_eq!(w, once);
    }

    #[test]
    fn test_floyd_warshall_empty() {
        let mut w: WeightMatrix<i32> = WeightMatrix::filled(0, None);
        assert!(!floyd_warshall(&mut w));
    }
}
