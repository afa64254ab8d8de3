//! 图核心模块
//!
//! 定义算法共用的图表示：邻接表、稠密方阵、邻接字典，
//! 以及把它们统一起来的访问接口

mod access;
mod graph;
mod matrix;
mod sparse;
mod tree;

pub use access::{add_reverse_arcs, Adjacency, AdjacencyMut, EdgeLookup, EdgeLookupMut, Neighbors};
pub use graph::Graph;
pub use matrix::{FlowMatrix, SquareMatrix, WeightMatrix};
pub use sparse::SparseWeights;
pub use tree::{extract_path, tree_adj_to_prec, tree_prec_to_adj};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_reverse_arcs() {
        let mut graph = Graph::from_rows(vec![vec![1, 2], vec![2], vec![2]]).unwrap();
        let mut capacity: WeightMatrix<i64> = WeightMatrix::filled(3, None);
        capacity[(0, 1)] = Some(3);
        capacity[(0, 2)] = Some(2);
        capacity[(1, 2)] = Some(4);
        capacity[(2, 2)] = Some(9);

        let added = add_reverse_arcs(&mut graph, &mut capacity).unwrap();

        assert_eq!(added, 3);
        assert_eq!(graph.row(1), &[2, 0]);
        assert_eq!(graph.row(2), &[2, 0, 1]);
        assert_eq!(capacity[(1, 0)], Some(0));
        assert_eq!(capacity[(2, 1)], Some(0));
        // 自环原样保留
        assert_eq!(capacity[(2, 2)], Some(9));

        // 幂等
        let snapshot = (graph.clone(), capacity.clone());
        assert_eq!(add_reverse_arcs(&mut graph, &mut capacity).unwrap(), 0);
        assert_eq!((graph, capacity), snapshot);
    }

    #[test]
    fn test_add_reverse_arcs_dimension_mismatch() {
        let mut graph = Graph::new(3);
        let mut capacity: WeightMatrix<i64> = WeightMatrix::filled(2, None);
        assert!(add_reverse_arcs(&mut graph, &mut capacity).is_err());
    }
}
