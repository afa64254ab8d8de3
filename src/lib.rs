//! GraphKit - 图算法工具箱
//!
//! 在统一的图表示之上提供：
//! - 单源最短路径（BFS、0/1 BFS、两种堆实现的 Dijkstra）
//! - 全源最短路径（Floyd-Warshall，含负环检测）
//! - 增广路算法（二分图最大匹配、Ford-Fulkerson 最大流）
//!
//! 所有算法单线程、同步执行，每次调用独立分配结果表。

pub mod algorithm;
pub mod error;
pub mod graph;
pub mod types;

// 重导出常用类型
pub use algorithm::{
    bfs, dijkstra, dijkstra_update_heap, dist01, floyd_warshall, ford_fulkerson,
    max_bipartite_matching, FrontierKind, Matching, MaxFlow, SearchConfig, ShortestPaths,
};
pub use error::{Error, Result};
pub use graph::{
    Adjacency, AdjacencyMut, EdgeLookup, EdgeLookupMut, FlowMatrix, Graph, SparseWeights,
    SquareMatrix, WeightMatrix,
};
pub use types::{SignedWeight, VertexId, Weight};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
