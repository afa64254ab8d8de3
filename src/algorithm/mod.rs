//! 图算法模块
//!
//! 包含单源最短路径、全源最短路径、二分图匹配和最大流算法

mod all_pairs;
mod frontier;
mod matching;
mod max_flow;
mod shortest_path;

pub use all_pairs::floyd_warshall;
pub use frontier::{DistanceFrontier, FifoQueue, FrontierKind, IndexedHeap, LazyHeap};
pub use matching::{max_bipartite_matching, Matching};
pub use max_flow::{ford_fulkerson, ford_fulkerson_sparse, MaxFlow};
pub use shortest_path::{
    bfs, dijkstra, dijkstra_update_heap, dijkstra_with, dist01, shortest_paths, SearchConfig,
    ShortestPaths,
};
