//! 错误类型定义
//!
//! 只描述调用方违反前置条件的情况；"不可达"、"无增广路"、"存在负环"
//! 都是正常返回值，不在此列。

use crate::types::VertexId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("顶点越界: {vertex} (顶点数 {vertex_count})")]
    VertexOutOfRange { vertex: VertexId, vertex_count: usize },

    #[error("维度不匹配: 期望 {expected}, 实际 {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("负权边: ({0}, {1})")]
    NegativeWeight(VertexId, VertexId),

    #[error("0/1 图中出现非 0/1 权重: ({0}, {1})")]
    NonBinaryWeight(VertexId, VertexId),

    #[error("弧 ({0}, {1}) 缺少权重")]
    MissingWeight(VertexId, VertexId),

    #[error("负容量: ({0}, {1})")]
    NegativeCapacity(VertexId, VertexId),

    #[error("前驱表格式错误: 顶点 {0} 处成环")]
    MalformedPredecessors(VertexId),

    #[error("距离超出权重类型范围: 经弧 ({0}, {1})")]
    DistanceOverflow(VertexId, VertexId),

    #[error("源点 {0} 的流量值超出容量类型范围")]
    FlowOverflow(VertexId),
}

/// 检查顶点编号是否落在 `[0, n)` 内
pub(crate) fn check_vertex(vertex: VertexId, vertex_count: usize) -> Result<()> {
    if vertex < vertex_count {
        Ok(())
    } else {
        Err(Error::VertexOutOfRange {
            vertex,
            vertex_count,
        })
    }
}

/// 检查两个结构的顶点数是否一致
pub(crate) fn check_dimension(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::DimensionMismatch { expected, actual })
    }
}
