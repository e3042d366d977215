/// Coarse classification shared by every error in the workspace.
///
/// Callers that only care about the contract that was violated (rather than the exact
/// variant) match on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    EmptyCollection,
    UnsupportedOperation,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("edge {edge} is {edge_orientation} but the graph is {graph_orientation}")]
    OrientationMismatch {
        edge: String,
        edge_orientation: &'static str,
        graph_orientation: &'static str,
    },

    #[error("edge {edge} has an endpoint that is not in the graph")]
    MissingEndpoint { edge: String },

    #[error("node {node} is not in the graph")]
    NodeNotPresent { node: String },

    #[error("node index {index} is out of bounds for a graph with {node_count} nodes")]
    IndexOutOfBounds { index: usize, node_count: usize },

    #[error("{operation} is not supported by this graph")]
    Unsupported { operation: &'static str },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::OrientationMismatch { .. }
            | Self::MissingEndpoint { .. }
            | Self::NodeNotPresent { .. } => ErrorKind::InvalidArgument,
            Self::IndexOutOfBounds { .. } => ErrorKind::NotFound,
            Self::Unsupported { .. } => ErrorKind::UnsupportedOperation,
        }
    }

    pub(crate) fn orientation(directed: bool) -> &'static str {
        if directed { "directed" } else { "undirected" }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
