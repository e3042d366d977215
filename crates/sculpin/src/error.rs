pub use sculpin_graphlib::ErrorKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] sculpin_graphlib::Error),

    #[error("the priority queue is empty")]
    EmptyQueue,

    #[error("element {id} does not exist ({len} elements)")]
    UnknownElement { id: usize, len: usize },

    #[error("element {id} is not in the priority queue")]
    NotQueued { id: usize },

    #[error("element {id} is already in the priority queue")]
    AlreadyQueued { id: usize },

    #[error("element {id} has handle {handle} which does not point back at it")]
    StaleHandle { id: usize, handle: usize },

    #[error("new priority {requested} of element {id} is not below its current priority {current}")]
    PriorityNotDecreased {
        id: usize,
        current: f64,
        requested: f64,
    },

    #[error("element {id} has priority {priority}, which is not comparable")]
    InvalidPriority { id: usize, priority: f64 },

    #[error("expected an undirected graph")]
    DirectedGraph,

    #[error("expected a directed graph")]
    UndirectedGraph,

    #[error("source node {node} is not in the graph")]
    SourceNotFound { node: String },

    #[error("edge {edge} has no weight")]
    MissingWeight { edge: String },

    #[error("edge {edge} has weight {weight}; weights must be non-negative numbers")]
    InvalidWeight { edge: String, weight: f64 },

    #[error("unexpected character {ch:?} at byte {position}")]
    InvalidCharacter { ch: char, position: usize },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Graph(err) => err.kind(),
            Self::EmptyQueue => ErrorKind::EmptyCollection,
            Self::UnknownElement { .. } | Self::NotQueued { .. } => ErrorKind::NotFound,
            Self::AlreadyQueued { .. }
            | Self::StaleHandle { .. }
            | Self::PriorityNotDecreased { .. }
            | Self::InvalidPriority { .. }
            | Self::DirectedGraph
            | Self::UndirectedGraph
            | Self::SourceNotFound { .. }
            | Self::MissingWeight { .. }
            | Self::InvalidWeight { .. }
            | Self::InvalidCharacter { .. } => ErrorKind::InvalidArgument,
        }
    }
}
