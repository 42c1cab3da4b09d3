pub type LayoutResult<T> = Result<T, LayoutError>;

#[derive(thiserror::Error, Debug)]
pub enum LayoutError {
    #[error("duplicate node id `{0}`")]
    DuplicateNodeId(String),

    #[error("invalid roadmap: {0}")]
    InvalidTree(String),

    #[error("edge `{edge}` references unknown node `{node}`")]
    UnknownEdgeEndpoint { edge: String, node: String },

    #[error("unknown node `{0}`")]
    UnknownNode(String),

    #[error("invalid layout config: {0}")]
    Config(String),

    #[error("layered solver error: {0}")]
    Solver(String),

    #[error("roadmap generator reported an error: {0}")]
    Generator(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LayoutError {
    pub fn invalid_tree(msg: impl Into<String>) -> Self {
        Self::InvalidTree(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn solver(msg: impl Into<String>) -> Self {
        Self::Solver(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
