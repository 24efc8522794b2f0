use crate::config::LayoutKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown layout type: {kind}")]
    UnknownLayout { kind: String },

    #[error("Layout configuration has no string `type` field")]
    MissingLayoutType,

    #[error("Layout configuration must be a JSON object")]
    ConfigNotObject,

    #[error("Invalid {kind} layout options: {source}")]
    InvalidConfig {
        kind: LayoutKind,
        #[source]
        source: serde_json::Error,
    },
}
