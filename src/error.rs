use thiserror::Error;

/// Everything an endpoint call can fail with
#[derive(Error, Debug)]
pub enum Error {
    /// Connecting, sending, reading the body or a non-success status.
    ///
    /// A non-success status still carries the body, e.g. steam's html error page.
    #[error("{source}")]
    Transport {
        #[source]
        source: reqwest::Error,
        body: Option<Vec<u8>>,
    },

    /// The body didn't match the expected json envelope.
    ///
    /// Carries the body as it was received, e.g. to tell an html error page apart
    /// from truncated json.
    #[error("couldn't decode response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: Vec<u8>,
    },
}
pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Error::Transport { source, body: None }
    }
}

impl Error {
    /// The raw body, if one was received before failing
    ///
    /// Always there for [`Error::Decode`], there for [`Error::Transport`] if the api answered
    /// with a non-success status.
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            Error::Transport { body, .. } => body.as_deref(),
            Error::Decode { body, .. } => Some(body.as_slice()),
        }
    }
    pub fn into_body(self) -> Option<Vec<u8>> {
        match self {
            Error::Transport { body, .. } => body,
            Error::Decode { body, .. } => Some(body),
        }
    }
    pub const fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. })
    }
    pub const fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }
}
