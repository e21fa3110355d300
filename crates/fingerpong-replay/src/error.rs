use fingerpong_paddle::ConfigError;

#[derive(Debug)]
pub enum ReplayError {
    Io(std::io::Error),
    /// A detection frame line could not be decoded. `line` is 1-based.
    Parse { line: usize, message: String },
    Serialize(String),
    Config(ConfigError),
}

impl std::fmt::Display for ReplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "i/o error: {e}"),
            Self::Parse { line, message } => write!(f, "bad frame on line {line}: {message}"),
            Self::Serialize(e) => write!(f, "serialize error: {e}"),
            Self::Config(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Parse { .. } | Self::Serialize(_) => None,
        }
    }
}

impl From<std::io::Error> for ReplayError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ConfigError> for ReplayError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
