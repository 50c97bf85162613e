use std::fmt::Display;

use anyhow::anyhow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Config text could not be deserialized.
    Parse,
    /// A config value is out of range.
    InvalidConfig,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    inner: anyhow::Error,
}

impl Error {
    pub fn new(kind: ErrorKind, inner: anyhow::Error) -> Self {
        Self { kind, inner }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn into_inner(self) -> anyhow::Error {
        self.inner
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.inner)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        let inner: &(dyn std::error::Error + 'static) = self.inner.as_ref();
        Some(inner)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(value: toml::de::Error) -> Self {
        Error::new(ErrorKind::Parse, anyhow!(value))
    }
}

pub(crate) fn invalid_config<C>(context: C) -> Error
where
    C: Display + Send + Sync + 'static,
{
    Error::new(ErrorKind::InvalidConfig, anyhow!(context.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{invalid_config, Error, ErrorKind};

    #[test]
    fn test_display_carries_kind() {
        let err = invalid_config("pop timeout must be non-zero");
        assert_eq!(ErrorKind::InvalidConfig, err.kind());
        assert_eq!(
            "InvalidConfig: pop timeout must be non-zero",
            err.to_string()
        );
    }

    #[test]
    fn test_from_toml_error() {
        let toml_err = toml::from_str::<toml::Table>("= nope").unwrap_err();
        let err: Error = toml_err.into();
        assert_eq!(ErrorKind::Parse, err.kind());

        let source = std::error::Error::source(&err).unwrap();
        assert!(source.downcast_ref::<toml::de::Error>().is_some());
        assert!(!err.into_inner().to_string().is_empty());
    }
}
