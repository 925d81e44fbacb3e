use std::num::ParseIntError;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum AocError {
    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {token:?} as a number")]
    ParseInt {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("malformed line {line:?}: {reason}")]
    Malformed { line: String, reason: &'static str },

    /// A required section header was absent or out of order.
    #[error("expected section {0:?}")]
    MissingSection(&'static str),

    #[error("no solution for day {0}")]
    UnknownDay(u8),
}

impl AocError {
    pub(crate) fn malformed(line: &str, reason: &'static str) -> Self {
        AocError::Malformed { line: line.to_owned(), reason }
    }
}

/// Parses one whitespace-free token, keeping the token around for the error.
pub(crate) fn parse_num<T>(token: &str) -> Result<T, AocError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    token.parse().map_err(|source| AocError::ParseInt { token: token.to_owned(), source })
}
