//! Resolution error taxonomy.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Why a chain could not be resolved to a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A token is not a registered atom after normalization.
    UnknownToken(String),
    /// Both atoms are valid but no rule covers the pair.
    UnresolvableStep { current: String, next: String },
    /// The engine itself misbehaved (bad static data, caught panic, ...).
    Internal(String),
}

impl ResolveError {
    /// `true` for engine defects, `false` for chains the model cannot name.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }

    /// Stable reason code used in log events.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::UnknownToken(_) => "unknown_token",
            Self::UnresolvableStep { .. } => "unresolvable_step",
            Self::Internal(_) => "internal",
        }
    }
}

impl Display for ResolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownToken(token) => write!(f, "unknown relation token: {token}"),
            Self::UnresolvableStep { current, next } => {
                write!(f, "no rule resolves `{next}` from `{current}`")
            }
            Self::Internal(details) => write!(f, "internal resolution error: {details}"),
        }
    }
}

impl Error for ResolveError {}
