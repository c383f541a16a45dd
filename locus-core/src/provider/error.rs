use thiserror::Error;

/// Errors reported by the collaborator ports in [`crate::provider`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The provider could not be reached or refused the request.
    #[error("{provider} is unavailable: {reason}")]
    Unavailable {
        /// Provider name used in logs.
        provider: String,
        /// Human-readable cause.
        reason: String,
    },
    /// The provider did not answer in time.
    #[error("{provider} timed out")]
    Timeout {
        /// Provider name used in logs.
        provider: String,
    },
    /// The provider answered with data that could not be interpreted.
    #[error("{provider} returned a malformed response: {reason}")]
    MalformedResponse {
        /// Provider name used in logs.
        provider: String,
        /// Human-readable cause.
        reason: String,
    },
}

impl ProviderError {
    /// Construct a [`ProviderError::Unavailable`] error.
    #[must_use]
    pub fn unavailable(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            provider: provider.into(),
            reason: reason.into(),
        }
    }

    /// Construct a [`ProviderError::MalformedResponse`] error.
    #[must_use]
    pub fn malformed(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            provider: provider.into(),
            reason: reason.into(),
        }
    }

    /// Name of the provider that failed.
    #[must_use]
    pub fn provider(&self) -> &str {
        match self {
            Self::Unavailable { provider, .. }
            | Self::Timeout { provider }
            | Self::MalformedResponse { provider, .. } => provider,
        }
    }

    /// Whether a retry could plausibly succeed.
    ///
    /// Malformed responses are not recoverable by retrying the same call.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Unavailable { .. } | Self::Timeout { .. })
    }
}
