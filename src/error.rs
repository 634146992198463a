use thiserror::Error;

/// Faults raised by the matcher and the unreachable reporter
#[derive(Debug, Error)]
pub enum MatchError {
    /// A value escaped static exhaustiveness checking: no case matched it
    /// and no fallback was declared. The payload is a textual description
    /// of the offending value, suitable for crash reports and logs.
    #[error("Internal Error: encountered impossible value \"{0}\"")]
    Unreachable(String),

    /// Describing the unreachable value failed for a reason other than
    /// circularity or an arbitrary-precision integer. Propagated as-is so
    /// a bug in the description pipeline is never mistaken for a genuinely
    /// unreachable value.
    #[error(transparent)]
    Description(#[from] serde_json::Error),
}
