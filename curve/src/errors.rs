//! Error types shared by the curve engine and the protocols built on it.

/// Failures reported by domain setup, point operations, and the key and
/// signature protocols.
///
/// Every variant describes a malformed call. A signature that simply does
/// not verify is not an error; it is reported as an ordinary value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EcError {
    /// A required input was not supplied.
    #[error("required input is missing")]
    NullInput,

    /// The context has no domain configured, or a point was created by a
    /// different domain than the one it is used with.
    #[error("context is not initialized or the argument belongs to another context")]
    ContextMismatch,

    /// A parameter or buffer does not fit the configured size, or a
    /// coordinate or coefficient is not below the field prime.
    #[error("value does not fit the configured size or the field range")]
    RangeError,

    /// The requested standard curve is not in the catalog.
    #[error("unrecognized curve identifier")]
    InvalidCurveId,

    /// A private key is outside `(0, order)`.
    #[error("private key is outside (0, order)")]
    InvalidPrivateKey,

    /// A message digest is not below the group order.
    #[error("message digest is not below the group order")]
    MessageError,

    /// The ephemeral key pair is missing or produced a zero signature component.
    #[error("ephemeral key pair is missing or produced a degenerate signature")]
    EphemeralKeyError,

    /// The Diffie-Hellman product is the point at infinity.
    #[error("shared secret is the point at infinity")]
    ShareKeyError,
}

pub type Result<T> = core::result::Result<T, EcError>;
