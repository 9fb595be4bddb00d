// Copyright (C) Microsoft Corporation. All rights reserved.

//! Platform-independent signing, verification and HMAC.
//!
//! This crate exposes one small capability surface ([`Signer`], [`Verifier`],
//! [`Hmac`]) and routes every operation to the native cryptographic engine of
//! the build target:
//!
//! - **OpenSSL**: every non-`wasm32` target, through the `openssl` crate
//! - **WebCrypto**: `wasm32` builds, through the browser's `crypto.subtle`
//! - **Node**: `wasm32` builds with the `node` feature, through `node:crypto`
//!
//! Exactly one backend is compiled into any artifact. Algorithms and keys are
//! modeled once ([`SignatureScheme`], [`PrivateKeySpec`], ...) and translated
//! to each engine's native names, parameters and key encodings.
//!
//! # Example
//!
//! ```no_run
//! # async fn demo(pkcs8: Vec<u8>, spki: Vec<u8>) -> Result<(), sigbridge::CryptoError> {
//! use sigbridge::*;
//!
//! let scheme = SignatureScheme::rsa_pss(HashAlgorithm::Sha256);
//! let signer = Signer::new(&PrivateKeySpec::pkcs8(AsymmetricKeyAlgorithm::Rsa, pkcs8), scheme).await?;
//! let signature = signer.sign(b"message").await?;
//!
//! let verifier = Verifier::new(&PublicKeySpec::spki(AsymmetricKeyAlgorithm::Rsa, spki), scheme).await?;
//! assert!(verifier.verify(b"message", &signature).await?);
//! # Ok(())
//! # }
//! ```

#[cfg(all(feature = "node", not(target_arch = "wasm32")))]
compile_error!("The Node crypto backend is only available on wasm32 targets.");

mod algo;
mod backend;
mod hmac;
mod key;
mod sign;

mod op;
mod traits;

cfg_if::cfg_if! {
    if #[cfg(not(target_arch = "wasm32"))] {
        mod ossl;
    } else {
        mod js;
    }
}


pub use algo::*;
pub use backend::*;
pub use hmac::*;
pub use key::*;
pub use op::*;
pub use sign::*;
use thiserror::Error;
pub use traits::*;

/// Native engine call that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineOperation {
    /// Importing key material into the engine.
    KeyImport,
    /// Producing a signature.
    Sign,
    /// Checking a signature.
    Verify,
    /// Computing a keyed digest.
    Digest,
}

impl std::fmt::Display for EngineOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            EngineOperation::KeyImport => "key import",
            EngineOperation::Sign => "sign",
            EngineOperation::Verify => "verify",
            EngineOperation::Digest => "digest",
        })
    }
}

/// Error type for every operation exposed by this crate.
///
/// Native faults (OpenSSL error stacks, JavaScript exceptions, rejected
/// promises) are logged where they are caught and surface here as
/// [`CryptoError::EngineFailure`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// The algorithm or scheme cannot be expressed on the active backend.
    #[error("{algorithm} is not supported by the {backend} backend")]
    UnsupportedAlgorithm {
        /// The rejected algorithm.
        algorithm: Algorithm,
        /// Backend that lacks it.
        backend: Backend,
    },
    /// Key material is malformed or does not fit the requested operation.
    #[error(transparent)]
    Key(#[from] KeyError),
    /// The signature cannot be a valid encoding for the scheme and key.
    #[error("{len}-byte signature is not a valid {scheme} encoding")]
    MalformedSignature {
        /// Scheme the signature was checked against.
        scheme: SignatureScheme,
        /// Length of the rejected signature.
        len: usize,
    },
    /// The native engine failed.
    #[error("{backend} engine failed during {operation}")]
    EngineFailure {
        /// Backend whose engine failed.
        backend: Backend,
        /// Operation in progress.
        operation: EngineOperation,
    },
}

/// Key material errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// The encoded bytes are not a well-formed key of a supported type.
    #[error("malformed {encoding} key encoding")]
    Malformed {
        /// Encoding that failed to decode.
        encoding: KeyEncoding,
    },
    /// The encoded key is of a different algorithm than its spec claims.
    #[error("encoded key is {found}, expected {expected}")]
    AlgorithmMismatch {
        /// Algorithm tag of the spec.
        expected: AsymmetricKeyAlgorithm,
        /// Algorithm found in the encoding.
        found: AsymmetricKeyAlgorithm,
    },
    /// The key cannot be used with the signature scheme.
    #[error("{key} key cannot be used with {scheme}")]
    SchemeMismatch {
        /// Algorithm of the key.
        key: AsymmetricKeyAlgorithm,
        /// Requested scheme.
        scheme: SignatureScheme,
    },
    /// HMAC key imported for a different algorithm.
    #[error("{key} key cannot be used with {algorithm}")]
    HmacAlgorithmMismatch {
        /// Algorithm the key was imported for.
        key: HmacAlgorithm,
        /// Requested algorithm.
        algorithm: HmacAlgorithm,
    },
    /// HMAC key shorter than the algorithm minimum.
    #[error("{algorithm} key is {actual} bytes, minimum is {min}")]
    TooShort {
        /// HMAC algorithm.
        algorithm: HmacAlgorithm,
        /// Minimum key length in bytes.
        min: usize,
        /// Length of the rejected key.
        actual: usize,
    },
}

/// Declares a type alias that resolves to the implementation of the active
/// backend.
///
/// The arguments are the OpenSSL, WebCrypto and Node types, in that order.
macro_rules! define_type {
    ($vis:vis $name: ident, $ossl_type: ty, $web_type: ty, $node_type: ty) => {
        /// Default type for the active backend
        #[cfg(not(target_arch = "wasm32"))]
        $vis type $name = $ossl_type;

        /// Default type for the active backend
        #[cfg(all(target_arch = "wasm32", not(feature = "node")))]
        $vis type $name = $web_type;

        /// Default type for the active backend
        #[cfg(all(target_arch = "wasm32", feature = "node"))]
        $vis type $name = $node_type;
    };
}

pub(crate) use define_type;
