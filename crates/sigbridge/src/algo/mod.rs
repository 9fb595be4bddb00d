// Copyright (C) Microsoft Corporation. All rights reserved.

//! Algorithm model.
//!
//! Closed sets of hash, HMAC, key and signature scheme identifiers. Every
//! identifier translates itself to the native name of each backend, or
//! reports [`CryptoError::UnsupportedAlgorithm`] for combinations the backend
//! cannot express. Translation is pure: no engine is touched here.
//!
//! # Backend gaps
//!
//! | Combination                  | OpenSSL | WebCrypto | Node |
//! |------------------------------|---------|-----------|------|
//! | MD5                          | yes     | no        | yes  |
//! | RSA-PSS or ECDSA with MD5    | no      | no        | no   |
//! | Ed25519 / EdDSA              | yes     | no        | yes  |
//! | RSA key without a scheme     | yes     | no        | yes  |

mod asym;
mod hash;
mod hmac;
mod scheme;

pub use asym::*;
pub use hash::*;
pub use hmac::*;
pub use scheme::*;

use super::*;

/// Any algorithm identifier, used to name the subject of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Message digest.
    Hash(HashAlgorithm),
    /// Keyed digest.
    Hmac(HmacAlgorithm),
    /// Asymmetric key pair type.
    Key(AsymmetricKeyAlgorithm),
    /// Signature scheme.
    Scheme(SignatureScheme),
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Hash(hash) => std::fmt::Display::fmt(hash, f),
            Algorithm::Hmac(hmac) => std::fmt::Display::fmt(hmac, f),
            Algorithm::Key(key) => std::fmt::Display::fmt(key, f),
            Algorithm::Scheme(scheme) => std::fmt::Display::fmt(scheme, f),
        }
    }
}

impl From<HashAlgorithm> for Algorithm {
    fn from(hash: HashAlgorithm) -> Self {
        Algorithm::Hash(hash)
    }
}

impl From<HmacAlgorithm> for Algorithm {
    fn from(hmac: HmacAlgorithm) -> Self {
        Algorithm::Hmac(hmac)
    }
}

impl From<AsymmetricKeyAlgorithm> for Algorithm {
    fn from(key: AsymmetricKeyAlgorithm) -> Self {
        Algorithm::Key(key)
    }
}

impl From<SignatureScheme> for Algorithm {
    fn from(scheme: SignatureScheme) -> Self {
        Algorithm::Scheme(scheme)
    }
}

pub(crate) fn unsupported(algorithm: impl Into<Algorithm>, backend: Backend) -> CryptoError {
    CryptoError::UnsupportedAlgorithm {
        algorithm: algorithm.into(),
        backend,
    }
}
