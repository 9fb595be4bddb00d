// Copyright (C) Microsoft Corporation. All rights reserved.

//! Key marker traits and import operations.

use std::future::Future;

use super::*;

/// Base trait for all native key handles.
pub trait Key {
    /// Returns the key size in bytes.
    ///
    /// This is the modulus length for RSA keys, the field length for EC and
    /// Ed25519 keys, and the raw length for secret keys.
    fn size(&self) -> usize;

    /// Returns the key size in bits.
    fn bits(&self) -> usize {
        self.size() * 8
    }
}

/// An asymmetric key handle of a known algorithm.
pub trait AsymmetricKey: Key {
    /// Returns the algorithm of the key pair.
    fn algorithm(&self) -> AsymmetricKeyAlgorithm;
}

/// Marker trait for keys that can create signatures.
pub trait SigningKey: AsymmetricKey {}

/// Marker trait for keys that can check signatures.
pub trait VerificationKey: AsymmetricKey {}

/// A secret key handle bound to one HMAC algorithm.
pub trait MacKey: Key {
    /// Returns the HMAC algorithm the key was imported for.
    fn algorithm(&self) -> HmacAlgorithm;
}

/// Imports an asymmetric key spec into the native engine.
///
/// The signature scheme is part of the import because some engines bind a
/// key to one scheme at import time.
pub trait AsymmetricKeyImportOp: Sized {
    /// The key spec type consumed by the import.
    type Spec;

    /// Decodes `spec`, checks it against `scheme`, and imports it.
    ///
    /// # Errors
    ///
    /// - [`KeyError::Malformed`] if the encoded material cannot be decoded
    /// - [`KeyError::AlgorithmMismatch`] if the material contradicts the
    ///   spec's algorithm tag
    /// - [`KeyError::SchemeMismatch`] if the key cannot be used with `scheme`
    /// - [`CryptoError::UnsupportedAlgorithm`] if the engine lacks the key
    ///   type or scheme
    /// - [`CryptoError::EngineFailure`] if the engine rejects the key
    fn import(
        spec: &Self::Spec,
        scheme: SignatureScheme,
    ) -> impl Future<Output = Result<Self, CryptoError>>;
}

/// Imports a secret key spec into the native engine.
pub trait SecretKeyImportOp: Sized {
    /// Imports the raw key bytes for the spec's HMAC algorithm.
    ///
    /// # Errors
    ///
    /// - [`CryptoError::UnsupportedAlgorithm`] if the engine lacks the digest
    /// - [`CryptoError::EngineFailure`] if the engine rejects the key
    fn import(spec: &SecretKeySpec) -> impl Future<Output = Result<Self, CryptoError>>;
}
