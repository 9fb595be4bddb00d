// Copyright (C) Microsoft Corporation. All rights reserved.

//! Traits for digital signature and verification operations.
//!
//! Both traits are one-shot: each call builds a fresh native engine, feeds it
//! the whole message and discards it. Key handles are shared between calls;
//! engines never are.

use std::future::Future;

use super::*;

/// Single-operation signature creation.
pub trait SignOp {
    /// The private key type used for this signing operation.
    type Key: SigningKey;

    /// Creates a signature over `data`.
    ///
    /// # Returns
    ///
    /// The signature in the backend's native encoding.
    ///
    /// # Errors
    ///
    /// - [`KeyError::SchemeMismatch`] if `key` does not fit the scheme
    /// - [`CryptoError::EngineFailure`] if the engine fails
    fn sign(&self, key: &Self::Key, data: &[u8]) -> impl Future<Output = Result<Vec<u8>, CryptoError>>;
}

/// Single-operation signature verification.
pub trait VerifyOp {
    /// The public key type used for this verification operation.
    type Key: VerificationKey;

    /// Checks `signature` over `data`.
    ///
    /// # Returns
    ///
    /// `true` if the signature is valid, `false` if it does not match.
    ///
    /// # Errors
    ///
    /// - [`CryptoError::MalformedSignature`] if `signature` cannot be an
    ///   encoding for the scheme and key
    /// - [`KeyError::SchemeMismatch`] if `key` does not fit the scheme
    fn verify(
        &self,
        key: &Self::Key,
        data: &[u8],
        signature: &[u8],
    ) -> impl Future<Output = Result<bool, CryptoError>>;
}
