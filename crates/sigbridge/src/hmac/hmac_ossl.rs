// Copyright (C) Microsoft Corporation. All rights reserved.

//! OpenSSL-based HMAC.
//!
//! The MAC is produced by an `openssl::sign::Signer` over an HMAC `PKey`.
//! Verification recomputes it and compares with `CRYPTO_memcmp`.
//!
//! # Supported Algorithms
//!
//! - **HMAC-SHA1**: 20-byte output, 20-byte minimum key
//! - **HMAC-SHA256**: 32-byte output, 32-byte minimum key
//! - **HMAC-SHA512**: 64-byte output, 64-byte minimum key
//!
//! # Key Binding
//!
//! An [`OsslSecretKey`] remembers the algorithm it was imported for. Using
//! it with another algorithm fails with
//! [`KeyError::HmacAlgorithmMismatch`] before OpenSSL is called, whatever
//! the key length.

use openssl::sign::Signer;

use super::*;
use crate::ossl::engine_failure;

/// OpenSSL implementation of an [`HmacAlgorithm`].
///
/// Stores only the algorithm; each call creates a one-shot `Signer` over the
/// key's `PKey`.
///
/// # Security
///
/// - [`MacOp::verify`] compares in constant time
/// - a MAC of the wrong length is reported as `Ok(false)` without running
///   the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OsslHmacAlgo {
    algorithm: HmacAlgorithm,
}

impl OsslHmacAlgo {
    /// Creates the HMAC provider for `algorithm`.
    ///
    /// # Arguments
    ///
    /// * `algorithm` - Keyed digest to compute.
    ///
    /// # Returns
    ///
    /// The provider, or [`CryptoError::UnsupportedAlgorithm`] if OpenSSL
    /// lacks the digest.
    pub fn new(algorithm: HmacAlgorithm) -> Result<Self, CryptoError> {
        algorithm.name(Backend::OpenSsl)?;
        crate::ossl::message_digest(algorithm.hash())?;
        Ok(Self { algorithm })
    }

    /// The HMAC algorithm.
    pub fn algorithm(&self) -> HmacAlgorithm {
        self.algorithm
    }

    fn new_engine<'a>(&self, key: &'a OsslSecretKey) -> Result<Signer<'a>, CryptoError> {
        let md = crate::ossl::message_digest(self.algorithm.hash())?;
        Signer::new(md, key.pkey()).map_err(engine_failure(EngineOperation::Digest))
    }
}

impl MacOp for OsslHmacAlgo {
    type Key = OsslSecretKey;

    async fn mac(&self, key: &OsslSecretKey, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.algorithm.check_key(key.algorithm(), key.size())?;
        let mut signer = self.new_engine(key)?;
        signer
            .sign_oneshot_to_vec(data)
            .map_err(engine_failure(EngineOperation::Digest))
    }

    async fn verify(&self, key: &OsslSecretKey, data: &[u8], mac: &[u8]) -> Result<bool, CryptoError> {
        self.algorithm.check_key(key.algorithm(), key.size())?;
        if mac.len() != self.algorithm.output_len() {
            tracing::debug!(
                "{}-byte MAC rejected, {} expects {}",
                mac.len(),
                self.algorithm,
                self.algorithm.output_len()
            );
            return Ok(false);
        }

        let expected = self.mac(key, data).await?;
        Ok(openssl::memcmp::eq(&expected, mac))
    }
}
