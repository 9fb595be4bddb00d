// Copyright (C) Microsoft Corporation. All rights reserved.

//! Signature creation capability.

use super::*;

/// A private key bound to one signature scheme.
///
/// The key is imported once when the signer is built and reused by every
/// call; each call builds its own engine instance. A `Signer` may be shared
/// between concurrent tasks.
#[derive(Debug)]
pub struct Signer {
    algo: SignAlgo,
    key: PrivateKey,
}

impl Signer {
    /// Imports `spec` for use with `scheme`.
    ///
    /// # Errors
    ///
    /// - [`CryptoError::UnsupportedAlgorithm`] if the active backend lacks
    ///   the scheme or key type
    /// - [`CryptoError::Key`] if the key is malformed, contradicts its tag or
    ///   does not fit the scheme
    /// - [`CryptoError::EngineFailure`] if the engine rejects the key
    pub async fn new(spec: &PrivateKeySpec, scheme: SignatureScheme) -> Result<Self, CryptoError> {
        scheme.check_key(spec.algorithm())?;
        let algo = SignAlgo::new(scheme)?;
        let key = PrivateKey::import(spec, scheme).await?;
        Ok(Self { algo, key })
    }

    /// Signs `data` with the signer's key and scheme.
    ///
    /// Deterministic schemes (PKCS#1 v1.5, Ed25519, PSS with a zero-length
    /// salt) return the same bytes for the same input. ECDSA and salted PSS
    /// do not.
    ///
    /// # Arguments
    ///
    /// * `data` - Message to sign. It is hashed by the engine and may be
    ///   empty.
    ///
    /// # Returns
    ///
    /// The signature in the backend's native format: DER for ECDSA on
    /// OpenSSL and Node, P1363 on WebCrypto.
    ///
    /// # Errors
    ///
    /// [`CryptoError::EngineFailure`] if the engine fails. Key and scheme
    /// were checked when the signer was built.
    pub async fn sign(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Self::sign_with(&self.algo, &self.key, data).await
    }

    /// Drives a [`SignOp`] directly.
    pub async fn sign_with<Algo: SignOp>(
        algo: &Algo,
        key: &Algo::Key,
        data: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        algo.sign(key, data).await
    }

    /// The scheme this signer was built for.
    pub fn scheme(&self) -> SignatureScheme {
        self.algo.scheme()
    }

    /// The imported key handle.
    pub fn key(&self) -> &PrivateKey {
        &self.key
    }
}
