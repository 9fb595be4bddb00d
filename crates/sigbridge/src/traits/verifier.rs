// Copyright (C) Microsoft Corporation. All rights reserved.

//! Signature verification capability.

use super::*;

/// A public key bound to one signature scheme.
#[derive(Debug)]
pub struct Verifier {
    algo: SignAlgo,
    key: PublicKey,
}

impl Verifier {
    /// Imports `spec` for use with `scheme`.
    pub async fn new(spec: &PublicKeySpec, scheme: SignatureScheme) -> Result<Self, CryptoError> {
        scheme.check_key(spec.algorithm())?;
        let algo = SignAlgo::new(scheme)?;
        let key = PublicKey::import(spec, scheme).await?;
        Ok(Self { algo, key })
    }

    /// Checks `signature` over `message`.
    ///
    /// Returns `Ok(false)` for a well-formed signature that does not match.
    /// Fails with [`CryptoError::MalformedSignature`] if the signature length
    /// is impossible for the scheme and key.
    pub async fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool, CryptoError> {
        Self::verify_with(&self.algo, &self.key, message, signature).await
    }

    /// Drives a [`VerifyOp`] directly.
    pub async fn verify_with<Algo: VerifyOp>(
        algo: &Algo,
        key: &Algo::Key,
        message: &[u8],
        signature: &[u8],
    ) -> Result<bool, CryptoError> {
        algo.verify(key, message, signature).await
    }

    /// The scheme this verifier was built for.
    pub fn scheme(&self) -> SignatureScheme {
        self.algo.scheme()
    }

    /// The imported key handle.
    pub fn key(&self) -> &PublicKey {
        &self.key
    }
}
