// Copyright (C) Microsoft Corporation. All rights reserved.

//! Keyed digest capability.

use super::*;

/// Stateless HMAC entry points.
pub struct Hmac;

impl Hmac {
    /// Computes the HMAC of `data` under `key`.
    ///
    /// # Errors
    ///
    /// - [`KeyError::TooShort`] if `key` is shorter than
    ///   [`HmacAlgorithm::min_key_len`]
    /// - [`CryptoError::UnsupportedAlgorithm`] if the backend lacks the digest
    /// - [`CryptoError::EngineFailure`] if the engine fails
    pub async fn digest(algorithm: HmacAlgorithm, key: &[u8], data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let algo = HmacAlgo::new(algorithm)?;
        let key = SecretKey::import(&SecretKeySpec::new(algorithm, key)?).await?;
        Self::mac_with(&algo, &key, data).await
    }

    /// Checks `mac` over `data` under `key` in constant time.
    ///
    /// A MAC of the wrong length yields `false`.
    pub async fn verify(
        algorithm: HmacAlgorithm,
        key: &[u8],
        data: &[u8],
        mac: &[u8],
    ) -> Result<bool, CryptoError> {
        let algo = HmacAlgo::new(algorithm)?;
        let key = SecretKey::import(&SecretKeySpec::new(algorithm, key)?).await?;
        Self::verify_with(&algo, &key, data, mac).await
    }

    /// Drives a [`MacOp`] directly.
    pub async fn mac_with<Algo: MacOp>(algo: &Algo, key: &Algo::Key, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        algo.mac(key, data).await
    }

    /// Drives [`MacOp::verify`] directly.
    pub async fn verify_with<Algo: MacOp>(
        algo: &Algo,
        key: &Algo::Key,
        data: &[u8],
        mac: &[u8],
    ) -> Result<bool, CryptoError> {
        algo.verify(key, data, mac).await
    }
}
