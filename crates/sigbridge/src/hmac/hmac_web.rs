// Copyright (C) Microsoft Corporation. All rights reserved.

//! WebCrypto HMAC. Verification is delegated to `subtle.verify`.

use js_sys::Uint8Array;

use super::*;
use crate::js::web::*;

/// WebCrypto implementation of an [`HmacAlgorithm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebHmacAlgo {
    algorithm: HmacAlgorithm,
}

impl WebHmacAlgo {
    /// Fails with [`CryptoError::UnsupportedAlgorithm`] if WebCrypto lacks
    /// the digest.
    pub fn new(algorithm: HmacAlgorithm) -> Result<Self, CryptoError> {
        algorithm.name(Backend::WebCrypto)?;
        Ok(Self { algorithm })
    }

    /// The HMAC algorithm.
    pub fn algorithm(&self) -> HmacAlgorithm {
        self.algorithm
    }
}

impl MacOp for WebHmacAlgo {
    type Key = WebSecretKey;

    async fn mac(&self, key: &WebSecretKey, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let operation = EngineOperation::Digest;
        self.algorithm.check_key(key.algorithm(), key.size())?;

        let subtle = subtle_crypto(operation)?;
        let mac = await_promise(
            subtle.sign_with_str_and_buffer_source("HMAC", key.crypto_key(), &Uint8Array::from(data)),
            operation,
        )
        .await?;
        Ok(Uint8Array::new(&mac).to_vec())
    }

    async fn verify(&self, key: &WebSecretKey, data: &[u8], mac: &[u8]) -> Result<bool, CryptoError> {
        let operation = EngineOperation::Digest;
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

        let subtle = subtle_crypto(operation)?;
        let valid = await_promise(
            subtle.verify_with_str_and_buffer_source_and_buffer_source(
                "HMAC",
                key.crypto_key(),
                &Uint8Array::from(mac),
                &Uint8Array::from(data),
            ),
            operation,
        )
        .await?;
        Ok(valid.as_bool().unwrap_or(false))
    }
}
