// Copyright (C) Microsoft Corporation. All rights reserved.

//! Node HMAC.
//!
//! `createHmac` is synchronous; verification recomputes the MAC and compares
//! with `timingSafeEqual`.

use js_sys::Uint8Array;

use super::*;
use crate::js::engine_failure;
use crate::js::node::*;

/// Node implementation of an [`HmacAlgorithm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeHmacAlgo {
    algorithm: HmacAlgorithm,
}

impl NodeHmacAlgo {
    /// Fails with [`CryptoError::UnsupportedAlgorithm`] if Node lacks the
    /// digest.
    pub fn new(algorithm: HmacAlgorithm) -> Result<Self, CryptoError> {
        algorithm.name(Backend::NodeCrypto)?;
        Ok(Self { algorithm })
    }

    /// The HMAC algorithm.
    pub fn algorithm(&self) -> HmacAlgorithm {
        self.algorithm
    }

    fn new_engine(&self, key: &NodeSecretKey) -> Result<HmacStream, CryptoError> {
        let digest = self.algorithm.hash().name(Backend::NodeCrypto)?;
        create_hmac(digest, key.key_object()).map_err(engine_failure(EngineOperation::Digest))
    }

    fn compute(&self, key: &NodeSecretKey, data: &[u8]) -> Result<Uint8Array, CryptoError> {
        let operation = EngineOperation::Digest;
        let hmac = self.new_engine(key)?;
        hmac.update(&Uint8Array::from(data))
            .and_then(|hmac| hmac.digest())
            .map_err(engine_failure(operation))
    }
}

impl MacOp for NodeHmacAlgo {
    type Key = NodeSecretKey;

    async fn mac(&self, key: &NodeSecretKey, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.algorithm.check_key(key.algorithm(), key.size())?;
        Ok(self.compute(key, data)?.to_vec())
    }

    async fn verify(&self, key: &NodeSecretKey, data: &[u8], mac: &[u8]) -> Result<bool, CryptoError> {
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

        let expected = self.compute(key, data)?;
        timing_safe_equal(&expected, &Uint8Array::from(mac))
            .map_err(engine_failure(EngineOperation::Digest))
    }
}
