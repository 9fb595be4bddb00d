// Copyright (C) Microsoft Corporation. All rights reserved.

//! Node HMAC key handle.

use js_sys::Uint8Array;

use super::*;
use crate::js::engine_failure;
use crate::js::node::*;

/// Secret `KeyObject` bound to an HMAC algorithm.
#[derive(Debug, Clone)]
pub struct NodeSecretKey {
    algorithm: HmacAlgorithm,
    size: usize,
    key: KeyObject,
}

impl NodeSecretKey {
    pub(crate) fn key_object(&self) -> &KeyObject {
        &self.key
    }
}

impl Key for NodeSecretKey {
    fn size(&self) -> usize {
        self.size
    }
}

impl MacKey for NodeSecretKey {
    fn algorithm(&self) -> HmacAlgorithm {
        self.algorithm
    }
}

impl SecretKeyImportOp for NodeSecretKey {
    async fn import(spec: &SecretKeySpec) -> Result<Self, CryptoError> {
        spec.algorithm().name(Backend::NodeCrypto)?;
        let key = create_secret_key(&Uint8Array::from(spec.bytes()))
            .map_err(engine_failure(EngineOperation::KeyImport))?;
        Ok(Self {
            algorithm: spec.algorithm(),
            size: spec.len(),
            key,
        })
    }
}
