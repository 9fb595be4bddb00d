// Copyright (C) Microsoft Corporation. All rights reserved.

//! Node `KeyObject` handles.

use js_sys::Uint8Array;
use wasm_bindgen::JsValue;

use super::*;
use crate::js::malformed_key;
use crate::js::node::*;
use crate::js::object;

fn der_options(der: &[u8], key_type: &str) -> Result<js_sys::Object, CryptoError> {
    object(
        &[
            ("key", Uint8Array::from(der).into()),
            ("format", JsValue::from_str("der")),
            ("type", JsValue::from_str(key_type)),
        ],
        EngineOperation::KeyImport,
    )
}

/// Private key imported into Node.
#[derive(Debug, Clone)]
pub struct NodePrivateKey {
    algorithm: AsymmetricKeyAlgorithm,
    size: usize,
    key: KeyObject,
}

impl NodePrivateKey {
    pub(crate) fn key_object(&self) -> &KeyObject {
        &self.key
    }
}

impl Key for NodePrivateKey {
    fn size(&self) -> usize {
        self.size
    }
}

impl AsymmetricKey for NodePrivateKey {
    fn algorithm(&self) -> AsymmetricKeyAlgorithm {
        self.algorithm
    }
}

impl SigningKey for NodePrivateKey {}

impl AsymmetricKeyImportOp for NodePrivateKey {
    type Spec = PrivateKeySpec;

    async fn import(spec: &PrivateKeySpec, scheme: SignatureScheme) -> Result<Self, CryptoError> {
        scheme.native_params(spec.algorithm(), Backend::NodeCrypto)?;
        let material = spec.import_der()?;
        let options = der_options(&material.encoded, "pkcs8")?;
        let key = create_private_key(&options).map_err(malformed_key(spec.encoding()))?;
        Ok(Self {
            algorithm: material.algorithm,
            size: material.size,
            key,
        })
    }
}

/// Public key imported into Node.
#[derive(Debug, Clone)]
pub struct NodePublicKey {
    algorithm: AsymmetricKeyAlgorithm,
    size: usize,
    key: KeyObject,
}

impl NodePublicKey {
    pub(crate) fn key_object(&self) -> &KeyObject {
        &self.key
    }
}

impl Key for NodePublicKey {
    fn size(&self) -> usize {
        self.size
    }
}

impl AsymmetricKey for NodePublicKey {
    fn algorithm(&self) -> AsymmetricKeyAlgorithm {
        self.algorithm
    }
}

impl VerificationKey for NodePublicKey {}

impl AsymmetricKeyImportOp for NodePublicKey {
    type Spec = PublicKeySpec;

    async fn import(spec: &PublicKeySpec, scheme: SignatureScheme) -> Result<Self, CryptoError> {
        scheme.native_params(spec.algorithm(), Backend::NodeCrypto)?;
        let material = spec.import_der()?;
        let options = der_options(&material.encoded, "spki")?;
        let key = create_public_key(&options).map_err(malformed_key(spec.encoding()))?;
        Ok(Self {
            algorithm: material.algorithm,
            size: material.size,
            key,
        })
    }
}
