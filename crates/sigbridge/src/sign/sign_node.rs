// Copyright (C) Microsoft Corporation. All rights reserved.

//! Signature generation and verification using `node:crypto`.
//!
//! Every call passes the key inside an options object carrying the RSA
//! padding, the PSS salt length and `dsaEncoding: "der"`. Ed25519 is signed
//! with a `null` algorithm.

use js_sys::Object;
use wasm_bindgen::JsValue;

use super::*;
use crate::js::engine_failure;
use crate::js::node;
use crate::js::object;

/// Node implementation of a [`SignatureScheme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeSignAlgo {
    scheme: SignatureScheme,
}

impl NodeSignAlgo {
    /// Fails with [`CryptoError::UnsupportedAlgorithm`] if Node cannot
    /// express `scheme`.
    pub fn new(scheme: SignatureScheme) -> Result<Self, CryptoError> {
        scheme.name(Backend::NodeCrypto)?;
        if let Some(hash) = scheme.hash() {
            hash.name(Backend::NodeCrypto)?;
        }
        Ok(Self { scheme })
    }

    /// The scheme this algorithm implements.
    pub fn scheme(&self) -> SignatureScheme {
        self.scheme
    }

    /// Returns the digest argument and the key options.
    fn new_engine(
        &self,
        key_algorithm: AsymmetricKeyAlgorithm,
        key: &node::KeyObject,
        operation: EngineOperation,
    ) -> Result<(JsValue, Object), CryptoError> {
        let params = self.scheme.native_params(key_algorithm, Backend::NodeCrypto)?;
        let algorithm = params.digest.map_or(JsValue::NULL, JsValue::from_str);

        let mut members = vec![("key", JsValue::from(key.clone()))];
        match self.scheme {
            SignatureScheme::RsaPkcs1(_) => {
                members.push(("padding", JsValue::from(node::RSA_PKCS1_PADDING)));
            }
            SignatureScheme::RsaPss { salt_len, .. } => {
                let salt_len =
                    u32::try_from(salt_len).map_err(|_| unsupported(self.scheme, Backend::NodeCrypto))?;
                members.push(("padding", JsValue::from(node::RSA_PKCS1_PSS_PADDING)));
                members.push(("saltLength", JsValue::from(salt_len)));
            }
            SignatureScheme::Ecdsa(_) => {
                members.push(("dsaEncoding", JsValue::from_str("der")));
            }
            SignatureScheme::EdDsa => {}
        }
        Ok((algorithm, object(&members, operation)?))
    }
}

impl SignOp for NodeSignAlgo {
    type Key = NodePrivateKey;

    async fn sign(&self, key: &NodePrivateKey, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let operation = EngineOperation::Sign;
        self.scheme.check_key(key.algorithm())?;

        let (algorithm, options) = self.new_engine(key.algorithm(), key.key_object(), operation)?;
        node::sign(&algorithm, data, &options)
            .await
            .map_err(engine_failure(operation))
    }
}

impl VerifyOp for NodeSignAlgo {
    type Key = NodePublicKey;

    async fn verify(
        &self,
        key: &NodePublicKey,
        data: &[u8],
        signature: &[u8],
    ) -> Result<bool, CryptoError> {
        let operation = EngineOperation::Verify;
        self.scheme.check_key(key.algorithm())?;
        check_signature(self.scheme, key, signature)?;

        let (algorithm, options) = self.new_engine(key.algorithm(), key.key_object(), operation)?;
        match node::verify(&algorithm, data, &options, signature).await {
            Ok(valid) => Ok(valid),
            Err(js_error) => {
                tracing::debug!(?js_error, "signature rejected by Node");
                Ok(false)
            }
        }
    }
}
