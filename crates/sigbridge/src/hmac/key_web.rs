// Copyright (C) Microsoft Corporation. All rights reserved.

//! WebCrypto HMAC key handle.

use js_sys::Uint8Array;
use wasm_bindgen::JsValue;
use web_sys::CryptoKey;

use super::*;
use crate::js::object;
use crate::js::web::*;

/// HMAC key imported into WebCrypto, usable for `sign` and `verify`.
#[derive(Debug, Clone)]
pub struct WebSecretKey {
    algorithm: HmacAlgorithm,
    size: usize,
    key: CryptoKey,
}

impl WebSecretKey {
    pub(crate) fn crypto_key(&self) -> &CryptoKey {
        &self.key
    }
}

impl Key for WebSecretKey {
    fn size(&self) -> usize {
        self.size
    }
}

impl MacKey for WebSecretKey {
    fn algorithm(&self) -> HmacAlgorithm {
        self.algorithm
    }
}

impl SecretKeyImportOp for WebSecretKey {
    async fn import(spec: &SecretKeySpec) -> Result<Self, CryptoError> {
        let operation = EngineOperation::KeyImport;
        let name = spec.algorithm().name(Backend::WebCrypto)?;
        let hash = spec.algorithm().hash().name(Backend::WebCrypto)?;
        let algorithm = object(
            &[
                ("name", JsValue::from_str(name)),
                ("hash", JsValue::from_str(hash)),
            ],
            operation,
        )?;
        let usages = js_sys::Array::of2(&"sign".into(), &"verify".into());

        let subtle = subtle_crypto(operation)?;
        let key = await_promise(
            subtle.import_key_with_object(
                "raw",
                &Uint8Array::from(spec.bytes()),
                &algorithm,
                false,
                &usages,
            ),
            operation,
        )
        .await?;
        Ok(Self {
            algorithm: spec.algorithm(),
            size: spec.len(),
            key: key.into(),
        })
    }
}
