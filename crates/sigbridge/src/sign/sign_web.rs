// Copyright (C) Microsoft Corporation. All rights reserved.

//! Signature generation and verification using WebCrypto.
//!
//! ECDSA signatures are IEEE P1363 (`r || s`). A key can only serve the
//! scheme it was imported for, up to the ECDSA hash and the PSS salt length,
//! which WebCrypto takes per call.

use js_sys::Uint8Array;

use super::*;
use crate::js::web::*;

/// WebCrypto implementation of a [`SignatureScheme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebSignAlgo {
    scheme: SignatureScheme,
}

impl WebSignAlgo {
    /// Fails with [`CryptoError::UnsupportedAlgorithm`] if WebCrypto cannot
    /// express `scheme`.
    pub fn new(scheme: SignatureScheme) -> Result<Self, CryptoError> {
        scheme.name(Backend::WebCrypto)?;
        if let Some(hash) = scheme.hash() {
            hash.name(Backend::WebCrypto)?;
        }
        Ok(Self { scheme })
    }

    /// The scheme this algorithm implements.
    pub fn scheme(&self) -> SignatureScheme {
        self.scheme
    }

    fn check_key<K: AsymmetricKey>(&self, key: &K, imported: SignatureScheme) -> Result<(), CryptoError> {
        self.scheme.check_key(key.algorithm())?;
        if !imported.shares_import_with(self.scheme) {
            tracing::error!("key imported for {imported} used with {}", self.scheme);
            return Err(KeyError::SchemeMismatch {
                key: key.algorithm(),
                scheme: self.scheme,
            }
            .into());
        }
        Ok(())
    }

    fn new_engine(
        &self,
        key_algorithm: AsymmetricKeyAlgorithm,
        operation: EngineOperation,
    ) -> Result<(web_sys::SubtleCrypto, js_sys::Object), CryptoError> {
        let params = self.scheme.native_params(key_algorithm, Backend::WebCrypto)?;
        Ok((subtle_crypto(operation)?, sign_algorithm(self.scheme, &params, operation)?))
    }
}

impl SignOp for WebSignAlgo {
    type Key = WebPrivateKey;

    async fn sign(&self, key: &WebPrivateKey, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let operation = EngineOperation::Sign;
        self.check_key(key, key.scheme())?;

        let (subtle, algorithm) = self.new_engine(key.algorithm(), operation)?;
        let signature = await_promise(
            subtle.sign_with_object_and_buffer_source(
                &algorithm,
                key.crypto_key(),
                &Uint8Array::from(data),
            ),
            operation,
        )
        .await?;
        Ok(Uint8Array::new(&signature).to_vec())
    }
}

impl VerifyOp for WebSignAlgo {
    type Key = WebPublicKey;

    async fn verify(
        &self,
        key: &WebPublicKey,
        data: &[u8],
        signature: &[u8],
    ) -> Result<bool, CryptoError> {
        let operation = EngineOperation::Verify;
        self.check_key(key, key.scheme())?;
        check_signature(self.scheme, key, signature)?;

        let (subtle, algorithm) = self.new_engine(key.algorithm(), operation)?;
        let promise = subtle
            .verify_with_object_and_buffer_source_and_buffer_source(
                &algorithm,
                key.crypto_key(),
                &Uint8Array::from(signature),
                &Uint8Array::from(data),
            )
            .map_err(crate::js::engine_failure(operation))?;

        match wasm_bindgen_futures::JsFuture::from(promise).await {
            Ok(valid) => Ok(valid.as_bool().unwrap_or(false)),
            Err(js_error) => {
                tracing::debug!(?js_error, "signature rejected by WebCrypto");
                Ok(false)
            }
        }
    }
}
