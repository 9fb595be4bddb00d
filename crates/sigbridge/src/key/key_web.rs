// Copyright (C) Microsoft Corporation. All rights reserved.

//! WebCrypto key handles.
//!
//! `importKey` binds a `CryptoKey` to an algorithm, so each handle records
//! the scheme it was imported for and refuses to be used with an
//! incompatible one.

use wasm_bindgen_futures::JsFuture;
use web_sys::CryptoKey;

use super::*;
use crate::js::engine_failure;
use crate::js::malformed_key;
use crate::js::web::*;

/// A rejected `importKey` promise means the engine refused the key itself,
/// and is reported against `encoding`, the caller's source encoding.
async fn import_crypto_key(
    jwk: &Jwk,
    encoding: KeyEncoding,
    params: &NativeSignatureParams,
    usage: &str,
) -> Result<CryptoKey, CryptoError> {
    let operation = EngineOperation::KeyImport;
    let subtle = subtle_crypto(operation)?;
    let key_data = jwk_object(jwk)?;
    let algorithm = import_algorithm(params)?;
    let promise = subtle
        .import_key_with_object(
            "jwk",
            &key_data,
            &algorithm,
            false,
            &js_sys::Array::of1(&usage.into()),
        )
        .map_err(engine_failure(operation))?;
    let key = JsFuture::from(promise)
        .await
        .map_err(malformed_key(encoding))?;
    Ok(key.into())
}

/// Private key imported into WebCrypto.
#[derive(Debug, Clone)]
pub struct WebPrivateKey {
    algorithm: AsymmetricKeyAlgorithm,
    size: usize,
    scheme: SignatureScheme,
    key: CryptoKey,
}

impl WebPrivateKey {
    pub(crate) fn crypto_key(&self) -> &CryptoKey {
        &self.key
    }

    /// Scheme the key was imported for.
    pub fn scheme(&self) -> SignatureScheme {
        self.scheme
    }
}

impl Key for WebPrivateKey {
    fn size(&self) -> usize {
        self.size
    }
}

impl AsymmetricKey for WebPrivateKey {
    fn algorithm(&self) -> AsymmetricKeyAlgorithm {
        self.algorithm
    }
}

impl SigningKey for WebPrivateKey {}

impl AsymmetricKeyImportOp for WebPrivateKey {
    type Spec = PrivateKeySpec;

    async fn import(spec: &PrivateKeySpec, scheme: SignatureScheme) -> Result<Self, CryptoError> {
        let params = scheme.native_params(spec.algorithm(), Backend::WebCrypto)?;
        let material = spec.import_jwk()?;
        let key = import_crypto_key(&material.encoded, spec.encoding(), &params, "sign").await?;
        Ok(Self {
            algorithm: material.algorithm,
            size: material.size,
            scheme,
            key,
        })
    }
}

/// Public key imported into WebCrypto.
#[derive(Debug, Clone)]
pub struct WebPublicKey {
    algorithm: AsymmetricKeyAlgorithm,
    size: usize,
    scheme: SignatureScheme,
    key: CryptoKey,
}

impl WebPublicKey {
    pub(crate) fn crypto_key(&self) -> &CryptoKey {
        &self.key
    }

    /// Scheme the key was imported for.
    pub fn scheme(&self) -> SignatureScheme {
        self.scheme
    }
}

impl Key for WebPublicKey {
    fn size(&self) -> usize {
        self.size
    }
}

impl AsymmetricKey for WebPublicKey {
    fn algorithm(&self) -> AsymmetricKeyAlgorithm {
        self.algorithm
    }
}

impl VerificationKey for WebPublicKey {}

impl AsymmetricKeyImportOp for WebPublicKey {
    type Spec = PublicKeySpec;

    async fn import(spec: &PublicKeySpec, scheme: SignatureScheme) -> Result<Self, CryptoError> {
        let params = scheme.native_params(spec.algorithm(), Backend::WebCrypto)?;
        let material = spec.import_jwk()?;
        let key = import_crypto_key(&material.encoded, spec.encoding(), &params, "verify").await?;
        Ok(Self {
            algorithm: material.algorithm,
            size: material.size,
            scheme,
            key,
        })
    }
}
