// Copyright (C) Microsoft Corporation. All rights reserved.

//! OpenSSL HMAC key handle.

use openssl::pkey::*;

use super::*;
use crate::ossl::engine_failure;

/// HMAC key imported into OpenSSL.
#[derive(Clone)]
pub struct OsslSecretKey {
    algorithm: HmacAlgorithm,
    size: usize,
    key: PKey<Private>,
}

impl OsslSecretKey {
    /// Returns a reference to the internal OpenSSL PKey.
    pub(crate) fn pkey(&self) -> &PKeyRef<Private> {
        &self.key
    }
}

impl Key for OsslSecretKey {
    fn size(&self) -> usize {
        self.size
    }
}

impl MacKey for OsslSecretKey {
    fn algorithm(&self) -> HmacAlgorithm {
        self.algorithm
    }
}

impl SecretKeyImportOp for OsslSecretKey {
    async fn import(spec: &SecretKeySpec) -> Result<Self, CryptoError> {
        spec.algorithm().name(Backend::OpenSsl)?;
        let key = PKey::hmac(spec.bytes()).map_err(engine_failure(EngineOperation::KeyImport))?;
        Ok(Self {
            algorithm: spec.algorithm(),
            size: spec.len(),
            key,
        })
    }
}

impl std::fmt::Debug for OsslSecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OsslSecretKey")
            .field("algorithm", &self.algorithm)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}
