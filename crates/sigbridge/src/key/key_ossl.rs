// Copyright (C) Microsoft Corporation. All rights reserved.

//! OpenSSL key handles.

use openssl::pkey::*;

use super::*;
use crate::ossl::malformed_key;

/// Private key imported into OpenSSL.
#[derive(Clone)]
pub struct OsslPrivateKey {
    algorithm: AsymmetricKeyAlgorithm,
    size: usize,
    key: PKey<Private>,
}

impl OsslPrivateKey {
    /// Returns a reference to the internal OpenSSL PKey.
    pub(crate) fn pkey(&self) -> &PKeyRef<Private> {
        &self.key
    }
}

impl Key for OsslPrivateKey {
    fn size(&self) -> usize {
        self.size
    }
}

impl AsymmetricKey for OsslPrivateKey {
    fn algorithm(&self) -> AsymmetricKeyAlgorithm {
        self.algorithm
    }
}

impl SigningKey for OsslPrivateKey {}

impl AsymmetricKeyImportOp for OsslPrivateKey {
    type Spec = PrivateKeySpec;

    async fn import(spec: &PrivateKeySpec, scheme: SignatureScheme) -> Result<Self, CryptoError> {
        scheme.native_params(spec.algorithm(), Backend::OpenSsl)?;
        let material = spec.import_der()?;
        let key = PKey::private_key_from_pkcs8(&material.encoded).map_err(malformed_key(spec.encoding()))?;
        Ok(Self {
            algorithm: material.algorithm,
            size: material.size,
            key,
        })
    }
}

impl std::fmt::Debug for OsslPrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OsslPrivateKey")
            .field("algorithm", &self.algorithm)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

/// Public key imported into OpenSSL.
#[derive(Clone)]
pub struct OsslPublicKey {
    algorithm: AsymmetricKeyAlgorithm,
    size: usize,
    key: PKey<Public>,
}

impl OsslPublicKey {
    /// Returns a reference to the internal OpenSSL PKey.
    pub(crate) fn pkey(&self) -> &PKeyRef<Public> {
        &self.key
    }
}

impl Key for OsslPublicKey {
    fn size(&self) -> usize {
        self.size
    }
}

impl AsymmetricKey for OsslPublicKey {
    fn algorithm(&self) -> AsymmetricKeyAlgorithm {
        self.algorithm
    }
}

impl VerificationKey for OsslPublicKey {}

impl AsymmetricKeyImportOp for OsslPublicKey {
    type Spec = PublicKeySpec;

    async fn import(spec: &PublicKeySpec, scheme: SignatureScheme) -> Result<Self, CryptoError> {
        scheme.native_params(spec.algorithm(), Backend::OpenSsl)?;
        let material = spec.import_der()?;
        let key = PKey::public_key_from_der(&material.encoded).map_err(malformed_key(spec.encoding()))?;
        Ok(Self {
            algorithm: material.algorithm,
            size: material.size,
            key,
        })
    }
}

impl std::fmt::Debug for OsslPublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OsslPublicKey")
            .field("algorithm", &self.algorithm)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}
