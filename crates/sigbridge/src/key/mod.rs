// Copyright (C) Microsoft Corporation. All rights reserved.

//! Key model.
//!
//! Key specs are immutable, engine-independent descriptions of key material.
//! Each spec keeps its source encoding and can be re-encoded in pure Rust for
//! any backend, so a PKCS8 key can be imported into WebCrypto and a JWK into
//! OpenSSL. Native handles ([`PrivateKey`], [`PublicKey`], [`SecretKey`]) are
//! obtained from specs through an async import, the only fallible step.

mod der;
mod jwk;
mod parts;

pub use jwk::*;
use parts::*;
use zeroize::Zeroizing;

use super::*;

cfg_if::cfg_if! {
    if #[cfg(not(target_arch = "wasm32"))] {
        mod key_ossl;
        pub use key_ossl::*;
    } else if #[cfg(feature = "node")] {
        mod key_node;
        pub use key_node::*;
    } else {
        mod key_web;
        pub use key_web::*;
    }
}

define_type!(pub PrivateKey, OsslPrivateKey, WebPrivateKey, NodePrivateKey);
define_type!(pub PublicKey, OsslPublicKey, WebPublicKey, NodePublicKey);

/// Key encodings understood by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEncoding {
    /// PKCS8 `PrivateKeyInfo` DER.
    Pkcs8,
    /// X.509 `SubjectPublicKeyInfo` DER.
    Spki,
    /// JSON Web Key.
    Jwk,
    /// Unstructured secret bytes.
    Raw,
}

impl std::fmt::Display for KeyEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            KeyEncoding::Pkcs8 => "PKCS8",
            KeyEncoding::Spki => "SPKI",
            KeyEncoding::Jwk => "JWK",
            KeyEncoding::Raw => "raw",
        })
    }
}

/// Key material in the canonical form of one backend.
#[derive(Clone, PartialEq, Eq)]
pub enum EncodedKey {
    /// PKCS8 or SPKI DER.
    Der {
        /// Which DER structure `bytes` holds.
        encoding: KeyEncoding,
        /// The DER encoding.
        bytes: Zeroizing<Vec<u8>>,
    },
    /// JSON Web Key.
    Jwk(Jwk),
}

impl EncodedKey {
    /// Encoding of the material.
    pub fn encoding(&self) -> KeyEncoding {
        match self {
            EncodedKey::Der { encoding, .. } => *encoding,
            EncodedKey::Jwk(_) => KeyEncoding::Jwk,
        }
    }
}

impl std::fmt::Debug for EncodedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EncodedKey::Der { encoding, bytes } => f
                .debug_struct("Der")
                .field("encoding", encoding)
                .field("len", &bytes.len())
                .finish_non_exhaustive(),
            EncodedKey::Jwk(jwk) => f.debug_tuple("Jwk").field(jwk).finish(),
        }
    }
}

/// Decoded key facts plus the material a backend imports.
pub(crate) struct ImportMaterial<T> {
    pub(crate) algorithm: AsymmetricKeyAlgorithm,
    /// Modulus length for RSA, field length otherwise.
    pub(crate) size: usize,
    pub(crate) encoded: T,
}

fn check_algorithm(
    expected: AsymmetricKeyAlgorithm,
    found: AsymmetricKeyAlgorithm,
) -> Result<(), KeyError> {
    if expected != found {
        tracing::error!("encoded key is {found}, spec says {expected}");
        return Err(KeyError::AlgorithmMismatch { expected, found });
    }
    Ok(())
}

#[derive(Clone, PartialEq, Eq)]
enum PrivateKeyMaterial {
    Pkcs8(Zeroizing<Vec<u8>>),
    Jwk(Jwk),
}

/// Private key description: an algorithm tag plus PKCS8 or JWK material.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKeySpec {
    algorithm: AsymmetricKeyAlgorithm,
    material: PrivateKeyMaterial,
}

impl PrivateKeySpec {
    /// Private key from PKCS8 DER.
    pub fn pkcs8(algorithm: AsymmetricKeyAlgorithm, der: impl Into<Vec<u8>>) -> Self {
        Self {
            algorithm,
            material: PrivateKeyMaterial::Pkcs8(Zeroizing::new(der.into())),
        }
    }

    /// Private key from a JSON Web Key.
    pub fn jwk(algorithm: AsymmetricKeyAlgorithm, jwk: Jwk) -> Self {
        Self {
            algorithm,
            material: PrivateKeyMaterial::Jwk(jwk),
        }
    }

    /// Algorithm tag.
    pub fn algorithm(&self) -> AsymmetricKeyAlgorithm {
        self.algorithm
    }

    /// Source encoding.
    pub fn encoding(&self) -> KeyEncoding {
        match self.material {
            PrivateKeyMaterial::Pkcs8(_) => KeyEncoding::Pkcs8,
            PrivateKeyMaterial::Jwk(_) => KeyEncoding::Jwk,
        }
    }

    fn decode(&self) -> Result<PrivateKeyParts, KeyError> {
        let parts = match &self.material {
            PrivateKeyMaterial::Pkcs8(bytes) => der::decode_pkcs8(bytes)?,
            PrivateKeyMaterial::Jwk(jwk) => jwk.to_private_parts()?,
        };
        check_algorithm(self.algorithm, parts.algorithm())?;
        Ok(parts)
    }

    fn der_from(&self, parts: &PrivateKeyParts) -> Result<Zeroizing<Vec<u8>>, KeyError> {
        match &self.material {
            PrivateKeyMaterial::Pkcs8(bytes) => Ok(bytes.clone()),
            PrivateKeyMaterial::Jwk(_) => der::encode_pkcs8(parts),
        }
    }

    fn jwk_from(&self, parts: &PrivateKeyParts) -> Result<Jwk, KeyError> {
        match &self.material {
            PrivateKeyMaterial::Jwk(jwk) => Ok(jwk.clone()),
            PrivateKeyMaterial::Pkcs8(_) => Jwk::from_private_parts(parts),
        }
    }

    fn encode_parts_for(&self, parts: &PrivateKeyParts, backend: Backend) -> Result<EncodedKey, KeyError> {
        Ok(match backend.key_format() {
            KeyFormat::Der => EncodedKey::Der {
                encoding: KeyEncoding::Pkcs8,
                bytes: self.der_from(parts)?,
            },
            KeyFormat::Jwk => EncodedKey::Jwk(self.jwk_from(parts)?),
        })
    }

    /// PKCS8 DER encoding of the key.
    pub fn to_der(&self) -> Result<Zeroizing<Vec<u8>>, KeyError> {
        let parts = self.decode()?;
        self.der_from(&parts)
    }

    /// JWK encoding of the key.
    pub fn to_jwk(&self) -> Result<Jwk, KeyError> {
        let parts = self.decode()?;
        self.jwk_from(&parts)
    }

    /// Canonical encoding for `backend`.
    pub fn encode_for(&self, backend: Backend) -> Result<EncodedKey, KeyError> {
        let parts = self.decode()?;
        self.encode_parts_for(&parts, backend)
    }

    #[cfg(any(not(target_arch = "wasm32"), feature = "node"))]
    pub(crate) fn import_der(&self) -> Result<ImportMaterial<Zeroizing<Vec<u8>>>, KeyError> {
        let parts = self.decode()?;
        Ok(ImportMaterial {
            algorithm: parts.algorithm(),
            size: parts.size(),
            encoded: self.der_from(&parts)?,
        })
    }

    #[cfg(all(target_arch = "wasm32", not(feature = "node")))]
    pub(crate) fn import_jwk(&self) -> Result<ImportMaterial<Jwk>, KeyError> {
        let parts = self.decode()?;
        Ok(ImportMaterial {
            algorithm: parts.algorithm(),
            size: parts.size(),
            encoded: self.jwk_from(&parts)?,
        })
    }
}

impl std::fmt::Debug for PrivateKeySpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKeySpec")
            .field("algorithm", &self.algorithm)
            .field("encoding", &self.encoding())
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PublicKeyMaterial {
    Spki(Vec<u8>),
    Jwk(Jwk),
}

/// Public key description: an algorithm tag plus SPKI or JWK material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKeySpec {
    algorithm: AsymmetricKeyAlgorithm,
    material: PublicKeyMaterial,
}

impl PublicKeySpec {
    /// Public key from SPKI DER.
    pub fn spki(algorithm: AsymmetricKeyAlgorithm, der: impl Into<Vec<u8>>) -> Self {
        Self {
            algorithm,
            material: PublicKeyMaterial::Spki(der.into()),
        }
    }

    /// Public key from a JSON Web Key. Private members, if any, are ignored.
    pub fn jwk(algorithm: AsymmetricKeyAlgorithm, jwk: Jwk) -> Self {
        Self {
            algorithm,
            material: PublicKeyMaterial::Jwk(jwk),
        }
    }

    /// Algorithm tag.
    pub fn algorithm(&self) -> AsymmetricKeyAlgorithm {
        self.algorithm
    }

    /// Source encoding.
    pub fn encoding(&self) -> KeyEncoding {
        match self.material {
            PublicKeyMaterial::Spki(_) => KeyEncoding::Spki,
            PublicKeyMaterial::Jwk(_) => KeyEncoding::Jwk,
        }
    }

    fn decode(&self) -> Result<PublicKeyParts, KeyError> {
        let parts = match &self.material {
            PublicKeyMaterial::Spki(bytes) => der::decode_spki(bytes)?,
            PublicKeyMaterial::Jwk(jwk) => jwk.to_public_parts()?,
        };
        check_algorithm(self.algorithm, parts.algorithm())?;
        Ok(parts)
    }

    fn der_from(&self, parts: &PublicKeyParts) -> Result<Vec<u8>, KeyError> {
        match &self.material {
            PublicKeyMaterial::Spki(bytes) => Ok(bytes.clone()),
            PublicKeyMaterial::Jwk(_) => der::encode_spki(parts),
        }
    }

    fn encode_parts_for(&self, parts: &PublicKeyParts, backend: Backend) -> Result<EncodedKey, KeyError> {
        Ok(match backend.key_format() {
            KeyFormat::Der => EncodedKey::Der {
                encoding: KeyEncoding::Spki,
                bytes: Zeroizing::new(self.der_from(parts)?),
            },
            KeyFormat::Jwk => EncodedKey::Jwk(Jwk::from_public_parts(parts)),
        })
    }

    /// SPKI DER encoding of the key.
    pub fn to_der(&self) -> Result<Vec<u8>, KeyError> {
        let parts = self.decode()?;
        self.der_from(&parts)
    }

    /// JWK encoding of the key, public members only.
    pub fn to_jwk(&self) -> Result<Jwk, KeyError> {
        Ok(Jwk::from_public_parts(&self.decode()?))
    }

    /// Canonical encoding for `backend`.
    pub fn encode_for(&self, backend: Backend) -> Result<EncodedKey, KeyError> {
        let parts = self.decode()?;
        self.encode_parts_for(&parts, backend)
    }

    #[cfg(any(not(target_arch = "wasm32"), feature = "node"))]
    pub(crate) fn import_der(&self) -> Result<ImportMaterial<Vec<u8>>, KeyError> {
        let parts = self.decode()?;
        Ok(ImportMaterial {
            algorithm: parts.algorithm(),
            size: parts.size(),
            encoded: self.der_from(&parts)?,
        })
    }

    #[cfg(all(target_arch = "wasm32", not(feature = "node")))]
    pub(crate) fn import_jwk(&self) -> Result<ImportMaterial<Jwk>, KeyError> {
        let parts = self.decode()?;
        Ok(ImportMaterial {
            algorithm: parts.algorithm(),
            size: parts.size(),
            encoded: Jwk::from_public_parts(&parts),
        })
    }
}

/// HMAC key bytes bound to an algorithm.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKeySpec {
    algorithm: HmacAlgorithm,
    key: Zeroizing<Vec<u8>>,
}

impl SecretKeySpec {
    /// Fails with [`KeyError::TooShort`] below `algorithm.min_key_len()`.
    pub fn new(algorithm: HmacAlgorithm, key: impl Into<Vec<u8>>) -> Result<Self, KeyError> {
        let key = Zeroizing::new(key.into());
        algorithm.check_key_len(key.len())?;
        Ok(Self { algorithm, key })
    }

    /// HMAC algorithm the key is bound to.
    pub fn algorithm(&self) -> HmacAlgorithm {
        self.algorithm
    }

    /// Always [`KeyEncoding::Raw`].
    pub fn encoding(&self) -> KeyEncoding {
        KeyEncoding::Raw
    }

    /// Key length in bytes.
    pub fn len(&self) -> usize {
        self.key.len()
    }

    /// Never true; empty keys are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }

    pub(crate) fn bytes(&self) -> &[u8] {
        &self.key
    }
}

impl std::fmt::Debug for SecretKeySpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretKeySpec")
            .field("algorithm", &self.algorithm)
            .field("len", &self.key.len())
            .finish_non_exhaustive()
    }
}
