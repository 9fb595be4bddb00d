// Copyright (C) Microsoft Corporation. All rights reserved.

use super::*;

/// Signature scheme.
///
/// A scheme fixes every parameter the engine needs beyond the key, and is
/// bound to exactly one key family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureScheme {
    /// RSASSA-PKCS1-v1_5.
    RsaPkcs1(HashAlgorithm),
    /// RSASSA-PSS with MGF1 over the same hash.
    RsaPss {
        /// Message and MGF1 digest.
        hash: HashAlgorithm,
        /// Salt length in bytes.
        salt_len: usize,
    },
    /// ECDSA over the key's curve.
    Ecdsa(HashAlgorithm),
    /// Pure Ed25519.
    EdDsa,
}

/// RSA-PSS parameters derived from a [`SignatureScheme::RsaPss`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PssParams {
    /// Message digest.
    pub hash: HashAlgorithm,
    /// MGF1 digest.
    pub mgf_hash: HashAlgorithm,
    /// Salt length in bytes.
    pub salt_len: usize,
    /// Trailer field, always 1 (`0xBC`).
    pub trailer_field: u8,
}

/// Everything a backend needs to drive its engine for one scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeSignatureParams {
    /// Native scheme name.
    pub name: &'static str,
    /// Native digest name, `None` for EdDSA.
    pub digest: Option<&'static str>,
    /// Present for RSA-PSS only.
    pub pss: Option<PssParams>,
    /// Native curve name, present for ECDSA only.
    pub named_curve: Option<&'static str>,
}

impl SignatureScheme {
    /// RSA-PSS with a salt as long as the digest.
    pub const fn rsa_pss(hash: HashAlgorithm) -> Self {
        SignatureScheme::RsaPss {
            hash,
            salt_len: hash.output_len(),
        }
    }

    /// Message digest, `None` for EdDSA.
    pub fn hash(self) -> Option<HashAlgorithm> {
        match self {
            SignatureScheme::RsaPkcs1(hash)
            | SignatureScheme::RsaPss { hash, .. }
            | SignatureScheme::Ecdsa(hash) => Some(hash),
            SignatureScheme::EdDsa => None,
        }
    }

    /// Whether keys of `algorithm` can be used with this scheme.
    pub fn key_compatible(self, algorithm: AsymmetricKeyAlgorithm) -> bool {
        matches!(
            (self, algorithm),
            (
                SignatureScheme::RsaPkcs1(_) | SignatureScheme::RsaPss { .. },
                AsymmetricKeyAlgorithm::Rsa
            ) | (SignatureScheme::Ecdsa(_), AsymmetricKeyAlgorithm::Ec(_))
                | (SignatureScheme::EdDsa, AsymmetricKeyAlgorithm::Ed25519)
        )
    }

    /// Fails with [`KeyError::SchemeMismatch`] unless `algorithm` fits.
    pub fn check_key(self, algorithm: AsymmetricKeyAlgorithm) -> Result<(), KeyError> {
        if !self.key_compatible(algorithm) {
            tracing::error!("{algorithm} key used with {self}");
            return Err(KeyError::SchemeMismatch {
                key: algorithm,
                scheme: self,
            });
        }
        Ok(())
    }

    /// Whether a key imported into a scheme-coupled engine for `self` can
    /// serve `other`.
    ///
    /// ECDSA keys are bound to their curve only and RSA-PSS keys to their
    /// hash; the remaining parameters are supplied per call.
    pub fn shares_import_with(self, other: SignatureScheme) -> bool {
        match (self, other) {
            (SignatureScheme::Ecdsa(_), SignatureScheme::Ecdsa(_)) => true,
            (SignatureScheme::RsaPss { hash: a, .. }, SignatureScheme::RsaPss { hash: b, .. }) => a == b,
            (imported, requested) => imported == requested,
        }
    }

    /// PSS parameters, for RSA-PSS only.
    pub fn pss_params(self) -> Option<PssParams> {
        match self {
            SignatureScheme::RsaPss { hash, salt_len } => Some(PssParams {
                hash,
                mgf_hash: hash,
                salt_len,
                trailer_field: 1,
            }),
            _ => None,
        }
    }

    /// Native scheme name on `backend`.
    pub fn name(self, backend: Backend) -> Result<&'static str, CryptoError> {
        match self {
            SignatureScheme::RsaPkcs1(hash) => {
                hash.name(backend).map_err(|_| unsupported(self, backend))?;
                Ok(match backend {
                    Backend::OpenSsl | Backend::NodeCrypto => match hash {
                        HashAlgorithm::Md5 => "md5WithRSAEncryption",
                        HashAlgorithm::Sha1 => "sha1WithRSAEncryption",
                        HashAlgorithm::Sha256 => "sha256WithRSAEncryption",
                        HashAlgorithm::Sha512 => "sha512WithRSAEncryption",
                    },
                    Backend::WebCrypto => "RSASSA-PKCS1-v1_5",
                })
            }
            SignatureScheme::RsaPss { hash, .. } => match (hash, backend) {
                (HashAlgorithm::Md5, _) => Err(unsupported(self, backend)),
                (_, Backend::OpenSsl | Backend::NodeCrypto) => Ok("RSASSA-PSS"),
                (_, Backend::WebCrypto) => Ok("RSA-PSS"),
            },
            SignatureScheme::Ecdsa(hash) => match (hash, backend) {
                (HashAlgorithm::Md5, _) => Err(unsupported(self, backend)),
                (_, Backend::WebCrypto) => Ok("ECDSA"),
                (HashAlgorithm::Sha1, _) => Ok("ecdsa-with-SHA1"),
                (HashAlgorithm::Sha256, _) => Ok("ecdsa-with-SHA256"),
                (HashAlgorithm::Sha512, _) => Ok("ecdsa-with-SHA512"),
            },
            SignatureScheme::EdDsa => match backend {
                Backend::OpenSsl | Backend::NodeCrypto => Ok("ED25519"),
                Backend::WebCrypto => Err(unsupported(self, backend)),
            },
        }
    }

    /// Resolves the full native parameter set for a key of `key_algorithm`.
    pub fn native_params(
        self,
        key_algorithm: AsymmetricKeyAlgorithm,
        backend: Backend,
    ) -> Result<NativeSignatureParams, CryptoError> {
        self.check_key(key_algorithm)?;

        let name = self.name(backend)?;
        let digest = self.hash().map(|hash| hash.name(backend)).transpose()?;
        let named_curve = match self {
            SignatureScheme::Ecdsa(_) => key_algorithm.curve().map(|curve| curve.name(backend)),
            _ => None,
        };

        let pss = self.pss_params();
        if let Some(pss) = pss {
            // OpenSSL takes the salt length as a C int, the JS engines as an
            // unsigned 32-bit integer.
            let representable = match backend {
                Backend::OpenSsl => i32::try_from(pss.salt_len).is_ok(),
                Backend::WebCrypto | Backend::NodeCrypto => u32::try_from(pss.salt_len).is_ok(),
            };
            if !representable {
                tracing::error!("{}-byte salt exceeds the {backend} engine limit", pss.salt_len);
                return Err(unsupported(self, backend));
            }
        }

        Ok(NativeSignatureParams {
            name,
            digest,
            pss,
            named_curve,
        })
    }

    /// Structural check of a signature before it reaches the engine.
    ///
    /// `key_size` is the modulus length for RSA and ignored otherwise.
    pub fn check_signature_len(
        self,
        key_algorithm: AsymmetricKeyAlgorithm,
        key_size: usize,
        backend: Backend,
        len: usize,
    ) -> Result<(), CryptoError> {
        let valid = match key_algorithm {
            AsymmetricKeyAlgorithm::Rsa => len == key_size,
            AsymmetricKeyAlgorithm::Ed25519 => len == 64,
            AsymmetricKeyAlgorithm::Ec(curve) => match backend.ecdsa_signature_format() {
                SignatureFormat::P1363 => len == 2 * curve.field_len(),
                SignatureFormat::Der => (8..=curve.max_der_signature_len()).contains(&len),
            },
        };

        if !valid {
            tracing::error!("{len}-byte signature rejected for {self} with {key_algorithm} key");
            return Err(CryptoError::MalformedSignature { scheme: self, len });
        }
        Ok(())
    }
}

impl std::fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignatureScheme::RsaPkcs1(hash) => write!(f, "RSA-PKCS1-v1_5 with {hash}"),
            SignatureScheme::RsaPss { hash, salt_len } => {
                write!(f, "RSA-PSS with {hash}, {salt_len}-byte salt")
            }
            SignatureScheme::Ecdsa(hash) => write!(f, "ECDSA with {hash}"),
            SignatureScheme::EdDsa => f.write_str("Ed25519"),
        }
    }
}
