// Copyright (C) Microsoft Corporation. All rights reserved.

use pkcs8::ObjectIdentifier;

use super::*;

const SECP256R1_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");
const SECP384R1_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.34");
const SECP521R1_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.35");

/// Named elliptic curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EcCurve {
    /// NIST P-256 (secp256r1).
    P256,
    /// NIST P-384 (secp384r1).
    P384,
    /// NIST P-521 (secp521r1).
    P521,
}

impl EcCurve {
    /// Field element size in bytes.
    pub const fn field_len(self) -> usize {
        match self {
            EcCurve::P256 => 32,
            EcCurve::P384 => 48,
            EcCurve::P521 => 66,
        }
    }

    /// Named curve object identifier.
    pub const fn oid(self) -> ObjectIdentifier {
        match self {
            EcCurve::P256 => SECP256R1_OID,
            EcCurve::P384 => SECP384R1_OID,
            EcCurve::P521 => SECP521R1_OID,
        }
    }

    /// Curve for a named curve object identifier.
    pub fn from_oid(oid: &ObjectIdentifier) -> Option<Self> {
        [EcCurve::P256, EcCurve::P384, EcCurve::P521]
            .into_iter()
            .find(|curve| curve.oid() == *oid)
    }

    /// Native curve name on `backend`.
    pub fn name(self, backend: Backend) -> &'static str {
        match backend {
            Backend::OpenSsl | Backend::NodeCrypto => match self {
                EcCurve::P256 => "prime256v1",
                EcCurve::P384 => "secp384r1",
                EcCurve::P521 => "secp521r1",
            },
            Backend::WebCrypto => self.jwk_name(),
        }
    }

    /// `crv` member of a JSON Web Key.
    pub const fn jwk_name(self) -> &'static str {
        match self {
            EcCurve::P256 => "P-256",
            EcCurve::P384 => "P-384",
            EcCurve::P521 => "P-521",
        }
    }

    /// Curve for a JSON Web Key `crv` member.
    pub fn from_jwk_name(name: &str) -> Option<Self> {
        [EcCurve::P256, EcCurve::P384, EcCurve::P521]
            .into_iter()
            .find(|curve| curve.jwk_name() == name)
    }

    /// Longest DER encoded ECDSA signature over this curve.
    ///
    /// Each integer may need a leading zero byte on top of the field size.
    pub const fn max_der_signature_len(self) -> usize {
        let content = 2 * (2 + self.field_len() + 1);
        if content < 128 {
            content + 2
        } else {
            content + 3
        }
    }
}

impl std::fmt::Display for EcCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.jwk_name())
    }
}

/// Asymmetric key pair type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AsymmetricKeyAlgorithm {
    /// RSA of any modulus size.
    Rsa,
    /// Elliptic curve key over a named curve.
    Ec(EcCurve),
    /// Edwards-curve key for Ed25519.
    Ed25519,
}

impl AsymmetricKeyAlgorithm {
    /// Native key type name on `backend`.
    ///
    /// WebCrypto has no scheme-independent name for RSA keys and no
    /// Ed25519 support.
    pub fn name(self, backend: Backend) -> Result<&'static str, CryptoError> {
        match backend {
            Backend::OpenSsl => Ok(match self {
                AsymmetricKeyAlgorithm::Rsa => "RSA",
                AsymmetricKeyAlgorithm::Ec(_) => "EC",
                AsymmetricKeyAlgorithm::Ed25519 => "ED25519",
            }),
            Backend::WebCrypto => match self {
                AsymmetricKeyAlgorithm::Ec(_) => Ok("ECDSA"),
                AsymmetricKeyAlgorithm::Rsa | AsymmetricKeyAlgorithm::Ed25519 => {
                    Err(unsupported(self, backend))
                }
            },
            Backend::NodeCrypto => Ok(match self {
                AsymmetricKeyAlgorithm::Rsa => "rsa",
                AsymmetricKeyAlgorithm::Ec(_) => "ec",
                AsymmetricKeyAlgorithm::Ed25519 => "ed25519",
            }),
        }
    }

    /// Curve of an EC key.
    pub fn curve(self) -> Option<EcCurve> {
        match self {
            AsymmetricKeyAlgorithm::Ec(curve) => Some(curve),
            _ => None,
        }
    }
}

impl std::fmt::Display for AsymmetricKeyAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AsymmetricKeyAlgorithm::Rsa => f.write_str("RSA"),
            AsymmetricKeyAlgorithm::Ec(curve) => write!(f, "EC {curve}"),
            AsymmetricKeyAlgorithm::Ed25519 => f.write_str("Ed25519"),
        }
    }
}
