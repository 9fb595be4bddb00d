// Copyright (C) Microsoft Corporation. All rights reserved.

use zeroize::Zeroizing;

use super::*;

/// Decoded public key components, big-endian and unpadded unless noted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PublicKeyParts {
    Rsa {
        n: Vec<u8>,
        e: Vec<u8>,
    },
    /// Coordinates are exactly `curve.field_len()` bytes.
    Ec {
        curve: EcCurve,
        x: Vec<u8>,
        y: Vec<u8>,
    },
    Ed25519 {
        x: Vec<u8>,
    },
}

impl PublicKeyParts {
    pub(crate) fn algorithm(&self) -> AsymmetricKeyAlgorithm {
        match self {
            PublicKeyParts::Rsa { .. } => AsymmetricKeyAlgorithm::Rsa,
            PublicKeyParts::Ec { curve, .. } => AsymmetricKeyAlgorithm::Ec(*curve),
            PublicKeyParts::Ed25519 { .. } => AsymmetricKeyAlgorithm::Ed25519,
        }
    }

    /// Modulus length for RSA, field length otherwise.
    pub(crate) fn size(&self) -> usize {
        match self {
            PublicKeyParts::Rsa { n, .. } => n.len(),
            PublicKeyParts::Ec { curve, .. } => curve.field_len(),
            PublicKeyParts::Ed25519 { x } => x.len(),
        }
    }
}

pub(crate) struct RsaPrivateParts {
    pub(crate) n: Vec<u8>,
    pub(crate) e: Vec<u8>,
    pub(crate) d: Zeroizing<Vec<u8>>,
    pub(crate) p: Zeroizing<Vec<u8>>,
    pub(crate) q: Zeroizing<Vec<u8>>,
    pub(crate) dp: Zeroizing<Vec<u8>>,
    pub(crate) dq: Zeroizing<Vec<u8>>,
    pub(crate) qi: Zeroizing<Vec<u8>>,
}

/// Decoded private key components.
///
/// The public half of EC and Ed25519 keys is optional in PKCS8, so it may be
/// missing here.
pub(crate) enum PrivateKeyParts {
    Rsa(RsaPrivateParts),
    Ec {
        curve: EcCurve,
        /// Left-padded to `curve.field_len()`.
        d: Zeroizing<Vec<u8>>,
        point: Option<(Vec<u8>, Vec<u8>)>,
    },
    Ed25519 {
        d: Zeroizing<Vec<u8>>,
        x: Option<Vec<u8>>,
    },
}

impl PrivateKeyParts {
    pub(crate) fn algorithm(&self) -> AsymmetricKeyAlgorithm {
        match self {
            PrivateKeyParts::Rsa(_) => AsymmetricKeyAlgorithm::Rsa,
            PrivateKeyParts::Ec { curve, .. } => AsymmetricKeyAlgorithm::Ec(*curve),
            PrivateKeyParts::Ed25519 { .. } => AsymmetricKeyAlgorithm::Ed25519,
        }
    }

    pub(crate) fn size(&self) -> usize {
        match self {
            PrivateKeyParts::Rsa(rsa) => rsa.n.len(),
            PrivateKeyParts::Ec { curve, .. } => curve.field_len(),
            PrivateKeyParts::Ed25519 { d, .. } => d.len(),
        }
    }
}

/// Splits an uncompressed SEC1 point into its coordinates.
pub(crate) fn split_point(curve: EcCurve, point: &[u8]) -> Option<(Vec<u8>, Vec<u8>)> {
    let field_len = curve.field_len();
    match point.split_first() {
        Some((&0x04, coordinates)) if coordinates.len() == 2 * field_len => {
            let (x, y) = coordinates.split_at(field_len);
            Some((x.to_vec(), y.to_vec()))
        }
        _ => None,
    }
}

/// Uncompressed SEC1 encoding of `(x, y)`.
pub(crate) fn join_point(x: &[u8], y: &[u8]) -> Vec<u8> {
    let mut point = Vec::with_capacity(1 + x.len() + y.len());
    point.push(0x04);
    point.extend_from_slice(x);
    point.extend_from_slice(y);
    point
}

/// Left-pads a big-endian scalar to `len` bytes.
pub(crate) fn pad_scalar(scalar: &[u8], len: usize) -> Option<Zeroizing<Vec<u8>>> {
    let scalar = match scalar.iter().position(|&b| b != 0) {
        Some(start) => &scalar[start..],
        None => &[],
    };
    if scalar.len() > len {
        return None;
    }
    let mut padded = Zeroizing::new(vec![0u8; len]);
    padded[len - scalar.len()..].copy_from_slice(scalar);
    Some(padded)
}
