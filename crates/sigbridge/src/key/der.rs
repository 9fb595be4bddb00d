// Copyright (C) Microsoft Corporation. All rights reserved.

//! PKCS8 and SPKI codecs for RSA, EC and Ed25519 keys.

use pkcs8::der::asn1::AnyRef;
use pkcs8::der::asn1::BitStringRef;
use pkcs8::der::asn1::OctetStringRef;
use pkcs8::der::Decode;
use pkcs8::der::Encode;
use pkcs8::ObjectIdentifier;
use zeroize::Zeroizing;

use super::*;

const RSA_ENCRYPTION_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");
const EC_PUBLIC_KEY_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");
const ED25519_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.101.112");

const ED25519_KEY_LEN: usize = 32;

fn malformed<E: std::fmt::Debug>(encoding: KeyEncoding) -> impl FnOnce(E) -> KeyError {
    move |error_stack| {
        tracing::error!(?error_stack);
        KeyError::Malformed { encoding }
    }
}

fn uint(bytes: &[u8], encoding: KeyEncoding) -> Result<pkcs1::UintRef<'_>, KeyError> {
    pkcs1::UintRef::new(bytes).map_err(malformed(encoding))
}

fn curve_of(algorithm: &spki::AlgorithmIdentifierRef<'_>, encoding: KeyEncoding) -> Result<EcCurve, KeyError> {
    let oid = algorithm
        .parameters_oid()
        .map_err(malformed(encoding))?;
    EcCurve::from_oid(&oid).ok_or_else(|| {
        tracing::error!("unsupported named curve {oid}");
        KeyError::Malformed { encoding }
    })
}

/// Decodes a PKCS8 `PrivateKeyInfo`.
pub(crate) fn decode_pkcs8(der: &[u8]) -> Result<PrivateKeyParts, KeyError> {
    let encoding = KeyEncoding::Pkcs8;
    let private_key_info = pkcs8::PrivateKeyInfo::from_der(der).map_err(malformed(encoding))?;
    let oid = private_key_info.algorithm.oid;

    if oid == RSA_ENCRYPTION_OID {
        let private_key = pkcs1::RsaPrivateKey::from_der(private_key_info.private_key)
            .map_err(malformed(encoding))?;
        return Ok(PrivateKeyParts::Rsa(RsaPrivateParts {
            n: private_key.modulus.as_bytes().to_vec(),
            e: private_key.public_exponent.as_bytes().to_vec(),
            d: Zeroizing::new(private_key.private_exponent.as_bytes().to_vec()),
            p: Zeroizing::new(private_key.prime1.as_bytes().to_vec()),
            q: Zeroizing::new(private_key.prime2.as_bytes().to_vec()),
            dp: Zeroizing::new(private_key.exponent1.as_bytes().to_vec()),
            dq: Zeroizing::new(private_key.exponent2.as_bytes().to_vec()),
            qi: Zeroizing::new(private_key.coefficient.as_bytes().to_vec()),
        }));
    }

    if oid == EC_PUBLIC_KEY_OID {
        let curve = curve_of(&private_key_info.algorithm, encoding)?;
        let private_key = sec1::EcPrivateKey::from_der(private_key_info.private_key)
            .map_err(malformed(encoding))?;
        if let Some(named_curve) = private_key.parameters.and_then(|p| p.named_curve()) {
            if named_curve != curve.oid() {
                tracing::error!("EC private key curve {named_curve} contradicts {curve}");
                return Err(KeyError::Malformed { encoding });
            }
        }
        let d = pad_scalar(private_key.private_key, curve.field_len())
            .ok_or(KeyError::Malformed { encoding })?;
        let point = match private_key.public_key {
            Some(point) => Some(split_point(curve, point).ok_or(KeyError::Malformed { encoding })?),
            None => None,
        };
        return Ok(PrivateKeyParts::Ec { curve, d, point });
    }

    if oid == ED25519_OID {
        let d = OctetStringRef::from_der(private_key_info.private_key).map_err(malformed(encoding))?;
        if d.as_bytes().len() != ED25519_KEY_LEN {
            tracing::error!("Ed25519 private key is {} bytes", d.as_bytes().len());
            return Err(KeyError::Malformed { encoding });
        }
        let x = match private_key_info.public_key {
            Some(x) if x.len() == ED25519_KEY_LEN => Some(x.to_vec()),
            Some(_) => return Err(KeyError::Malformed { encoding }),
            None => None,
        };
        return Ok(PrivateKeyParts::Ed25519 {
            d: Zeroizing::new(d.as_bytes().to_vec()),
            x,
        });
    }

    tracing::error!("unsupported private key algorithm {oid}");
    Err(KeyError::Malformed { encoding })
}

/// Encodes a PKCS8 `PrivateKeyInfo`, version 1.
pub(crate) fn encode_pkcs8(parts: &PrivateKeyParts) -> Result<Zeroizing<Vec<u8>>, KeyError> {
    let encoding = KeyEncoding::Pkcs8;
    match parts {
        PrivateKeyParts::Rsa(rsa) => {
            let private_key = pkcs1::RsaPrivateKey {
                modulus: uint(&rsa.n, encoding)?,
                public_exponent: uint(&rsa.e, encoding)?,
                private_exponent: uint(&rsa.d, encoding)?,
                prime1: uint(&rsa.p, encoding)?,
                prime2: uint(&rsa.q, encoding)?,
                exponent1: uint(&rsa.dp, encoding)?,
                exponent2: uint(&rsa.dq, encoding)?,
                coefficient: uint(&rsa.qi, encoding)?,
                other_prime_infos: None,
            };
            let private_key_der =
                Zeroizing::new(private_key.to_der().map_err(malformed(encoding))?);
            let alg_id = spki::AlgorithmIdentifier {
                oid: RSA_ENCRYPTION_OID,
                parameters: Some(AnyRef::NULL),
            };
            let private_key_info = pkcs8::PrivateKeyInfo::new(alg_id, &private_key_der);
            Ok(Zeroizing::new(
                private_key_info.to_der().map_err(malformed(encoding))?,
            ))
        }
        PrivateKeyParts::Ec { curve, d, point } => {
            let curve_oid = curve.oid();
            let public_point = point.as_ref().map(|(x, y)| join_point(x, y));
            let private_key = sec1::EcPrivateKey {
                private_key: d,
                parameters: None,
                public_key: public_point.as_deref(),
            };
            let private_key_der =
                Zeroizing::new(private_key.to_der().map_err(malformed(encoding))?);
            let alg_id = spki::AlgorithmIdentifier {
                oid: EC_PUBLIC_KEY_OID,
                parameters: Some(AnyRef::from(&curve_oid)),
            };
            let private_key_info = pkcs8::PrivateKeyInfo::new(alg_id, &private_key_der);
            Ok(Zeroizing::new(
                private_key_info.to_der().map_err(malformed(encoding))?,
            ))
        }
        PrivateKeyParts::Ed25519 { d, .. } => {
            let private_key_der = Zeroizing::new(
                OctetStringRef::new(d)
                    .and_then(|octets| octets.to_der())
                    .map_err(malformed(encoding))?,
            );
            let alg_id = spki::AlgorithmIdentifier {
                oid: ED25519_OID,
                parameters: None,
            };
            let private_key_info = pkcs8::PrivateKeyInfo::new(alg_id, &private_key_der);
            Ok(Zeroizing::new(
                private_key_info.to_der().map_err(malformed(encoding))?,
            ))
        }
    }
}

/// Decodes an X.509 `SubjectPublicKeyInfo`.
pub(crate) fn decode_spki(der: &[u8]) -> Result<PublicKeyParts, KeyError> {
    let encoding = KeyEncoding::Spki;
    let public_key_info = spki::SubjectPublicKeyInfoRef::from_der(der).map_err(malformed(encoding))?;
    let key = public_key_info
        .subject_public_key
        .as_bytes()
        .ok_or(KeyError::Malformed { encoding })?;
    let oid = public_key_info.algorithm.oid;

    if oid == RSA_ENCRYPTION_OID {
        let public_key = pkcs1::RsaPublicKey::from_der(key).map_err(malformed(encoding))?;
        return Ok(PublicKeyParts::Rsa {
            n: public_key.modulus.as_bytes().to_vec(),
            e: public_key.public_exponent.as_bytes().to_vec(),
        });
    }

    if oid == EC_PUBLIC_KEY_OID {
        let curve = curve_of(&public_key_info.algorithm, encoding)?;
        let (x, y) = split_point(curve, key).ok_or(KeyError::Malformed { encoding })?;
        return Ok(PublicKeyParts::Ec { curve, x, y });
    }

    if oid == ED25519_OID {
        if key.len() != ED25519_KEY_LEN {
            tracing::error!("Ed25519 public key is {} bytes", key.len());
            return Err(KeyError::Malformed { encoding });
        }
        return Ok(PublicKeyParts::Ed25519 { x: key.to_vec() });
    }

    tracing::error!("unsupported public key algorithm {oid}");
    Err(KeyError::Malformed { encoding })
}

/// Encodes an X.509 `SubjectPublicKeyInfo`.
pub(crate) fn encode_spki(parts: &PublicKeyParts) -> Result<Vec<u8>, KeyError> {
    let encoding = KeyEncoding::Spki;
    let curve_oid;
    let (algorithm, key) = match parts {
        PublicKeyParts::Rsa { n, e } => {
            let public_key = pkcs1::RsaPublicKey {
                modulus: uint(n, encoding)?,
                public_exponent: uint(e, encoding)?,
            };
            let alg_id = spki::AlgorithmIdentifier {
                oid: RSA_ENCRYPTION_OID,
                parameters: Some(AnyRef::NULL),
            };
            (alg_id, public_key.to_der().map_err(malformed(encoding))?)
        }
        PublicKeyParts::Ec { curve, x, y } => {
            curve_oid = curve.oid();
            let alg_id = spki::AlgorithmIdentifier {
                oid: EC_PUBLIC_KEY_OID,
                parameters: Some(AnyRef::from(&curve_oid)),
            };
            (alg_id, join_point(x, y))
        }
        PublicKeyParts::Ed25519 { x } => {
            let alg_id = spki::AlgorithmIdentifier {
                oid: ED25519_OID,
                parameters: None,
            };
            (alg_id, x.clone())
        }
    };

    let public_key_info = spki::SubjectPublicKeyInfoRef {
        algorithm,
        subject_public_key: BitStringRef::from_bytes(&key).map_err(malformed(encoding))?,
    };
    public_key_info.to_der().map_err(malformed(encoding))
}
