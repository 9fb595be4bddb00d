// Copyright (C) Microsoft Corporation. All rights reserved.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::Deserialize;
use serde::Serialize;
use zeroize::Zeroize;
use zeroize::Zeroizing;

use super::*;

const KTY_RSA: &str = "RSA";
const KTY_EC: &str = "EC";
const KTY_OKP: &str = "OKP";
const CRV_ED25519: &str = "Ed25519";

/// JSON Web Key (RFC 7517), restricted to the members used by RSA, EC and
/// OKP signing keys.
///
/// Binary members hold base64url text without padding. Private members are
/// wiped when the value is dropped.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Jwk {
    /// Key type: `RSA`, `EC` or `OKP`.
    pub kty: String,
    /// Curve name for `EC` and `OKP` keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crv: Option<String>,
    /// Intended algorithm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alg: Option<String>,
    /// RSA modulus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,
    /// RSA public exponent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e: Option<String>,
    /// Private exponent or scalar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub d: Option<String>,
    /// RSA first prime.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p: Option<String>,
    /// RSA second prime.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    /// RSA first CRT exponent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dp: Option<String>,
    /// RSA second CRT exponent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dq: Option<String>,
    /// RSA CRT coefficient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qi: Option<String>,
    /// EC x coordinate or OKP public key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    /// EC y coordinate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
}

impl Drop for Jwk {
    fn drop(&mut self) {
        self.d.zeroize();
        self.p.zeroize();
        self.q.zeroize();
        self.dp.zeroize();
        self.dq.zeroize();
        self.qi.zeroize();
    }
}

impl std::fmt::Debug for Jwk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Jwk")
            .field("kty", &self.kty)
            .field("crv", &self.crv)
            .field("private", &self.is_private())
            .finish_non_exhaustive()
    }
}

fn encode(bytes: &[u8]) -> Option<String> {
    Some(URL_SAFE_NO_PAD.encode(bytes))
}

fn decode(member: &'static str, value: &Option<String>) -> Result<Vec<u8>, KeyError> {
    let Some(value) = value else {
        tracing::error!("JWK member {member} missing");
        return Err(KeyError::Malformed {
            encoding: KeyEncoding::Jwk,
        });
    };
    URL_SAFE_NO_PAD.decode(value).map_err(|error_stack| {
        tracing::error!(?error_stack, "JWK member {member} is not base64url");
        KeyError::Malformed {
            encoding: KeyEncoding::Jwk,
        }
    })
}

fn decode_secret(member: &'static str, value: &Option<String>) -> Result<Zeroizing<Vec<u8>>, KeyError> {
    decode(member, value).map(Zeroizing::new)
}

fn decode_coordinate(curve: EcCurve, member: &'static str, value: &Option<String>) -> Result<Vec<u8>, KeyError> {
    let coordinate = decode(member, value)?;
    if coordinate.len() != curve.field_len() {
        tracing::error!(
            "JWK member {member} is {} bytes, {curve} needs {}",
            coordinate.len(),
            curve.field_len()
        );
        return Err(KeyError::Malformed {
            encoding: KeyEncoding::Jwk,
        });
    }
    Ok(coordinate)
}

fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

impl Jwk {
    /// Parses a JSON Web Key.
    pub fn from_json(json: &str) -> Result<Self, KeyError> {
        serde_json::from_str(json).map_err(|error_stack| {
            tracing::error!(?error_stack);
            KeyError::Malformed {
                encoding: KeyEncoding::Jwk,
            }
        })
    }

    /// Serializes to compact JSON.
    pub fn to_json(&self) -> Result<String, KeyError> {
        serde_json::to_string(self).map_err(|error_stack| {
            tracing::error!(?error_stack);
            KeyError::Malformed {
                encoding: KeyEncoding::Jwk,
            }
        })
    }

    /// Whether private members are present.
    pub fn is_private(&self) -> bool {
        self.d.is_some()
    }

    fn curve(&self) -> Result<EcCurve, KeyError> {
        self.crv
            .as_deref()
            .and_then(EcCurve::from_jwk_name)
            .ok_or_else(|| {
                tracing::error!("unsupported JWK curve {:?}", self.crv);
                KeyError::Malformed {
                    encoding: KeyEncoding::Jwk,
                }
            })
    }

    fn check_okp_curve(&self) -> Result<(), KeyError> {
        if self.crv.as_deref() != Some(CRV_ED25519) {
            tracing::error!("unsupported OKP curve {:?}", self.crv);
            return Err(KeyError::Malformed {
                encoding: KeyEncoding::Jwk,
            });
        }
        Ok(())
    }

    pub(crate) fn from_public_parts(parts: &PublicKeyParts) -> Jwk {
        let mut jwk = Jwk::default();
        match parts {
            PublicKeyParts::Rsa { n, e } => {
                jwk.kty = KTY_RSA.to_string();
                jwk.n = encode(strip_leading_zeros(n));
                jwk.e = encode(strip_leading_zeros(e));
            }
            PublicKeyParts::Ec { curve, x, y } => {
                jwk.kty = KTY_EC.to_string();
                jwk.crv = Some(curve.jwk_name().to_string());
                jwk.x = encode(x);
                jwk.y = encode(y);
            }
            PublicKeyParts::Ed25519 { x } => {
                jwk.kty = KTY_OKP.to_string();
                jwk.crv = Some(CRV_ED25519.to_string());
                jwk.x = encode(x);
            }
        }
        jwk
    }

    /// Fails for EC and Ed25519 keys whose public half is unknown, since a
    /// private JWK must carry it.
    pub(crate) fn from_private_parts(parts: &PrivateKeyParts) -> Result<Jwk, KeyError> {
        let missing_public = || {
            tracing::error!("{} private key lacks its public key", parts.algorithm());
            KeyError::Malformed {
                encoding: KeyEncoding::Pkcs8,
            }
        };

        let mut jwk = Jwk::default();
        match parts {
            PrivateKeyParts::Rsa(rsa) => {
                jwk.kty = KTY_RSA.to_string();
                jwk.n = encode(strip_leading_zeros(&rsa.n));
                jwk.e = encode(strip_leading_zeros(&rsa.e));
                jwk.d = encode(&rsa.d);
                jwk.p = encode(&rsa.p);
                jwk.q = encode(&rsa.q);
                jwk.dp = encode(&rsa.dp);
                jwk.dq = encode(&rsa.dq);
                jwk.qi = encode(&rsa.qi);
            }
            PrivateKeyParts::Ec { curve, d, point } => {
                let (x, y) = point.as_ref().ok_or_else(missing_public)?;
                jwk.kty = KTY_EC.to_string();
                jwk.crv = Some(curve.jwk_name().to_string());
                jwk.x = encode(x);
                jwk.y = encode(y);
                jwk.d = encode(d);
            }
            PrivateKeyParts::Ed25519 { d, x } => {
                let x = x.as_ref().ok_or_else(missing_public)?;
                jwk.kty = KTY_OKP.to_string();
                jwk.crv = Some(CRV_ED25519.to_string());
                jwk.x = encode(x);
                jwk.d = encode(d);
            }
        }
        Ok(jwk)
    }

    pub(crate) fn to_public_parts(&self) -> Result<PublicKeyParts, KeyError> {
        match self.kty.as_str() {
            KTY_RSA => Ok(PublicKeyParts::Rsa {
                n: strip_leading_zeros(&decode("n", &self.n)?).to_vec(),
                e: strip_leading_zeros(&decode("e", &self.e)?).to_vec(),
            }),
            KTY_EC => {
                let curve = self.curve()?;
                Ok(PublicKeyParts::Ec {
                    curve,
                    x: decode_coordinate(curve, "x", &self.x)?,
                    y: decode_coordinate(curve, "y", &self.y)?,
                })
            }
            KTY_OKP => {
                self.check_okp_curve()?;
                Ok(PublicKeyParts::Ed25519 {
                    x: decode_ed25519("x", &self.x)?.to_vec(),
                })
            }
            kty => {
                tracing::error!("unsupported JWK key type {kty}");
                Err(KeyError::Malformed {
                    encoding: KeyEncoding::Jwk,
                })
            }
        }
    }

    /// RSA keys must carry the CRT members.
    pub(crate) fn to_private_parts(&self) -> Result<PrivateKeyParts, KeyError> {
        match self.to_public_parts()? {
            PublicKeyParts::Rsa { n, e } => Ok(PrivateKeyParts::Rsa(RsaPrivateParts {
                n,
                e,
                d: decode_secret("d", &self.d)?,
                p: decode_secret("p", &self.p)?,
                q: decode_secret("q", &self.q)?,
                dp: decode_secret("dp", &self.dp)?,
                dq: decode_secret("dq", &self.dq)?,
                qi: decode_secret("qi", &self.qi)?,
            })),
            PublicKeyParts::Ec { curve, x, y } => {
                let d = decode_secret("d", &self.d)?;
                let d = pad_scalar(&d, curve.field_len()).ok_or(KeyError::Malformed {
                    encoding: KeyEncoding::Jwk,
                })?;
                Ok(PrivateKeyParts::Ec {
                    curve,
                    d,
                    point: Some((x, y)),
                })
            }
            PublicKeyParts::Ed25519 { x } => Ok(PrivateKeyParts::Ed25519 {
                d: decode_ed25519("d", &self.d)?,
                x: Some(x),
            }),
        }
    }
}

fn decode_ed25519(member: &'static str, value: &Option<String>) -> Result<Zeroizing<Vec<u8>>, KeyError> {
    let bytes = decode_secret(member, value)?;
    if bytes.len() != 32 {
        tracing::error!("JWK member {member} is {} bytes, Ed25519 needs 32", bytes.len());
        return Err(KeyError::Malformed {
            encoding: KeyEncoding::Jwk,
        });
    }
    Ok(bytes)
}
