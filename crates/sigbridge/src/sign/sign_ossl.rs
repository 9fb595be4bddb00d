// Copyright (C) Microsoft Corporation. All rights reserved.

//! Signature generation and verification using OpenSSL.
//!
//! Each call creates a new `MdCtx`, initializes it with the key and the
//! scheme's digest, and applies the RSA padding parameters to the
//! underlying `PkeyCtx`. Ed25519 is initialized without a digest.
//!
//! # Supported Schemes
//!
//! - **RSASSA-PKCS1-v1_5**: MD5, SHA-1, SHA-256 and SHA-512
//! - **RSASSA-PSS**: SHA-1, SHA-256 and SHA-512, MGF1 over the message
//!   digest, caller-chosen salt length
//! - **ECDSA**: P-256, P-384 and P-521 with SHA-1, SHA-256 or SHA-512,
//!   signatures DER-encoded
//! - **Ed25519**: pure EdDSA, 64-byte signatures
//!
//! # Verification
//!
//! Signature lengths are checked against the scheme and key before the
//! engine runs; a bad length is [`CryptoError::MalformedSignature`]. Once
//! the engine has the signature, any rejection (including a DER decode
//! error inside OpenSSL) reports `Ok(false)`.

use openssl::md::MdRef;
use openssl::md_ctx::*;
use openssl::pkey_ctx::*;
use openssl::rsa::Padding;
use openssl::sign::RsaPssSaltlen;

use super::*;
use crate::ossl::engine_failure;

/// OpenSSL implementation of a [`SignatureScheme`].
///
/// Holds only the scheme. The key is supplied on every call and checked
/// against the scheme, so one `OsslSignAlgo` can drive any compatible key.
///
/// # Thread Safety
///
/// The type is `Copy` and carries no OpenSSL state; every operation builds
/// and drops its own `MdCtx`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OsslSignAlgo {
    scheme: SignatureScheme,
}

impl OsslSignAlgo {
    /// Creates the algorithm for `scheme`.
    ///
    /// # Arguments
    ///
    /// * `scheme` - Signature scheme to run.
    ///
    /// # Returns
    ///
    /// The algorithm, ready for [`SignOp::sign`] and [`VerifyOp::verify`].
    ///
    /// # Errors
    ///
    /// [`CryptoError::UnsupportedAlgorithm`] if OpenSSL cannot express
    /// `scheme` or lacks its digest.
    pub fn new(scheme: SignatureScheme) -> Result<Self, CryptoError> {
        scheme.name(Backend::OpenSsl)?;
        if let Some(hash) = scheme.hash() {
            crate::ossl::md(hash)?;
        }
        Ok(Self { scheme })
    }

    /// The scheme this algorithm implements.
    pub fn scheme(&self) -> SignatureScheme {
        self.scheme
    }

    fn md(&self) -> Result<Option<&'static MdRef>, CryptoError> {
        self.scheme.hash().map(crate::ossl::md).transpose()
    }

    fn new_engine(&self, operation: EngineOperation) -> Result<MdCtx, CryptoError> {
        MdCtx::new().map_err(engine_failure(operation))
    }

    fn configure_pkey_ctx<T>(
        &self,
        pkey_ctx: &mut PkeyCtxRef<T>,
        operation: EngineOperation,
    ) -> Result<(), CryptoError> {
        match self.scheme {
            SignatureScheme::RsaPkcs1(_) => pkey_ctx
                .set_rsa_padding(Padding::PKCS1)
                .map_err(engine_failure(operation)),
            SignatureScheme::RsaPss { hash, salt_len } => {
                let salt_len =
                    i32::try_from(salt_len).map_err(|_| unsupported(self.scheme, Backend::OpenSsl))?;
                pkey_ctx
                    .set_rsa_padding(Padding::PKCS1_PSS)
                    .map_err(engine_failure(operation))?;
                pkey_ctx
                    .set_rsa_pss_saltlen(RsaPssSaltlen::custom(salt_len))
                    .map_err(engine_failure(operation))?;
                pkey_ctx
                    .set_rsa_mgf1_md(crate::ossl::md(hash)?)
                    .map_err(engine_failure(operation))
            }
            SignatureScheme::Ecdsa(_) | SignatureScheme::EdDsa => Ok(()),
        }
    }
}

impl SignOp for OsslSignAlgo {
    type Key = OsslPrivateKey;

    async fn sign(&self, key: &OsslPrivateKey, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.scheme.check_key(key.algorithm())?;

        let mut ctx = self.new_engine(EngineOperation::Sign)?;
        let pkey_ctx = ctx
            .digest_sign_init(self.md()?, key.pkey())
            .map_err(engine_failure(EngineOperation::Sign))?;
        self.configure_pkey_ctx(pkey_ctx, EngineOperation::Sign)?;

        let mut signature = Vec::new();
        ctx.digest_sign_to_vec(data, &mut signature)
            .map_err(engine_failure(EngineOperation::Sign))?;
        Ok(signature)
    }
}

impl VerifyOp for OsslSignAlgo {
    type Key = OsslPublicKey;

    async fn verify(
        &self,
        key: &OsslPublicKey,
        data: &[u8],
        signature: &[u8],
    ) -> Result<bool, CryptoError> {
        self.scheme.check_key(key.algorithm())?;
        check_signature(self.scheme, key, signature)?;

        let mut ctx = self.new_engine(EngineOperation::Verify)?;
        let pkey_ctx = ctx
            .digest_verify_init(self.md()?, key.pkey())
            .map_err(engine_failure(EngineOperation::Verify))?;
        self.configure_pkey_ctx(pkey_ctx, EngineOperation::Verify)?;

        match ctx.digest_verify(data, signature) {
            Ok(valid) => Ok(valid),
            Err(openssl_error_stack) => {
                tracing::debug!(?openssl_error_stack, "signature rejected by OpenSSL");
                Ok(false)
            }
        }
    }
}
