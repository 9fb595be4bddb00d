// Copyright (C) Microsoft Corporation. All rights reserved.

//! Shared OpenSSL plumbing.

use openssl::error::ErrorStack;
use openssl::hash::MessageDigest;
use openssl::md::Md;
use openssl::md::MdRef;

use super::*;

/// Logs an OpenSSL error stack and converts it.
pub(crate) fn engine_failure(operation: EngineOperation) -> impl FnOnce(ErrorStack) -> CryptoError {
    move |openssl_error_stack| {
        tracing::error!(?openssl_error_stack);
        CryptoError::EngineFailure {
            backend: Backend::OpenSsl,
            operation,
        }
    }
}

/// Logs an OpenSSL rejection of caller-supplied key material.
///
/// The pure-Rust decoders check structure only; OpenSSL also validates the
/// key itself, e.g. that an EC point lies on its curve.
pub(crate) fn malformed_key(encoding: KeyEncoding) -> impl FnOnce(ErrorStack) -> CryptoError {
    move |openssl_error_stack| {
        tracing::error!(?openssl_error_stack, "OpenSSL rejected {encoding} key");
        KeyError::Malformed { encoding }.into()
    }
}

pub(crate) fn message_digest(hash: HashAlgorithm) -> Result<MessageDigest, CryptoError> {
    let name = hash.name(Backend::OpenSsl)?;
    MessageDigest::from_name(name).ok_or_else(|| {
        tracing::error!("OpenSSL has no {name} digest");
        unsupported(hash, Backend::OpenSsl)
    })
}

pub(crate) fn md(hash: HashAlgorithm) -> Result<&'static MdRef, CryptoError> {
    let message_digest = message_digest(hash)?;
    Md::from_nid(message_digest.type_()).ok_or_else(|| {
        tracing::error!("OpenSSL has no EVP_MD for {hash}");
        unsupported(hash, Backend::OpenSsl)
    })
}
