// Copyright (C) Microsoft Corporation. All rights reserved.

use super::*;

/// Message digest used inside signature schemes and HMAC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// MD5. Only valid with RSA PKCS#1 v1.5 on OpenSSL and Node.
    Md5,
    /// SHA-1.
    Sha1,
    /// SHA-256.
    Sha256,
    /// SHA-512.
    Sha512,
}

impl HashAlgorithm {
    /// Digest size in bytes.
    pub const fn output_len(self) -> usize {
        match self {
            HashAlgorithm::Md5 => 16,
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha512 => 64,
        }
    }

    /// Native digest name on `backend`.
    pub fn name(self, backend: Backend) -> Result<&'static str, CryptoError> {
        match backend {
            Backend::OpenSsl => Ok(match self {
                HashAlgorithm::Md5 => "MD5",
                HashAlgorithm::Sha1 => "SHA1",
                HashAlgorithm::Sha256 => "SHA256",
                HashAlgorithm::Sha512 => "SHA512",
            }),
            Backend::WebCrypto => match self {
                HashAlgorithm::Md5 => Err(unsupported(self, backend)),
                HashAlgorithm::Sha1 => Ok("SHA-1"),
                HashAlgorithm::Sha256 => Ok("SHA-256"),
                HashAlgorithm::Sha512 => Ok("SHA-512"),
            },
            Backend::NodeCrypto => Ok(match self {
                HashAlgorithm::Md5 => "md5",
                HashAlgorithm::Sha1 => "sha1",
                HashAlgorithm::Sha256 => "sha256",
                HashAlgorithm::Sha512 => "sha512",
            }),
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            HashAlgorithm::Md5 => "MD5",
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha512 => "SHA-512",
        })
    }
}
