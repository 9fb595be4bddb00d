// Copyright (C) Microsoft Corporation. All rights reserved.

use super::*;

/// Keyed digest algorithm.
///
/// Each variant carries a minimum key length equal to its digest size. Keys
/// below it are rejected on every backend, whether or not the engine itself
/// would accept them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HmacAlgorithm {
    /// HMAC-SHA1, 20-byte minimum key.
    Sha1,
    /// HMAC-SHA256, 32-byte minimum key.
    Sha256,
    /// HMAC-SHA512, 64-byte minimum key.
    Sha512,
}

impl HmacAlgorithm {
    /// Underlying hash.
    pub const fn hash(self) -> HashAlgorithm {
        match self {
            HmacAlgorithm::Sha1 => HashAlgorithm::Sha1,
            HmacAlgorithm::Sha256 => HashAlgorithm::Sha256,
            HmacAlgorithm::Sha512 => HashAlgorithm::Sha512,
        }
    }

    /// Smallest accepted key, in bytes.
    pub const fn min_key_len(self) -> usize {
        match self {
            HmacAlgorithm::Sha1 => 20,
            HmacAlgorithm::Sha256 => 32,
            HmacAlgorithm::Sha512 => 64,
        }
    }

    /// MAC size in bytes.
    pub const fn output_len(self) -> usize {
        self.hash().output_len()
    }

    /// Native algorithm name on `backend`.
    ///
    /// All backends call the construction `HMAC` and parameterize it with
    /// the digest, so this fails only when the digest is unavailable.
    pub fn name(self, backend: Backend) -> Result<&'static str, CryptoError> {
        self.hash()
            .name(backend)
            .map_err(|_| unsupported(self, backend))?;
        Ok("HMAC")
    }

    /// Checks that a key imported for `key` with `len` bytes can be used
    /// with this algorithm.
    pub fn check_key(self, key: HmacAlgorithm, len: usize) -> Result<(), KeyError> {
        if key != self {
            tracing::error!("{key} key used with {self}");
            return Err(KeyError::HmacAlgorithmMismatch {
                key,
                algorithm: self,
            });
        }
        self.check_key_len(len)
    }

    /// Enforces the minimum key length.
    pub fn check_key_len(self, len: usize) -> Result<(), KeyError> {
        let min = self.min_key_len();
        if len < min {
            tracing::error!("{self} key too short: {len} < {min}");
            return Err(KeyError::TooShort {
                algorithm: self,
                min,
                actual: len,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for HmacAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            HmacAlgorithm::Sha1 => "HMAC-SHA1",
            HmacAlgorithm::Sha256 => "HMAC-SHA256",
            HmacAlgorithm::Sha512 => "HMAC-SHA512",
        })
    }
}
