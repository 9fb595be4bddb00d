// Copyright (C) Microsoft Corporation. All rights reserved.

use std::future::Future;

use super::*;

/// Single-operation keyed digest.
pub trait MacOp {
    /// The secret key type.
    type Key: MacKey;

    /// Computes the MAC of `data`.
    fn mac(&self, key: &Self::Key, data: &[u8]) -> impl Future<Output = Result<Vec<u8>, CryptoError>>;

    /// Checks `mac` over `data` in constant time.
    ///
    /// A MAC of the wrong length is a mismatch, not an error.
    fn verify(
        &self,
        key: &Self::Key,
        data: &[u8],
        mac: &[u8],
    ) -> impl Future<Output = Result<bool, CryptoError>>;
}
