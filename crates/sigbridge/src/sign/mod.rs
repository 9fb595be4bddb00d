// Copyright (C) Microsoft Corporation. All rights reserved.

//! Signature algorithms.
//!
//! [`SignAlgo`] is the active backend's implementation of [`SignOp`] and
//! [`VerifyOp`] for every [`SignatureScheme`]. It is constructed from a
//! scheme alone and builds a fresh engine for every call.

use super::*;

cfg_if::cfg_if! {
    if #[cfg(not(target_arch = "wasm32"))] {
        mod sign_ossl;
        pub use sign_ossl::*;
    } else if #[cfg(feature = "node")] {
        mod sign_node;
        pub use sign_node::*;
    } else {
        mod sign_web;
        pub use sign_web::*;
    }
}

define_type!(pub SignAlgo, OsslSignAlgo, WebSignAlgo, NodeSignAlgo);

/// Structural signature check against the active backend's encoding rules.
fn check_signature<K: VerificationKey>(
    scheme: SignatureScheme,
    key: &K,
    signature: &[u8],
) -> Result<(), CryptoError> {
    scheme.check_signature_len(key.algorithm(), key.size(), Backend::ACTIVE, signature.len())
}
