// Copyright (C) Microsoft Corporation. All rights reserved.

//! HMAC.
//!
//! Keys below [`HmacAlgorithm::min_key_len`] are refused when the
//! [`SecretKeySpec`] is built. Every operation also checks the key against
//! the algorithm it was imported for, so a key imported for HMAC-SHA1
//! cannot be used with HMAC-SHA512.

use super::*;

cfg_if::cfg_if! {
    if #[cfg(not(target_arch = "wasm32"))] {
        mod key_ossl;
        mod hmac_ossl;
        pub use key_ossl::*;
        pub use hmac_ossl::*;
    } else if #[cfg(feature = "node")] {
        mod key_node;
        mod hmac_node;
        pub use key_node::*;
        pub use hmac_node::*;
    } else {
        mod key_web;
        mod hmac_web;
        pub use key_web::*;
        pub use hmac_web::*;
    }
}

define_type!(pub SecretKey, OsslSecretKey, WebSecretKey, NodeSecretKey);
define_type!(pub HmacAlgo, OsslHmacAlgo, WebHmacAlgo, NodeHmacAlgo);
