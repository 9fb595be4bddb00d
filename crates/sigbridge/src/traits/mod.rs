// Copyright (C) Microsoft Corporation. All rights reserved.

//! Capability wrappers over the operation traits.

mod hmac;
mod signer;
mod verifier;

pub use hmac::*;
pub use signer::*;
pub use verifier::*;

use super::*;
