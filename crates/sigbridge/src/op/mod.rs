// Copyright (C) Microsoft Corporation. All rights reserved.

//! Core operation traits.
//!
//! Every backend implements these traits for its native key handles and
//! algorithm types. The capability structs in [`traits`](crate::traits) are
//! thin wrappers that drive them.
//!
//! # Trait Categories
//!
//! - [`key`]: key markers and async import from key specs
//! - [`signing`]: one-shot signature creation and verification
//! - [`mac`]: one-shot keyed digests
//!
//! All operations return futures. OpenSSL completes them inline; the
//! JavaScript engines suspend on their promises or callbacks.

mod key;
mod mac;
mod signing;

pub use key::*;
pub use mac::*;
pub use signing::*;

use super::*;
