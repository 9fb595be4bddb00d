// Copyright (C) Microsoft Corporation. All rights reserved.

//! Native engine identification.
//!
//! The backend is chosen when the crate is compiled; [`Backend::ACTIVE`] names
//! the one linked into this artifact. The other variants exist so that the
//! algorithm and key models can describe every engine's conventions from any
//! target.

use super::*;

cfg_if::cfg_if! {
    if #[cfg(not(target_arch = "wasm32"))] {
        const ACTIVE_BACKEND: Backend = Backend::OpenSsl;
    } else if #[cfg(feature = "node")] {
        const ACTIVE_BACKEND: Backend = Backend::NodeCrypto;
    } else {
        const ACTIVE_BACKEND: Backend = Backend::WebCrypto;
    }
}

/// Native cryptographic engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// OpenSSL, used on every non-wasm target.
    OpenSsl,
    /// The browser `crypto.subtle` API.
    WebCrypto,
    /// The `node:crypto` module.
    NodeCrypto,
}

/// Wire format of ECDSA signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureFormat {
    /// ASN.1 `SEQUENCE { r INTEGER, s INTEGER }`.
    Der,
    /// Fixed-width `r || s`, as defined by IEEE P1363.
    P1363,
}

/// Key encoding a backend consumes natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyFormat {
    /// PKCS8 for private keys, SPKI for public keys.
    Der,
    /// JSON Web Key.
    Jwk,
}

impl Backend {
    /// Backend compiled into this artifact.
    pub const ACTIVE: Backend = ACTIVE_BACKEND;

    /// Human readable backend name.
    pub fn name(self) -> &'static str {
        match self {
            Backend::OpenSsl => "OpenSSL",
            Backend::WebCrypto => "WebCrypto",
            Backend::NodeCrypto => "Node crypto",
        }
    }

    /// Whether importing an asymmetric key requires the signature scheme it
    /// will be used with.
    ///
    /// WebCrypto binds every `CryptoKey` to one algorithm at import time, so
    /// a key imported for RSA-PSS cannot sign with PKCS#1 v1.5.
    pub fn couples_key_import_with_scheme(self) -> bool {
        matches!(self, Backend::WebCrypto)
    }

    /// Encoding of ECDSA signatures produced and accepted by this backend.
    pub fn ecdsa_signature_format(self) -> SignatureFormat {
        match self {
            Backend::OpenSsl | Backend::NodeCrypto => SignatureFormat::Der,
            Backend::WebCrypto => SignatureFormat::P1363,
        }
    }

    /// Canonical key encoding handed to the engine.
    pub fn key_format(self) -> KeyFormat {
        match self {
            Backend::OpenSsl | Backend::NodeCrypto => KeyFormat::Der,
            Backend::WebCrypto => KeyFormat::Jwk,
        }
    }

    /// Canonical private key encoding.
    pub fn private_key_encoding(self) -> KeyEncoding {
        match self.key_format() {
            KeyFormat::Der => KeyEncoding::Pkcs8,
            KeyFormat::Jwk => KeyEncoding::Jwk,
        }
    }

    /// Canonical public key encoding.
    pub fn public_key_encoding(self) -> KeyEncoding {
        match self.key_format() {
            KeyFormat::Der => KeyEncoding::Spki,
            KeyFormat::Jwk => KeyEncoding::Jwk,
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
