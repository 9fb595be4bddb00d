// Copyright (C) Microsoft Corporation. All rights reserved.

//! Shared JavaScript plumbing for the WebCrypto and Node backends.

use js_sys::Object;
use js_sys::Reflect;
use wasm_bindgen::JsValue;

use super::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "node")] {
        pub(crate) mod node;
    } else {
        pub(crate) mod web;
    }
}

/// Logs a JavaScript exception or rejection and converts it.
pub(crate) fn engine_failure(operation: EngineOperation) -> impl FnOnce(JsValue) -> CryptoError {
    move |js_error| {
        tracing::error!(?js_error);
        CryptoError::EngineFailure {
            backend: Backend::ACTIVE,
            operation,
        }
    }
}

/// Logs an engine rejection of caller-supplied key material.
pub(crate) fn malformed_key(encoding: KeyEncoding) -> impl FnOnce(JsValue) -> CryptoError {
    move |js_error| {
        tracing::error!(?js_error, "{} rejected {encoding} key", Backend::ACTIVE);
        KeyError::Malformed { encoding }.into()
    }
}

/// Builds a plain object from `(name, value)` pairs.
pub(crate) fn object(
    members: &[(&str, JsValue)],
    operation: EngineOperation,
) -> Result<Object, CryptoError> {
    let object = Object::new();
    for (name, value) in members {
        Reflect::set(&object, &JsValue::from_str(name), value).map_err(engine_failure(operation))?;
    }
    Ok(object)
}
