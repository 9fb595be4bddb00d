// Copyright (C) Microsoft Corporation. All rights reserved.

//! `crypto.subtle` access and algorithm objects.

use js_sys::Object;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use super::*;

/// Returns `SubtleCrypto` from the global scope, in windows and workers.
pub(crate) fn subtle_crypto(operation: EngineOperation) -> Result<web_sys::SubtleCrypto, CryptoError> {
    let global = js_sys::global();
    let crypto = Reflect::get(&global, &JsValue::from_str("crypto")).map_err(engine_failure(operation))?;
    if crypto.is_undefined() {
        tracing::error!("crypto is not available in this context");
        return Err(CryptoError::EngineFailure {
            backend: Backend::WebCrypto,
            operation,
        });
    }
    let crypto: web_sys::Crypto = crypto.dyn_into().map_err(engine_failure(operation))?;
    Ok(crypto.subtle())
}

/// Awaits a `SubtleCrypto` promise.
pub(crate) async fn await_promise(
    promise: Result<js_sys::Promise, JsValue>,
    operation: EngineOperation,
) -> Result<JsValue, CryptoError> {
    let promise = promise.map_err(engine_failure(operation))?;
    JsFuture::from(promise).await.map_err(engine_failure(operation))
}

/// Converts a JWK into the object `importKey("jwk", ...)` expects.
pub(crate) fn jwk_object(jwk: &Jwk) -> Result<Object, CryptoError> {
    let json = jwk.to_json()?;
    let value = js_sys::JSON::parse(&json).map_err(engine_failure(EngineOperation::KeyImport))?;
    Ok(Object::from(value))
}

/// Algorithm object for `importKey`.
///
/// RSA keys are bound to the scheme's hash; EC keys to their curve.
pub(crate) fn import_algorithm(params: &NativeSignatureParams) -> Result<Object, CryptoError> {
    let operation = EngineOperation::KeyImport;
    let mut members = vec![("name", JsValue::from_str(params.name))];
    match (params.named_curve, params.digest) {
        (Some(named_curve), _) => members.push(("namedCurve", JsValue::from_str(named_curve))),
        (None, Some(digest)) => members.push(("hash", JsValue::from_str(digest))),
        (None, None) => {}
    }
    object(&members, operation)
}

/// Algorithm object for `sign` and `verify`.
pub(crate) fn sign_algorithm(
    scheme: SignatureScheme,
    params: &NativeSignatureParams,
    operation: EngineOperation,
) -> Result<Object, CryptoError> {
    let mut members = vec![("name", JsValue::from_str(params.name))];
    if let Some(pss) = params.pss {
        let salt_len = u32::try_from(pss.salt_len).map_err(|_| unsupported(scheme, Backend::WebCrypto))?;
        members.push(("saltLength", JsValue::from(salt_len)));
    }
    if let (Some(_), Some(digest)) = (params.named_curve, params.digest) {
        members.push(("hash", JsValue::from_str(digest)));
    }
    object(&members, operation)
}
