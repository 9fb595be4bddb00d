// Copyright (C) Microsoft Corporation. All rights reserved.

//! Bindings to `node:crypto`.

use futures::channel::oneshot;
use js_sys::Function;
use js_sys::Object;
use js_sys::Uint8Array;
use wasm_bindgen::prelude::*;

use super::*;

/// `RSA_PKCS1_PADDING`.
pub(crate) const RSA_PKCS1_PADDING: u32 = 1;
/// `RSA_PKCS1_PSS_PADDING`.
pub(crate) const RSA_PKCS1_PSS_PADDING: u32 = 6;

#[wasm_bindgen(module = "node:crypto")]
extern "C" {
    /// Handle to key material held by Node.
    pub(crate) type KeyObject;

    #[wasm_bindgen(catch, js_name = createPrivateKey)]
    pub(crate) fn create_private_key(options: &Object) -> Result<KeyObject, JsValue>;

    #[wasm_bindgen(catch, js_name = createPublicKey)]
    pub(crate) fn create_public_key(options: &Object) -> Result<KeyObject, JsValue>;

    #[wasm_bindgen(catch, js_name = createSecretKey)]
    pub(crate) fn create_secret_key(key: &Uint8Array) -> Result<KeyObject, JsValue>;

    #[wasm_bindgen(catch, js_name = sign)]
    fn sign_with_callback(
        algorithm: &JsValue,
        data: &Uint8Array,
        key: &Object,
        callback: &Function,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = verify)]
    fn verify_with_callback(
        algorithm: &JsValue,
        data: &Uint8Array,
        key: &Object,
        signature: &Uint8Array,
        callback: &Function,
    ) -> Result<(), JsValue>;

    /// Streaming HMAC object returned by `createHmac`.
    #[wasm_bindgen(js_name = Hmac)]
    pub(crate) type HmacStream;

    #[wasm_bindgen(catch, js_name = createHmac)]
    pub(crate) fn create_hmac(algorithm: &str, key: &KeyObject) -> Result<HmacStream, JsValue>;

    #[wasm_bindgen(method, catch)]
    pub(crate) fn update(this: &HmacStream, data: &Uint8Array) -> Result<HmacStream, JsValue>;

    #[wasm_bindgen(method, catch)]
    pub(crate) fn digest(this: &HmacStream) -> Result<Uint8Array, JsValue>;

    #[wasm_bindgen(catch, js_name = timingSafeEqual)]
    pub(crate) fn timing_safe_equal(a: &Uint8Array, b: &Uint8Array) -> Result<bool, JsValue>;
}

/// Runs a Node API that reports through an `(error, value)` callback.
async fn call_with_callback(
    invoke: impl FnOnce(&Function) -> Result<(), JsValue>,
) -> Result<JsValue, JsValue> {
    let (tx, rx) = oneshot::channel::<Result<JsValue, JsValue>>();
    let callback = Closure::once_into_js(move |error: JsValue, value: JsValue| {
        let result = if error.is_null() || error.is_undefined() {
            Ok(value)
        } else {
            Err(error)
        };
        if tx.send(result).is_err() {
            tracing::error!("Node crypto callback fired after its receiver was dropped");
        }
    });

    invoke(callback.unchecked_ref())?;
    rx.await
        .map_err(|_| JsValue::from_str("Node crypto callback was never invoked"))?
}

/// `crypto.sign(algorithm, data, key, callback)`.
pub(crate) async fn sign(algorithm: &JsValue, data: &[u8], key: &Object) -> Result<Vec<u8>, JsValue> {
    let data = Uint8Array::from(data);
    let signature =
        call_with_callback(|callback| sign_with_callback(algorithm, &data, key, callback)).await?;
    Ok(Uint8Array::new(&signature).to_vec())
}

/// `crypto.verify(algorithm, data, key, signature, callback)`.
pub(crate) async fn verify(
    algorithm: &JsValue,
    data: &[u8],
    key: &Object,
    signature: &[u8],
) -> Result<bool, JsValue> {
    let data = Uint8Array::from(data);
    let signature = Uint8Array::from(signature);
    let valid = call_with_callback(|callback| {
        verify_with_callback(algorithm, &data, key, &signature, callback)
    })
    .await?;
    Ok(valid.as_bool().unwrap_or(false))
}
