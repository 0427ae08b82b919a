use super::rpc::{encode_call, eth_call, fetch_transaction_receipt, CallRequest};
use crate::{RPC_URL, SMARTFLOW_ADDRESS};

const RECEIPT_POLL_MS: u32 = 2_000;
const RECEIPT_POLL_ATTEMPTS: u32 = 60;

/// Dry-run claimMyReward() for the sender, then submit it through the
/// injected wallet. Returns the transaction hash.
#[cfg(feature = "web")]
pub async fn claim_reward_transaction(from: &str) -> Result<String, String> {
    let call = CallRequest {
        from: Some(from.to_string()),
        to: SMARTFLOW_ADDRESS.to_string(),
        data: encode_call("claimMyReward()"),
    };

    // Simulation first, so a revert reason reaches the user without gas spent
    eth_call(RPC_URL, &call).await?;

    send_transaction_injected(&call).await
}

/// Poll until the claim lands. True on success, false on revert.
pub async fn wait_for_receipt(hash: &str) -> Result<bool, String> {
    for _ in 0..RECEIPT_POLL_ATTEMPTS {
        match fetch_transaction_receipt(RPC_URL, hash).await {
            Ok(Some(receipt)) => return Ok(receipt.status.as_deref() == Some("0x1")),
            Ok(None) => {}
            Err(e) => {
                tracing::error!("Receipt lookup failed: {}", e);
            }
        }
        gloo_timers::future::TimeoutFuture::new(RECEIPT_POLL_MS).await;
    }

    Err("Timed out waiting for the transaction receipt".to_string())
}

/// Submit a transaction via the injected provider's request() entry point.
#[cfg(feature = "web")]
async fn send_transaction_injected(call: &CallRequest) -> Result<String, String> {
    use js_sys::{Array, Object, Promise, Reflect};
    use wasm_bindgen::prelude::*;

    let window = web_sys::window().ok_or("No window")?;

    let ethereum = Reflect::get(&window, &JsValue::from_str("ethereum"))
        .map_err(|_| "No injected wallet found")?;

    if ethereum.is_undefined() {
        return Err("No injected wallet connected".to_string());
    }

    // Build { method: "eth_sendTransaction", params: [{ from, to, data }] }
    let tx = Object::new();
    if let Some(from) = &call.from {
        Reflect::set(&tx, &JsValue::from_str("from"), &JsValue::from_str(from))
            .map_err(|_| "Failed to build transaction")?;
    }
    Reflect::set(&tx, &JsValue::from_str("to"), &JsValue::from_str(&call.to))
        .map_err(|_| "Failed to build transaction")?;
    Reflect::set(&tx, &JsValue::from_str("data"), &JsValue::from_str(&call.data))
        .map_err(|_| "Failed to build transaction")?;

    let params = Array::new();
    params.push(&tx);

    let payload = Object::new();
    Reflect::set(
        &payload,
        &JsValue::from_str("method"),
        &JsValue::from_str("eth_sendTransaction"),
    )
    .map_err(|_| "Failed to build request")?;
    Reflect::set(&payload, &JsValue::from_str("params"), &params)
        .map_err(|_| "Failed to build request")?;

    let request_fn = Reflect::get(&ethereum, &JsValue::from_str("request"))
        .map_err(|_| "No request method")?;

    let request_fn: js_sys::Function = request_fn
        .dyn_into()
        .map_err(|_| "request is not a function")?;

    let promise = request_fn
        .call1(&ethereum, &payload)
        .map_err(|e| format!("Request call failed: {:?}", e))?;

    let promise: Promise = promise.dyn_into().map_err(|_| "Not a promise")?;

    let result = wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| format!("Transaction rejected: {:?}", e))?;

    result
        .as_string()
        .ok_or("Transaction hash not a string".to_string())
}

#[cfg(not(feature = "web"))]
pub async fn claim_reward_transaction(_from: &str) -> Result<String, String> {
    Err("Claiming only available in web mode".to_string())
}
