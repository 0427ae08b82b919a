use dioxus::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

use super::rpc::{decode_uint, encode_call, eth_call, CallRequest};
use crate::{FlowState, RPC_URL, SMARTFLOW_ADDRESS};

/// Contract-wide reads refresh on this cadence; the price card can force one
/// in between.
const FLOW_POLL_MS: u32 = 30_000;

pub fn use_flow() -> Signal<FlowState> {
    let flow = use_context::<Signal<FlowState>>();

    // Track if polling has started to prevent multiple loops
    let polling_started = use_hook(|| Rc::new(Cell::new(false)));

    use_effect(move || {
        if !polling_started.get() {
            polling_started.set(true);

            spawn(async move {
                loop {
                    refresh_flow(flow).await;
                    gloo_timers::future::TimeoutFuture::new(FLOW_POLL_MS).await;
                }
            });
        }
    });

    flow
}

/// One round of the three contract-wide reads. A failed read keeps the value
/// from the previous round.
pub async fn refresh_flow(mut flow: Signal<FlowState>) {
    match fetch_threshold().await {
        Ok(value) => flow.write().threshold = Some(value),
        Err(e) => tracing::error!("Failed to fetch threshold: {}", e),
    }

    match fetch_latest_price().await {
        Ok(value) => flow.write().price = Some(value),
        Err(e) => tracing::error!("Failed to fetch price: {}", e),
    }

    match fetch_cooldown().await {
        Ok(value) => flow.write().cooldown = Some(value),
        Err(e) => tracing::error!("Failed to fetch cooldown: {}", e),
    }

    flow.write().loading = false;
}

async fn fetch_threshold() -> Result<u128, String> {
    let call = CallRequest {
        from: None,
        to: SMARTFLOW_ADDRESS.to_string(),
        data: encode_call("threshold()"),
    };
    decode_uint(&eth_call(RPC_URL, &call).await?)
}

async fn fetch_latest_price() -> Result<u128, String> {
    let call = CallRequest {
        from: None,
        to: SMARTFLOW_ADDRESS.to_string(),
        data: encode_call("getLatestPrice()"),
    };
    decode_uint(&eth_call(RPC_URL, &call).await?)
}

async fn fetch_cooldown() -> Result<u64, String> {
    let call = CallRequest {
        from: None,
        to: SMARTFLOW_ADDRESS.to_string(),
        data: encode_call("cooldown()"),
    };
    let value = decode_uint(&eth_call(RPC_URL, &call).await?)?;
    u64::try_from(value).map_err(|_| "Cooldown out of range".to_string())
}
