use dioxus::prelude::*;
use futures::StreamExt;

use crate::format::shorten;
use crate::WalletState;

#[cfg(feature = "web")]
const WALLET_STORAGE_KEY: &str = "smartflow:wallet-connected";

#[derive(Clone)]
enum WalletAction {
    Connect,
    Restore,
}

struct WalletSession {
    address: String,
    chain_id: u64,
}

#[component]
pub fn WalletButton() -> Element {
    let mut wallet = use_context::<Signal<WalletState>>();

    // Use coroutine for lifecycle-safe async operations
    let wallet_coro = use_coroutine(move |mut rx: UnboundedReceiver<WalletAction>| {
        async move {
            while let Some(action) = rx.next().await {
                match action {
                    WalletAction::Connect => match connect_injected(true).await {
                        Ok(session) => {
                            wallet.write().connected = true;
                            wallet.write().address = Some(session.address);
                            wallet.write().chain_id = Some(session.chain_id);
                            remember_connection(true);
                        }
                        Err(e) => {
                            tracing::error!("Wallet connection failed: {}", e);
                        }
                    },
                    WalletAction::Restore => {
                        if !was_connected() {
                            continue;
                        }
                        // eth_accounts restores an authorized session silently
                        match connect_injected(false).await {
                            Ok(session) => {
                                wallet.write().connected = true;
                                wallet.write().address = Some(session.address);
                                wallet.write().chain_id = Some(session.chain_id);
                            }
                            Err(e) => {
                                tracing::warn!("Session restore failed: {}", e);
                            }
                        }
                    }
                }
            }
        }
    });

    // Try to restore a previous session on mount
    use_hook(|| wallet_coro.send(WalletAction::Restore));

    let connect_wallet = move |_| {
        wallet_coro.send(WalletAction::Connect);
    };

    let disconnect_wallet = move |_| {
        wallet.write().connected = false;
        wallet.write().address = None;
        wallet.write().chain_id = None;
        remember_connection(false);
    };

    let wallet_read = wallet.read();

    if wallet_read.connected {
        let address = wallet_read.address.clone().unwrap_or_default();
        let short_address = shorten(Some(&address));

        rsx! {
            div { class: "flex items-center space-x-2",
                span { class: "text-sm text-gray-400 font-mono", "{short_address}" }
                button {
                    class: "btn btn-secondary text-sm",
                    onclick: disconnect_wallet,
                    "Disconnect"
                }
            }
        }
    } else {
        rsx! {
            button {
                class: "btn btn-primary",
                onclick: connect_wallet,
                "Connect Wallet"
            }
        }
    }
}

#[cfg(feature = "web")]
async fn connect_injected(prompt: bool) -> Result<WalletSession, String> {
    use js_sys::{Array, Reflect};
    use wasm_bindgen::prelude::*;

    let window = web_sys::window().ok_or("No window")?;

    let ethereum = Reflect::get(&window, &JsValue::from_str("ethereum"))
        .map_err(|_| "No injected wallet found")?;

    if ethereum.is_undefined() {
        // Point the user at a wallet; the dashboard stays read-only without one
        let _ = window.open_with_url("https://metamask.io/download/");
        return Err("No injected wallet found. Install one and refresh.".to_string());
    }

    let method = if prompt {
        "eth_requestAccounts"
    } else {
        "eth_accounts"
    };

    let accounts = request(&ethereum, method).await?;
    let accounts: Array = accounts.dyn_into().map_err(|_| "Accounts not an array")?;

    let address = accounts
        .get(0)
        .as_string()
        .filter(|a| !a.is_empty())
        .ok_or("No account authorized")?;

    let chain_hex = request(&ethereum, "eth_chainId")
        .await?
        .as_string()
        .ok_or("Chain id not a string")?;

    let chain_id = u64::from_str_radix(chain_hex.trim_start_matches("0x"), 16)
        .map_err(|e| e.to_string())?;

    Ok(WalletSession { address, chain_id })
}

/// Call the injected provider's request({ method }) entry point.
#[cfg(feature = "web")]
async fn request(
    ethereum: &wasm_bindgen::JsValue,
    method: &str,
) -> Result<wasm_bindgen::JsValue, String> {
    use js_sys::{Array, Function, Object, Promise, Reflect};
    use wasm_bindgen::prelude::*;

    let payload = Object::new();
    Reflect::set(&payload, &JsValue::from_str("method"), &JsValue::from_str(method))
        .map_err(|_| "Failed to build request")?;
    Reflect::set(&payload, &JsValue::from_str("params"), &Array::new())
        .map_err(|_| "Failed to build request")?;

    let request_fn = Reflect::get(ethereum, &JsValue::from_str("request"))
        .map_err(|_| "No request method")?;

    let request_fn: Function = request_fn
        .dyn_into()
        .map_err(|_| "request is not a function")?;

    let promise = request_fn
        .call1(ethereum, &payload)
        .map_err(|e| format!("Request call failed: {:?}", e))?;

    let promise: Promise = promise.dyn_into().map_err(|_| "Not a promise")?;

    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| format!("Request rejected: {:?}", e))
}

#[cfg(feature = "web")]
fn was_connected() -> bool {
    use gloo_storage::{LocalStorage, Storage};
    LocalStorage::get::<bool>(WALLET_STORAGE_KEY).unwrap_or(false)
}

#[cfg(feature = "web")]
fn remember_connection(connected: bool) {
    use gloo_storage::{LocalStorage, Storage};
    if connected {
        if let Err(e) = LocalStorage::set(WALLET_STORAGE_KEY, true) {
            tracing::warn!("Failed to persist wallet session: {}", e);
        }
    } else {
        LocalStorage::delete(WALLET_STORAGE_KEY);
    }
}

#[cfg(not(feature = "web"))]
async fn connect_injected(_prompt: bool) -> Result<WalletSession, String> {
    Err("Injected wallet only available in web mode".to_string())
}

#[cfg(not(feature = "web"))]
fn was_connected() -> bool {
    false
}

#[cfg(not(feature = "web"))]
fn remember_connection(_connected: bool) {}
