use dioxus::prelude::*;

use super::rpc::{decode_uint, encode_call, encode_call_address, eth_call, CallRequest};
use crate::{AccountState, WalletState, FLOW_TOKEN_ADDRESS, RPC_URL, SMARTFLOW_ADDRESS};

const ACCOUNT_POLL_MS: u32 = 5_000;

pub fn use_account() -> Signal<AccountState> {
    let mut account = use_context::<Signal<AccountState>>();
    let wallet = use_context::<Signal<WalletState>>();

    // Extract wallet address as a memo to avoid borrow conflicts
    let wallet_address = use_memo(move || wallet.read().address.clone());

    // Poll account data periodically while a wallet is connected
    use_future(move || async move {
        loop {
            let address = wallet_address();
            if let Some(address) = address {
                match fetch_account_data(&address).await {
                    Ok(data) => {
                        let mut account_mut = account.write();
                        account_mut.last_claim_at = Some(data.last_claim_at);
                        account_mut.balance = Some(data.balance);
                        account_mut.loading = false;
                    }
                    Err(e) => {
                        tracing::error!("Failed to fetch account state: {}", e);
                    }
                }
            } else {
                // Both reads are keyed by the address; clear them on disconnect
                let mut account_mut = account.write();
                account_mut.last_claim_at = None;
                account_mut.balance = None;
                account_mut.loading = false;
            }
            gloo_timers::future::TimeoutFuture::new(ACCOUNT_POLL_MS).await;
        }
    });

    account
}

struct AccountData {
    last_claim_at: u64,
    balance: f64,
}

async fn fetch_account_data(address: &str) -> Result<AccountData, String> {
    let last_claim_call = CallRequest {
        from: None,
        to: SMARTFLOW_ADDRESS.to_string(),
        data: encode_call_address("lastClaimAt(address)", address),
    };
    let last_claim_at = decode_uint(&eth_call(RPC_URL, &last_claim_call).await?)?;
    let last_claim_at =
        u64::try_from(last_claim_at).map_err(|_| "Timestamp out of range".to_string())?;

    let balance = fetch_token_balance(address).await?;

    Ok(AccountData {
        last_claim_at,
        balance,
    })
}

/// FLW balance in whole-token units.
async fn fetch_token_balance(address: &str) -> Result<f64, String> {
    let balance_call = CallRequest {
        from: None,
        to: FLOW_TOKEN_ADDRESS.to_string(),
        data: encode_call_address("balanceOf(address)", address),
    };
    let raw_balance = decode_uint(&eth_call(RPC_URL, &balance_call).await?)?;

    let decimals_call = CallRequest {
        from: None,
        to: FLOW_TOKEN_ADDRESS.to_string(),
        data: encode_call("decimals()"),
    };
    let decimals = decode_uint(&eth_call(RPC_URL, &decimals_call).await?)?;
    let decimals = u32::try_from(decimals).map_err(|_| "Decimals out of range".to_string())?;

    Ok(raw_balance as f64 / 10f64.powi(decimals as i32))
}
