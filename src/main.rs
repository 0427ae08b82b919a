#![allow(non_snake_case)]

mod components;
mod format;
mod hooks;
mod pages;
mod route;

use dioxus::prelude::*;
use route::Route;

// Configuration
pub const SMARTFLOW_ADDRESS: &str = "0xE9628076ABbe13523e86A8A0DA557Ca085e273d5";
pub const FLOW_TOKEN_ADDRESS: &str = "0xb00C1FC2cc2bf408Aa431b7b8D8c6128F0E8CC48";
pub const RPC_URL: &str = "https://arb1.arbitrum.io/rpc";
pub const EXPLORER_URL: &str = "https://arbiscan.io";

// The price feed and the threshold carry 8 decimals (Chainlink convention)
pub const PRICE_DECIMALS: u32 = 8;

fn main() {
    #[cfg(feature = "web")]
    {
        tracing_wasm::set_as_global_default();
        dioxus::launch(App);
    }

    #[cfg(feature = "desktop")]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    // Global state providers
    use_context_provider(|| Signal::new(WalletState::default()));
    use_context_provider(|| Signal::new(FlowState::default()));
    use_context_provider(|| Signal::new(AccountState::default()));

    rsx! {
        Router::<Route> {}
    }
}

// Global state types
#[derive(Clone, Default, Debug)]
pub struct WalletState {
    pub connected: bool,
    pub address: Option<String>,
    pub chain_id: Option<u64>,
}

/// Contract-wide reads. USD values stay 1e8-scaled until display.
#[derive(Clone, Debug)]
pub struct FlowState {
    pub price: Option<u128>,     // getLatestPrice()
    pub threshold: Option<u128>, // threshold()
    pub cooldown: Option<u64>,   // cooldown(), seconds
    pub loading: bool,
}

impl Default for FlowState {
    fn default() -> Self {
        Self {
            price: None,
            threshold: None,
            cooldown: None,
            loading: true,
        }
    }
}

/// Reads keyed by the connected wallet. Cleared on disconnect.
#[derive(Clone, Debug)]
pub struct AccountState {
    pub last_claim_at: Option<u64>, // lastClaimAt(address), unix seconds
    pub balance: Option<f64>,       // FLW balance in whole-token units
    pub loading: bool,
}

impl Default for AccountState {
    fn default() -> Self {
        Self {
            last_claim_at: None,
            balance: None,
            loading: true,
        }
    }
}
