use dioxus::prelude::*;

use crate::format::shorten;
use crate::hooks::fetch_chain_id;
use crate::{WalletState, EXPLORER_URL, RPC_URL, SMARTFLOW_ADDRESS};

#[component]
pub fn FooterCard() -> Element {
    let wallet = use_context::<Signal<WalletState>>();
    let mut rpc_chain_id = use_signal(|| None::<u64>);

    // Without a wallet the endpoint itself tells us which network this is
    let _resource = use_resource(move || async move {
        match fetch_chain_id(RPC_URL).await {
            Ok(id) => rpc_chain_id.set(Some(id)),
            Err(e) => tracing::error!("Failed to fetch chain id: {}", e),
        }
    });

    let wallet_read = wallet.read();
    let address = wallet_read.address.clone();
    let chain_id = wallet_read.chain_id;
    drop(wallet_read);

    let network = network_name(chain_id.or(*rpc_chain_id.read()));
    let contract_url = format!("{}/address/{}", EXPLORER_URL, SMARTFLOW_ADDRESS);

    rsx! {
        div { class: "card space-y-3",
            div { class: "flex justify-between items-center",
                span { class: "text-sm text-low", "Contract" }
                div { class: "flex items-center gap-2",
                    a {
                        href: "{contract_url}",
                        target: "_blank",
                        class: "text-cyan-400 hover:underline text-sm",
                        {shorten(Some(SMARTFLOW_ADDRESS))}
                    }
                    CopyButton { text: SMARTFLOW_ADDRESS.to_string() }
                }
            }

            div { class: "flex justify-between",
                span { class: "text-sm text-low", "Network" }
                span { class: "text-sm text-high", "{network}" }
            }

            div { class: "flex justify-between items-center",
                span { class: "text-sm text-low", "Your address" }
                if let Some(address) = address {
                    div { class: "flex items-center gap-2",
                        a {
                            href: format!("{}/address/{}", EXPLORER_URL, address),
                            target: "_blank",
                            class: "text-sm text-cyan-400 hover:underline",
                            {shorten(Some(&address))}
                        }
                        CopyButton { text: address.clone() }
                    }
                } else {
                    span { class: "text-sm text-high", "—" }
                }
            }
        }
    }
}

#[component]
fn CopyButton(text: String) -> Element {
    rsx! {
        button {
            class: "text-xs text-low hover:text-high transition",
            title: "Copy address",
            onclick: move |_| copy_to_clipboard(&text),
            "📋"
        }
    }
}

fn network_name(chain_id: Option<u64>) -> &'static str {
    match chain_id {
        Some(42_161) => "Arbitrum One",
        Some(1) => "Ethereum Mainnet",
        Some(_) => "Unknown network",
        None => "—",
    }
}

#[cfg(feature = "web")]
fn copy_to_clipboard(text: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.navigator().clipboard().write_text(text);
    }
}

#[cfg(not(feature = "web"))]
fn copy_to_clipboard(_text: &str) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_networks_resolve() {
        assert_eq!(network_name(Some(42_161)), "Arbitrum One");
        assert_eq!(network_name(Some(1)), "Ethereum Mainnet");
        assert_eq!(network_name(Some(5)), "Unknown network");
        assert_eq!(network_name(None), "—");
    }
}
