use dioxus::prelude::*;

use crate::format::{format_remaining, format_timestamp};
use crate::hooks::{claim_reward_transaction, wait_for_receipt};
use crate::{AccountState, FlowState, WalletState, EXPLORER_URL};

#[component]
pub fn ClaimCard() -> Element {
    let wallet = use_context::<Signal<WalletState>>();
    let flow = use_context::<Signal<FlowState>>();
    let account = use_context::<Signal<AccountState>>();

    let mut now = use_signal(|| None::<u64>);
    let mut claiming = use_signal(|| false);
    let mut claim_result = use_signal(|| None::<Result<String, String>>);
    let mut confirmed = use_signal(|| None::<bool>);

    // 1s tick recomputing the countdown; torn down with the component
    use_future(move || async move {
        loop {
            now.set(Some(unix_now()));
            gloo_timers::future::TimeoutFuture::new(1_000).await;
        }
    });

    let wallet_read = wallet.read();
    let connected = wallet_read.connected;
    let address = wallet_read.address.clone();
    drop(wallet_read);

    let flow_read = flow.read();
    let price = flow_read.price;
    let threshold = flow_read.threshold;
    let cooldown = flow_read.cooldown;
    drop(flow_read);

    let last_claim_at = account.read().last_claim_at;

    // First tick hasn't fired yet
    let Some(now_secs) = *now.read() else {
        return rsx! {
            div { class: "card",
                button { class: "w-full controls-primary py-3 rounded-xl", disabled: true, "Loading…" }
            }
        };
    };

    let remaining = remaining_seconds(
        last_claim_at.unwrap_or(0),
        cooldown.unwrap_or(0),
        now_secs,
    );
    let pending = *claiming.read();
    let claimable = can_claim(connected, pending, remaining, price, threshold);

    let button_label = if !connected {
        "Connect wallet"
    } else if pending {
        "Claiming…"
    } else if remaining > 0 {
        "Not available yet"
    } else if !price_ready(price, threshold) {
        "Price is too high"
    } else {
        "🎁 Claim Your Reward"
    };

    rsx! {
        div { class: "card",
            div { class: "flex justify-between text-sm mb-6",
                div {
                    p { class: "text-xs uppercase tracking-wide text-low font-semibold", "Last claim" }
                    p { class: "font-medium text-high text-lg", {format_timestamp(last_claim_at)} }
                }
                div { class: "text-right",
                    p { class: "text-xs uppercase tracking-wide text-low font-semibold", "Next claim" }
                    p { class: "font-medium text-high text-lg", {format_remaining(remaining)} }
                }
            }

            button {
                class: "w-full controls-primary py-3 rounded-xl font-semibold transition-all hover:scale-[1.02]",
                disabled: !claimable,
                onclick: {
                    let address = address.clone();
                    move |_| {
                        if let Some(from) = address.clone() {
                            claiming.set(true);
                            claim_result.set(None);
                            confirmed.set(None);

                            spawn(async move {
                                let result = claim_reward_transaction(&from).await;

                                if let Ok(hash) = &result {
                                    let hash = hash.clone();
                                    spawn(async move {
                                        match wait_for_receipt(&hash).await {
                                            Ok(success) => confirmed.set(Some(success)),
                                            Err(e) => {
                                                tracing::error!("Receipt polling failed: {}", e);
                                            }
                                        }
                                    });
                                }

                                claim_result.set(Some(result));
                                claiming.set(false);
                            });
                        }
                    }
                },
                "{button_label}"
            }

            // Claim result
            if let Some(result) = claim_result.read().as_ref() {
                match result {
                    Ok(hash) => {
                        let explorer_url = format!("{}/tx/{}", EXPLORER_URL, hash);
                        match *confirmed.read() {
                            Some(false) => rsx! {
                                div { class: "mt-3 p-2 bg-red-500/10 border border-red-500/30 rounded text-sm",
                                    span { class: "text-red-400 mr-2", "Claim reverted" }
                                    a {
                                        href: "{explorer_url}",
                                        target: "_blank",
                                        class: "text-red-400 underline",
                                        "View transaction"
                                    }
                                }
                            },
                            Some(true) => rsx! {
                                div { class: "mt-3 p-2 bg-green-500/10 border border-green-500/30 rounded text-sm",
                                    span { class: "text-green-400 mr-2", "Reward claimed!" }
                                    a {
                                        href: "{explorer_url}",
                                        target: "_blank",
                                        class: "text-green-400 underline",
                                        "View transaction"
                                    }
                                }
                            },
                            None => rsx! {
                                div { class: "mt-3 p-2 bg-green-500/10 border border-green-500/30 rounded text-sm",
                                    span { class: "text-green-400 mr-2", "Waiting for confirmation…" }
                                    a {
                                        href: "{explorer_url}",
                                        target: "_blank",
                                        class: "text-green-400 underline",
                                        "View transaction"
                                    }
                                }
                            },
                        }
                    }
                    Err(e) => rsx! {
                        div { class: "mt-3 p-2 bg-red-500/10 border border-red-500/30 rounded text-sm text-red-400",
                            "{e}"
                        }
                    },
                }
            }
        }
    }
}

#[cfg(feature = "web")]
fn unix_now() -> u64 {
    (js_sys::Date::now() / 1000.0) as u64
}

#[cfg(not(feature = "web"))]
fn unix_now() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Cooldown gate: seconds until last_claim_at + cooldown has elapsed.
pub fn remaining_seconds(last_claim_at: u64, cooldown: u64, now: u64) -> u64 {
    last_claim_at.saturating_add(cooldown).saturating_sub(now)
}

fn price_ready(price: Option<u128>, threshold: Option<u128>) -> bool {
    matches!((price, threshold), (Some(p), Some(t)) if p <= t)
}

/// A claim goes through only with a wallet connected, no claim in flight, an
/// elapsed cooldown, and the price at or under the threshold. Unknown price
/// or threshold is never claimable.
pub fn can_claim(
    connected: bool,
    pending: bool,
    remaining: u64,
    price: Option<u128>,
    threshold: Option<u128>,
) -> bool {
    connected && !pending && remaining == 0 && price_ready(price, threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRICE_OK: Option<u128> = Some(250_000_000_000);
    const THRESHOLD: Option<u128> = Some(300_000_000_000);

    #[test]
    fn claimable_when_all_gates_pass() {
        assert!(can_claim(true, false, 0, PRICE_OK, THRESHOLD));
    }

    #[test]
    fn never_claimable_without_wallet() {
        assert!(!can_claim(false, false, 0, PRICE_OK, THRESHOLD));
        assert!(!can_claim(false, true, 500, None, None));
    }

    #[test]
    fn cooldown_blocks_claims() {
        assert!(!can_claim(true, false, 1, PRICE_OK, THRESHOLD));
        assert!(!can_claim(true, false, 86_400, PRICE_OK, THRESHOLD));
    }

    #[test]
    fn inflight_claim_blocks_another() {
        assert!(!can_claim(true, true, 0, PRICE_OK, THRESHOLD));
    }

    #[test]
    fn price_must_sit_at_or_under_threshold() {
        assert!(can_claim(true, false, 0, THRESHOLD, THRESHOLD));
        assert!(!can_claim(true, false, 0, Some(300_000_000_001), THRESHOLD));
    }

    #[test]
    fn unknown_reads_are_never_claimable() {
        assert!(!can_claim(true, false, 0, None, THRESHOLD));
        assert!(!can_claim(true, false, 0, PRICE_OK, None));
    }

    #[test]
    fn eligibility_is_pure() {
        let first = can_claim(true, false, 0, PRICE_OK, THRESHOLD);
        let second = can_claim(true, false, 0, PRICE_OK, THRESHOLD);
        assert_eq!(first, second);
    }

    #[test]
    fn remaining_counts_down_and_saturates() {
        assert_eq!(remaining_seconds(1_000, 600, 1_200), 400);
        assert_eq!(remaining_seconds(1_000, 600, 1_600), 0);
        assert_eq!(remaining_seconds(1_000, 600, 2_000), 0);
        assert_eq!(remaining_seconds(0, 0, 0), 0);
    }
}
