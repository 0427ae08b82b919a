use dioxus::prelude::*;

use crate::{AccountState, WalletState};

/// Membership brackets over the FLW balance. Ranges are contiguous over whole
/// balances and the top tier is unbounded.
pub struct Tier {
    pub name: &'static str,
    pub min: f64,
    pub max: Option<f64>,
    pub accent: &'static str,
    pub icon: &'static str,
}

pub const TIERS: [Tier; 4] = [
    Tier { name: "Basic", min: 0.0, max: Some(19.0), accent: "text-yellow-400", icon: "🛡" },
    Tier { name: "Silver", min: 20.0, max: Some(49.0), accent: "text-yellow-100", icon: "⭐" },
    Tier { name: "Gold", min: 50.0, max: Some(99.0), accent: "text-lime-400", icon: "👑" },
    Tier { name: "Elite", min: 100.0, max: None, accent: "text-emerald-400", icon: "💎" },
];

/// First bracket containing the balance wins; anything unmatched falls back
/// to the lowest tier.
pub fn tier_for_balance(balance: f64) -> &'static Tier {
    TIERS
        .iter()
        .find(|t| balance >= t.min && t.max.map_or(true, |max| balance <= max))
        .unwrap_or(&TIERS[0])
}

#[component]
pub fn MembershipCard() -> Element {
    let wallet = use_context::<Signal<WalletState>>();
    let account = use_context::<Signal<AccountState>>();

    let connected = wallet.read().connected;
    let balance = account.read().balance;

    let flw = balance.unwrap_or(0.0);
    let tier = tier_for_balance(flw);

    // Progress toward the Elite floor; a sliver even at zero
    let progress = if flw <= 0.0 {
        3.0
    } else if flw >= 100.0 {
        100.0
    } else {
        flw.round()
    };

    let balance_display = if connected && balance.is_some() {
        format!("{:.0}", flw)
    } else {
        "—".to_string()
    };

    rsx! {
        div { class: "card",
            div { class: "flex items-center justify-between mb-6",
                div {
                    p { class: "text-sm uppercase tracking-wide text-low", "Membership level" }
                    div { class: "flex items-center gap-2 font-semibold text-lg p-2 {tier.accent}",
                        span { class: "text-3xl", "{tier.icon}" }
                        span { class: "pl-2 text-2xl", "{tier.name}" }
                    }
                }
                div { class: "text-right text-sm",
                    p { class: "font-extralight text-2xl text-high", "{balance_display}" }
                    p { class: "font-semibold text-high", "FLW" }
                }
            }

            // Progress bar
            div {
                div { class: "h-2 rounded bg-white/10",
                    div {
                        class: "h-2 rounded progress-fill",
                        style: "width: {progress}%;",
                    }
                }
                div { class: "flex justify-between text-xs pt-2",
                    span { class: "text-high", "0" }
                    span { class: "text-high", "100 FLW" }
                }
            }

            // Tier row
            div { class: "flex justify-between text-xs mt-4",
                for t in TIERS.iter() {
                    div {
                        key: "{t.name}",
                        class: if t.name == tier.name {
                            "flex flex-col items-center gap-1 opacity-100"
                        } else {
                            "flex flex-col items-center gap-1 opacity-40"
                        },
                        span { "{t.icon}" }
                        span { "{t.name}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_balances_resolve() {
        assert_eq!(tier_for_balance(0.0).name, "Basic");
        assert_eq!(tier_for_balance(19.0).name, "Basic");
        assert_eq!(tier_for_balance(20.0).name, "Silver");
        assert_eq!(tier_for_balance(49.0).name, "Silver");
        assert_eq!(tier_for_balance(50.0).name, "Gold");
        assert_eq!(tier_for_balance(99.0).name, "Gold");
        assert_eq!(tier_for_balance(100.0).name, "Elite");
        assert_eq!(tier_for_balance(10_000.0).name, "Elite");
    }

    #[test]
    fn every_whole_balance_has_exactly_one_tier() {
        for b in 0..=200u32 {
            let balance = f64::from(b);
            let matches = TIERS
                .iter()
                .filter(|t| balance >= t.min && t.max.map_or(true, |max| balance <= max))
                .count();
            assert_eq!(matches, 1, "balance {} matched {} tiers", b, matches);
        }
    }

    #[test]
    fn resolver_is_pure() {
        assert_eq!(tier_for_balance(42.0).name, tier_for_balance(42.0).name);
    }
}
