use dioxus::prelude::*;

use crate::format::group_thousands;
use crate::hooks::refresh_flow;
use crate::{FlowState, PRICE_DECIMALS};

#[component]
pub fn PriceCard() -> Element {
    let flow = use_context::<Signal<FlowState>>();
    let mut refreshing = use_signal(|| false);

    let flow_read = flow.read();
    let price = flow_read.price;
    let threshold = flow_read.threshold;
    let loading = flow_read.loading;
    drop(flow_read);

    let price_display = price
        .map(|p| format!("${:.2}", p as f64 / 10f64.powi(PRICE_DECIMALS as i32)))
        .unwrap_or_else(|| "—".to_string());
    let threshold_display = threshold
        .map(|t| format!("${}", group_thousands((t / 10u128.pow(PRICE_DECIMALS)) as u64)))
        .unwrap_or_else(|| "—".to_string());

    rsx! {
        div { class: "card",
            div { class: "flex items-center justify-between mb-3",
                h2 { class: "text-sm font-medium tracking-wide text-high", "ETH / USD Price" }
                span { class: "badge badge-live", "● Live" }
            }

            div { class: "flex items-center gap-3",
                if loading {
                    p { class: "text-low", "Loading price…" }
                } else {
                    p { class: "text-4xl font-bold tracking-tight text-cyan-400", "{price_display}" }
                }
                button {
                    class: "rounded-full elevated-control px-2 py-1 text-sm",
                    title: "Refresh price",
                    disabled: *refreshing.read(),
                    onclick: move |_| {
                        refreshing.set(true);
                        spawn(async move {
                            refresh_flow(flow).await;
                            refreshing.set(false);
                        });
                    },
                    if *refreshing.read() { "…" } else { "⟳" }
                }
            }

            p { class: "text-sm text-low mt-2",
                "Threshold: "
                span { class: "font-medium text-high", "{threshold_display}" }
            }
        }
    }
}
