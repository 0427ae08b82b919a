use dioxus::prelude::*;

use crate::components::{ClaimCard, FooterCard, MembershipCard, PriceCard};
use crate::hooks::{use_account, use_flow};

#[component]
pub fn Home() -> Element {
    // Start the pollers; the cards read the shared state from context
    use_flow();
    use_account();

    rsx! {
        div { class: "flex flex-col gap-3 max-w-[700px] mx-auto",
            PriceCard {}
            ClaimCard {}
            MembershipCard {}
            FooterCard {}
        }
    }
}
