use dioxus::prelude::*;

use crate::components::WalletButton;
use crate::route::Route;

#[component]
pub fn Layout() -> Element {
    rsx! {
        div { class: "min-h-screen",
            style: "background-color: var(--surface-base);",
            // Navigation
            nav { class: "border-b elevated-border backdrop-blur sticky top-0 z-50",
                style: "background-color: var(--surface-base);",
                div { class: "max-w-3xl mx-auto px-4 sm:px-6 lg:px-8",
                    div { class: "flex justify-between h-16",
                        // Logo
                        div { class: "flex items-center",
                            Link { to: Route::Home {}, class: "flex items-center space-x-2",
                                span { class: "text-2xl font-bold text-cyan-400", "SmartFlow" }
                            }
                        }

                        div { class: "hidden sm:flex sm:items-center",
                            span { class: "text-sm text-low", "Claim your daily rewards" }
                        }

                        // Wallet button
                        div { class: "flex items-center",
                            WalletButton {}
                        }
                    }
                }
            }

            // Main content
            main { class: "max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
                Outlet::<Route> {}
            }

            // Footer
            footer { class: "border-t elevated-border py-8 mt-auto",
                div { class: "max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 text-center text-low",
                    p { "SmartFlow - Rewards Hub on Arbitrum" }
                    p { class: "text-sm mt-2",
                        "Contract: "
                        code { class: "text-cyan-400", "{crate::SMARTFLOW_ADDRESS}" }
                    }
                }
            }
        }
    }
}
