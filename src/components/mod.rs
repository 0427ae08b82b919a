mod claim_card;
mod footer_card;
mod layout;
mod membership_card;
mod price_card;
mod wallet_button;

pub use claim_card::ClaimCard;
pub use footer_card::FooterCard;
pub use layout::Layout;
pub use membership_card::MembershipCard;
pub use price_card::PriceCard;
pub use wallet_button::WalletButton;
