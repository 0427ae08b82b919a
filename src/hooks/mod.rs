mod claim;
mod rpc;
mod use_account;
mod use_flow;

pub use claim::{claim_reward_transaction, wait_for_receipt};
pub use rpc::*;
pub use use_account::use_account;
pub use use_flow::{refresh_flow, use_flow};
