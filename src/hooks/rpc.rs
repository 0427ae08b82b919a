use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

#[derive(Serialize)]
pub struct RpcRequest {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'static str,
    pub params: Vec<serde_json::Value>,
}

#[derive(Deserialize, Debug)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<RpcError>,
}

#[derive(Deserialize, Debug)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

/// Parameter object for eth_call and eth_sendTransaction.
#[derive(Serialize, Clone, Debug, Default)]
pub struct CallRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    pub to: String,
    pub data: String,
}

#[derive(Deserialize, Debug)]
pub struct TxReceipt {
    pub status: Option<String>,
    #[serde(rename = "transactionHash")]
    pub transaction_hash: String,
    #[serde(rename = "blockNumber")]
    pub block_number: Option<String>,
}

/// Read-only contract call against the latest block.
pub async fn eth_call(rpc_url: &str, call: &CallRequest) -> Result<String, String> {
    let client = reqwest::Client::new();

    let request = RpcRequest {
        jsonrpc: "2.0",
        id: 1,
        method: "eth_call",
        params: vec![
            serde_json::to_value(call).map_err(|e| e.to_string())?,
            serde_json::json!("latest"),
        ],
    };

    let response = client
        .post(rpc_url)
        .json(&request)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let rpc_response: RpcResponse<String> = response
        .json()
        .await
        .map_err(|e| e.to_string())?;

    if let Some(error) = rpc_response.error {
        // Revert reasons surface here; pass them through verbatim
        return Err(error.message);
    }

    rpc_response
        .result
        .ok_or_else(|| "No result returned".to_string())
}

/// Fetch the chain id the RPC endpoint serves.
pub async fn fetch_chain_id(rpc_url: &str) -> Result<u64, String> {
    let client = reqwest::Client::new();

    let request = RpcRequest {
        jsonrpc: "2.0",
        id: 1,
        method: "eth_chainId",
        params: vec![],
    };

    let response = client
        .post(rpc_url)
        .json(&request)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let rpc_response: RpcResponse<String> = response
        .json()
        .await
        .map_err(|e| e.to_string())?;

    if let Some(error) = rpc_response.error {
        return Err(error.message);
    }

    let hex_id = rpc_response
        .result
        .ok_or_else(|| "No chain id returned".to_string())?;

    parse_hex_u64(&hex_id)
}

/// Receipt lookup; None while the transaction is still pending.
pub async fn fetch_transaction_receipt(
    rpc_url: &str,
    hash: &str,
) -> Result<Option<TxReceipt>, String> {
    let client = reqwest::Client::new();

    let request = RpcRequest {
        jsonrpc: "2.0",
        id: 1,
        method: "eth_getTransactionReceipt",
        params: vec![serde_json::json!(hash)],
    };

    let response = client
        .post(rpc_url)
        .json(&request)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let rpc_response: RpcResponse<TxReceipt> = response
        .json()
        .await
        .map_err(|e| e.to_string())?;

    if let Some(error) = rpc_response.error {
        return Err(error.message);
    }

    Ok(rpc_response.result)
}

// ============ ABI ENCODING ============

/// First 4 bytes of Keccak-256 over the canonical signature.
pub fn selector(signature: &str) -> [u8; 4] {
    let digest = Keccak256::digest(signature.as_bytes());
    [digest[0], digest[1], digest[2], digest[3]]
}

/// Calldata for a zero-argument function.
pub fn encode_call(signature: &str) -> String {
    format!("0x{}", hex::encode(selector(signature)))
}

/// Calldata for a single-address-argument function.
pub fn encode_call_address(signature: &str, address: &str) -> String {
    let addr = address.trim_start_matches("0x").to_lowercase();
    format!("0x{}{:0>64}", hex::encode(selector(signature)), addr)
}

/// Decode a single 32-byte unsigned word from an eth_call result.
pub fn decode_uint(result: &str) -> Result<u128, String> {
    let word = result.trim_start_matches("0x");
    if word.is_empty() {
        return Err("Empty call result".to_string());
    }
    if word.len() > 64 {
        return Err(format!("Unexpected result length: {}", word.len()));
    }

    // Feeds, timestamps and balances read here all fit in u128
    let trimmed = word.trim_start_matches('0');
    if trimmed.len() > 32 {
        return Err("Value exceeds u128".to_string());
    }
    if trimmed.is_empty() {
        return Ok(0);
    }

    u128::from_str_radix(trimmed, 16).map_err(|e| e.to_string())
}

pub fn parse_hex_u64(value: &str) -> Result<u64, String> {
    u64::from_str_radix(value.trim_start_matches("0x"), 16).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_match_known_erc20_values() {
        assert_eq!(selector("balanceOf(address)"), [0x70, 0xa0, 0x82, 0x31]);
        assert_eq!(selector("transfer(address,uint256)"), [0xa9, 0x05, 0x9c, 0xbb]);
    }

    #[test]
    fn zero_arg_calldata_is_just_the_selector() {
        assert_eq!(encode_call("decimals()"), "0x313ce567");
    }

    #[test]
    fn address_argument_is_left_padded() {
        let data = encode_call_address(
            "balanceOf(address)",
            "0xE9628076ABbe13523e86A8A0DA557Ca085e273d5",
        );
        assert_eq!(
            data,
            "0x70a08231000000000000000000000000e9628076abbe13523e86a8a0da557ca085e273d5"
        );
    }

    #[test]
    fn decodes_uint_words() {
        assert_eq!(
            decode_uint("0x0000000000000000000000000000000000000000000000000000000000000e78"),
            Ok(3704)
        );
        assert_eq!(decode_uint("0x0"), Ok(0));
    }

    #[test]
    fn rejects_oversized_and_empty_results() {
        assert!(decode_uint("0x").is_err());
        let oversized = format!("0x01{}", "00".repeat(16));
        assert!(decode_uint(&oversized).is_err());
    }

    #[test]
    fn parses_chain_ids() {
        assert_eq!(parse_hex_u64("0xa4b1"), Ok(42_161));
        assert_eq!(parse_hex_u64("0x1"), Ok(1));
    }
}
