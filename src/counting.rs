use serde_json::Value;

pub const WALLETCONNECT_ORIGIN: &str = "WalletConnect";

/// The `origin` of a transaction record, or `""` when it is missing or not a string
#[must_use]
pub fn origin_of(transaction: &Value) -> &str {
    transaction
        .get("origin")
        .and_then(Value::as_str)
        .unwrap_or("")
}

/// Count records whose origin contains `needle` (case-sensitive)
#[must_use]
pub fn count_matching_origin(transactions: &[Value], needle: &str) -> usize {
    transactions
        .iter()
        .filter(|tx| origin_of(tx).contains(needle))
        .count()
}

#[must_use]
pub fn count_walletconnect_transactions(transactions: &[Value]) -> usize {
    count_matching_origin(transactions, WALLETCONNECT_ORIGIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_origin_of() {
        assert_eq!(origin_of(&json!({"origin": "WalletConnect"})), "WalletConnect");
        assert_eq!(origin_of(&json!({"nonce": 4})), "");
        assert_eq!(origin_of(&json!({"origin": null})), "");
        assert_eq!(origin_of(&json!({"origin": 42})), "");
        assert_eq!(origin_of(&json!("not an object")), "");
    }

    #[test]
    fn test_count_empty() {
        assert_eq!(count_walletconnect_transactions(&[]), 0);
    }

    #[test]
    fn test_count_exact_and_substring() {
        let transactions = vec![
            json!({"origin": "WalletConnect"}),
            json!({"origin": "other"}),
            json!({"origin": "via WalletConnect bridge"}),
        ];

        assert_eq!(count_walletconnect_transactions(&transactions), 2);
    }

    #[test]
    fn test_count_is_case_sensitive() {
        let transactions = vec![
            json!({"origin": "walletconnect"}),
            json!({"origin": "WALLETCONNECT"}),
            json!({"origin": "via WalletConnect v1"}),
        ];

        assert_eq!(count_walletconnect_transactions(&transactions), 1);
    }

    #[test]
    fn test_count_skips_missing_origin() {
        let transactions = vec![
            json!({"safeTxHash": "0xabc"}),
            json!({"origin": null}),
            json!({"origin": "{\"url\":\"https://app.safe.global\",\"name\":\"WalletConnect\"}"}),
        ];

        assert_eq!(count_walletconnect_transactions(&transactions), 1);
    }

    #[test]
    fn test_count_matching_origin_custom_needle() {
        let transactions = vec![
            json!({"origin": "Transaction Builder"}),
            json!({"origin": "WalletConnect"}),
            json!({"origin": "Transaction Builder v2"}),
        ];

        assert_eq!(count_matching_origin(&transactions, "Transaction Builder"), 2);
        assert_eq!(count_matching_origin(&transactions, ""), 3);
    }
}
