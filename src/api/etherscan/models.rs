use num_bigint::BigUint;
use serde::Deserialize;
use serde_json::Value;
use serde_with::{serde_as, DefaultOnNull};
use thiserror::Error;

/// Message Etherscan pairs with a non-"1" status when an address simply has no transfers
pub const NO_TRANSACTIONS_MESSAGE: &str = "no transactions found";

/// Failure text used when the envelope carries no message of its own
pub const FALLBACK_ERROR_MESSAGE: &str = "Etherscan API error";

/// One ERC-20 transfer as returned by `action=tokentx`.
///
/// Fields are kept as the API sends them; missing or null fields decode as
/// empty strings. Amounts are parsed only when a record is displayed.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRecord {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub token_symbol: String,
    /// Raw fixed-point amount as a decimal string
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub value: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub token_decimal: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub from: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub block_number: String,
}

/// A displayed record whose amount fields are not integers
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AmountError {
    #[error("Invalid token amount '{0}'")]
    InvalidValue(String),
    #[error("Invalid token decimal '{0}'")]
    InvalidDecimal(String),
}

impl TransferRecord {
    /// Raw amount with arbitrary precision. A blank value counts as 0.
    pub fn raw_value(&self) -> Result<BigUint, AmountError> {
        let trimmed = self.value.trim();
        if trimmed.is_empty() {
            return Ok(BigUint::default());
        }
        trimmed
            .parse::<BigUint>()
            .map_err(|_| AmountError::InvalidValue(self.value.clone()))
    }

    /// Decimal count; some tokens leave it blank, which counts as 0
    pub fn decimal_count(&self) -> Result<u32, AmountError> {
        let trimmed = self.token_decimal.trim();
        if trimmed.is_empty() {
            return Ok(0);
        }
        trimmed
            .parse::<u32>()
            .map_err(|_| AmountError::InvalidDecimal(self.token_decimal.clone()))
    }
}

/// Raw response envelope shared by every Etherscan endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    /// Transfer list on success; on errors this may be null, a string or missing
    #[serde(default)]
    pub result: Option<Value>,
}

/// Interpreted envelope. Computed once by the client, never re-inspected downstream.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Status "1": the result list verbatim, possibly empty
    Success(Vec<TransferRecord>),
    /// Non-"1" status that only means the address has no transfers
    EmptySuccess,
    /// Upstream error or contradictory envelope, with the upstream message
    Failure(String),
}

/// Errors raised before an envelope could be interpreted
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    RequestError(String),
    #[error("HTTP Error ({0}): {1}")]
    HttpError(u16, String),
    #[error("Failed to parse response: {0}")]
    DeserializationError(String),
}

impl ApiEnvelope {
    /// Disambiguate the status/message/result triple.
    ///
    /// Only a malformed transfer list under status "1" is an `Err`; every
    /// other upstream signal maps to a `FetchOutcome`.
    pub fn interpret(self) -> Result<FetchOutcome, ApiError> {
        if self.status == "1" {
            let records = match self.result {
                None | Some(Value::Null) => Vec::new(),
                Some(value) => serde_json::from_value::<Vec<TransferRecord>>(value)
                    .map_err(|e| ApiError::DeserializationError(e.to_string()))?,
            };
            return Ok(FetchOutcome::Success(records));
        }

        let message = self.message.unwrap_or_default();
        let result_is_empty = match &self.result {
            None | Some(Value::Null) => true,
            Some(Value::Array(items)) => items.is_empty(),
            Some(_) => false,
        };

        if message.to_lowercase() == NO_TRANSACTIONS_MESSAGE && result_is_empty {
            return Ok(FetchOutcome::EmptySuccess);
        }

        if message.is_empty() {
            Ok(FetchOutcome::Failure(FALLBACK_ERROR_MESSAGE.to_string()))
        } else {
            Ok(FetchOutcome::Failure(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record_json(symbol: &str, block: &str) -> Value {
        json!({
            "blockNumber": block,
            "timeStamp": "1700000000",
            "hash": "0xabc",
            "from": "0x1111222233334444555566667777888899990000",
            "to": "0x612ab0d44e258170d0888779207ef68318d4cac9",
            "value": "1000000000000000000",
            "tokenName": "Celestial",
            "tokenSymbol": symbol,
            "tokenDecimal": "18",
        })
    }

    fn envelope(value: Value) -> ApiEnvelope {
        serde_json::from_value(value).expect("envelope should deserialize")
    }

    #[test]
    fn test_status_one_returns_records_verbatim() {
        let outcome = envelope(json!({
            "status": "1",
            "message": "OK",
            "result": [record_json("CEL", "200"), record_json("USDT", "199")],
        }))
        .interpret()
        .expect("should interpret");

        match outcome {
            FetchOutcome::Success(records) => {
                assert_eq!(records.len(), 2);
                assert_eq!(records[0].token_symbol, "CEL");
                assert_eq!(records[0].token_decimal, "18");
                assert_eq!(records[0].value, "1000000000000000000");
                assert_eq!(records[1].block_number, "199");
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_status_one_with_empty_list_is_success() {
        let outcome = envelope(json!({"status": "1", "message": "OK", "result": []}))
            .interpret()
            .expect("should interpret");
        assert_eq!(outcome, FetchOutcome::Success(Vec::new()));
    }

    #[test]
    fn test_no_transactions_found_is_empty_success() {
        for result in [json!([]), Value::Null] {
            let outcome = envelope(json!({
                "status": "0",
                "message": "No transactions found",
                "result": result,
            }))
            .interpret()
            .expect("should interpret");
            assert_eq!(outcome, FetchOutcome::EmptySuccess);
        }
    }

    #[test]
    fn test_no_transactions_found_without_result_field() {
        let outcome = envelope(json!({"status": "0", "message": "NO TRANSACTIONS FOUND"}))
            .interpret()
            .expect("should interpret");
        assert_eq!(outcome, FetchOutcome::EmptySuccess);
    }

    #[test]
    fn test_contradictory_envelope_fails_with_message() {
        let outcome = envelope(json!({
            "status": "0",
            "message": "No transactions found",
            "result": [record_json("CEL", "200")],
        }))
        .interpret()
        .expect("should interpret");
        assert_eq!(
            outcome,
            FetchOutcome::Failure("No transactions found".to_string())
        );
    }

    #[test]
    fn test_error_status_surfaces_upstream_message() {
        let outcome = envelope(json!({
            "status": "0",
            "message": "NOTOK",
            "result": "Invalid API Key",
        }))
        .interpret()
        .expect("should interpret");
        assert_eq!(outcome, FetchOutcome::Failure("NOTOK".to_string()));
    }

    #[test]
    fn test_error_status_without_message_uses_fallback() {
        let outcome = envelope(json!({"status": "0", "message": "", "result": []}))
            .interpret()
            .expect("should interpret");
        assert_eq!(
            outcome,
            FetchOutcome::Failure(FALLBACK_ERROR_MESSAGE.to_string())
        );

        let outcome = envelope(json!({"status": "0"}))
            .interpret()
            .expect("should interpret");
        assert_eq!(
            outcome,
            FetchOutcome::Failure(FALLBACK_ERROR_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_malformed_record_list_is_error() {
        let result = envelope(json!({
            "status": "1",
            "message": "OK",
            "result": "not a list",
        }))
        .interpret();
        assert!(matches!(result, Err(ApiError::DeserializationError(_))));
    }

    #[test]
    fn test_odd_trailing_record_does_not_fail_the_list() {
        let mut result: Vec<Value> = (0..7).map(|i| record_json("CEL", &format!("{}", 100 - i))).collect();
        let mut odd = record_json("ODD", "1");
        odd["value"] = json!("");
        odd["tokenDecimal"] = Value::Null;
        odd.as_object_mut().expect("object").remove("from");
        result.push(odd);

        let outcome = envelope(json!({"status": "1", "message": "OK", "result": result}))
            .interpret()
            .expect("should interpret");

        match outcome {
            FetchOutcome::Success(records) => {
                assert_eq!(records.len(), 8);
                let last = &records[7];
                assert_eq!(last.value, "");
                assert_eq!(last.token_decimal, "");
                assert_eq!(last.from, "");
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_amount_fields_count_as_zero() {
        let record = TransferRecord {
            value: " ".to_string(),
            token_decimal: String::new(),
            ..TransferRecord::default()
        };
        assert_eq!(record.raw_value(), Ok(BigUint::default()));
        assert_eq!(record.decimal_count(), Ok(0));
    }

    #[test]
    fn test_non_numeric_amount_is_error() {
        let record = TransferRecord {
            value: "12abc".to_string(),
            token_decimal: "eighteen".to_string(),
            ..TransferRecord::default()
        };
        assert_eq!(
            record.raw_value(),
            Err(AmountError::InvalidValue("12abc".to_string()))
        );
        assert_eq!(
            record.decimal_count(),
            Err(AmountError::InvalidDecimal("eighteen".to_string()))
        );
    }
}
