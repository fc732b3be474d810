/// Common swap structures shared across the quote, route-selection and
/// execution modules
///
/// The route array is deserialized exactly as the aggregator ships it and
/// treated as opaque beyond what display and execution need - venue-specific
/// semantics are never interpreted here.
use crate::config::DEFAULT_GAS_ESTIMATE;
use serde::{Deserialize, Deserializer, Serialize};

/// Custom deserializer for fields that can be either string or number
///
/// The aggregator emits amounts and gas values both ways depending on the
/// venue; everything is normalized to strings.
pub fn deserialize_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct StringOrNumber;

    impl<'de> Visitor<'de> for StringOrNumber {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or number")
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_owned())
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_f64<E>(self, value: f64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(StringOrNumber)
}

/// Custom deserializer for optional fields that can be either string or number
pub fn deserialize_optional_string_or_number<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct OptionalStringOrNumber;

    impl<'de> Visitor<'de> for OptionalStringOrNumber {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an optional string or number")
        }

        fn visit_none<E>(self) -> Result<Option<String>, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Option<String>, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_some<D2>(self, deserializer: D2) -> Result<Option<String>, D2::Error>
        where
            D2: Deserializer<'de>,
        {
            deserialize_string_or_number(deserializer).map(Some)
        }
    }

    deserializer.deserialize_option(OptionalStringOrNumber)
}

// =============================================================================
// AGGREGATOR ROUTE TYPES
// =============================================================================

/// Amounts attached to a route (exact-input routes carry `amount_out`,
/// exact-output routes carry `amount_in`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteAmountEstimate {
    #[serde(default, deserialize_with = "deserialize_optional_string_or_number")]
    pub amount_in: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_or_number")]
    pub amount_out: Option<String>,
}

/// One function call inside an execution instruction
///
/// `args` stays base64-encoded until execution; decoding early would force
/// this module to care about venue-specific payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub method_name: String,
    pub args: String,
    #[serde(deserialize_with = "deserialize_string_or_number")]
    pub gas: String,
    #[serde(deserialize_with = "deserialize_string_or_number")]
    pub deposit: String,
}

/// An action within a transaction; non-FunctionCall actions are ignored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionAction {
    #[serde(rename = "FunctionCall", default, skip_serializing_if = "Option::is_none")]
    pub function_call: Option<FunctionCall>,
}

/// The transaction payload of an execution instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearTransaction {
    pub receiver_id: String,
    #[serde(default)]
    pub actions: Vec<TransactionAction>,
}

/// One execution step of a route; unknown instruction kinds are skipped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionInstruction {
    #[serde(rename = "NearTransaction", default, skip_serializing_if = "Option::is_none")]
    pub near_transaction: Option<NearTransaction>,
}

/// One candidate route as ranked by the aggregator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapRoute {
    pub dex_id: String,
    #[serde(default)]
    pub estimated_amount: Option<RouteAmountEstimate>,
    /// Present only for slippage-bounded venues
    #[serde(default)]
    pub worst_case_amount: Option<RouteAmountEstimate>,
    #[serde(default)]
    pub has_slippage: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_optional_string_or_number")]
    pub gas_estimate: Option<String>,
    #[serde(default)]
    pub execution_instructions: Vec<ExecutionInstruction>,
}

impl SwapRoute {
    /// Estimated output in raw units, "0" when the route omits it
    pub fn estimated_amount_out(&self) -> &str {
        self.estimated_amount
            .as_ref()
            .and_then(|estimate| estimate.amount_out.as_deref())
            .unwrap_or("0")
    }

    /// Estimated required input in raw units, "0" when the route omits it
    pub fn estimated_amount_in(&self) -> &str {
        self.estimated_amount
            .as_ref()
            .and_then(|estimate| estimate.amount_in.as_deref())
            .unwrap_or("0")
    }

    pub fn gas_estimate_or_default(&self) -> String {
        self.gas_estimate
            .clone()
            .unwrap_or_else(|| DEFAULT_GAS_ESTIMATE.to_string())
    }
}

// =============================================================================
// QUOTE AND PARAMETER TYPES
// =============================================================================

/// A fully populated quote: the route list as returned by the aggregator
/// plus the derived display fields for the currently selected route
///
/// `available_routes` is never mutated after construction; switching routes
/// produces a new value via `select_route`.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapQuote {
    /// Raw input amount
    pub input_amount: String,
    /// Raw estimated output of the selected route
    pub output_amount: String,
    pub gas_estimate: String,
    /// USD value of the input, present only if the price lookup succeeded
    pub input_value_usd: Option<f64>,
    /// USD value of the output, present only if the price lookup succeeded
    pub output_value_usd: Option<f64>,
    /// Candidate routes, best-first as ranked by the aggregator
    pub available_routes: Vec<SwapRoute>,
    pub selected_route_index: usize,
}

impl SwapQuote {
    pub fn selected_route(&self) -> Option<&SwapRoute> {
        self.available_routes.get(self.selected_route_index)
    }
}

/// User-entered swap parameters, validated before any network call
#[derive(Debug, Clone, Default)]
pub struct SwapParams {
    pub token_in: String,
    pub token_out: String,
    /// Display amount as typed by the user
    pub amount_in: String,
    pub account_id: String,
    /// Percent, e.g. 1.0 for 1%
    pub slippage_tolerance: f64,
}
