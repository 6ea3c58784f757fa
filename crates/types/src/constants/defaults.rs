//! Global defaults for the backend protocol and quote derivation

/// Production API host used when no base URL is configured
pub const DEFAULT_BASE_URL: &str = "https://api.stableflow.ai";

/// Referral tag attached to every relay quote request
pub const REFERRAL_ID: &str = "stableflow";

/// Project tag reported with post-send telemetry
pub const PROJECT_TAG: &str = "stableflow-sdk";

/// Environment variable consulted for the API bearer token
pub const BEARER_TOKEN_ENV: &str = "STABLEFLOW_BEARER_TOKEN";

/// Quote deadline horizon relative to request time
pub const QUOTE_DEADLINE_MINUTES: i64 = 30;

/// How long the relay backend may hold a quote request open
pub const DEFAULT_QUOTE_WAITING_TIME_MS: u64 = 3_000;

/// Fallback for a missing or non-positive minimum input amount (smallest units)
pub const DEFAULT_MIN_INPUT_AMOUNT: &str = "1";

/// Base Solana fee per transaction signature, in lamports
pub const BASE_SIGNATURE_FEE_LAMPORTS: u64 = 5_000;

/// Built-in app fee appended to every relay quote
pub const BRIDGE_FEE_RECIPIENT: &str = "reffer.near";

/// Rate for the built-in app fee, in basis points of the input amount
pub const BRIDGE_FEE_BPS: u32 = 0;

/// Fee-table keys shared across services
pub const FEE_BRIDGE_USD: &str = "bridgeFeeUsd";
pub const FEE_DESTINATION_GAS_USD: &str = "destinationGasFeeUsd";
pub const FEE_SOURCE_GAS_USD: &str = "sourceGasFeeUsd";
pub const FEE_ESTIMATE_MINT_GAS_USD: &str = "estimateMintGasUsd";
pub const FEE_ESTIMATE_DEPOSIT_GAS_USD: &str = "estimateDepositGasUsd";
pub const FEE_ESTIMATE_APPROVE_GAS_USD: &str = "estimateApproveGasUsd";
