//! Network URL constants for the OKX SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://www.okx.com";

/// Header that routes a request to the demo-trading (paper) environment.
pub const SIMULATED_TRADING_HEADER: &str = "x-simulated-trading";
