/// Request parameters and endpoint paths for the market data API
pub mod requests;
