use chrono::NaiveDate;
use market_desk::error::AppError;
use market_desk::model::requests::{
    AggregatesRequest, OptionsChainRequest, Timespan, previous_close_path, ticker_details_path,
};

#[test]
fn test_aggregates_path() {
    let request = AggregatesRequest::new("AAPL", 1, Timespan::Day, "2023-01-01", "2023-01-31");
    assert_eq!(
        request.path(),
        "/v2/aggs/ticker/AAPL/range/1/day/2023-01-01/2023-01-31"
    );
}

#[test]
fn test_aggregates_from_dates() {
    let request = AggregatesRequest::from_dates(
        "X:BTCUSD",
        15,
        Timespan::Minute,
        NaiveDate::from_ymd_opt(2024, 2, 3).unwrap(),
        NaiveDate::from_ymd_opt(2024, 2, 4).unwrap(),
    );
    assert_eq!(
        request.path(),
        "/v2/aggs/ticker/X:BTCUSD/range/15/minute/2024-02-03/2024-02-04"
    );
}

#[test]
fn test_timespan_parse_and_display() {
    for (text, timespan) in [
        ("minute", Timespan::Minute),
        ("hour", Timespan::Hour),
        ("day", Timespan::Day),
    ] {
        assert_eq!(text.parse::<Timespan>().unwrap(), timespan);
        assert_eq!(timespan.to_string(), text);
    }
}

#[test]
fn test_timespan_rejects_unknown_unit() {
    match "week".parse::<Timespan>() {
        Err(AppError::InvalidInput(msg)) => assert!(msg.contains("week")),
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn test_timespan_serde_is_lowercase() {
    assert_eq!(serde_json::to_string(&Timespan::Hour).unwrap(), "\"hour\"");
    let parsed: Timespan = serde_json::from_str("\"minute\"").unwrap();
    assert_eq!(parsed, Timespan::Minute);
}

#[test]
fn test_options_chain_fixed_paging_and_sorting() {
    let request = OptionsChainRequest::new("TSLA");
    assert_eq!(request.underlying_ticker(), "TSLA");
    assert_eq!(request.expiration_date(), None);
    assert_eq!(request.limit(), 1000);
    assert_eq!(request.order(), "asc");
    assert_eq!(request.sort(), "expiration_date");

    let json = serde_json::to_value(&request).unwrap();
    assert!(json.get("expiration_date").is_none());
}

#[test]
fn test_options_chain_expiration_filter() {
    let request = OptionsChainRequest::new("TSLA").with_expiration("2024-01-19");
    assert_eq!(request.expiration_date(), Some("2024-01-19"));
    assert_eq!(request.limit(), 1000);

    let cleared = request.with_optional_expiration(None);
    assert_eq!(cleared.expiration_date(), None);
}

#[test]
fn test_reference_paths() {
    assert_eq!(ticker_details_path("AAPL"), "/v3/reference/tickers/AAPL");
    assert_eq!(previous_close_path("AAPL"), "/v2/aggs/ticker/AAPL/prev");
    assert_eq!(OptionsChainRequest::PATH, "/v3/reference/options/contracts");
}
