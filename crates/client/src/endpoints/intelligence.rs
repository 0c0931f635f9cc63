//! Alpha Intelligence: news sentiment, movers, insiders, analytics.

use serde_json::Value;

use crate::http::Query;
use crate::{AvClient, ClientError};

impl AvClient {
    #[allow(clippy::too_many_arguments)]
    pub async fn news_sentiment(
        &self,
        tickers: &[String],
        datatype: &str,
        topics: Option<&str>,
        time_from: Option<&str>,
        time_to: Option<&str>,
        sort: &str,
        limit: u64,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("NEWS_SENTIMENT");
        query
            .push_list("tickers", tickers)
            .push_opt("topics", topics)
            .push_opt("time_from", time_from)
            .push_opt("time_to", time_to)
            .push("sort", sort)
            .push("limit", limit)
            .push("datatype", datatype);
        self.call(query).await
    }

    pub async fn top_gainers_losers(&self) -> Result<Value, ClientError> {
        self.call(Query::new("TOP_GAINERS_LOSERS")).await
    }

    pub async fn insider_transactions(&self, symbol: &str) -> Result<Value, ClientError> {
        let mut query = Query::new("INSIDER_TRANSACTIONS");
        query.push("symbol", symbol);
        self.call(query).await
    }

    /// `ANALYTICS_FIXED_WINDOW`: metrics over one date range.
    ///
    /// This endpoint family takes upper-case parameter names.
    pub async fn analytics_fixed_window(
        &self,
        symbols: &[String],
        interval: &str,
        series_range: &str,
        ohlc: &str,
        calculations: &[String],
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("ANALYTICS_FIXED_WINDOW");
        query
            .push_list("SYMBOLS", symbols)
            .push("RANGE", series_range)
            .push("INTERVAL", interval)
            .push("OHLC", ohlc)
            .push_list("CALCULATIONS", calculations);
        self.call(query).await
    }

    /// `ANALYTICS_SLIDING_WINDOW`: metrics computed over a moving window.
    pub async fn analytics_sliding_window(
        &self,
        symbols: &[String],
        interval: &str,
        series_range: &str,
        ohlc: &str,
        window_size: u64,
        calculations: &[String],
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("ANALYTICS_SLIDING_WINDOW");
        query
            .push_list("SYMBOLS", symbols)
            .push("RANGE", series_range)
            .push("INTERVAL", interval)
            .push("OHLC", ohlc)
            .push("WINDOW_SIZE", window_size)
            .push_list("CALCULATIONS", calculations);
        self.call(query).await
    }
}
