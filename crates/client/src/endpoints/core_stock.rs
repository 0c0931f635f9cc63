//! Core stock endpoints: quotes, time series, search, market status.

use serde_json::Value;

use crate::http::Query;
use crate::{AvClient, ClientError};

impl AvClient {
    /// `GLOBAL_QUOTE`: latest price and volume for one ticker.
    pub async fn quote(&self, symbol: &str, datatype: &str) -> Result<Value, ClientError> {
        let mut query = Query::new("GLOBAL_QUOTE");
        query.push("symbol", symbol).push("datatype", datatype);
        self.call(query).await
    }

    /// `TIME_SERIES_INTRADAY`: OHLCV bars at 1-60 minute intervals.
    #[allow(clippy::too_many_arguments)]
    pub async fn intraday(
        &self,
        symbol: &str,
        interval: &str,
        datatype: &str,
        extended_hours: bool,
        adjusted: bool,
        outputsize: &str,
        month: Option<&str>,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("TIME_SERIES_INTRADAY");
        query
            .push("symbol", symbol)
            .push("interval", interval)
            .push("adjusted", adjusted)
            .push("extended_hours", extended_hours)
            .push("outputsize", outputsize)
            .push_opt("month", month)
            .push("datatype", datatype);
        self.call(query).await
    }

    pub async fn time_series_daily(
        &self,
        symbol: &str,
        datatype: &str,
        outputsize: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("TIME_SERIES_DAILY");
        query
            .push("symbol", symbol)
            .push("outputsize", outputsize)
            .push("datatype", datatype);
        self.call(query).await
    }

    pub async fn time_series_daily_adjusted(
        &self,
        symbol: &str,
        datatype: &str,
        outputsize: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("TIME_SERIES_DAILY_ADJUSTED");
        query
            .push("symbol", symbol)
            .push("outputsize", outputsize)
            .push("datatype", datatype);
        self.call(query).await
    }

    pub async fn time_series_weekly(
        &self,
        symbol: &str,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("TIME_SERIES_WEEKLY");
        query.push("symbol", symbol).push("datatype", datatype);
        self.call(query).await
    }

    pub async fn time_series_weekly_adjusted(
        &self,
        symbol: &str,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("TIME_SERIES_WEEKLY_ADJUSTED");
        query.push("symbol", symbol).push("datatype", datatype);
        self.call(query).await
    }

    pub async fn time_series_monthly(
        &self,
        symbol: &str,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("TIME_SERIES_MONTHLY");
        query.push("symbol", symbol).push("datatype", datatype);
        self.call(query).await
    }

    pub async fn time_series_monthly_adjusted(
        &self,
        symbol: &str,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("TIME_SERIES_MONTHLY_ADJUSTED");
        query.push("symbol", symbol).push("datatype", datatype);
        self.call(query).await
    }

    /// `REALTIME_BULK_QUOTES`: up to 100 symbols in one call.
    pub async fn realtime_bulk_quotes(
        &self,
        symbols: &[String],
        datatype: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("REALTIME_BULK_QUOTES");
        query.push_list("symbol", symbols).push("datatype", datatype);
        self.call(query).await
    }

    /// `SYMBOL_SEARCH`: best-matching symbols for a keyword query.
    pub async fn symbol_search(
        &self,
        keywords: &str,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("SYMBOL_SEARCH");
        query.push("keywords", keywords).push("datatype", datatype);
        self.call(query).await
    }

    pub async fn market_status(&self) -> Result<Value, ClientError> {
        self.call(Query::new("MARKET_STATUS")).await
    }
}
