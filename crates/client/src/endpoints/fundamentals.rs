//! Fundamental data: company facts, statements, corporate actions, calendars.

use serde_json::Value;

use crate::http::Query;
use crate::{AvClient, ClientError};

impl AvClient {
    pub async fn company_overview(&self, symbol: &str) -> Result<Value, ClientError> {
        let mut query = Query::new("OVERVIEW");
        query.push("symbol", symbol);
        self.call(query).await
    }

    pub async fn etf_profile(&self, symbol: &str) -> Result<Value, ClientError> {
        let mut query = Query::new("ETF_PROFILE");
        query.push("symbol", symbol);
        self.call(query).await
    }

    pub async fn dividends(&self, symbol: &str) -> Result<Value, ClientError> {
        let mut query = Query::new("DIVIDENDS");
        query.push("symbol", symbol);
        self.call(query).await
    }

    pub async fn splits(&self, symbol: &str) -> Result<Value, ClientError> {
        let mut query = Query::new("SPLITS");
        query.push("symbol", symbol);
        self.call(query).await
    }

    pub async fn income_statement(&self, symbol: &str) -> Result<Value, ClientError> {
        let mut query = Query::new("INCOME_STATEMENT");
        query.push("symbol", symbol);
        self.call(query).await
    }

    pub async fn balance_sheet(&self, symbol: &str) -> Result<Value, ClientError> {
        let mut query = Query::new("BALANCE_SHEET");
        query.push("symbol", symbol);
        self.call(query).await
    }

    pub async fn cash_flow(&self, symbol: &str) -> Result<Value, ClientError> {
        let mut query = Query::new("CASH_FLOW");
        query.push("symbol", symbol);
        self.call(query).await
    }

    /// `LISTING_STATUS`: active/delisted universe. CSV-only upstream.
    pub async fn listing_status(
        &self,
        symbol: Option<&str>,
        date: Option<&str>,
        state: Option<&str>,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("LISTING_STATUS");
        query
            .push_opt("symbol", symbol)
            .push_opt("date", date)
            .push_opt("state", state);
        self.call(query).await
    }

    /// `EARNINGS_CALENDAR`: upcoming earnings. CSV-only upstream.
    pub async fn earnings_calendar(
        &self,
        symbol: Option<&str>,
        horizon: Option<&str>,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("EARNINGS_CALENDAR");
        query.push_opt("symbol", symbol).push_opt("horizon", horizon);
        self.call(query).await
    }

    /// `IPO_CALENDAR`: upcoming IPOs. CSV-only upstream.
    pub async fn ipo_calendar(&self) -> Result<Value, ClientError> {
        self.call(Query::new("IPO_CALENDAR")).await
    }
}
