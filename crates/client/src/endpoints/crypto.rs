//! Digital currency endpoints.

use serde_json::Value;

use crate::http::Query;
use crate::{AvClient, ClientError};

impl AvClient {
    pub async fn crypto_intraday(
        &self,
        symbol: &str,
        market: &str,
        interval: &str,
        datatype: &str,
        outputsize: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("CRYPTO_INTRADAY");
        query
            .push("symbol", symbol)
            .push("market", market)
            .push("interval", interval)
            .push("outputsize", outputsize)
            .push("datatype", datatype);
        self.call(query).await
    }

    pub async fn digital_currency_daily(
        &self,
        symbol: &str,
        market: &str,
    ) -> Result<Value, ClientError> {
        self.digital_currency("DIGITAL_CURRENCY_DAILY", symbol, market)
            .await
    }

    pub async fn digital_currency_weekly(
        &self,
        symbol: &str,
        market: &str,
    ) -> Result<Value, ClientError> {
        self.digital_currency("DIGITAL_CURRENCY_WEEKLY", symbol, market)
            .await
    }

    pub async fn digital_currency_monthly(
        &self,
        symbol: &str,
        market: &str,
    ) -> Result<Value, ClientError> {
        self.digital_currency("DIGITAL_CURRENCY_MONTHLY", symbol, market)
            .await
    }

    async fn digital_currency(
        &self,
        function: &str,
        symbol: &str,
        market: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new(function);
        query.push("symbol", symbol).push("market", market);
        self.call(query).await
    }
}
