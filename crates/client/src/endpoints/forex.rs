//! Foreign exchange endpoints.

use serde_json::Value;

use crate::http::Query;
use crate::{AvClient, ClientError};

impl AvClient {
    pub async fn exchange_rate(
        &self,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("CURRENCY_EXCHANGE_RATE");
        query
            .push("from_currency", from_currency)
            .push("to_currency", to_currency);
        self.call(query).await
    }

    pub async fn fx_intraday(
        &self,
        from_symbol: &str,
        to_symbol: &str,
        interval: &str,
        outputsize: &str,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("FX_INTRADAY");
        query
            .push("from_symbol", from_symbol)
            .push("to_symbol", to_symbol)
            .push("interval", interval)
            .push("outputsize", outputsize)
            .push("datatype", datatype);
        self.call(query).await
    }

    pub async fn fx_daily(
        &self,
        from_symbol: &str,
        to_symbol: &str,
        datatype: &str,
        outputsize: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("FX_DAILY");
        query
            .push("from_symbol", from_symbol)
            .push("to_symbol", to_symbol)
            .push("outputsize", outputsize)
            .push("datatype", datatype);
        self.call(query).await
    }

    pub async fn fx_weekly(
        &self,
        from_symbol: &str,
        to_symbol: &str,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("FX_WEEKLY");
        query
            .push("from_symbol", from_symbol)
            .push("to_symbol", to_symbol)
            .push("datatype", datatype);
        self.call(query).await
    }

    pub async fn fx_monthly(
        &self,
        from_symbol: &str,
        to_symbol: &str,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("FX_MONTHLY");
        query
            .push("from_symbol", from_symbol)
            .push("to_symbol", to_symbol)
            .push("datatype", datatype);
        self.call(query).await
    }
}
