//! Options chain endpoints.

use serde_json::Value;

use crate::http::Query;
use crate::{AvClient, ClientError};

impl AvClient {
    pub async fn realtime_options(
        &self,
        symbol: &str,
        datatype: &str,
        contract: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("REALTIME_OPTIONS");
        query
            .push("symbol", symbol)
            .push("contract", contract)
            .push("datatype", datatype);
        self.call(query).await
    }

    pub async fn historical_options(
        &self,
        symbol: &str,
        datatype: &str,
        contract: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("HISTORICAL_OPTIONS");
        query
            .push("symbol", symbol)
            .push("contract", contract)
            .push("datatype", datatype);
        self.call(query).await
    }
}
