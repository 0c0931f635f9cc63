//! Commodity price endpoints. All share the interval/datatype shape.

use serde_json::Value;

use crate::http::Query;
use crate::{AvClient, ClientError};

impl AvClient {
    pub async fn wti_crude(&self, interval: &str, datatype: &str) -> Result<Value, ClientError> {
        self.commodity("WTI", interval, datatype).await
    }

    pub async fn brent_crude(&self, interval: &str, datatype: &str) -> Result<Value, ClientError> {
        self.commodity("BRENT", interval, datatype).await
    }

    pub async fn natural_gas(&self, interval: &str, datatype: &str) -> Result<Value, ClientError> {
        self.commodity("NATURAL_GAS", interval, datatype).await
    }

    pub async fn copper(&self, interval: &str, datatype: &str) -> Result<Value, ClientError> {
        self.commodity("COPPER", interval, datatype).await
    }

    pub async fn aluminum(&self, interval: &str, datatype: &str) -> Result<Value, ClientError> {
        self.commodity("ALUMINUM", interval, datatype).await
    }

    pub async fn wheat(&self, interval: &str, datatype: &str) -> Result<Value, ClientError> {
        self.commodity("WHEAT", interval, datatype).await
    }

    pub async fn corn(&self, interval: &str, datatype: &str) -> Result<Value, ClientError> {
        self.commodity("CORN", interval, datatype).await
    }

    pub async fn cotton(&self, interval: &str, datatype: &str) -> Result<Value, ClientError> {
        self.commodity("COTTON", interval, datatype).await
    }

    pub async fn sugar(&self, interval: &str, datatype: &str) -> Result<Value, ClientError> {
        self.commodity("SUGAR", interval, datatype).await
    }

    pub async fn coffee(&self, interval: &str, datatype: &str) -> Result<Value, ClientError> {
        self.commodity("COFFEE", interval, datatype).await
    }

    pub async fn all_commodities(
        &self,
        interval: &str,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.commodity("ALL_COMMODITIES", interval, datatype).await
    }

    async fn commodity(
        &self,
        function: &str,
        interval: &str,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new(function);
        query.push("interval", interval).push("datatype", datatype);
        self.call(query).await
    }
}
