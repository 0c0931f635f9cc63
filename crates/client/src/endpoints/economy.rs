//! US economic indicator endpoints.

use serde_json::Value;

use crate::http::Query;
use crate::{AvClient, ClientError};

impl AvClient {
    pub async fn real_gdp(&self, interval: &str, datatype: &str) -> Result<Value, ClientError> {
        let mut query = Query::new("REAL_GDP");
        query.push("interval", interval).push("datatype", datatype);
        self.call(query).await
    }

    pub async fn real_gdp_per_capita(&self, datatype: &str) -> Result<Value, ClientError> {
        self.economic("REAL_GDP_PER_CAPITA", datatype).await
    }

    pub async fn treasury_yield(
        &self,
        interval: &str,
        maturity: &str,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("TREASURY_YIELD");
        query
            .push("interval", interval)
            .push("maturity", maturity)
            .push("datatype", datatype);
        self.call(query).await
    }

    pub async fn federal_funds_rate(
        &self,
        interval: &str,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("FEDERAL_FUNDS_RATE");
        query.push("interval", interval).push("datatype", datatype);
        self.call(query).await
    }

    pub async fn cpi(&self, interval: &str, datatype: &str) -> Result<Value, ClientError> {
        let mut query = Query::new("CPI");
        query.push("interval", interval).push("datatype", datatype);
        self.call(query).await
    }

    pub async fn inflation(&self, datatype: &str) -> Result<Value, ClientError> {
        self.economic("INFLATION", datatype).await
    }

    pub async fn retail_sales(&self, datatype: &str) -> Result<Value, ClientError> {
        self.economic("RETAIL_SALES", datatype).await
    }

    pub async fn durables(&self, datatype: &str) -> Result<Value, ClientError> {
        self.economic("DURABLES", datatype).await
    }

    pub async fn unemployment(&self, datatype: &str) -> Result<Value, ClientError> {
        self.economic("UNEMPLOYMENT", datatype).await
    }

    pub async fn nonfarm_payrolls(&self, datatype: &str) -> Result<Value, ClientError> {
        self.economic("NONFARM_PAYROLL", datatype).await
    }

    async fn economic(&self, function: &str, datatype: &str) -> Result<Value, ClientError> {
        let mut query = Query::new(function);
        query.push("datatype", datatype);
        self.call(query).await
    }
}
