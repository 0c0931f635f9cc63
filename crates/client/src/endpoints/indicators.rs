//! Technical indicator endpoints.
//!
//! The indicator surface is wide but falls into a handful of wire shapes;
//! the public methods keep the one-function-per-endpoint contract while the
//! private helpers own the shared query layout. None of the math happens
//! here: the upstream service computes every series.

use serde_json::Value;

use crate::http::Query;
use crate::{AvClient, ClientError};

impl AvClient {
    pub async fn sma(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        series_type: &str,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.period_series_indicator("SMA", symbol, interval, month, time_period, series_type, datatype)
            .await
    }

    pub async fn ema(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        series_type: &str,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.period_series_indicator("EMA", symbol, interval, month, time_period, series_type, datatype)
            .await
    }

    pub async fn wma(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        series_type: &str,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.period_series_indicator("WMA", symbol, interval, month, time_period, series_type, datatype)
            .await
    }

    pub async fn dema(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        series_type: &str,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.period_series_indicator("DEMA", symbol, interval, month, time_period, series_type, datatype)
            .await
    }

    pub async fn tema(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        series_type: &str,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.period_series_indicator("TEMA", symbol, interval, month, time_period, series_type, datatype)
            .await
    }

    pub async fn trima(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        series_type: &str,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.period_series_indicator("TRIMA", symbol, interval, month, time_period, series_type, datatype)
            .await
    }

    pub async fn kama(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        series_type: &str,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.period_series_indicator("KAMA", symbol, interval, month, time_period, series_type, datatype)
            .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn mama(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        series_type: &str,
        fastlimit: f64,
        slowlimit: f64,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("MAMA");
        query
            .push("symbol", symbol)
            .push("interval", interval)
            .push_opt("month", month)
            .push("series_type", series_type)
            .push("fastlimit", fastlimit)
            .push("slowlimit", slowlimit)
            .push("datatype", datatype);
        self.call(query).await
    }

    pub async fn vwap(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.plain_indicator("VWAP", symbol, interval, month, datatype)
            .await
    }

    pub async fn t3(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        series_type: &str,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.period_series_indicator("T3", symbol, interval, month, time_period, series_type, datatype)
            .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn macd(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        series_type: &str,
        fastperiod: u64,
        slowperiod: u64,
        signalperiod: u64,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("MACD");
        query
            .push("symbol", symbol)
            .push("interval", interval)
            .push_opt("month", month)
            .push("series_type", series_type)
            .push("fastperiod", fastperiod)
            .push("slowperiod", slowperiod)
            .push("signalperiod", signalperiod)
            .push("datatype", datatype);
        self.call(query).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn macdext(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        series_type: &str,
        fastperiod: u64,
        slowperiod: u64,
        signalperiod: u64,
        fastmatype: u64,
        slowmatype: u64,
        signalmatype: u64,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("MACDEXT");
        query
            .push("symbol", symbol)
            .push("interval", interval)
            .push_opt("month", month)
            .push("series_type", series_type)
            .push("fastperiod", fastperiod)
            .push("slowperiod", slowperiod)
            .push("signalperiod", signalperiod)
            .push("fastmatype", fastmatype)
            .push("slowmatype", slowmatype)
            .push("signalmatype", signalmatype)
            .push("datatype", datatype);
        self.call(query).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn stoch(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        fastkperiod: u64,
        slowkperiod: u64,
        slowdperiod: u64,
        slowkmatype: u64,
        slowdmatype: u64,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("STOCH");
        query
            .push("symbol", symbol)
            .push("interval", interval)
            .push_opt("month", month)
            .push("fastkperiod", fastkperiod)
            .push("slowkperiod", slowkperiod)
            .push("slowdperiod", slowdperiod)
            .push("slowkmatype", slowkmatype)
            .push("slowdmatype", slowdmatype)
            .push("datatype", datatype);
        self.call(query).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn stochf(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        fastkperiod: u64,
        fastdperiod: u64,
        fastdmatype: u64,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("STOCHF");
        query
            .push("symbol", symbol)
            .push("interval", interval)
            .push_opt("month", month)
            .push("fastkperiod", fastkperiod)
            .push("fastdperiod", fastdperiod)
            .push("fastdmatype", fastdmatype)
            .push("datatype", datatype);
        self.call(query).await
    }

    pub async fn rsi(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        series_type: &str,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.period_series_indicator("RSI", symbol, interval, month, time_period, series_type, datatype)
            .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn stochrsi(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        series_type: &str,
        fastkperiod: u64,
        fastdperiod: u64,
        fastdmatype: u64,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("STOCHRSI");
        query
            .push("symbol", symbol)
            .push("interval", interval)
            .push_opt("month", month)
            .push("time_period", time_period)
            .push("series_type", series_type)
            .push("fastkperiod", fastkperiod)
            .push("fastdperiod", fastdperiod)
            .push("fastdmatype", fastdmatype)
            .push("datatype", datatype);
        self.call(query).await
    }

    pub async fn willr(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.period_indicator("WILLR", symbol, interval, month, time_period, datatype)
            .await
    }

    pub async fn adx(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.period_indicator("ADX", symbol, interval, month, time_period, datatype)
            .await
    }

    pub async fn adxr(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.period_indicator("ADXR", symbol, interval, month, time_period, datatype)
            .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn apo(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        series_type: &str,
        fastperiod: u64,
        slowperiod: u64,
        matype: u64,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.price_oscillator("APO", symbol, interval, month, series_type, fastperiod, slowperiod, matype, datatype)
            .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn ppo(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        series_type: &str,
        fastperiod: u64,
        slowperiod: u64,
        matype: u64,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.price_oscillator("PPO", symbol, interval, month, series_type, fastperiod, slowperiod, matype, datatype)
            .await
    }

    pub async fn mom(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        series_type: &str,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.period_series_indicator("MOM", symbol, interval, month, time_period, series_type, datatype)
            .await
    }

    pub async fn bop(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.plain_indicator("BOP", symbol, interval, month, datatype)
            .await
    }

    pub async fn cci(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.period_indicator("CCI", symbol, interval, month, time_period, datatype)
            .await
    }

    pub async fn cmo(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.period_indicator("CMO", symbol, interval, month, time_period, datatype)
            .await
    }

    pub async fn roc(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        series_type: &str,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.period_series_indicator("ROC", symbol, interval, month, time_period, series_type, datatype)
            .await
    }

    pub async fn rocr(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        series_type: &str,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.period_series_indicator("ROCR", symbol, interval, month, time_period, series_type, datatype)
            .await
    }

    pub async fn aroon(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.period_indicator("AROON", symbol, interval, month, time_period, datatype)
            .await
    }

    pub async fn aroonosc(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.period_indicator("AROONOSC", symbol, interval, month, time_period, datatype)
            .await
    }

    pub async fn mfi(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.period_indicator("MFI", symbol, interval, month, time_period, datatype)
            .await
    }

    pub async fn trix(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        series_type: &str,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.period_series_indicator("TRIX", symbol, interval, month, time_period, series_type, datatype)
            .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn ultosc(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period1: u64,
        time_period2: u64,
        time_period3: u64,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("ULTOSC");
        query
            .push("symbol", symbol)
            .push("interval", interval)
            .push_opt("month", month)
            .push("timeperiod1", time_period1)
            .push("timeperiod2", time_period2)
            .push("timeperiod3", time_period3)
            .push("datatype", datatype);
        self.call(query).await
    }

    pub async fn dx(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.period_indicator("DX", symbol, interval, month, time_period, datatype)
            .await
    }

    pub async fn minus_di(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.period_indicator("MINUS_DI", symbol, interval, month, time_period, datatype)
            .await
    }

    pub async fn plus_di(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.period_indicator("PLUS_DI", symbol, interval, month, time_period, datatype)
            .await
    }

    pub async fn minus_dm(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.period_indicator("MINUS_DM", symbol, interval, month, time_period, datatype)
            .await
    }

    pub async fn plus_dm(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.period_indicator("PLUS_DM", symbol, interval, month, time_period, datatype)
            .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn bbands(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        series_type: &str,
        nbdevup: u64,
        nbdevdn: u64,
        matype: u64,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("BBANDS");
        query
            .push("symbol", symbol)
            .push("interval", interval)
            .push_opt("month", month)
            .push("time_period", time_period)
            .push("series_type", series_type)
            .push("nbdevup", nbdevup)
            .push("nbdevdn", nbdevdn)
            .push("matype", matype)
            .push("datatype", datatype);
        self.call(query).await
    }

    pub async fn midpoint(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        series_type: &str,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.period_series_indicator("MIDPOINT", symbol, interval, month, time_period, series_type, datatype)
            .await
    }

    pub async fn midprice(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.period_indicator("MIDPRICE", symbol, interval, month, time_period, datatype)
            .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn sar(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        acceleration: f64,
        maximum: f64,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("SAR");
        query
            .push("symbol", symbol)
            .push("interval", interval)
            .push_opt("month", month)
            .push("acceleration", acceleration)
            .push("maximum", maximum)
            .push("datatype", datatype);
        self.call(query).await
    }

    pub async fn trange(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.plain_indicator("TRANGE", symbol, interval, month, datatype)
            .await
    }

    pub async fn atr(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.period_indicator("ATR", symbol, interval, month, time_period, datatype)
            .await
    }

    pub async fn natr(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.period_indicator("NATR", symbol, interval, month, time_period, datatype)
            .await
    }

    pub async fn ad(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.plain_indicator("AD", symbol, interval, month, datatype)
            .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn adosc(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        fastperiod: u64,
        slowperiod: u64,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new("ADOSC");
        query
            .push("symbol", symbol)
            .push("interval", interval)
            .push_opt("month", month)
            .push("fastperiod", fastperiod)
            .push("slowperiod", slowperiod)
            .push("datatype", datatype);
        self.call(query).await
    }

    pub async fn obv(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.plain_indicator("OBV", symbol, interval, month, datatype)
            .await
    }

    pub async fn ht_trendline(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        series_type: &str,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.series_indicator("HT_TRENDLINE", symbol, interval, month, series_type, datatype)
            .await
    }

    pub async fn ht_sine(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        series_type: &str,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.series_indicator("HT_SINE", symbol, interval, month, series_type, datatype)
            .await
    }

    pub async fn ht_trendmode(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.plain_indicator("HT_TRENDMODE", symbol, interval, month, datatype)
            .await
    }

    pub async fn ht_dcperiod(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        series_type: &str,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.series_indicator("HT_DCPERIOD", symbol, interval, month, series_type, datatype)
            .await
    }

    pub async fn ht_dcphase(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        series_type: &str,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.series_indicator("HT_DCPHASE", symbol, interval, month, series_type, datatype)
            .await
    }

    pub async fn ht_phasor(
        &self,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        series_type: &str,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        self.series_indicator("HT_PHASOR", symbol, interval, month, series_type, datatype)
            .await
    }

    // Shared wire shapes.

    #[allow(clippy::too_many_arguments)]
    async fn period_series_indicator(
        &self,
        function: &str,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        series_type: &str,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new(function);
        query
            .push("symbol", symbol)
            .push("interval", interval)
            .push_opt("month", month)
            .push("time_period", time_period)
            .push("series_type", series_type)
            .push("datatype", datatype);
        self.call(query).await
    }

    async fn period_indicator(
        &self,
        function: &str,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        time_period: u64,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new(function);
        query
            .push("symbol", symbol)
            .push("interval", interval)
            .push_opt("month", month)
            .push("time_period", time_period)
            .push("datatype", datatype);
        self.call(query).await
    }

    async fn series_indicator(
        &self,
        function: &str,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        series_type: &str,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new(function);
        query
            .push("symbol", symbol)
            .push("interval", interval)
            .push_opt("month", month)
            .push("series_type", series_type)
            .push("datatype", datatype);
        self.call(query).await
    }

    async fn plain_indicator(
        &self,
        function: &str,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new(function);
        query
            .push("symbol", symbol)
            .push("interval", interval)
            .push_opt("month", month)
            .push("datatype", datatype);
        self.call(query).await
    }

    #[allow(clippy::too_many_arguments)]
    async fn price_oscillator(
        &self,
        function: &str,
        symbol: &str,
        interval: &str,
        month: Option<&str>,
        series_type: &str,
        fastperiod: u64,
        slowperiod: u64,
        matype: u64,
        datatype: &str,
    ) -> Result<Value, ClientError> {
        let mut query = Query::new(function);
        query
            .push("symbol", symbol)
            .push("interval", interval)
            .push_opt("month", month)
            .push("series_type", series_type)
            .push("fastperiod", fastperiod)
            .push("slowperiod", slowperiod)
            .push("matype", matype)
            .push("datatype", datatype);
        self.call(query).await
    }
}
