//! Technical indicator tools.
//!
//! Defaults follow the upstream conventions: MACD-family periods 12/26/9,
//! stochastics 5/3/3, SAR 0.02/0.2, Bollinger 20/2/2, ULTOSC 7/14/28, and
//! per-indicator look-back periods (10, 14, 20, 30). Moving-average type
//! selectors default to 0 (SMA).

use alphavantage_client::AvClient;

use crate::tools::args::ToolArgs;
use crate::tools::spec::{HandlerFuture, ParamKind, ParamSpec, ToolSpec};

// symbol + interval + time_period + series_type all required (SMA family).
const PERIOD_SERIES: &[ParamSpec] = &[
    ParamSpec::required("symbol", ParamKind::String),
    ParamSpec::required("interval", ParamKind::String),
    ParamSpec::optional("month", ParamKind::String),
    ParamSpec::required("time_period", ParamKind::Number),
    ParamSpec::required("series_type", ParamKind::String),
    ParamSpec::optional("datatype", ParamKind::String),
];

// series_type required, time_period defaulted (RSI family).
const SERIES_OPT_PERIOD: &[ParamSpec] = &[
    ParamSpec::required("symbol", ParamKind::String),
    ParamSpec::required("interval", ParamKind::String),
    ParamSpec::optional("month", ParamKind::String),
    ParamSpec::optional("time_period", ParamKind::Number),
    ParamSpec::required("series_type", ParamKind::String),
    ParamSpec::optional("datatype", ParamKind::String),
];

// time_period defaulted, no series_type (ADX family).
const OPT_PERIOD: &[ParamSpec] = &[
    ParamSpec::required("symbol", ParamKind::String),
    ParamSpec::required("interval", ParamKind::String),
    ParamSpec::optional("month", ParamKind::String),
    ParamSpec::optional("time_period", ParamKind::Number),
    ParamSpec::optional("datatype", ParamKind::String),
];

// symbol + interval only (OBV family).
const PLAIN: &[ParamSpec] = &[
    ParamSpec::required("symbol", ParamKind::String),
    ParamSpec::required("interval", ParamKind::String),
    ParamSpec::optional("month", ParamKind::String),
    ParamSpec::optional("datatype", ParamKind::String),
];

// series_type required, no period (Hilbert transform family).
const SERIES: &[ParamSpec] = &[
    ParamSpec::required("symbol", ParamKind::String),
    ParamSpec::required("interval", ParamKind::String),
    ParamSpec::optional("month", ParamKind::String),
    ParamSpec::required("series_type", ParamKind::String),
    ParamSpec::optional("datatype", ParamKind::String),
];

const PRICE_OSCILLATOR: &[ParamSpec] = &[
    ParamSpec::required("symbol", ParamKind::String),
    ParamSpec::required("interval", ParamKind::String),
    ParamSpec::optional("month", ParamKind::String),
    ParamSpec::required("series_type", ParamKind::String),
    ParamSpec::optional("fastperiod", ParamKind::Number),
    ParamSpec::optional("slowperiod", ParamKind::Number),
    ParamSpec::optional("matype", ParamKind::Number),
    ParamSpec::optional("datatype", ParamKind::String),
];

pub(super) fn specs() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: "sma",
            description: "Fetch simple moving average",
            params: PERIOD_SERIES,
            handler: sma,
        },
        ToolSpec {
            name: "ema",
            description: "Fetch exponential moving average",
            params: PERIOD_SERIES,
            handler: ema,
        },
        ToolSpec {
            name: "wma",
            description: "Fetch weighted moving average",
            params: PERIOD_SERIES,
            handler: wma,
        },
        ToolSpec {
            name: "dema",
            description: "Fetch double exponential moving average",
            params: PERIOD_SERIES,
            handler: dema,
        },
        ToolSpec {
            name: "tema",
            description: "Fetch triple exponential moving average",
            params: PERIOD_SERIES,
            handler: tema,
        },
        ToolSpec {
            name: "trima",
            description: "Fetch triangular moving average",
            params: PERIOD_SERIES,
            handler: trima,
        },
        ToolSpec {
            name: "kama",
            description: "Fetch Kaufman adaptive moving average",
            params: PERIOD_SERIES,
            handler: kama,
        },
        ToolSpec {
            name: "mama",
            description: "Fetch MESA adaptive moving average",
            params: const { &[
                ParamSpec::required("symbol", ParamKind::String),
                ParamSpec::required("interval", ParamKind::String),
                ParamSpec::optional("month", ParamKind::String),
                ParamSpec::required("series_type", ParamKind::String),
                ParamSpec::required("fastlimit", ParamKind::Number),
                ParamSpec::required("slowlimit", ParamKind::Number),
                ParamSpec::optional("datatype", ParamKind::String),
            ] },
            handler: mama,
        },
        ToolSpec {
            name: "vwap",
            description: "Fetch volume weighted average price",
            params: PLAIN,
            handler: vwap,
        },
        ToolSpec {
            name: "t3",
            description: "Fetch T3 moving average",
            params: PERIOD_SERIES,
            handler: t3,
        },
        ToolSpec {
            name: "macd",
            description: "Fetch moving average convergence divergence",
            params: const { &[
                ParamSpec::required("symbol", ParamKind::String),
                ParamSpec::required("interval", ParamKind::String),
                ParamSpec::optional("month", ParamKind::String),
                ParamSpec::required("series_type", ParamKind::String),
                ParamSpec::optional("fastperiod", ParamKind::Number),
                ParamSpec::optional("slowperiod", ParamKind::Number),
                ParamSpec::optional("signalperiod", ParamKind::Number),
                ParamSpec::optional("datatype", ParamKind::String),
            ] },
            handler: macd,
        },
        ToolSpec {
            name: "macdext",
            description: "Fetch MACD with controllable moving average types",
            params: const { &[
                ParamSpec::required("symbol", ParamKind::String),
                ParamSpec::required("interval", ParamKind::String),
                ParamSpec::optional("month", ParamKind::String),
                ParamSpec::required("series_type", ParamKind::String),
                ParamSpec::optional("fastperiod", ParamKind::Number),
                ParamSpec::optional("slowperiod", ParamKind::Number),
                ParamSpec::optional("signalperiod", ParamKind::Number),
                ParamSpec::optional("fastmatype", ParamKind::Number),
                ParamSpec::optional("slowmatype", ParamKind::Number),
                ParamSpec::optional("signalmatype", ParamKind::Number),
                ParamSpec::optional("datatype", ParamKind::String),
            ] },
            handler: macdext,
        },
        ToolSpec {
            name: "stoch",
            description: "Fetch stochastic oscillator",
            params: const { &[
                ParamSpec::required("symbol", ParamKind::String),
                ParamSpec::required("interval", ParamKind::String),
                ParamSpec::optional("month", ParamKind::String),
                ParamSpec::optional("fastkperiod", ParamKind::Number),
                ParamSpec::optional("slowkperiod", ParamKind::Number),
                ParamSpec::optional("slowdperiod", ParamKind::Number),
                ParamSpec::optional("slowkmatype", ParamKind::Number),
                ParamSpec::optional("slowdmatype", ParamKind::Number),
                ParamSpec::optional("datatype", ParamKind::String),
            ] },
            handler: stoch,
        },
        ToolSpec {
            name: "stochf",
            description: "Fetch stochastic oscillator fast",
            params: const { &[
                ParamSpec::required("symbol", ParamKind::String),
                ParamSpec::required("interval", ParamKind::String),
                ParamSpec::optional("month", ParamKind::String),
                ParamSpec::optional("fastkperiod", ParamKind::Number),
                ParamSpec::optional("fastdperiod", ParamKind::Number),
                ParamSpec::optional("fastdmatype", ParamKind::Number),
                ParamSpec::optional("datatype", ParamKind::String),
            ] },
            handler: stochf,
        },
        ToolSpec {
            name: "rsi",
            description: "Fetch relative strength index",
            params: SERIES_OPT_PERIOD,
            handler: rsi,
        },
        ToolSpec {
            name: "stochrsi",
            description: "Fetch stochastic relative strength index",
            params: const { &[
                ParamSpec::required("symbol", ParamKind::String),
                ParamSpec::required("interval", ParamKind::String),
                ParamSpec::optional("month", ParamKind::String),
                ParamSpec::optional("time_period", ParamKind::Number),
                ParamSpec::required("series_type", ParamKind::String),
                ParamSpec::optional("fastkperiod", ParamKind::Number),
                ParamSpec::optional("fastdperiod", ParamKind::Number),
                ParamSpec::optional("fastdmatype", ParamKind::Number),
                ParamSpec::optional("datatype", ParamKind::String),
            ] },
            handler: stochrsi,
        },
        ToolSpec {
            name: "willr",
            description: "Fetch Williams percent range",
            params: OPT_PERIOD,
            handler: willr,
        },
        ToolSpec {
            name: "adx",
            description: "Fetch average directional movement index",
            params: OPT_PERIOD,
            handler: adx,
        },
        ToolSpec {
            name: "adxr",
            description: "Fetch average directional movement index rating",
            params: OPT_PERIOD,
            handler: adxr,
        },
        ToolSpec {
            name: "apo",
            description: "Fetch absolute price oscillator",
            params: PRICE_OSCILLATOR,
            handler: apo,
        },
        ToolSpec {
            name: "ppo",
            description: "Fetch percentage price oscillator",
            params: PRICE_OSCILLATOR,
            handler: ppo,
        },
        ToolSpec {
            name: "mom",
            description: "Fetch momentum",
            params: SERIES_OPT_PERIOD,
            handler: mom,
        },
        ToolSpec {
            name: "bop",
            description: "Fetch balance of power",
            params: PLAIN,
            handler: bop,
        },
        ToolSpec {
            name: "cci",
            description: "Fetch commodity channel index",
            params: OPT_PERIOD,
            handler: cci,
        },
        ToolSpec {
            name: "cmo",
            description: "Fetch Chande momentum oscillator",
            params: OPT_PERIOD,
            handler: cmo,
        },
        ToolSpec {
            name: "roc",
            description: "Fetch rate of change",
            params: SERIES_OPT_PERIOD,
            handler: roc,
        },
        ToolSpec {
            name: "rocr",
            description: "Fetch rate of change ratio",
            params: SERIES_OPT_PERIOD,
            handler: rocr,
        },
        ToolSpec {
            name: "aroon",
            description: "Fetch aroon",
            params: OPT_PERIOD,
            handler: aroon,
        },
        ToolSpec {
            name: "aroonosc",
            description: "Fetch aroon oscillator",
            params: OPT_PERIOD,
            handler: aroonosc,
        },
        ToolSpec {
            name: "mfi",
            description: "Fetch money flow index",
            params: OPT_PERIOD,
            handler: mfi,
        },
        ToolSpec {
            name: "trix",
            description: "Fetch triple exponential average",
            params: SERIES_OPT_PERIOD,
            handler: trix,
        },
        ToolSpec {
            name: "ultosc",
            description: "Fetch ultimate oscillator",
            params: const { &[
                ParamSpec::required("symbol", ParamKind::String),
                ParamSpec::required("interval", ParamKind::String),
                ParamSpec::optional("month", ParamKind::String),
                ParamSpec::optional("time_period1", ParamKind::Number),
                ParamSpec::optional("time_period2", ParamKind::Number),
                ParamSpec::optional("time_period3", ParamKind::Number),
                ParamSpec::optional("datatype", ParamKind::String),
            ] },
            handler: ultosc,
        },
        ToolSpec {
            name: "dx",
            description: "Fetch directional movement index",
            params: OPT_PERIOD,
            handler: dx,
        },
        ToolSpec {
            name: "minus_di",
            description: "Fetch minus directional indicator",
            params: OPT_PERIOD,
            handler: minus_di,
        },
        ToolSpec {
            name: "plus_di",
            description: "Fetch plus directional indicator",
            params: OPT_PERIOD,
            handler: plus_di,
        },
        ToolSpec {
            name: "minus_dm",
            description: "Fetch minus directional movement",
            params: OPT_PERIOD,
            handler: minus_dm,
        },
        ToolSpec {
            name: "plus_dm",
            description: "Fetch plus directional movement",
            params: OPT_PERIOD,
            handler: plus_dm,
        },
        ToolSpec {
            name: "bbands",
            description: "Fetch Bollinger bands",
            params: const { &[
                ParamSpec::required("symbol", ParamKind::String),
                ParamSpec::required("interval", ParamKind::String),
                ParamSpec::optional("month", ParamKind::String),
                ParamSpec::optional("time_period", ParamKind::Number),
                ParamSpec::required("series_type", ParamKind::String),
                ParamSpec::optional("nbdevup", ParamKind::Number),
                ParamSpec::optional("nbdevdn", ParamKind::Number),
                ParamSpec::optional("matype", ParamKind::Number),
                ParamSpec::optional("datatype", ParamKind::String),
            ] },
            handler: bbands,
        },
        ToolSpec {
            name: "midpoint",
            description: "Fetch midpoint",
            params: SERIES_OPT_PERIOD,
            handler: midpoint,
        },
        ToolSpec {
            name: "midprice",
            description: "Fetch midprice",
            params: OPT_PERIOD,
            handler: midprice,
        },
        ToolSpec {
            name: "sar",
            description: "Fetch parabolic SAR",
            params: const { &[
                ParamSpec::required("symbol", ParamKind::String),
                ParamSpec::required("interval", ParamKind::String),
                ParamSpec::optional("month", ParamKind::String),
                ParamSpec::optional("acceleration", ParamKind::Number),
                ParamSpec::optional("maximum", ParamKind::Number),
                ParamSpec::optional("datatype", ParamKind::String),
            ] },
            handler: sar,
        },
        ToolSpec {
            name: "trange",
            description: "Fetch true range",
            params: PLAIN,
            handler: trange,
        },
        ToolSpec {
            name: "atr",
            description: "Fetch average true range",
            params: OPT_PERIOD,
            handler: atr,
        },
        ToolSpec {
            name: "natr",
            description: "Fetch normalized average true range",
            params: OPT_PERIOD,
            handler: natr,
        },
        ToolSpec {
            name: "ad",
            description: "Fetch accumulation/distribution line",
            params: PLAIN,
            handler: ad,
        },
        ToolSpec {
            name: "adosc",
            description: "Fetch accumulation/distribution oscillator",
            params: const { &[
                ParamSpec::required("symbol", ParamKind::String),
                ParamSpec::required("interval", ParamKind::String),
                ParamSpec::optional("month", ParamKind::String),
                ParamSpec::optional("fastperiod", ParamKind::Number),
                ParamSpec::optional("slowperiod", ParamKind::Number),
                ParamSpec::optional("datatype", ParamKind::String),
            ] },
            handler: adosc,
        },
        ToolSpec {
            name: "obv",
            description: "Fetch on balance volume",
            params: PLAIN,
            handler: obv,
        },
        ToolSpec {
            name: "ht_trendline",
            description: "Fetch Hilbert transform - trendline",
            params: SERIES,
            handler: ht_trendline,
        },
        ToolSpec {
            name: "ht_sine",
            description: "Fetch Hilbert transform - sine wave",
            params: SERIES,
            handler: ht_sine,
        },
        ToolSpec {
            name: "ht_trendmode",
            description: "Fetch Hilbert transform - trend mode",
            params: PLAIN,
            handler: ht_trendmode,
        },
        ToolSpec {
            name: "ht_dcperiod",
            description: "Fetch Hilbert transform - dominant cycle period",
            params: SERIES,
            handler: ht_dcperiod,
        },
        ToolSpec {
            name: "ht_dcphase",
            description: "Fetch Hilbert transform - dominant cycle phase",
            params: SERIES,
            handler: ht_dcphase,
        },
        ToolSpec {
            name: "ht_phasor",
            description: "Fetch Hilbert transform - phasor components",
            params: SERIES,
            handler: ht_phasor,
        },
    ]
}

fn sma(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let time_period = args.u64("time_period")?;
        let series_type = args.string("series_type")?;
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .sma(&symbol, &interval, month.as_deref(), time_period, &series_type, &datatype)
            .await?)
    })
}

fn ema(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let time_period = args.u64("time_period")?;
        let series_type = args.string("series_type")?;
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .ema(&symbol, &interval, month.as_deref(), time_period, &series_type, &datatype)
            .await?)
    })
}

fn wma(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let time_period = args.u64("time_period")?;
        let series_type = args.string("series_type")?;
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .wma(&symbol, &interval, month.as_deref(), time_period, &series_type, &datatype)
            .await?)
    })
}

fn dema(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let time_period = args.u64("time_period")?;
        let series_type = args.string("series_type")?;
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .dema(&symbol, &interval, month.as_deref(), time_period, &series_type, &datatype)
            .await?)
    })
}

fn tema(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let time_period = args.u64("time_period")?;
        let series_type = args.string("series_type")?;
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .tema(&symbol, &interval, month.as_deref(), time_period, &series_type, &datatype)
            .await?)
    })
}

fn trima(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let time_period = args.u64("time_period")?;
        let series_type = args.string("series_type")?;
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .trima(&symbol, &interval, month.as_deref(), time_period, &series_type, &datatype)
            .await?)
    })
}

fn kama(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let time_period = args.u64("time_period")?;
        let series_type = args.string("series_type")?;
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .kama(&symbol, &interval, month.as_deref(), time_period, &series_type, &datatype)
            .await?)
    })
}

fn mama(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let series_type = args.string("series_type")?;
        let fastlimit = args.f64("fastlimit")?;
        let slowlimit = args.f64("slowlimit")?;
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .mama(
                &symbol,
                &interval,
                month.as_deref(),
                &series_type,
                fastlimit,
                slowlimit,
                &datatype,
            )
            .await?)
    })
}

fn vwap(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .vwap(&symbol, &interval, month.as_deref(), &datatype)
            .await?)
    })
}

fn t3(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let time_period = args.u64("time_period")?;
        let series_type = args.string("series_type")?;
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .t3(&symbol, &interval, month.as_deref(), time_period, &series_type, &datatype)
            .await?)
    })
}

fn macd(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let series_type = args.string("series_type")?;
        let fastperiod = args.u64_or("fastperiod", 12);
        let slowperiod = args.u64_or("slowperiod", 26);
        let signalperiod = args.u64_or("signalperiod", 9);
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .macd(
                &symbol,
                &interval,
                month.as_deref(),
                &series_type,
                fastperiod,
                slowperiod,
                signalperiod,
                &datatype,
            )
            .await?)
    })
}

fn macdext(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let series_type = args.string("series_type")?;
        let fastperiod = args.u64_or("fastperiod", 12);
        let slowperiod = args.u64_or("slowperiod", 26);
        let signalperiod = args.u64_or("signalperiod", 9);
        let fastmatype = args.u64_or("fastmatype", 0);
        let slowmatype = args.u64_or("slowmatype", 0);
        let signalmatype = args.u64_or("signalmatype", 0);
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .macdext(
                &symbol,
                &interval,
                month.as_deref(),
                &series_type,
                fastperiod,
                slowperiod,
                signalperiod,
                fastmatype,
                slowmatype,
                signalmatype,
                &datatype,
            )
            .await?)
    })
}

fn stoch(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let fastkperiod = args.u64_or("fastkperiod", 5);
        let slowkperiod = args.u64_or("slowkperiod", 3);
        let slowdperiod = args.u64_or("slowdperiod", 3);
        let slowkmatype = args.u64_or("slowkmatype", 0);
        let slowdmatype = args.u64_or("slowdmatype", 0);
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .stoch(
                &symbol,
                &interval,
                month.as_deref(),
                fastkperiod,
                slowkperiod,
                slowdperiod,
                slowkmatype,
                slowdmatype,
                &datatype,
            )
            .await?)
    })
}

fn stochf(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let fastkperiod = args.u64_or("fastkperiod", 5);
        let fastdperiod = args.u64_or("fastdperiod", 3);
        let fastdmatype = args.u64_or("fastdmatype", 0);
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .stochf(
                &symbol,
                &interval,
                month.as_deref(),
                fastkperiod,
                fastdperiod,
                fastdmatype,
                &datatype,
            )
            .await?)
    })
}

fn rsi(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let time_period = args.u64_or("time_period", 14);
        let series_type = args.string("series_type")?;
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .rsi(&symbol, &interval, month.as_deref(), time_period, &series_type, &datatype)
            .await?)
    })
}

fn stochrsi(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let time_period = args.u64_or("time_period", 14);
        let series_type = args.string("series_type")?;
        let fastkperiod = args.u64_or("fastkperiod", 5);
        let fastdperiod = args.u64_or("fastdperiod", 3);
        let fastdmatype = args.u64_or("fastdmatype", 0);
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .stochrsi(
                &symbol,
                &interval,
                month.as_deref(),
                time_period,
                &series_type,
                fastkperiod,
                fastdperiod,
                fastdmatype,
                &datatype,
            )
            .await?)
    })
}

fn willr(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let time_period = args.u64_or("time_period", 14);
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .willr(&symbol, &interval, month.as_deref(), time_period, &datatype)
            .await?)
    })
}

fn adx(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let time_period = args.u64_or("time_period", 14);
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .adx(&symbol, &interval, month.as_deref(), time_period, &datatype)
            .await?)
    })
}

fn adxr(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let time_period = args.u64_or("time_period", 14);
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .adxr(&symbol, &interval, month.as_deref(), time_period, &datatype)
            .await?)
    })
}

fn apo(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let series_type = args.string("series_type")?;
        let fastperiod = args.u64_or("fastperiod", 12);
        let slowperiod = args.u64_or("slowperiod", 26);
        let matype = args.u64_or("matype", 0);
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .apo(
                &symbol,
                &interval,
                month.as_deref(),
                &series_type,
                fastperiod,
                slowperiod,
                matype,
                &datatype,
            )
            .await?)
    })
}

fn ppo(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let series_type = args.string("series_type")?;
        let fastperiod = args.u64_or("fastperiod", 12);
        let slowperiod = args.u64_or("slowperiod", 26);
        let matype = args.u64_or("matype", 0);
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .ppo(
                &symbol,
                &interval,
                month.as_deref(),
                &series_type,
                fastperiod,
                slowperiod,
                matype,
                &datatype,
            )
            .await?)
    })
}

fn mom(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let time_period = args.u64_or("time_period", 10);
        let series_type = args.string("series_type")?;
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .mom(&symbol, &interval, month.as_deref(), time_period, &series_type, &datatype)
            .await?)
    })
}

fn bop(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .bop(&symbol, &interval, month.as_deref(), &datatype)
            .await?)
    })
}

fn cci(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let time_period = args.u64_or("time_period", 20);
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .cci(&symbol, &interval, month.as_deref(), time_period, &datatype)
            .await?)
    })
}

fn cmo(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let time_period = args.u64_or("time_period", 14);
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .cmo(&symbol, &interval, month.as_deref(), time_period, &datatype)
            .await?)
    })
}

fn roc(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let time_period = args.u64_or("time_period", 10);
        let series_type = args.string("series_type")?;
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .roc(&symbol, &interval, month.as_deref(), time_period, &series_type, &datatype)
            .await?)
    })
}

fn rocr(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let time_period = args.u64_or("time_period", 10);
        let series_type = args.string("series_type")?;
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .rocr(&symbol, &interval, month.as_deref(), time_period, &series_type, &datatype)
            .await?)
    })
}

fn aroon(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let time_period = args.u64_or("time_period", 14);
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .aroon(&symbol, &interval, month.as_deref(), time_period, &datatype)
            .await?)
    })
}

fn aroonosc(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let time_period = args.u64_or("time_period", 14);
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .aroonosc(&symbol, &interval, month.as_deref(), time_period, &datatype)
            .await?)
    })
}

fn mfi(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let time_period = args.u64_or("time_period", 14);
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .mfi(&symbol, &interval, month.as_deref(), time_period, &datatype)
            .await?)
    })
}

fn trix(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let time_period = args.u64_or("time_period", 30);
        let series_type = args.string("series_type")?;
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .trix(&symbol, &interval, month.as_deref(), time_period, &series_type, &datatype)
            .await?)
    })
}

fn ultosc(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let time_period1 = args.u64_or("time_period1", 7);
        let time_period2 = args.u64_or("time_period2", 14);
        let time_period3 = args.u64_or("time_period3", 28);
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .ultosc(
                &symbol,
                &interval,
                month.as_deref(),
                time_period1,
                time_period2,
                time_period3,
                &datatype,
            )
            .await?)
    })
}

fn dx(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let time_period = args.u64_or("time_period", 14);
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .dx(&symbol, &interval, month.as_deref(), time_period, &datatype)
            .await?)
    })
}

fn minus_di(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let time_period = args.u64_or("time_period", 14);
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .minus_di(&symbol, &interval, month.as_deref(), time_period, &datatype)
            .await?)
    })
}

fn plus_di(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let time_period = args.u64_or("time_period", 14);
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .plus_di(&symbol, &interval, month.as_deref(), time_period, &datatype)
            .await?)
    })
}

fn minus_dm(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let time_period = args.u64_or("time_period", 14);
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .minus_dm(&symbol, &interval, month.as_deref(), time_period, &datatype)
            .await?)
    })
}

fn plus_dm(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let time_period = args.u64_or("time_period", 14);
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .plus_dm(&symbol, &interval, month.as_deref(), time_period, &datatype)
            .await?)
    })
}

fn bbands(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let time_period = args.u64_or("time_period", 20);
        let series_type = args.string("series_type")?;
        let nbdevup = args.u64_or("nbdevup", 2);
        let nbdevdn = args.u64_or("nbdevdn", 2);
        let matype = args.u64_or("matype", 0);
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .bbands(
                &symbol,
                &interval,
                month.as_deref(),
                time_period,
                &series_type,
                nbdevup,
                nbdevdn,
                matype,
                &datatype,
            )
            .await?)
    })
}

fn midpoint(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let time_period = args.u64_or("time_period", 14);
        let series_type = args.string("series_type")?;
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .midpoint(&symbol, &interval, month.as_deref(), time_period, &series_type, &datatype)
            .await?)
    })
}

fn midprice(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let time_period = args.u64_or("time_period", 14);
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .midprice(&symbol, &interval, month.as_deref(), time_period, &datatype)
            .await?)
    })
}

fn sar(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let acceleration = args.f64_or("acceleration", 0.02);
        let maximum = args.f64_or("maximum", 0.2);
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .sar(
                &symbol,
                &interval,
                month.as_deref(),
                acceleration,
                maximum,
                &datatype,
            )
            .await?)
    })
}

fn trange(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .trange(&symbol, &interval, month.as_deref(), &datatype)
            .await?)
    })
}

fn atr(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let time_period = args.u64_or("time_period", 14);
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .atr(&symbol, &interval, month.as_deref(), time_period, &datatype)
            .await?)
    })
}

fn natr(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let time_period = args.u64_or("time_period", 14);
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .natr(&symbol, &interval, month.as_deref(), time_period, &datatype)
            .await?)
    })
}

fn ad(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .ad(&symbol, &interval, month.as_deref(), &datatype)
            .await?)
    })
}

fn adosc(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let fastperiod = args.u64_or("fastperiod", 3);
        let slowperiod = args.u64_or("slowperiod", 10);
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .adosc(
                &symbol,
                &interval,
                month.as_deref(),
                fastperiod,
                slowperiod,
                &datatype,
            )
            .await?)
    })
}

fn obv(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .obv(&symbol, &interval, month.as_deref(), &datatype)
            .await?)
    })
}

fn ht_trendline(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let series_type = args.string("series_type")?;
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .ht_trendline(&symbol, &interval, month.as_deref(), &series_type, &datatype)
            .await?)
    })
}

fn ht_sine(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let series_type = args.string("series_type")?;
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .ht_sine(&symbol, &interval, month.as_deref(), &series_type, &datatype)
            .await?)
    })
}

fn ht_trendmode(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .ht_trendmode(&symbol, &interval, month.as_deref(), &datatype)
            .await?)
    })
}

fn ht_dcperiod(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let series_type = args.string("series_type")?;
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .ht_dcperiod(&symbol, &interval, month.as_deref(), &series_type, &datatype)
            .await?)
    })
}

fn ht_dcphase(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let series_type = args.string("series_type")?;
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .ht_dcphase(&symbol, &interval, month.as_deref(), &series_type, &datatype)
            .await?)
    })
}

fn ht_phasor(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let month = args.opt_string("month");
        let series_type = args.string("series_type")?;
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .ht_phasor(&symbol, &interval, month.as_deref(), &series_type, &datatype)
            .await?)
    })
}
