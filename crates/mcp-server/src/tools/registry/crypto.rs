//! Digital currency tools.

use alphavantage_client::AvClient;

use crate::tools::args::ToolArgs;
use crate::tools::spec::{HandlerFuture, ParamKind, ParamSpec, ToolSpec};

const SYMBOL_MARKET: &[ParamSpec] = &[
    ParamSpec::required("symbol", ParamKind::String),
    ParamSpec::required("market", ParamKind::String),
];

pub(super) fn specs() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: "crypto_intraday",
            description: "Fetch crypto intraday",
            params: const { &[
                ParamSpec::required("symbol", ParamKind::String),
                ParamSpec::required("market", ParamKind::String),
                ParamSpec::required("interval", ParamKind::String),
                ParamSpec::optional("outputsize", ParamKind::String),
                ParamSpec::optional("datatype", ParamKind::String),
            ] },
            handler: crypto_intraday,
        },
        ToolSpec {
            name: "digital_currency_daily",
            description: "Fetch digital currency daily",
            params: SYMBOL_MARKET,
            handler: digital_currency_daily,
        },
        ToolSpec {
            name: "digital_currency_weekly",
            description: "Fetch digital currency weekly",
            params: SYMBOL_MARKET,
            handler: digital_currency_weekly,
        },
        ToolSpec {
            name: "digital_currency_monthly",
            description: "Fetch digital currency monthly",
            params: SYMBOL_MARKET,
            handler: digital_currency_monthly,
        },
    ]
}

fn crypto_intraday(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let market = args.string("market")?;
        let interval = args.string("interval")?;
        let outputsize = args.string_or("outputsize", "compact");
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .crypto_intraday(&symbol, &market, &interval, &datatype, &outputsize)
            .await?)
    })
}

fn digital_currency_daily(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let market = args.string("market")?;
        Ok(client.digital_currency_daily(&symbol, &market).await?)
    })
}

fn digital_currency_weekly(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let market = args.string("market")?;
        Ok(client.digital_currency_weekly(&symbol, &market).await?)
    })
}

fn digital_currency_monthly(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let market = args.string("market")?;
        Ok(client.digital_currency_monthly(&symbol, &market).await?)
    })
}
