//! Foreign exchange tools.

use alphavantage_client::AvClient;

use crate::tools::args::ToolArgs;
use crate::tools::spec::{HandlerFuture, ParamKind, ParamSpec, ToolSpec};

pub(super) fn specs() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: "exchange_rate",
            description: "Fetch exchange rate",
            params: const { &[
                ParamSpec::required("from_currency", ParamKind::String),
                ParamSpec::required("to_currency", ParamKind::String),
            ] },
            handler: exchange_rate,
        },
        ToolSpec {
            name: "fx_intraday",
            description: "Fetch FX intraday",
            params: const { &[
                ParamSpec::required("from_symbol", ParamKind::String),
                ParamSpec::required("to_symbol", ParamKind::String),
                ParamSpec::required("interval", ParamKind::String),
                ParamSpec::optional("outputsize", ParamKind::String),
                ParamSpec::optional("datatype", ParamKind::String),
            ] },
            handler: fx_intraday,
        },
        ToolSpec {
            name: "fx_daily",
            description: "Fetch FX daily",
            params: const { &[
                ParamSpec::required("from_symbol", ParamKind::String),
                ParamSpec::required("to_symbol", ParamKind::String),
                ParamSpec::optional("outputsize", ParamKind::String),
                ParamSpec::optional("datatype", ParamKind::String),
            ] },
            handler: fx_daily,
        },
        ToolSpec {
            name: "fx_weekly",
            description: "Fetch FX weekly",
            params: const { &[
                ParamSpec::required("from_symbol", ParamKind::String),
                ParamSpec::required("to_symbol", ParamKind::String),
                ParamSpec::optional("datatype", ParamKind::String),
            ] },
            handler: fx_weekly,
        },
        ToolSpec {
            name: "fx_monthly",
            description: "Fetch FX monthly",
            params: const { &[
                ParamSpec::required("from_symbol", ParamKind::String),
                ParamSpec::required("to_symbol", ParamKind::String),
                ParamSpec::optional("datatype", ParamKind::String),
            ] },
            handler: fx_monthly,
        },
    ]
}

fn exchange_rate(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let from_currency = args.string("from_currency")?;
        let to_currency = args.string("to_currency")?;
        Ok(client.exchange_rate(&from_currency, &to_currency).await?)
    })
}

fn fx_intraday(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let from_symbol = args.string("from_symbol")?;
        let to_symbol = args.string("to_symbol")?;
        let interval = args.string("interval")?;
        let outputsize = args.string_or("outputsize", "compact");
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .fx_intraday(&from_symbol, &to_symbol, &interval, &outputsize, &datatype)
            .await?)
    })
}

fn fx_daily(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let from_symbol = args.string("from_symbol")?;
        let to_symbol = args.string("to_symbol")?;
        let datatype = args.string_or("datatype", "json");
        let outputsize = args.string_or("outputsize", "compact");
        Ok(client
            .fx_daily(&from_symbol, &to_symbol, &datatype, &outputsize)
            .await?)
    })
}

fn fx_weekly(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let from_symbol = args.string("from_symbol")?;
        let to_symbol = args.string("to_symbol")?;
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .fx_weekly(&from_symbol, &to_symbol, &datatype)
            .await?)
    })
}

fn fx_monthly(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let from_symbol = args.string("from_symbol")?;
        let to_symbol = args.string("to_symbol")?;
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .fx_monthly(&from_symbol, &to_symbol, &datatype)
            .await?)
    })
}
