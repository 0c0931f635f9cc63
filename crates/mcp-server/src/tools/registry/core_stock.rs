//! Quotes, time series, symbol search, and market status.

use alphavantage_client::AvClient;

use crate::tools::args::ToolArgs;
use crate::tools::spec::{HandlerFuture, ParamKind, ParamSpec, ToolSpec};

pub(super) fn specs() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: "stock_quote",
            description: "Fetch a stock quote",
            params: const { &[
                ParamSpec::required("symbol", ParamKind::String),
                ParamSpec::optional("datatype", ParamKind::String),
            ] },
            handler: stock_quote,
        },
        ToolSpec {
            name: "time_series_intraday",
            description: "Fetch a time series intraday",
            params: const { &[
                ParamSpec::required("symbol", ParamKind::String),
                ParamSpec::required("interval", ParamKind::String),
                ParamSpec::optional("adjusted", ParamKind::Boolean),
                ParamSpec::optional("extended_hours", ParamKind::Boolean),
                ParamSpec::optional("outputsize", ParamKind::String),
                ParamSpec::optional("month", ParamKind::String),
                ParamSpec::optional("datatype", ParamKind::String),
            ] },
            handler: time_series_intraday,
        },
        ToolSpec {
            name: "time_series_daily",
            description: "Fetch a time series daily",
            params: const { &[
                ParamSpec::required("symbol", ParamKind::String),
                ParamSpec::optional("outputsize", ParamKind::String),
                ParamSpec::optional("datatype", ParamKind::String),
            ] },
            handler: time_series_daily,
        },
        ToolSpec {
            name: "time_series_daily_adjusted",
            description: "Fetch a time series daily adjusted",
            params: const { &[
                ParamSpec::required("symbol", ParamKind::String),
                ParamSpec::optional("outputsize", ParamKind::String),
                ParamSpec::optional("datatype", ParamKind::String),
            ] },
            handler: time_series_daily_adjusted,
        },
        ToolSpec {
            name: "time_series_weekly",
            description: "Fetch a time series weekly",
            params: const { &[
                ParamSpec::required("symbol", ParamKind::String),
                ParamSpec::optional("datatype", ParamKind::String),
            ] },
            handler: time_series_weekly,
        },
        ToolSpec {
            name: "time_series_weekly_adjusted",
            description: "Fetch a time series weekly adjusted",
            params: const { &[
                ParamSpec::required("symbol", ParamKind::String),
                ParamSpec::optional("datatype", ParamKind::String),
            ] },
            handler: time_series_weekly_adjusted,
        },
        ToolSpec {
            name: "time_series_monthly",
            description: "Fetch a time series monthly",
            params: const { &[
                ParamSpec::required("symbol", ParamKind::String),
                ParamSpec::optional("datatype", ParamKind::String),
            ] },
            handler: time_series_monthly,
        },
        ToolSpec {
            name: "time_series_monthly_adjusted",
            description: "Fetch a time series monthly adjusted",
            params: const { &[
                ParamSpec::required("symbol", ParamKind::String),
                ParamSpec::optional("datatype", ParamKind::String),
            ] },
            handler: time_series_monthly_adjusted,
        },
        ToolSpec {
            name: "realtime_bulk_quotes",
            description: "Fetch real time bulk quotes",
            params: const { &[
                ParamSpec::required("symbols", ParamKind::StringArray),
                ParamSpec::optional("datatype", ParamKind::String),
            ] },
            handler: realtime_bulk_quotes,
        },
        ToolSpec {
            name: "symbol_search",
            description: "Search for symbols by keywords",
            params: const { &[
                ParamSpec::required("keywords", ParamKind::String),
                ParamSpec::optional("datatype", ParamKind::String),
            ] },
            handler: symbol_search,
        },
        ToolSpec {
            name: "market_status",
            description: "Fetch global market open/closed status",
            params: &[],
            handler: market_status,
        },
    ]
}

fn stock_quote(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let datatype = args.string_or("datatype", "json");
        Ok(client.quote(&symbol, &datatype).await?)
    })
}

fn time_series_intraday(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let interval = args.string("interval")?;
        let datatype = args.string_or("datatype", "json");
        let adjusted = args.bool_or("adjusted", true);
        let extended_hours = args.bool_or("extended_hours", true);
        let outputsize = args.string_or("outputsize", "compact");
        let month = args.opt_string("month");
        Ok(client
            .intraday(
                &symbol,
                &interval,
                &datatype,
                extended_hours,
                adjusted,
                &outputsize,
                month.as_deref(),
            )
            .await?)
    })
}

fn time_series_daily(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let datatype = args.string_or("datatype", "json");
        let outputsize = args.string_or("outputsize", "compact");
        Ok(client
            .time_series_daily(&symbol, &datatype, &outputsize)
            .await?)
    })
}

fn time_series_daily_adjusted(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let datatype = args.string_or("datatype", "json");
        let outputsize = args.string_or("outputsize", "compact");
        Ok(client
            .time_series_daily_adjusted(&symbol, &datatype, &outputsize)
            .await?)
    })
}

fn time_series_weekly(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let datatype = args.string_or("datatype", "json");
        Ok(client.time_series_weekly(&symbol, &datatype).await?)
    })
}

fn time_series_weekly_adjusted(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .time_series_weekly_adjusted(&symbol, &datatype)
            .await?)
    })
}

fn time_series_monthly(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let datatype = args.string_or("datatype", "json");
        Ok(client.time_series_monthly(&symbol, &datatype).await?)
    })
}

fn time_series_monthly_adjusted(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .time_series_monthly_adjusted(&symbol, &datatype)
            .await?)
    })
}

fn realtime_bulk_quotes(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbols = args.string_array("symbols")?;
        let datatype = args.string_or("datatype", "json");
        Ok(client.realtime_bulk_quotes(&symbols, &datatype).await?)
    })
}

fn symbol_search(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let keywords = args.string("keywords")?;
        let datatype = args.string_or("datatype", "json");
        Ok(client.symbol_search(&keywords, &datatype).await?)
    })
}

fn market_status(client: &AvClient, _args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move { Ok(client.market_status().await?) })
}
