//! Alpha Intelligence tools: news, movers, insiders, analytics.

use alphavantage_client::AvClient;

use crate::tools::args::ToolArgs;
use crate::tools::spec::{HandlerFuture, ParamKind, ParamSpec, ToolSpec};

pub(super) fn specs() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: "news_sentiment",
            description: "Fetch news sentiment",
            params: const { &[
                ParamSpec::optional("tickers", ParamKind::StringArray),
                ParamSpec::optional("topics", ParamKind::String),
                ParamSpec::optional("time_from", ParamKind::String),
                ParamSpec::optional("time_to", ParamKind::String),
                ParamSpec::optional("sort", ParamKind::String),
                ParamSpec::optional("limit", ParamKind::Number),
                ParamSpec::optional("datatype", ParamKind::String),
            ] },
            handler: news_sentiment,
        },
        ToolSpec {
            name: "top_gainers_losers",
            description: "Fetch top gainers and losers",
            params: &[],
            handler: top_gainers_losers,
        },
        ToolSpec {
            name: "insider_transactions",
            description: "Fetch insider transactions",
            params: const { &[ParamSpec::required("symbol", ParamKind::String)] },
            handler: insider_transactions,
        },
        ToolSpec {
            name: "analytics_fixed_window",
            description: "Fetch analytics fixed window",
            params: const { &[
                ParamSpec::required("symbols", ParamKind::StringArray),
                ParamSpec::required("series_range", ParamKind::String),
                ParamSpec::required("interval", ParamKind::String),
                ParamSpec::required("calculations", ParamKind::StringArray),
                ParamSpec::optional("ohlc", ParamKind::String),
            ] },
            handler: analytics_fixed_window,
        },
        ToolSpec {
            name: "analytics_sliding_window",
            description: "Fetch analytics sliding window",
            params: const { &[
                ParamSpec::required("symbols", ParamKind::StringArray),
                ParamSpec::required("series_range", ParamKind::String),
                ParamSpec::required("interval", ParamKind::String),
                ParamSpec::required("calculations", ParamKind::StringArray),
                ParamSpec::required("window_size", ParamKind::Number),
                ParamSpec::optional("ohlc", ParamKind::String),
            ] },
            handler: analytics_sliding_window,
        },
    ]
}

fn news_sentiment(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let tickers = args.string_array_or_empty("tickers")?;
        let datatype = args.string_or("datatype", "json");
        let topics = args.opt_string("topics");
        let time_from = args.opt_string("time_from");
        let time_to = args.opt_string("time_to");
        let sort = args.string_or("sort", "LATEST");
        let limit = args.u64_or("limit", 50);
        Ok(client
            .news_sentiment(
                &tickers,
                &datatype,
                topics.as_deref(),
                time_from.as_deref(),
                time_to.as_deref(),
                &sort,
                limit,
            )
            .await?)
    })
}

fn top_gainers_losers(client: &AvClient, _args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move { Ok(client.top_gainers_losers().await?) })
}

fn insider_transactions(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        Ok(client.insider_transactions(&symbol).await?)
    })
}

fn analytics_fixed_window(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbols = args.string_array("symbols")?;
        let interval = args.string("interval")?;
        let series_range = args.string("series_range")?;
        let ohlc = args.string_or("ohlc", "close");
        let calculations = args.string_array("calculations")?;
        Ok(client
            .analytics_fixed_window(&symbols, &interval, &series_range, &ohlc, &calculations)
            .await?)
    })
}

fn analytics_sliding_window(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbols = args.string_array("symbols")?;
        let interval = args.string("interval")?;
        let series_range = args.string("series_range")?;
        let ohlc = args.string_or("ohlc", "close");
        let window_size = args.u64("window_size")?;
        let calculations = args.string_array("calculations")?;
        Ok(client
            .analytics_sliding_window(
                &symbols,
                &interval,
                &series_range,
                &ohlc,
                window_size,
                &calculations,
            )
            .await?)
    })
}
