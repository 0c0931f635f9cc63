//! Fundamental data tools.

use alphavantage_client::AvClient;

use crate::tools::args::ToolArgs;
use crate::tools::spec::{HandlerFuture, ParamKind, ParamSpec, ToolSpec};

const SYMBOL_ONLY: &[ParamSpec] = &[ParamSpec::required("symbol", ParamKind::String)];

pub(super) fn specs() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: "company_overview",
            description: "Fetch company overview",
            params: SYMBOL_ONLY,
            handler: company_overview,
        },
        ToolSpec {
            name: "etf_profile",
            description: "Fetch ETF profile",
            params: SYMBOL_ONLY,
            handler: etf_profile,
        },
        ToolSpec {
            name: "company_dividends",
            description: "Fetch company dividends",
            params: SYMBOL_ONLY,
            handler: company_dividends,
        },
        ToolSpec {
            name: "company_splits",
            description: "Fetch company splits",
            params: SYMBOL_ONLY,
            handler: company_splits,
        },
        ToolSpec {
            name: "income_statement",
            description: "Fetch company income statement",
            params: SYMBOL_ONLY,
            handler: income_statement,
        },
        ToolSpec {
            name: "balance_sheet",
            description: "Fetch company balance sheet",
            params: SYMBOL_ONLY,
            handler: balance_sheet,
        },
        ToolSpec {
            name: "cash_flow",
            description: "Fetch company cash flow",
            params: SYMBOL_ONLY,
            handler: cash_flow,
        },
        ToolSpec {
            name: "listing_status",
            description: "Fetch listing status",
            params: const { &[
                ParamSpec::optional("symbol", ParamKind::String),
                ParamSpec::optional("date", ParamKind::String),
                ParamSpec::optional("state", ParamKind::String),
            ] },
            handler: listing_status,
        },
        ToolSpec {
            name: "earnings_calendar",
            description: "Fetch company earnings calendar",
            params: const { &[
                ParamSpec::optional("symbol", ParamKind::String),
                ParamSpec::optional("horizon", ParamKind::String),
            ] },
            handler: earnings_calendar,
        },
        ToolSpec {
            name: "ipo_calendar",
            description: "Fetch IPO calendar",
            params: &[],
            handler: ipo_calendar,
        },
    ]
}

fn company_overview(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        Ok(client.company_overview(&symbol).await?)
    })
}

fn etf_profile(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        Ok(client.etf_profile(&symbol).await?)
    })
}

fn company_dividends(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        Ok(client.dividends(&symbol).await?)
    })
}

fn company_splits(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        Ok(client.splits(&symbol).await?)
    })
}

fn income_statement(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        Ok(client.income_statement(&symbol).await?)
    })
}

fn balance_sheet(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        Ok(client.balance_sheet(&symbol).await?)
    })
}

fn cash_flow(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        Ok(client.cash_flow(&symbol).await?)
    })
}

fn listing_status(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.opt_string("symbol");
        let date = args.opt_string("date");
        let state = args.opt_string("state");
        Ok(client
            .listing_status(symbol.as_deref(), date.as_deref(), state.as_deref())
            .await?)
    })
}

fn earnings_calendar(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.opt_string("symbol");
        let horizon = args.opt_string("horizon");
        Ok(client
            .earnings_calendar(symbol.as_deref(), horizon.as_deref())
            .await?)
    })
}

fn ipo_calendar(client: &AvClient, _args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move { Ok(client.ipo_calendar().await?) })
}
