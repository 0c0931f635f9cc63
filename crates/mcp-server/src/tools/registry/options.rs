//! Options chain tools.

use alphavantage_client::AvClient;

use crate::tools::args::ToolArgs;
use crate::tools::spec::{HandlerFuture, ParamKind, ParamSpec, ToolSpec};

pub(super) fn specs() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: "realtime_options",
            description: "Fetch realtime options",
            params: const { &[
                ParamSpec::required("symbol", ParamKind::String),
                ParamSpec::optional("contract", ParamKind::String),
                ParamSpec::optional("datatype", ParamKind::String),
            ] },
            handler: realtime_options,
        },
        ToolSpec {
            name: "historical_options",
            description: "Fetch historical options",
            params: const { &[
                ParamSpec::required("symbol", ParamKind::String),
                ParamSpec::optional("contract", ParamKind::String),
                ParamSpec::optional("datatype", ParamKind::String),
            ] },
            handler: historical_options,
        },
    ]
}

fn realtime_options(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let datatype = args.string_or("datatype", "json");
        let contract = args.string_or("contract", "all");
        Ok(client
            .realtime_options(&symbol, &datatype, &contract)
            .await?)
    })
}

fn historical_options(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let symbol = args.string("symbol")?;
        let datatype = args.string_or("datatype", "json");
        let contract = args.string_or("contract", "all");
        Ok(client
            .historical_options(&symbol, &datatype, &contract)
            .await?)
    })
}
