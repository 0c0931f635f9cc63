//! US economic indicator tools.

use alphavantage_client::AvClient;

use crate::tools::args::ToolArgs;
use crate::tools::spec::{HandlerFuture, ParamKind, ParamSpec, ToolSpec};

const INTERVAL_DATATYPE: &[ParamSpec] = &[
    ParamSpec::optional("interval", ParamKind::String),
    ParamSpec::optional("datatype", ParamKind::String),
];

const DATATYPE_ONLY: &[ParamSpec] = &[ParamSpec::optional("datatype", ParamKind::String)];

pub(super) fn specs() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: "real_gdp",
            description: "Fetch real GDP",
            params: INTERVAL_DATATYPE,
            handler: real_gdp,
        },
        ToolSpec {
            name: "real_gdp_per_capita",
            description: "Fetch real GDP per capita",
            params: DATATYPE_ONLY,
            handler: real_gdp_per_capita,
        },
        ToolSpec {
            name: "treasury_yield",
            description: "Fetch treasury yield",
            params: const { &[
                ParamSpec::optional("interval", ParamKind::String),
                ParamSpec::optional("maturity", ParamKind::String),
                ParamSpec::optional("datatype", ParamKind::String),
            ] },
            handler: treasury_yield,
        },
        ToolSpec {
            name: "federal_funds_rate",
            description: "Fetch federal funds rate",
            params: INTERVAL_DATATYPE,
            handler: federal_funds_rate,
        },
        ToolSpec {
            name: "cpi",
            description: "Fetch consumer price index",
            params: INTERVAL_DATATYPE,
            handler: cpi,
        },
        ToolSpec {
            name: "inflation",
            description: "Fetch inflation",
            params: DATATYPE_ONLY,
            handler: inflation,
        },
        ToolSpec {
            name: "retail_sales",
            description: "Fetch retail sales",
            params: DATATYPE_ONLY,
            handler: retail_sales,
        },
        ToolSpec {
            name: "durables",
            description: "Fetch durables",
            params: DATATYPE_ONLY,
            handler: durables,
        },
        ToolSpec {
            name: "unemployment",
            description: "Fetch unemployment",
            params: DATATYPE_ONLY,
            handler: unemployment,
        },
        ToolSpec {
            name: "nonfarm_payroll",
            description: "Fetch nonfarm payroll",
            params: DATATYPE_ONLY,
            handler: nonfarm_payroll,
        },
    ]
}

fn real_gdp(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let interval = args.string_or("interval", "monthly");
        let datatype = args.string_or("datatype", "json");
        Ok(client.real_gdp(&interval, &datatype).await?)
    })
}

fn real_gdp_per_capita(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let datatype = args.string_or("datatype", "json");
        Ok(client.real_gdp_per_capita(&datatype).await?)
    })
}

fn treasury_yield(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let interval = args.string_or("interval", "monthly");
        let maturity = args.string_or("maturity", "10year");
        let datatype = args.string_or("datatype", "json");
        Ok(client
            .treasury_yield(&interval, &maturity, &datatype)
            .await?)
    })
}

fn federal_funds_rate(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let interval = args.string_or("interval", "monthly");
        let datatype = args.string_or("datatype", "json");
        Ok(client.federal_funds_rate(&interval, &datatype).await?)
    })
}

fn cpi(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let interval = args.string_or("interval", "monthly");
        let datatype = args.string_or("datatype", "json");
        Ok(client.cpi(&interval, &datatype).await?)
    })
}

fn inflation(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let datatype = args.string_or("datatype", "json");
        Ok(client.inflation(&datatype).await?)
    })
}

fn retail_sales(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let datatype = args.string_or("datatype", "json");
        Ok(client.retail_sales(&datatype).await?)
    })
}

fn durables(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let datatype = args.string_or("datatype", "json");
        Ok(client.durables(&datatype).await?)
    })
}

fn unemployment(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let datatype = args.string_or("datatype", "json");
        Ok(client.unemployment(&datatype).await?)
    })
}

fn nonfarm_payroll(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let datatype = args.string_or("datatype", "json");
        Ok(client.nonfarm_payrolls(&datatype).await?)
    })
}
