//! Commodity price tools. All take an optional interval and datatype.

use alphavantage_client::AvClient;

use crate::tools::args::ToolArgs;
use crate::tools::spec::{HandlerFuture, ParamKind, ParamSpec, ToolSpec};

const INTERVAL_DATATYPE: &[ParamSpec] = &[
    ParamSpec::optional("interval", ParamKind::String),
    ParamSpec::optional("datatype", ParamKind::String),
];

pub(super) fn specs() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: "wti_crude_oil",
            description: "Fetch WTI crude oil",
            params: INTERVAL_DATATYPE,
            handler: wti_crude_oil,
        },
        ToolSpec {
            name: "brent_crude_oil",
            description: "Fetch Brent crude oil",
            params: INTERVAL_DATATYPE,
            handler: brent_crude_oil,
        },
        ToolSpec {
            name: "natural_gas",
            description: "Fetch natural gas",
            params: INTERVAL_DATATYPE,
            handler: natural_gas,
        },
        ToolSpec {
            name: "copper",
            description: "Fetch copper",
            params: INTERVAL_DATATYPE,
            handler: copper,
        },
        ToolSpec {
            name: "aluminum",
            description: "Fetch aluminum",
            params: INTERVAL_DATATYPE,
            handler: aluminum,
        },
        ToolSpec {
            name: "wheat",
            description: "Fetch wheat",
            params: INTERVAL_DATATYPE,
            handler: wheat,
        },
        ToolSpec {
            name: "corn",
            description: "Fetch corn",
            params: INTERVAL_DATATYPE,
            handler: corn,
        },
        ToolSpec {
            name: "cotton",
            description: "Fetch cotton",
            params: INTERVAL_DATATYPE,
            handler: cotton,
        },
        ToolSpec {
            name: "sugar",
            description: "Fetch sugar",
            params: INTERVAL_DATATYPE,
            handler: sugar,
        },
        ToolSpec {
            name: "coffee",
            description: "Fetch coffee",
            params: INTERVAL_DATATYPE,
            handler: coffee,
        },
        ToolSpec {
            name: "all_commodities",
            description: "Fetch all commodities",
            params: INTERVAL_DATATYPE,
            handler: all_commodities,
        },
    ]
}

fn interval_and_datatype(args: &ToolArgs) -> (String, String) {
    (
        args.string_or("interval", "monthly"),
        args.string_or("datatype", "json"),
    )
}

fn wti_crude_oil(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let (interval, datatype) = interval_and_datatype(&args);
        Ok(client.wti_crude(&interval, &datatype).await?)
    })
}

fn brent_crude_oil(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let (interval, datatype) = interval_and_datatype(&args);
        Ok(client.brent_crude(&interval, &datatype).await?)
    })
}

fn natural_gas(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let (interval, datatype) = interval_and_datatype(&args);
        Ok(client.natural_gas(&interval, &datatype).await?)
    })
}

fn copper(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let (interval, datatype) = interval_and_datatype(&args);
        Ok(client.copper(&interval, &datatype).await?)
    })
}

fn aluminum(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let (interval, datatype) = interval_and_datatype(&args);
        Ok(client.aluminum(&interval, &datatype).await?)
    })
}

fn wheat(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let (interval, datatype) = interval_and_datatype(&args);
        Ok(client.wheat(&interval, &datatype).await?)
    })
}

fn corn(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let (interval, datatype) = interval_and_datatype(&args);
        Ok(client.corn(&interval, &datatype).await?)
    })
}

fn cotton(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let (interval, datatype) = interval_and_datatype(&args);
        Ok(client.cotton(&interval, &datatype).await?)
    })
}

fn sugar(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let (interval, datatype) = interval_and_datatype(&args);
        Ok(client.sugar(&interval, &datatype).await?)
    })
}

fn coffee(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let (interval, datatype) = interval_and_datatype(&args);
        Ok(client.coffee(&interval, &datatype).await?)
    })
}

fn all_commodities(client: &AvClient, args: ToolArgs) -> HandlerFuture<'_> {
    Box::pin(async move {
        let (interval, datatype) = interval_and_datatype(&args);
        Ok(client.all_commodities(&interval, &datatype).await?)
    })
}
