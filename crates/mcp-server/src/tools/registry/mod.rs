//! Per-family tool tables.
//!
//! Each module contributes its `ToolSpec` entries plus the handler functions
//! that decode arguments and route to the matching client endpoint. Adding a
//! tool is a table entry here, not a new branch anywhere else.

mod commodities;
mod core_stock;
mod crypto;
mod economy;
mod forex;
mod fundamentals;
mod indicators;
mod intelligence;
mod options;

use super::spec::ToolSpec;

/// Assemble the full catalog, grouped by family, declaration-ordered.
pub(crate) fn all() -> Vec<ToolSpec> {
    let mut specs = Vec::new();
    specs.extend(core_stock::specs());
    specs.extend(options::specs());
    specs.extend(intelligence::specs());
    specs.extend(fundamentals::specs());
    specs.extend(forex::specs());
    specs.extend(crypto::specs());
    specs.extend(commodities::specs());
    specs.extend(economy::specs());
    specs.extend(indicators::specs());
    specs
}
