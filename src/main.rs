//! lira-config: assemble the Lira workflow-submission service configuration
//!
//! Reads an environment document and a secrets document, interpolates the WDL
//! locations from the supplied prefixes, and prints the merged configuration
//! as sorted, pretty-printed JSON.

use anyhow::Result;

fn main() -> Result<()> {
    lira_config::cli::run()
}
