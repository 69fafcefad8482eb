//! Diagnostics command: dump the runtime report without connecting

use crate::config::ProbeConfig;
use crate::diagnostics::DiagnosticsReport;
use anyhow::Result;
use tracing::debug;

/// Handle the diagnostics command
pub fn handle_diagnostics() -> Result<()> {
    debug!("Collecting local diagnostic report");
    let report = DiagnosticsReport::collect(&ProbeConfig::default(), None);
    print!("{report}");
    Ok(())
}
