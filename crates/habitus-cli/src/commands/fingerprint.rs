//! Fingerprint command

use super::ProfileArgs;
use crate::error::CliResult;
use crate::output::{print_json, OutputFormat};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct FingerprintOutput {
    key: String,
    fingerprint: String,
}

/// Print the cache key and fingerprint for a profile
pub fn execute(args: ProfileArgs, format: OutputFormat) -> CliResult<()> {
    let profile = args.into_profile();
    let output = FingerprintOutput {
        key: habitus_fingerprint::fingerprint_key(&profile),
        fingerprint: habitus_fingerprint::fingerprint(&profile),
    };

    match format {
        OutputFormat::Json => print_json(&output)?,
        OutputFormat::Table => {
            println!("Key:         {}", output.key);
            println!("Fingerprint: {}", output.fingerprint);
        }
    }
    Ok(())
}
