use super::super::args::PackArgs;
use crate::exit_codes;
use anyhow::Context;
use fgz_core::{run_build_hook, CompressionLevel, EntryOrder, HookConfig, PackError};

/// Build the hook configuration from flags and `ARCHIVE_OUT`.
pub(crate) fn hook_config(args: &PackArgs) -> Result<HookConfig, PackError> {
    let order = if args.sort {
        EntryOrder::Sorted
    } else {
        EntryOrder::Filesystem
    };
    let mut config = HookConfig::new(&args.source)
        .with_order(order)
        .with_level(CompressionLevel::new(args.level)?);
    config.destination = args.out.clone();
    Ok(config)
}

pub async fn run(args: PackArgs) -> anyhow::Result<i32> {
    let result = match hook_config(&args) {
        Ok(config) => {
            tracing::debug!(?config, "resolved hook config");
            run_build_hook(&config).await
        }
        Err(e) => Err(e),
    };
    let report = match result {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            if matches!(e, PackError::MissingDestination) {
                eprintln!("hint: pass --out <path> or set ARCHIVE_OUT");
            }
            return Ok(e.exit_code());
        }
    };

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("serialize pack report")?;
        println!("{json}");
    }
    Ok(exit_codes::EXIT_SUCCESS)
}
