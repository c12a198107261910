use clap::Args;
use std::env;
use std::path::PathBuf;

use lessonscan::scan::{self, ScanOptions, ScanResult};
use lessonscan::{log_status, Error};

use super::CmdResult;

#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    /// Directory holding the lesson files (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Skip lesson files matching this glob (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Print a JSON report instead of the plain command listing
    #[arg(long)]
    pub json: bool,

    /// Log skipped files and the reason to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl ScanArgs {
    fn options(&self) -> lessonscan::Result<ScanOptions> {
        let dir = match &self.dir {
            Some(dir) => dir.clone(),
            None => env::current_dir().map_err(|e| {
                Error::internal_io(e.to_string(), Some("resolve working directory".to_string()))
                    .with_hint("Pass --dir to scan a specific directory")
            })?,
        };

        Ok(ScanOptions {
            dir,
            exclude: self.exclude.clone(),
        })
    }
}

pub fn run(args: &ScanArgs) -> CmdResult<ScanResult> {
    let options = args.options()?;
    let result = scan::scan(&options);

    if args.verbose {
        for skipped in &result.skipped {
            log_status!("scan", "Skipped {}: {}", skipped.file, skipped.reason);
        }
        log_status!(
            "scan",
            "{} commands in {} files",
            result.summary.commands_found,
            result.summary.files_scanned
        );
    }

    Ok((result, 0))
}

pub fn run_text(args: &ScanArgs) -> CmdResult<String> {
    let (result, exit_code) = run(args)?;
    Ok((scan::render_text(&result.commands), exit_code))
}
