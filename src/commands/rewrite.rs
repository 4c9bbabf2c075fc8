use clap::Args;
use std::path::{Path, PathBuf};

use recase::defaults;
use recase::rewrite::{self, RewriteOptions, WordPair};
use recase::{Error, RewriteSummary};

use crate::commands::CmdResult;

#[derive(Args, Debug)]
pub struct RewriteArgs {
    /// Directory to rewrite recursively
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// JSON config file overriding the eligible extensions
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Keep rewriting other files when one cannot be read or written
    #[arg(long)]
    pub keep_going: bool,
}

/// Run one rewrite pass. Notices go to stderr when stdout is reserved for JSON.
pub fn run(args: RewriteArgs, json: bool) -> CmdResult<RewriteSummary> {
    run_with_notices(args, &mut |path| {
        crate::output::print_notice(&format!("Updated: {}", path.display()), json)
    })
}

fn run_with_notices(
    args: RewriteArgs,
    on_update: &mut impl FnMut(&Path) -> recase::Result<()>,
) -> CmdResult<RewriteSummary> {
    let config = defaults::load_config(args.config.as_deref())?;
    let options = RewriteOptions {
        config,
        keep_going: args.keep_going,
    };

    let summary =
        rewrite::process_directory(&args.root, WordPair::builtin(), &options, on_update)?;

    if summary.has_failures() {
        return Err(Error::rewrite_partial_failure(
            summary.failures.iter().map(|f| f.file.clone()).collect(),
            summary.updated,
        ));
    }

    Ok((summary, 0))
}
