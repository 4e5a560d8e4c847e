use std::ffi::OsString;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::{Command, HarnessArgs};
use crate::error::AppResult;

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;

    if let Some(config) = crate::config::load_config(args.config.as_deref())? {
        crate::config::apply_config(&mut args, &matches, &config)?;
    }

    crate::logger::init_logging(args.verbose, args.no_color);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(args))
}

fn parse_args() -> AppResult<(HarnessArgs, ArgMatches)> {
    let cmd = HarnessArgs::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();
    let matches = cmd.get_matches_from(raw_args);
    let args = HarnessArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

async fn run_async(args: HarnessArgs) -> AppResult<()> {
    match &args.command {
        Some(Command::Generate(generate)) => crate::loadgen::run_generate(generate).await,
        None => crate::app::run_harness(&args).await,
    }
}
