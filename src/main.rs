/// Main file
use anyhow::Result;
use butler::app_log::log_env_init;
use butler::args::resolve_args;
use butler::generate;
use log::error;

fn main() -> Result<()> {
    let args = resolve_args();
    log_env_init(args.verbose);
    generate(args).inspect_err(|e| error!("{e}"))?;
    Ok(())
}
