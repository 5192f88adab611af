//! Serve command handler.

use anyhow::{Context, Result};

use crate::cli::ServeArgs;
use crate::cli::config::Config;
use crate::server;
use crate::service::NoteService;

pub fn handle_serve(args: &ServeArgs, service: &NoteService, config: &Config) -> Result<()> {
    let addr = config.listen_addr(args.addr.as_deref());

    let runtime = tokio::runtime::Runtime::new().with_context(|| "failed to start runtime")?;
    runtime.block_on(server::serve(service.clone(), &addr))
}
