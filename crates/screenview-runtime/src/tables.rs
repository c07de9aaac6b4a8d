//! Screen-table selection for the binary and the `tables` subcommand.

use std::path::Path;

use anyhow::Context;
use screenview_core::ScreenNameResolver;

/// Resolver from `--tables` when given, otherwise the built-in tables.
pub fn load_resolver(tables: Option<&Path>) -> anyhow::Result<ScreenNameResolver> {
    match tables {
        Some(path) => ScreenNameResolver::load(path)
            .with_context(|| format!("failed to load screen tables from {}", path.display())),
        None => Ok(ScreenNameResolver::default()),
    }
}

/// TOML dump printed by `screenview tables`.
pub fn render_tables(resolver: &ScreenNameResolver) -> anyhow::Result<String> {
    resolver
        .to_toml()
        .context("failed to serialize screen tables")
}
