//! Composed logging helpers.
//!
//! Builds a message through a closure-scoped composition session and emits
//! it as a `tracing` event. This crate only *emits*; installing a
//! subscriber is the binary's business.

use weft_core::application::{Composer, compose};
use weft_core::error::ComposeResult;

/// Compose a message and emit it at INFO.
pub fn info<F>(f: F) -> ComposeResult<()>
where
    F: FnOnce(&mut Composer<'_, String>) -> ComposeResult<()>,
{
    let message = compose(f)?;
    tracing::info!("{message}");
    Ok(())
}

/// Compose a message and emit it at WARN.
pub fn warn<F>(f: F) -> ComposeResult<()>
where
    F: FnOnce(&mut Composer<'_, String>) -> ComposeResult<()>,
{
    let message = compose(f)?;
    tracing::warn!("{message}");
    Ok(())
}

/// Compose a message and emit it at ERROR.
pub fn error<F>(f: F) -> ComposeResult<()>
where
    F: FnOnce(&mut Composer<'_, String>) -> ComposeResult<()>,
{
    let message = compose(f)?;
    tracing::error!("{message}");
    Ok(())
}

/// Compose a message and emit it at DEBUG.
pub fn debug<F>(f: F) -> ComposeResult<()>
where
    F: FnOnce(&mut Composer<'_, String>) -> ComposeResult<()>,
{
    let message = compose(f)?;
    tracing::debug!("{message}");
    Ok(())
}
