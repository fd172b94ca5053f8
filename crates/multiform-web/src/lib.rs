//! multiform-web - Web frontend for multiform using Leptos
//!
//! The `csr` feature builds the WASM app (via Trunk); the default `server`
//! feature adds an Axum server for the compiled `dist/` bundle.

#![recursion_limit = "1024"]

pub mod app;
pub mod components;
pub mod form;
pub mod pages;
#[cfg(feature = "server")]
pub mod router;

pub use app::App;
pub use form::{ConsoleSubmitHandler, FormHandle};
#[cfg(feature = "server")]
pub use router::{create_router, run, ServerConfig};
