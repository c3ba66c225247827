//! # sheetwire-client
//!
//! The object model on top of the sheetwire marshaling layers: [`Workbook`]
//! and [`Tab`] handles that fetch, normalize, upload, and format sheet data
//! through a pluggable [`SheetsTransport`].
//!
//! The transport trait is the boundary of this library: HTTP, OAuth, retry,
//! and discovery all live in the implementation behind it. A [`Session`]
//! wraps the transport and checks credential freshness once per logical
//! action before any call goes out.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use sheetwire_client::{Session, SheetsTransport, Workbook};
//!
//! # async fn example<T: SheetsTransport>(transport: T) -> sheetwire_client::Result<()> {
//! let session = Arc::new(Session::new(transport));
//! let workbook = Workbook::open(session, "1BxiMVs0XRA5nFMdKvBdBZjgmUUqptlbs74OgvE2upms").await?;
//! let tab = workbook.fetch_tab("expenses").await?;
//! let table = tab.fetch_table(true).await?;
//! println!("{} rows", table.nrows());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod tab;
pub mod transport;
pub mod workbook;

// Re-exports for convenience
pub use error::{Error, Result};
pub use tab::Tab;
pub use transport::{Session, SheetsTransport};
pub use workbook::Workbook;
