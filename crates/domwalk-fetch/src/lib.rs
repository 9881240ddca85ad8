//! Single-request async HTTP GET for domwalk.
//!
//! Each call issues exactly one GET request. A `200 OK` response yields the
//! body; any other status yields [`FetchError::UnexpectedStatus`]. There is
//! no retry, caching or cancellation.
//!
//! Both success and failure are delivered through the same channel: the
//! returned `Result` for [`Fetcher::fetch`], or the callback for
//! [`get_async`] and [`Fetcher::get_async`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use domwalk_fetch::get_async;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (tx, rx) = tokio::sync::oneshot::channel();
//!     get_async("https://example.com/", move |result| {
//!         let _ = tx.send(result);
//!     });
//!
//!     match rx.await.unwrap() {
//!         Ok(body) => println!("{}", body),
//!         Err(e) => eprintln!("{}", e),
//!     }
//! }
//! ```
pub mod error;
pub mod fetcher;
pub mod options;
pub mod request;

pub use error::{FetchError, FetchResult};
pub use fetcher::{Fetcher, get_async};
pub use options::FetchOptions;
pub use request::{Request, RequestState};
