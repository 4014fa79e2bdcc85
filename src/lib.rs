//! # instagram-client - An Instagram API client
//!
//! Wraps the Instagram v1 HTTP API as method calls. The client injects the
//! access token and default page size into every call, reads the rate limit
//! headers of every response, and checks the response envelope for you.
//!
//! ## Quick Start
//!
//! ```no_run
//! use instagram_client::{params::MediaPage, Client};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), instagram_client::Error> {
//!     let client = Client::new("my-access-token")?;
//!
//!     let me = client.get_user("self").await?;
//!     println!("Logged in as {}", me.data["username"]);
//!
//!     // Optional parameters are plain structs; leave them at their defaults
//!     // to omit them.
//!     let posts = client
//!         .recently_posted("self", MediaPage::new().count(5))
//!         .await?;
//!     println!("{} calls left this hour", posts.remaining);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Callback delivery
//!
//! Every operation is also available as a [`metadata::RequestMetadata`]
//! constructor in [`endpoints`]. [`Client::send_with`] sends one on a
//! background task and passes the raw envelope and rate limit pair to a
//! callback:
//!
//! ```no_run
//! use instagram_client::{endpoints, Client};
//!
//! # async fn example() -> Result<(), instagram_client::Error> {
//! let client = Client::new("my-access-token")?;
//! client
//!     .send_with(endpoints::follow("1574083"), |result, rate_limit| {
//!         match result {
//!             Ok(envelope) => println!("{} ({} left)", envelope["meta"]["code"], rate_limit.remaining),
//!             Err(e) => eprintln!("follow failed: {}", e),
//!         }
//!     })
//!     .await
//!     .ok();
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! ```no_run
//! use instagram_client::{Client, Error};
//!
//! # async fn example() -> Result<(), Error> {
//! # let client = Client::new("my-access-token")?;
//! match client.get_tag("nofilter").await {
//!     Ok(reply) => println!("Tag: {}", reply.data),
//!     Err(Error::Api { meta, .. }) => eprintln!("Rejected: {}", meta),
//!     Err(Error::ParseFailed { raw_response, .. }) => eprintln!("Not JSON: {}", raw_response),
//!     Err(Error::MalformedEnvelope { body, .. }) => eprintln!("No meta block: {}", body),
//!     Err(e) if e.is_transport() => eprintln!("Network trouble: {}", e),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

mod client;
pub mod config;
pub mod endpoints;
mod error;
pub mod metadata;
pub mod params;
pub mod rate_limit;
mod response;

pub use client::{Client, ClientBuilder};
pub use config::ClientConfig;
pub use endpoints::RelationshipAction;
pub use error::{Error, Result};
pub use rate_limit::RateLimit;
pub use response::{Completion, Meta, Reply};
