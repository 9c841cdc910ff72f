//! Runtime for photonfire-generated HTTP services.
//!
//! A service contract is a trait annotated with [`photonfire_service`]. Each
//! routed method becomes a GET request against the client's base URL, with
//! every parameter sent as a query item, and the JSON response decoded into
//! the method's success type.
//!
//! ```rust,no_run
//! use photonfire::{PhotonfireClient, PhotonfireError, photonfire_service};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize)]
//! pub struct Account {
//!     pub id: String,
//!     pub is_activated: bool,
//! }
//!
//! #[photonfire_service]
//! pub trait AccountService {
//!     #[photonfire_get("/account")]
//!     async fn get_account(
//!         &self,
//!         id: String,
//!         #[photonfire_query(name = "activated")] is_activated: bool,
//!     ) -> Result<Account, PhotonfireError>;
//! }
//!
//! # async fn run() -> Result<(), PhotonfireError> {
//! let client = PhotonfireClient::builder("https://api.example.com")
//!     .default_header("Accept", "application/json")?
//!     .build();
//! let service: PhotonfireAccountService = client.create_service();
//! let account = service.get_account("42".to_string(), true).await?;
//! println!("{account:?}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod decoder;
pub mod error;
pub mod headers;
pub mod service;
pub mod transport;

pub use client::{PhotonfireClient, PhotonfireClientBuilder};
pub use decoder::JsonDecoder;
pub use error::{PhotonfireError, Result};
pub use headers::DefaultHeaders;
pub use photonfire_macros::{photonfire_get, photonfire_service};
pub use service::PhotonfireService;
pub use transport::{BoxFuture, Transport};

// Generated code names these through `::photonfire` so callers need no direct
// dependency on them.
pub use bytes;
pub use reqwest;
