//! Procedural macros for photonfire service contracts.
//!
//! - [`photonfire_service`] - Synthesizes `Photonfire<Trait>` for a contract trait
//! - [`photonfire_get`] - Marks a contract method as a GET route
//!
//! ## Examples
//!
//! ```ignore
//! use photonfire::{PhotonfireError, photonfire_service};
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
//! ```

use proc_macro::TokenStream;

mod service;

/// Attribute macro that generates an HTTP implementation of a trait.
///
/// Emits the trait (route and query markers removed) followed by a
/// `Photonfire<Name>` struct implementing it. Each method carrying
/// `#[photonfire_get(path)]` performs a GET against the client's base URL
/// plus `path`, sends every parameter as a query item, and decodes the JSON
/// body into the success type of its `Result`.
///
/// Parameter attributes:
/// - `#[photonfire_query(name = "key")]` - Query key used instead of the parameter name
///
/// Every problem with the contract is reported as its own compile error;
/// methods that could be synthesized are still emitted.
#[proc_macro_attribute]
pub fn photonfire_service(attr: TokenStream, item: TokenStream) -> TokenStream {
    service::service_impl(attr.into(), item.into()).into()
}

/// Marks a contract method as a GET route. The argument is the path
/// appended to the base URL: a string literal or any expression evaluating
/// to something displayable, e.g. `format!("/accounts/{}", id)`.
///
/// Read and removed by [`macro@photonfire_service`]; on its own it leaves
/// the item unchanged.
#[proc_macro_attribute]
pub fn photonfire_get(_attr: TokenStream, item: TokenStream) -> TokenStream {
    item
}
