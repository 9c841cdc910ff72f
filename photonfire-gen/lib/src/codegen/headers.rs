//! The header-application helper shared by every method of one implementation.

use proc_macro2::TokenStream;
use quote::quote;

/// Generates the `set_headers` associated function.
///
/// Headers are inserted in the client's insertion order; `insert` replaces,
/// so a later entry for the same name wins. The verb is set last.
pub fn generate_header_helper() -> TokenStream {
    quote! {
        #[allow(dead_code)]
        fn set_headers(
            request: &mut ::photonfire::reqwest::Request,
            http_method: ::photonfire::reqwest::Method,
            headers: &::photonfire::DefaultHeaders,
        ) {
            for (name, value) in headers.iter() {
                request.headers_mut().insert(name.clone(), value.clone());
            }
            *request.method_mut() = http_method;
        }
    }
}
