use photonfire::{PhotonfireClient, PhotonfireError, photonfire_service};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Account {
    pub is_activated: bool,
}

#[photonfire_service]
pub(crate) trait AccountService {
    #[photonfire_get(format!("/accounts/{}", id))]
    async fn find(
        &self,
        id: u64,
        #[photonfire_query(name = "is_activated")] activated: bool,
    ) -> photonfire::Result<Account>;

    #[photonfire_get("/accounts")]
    async fn all(&self) -> Result<Vec<Account>, PhotonfireError>;

    fn describe(&self) -> String {
        "accounts".to_string()
    }
}

fn main() {
    let client = PhotonfireClient::builder("https://api.example.com")
        .default_header("Accept", "application/json")
        .unwrap()
        .build();
    let service: PhotonfireAccountService = client.create_service();
    let _ = service.describe();
}
