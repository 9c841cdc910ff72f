use photonfire::{PhotonfireClient, PhotonfireError, photonfire_service};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Account {
    pub id: String,
}

#[photonfire_service]
pub trait AccountService {
    #[photonfire_get("/account")]
    async fn get_account(&self, id: String) -> Result<Account, PhotonfireError>;
}

fn main() {
    let client = PhotonfireClient::builder("https://api.example.com").build();
    let _service: PhotonfireAccountService = client.create_service();
}
