use photonfire::photonfire_service;

#[photonfire_service]
trait Nothing {}

fn main() {
    let client = photonfire::PhotonfireClient::builder("https://api.example.com").build();
    let _service: PhotonfireNothing = client.create_service();
}
