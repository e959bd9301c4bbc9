// ABOUTME: Walks the fleet hierarchy and prints what it finds
// ABOUTME: Usage: cargo run --example fleet_status -- https://fleet.example.com

use muster_client::FleetClient;
use muster_grpc::ChannelConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    muster_log::init();

    let address = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:8080".to_string());

    let client = FleetClient::connect(&ChannelConfig::new(address)).await?;

    for org in client.list_organizations().await? {
        println!("{} ({})", org.name, org.id);
        for location in client.list_locations(&org.id).await? {
            println!("  {} ({})", location.name, location.id);
            for robot in client.list_robots(&location.id).await? {
                let parts = client.list_robot_parts(&robot.id).await?;
                println!("    {} — {} part(s)", robot.name, parts.len());
            }
        }
    }

    Ok(())
}
