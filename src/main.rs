#[tokio::main]
async fn main() {
    if let Err(e) = amenity_occupancy::run().await {
        eprintln!("amenity-occupancy failed to start: {}", e);
        std::process::exit(1);
    }
}
