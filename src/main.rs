use booking_platform::run;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("booking-platform failed to start: {}", e);
        std::process::exit(1);
    }
}
