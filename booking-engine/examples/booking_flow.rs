// booking-engine/examples/booking_flow.rs
// End-to-end reservation flow against a live API

use std::sync::Arc;

use booking_engine::{BookingSession, CatalogCache, CheckoutObserver, CheckoutStage, GuestField};
use chrono::{Duration, Utc};
use lagoon_client::{ClientConfig, HttpClient};
use shared::{FoodCounts, GuestContact};

struct ConsoleObserver;

impl CheckoutObserver for ConsoleObserver {
    fn on_stage(&mut self, stage: CheckoutStage) {
        tracing::info!(?stage, "Checkout stage");
    }

    fn on_retry_wait(&mut self, attempt: u32, max_attempts: u32, delay: std::time::Duration) {
        tracing::info!(attempt, max_attempts, ?delay, "Gateway busy, waiting");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let base_url =
        std::env::var("LAGOON_API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());

    let config = ClientConfig::new(&base_url);
    let api = Arc::new(HttpClient::new(&config)?);

    let catalog = CatalogCache::new(api);
    catalog.warmup().await;

    let accommodations = catalog.list_accommodations();
    let Some(first) = accommodations.first() else {
        tracing::error!("No accommodations in the catalog");
        return Ok(());
    };
    tracing::info!("Booking {} ({} base rooms)", first.name, first.base_rooms);

    let mut session = BookingSession::start(&catalog, &first.id).await?;

    let today = Utc::now().date_naive();
    let check_in = today + Duration::days(7);
    if !session.select_check_in(check_in, today).await {
        tracing::error!(%check_in, "Date not available");
        return Ok(());
    }
    tracing::info!(available = session.available_rooms(), "Date selected");

    // Two rooms: a couple plus a couple with one child
    session.set_room_count(2);
    session.set_room_guests(1, GuestField::Children, 1);
    session.set_food_counts(FoodCounts {
        veg: 3,
        non_veg: 2,
        jain: 0,
    });
    session.set_contact(GuestContact {
        name: "Asha Rao".to_string(),
        email: "asha@example.com".to_string(),
        phone: "9876543210".to_string(),
    });

    if let Err(e) = session.apply_coupon("SAVE10") {
        tracing::warn!("Coupon not applied: {e}");
    }

    let quote = session.quote();
    tracing::info!(
        nights = quote.nights,
        subtotal = quote.subtotal,
        discount = quote.discount,
        total = quote.final_amount,
        advance = quote.advance_amount,
        "Quote"
    );

    let mut observer = ConsoleObserver;
    match session.checkout(&mut observer).await {
        Ok(complete) => {
            tracing::info!(
                booking_id = %complete.booking_id,
                attempts = complete.attempts,
                "Booking confirmed, redirecting to {}",
                complete.gateway_url
            );
            println!("{}", complete.redirect_form);
        }
        Err(e) => tracing::error!("Checkout failed: {e}"),
    }

    Ok(())
}
