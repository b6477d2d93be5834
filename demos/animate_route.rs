//! End-to-end demo against the public Nominatim and OSRM servers.
//!
//! Geocodes two place names, fetches the driving route and animates a
//! marker along it, printing each position. Run with:
//!
//! ```text
//! cargo run --example animate_route -- "Connaught Place, Delhi" "India Gate, Delhi"
//! ```

use routelet::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let start = args
        .next()
        .unwrap_or_else(|| "Connaught Place, Delhi".to_string());
    let end = args.next().unwrap_or_else(|| "India Gate, Delhi".to_string());

    let mut session = RouteSession::new(
        Box::new(NominatimGeocoder::new()),
        Box::new(OsrmRouter::new()),
        LatLng::new(28.6129, 77.2310),
    );

    println!("{}", session.find_route(&start, &end).await);

    if !session.can_animate() {
        anyhow::bail!("no route to animate");
    }

    let mut events = session
        .toggle_animation()
        .ok_or_else(|| anyhow::anyhow!("animation did not start"))?;

    while let Some(event) = events.recv().await {
        match event {
            AnimationEvent::Position(coord) => {
                session.apply_position(coord);
                println!("🚗 {:.5}, {:.5}", coord.lat, coord.lng);
            }
            AnimationEvent::Completed => {
                session.animation_finished();
                println!("{}", session.status());
            }
        }
    }

    Ok(())
}
