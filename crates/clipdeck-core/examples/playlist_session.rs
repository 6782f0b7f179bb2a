//! Headless playlist session example
//!
//! Drives a player over a recording surface and prints what the surface saw.
//!
//! Run with: cargo run -p clipdeck-core --example playlist_session

use clipdeck_core::{
    Catalog, PlaybackSpeed, Player, PlayerConfig, RecordingSurface, SkipDirection, Volume,
};
use url::Url;

fn main() -> clipdeck_core::Result<()> {
    println!("Clipdeck Core - Playlist Session Example");
    println!("========================================\n");

    let base = Url::parse("https://cdn.example.com/player/").expect("static URL");
    let catalog = Catalog::sample(&base)?;
    let mut player = Player::new(catalog, PlayerConfig::default(), RecordingSurface::new())?;

    player.mount();
    player.set_volume(Volume::new(0.8));
    player.set_speed(PlaybackSpeed::OneAndHalf)?;
    player.skip(SkipDirection::Forward);
    player.handle_ended();

    let payload = player.drag_start(0)?;
    player.drop_payload(payload.as_str(), 2);

    println!("Playlist:");
    println!("---------");
    for row in player.snapshot().items {
        let marker = if row.active { ">" } else { " " };
        println!("  {} {}. {} ({})", marker, row.index + 1, row.title, row.id);
    }
    println!();

    println!("Surface calls:");
    println!("--------------");
    for call in player.surface().calls() {
        println!("  {}", call);
    }

    Ok(())
}
