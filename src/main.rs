use log::info;
use maidenhead_rs::{GridSquare, HomeLocation, Precision};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let lon = 11.625;
    let lat = 48.146;

    let square = GridSquare::from_wgs84(&(lon, lat), Precision::Extended)?;
    let center = square.center();

    println!("Locator: {}", square);
    println!("Center: ({}, {})", center.y(), center.x());
    println!("Parent: {:?}", square.parent());
    println!("Polygon: {:?}", square.to_polygon());

    let mut home = HomeLocation::new();
    home.set("FN31PR");
    info!("Home is {:?}", home.home());

    for target in [square.as_str(), "JN57TD", "not-a-grid"] {
        println!("Distance to {}: {} km", target, home.distance_km(target));
    }

    Ok(())
}
