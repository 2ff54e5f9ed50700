use chrono::NaiveDate;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use zonediff::{DifferenceCalculator, Region, ZonedSelection};

fn init_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("zonediff=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> zonediff::Result<()> {
    init_logger();

    let germany_pick = NaiveDate::from_ymd_opt(2024, 3, 10)
        .and_then(|d| d.and_hms_opt(18, 30, 0))
        .expect("valid wall clock");
    let germany = ZonedSelection::in_region(Region::Berlin, germany_pick)?;
    let (date, time) = germany.format(Region::Berlin.locale())?;
    println!("Germany: {date} {time}");

    let calculator = DifferenceCalculator::default();
    for region in Region::CANADA {
        let canada = ZonedSelection::now(region.zone());
        let (date, time) = canada.format(region.locale())?;
        let breakdown = calculator.breakdown(&germany, &canada)?;
        println!("Canada ({region}): {date} {time}");
        println!("  difference: {breakdown}");
    }
    Ok(())
}
