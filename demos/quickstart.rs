use calday::{Calendar, CalendarConfig, CalendarUnit, DayFraction};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), calday::DateError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("calday=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cal = Calendar::from_config(&CalendarConfig::new("America/Detroit"))?;
    let now = cal.now();

    println!("now (UTC):   {now}");
    println!("local:       {}", cal.to_components(now));
    println!("JDN:         {}", cal.julian_day_number(now));
    println!("MJD:         {}", cal.to_month_day_year(now).modified_julian_day().value());
    println!("day elapsed: {:.4}", cal.to_fraction(now).value());

    let quarter = cal.from_fraction(DayFraction::new(0.25))?;
    println!("06:00 today: {quarter}");
    println!("since 06:00: {}", cal.difference(quarter, now));
    println!(
        "minutes:     {}",
        cal.single_unit_difference(quarter, now, CalendarUnit::Minute)
    );

    // Minute 75 does not exist; this is logged at debug and reported.
    if let Err(err) = cal.at_time(now, 10, 75, 0) {
        println!("rejected:    {err}");
    }
    Ok(())
}
