//! Basic conversion example.
//!
//! Converts a few amounts through a rate table, shows the default-rate
//! fallback when the source goes down, and prints the audit log.

use currency_converter::prelude::*;
use currency_converter::simulation::flaky::FlakyRateSource;

fn main() {
    env_logger::init();

    let usd = CurrencyCode::new("USD");
    let eur = CurrencyCode::new("EUR");
    let brl = CurrencyCode::new("BRL");

    let mut rates = StaticRateTable::new();
    rates
        .set_rate(usd.clone(), eur.clone(), 0.5)
        .expect("rate is positive");
    rates
        .set_rate(usd.clone(), brl.clone(), 5.0)
        .expect("rate is positive");

    // --- Scenario 1: Healthy rate source ---
    println!("━━━ Scenario 1: Rate table ━━━\n");

    let mut service = ConversionService::new(rates.clone(), DEFAULT_EXCHANGE_RATE);
    for (origin, target, amount) in [(&usd, &eur, 50.0), (&brl, &usd, 250.0), (&eur, &usd, 10.0)] {
        match service.convert(origin, target, amount) {
            Ok(record) => println!("  {}", record),
            Err(e) => println!("  {} {} -> {}: {}", amount, origin, target, e),
        }
    }

    // Rejected before the rate source is consulted.
    if let Err(e) = service.convert(&usd, &eur, -100.0) {
        println!("  -100 USD -> EUR: {}", e);
    }
    // Pair missing from the table.
    if let Err(e) = service.convert(&eur, &brl, 10.0) {
        println!("  10 EUR -> BRL: {}", e);
    }

    println!("\n{}", service.audit_logs());

    // --- Scenario 2: Source always down ---
    println!("━━━ Scenario 2: Rate source unavailable ━━━\n");

    let mut service = ConversionService::new(FlakyRateSource::new(rates, 1.0, 0), 1.1);
    if let Ok(record) = service.convert(&usd, &eur, 100.0) {
        println!("  {}", record);
    }
    if let Err(e) = service.access_audit_logs_from_unauthorized_module() {
        println!("  unauthorized module: {}", e);
    }
    println!("\n{}", service.audit_logs());
}
