//! Walks one order through the form: edits, live total, terms, submit

use anyhow::Result;
use brico::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("brico=debug")),
        )
        .init();

    println!("🪚 Brico Order Form Example\n");

    // Load configuration
    let config_path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/order_form/config.yaml");
    let config = OrderFormConfig::from_yaml_file(config_path)?;
    println!(
        "📋 {} materials, {:.2} per hole, {:.2} per hinge\n",
        config.catalog.len(),
        config.rates.drill_hole,
        config.rates.hinge
    );

    let mut form = OrderForm::new(config);

    for (field, value) in [
        (fields::ITEM, "oak"),
        (fields::FIRST_NAME, "M"),
        (fields::FIRST_NAME, "Maria"),
        (fields::LAST_NAME, "Petrova"),
        (fields::PHONE_NUMBER, "+359 888 123 456"),
        (fields::ADDRESS, "12 Vitosha Blvd, Sofia"),
        (fields::WIDTH, "1.2"),
        (fields::HEIGHT, "0.6"),
        (fields::ORIENTATION, "lengthwise"),
        (fields::DESCRIPTION, "Kitchen shelf, banded front edge"),
        (fields::DRILL_HOLES, "4"),
        (fields::HINGES, "0"),
    ] {
        let feedback = form.edit(field, value)?;
        match &feedback.error {
            Some(error) => println!("❌ {} = {:?}: {}", field, value, error.message),
            None => println!("✅ {} = {}", field, feedback.value),
        }
        println!("   total: {}", form.quote().total_display());
    }

    let breakdown = form.quote();
    println!("\n💰 Price breakdown");
    println!("   area:       {}", format_amount(breakdown.area));
    println!("   unit price: {}", format_amount(breakdown.unit_price));
    println!("   drilling:   {:.2}", breakdown.drilling);
    println!("   hinges:     {:.2}", breakdown.hinges);
    println!("   total:      {}\n", breakdown.total_display());

    // Submit is refused until the terms are accepted
    if let Err(e) = form.submit(&LoggingSubmissionHandler).await {
        println!("🚫 {}", e);
    }

    form.toggle_terms();
    let ack = form.submit(&LoggingSubmissionHandler).await?;
    println!("\n📨 {}: {}", ack.title, ack.description);

    Ok(())
}
