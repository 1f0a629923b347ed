use crate::error::Result;
use crate::settings::load_settings;
use crate::store::Store;

pub fn run() -> Result<()> {
    let settings = load_settings();
    let store = Store::seeded();

    println!("School:      {}", if settings.school_name.is_empty() { "(not set)" } else { &settings.school_name });
    println!("Fiscal year: {}", settings.fiscal_year);
    println!("Currency:    {}", settings.currency);
    println!();
    println!("Accounts:          {}", store.accounts().len());
    println!("Journal vouchers:  {}", store.journals().len());
    println!("Payment vouchers:  {}", store.payments().len());
    println!("Students:          {}", store.students().len());
    Ok(())
}
