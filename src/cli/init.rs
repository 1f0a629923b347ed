use crate::error::Result;
use crate::settings::{load_settings, save_settings, settings_file_exists};

pub fn run(school: Option<String>, fiscal_year: Option<String>, currency: Option<String>) -> Result<()> {
    let existed = settings_file_exists();
    let mut settings = load_settings();
    if let Some(school) = school {
        settings.school_name = school;
    }
    if let Some(fy) = fiscal_year {
        settings.fiscal_year = fy;
    }
    if let Some(currency) = currency {
        settings.currency = currency;
    }
    save_settings(&settings)?;
    if existed {
        println!("Updated settings.");
    } else {
        println!("Initialized bursar settings.");
    }
    println!("School:      {}", if settings.school_name.is_empty() { "(not set)" } else { &settings.school_name });
    println!("Fiscal year: {}", settings.fiscal_year);
    println!("Currency:    {}", settings.currency);
    Ok(())
}
