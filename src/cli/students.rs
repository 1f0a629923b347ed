use comfy_table::{Cell, Table};
use rust_decimal::Decimal;

use crate::cli::with_header;
use crate::error::Result;
use crate::fmt::{money, parse_amount, parse_date};
use crate::models::{Gender, Student, StudentType};
use crate::settings::load_settings;
use crate::store::Store;

pub fn list(class: Option<&str>, section: Option<&str>, student_type: Option<&str>) -> Result<()> {
    let store = Store::seeded();
    let settings = load_settings();
    let student_type = student_type.map(StudentType::parse).transpose()?;

    let rows: Vec<&Student> = store
        .students()
        .iter()
        .filter(|s| class.map_or(true, |c| s.class == c))
        .filter(|s| section.map_or(true, |sec| s.section == sec))
        .filter(|s| student_type.map_or(true, |t| s.student_type == t))
        .collect();

    let mut table = Table::new();
    table.set_header(vec![
        "ID".to_string(),
        "Name of Student".to_string(),
        "Gender".to_string(),
        "Class".to_string(),
        "Section".to_string(),
        "Student Type".to_string(),
        format!("No. of Months ({})", settings.fiscal_year),
        "Annual Received Income".to_string(),
    ]);
    for s in &rows {
        table.add_row(vec![
            Cell::new(&s.id),
            Cell::new(&s.name),
            Cell::new(s.gender.label()),
            Cell::new(&s.class),
            Cell::new(&s.section),
            Cell::new(s.student_type.label()),
            Cell::new(s.months_enrolled),
            Cell::new(money(s.annual_income)),
        ]);
    }

    let total: Decimal = rows.iter().map(|s| s.annual_income).sum();
    let average = if rows.is_empty() {
        Decimal::ZERO
    } else {
        total / Decimal::from(rows.len() as i64)
    };
    let footer = format!(
        "{} students | total income {} | average {}",
        rows.len(),
        money(total),
        money(average)
    );
    println!("{}", with_header(format!("Students\n{table}\n{footer}")));
    Ok(())
}

pub fn show(id: &str) -> Result<()> {
    let store = Store::seeded();
    let s = store.student(id)?;
    let monthly = if s.months_enrolled == 0 {
        Decimal::ZERO
    } else {
        s.annual_income / Decimal::from(s.months_enrolled)
    };
    println!("{}", with_header(format!("Student {}", s.id)));
    println!("Name:            {}", s.name);
    println!("Gender:          {}", s.gender.label());
    println!("Class:           {} {}", s.class, s.section);
    println!("Type:            {}", s.student_type.label());
    println!("Enrolled:        {}", s.enrolled_date);
    println!("Months enrolled: {}", s.months_enrolled);
    println!("Annual income:   {}", money(s.annual_income));
    println!("Monthly average: {}", money(monthly));
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn add(
    id: &str,
    name: &str,
    gender: &str,
    class: &str,
    section: &str,
    student_type: &str,
    months: u32,
    annual_income: &str,
    enrolled_date: &str,
) -> Result<()> {
    let mut store = Store::seeded();
    store.add_student(Student {
        id: id.to_string(),
        name: name.to_string(),
        gender: Gender::parse(gender)?,
        class: class.to_string(),
        section: section.to_string(),
        student_type: StudentType::parse(student_type)?,
        months_enrolled: months,
        annual_income: parse_amount(annual_income)?,
        enrolled_date: parse_date(enrolled_date)?,
    })?;
    println!("Added student: {id} ({name})");
    Ok(())
}

pub fn delete(id: &str) -> Result<()> {
    let mut store = Store::seeded();
    let removed = store.delete_student(id)?;
    println!(
        "Deleted student {} ({}) ({} remaining)",
        removed.id,
        removed.name,
        store.students().len()
    );
    Ok(())
}
