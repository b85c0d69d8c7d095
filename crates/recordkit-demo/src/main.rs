//! Prison education roster.
//!
//! Builds a handful of Prisoner records, prints them as delimited lines with
//! a header taken from the record metadata, then re-parses those lines and
//! prints the records as JSON.

use std::error::Error;

use recordkit::{Date, Record, record_shape, validate_strings};
use tracing_subscriber::EnvFilter;

record_shape! {
    /// An inmate enrolled in the prison education programme.
    pub struct Prisoner as "Prisoner" {
        name: String,
        in_reading: bool,
        admission_time: Date,
        student_id: String,
        education_system: i64,
    }
}

const DELIMITER: &str = ",";

// =============================================================================
// DATA
// =============================================================================

fn roster() -> Result<Vec<Record<Prisoner>>, Box<dyn Error>> {
    let records = vec![
        Record::from_values((
            "郭金锋".to_string(),
            true,
            Date::new(2024, 9, 1)?,
            "2024303424".to_string(),
            4,
        )),
        Record::from_values((
            "李华, Jr.".to_string(),
            false,
            Date::new(2023, 3, 15)?,
            "2023101001".to_string(),
            3,
        )),
        Record::from_strings(&["王芳", "true", "2024-02-29", "2024100002", "4"])?,
    ];
    Ok(records)
}

// =============================================================================
// MAIN
// =============================================================================

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut records = roster()?;
    records.sort_by_key(|p| *p.get::<2>());
    tracing::info!(records = records.len(), "built roster");

    println!("=== {} ===", Record::<Prisoner>::type_tag());
    println!("{}", Record::<Prisoner>::field_names().join(DELIMITER));
    println!("{}", Record::<Prisoner>::field_types().join(DELIMITER));

    // Field strings are kept unjoined; a Text value may itself contain the
    // delimiter, so joined lines are for display only.
    let lines: Vec<Vec<String>> = records.iter().map(Record::to_strings).collect();
    for line in &lines {
        println!("{}", line.join(DELIMITER));
    }

    // A line with two bad fields, to show every failure is reported
    let schema = Record::<Prisoner>::schema()?;
    let rejected = ["赵强", "yes", "2023-02-29", "2023100003", "3"];
    if let Err(errors) = validate_strings(&schema, &rejected) {
        for error in &errors {
            tracing::warn!(kind = error.kind().name(), "{}", error);
        }
    }

    println!();
    println!("=== JSON ===");
    for line in &lines {
        let parsed = Record::<Prisoner>::from_strings(line)?;
        println!("{}", serde_json::to_string(&parsed)?);
    }

    Ok(())
}
