//! Student records
//!
//! `Student` carries name, ID and marks; `StudentIitgn` wraps one and adds
//! a hostel. Both print themselves through the `DisplayDetails` trait.

pub mod student;
pub mod traits;

use std::io::{self, Write};

pub use student::{Student, StudentIitgn};
pub use traits::{DisplayDetails, Grade};

/// The two sample records the program shows.
pub fn roster() -> Vec<Box<dyn DisplayDetails>> {
    vec![
        Box::new(Student::new("Kaushal", "22110169", 72.0)),
        Box::new(StudentIitgn::new("Venkat", "22110220", 88.0, "Emiet")),
    ]
}

/// Display each record, separated by a blank line.
pub fn show_all(records: &[Box<dyn DisplayDetails>], output: &mut dyn Write) -> io::Result<()> {
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            writeln!(output)?;
        }
        record.display_details(output)?;
    }
    output.flush()
}
