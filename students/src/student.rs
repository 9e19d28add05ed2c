use std::io::{self, Write};

use crate::traits::{DisplayDetails, Grade};

#[derive(Debug, Clone)]
pub struct Student {
    pub name: String,
    pub id: String,
    pub marks: f64,
}

impl Student {
    pub fn new(name: &str, id: &str, marks: f64) -> Student {
        Student {
            name: name.to_string(),
            id: id.to_string(),
            marks,
        }
    }

    pub fn grade(&self) -> Grade {
        Grade::from(self.marks)
    }
}

impl DisplayDetails for Student {
    fn display_details(&self, output: &mut dyn Write) -> io::Result<()> {
        writeln!(output, "Student Details:")?;
        writeln!(output, "Name: {}", self.name)?;
        writeln!(output, "ID: {}", self.id)?;
        writeln!(output, "Marks: {}", self.marks)?;
        writeln!(output, "Grade: {}", self.grade())
    }
}

/// A student who also lives in an IITGN hostel.
#[derive(Debug, Clone)]
pub struct StudentIitgn {
    pub student: Student,
    pub hostel_name: String,
}

impl StudentIitgn {
    pub fn new(name: &str, id: &str, marks: f64, hostel_name: &str) -> StudentIitgn {
        StudentIitgn {
            student: Student::new(name, id, marks),
            hostel_name: hostel_name.to_string(),
        }
    }

    pub fn grade(&self) -> Grade {
        self.student.grade()
    }
}

impl DisplayDetails for StudentIitgn {
    fn display_details(&self, output: &mut dyn Write) -> io::Result<()> {
        self.student.display_details(output)?;
        writeln!(output, "Hostel Name (IITGN): {}", self.hostel_name)
    }
}
