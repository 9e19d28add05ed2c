use std::fmt::{Display, Formatter};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl From<f64> for Grade {
    fn from(marks: f64) -> Self {
        if marks >= 90.0 {
            Grade::A
        } else if marks >= 75.0 {
            Grade::B
        } else if marks >= 60.0 {
            Grade::C
        } else if marks >= 50.0 {
            Grade::D
        } else {
            Grade::F
        }
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        write!(f, "{}", letter)
    }
}

pub trait DisplayDetails {
    fn display_details(&self, output: &mut dyn Write) -> io::Result<()>;
}
