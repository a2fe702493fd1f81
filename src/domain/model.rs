use crate::utils::error::{ReportError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const COMPANY_COLUMN: &str = "Company";
pub const POSITION_COLUMN: &str = "Position";
pub const PACKAGE_COLUMN: &str = "Package_LPA";
pub const DURATION_COLUMN: &str = "Internship_Duration_Months";
pub const YEAR_COLUMN: &str = "Placement_Year";

pub const PACKAGE_MIN: f64 = 3.0;
pub const PACKAGE_MAX: f64 = 50.0;
pub const DURATION_MIN: u8 = 1;
pub const DURATION_MAX: u8 = 6;
pub const PLACEMENT_YEARS: [u16; 3] = [2023, 2024, 2025];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Company {
    Amazon,
    Google,
    Microsoft,
    Infosys,
    #[serde(rename = "TCS")]
    Tcs,
    Wipro,
    Capgemini,
}

impl Company {
    /// Draw order for the generator; changing it changes every seeded table.
    pub const ALL: [Company; 7] = [
        Company::Amazon,
        Company::Google,
        Company::Microsoft,
        Company::Infosys,
        Company::Tcs,
        Company::Wipro,
        Company::Capgemini,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Company::Amazon => "Amazon",
            Company::Google => "Google",
            Company::Microsoft => "Microsoft",
            Company::Infosys => "Infosys",
            Company::Tcs => "TCS",
            Company::Wipro => "Wipro",
            Company::Capgemini => "Capgemini",
        }
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Internship,
    #[serde(rename = "Full-Time")]
    FullTime,
}

impl Position {
    pub const ALL: [Position; 2] = [Position::Internship, Position::FullTime];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Internship => "Internship",
            Position::FullTime => "Full-Time",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw table as handed over by a `DatasetSource`: header names in file order
/// and one text cell per header for every row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| ReportError::SchemaMissing {
                column: name.to_string(),
                available: self.headers.clone(),
            })
    }

    /// Values of one column in row order. Short rows yield an empty cell.
    pub fn column(&self, name: &str) -> Result<Vec<&str>> {
        let index = self.require_column(name)?;
        Ok(self
            .rows
            .iter()
            .map(|row| row.get(index).map(String::as_str).unwrap_or(""))
            .collect())
    }
}

/// The five generated fields of one row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SyntheticAttributes {
    pub company: Company,
    pub position: Position,
    pub package: f64,
    pub duration: u8,
    pub year: u16,
}

/// Source rows merged with their generated attributes. Built once, read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedTable {
    source: Dataset,
    synthetic: Vec<SyntheticAttributes>,
}

impl EnrichedTable {
    pub fn new(source: Dataset, synthetic: Vec<SyntheticAttributes>) -> Result<Self> {
        if source.len() != synthetic.len() {
            return Err(ReportError::ProcessingError {
                message: format!(
                    "generated {} attribute rows for {} source rows",
                    synthetic.len(),
                    source.len()
                ),
            });
        }
        Ok(Self { source, synthetic })
    }

    pub fn len(&self) -> usize {
        self.synthetic.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synthetic.is_empty()
    }

    pub fn records(&self, department_column: &str) -> Result<Vec<Record<'_>>> {
        let departments = self.source.column(department_column)?;
        Ok(departments
            .into_iter()
            .zip(self.synthetic.iter())
            .map(|(department, attributes)| Record {
                department,
                attributes,
            })
            .collect())
    }
}

/// One placement entry after enrichment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record<'a> {
    pub department: &'a str,
    pub attributes: &'a SyntheticAttributes,
}

impl Record<'_> {
    pub fn company(&self) -> Company {
        self.attributes.company
    }

    pub fn position(&self) -> Position {
        self.attributes.position
    }

    pub fn package(&self) -> f64 {
        self.attributes.package
    }

    pub fn duration(&self) -> u8 {
        self.attributes.duration
    }

    pub fn year(&self) -> u16 {
        self.attributes.year
    }
}
