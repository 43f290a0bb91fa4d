// src/model/catalog.rs
//
// Loads and validates the element table. Every record that reaches the
// layout and rendering code has passed `validate_record`.

use super::elements::ElementRecord;
use std::collections::HashSet;
use std::rc::Rc;
use thiserror::Error;

/// Element table bundled with the binary (Z = 1..71).
const ELEMENTS_JSON: &str = include_str!("../../assets/elements.json");

pub const MAX_ATOMIC_NUMBER: u32 = 118;

#[derive(Debug, Error)]
pub enum DataValidationError {
  #[error("element table is not valid JSON: {0}")]
  Parse(#[from] serde_json::Error),
  #[error("atomic number {0} is outside 1..=118")]
  AtomicNumberOutOfRange(u32),
  #[error("element {0} has an empty symbol")]
  EmptySymbol(u32),
  #[error("element {atomic_number} has a malformed symbol {symbol:?}")]
  MalformedSymbol { atomic_number: u32, symbol: String },
  #[error("element {0} has an empty name")]
  EmptyName(u32),
  #[error("element {atomic_number} has a non-positive atomic weight {weight}")]
  InvalidWeight { atomic_number: u32, weight: f64 },
  #[error("element {0} has an empty electron configuration")]
  EmptyConfiguration(u32),
  #[error("atomic number {0} appears more than once")]
  DuplicateAtomicNumber(u32),
  #[error("symbol {0:?} appears more than once")]
  DuplicateSymbol(String),
  #[error("name {0:?} appears more than once")]
  DuplicateName(String),
}

/// Read-only element table, ordered by ascending atomic number.
#[derive(Debug, Clone)]
pub struct ElementCatalog {
  records: Vec<Rc<ElementRecord>>,
}

impl ElementCatalog {
  /// The table compiled into the binary.
  pub fn embedded() -> Result<Self, DataValidationError> {
    Self::from_json(ELEMENTS_JSON)
  }

  pub fn from_json(json: &str) -> Result<Self, DataValidationError> {
    let records: Vec<ElementRecord> = serde_json::from_str(json)?;
    Self::from_records(records)
  }

  pub fn from_records(mut records: Vec<ElementRecord>) -> Result<Self, DataValidationError> {
    let mut numbers = HashSet::new();
    let mut symbols = HashSet::new();
    let mut names = HashSet::new();

    for rec in &records {
      validate_record(rec)?;
      if !numbers.insert(rec.atomic_number) {
        return Err(DataValidationError::DuplicateAtomicNumber(rec.atomic_number));
      }
      if !symbols.insert(rec.symbol.as_str()) {
        return Err(DataValidationError::DuplicateSymbol(rec.symbol.clone()));
      }
      if !names.insert(rec.name.as_str()) {
        return Err(DataValidationError::DuplicateName(rec.name.clone()));
      }
    }

    records.sort_by_key(|r| r.atomic_number);
    Ok(Self {
      records: records.into_iter().map(Rc::new).collect(),
    })
  }

  pub fn len(&self) -> usize {
    self.records.len()
  }

  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &Rc<ElementRecord>> {
    self.records.iter()
  }

  #[cfg(test)]
  pub fn by_atomic_number(&self, z: u32) -> Option<&Rc<ElementRecord>> {
    self
      .records
      .binary_search_by_key(&z, |r| r.atomic_number)
      .ok()
      .map(|i| &self.records[i])
  }

  #[cfg(test)]
  pub fn by_symbol(&self, symbol: &str) -> Option<&Rc<ElementRecord>> {
    self.records.iter().find(|r| r.symbol == symbol)
  }
}

fn validate_record(rec: &ElementRecord) -> Result<(), DataValidationError> {
  let z = rec.atomic_number;
  if z == 0 || z > MAX_ATOMIC_NUMBER {
    return Err(DataValidationError::AtomicNumberOutOfRange(z));
  }

  if rec.symbol.is_empty() {
    return Err(DataValidationError::EmptySymbol(z));
  }
  let mut chars = rec.symbol.chars();
  let well_formed = rec.symbol.len() <= 2
    && chars.next().is_some_and(|c| c.is_ascii_uppercase())
    && chars.all(|c| c.is_ascii_lowercase());
  if !well_formed {
    return Err(DataValidationError::MalformedSymbol {
      atomic_number: z,
      symbol: rec.symbol.clone(),
    });
  }

  if rec.name.trim().is_empty() {
    return Err(DataValidationError::EmptyName(z));
  }
  if !(rec.atomic_weight.is_finite() && rec.atomic_weight > 0.0) {
    return Err(DataValidationError::InvalidWeight {
      atomic_number: z,
      weight: rec.atomic_weight,
    });
  }
  if rec.electron_configuration.trim().is_empty() {
    return Err(DataValidationError::EmptyConfiguration(z));
  }
  Ok(())
}
