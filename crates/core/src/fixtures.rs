//! Fixtures
//!
//! Receipt fixtures live in `fixtures/receipts/<name>.yml` next to this crate.
//! Each file holds a receipt in wire form and the points it is expected to
//! score.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use crate::{
    parsing::ParseError,
    receipt::{RawReceipt, Receipt},
};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// The fixture receipt has invalid fields
    #[error("Invalid fixture receipt: {0}")]
    Receipt(#[from] ParseError),
}

/// A receipt fixture with its expected score
#[derive(Debug, Clone, Deserialize)]
pub struct ReceiptFixture {
    /// Receipt exactly as a client would submit it
    pub receipt: RawReceipt,

    /// Points the receipt should score
    pub points: u64,
}

impl ReceiptFixture {
    /// Directory holding the receipt fixture files
    pub fn base_path() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join("receipts")
    }

    /// Load a named fixture, e.g. `"target"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML.
    pub fn load(name: &str) -> Result<Self, FixtureError> {
        Self::from_path(&Self::base_path().join(format!("{name}.yml")))
    }

    /// Load a fixture from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML.
    pub fn from_path(path: &Path) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;

        Ok(serde_norway::from_str(&contents)?)
    }

    /// Load every fixture in the fixtures directory, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or any fixture cannot be read.
    pub fn all() -> Result<Vec<(String, Self)>, FixtureError> {
        let mut fixtures = Vec::new();

        for entry in fs::read_dir(Self::base_path())? {
            let path = entry?.path();

            if path.extension().is_none_or(|extension| extension != "yml") {
                continue;
            }

            let name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();

            fixtures.push((name, Self::from_path(&path)?));
        }

        fixtures.sort_by(|(a, _), (b, _)| a.cmp(b));

        Ok(fixtures)
    }

    /// Parse the fixture's wire receipt.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Receipt`] if any field fails to parse.
    pub fn parsed_receipt(&self) -> Result<Receipt, FixtureError> {
        Ok(Receipt::try_from(self.receipt.clone())?)
    }
}
