//! Loading of the single-cell microscopy measurement table.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// One segmented cell of the microscopy dataset.
///
/// Unknown CSV columns are ignored; the strain is identified by its `rbs`
/// label: `"auto"` is the autofluorescence control, `"delta"` the
/// unrepressed ΔlacI strain, anything else a regulated strain.
#[derive(Debug, Clone, Deserialize)]
pub struct MicroscopyRow {
    /// Experiment date, e.g. 20181003.
    pub date: u32,
    /// Inducer concentration the cell was grown at (µM).
    #[serde(rename = "IPTG_uM")]
    pub iptg_um: f64,
    /// Operator of the strain (O1/O2/O3).
    pub operator: String,
    /// Repressor binding energy of the operator (k_BT).
    pub binding_energy: f64,
    /// Mean repressor copy number of the strain.
    pub repressor: f64,
    /// Ribosomal binding site / strain label.
    pub rbs: String,
    /// Mean pixel intensity of the cell (a.u.).
    pub mean_intensity: f64,
    /// Integrated fluorescence intensity of the cell (a.u.).
    pub intensity: f64,
    /// Segmented cell area (px).
    pub area: f64,
}

impl MicroscopyRow {
    /// Whether this cell belongs to the autofluorescence control.
    pub fn is_auto(&self) -> bool {
        self.rbs == "auto"
    }

    /// Whether this cell belongs to the unrepressed ΔlacI strain.
    pub fn is_delta(&self) -> bool {
        self.rbs == "delta"
    }
}

/// Read the microscopy measurement table from a CSV file.
pub fn read_microscopy<P: AsRef<Path>>(path: P) -> Result<Vec<MicroscopyRow>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening microscopy table {}", path.display()))?;

    let mut rows = Vec::new();
    for (i, record) in reader.deserialize().enumerate() {
        let row: MicroscopyRow =
            record.with_context(|| format!("parsing microscopy row {}", i + 1))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Group microscopy rows by experiment date, preserving date order.
pub fn group_by_date(rows: Vec<MicroscopyRow>) -> BTreeMap<u32, Vec<MicroscopyRow>> {
    let mut groups: BTreeMap<u32, Vec<MicroscopyRow>> = BTreeMap::new();
    for row in rows {
        groups.entry(row.date).or_default().push(row);
    }
    groups
}
