//! Writers for the output summary tables.

use std::path::Path;

use anyhow::{Context, Result};

use crate::model::MomentSet;
use crate::pipeline::constraints::ConstraintRecord;
use crate::pipeline::noise::NoiseRecord;

/// Write the bootstrap noise table to CSV.
///
/// One row per (date, strain/inducer, percentile); fold-change columns are
/// empty on ΔlacI rows.
pub fn write_noise_table<P: AsRef<Path>>(path: P, records: &[NoiseRecord]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating noise table {}", path.display()))?;

    for record in records {
        writer
            .serialize(record)
            .context("serializing noise record")?;
    }
    writer.flush().context("flushing noise table")?;
    Ok(())
}

/// Write the moment-constraints table to CSV.
///
/// The header holds the four condition columns followed by one column per
/// moment label of the set (`m0p0`, `m1p0`, ...), matching the order of
/// [`ConstraintRecord::moments`].
pub fn write_constraints_table<P: AsRef<Path>>(
    path: P,
    moments: &MomentSet,
    records: &[ConstraintRecord],
) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating constraints table {}", path.display()))?;

    let mut header = vec![
        "operator".to_string(),
        "binding_energy".to_string(),
        "repressor".to_string(),
        "inducer_uM".to_string(),
    ];
    header.extend((0..moments.len()).map(|i| moments.label(i)));
    writer.write_record(&header).context("writing header")?;

    for record in records {
        assert_eq!(
            record.moments.len(),
            moments.len(),
            "Record and moment set disagree in size"
        );
        let mut fields = vec![
            record.operator.to_string(),
            record.binding_energy.to_string(),
            record.repressor.to_string(),
            record.inducer_um.to_string(),
        ];
        fields.extend(record.moments.iter().map(|m| m.to_string()));
        writer
            .write_record(&fields)
            .context("writing constraints record")?;
    }
    writer.flush().context("flushing constraints table")?;
    Ok(())
}
