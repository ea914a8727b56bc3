use std::io;

use super::recorder::TrajectorySample;

/// Writes the trajectory as `horizontal,altitude` rows.
pub fn write_trajectory_csv<W: io::Write>(
    samples: &[TrajectorySample],
    writer: W,
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["horizontal", "altitude"])?;
    for sample in samples {
        csv_writer.serialize((sample.x, sample.y))?;
    }
    csv_writer.flush()?;
    Ok(())
}
