use std::io::Write;

use crate::app::{AppContext, Result};
use crate::domain::Earthquake;
use crate::presenter::{DisplayTimezone, EarthquakeRow};

pub async fn list_earthquakes(ctx: &AppContext, timezone: DisplayTimezone, json: bool) -> Result<()> {
    let earthquakes = ctx.fetch_earthquakes().await;
    let mut out = std::io::stdout().lock();

    if json {
        serde_json::to_writer_pretty(&mut out, &earthquakes)?;
        writeln!(out)?;
    } else {
        write_rows(&mut out, &earthquakes, timezone)?;
    }

    Ok(())
}

/// Plain-text rendering of the list, one earthquake per line.
pub fn write_rows<W: Write>(
    out: &mut W,
    earthquakes: &[Earthquake],
    timezone: DisplayTimezone,
) -> Result<()> {
    if earthquakes.is_empty() {
        writeln!(out, "No earthquakes found")?;
        return Ok(());
    }

    for quake in earthquakes {
        let row = EarthquakeRow::build(quake, timezone);
        writeln!(
            out,
            "{:>4}  {} {}  {}  {}\n      {}",
            row.magnitude, row.offset, row.primary_location, row.date, row.time, row.url
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_rows() {
        let quakes = vec![
            Earthquake::new(
                6.5,
                "10km SE of Example".into(),
                1_000_000_000_000,
                "http://x".into(),
            )
            .unwrap(),
            Earthquake::new(7.0, "California".into(), 0, "http://y".into()).unwrap(),
        ];

        let mut out = Vec::new();
        write_rows(&mut out, &quakes, DisplayTimezone::Utc).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            " 6.5  10km SE of Example  Sep 09, 2001  01:46, AM\n      http://x\n \
             7.0  Near the California  Jan 01, 1970  12:00, AM\n      http://y\n"
        );
    }

    #[test]
    fn test_write_rows_empty() {
        let mut out = Vec::new();
        write_rows(&mut out, &[], DisplayTimezone::Utc).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No earthquakes found\n");
    }
}
