//! Time utilities: timezone-aware "today" for relative date anchoring.

use anyhow::Result;
use chrono::Utc;
use chrono::NaiveDate;
use chrono_tz::Tz;

/// Current calendar date in an IANA timezone like "Europe/Lisbon".
///
/// Relative expressions ("ontem", "2 days ago") are anchored on this date,
/// so the caller decides whose midnight counts.
pub fn today_in_tz(tz: &str) -> Result<NaiveDate> {
    let tz: Tz = tz
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))?;

    Ok(Utc::now().with_timezone(&tz).date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_timezone_resolves() {
        assert!(today_in_tz("Europe/Lisbon").is_ok());
        assert!(today_in_tz("America/Sao_Paulo").is_ok());
    }

    #[test]
    fn test_unknown_timezone_errors() {
        assert!(today_in_tz("Europe/Atlantis").is_err());
    }
}
