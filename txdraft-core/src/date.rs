//! Date resolution from explicit or relative expressions.
//!
//! The rules form a priority ladder: the first one that matches wins, and a
//! rule that fails to produce a valid date (bad components, offset overflow)
//! is skipped rather than aborting the whole resolution. With no match at
//! all the date defaults to `today` with `detected = false`.

use chrono::{Days, Months, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

// "há 2 dias", "ha 3 dias", "á 5 dias", "a 1 dia"
static PT_DAYS_AGO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:há|ha|á|a)\s*(\d+)\s*dias?").expect("valid regex"));
static EN_DAYS_AGO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*days?\s*ago").expect("valid regex"));
static PT_WEEKS_AGO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:há|ha|á|a)\s*(\d+)\s*semanas?").expect("valid regex"));
static EN_WEEKS_AGO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*weeks?\s*ago").expect("valid regex"));
static PT_MONTHS_AGO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:há|ha|á|a)\s*(\d+)\s*(?:mês|mes|meses)").expect("valid regex"));
static EN_MONTHS_AGO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*months?\s*ago").expect("valid regex"));
static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4})-(\d{2})-(\d{2})").expect("valid regex"));
static DMY_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})/(\d{1,2})/(\d{4})").expect("valid regex"));

/// Outcome of date resolution. `detected` is true only when the text
/// explicitly mentioned a date; the fallback default keeps it false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateResult {
    pub date: NaiveDate,
    pub detected: bool,
}

fn detected(date: NaiveDate) -> DateResult {
    DateResult { date, detected: true }
}

fn first_number(re: &Regex, text: &str) -> Option<u64> {
    re.captures(text).and_then(|caps| caps[1].parse().ok())
}

/// Resolve a calendar date from an utterance.
///
/// `text` is the normalized copy used for keyword phrases and relative
/// patterns; `raw` is the original input, scanned for literal `YYYY-MM-DD`
/// and `DD/MM/YYYY` dates. `today` anchors all relative expressions.
///
/// Note: "anteontem" / "day before yesterday" are checked before the plain
/// yesterday phrases they contain as substrings, otherwise the two-day
/// offset would be unreachable.
pub fn resolve_date(text: &str, raw: &str, today: NaiveDate) -> DateResult {
    if text.contains("hoje") || text.contains("today") {
        return detected(today);
    }

    if text.contains("anteontem") || text.contains("day before yesterday") {
        if let Some(date) = today.checked_sub_days(Days::new(2)) {
            return detected(date);
        }
    }

    if text.contains("ontem") || text.contains("yesterday") {
        if let Some(date) = today.checked_sub_days(Days::new(1)) {
            return detected(date);
        }
    }

    for re in [&PT_DAYS_AGO, &EN_DAYS_AGO] {
        if let Some(days) = first_number(re, text) {
            if let Some(date) = today.checked_sub_days(Days::new(days)) {
                return detected(date);
            }
        }
    }

    for re in [&PT_WEEKS_AGO, &EN_WEEKS_AGO] {
        if let Some(weeks) = first_number(re, text) {
            if let Some(date) = weeks
                .checked_mul(7)
                .and_then(|days| today.checked_sub_days(Days::new(days)))
            {
                return detected(date);
            }
        }
    }

    for re in [&PT_MONTHS_AGO, &EN_MONTHS_AGO] {
        if let Some(months) = first_number(re, text) {
            if let Some(date) = u32::try_from(months)
                .ok()
                .and_then(|m| today.checked_sub_months(Months::new(m)))
            {
                return detected(date);
            }
        }
    }

    if text.contains("semana passada") || text.contains("last week") {
        if let Some(date) = today.checked_sub_days(Days::new(7)) {
            return detected(date);
        }
    }

    if text.contains("mês passado") || text.contains("mes passado") || text.contains("last month") {
        if let Some(date) = today.checked_sub_months(Months::new(1)) {
            return detected(date);
        }
    }

    // Literal dates come from the raw text; digits are unaffected by case
    // folding but the original is the authoritative source here. Invalid
    // components (month 13, day 32) fall through to the next rule.
    if let Some(caps) = ISO_DATE.captures(raw) {
        let parsed = parse_ymd(&caps[1], &caps[2], &caps[3]);
        if let Some(date) = parsed {
            return detected(date);
        }
    }

    if let Some(caps) = DMY_DATE.captures(raw) {
        let parsed = parse_ymd(&caps[3], &caps[2], &caps[1]);
        if let Some(date) = parsed {
            return detected(date);
        }
    }

    DateResult { date: today, detected: false }
}

fn parse_ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 27).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_hoje_and_today() {
        assert_eq!(resolve_date("comprei hoje", "comprei hoje", today()), detected(today()));
        assert_eq!(resolve_date("bought today", "bought today", today()), detected(today()));
    }

    #[test]
    fn test_ontem_is_yesterday() {
        let r = resolve_date("comprei ontem", "comprei ontem", today());
        assert_eq!(r, detected(ymd(2026, 8, 26)));
    }

    #[test]
    fn test_anteontem_is_two_days_back() {
        // "anteontem" contains "ontem"; the longer phrase must win.
        let r = resolve_date("comprei anteontem", "comprei anteontem", today());
        assert_eq!(r, detected(ymd(2026, 8, 25)));

        let r = resolve_date(
            "bought it day before yesterday",
            "bought it day before yesterday",
            today(),
        );
        assert_eq!(r, detected(ymd(2026, 8, 25)));
    }

    #[test]
    fn test_relative_days() {
        let r = resolve_date("paguei há 3 dias", "paguei há 3 dias", today());
        assert_eq!(r, detected(ymd(2026, 8, 24)));

        let r = resolve_date("paid 10 days ago", "paid 10 days ago", today());
        assert_eq!(r, detected(ymd(2026, 8, 17)));
    }

    #[test]
    fn test_relative_weeks_and_months() {
        let r = resolve_date("ha 2 semanas", "ha 2 semanas", today());
        assert_eq!(r, detected(ymd(2026, 8, 13)));

        let r = resolve_date("3 weeks ago", "3 weeks ago", today());
        assert_eq!(r, detected(ymd(2026, 8, 6)));

        let r = resolve_date("há 2 meses", "há 2 meses", today());
        assert_eq!(r, detected(ymd(2026, 6, 27)));

        let r = resolve_date("1 month ago", "1 month ago", today());
        assert_eq!(r, detected(ymd(2026, 7, 27)));
    }

    #[test]
    fn test_last_week_and_last_month() {
        let r = resolve_date("semana passada", "semana passada", today());
        assert_eq!(r, detected(ymd(2026, 8, 20)));

        let r = resolve_date("mês passado", "mês passado", today());
        assert_eq!(r, detected(ymd(2026, 7, 27)));
    }

    #[test]
    fn test_iso_date() {
        let r = resolve_date("paguei em 2024-01-15", "paguei em 2024-01-15", today());
        assert_eq!(r, detected(ymd(2024, 1, 15)));
    }

    #[test]
    fn test_invalid_iso_falls_through_to_dmy() {
        // Month 13 is invalid; the DD/MM/YYYY mention still resolves.
        let text = "2024-13-05 ou 15/01/2024";
        let r = resolve_date(text, text, today());
        assert_eq!(r, detected(ymd(2024, 1, 15)));
    }

    #[test]
    fn test_dmy_date() {
        let r = resolve_date("paguei em 15/01/2024", "paguei em 15/01/2024", today());
        assert_eq!(r, detected(ymd(2024, 1, 15)));
    }

    #[test]
    fn test_invalid_dmy_defaults_to_today() {
        let text = "paguei em 32/01/2024";
        let r = resolve_date(text, text, today());
        assert_eq!(r, DateResult { date: today(), detected: false });
    }

    #[test]
    fn test_no_mention_defaults_to_today_undetected() {
        let r = resolve_date("comprei", "comprei", today());
        assert_eq!(r, DateResult { date: today(), detected: false });
    }

    #[test]
    fn test_huge_offset_skips_rule() {
        // Offset overflows the calendar; resolution continues and lands on
        // the default instead of panicking.
        let text = "paguei há 99999999999 dias";
        let r = resolve_date(text, text, today());
        assert_eq!(r, DateResult { date: today(), detected: false });
    }
}
