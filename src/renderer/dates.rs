use regex::{Captures, Regex};
use std::sync::LazyLock;

// Each pattern pairs a regex with a builder producing the replacement text.
// Patterns are evaluated earliest-match-wins across the line, with list
// order breaking ties, so adding or removing a date format is a local edit.
type Build = fn(&Captures) -> String;

static PROTECTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[date:[^\]]*\]\]").unwrap());

static ISO_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{4}-\d{2}-\d{2})\s*(?:-|–|—|to)\s*(\d{4}-\d{2}-\d{2})\b").unwrap()
});

static ISO_DATETIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{4}-\d{2}-\d{2})[ T](\d{1,2}:\d{2})\b").unwrap());

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{4}-\d{2}-\d{2})\b").unwrap());

static WEEK_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bweeks\s+(\d{1,2})\s*(?:-|–|to)\s*(\d{1,2}),?\s+(\d{4})\b").unwrap()
});

static WEEK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bweek\s+(\d{1,2}),?\s+(\d{4})\b").unwrap());

const MONTH_NAMES: &str = "january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sept|sep|oct|nov|dec";

static LEGACY_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday),?\s+)?({MONTH_NAMES})\.?\s+(\d{{1,2}})(?:st|nd|rd|th)?,?\s+(\d{{4}})(?:\s+(\d{{1,2}}):(\d{{2}})\s*(am|pm))?\b"
    ))
    .unwrap()
});

static MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b({MONTH_NAMES})\.?\s+(\d{{4}})\b")).unwrap()
});

// Bare years carry boundary captures instead of lookaround; digits or
// id-ish punctuation on either side mark the number as a likely numeric id
// and keep the pattern from firing.
static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[^0-9#/.\[-])((?:19|20)\d{2})($|[^0-9/.\]-])").unwrap());

fn month_number(name: &str) -> u32 {
    let prefix: String = name.to_lowercase().chars().take(3).collect();
    match prefix.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => 0,
    }
}

fn build_protected(caps: &Captures) -> String {
    caps[0].to_string()
}

fn build_iso_range(caps: &Captures) -> String {
    format!("[[date:{}/{}]]", &caps[1], &caps[2])
}

fn build_iso_datetime(caps: &Captures) -> String {
    format!("[[date:{} {}]]", &caps[1], &caps[2])
}

fn build_iso_date(caps: &Captures) -> String {
    format!("[[date:{}]]", &caps[1])
}

fn build_week_range(caps: &Captures) -> String {
    let first: u32 = caps[1].parse().unwrap_or(0);
    let last: u32 = caps[2].parse().unwrap_or(0);
    let year = &caps[3];
    format!("[[date:{year}-W{first:02}/{year}-W{last:02}]]")
}

fn build_week(caps: &Captures) -> String {
    let week: u32 = caps[1].parse().unwrap_or(0);
    format!("[[date:{}-W{:02}]]", &caps[2], week)
}

fn build_legacy(caps: &Captures) -> String {
    let month = month_number(&caps[1]);
    let day: u32 = caps[2].parse().unwrap_or(0);
    let year = &caps[3];
    match (caps.get(4), caps.get(5), caps.get(6)) {
        (Some(hour), Some(minute), Some(meridiem)) => {
            let mut h: u32 = hour.as_str().parse().unwrap_or(0);
            let pm = meridiem.as_str().eq_ignore_ascii_case("pm");
            if pm && h != 12 {
                h += 12;
            } else if !pm && h == 12 {
                h = 0;
            }
            format!(
                "[[date:{year}-{month:02}-{day:02} {h:02}:{}]]",
                minute.as_str()
            )
        }
        _ => format!("[[date:{year}-{month:02}-{day:02}]]"),
    }
}

fn build_month_year(caps: &Captures) -> String {
    format!("[[date:{}-{:02}]]", &caps[2], month_number(&caps[1]))
}

fn build_year(caps: &Captures) -> String {
    format!("{}[[date:{}]]{}", &caps[1], &caps[2], &caps[3])
}

static PATTERNS: LazyLock<Vec<(&'static Regex, Build)>> = LazyLock::new(|| {
    vec![
        (&*PROTECTED, build_protected as Build),
        (&*ISO_RANGE, build_iso_range),
        (&*ISO_DATETIME, build_iso_datetime),
        (&*ISO_DATE, build_iso_date),
        (&*WEEK_RANGE, build_week_range),
        (&*WEEK, build_week),
        (&*LEGACY_DATE, build_legacy),
        (&*MONTH_YEAR, build_month_year),
        (&*YEAR, build_year),
    ]
});

/// Rewrite calendar-looking substrings into the bracketed `[[date:...]]`
/// form. Existing date references are copied through verbatim; anything no
/// pattern claims is left unchanged.
pub fn rewrite_dates(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut pos = 0;

    while pos < text.len() {
        let mut best: Option<(usize, usize, String)> = None;
        for (pattern, build) in PATTERNS.iter() {
            if let Some(caps) = pattern.captures(&text[pos..]) {
                let whole = caps.get(0).unwrap();
                let start = pos + whole.start();
                // Strictly earlier matches win; ties keep the higher
                // priority pattern already found.
                if best.as_ref().map_or(true, |b| start < b.0) {
                    best = Some((start, pos + whole.end(), build(&caps)));
                }
            }
        }

        match best {
            Some((start, end, replacement)) => {
                output.push_str(&text[pos..start]);
                output.push_str(&replacement);
                pos = end;
            }
            None => {
                output.push_str(&text[pos..]);
                break;
            }
        }
    }

    output
}
