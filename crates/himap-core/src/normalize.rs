use crate::types::{School, SchoolRaw, UNKNOWN_ESTABLISHMENT};

/// Projects a raw dataset row onto a [`School`].
///
/// Returns `None` when either coordinate is missing, empty, or not a finite
/// number. Every other column is copied verbatim.
pub fn normalize(raw: &SchoolRaw) -> Option<School> {
    let latitude = parse_coordinate(raw.latitude.as_deref())?;
    let longitude = parse_coordinate(raw.longitude.as_deref())?;

    Some(School {
        id: raw.standard_code.clone(),
        name: raw.name.clone(),
        english_name: raw.english_name.clone(),
        school_type: raw.school_type.clone(),
        establishment: raw.establishment.clone().unwrap_or_else(|| UNKNOWN_ESTABLISHMENT.to_string()),
        address: raw.address.clone(),
        address_detail: raw.address_detail.clone(),
        latitude,
        longitude,
        phone: raw.phone.clone(),
        fax: raw.fax.clone(),
        website: raw.website.clone(),
        coed: raw.coed.clone(),
        region: raw.region.clone(),
        admission_timing: raw.admission_timing.clone(),
        day_night: raw.day_night.clone(),
        founded_date: raw.founded_date.clone(),
    })
}

/// Normalizes a whole dataset, keeping input order and dropping invalid rows.
pub fn normalize_all(raws: &[SchoolRaw]) -> Vec<School> {
    let schools: Vec<School> = raws.iter().filter_map(normalize).collect();
    let dropped = raws.len() - schools.len();
    if dropped > 0 {
        tracing::debug!(dropped, kept = schools.len(), "skipped rows without usable coordinates");
    }
    schools
}

/// Reads the longest numeric prefix after leading whitespace, so `" 37.5"`,
/// `"37.5 "` and `"127.1°"` all yield a value. Empty or non-numeric input and
/// non-finite values yield `None`.
fn parse_coordinate(value: Option<&str>) -> Option<f64> {
    let value = value.filter(|v| !v.is_empty())?.trim_start();
    let prefix = &value[..numeric_prefix_len(value.as_bytes())];
    prefix.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Byte length of `[+-]? digits* (. digits*)? ([eE] [+-]? digits+)?` with at
/// least one mantissa digit; 0 when there is none.
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let digits_from = |mut i: usize| { while i < bytes.len() && bytes[i].is_ascii_digit() { i += 1; } i };

    let mut end = if matches!(bytes.first(), Some(b'+' | b'-')) { 1 } else { 0 };
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }
    if mantissa_digits == 0 { return 0; }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) { exp += 1; }
        let exp_end = digits_from(exp);
        if exp_end > exp { end = exp_end; }
    }
    end
}
