//! Domain types shared by the search, filter and session layers.

use serde::{Deserialize, Serialize};

pub type SchoolId = String;

/// Establishment value used when the source row carries none.
pub const UNKNOWN_ESTABLISHMENT: &str = "기타";

/// One row of the bundled school dataset, exactly as published.
///
/// Field names are the Korean column names of the source file. Only the
/// establishment and the coordinate pair may be absent; every other column
/// falls back to an empty string when missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SchoolRaw {
    #[serde(rename = "시도교육청코드")]
    pub office_code: String,
    #[serde(rename = "시도교육청명")]
    pub office_name: String,
    #[serde(rename = "행정표준코드")]
    pub standard_code: String,
    #[serde(rename = "학교명")]
    pub name: String,
    #[serde(rename = "영문학교명")]
    pub english_name: String,
    #[serde(rename = "학교종류명")]
    pub school_kind: String,
    #[serde(rename = "시도명")]
    pub region: String,
    #[serde(rename = "관할조직명")]
    pub jurisdiction: String,
    #[serde(rename = "설립명", skip_serializing_if = "Option::is_none")]
    pub establishment: Option<String>,
    #[serde(rename = "도로명우편번호")]
    pub postal_code: String,
    #[serde(rename = "도로명주소")]
    pub address: String,
    #[serde(rename = "Latitude", skip_serializing_if = "Option::is_none")]
    pub latitude: Option<String>,
    #[serde(rename = "Longitude", skip_serializing_if = "Option::is_none")]
    pub longitude: Option<String>,
    #[serde(rename = "도로명상세주소")]
    pub address_detail: String,
    #[serde(rename = "전화번호")]
    pub phone: String,
    #[serde(rename = "홈페이지주소")]
    pub website: String,
    #[serde(rename = "남녀공학구분명")]
    pub coed: String,
    #[serde(rename = "팩스번호")]
    pub fax: String,
    #[serde(rename = "고등학교구분명")]
    pub school_type: String,
    #[serde(rename = "산업체특별학급존재여부")]
    pub industry_class: String,
    #[serde(rename = "고등학교일반전문구분명")]
    pub track: String,
    #[serde(rename = "입시전후기구분명")]
    pub admission_timing: String,
    #[serde(rename = "주야구분명")]
    pub day_night: String,
    #[serde(rename = "설립일자")]
    pub founded_date: String,
    #[serde(rename = "개교기념일")]
    pub anniversary: String,
    #[serde(rename = "수정일자")]
    pub modified_date: String,
}

/// A validated school location. Only produced by `normalize::normalize`.
///
/// String fields are carried over from the source row untouched; the
/// coordinates are guaranteed finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct School {
    pub id: SchoolId,
    pub name: String,
    pub english_name: String,
    #[serde(rename = "type")]
    pub school_type: String,
    pub establishment: String,
    pub address: String,
    pub address_detail: String,
    pub latitude: f64,
    pub longitude: f64,
    pub phone: String,
    pub fax: String,
    pub website: String,
    pub coed: String,
    pub region: String,
    pub admission_timing: String,
    pub day_night: String,
    pub founded_date: String,
}

impl School {
    pub fn position(&self) -> LatLng { LatLng { lat: self.latitude, lng: self.longitude } }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Map center plus zoom level. Lower levels are closer to the ground.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: LatLng,
    pub level: u8,
}

/// What the map widget needs to place one pin.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: SchoolId,
    pub position: LatLng,
}

impl From<&School> for Marker {
    fn from(s: &School) -> Self { Self { id: s.id.clone(), position: s.position() } }
}
