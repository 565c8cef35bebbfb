use crate::core::error::ProbeError;
use crate::display;
use crate::gemini::ContentGenerator;
use crate::gemini::types::{GenerateContentRequest, GenerateContentResponse};
use crate::utils::text::strip_code_fences;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use tracing::{debug, warn};

pub const DEFAULT_ADDRESS: &str = "台北101";
pub const DEFAULT_LNG: f64 = 121.5654;
pub const DEFAULT_LAT: f64 = 25.0330;
pub const DEFAULT_COUNT: u32 = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct PoiQuery {
    pub address: String,
    pub lng: f64,
    pub lat: f64,
    pub count: u32,
}

impl Default for PoiQuery {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            lng: DEFAULT_LNG,
            lat: DEFAULT_LAT,
            count: DEFAULT_COUNT,
        }
    }
}

impl PoiQuery {
    pub fn prompt(&self) -> String {
        format!(
            r#"你是一個房地產專家。請針對「{address}」（經緯度：{lat}, {lng}）
列出 {count} 個附近最重要的銷售亮點設施（例如捷運站、商圈、公園、學校、地標）。

請回傳純 JSON 格式，不要有 markdown 標記。格式如下：
[
  {{ "name": "設施名稱", "type": "類別(如捷運/商圈/公園)", "minutes": 預估開車分鐘數(整數), "lat": 緯度, "lng": 經度 }}
]

注意：
1. 經緯度必須真實且在該地點附近。
2. minutes 請根據距離估算。"#,
            address = self.address,
            lat = self.lat,
            lng = self.lng,
            count = self.count,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub minutes: f64,
    pub lat: f64,
    pub lng: f64,
}

pub fn parse_points(cleaned: &str) -> Result<Vec<PointOfInterest>, ProbeError> {
    serde_json::from_str(cleaned)
        .map_err(|e| ProbeError::Serialization(format!("Response is not a POI list: {}", e)))
}

async fn fetch_text<G>(generator: &G, query: &PoiQuery) -> Result<String, ProbeError>
where
    G: ContentGenerator + ?Sized,
{
    let request = GenerateContentRequest::from_prompt(&query.prompt());
    let raw = generator.generate_content(&request).await?;
    debug!(status = raw.status, "POI probe answered");

    let parsed: GenerateContentResponse = serde_json::from_str(&raw.body).map_err(|e| {
        ProbeError::Serialization(format!("Failed to parse Gemini response: {}", e))
    })?;

    parsed.first_text().map(str::to_string).ok_or_else(|| {
        ProbeError::Api(format!(
            "No valid response from Gemini (status {})",
            raw.status
        ))
    })
}

/// Ask for points of interest around an address and print each stage: the
/// raw model text, the text with fences removed, then the parsed list.
pub async fn run_poi<G, W>(generator: &G, query: &PoiQuery, out: &mut W) -> io::Result<()>
where
    G: ContentGenerator + ?Sized,
    W: Write,
{
    writeln!(out, "Calling Gemini API...")?;

    let text = match fetch_text(generator, query).await {
        Ok(text) => text,
        Err(err) => {
            warn!(error = ?err, "POI probe failed");
            return display::write_error(out, &err);
        }
    };
    display::write_labeled(out, "Gemini API Response:", &text)?;

    let cleaned = strip_code_fences(&text);
    display::write_labeled(out, "Cleaned JSON:", &cleaned)?;

    let rendered = parse_points(&cleaned).and_then(|points| display::pretty_json(&points));
    match rendered {
        Ok(pretty) => {
            display::write_labeled(out, "Parsed POIs:", &pretty)?;
            display::write_success(out)
        }
        Err(err) => {
            warn!(error = ?err, "POI text did not parse");
            display::write_error(out, &err)
        }
    }
}
