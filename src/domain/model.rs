use serde::{Deserialize, Serialize};

/// (longitude, latitude)，序列化為 `[lng, lat]` 陣列
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat(pub f64, pub f64);

impl LngLat {
    pub fn lng(&self) -> f64 {
        self.0
    }

    pub fn lat(&self) -> f64 {
        self.1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FounderRecord {
    pub id: u32,
    pub name: String,
    pub country: String,
    pub city: String,
    pub coordinates: LngLat,
    #[serde(default)]
    pub website: String,
    #[serde(default, alias = "twitter", alias = "socialHandle")]
    pub social_handle: String,
    #[serde(default, alias = "shareUrl")]
    pub share_url: String,
}

/// 最小的經緯度外接矩形
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LngLatBounds {
    pub sw: LngLat,
    pub ne: LngLat,
}

impl LngLatBounds {
    pub fn from_point(point: LngLat) -> Self {
        Self {
            sw: point,
            ne: point,
        }
    }

    pub fn extend(&mut self, point: LngLat) {
        self.sw.0 = self.sw.0.min(point.0);
        self.sw.1 = self.sw.1.min(point.1);
        self.ne.0 = self.ne.0.max(point.0);
        self.ne.1 = self.ne.1.max(point.1);
    }

    /// 空輸入回傳 `None`
    pub fn enclosing<I: IntoIterator<Item = LngLat>>(points: I) -> Option<Self> {
        let mut points = points.into_iter();
        let mut bounds = Self::from_point(points.next()?);
        for point in points {
            bounds.extend(point);
        }
        Some(bounds)
    }

    pub fn contains(&self, point: LngLat) -> bool {
        point.0 >= self.sw.0 && point.0 <= self.ne.0 && point.1 >= self.sw.1 && point.1 <= self.ne.1
    }
}

/// Camera instruction for an external map surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ViewportCommand {
    #[serde(rename_all = "camelCase")]
    CenterOnPoint {
        lng: f64,
        lat: f64,
        zoom: f64,
        duration_ms: u64,
    },
    #[serde(rename_all = "camelCase")]
    FitBounds {
        sw_lng: f64,
        sw_lat: f64,
        ne_lng: f64,
        ne_lat: f64,
        padding_px: u32,
        duration_ms: u64,
        max_zoom: f64,
    },
}

impl ViewportCommand {
    pub fn duration_ms(&self) -> u64 {
        match self {
            ViewportCommand::CenterOnPoint { duration_ms, .. }
            | ViewportCommand::FitBounds { duration_ms, .. } => *duration_ms,
        }
    }
}

/// Marker popup content. Links are passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopupCard {
    pub founder_id: u32,
    pub title: String,
    pub subtitle: String,
    pub anchor: LngLat,
    pub offset_px: u32,
    pub website: Link,
    pub social: Link,
    pub share: Link,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}
