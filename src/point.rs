use serde::Serialize;
use uuid::Uuid;

/// Qdrant point identifier: an unsigned integer or a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PointId {
    Num(u64),
    Uuid(Uuid),
}

impl From<u64> for PointId {
    fn from(id: u64) -> Self {
        PointId::Num(id)
    }
}

impl From<Uuid> for PointId {
    fn from(id: Uuid) -> Self {
        PointId::Uuid(id)
    }
}

impl std::str::FromStr for PointId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(n) = s.parse::<u64>() {
            return Ok(PointId::Num(n));
        }
        Uuid::parse_str(s)
            .map(PointId::Uuid)
            .map_err(|_| format!("'{s}' is neither an unsigned integer nor a UUID"))
    }
}

impl std::fmt::Display for PointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PointId::Num(n) => write!(f, "{n}"),
            PointId::Uuid(u) => write!(f, "{u}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextPayload {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub id: PointId,
    pub payload: TextPayload,
    pub vector: Vec<f32>,
}

impl Point {
    pub fn new(id: impl Into<PointId>, text: impl Into<String>, vector: Vec<f32>) -> Self {
        Self {
            id: id.into(),
            payload: TextPayload { text: text.into() },
            vector,
        }
    }
}

/// Body of `PUT /collections/{name}/points`.
#[derive(Debug, Serialize)]
pub struct UpsertPoints<'a> {
    pub points: &'a [Point],
}
