use serde::Serialize;

/// Flat row shape for punch exports.
#[derive(Serialize, Clone, Debug)]
pub struct PunchExport {
    pub id: i64,
    pub email: String,
    pub date: String,
    pub time: String,
    pub kind: String,
    pub location: String,
    pub source: String,
}
