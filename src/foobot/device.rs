use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Device {
    pub uuid: String,

    pub name: String,

    #[serde(default)]
    pub mac: Option<String>,
}
