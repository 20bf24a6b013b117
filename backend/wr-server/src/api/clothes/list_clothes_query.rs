use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ListClothesQuery {
    #[serde(default)]
    pub section: Option<String>,
}
