use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardSymbol {
    pub symbol: String,
    pub svg_uri: Option<Url>,
    pub loose_variant: Option<String>,
    pub english: String,
    #[serde(default)]
    pub transposable: bool,
    #[serde(default)]
    pub represents_mana: bool,
    pub cmc: Option<f64>,
    #[serde(default)]
    pub appears_in_mana_costs: bool,
    #[serde(default)]
    pub funny: bool,
    #[serde(default)]
    pub colors: Vec<String>,
    pub gatherer_alternates: Option<Vec<String>>,
}
