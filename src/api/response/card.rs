use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/* Card objects are by far the largest part of the API. Most fields are absent or null depending on the layout and
 * the printing, so nearly everything is optional.
 */
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    // Core fields
    pub arena_id: Option<u64>,
    pub id: Uuid,
    pub lang: String,
    pub mtgo_id: Option<u64>,
    pub mtgo_foil_id: Option<u64>,
    #[serde(default)]
    pub multiverse_ids: Vec<u64>,
    pub tcgplayer_id: Option<u64>,
    pub oracle_id: Option<Uuid>,
    pub prints_search_uri: Option<Url>,
    pub rulings_uri: Option<Url>,
    pub scryfall_uri: Option<Url>,
    pub uri: Option<Url>,

    // Gameplay fields
    pub all_parts: Option<Vec<RelatedCard>>,
    pub card_faces: Option<Vec<CardFace>>,
    pub cmc: Option<f64>,
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub color_identity: Vec<String>,
    pub color_indicator: Option<Vec<String>>,
    pub edhrec_rank: Option<u64>,
    pub hand_modifier: Option<String>,
    pub layout: String,
    pub legalities: Option<Legalities>,
    pub life_modifier: Option<String>,
    pub loyalty: Option<String>,
    pub mana_cost: Option<String>,
    pub name: String,
    pub oracle_text: Option<String>,
    #[serde(default)]
    pub oversized: bool,
    pub power: Option<String>,
    #[serde(default)]
    pub reserved: bool,
    pub toughness: Option<String>,
    pub type_line: Option<String>,

    // Print fields
    pub artist: Option<String>,
    pub artist_ids: Option<Vec<Uuid>>,
    #[serde(default)]
    pub booster: bool,
    pub border_color: Option<String>,
    pub card_back_id: Option<Uuid>,
    pub collector_number: String,
    #[serde(default)]
    pub content_warning: bool,
    #[serde(default)]
    pub digital: bool,
    #[serde(default)]
    pub finishes: Vec<String>,
    pub flavor_name: Option<String>,
    pub flavor_text: Option<String>,
    pub frame_effects: Option<Vec<String>>,
    pub frame: Option<String>,
    #[serde(default)]
    pub full_art: bool,
    #[serde(default)]
    pub games: Vec<String>,
    #[serde(default)]
    pub highres_image: bool,
    pub illustration_id: Option<Uuid>,
    pub image_uris: Option<ImageUris>,
    pub prices: Option<Prices>,
    pub printed_name: Option<String>,
    pub printed_text: Option<String>,
    pub printed_type_line: Option<String>,
    #[serde(default)]
    pub promo: bool,
    pub promo_types: Option<Vec<String>>,
    pub purchase_uris: Option<PurchaseUris>,
    pub rarity: String,
    pub related_uris: Option<RelatedUris>,
    pub released_at: Option<NaiveDate>,
    #[serde(default)]
    pub reprint: bool,
    pub scryfall_set_uri: Option<Url>,
    pub set_name: String,
    pub set_search_uri: Option<Url>,
    pub set_type: Option<String>,
    pub set_uri: Option<Url>,
    pub set: String,
    #[serde(default)]
    pub story_spotlight: bool,
    #[serde(default)]
    pub textless: bool,
    #[serde(default)]
    pub variation: bool,
    pub variation_of: Option<Uuid>,
    pub watermark: Option<String>,
    pub preview: Option<Preview>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Legalities {
    pub standard: Option<String>,
    pub future: Option<String>,
    pub historic: Option<String>,
    pub pioneer: Option<String>,
    pub modern: Option<String>,
    pub legacy: Option<String>,
    pub pauper: Option<String>,
    pub vintage: Option<String>,
    pub penny: Option<String>,
    pub commander: Option<String>,
    pub brawl: Option<String>,
    pub duel: Option<String>,
    pub oldschool: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ImageUris {
    pub small: Option<Url>,
    pub normal: Option<Url>,
    pub large: Option<Url>,
    pub png: Option<Url>,
    pub art_crop: Option<Url>,
    pub border_crop: Option<Url>,
}

// Prices are decimal strings, or null when there is no recent sale.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Prices {
    pub usd: Option<String>,
    pub usd_foil: Option<String>,
    pub usd_etched: Option<String>,
    pub eur: Option<String>,
    pub eur_foil: Option<String>,
    pub tix: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PurchaseUris {
    pub tcgplayer: Option<Url>,
    pub cardmarket: Option<Url>,
    pub cardhoarder: Option<Url>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RelatedUris {
    pub gatherer: Option<Url>,
    pub tcgplayer_infinite_articles: Option<Url>,
    pub tcgplayer_infinite_decks: Option<Url>,
    pub edhrec: Option<Url>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardFace {
    pub artist: Option<String>,
    pub color_indicator: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
    pub flavor_text: Option<String>,
    pub illustration_id: Option<Uuid>,
    pub image_uris: Option<ImageUris>,
    pub loyalty: Option<String>,
    pub mana_cost: Option<String>,
    pub name: String,
    pub oracle_text: Option<String>,
    pub power: Option<String>,
    pub printed_name: Option<String>,
    pub printed_text: Option<String>,
    pub printed_type_line: Option<String>,
    pub toughness: Option<String>,
    pub type_line: Option<String>,
    pub watermark: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RelatedCard {
    pub id: Uuid,
    pub component: String,
    pub name: String,
    pub type_line: String,
    pub uri: Url,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Preview {
    pub previewed_at: Option<NaiveDate>,
    pub source_uri: Option<String>,
    pub source: Option<String>,
}
