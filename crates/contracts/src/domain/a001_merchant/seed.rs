use super::aggregate::Merchant;

const SEED_JSON: &str = include_str!("seed.json");

/// Static dataset used the first time the merchant store is initialized
pub fn seed_merchants() -> Vec<Merchant> {
    match serde_json::from_str(SEED_JSON) {
        Ok(merchants) => merchants,
        Err(e) => {
            log::error!("seed dataset is invalid: {}", e);
            Vec::new()
        }
    }
}
