//! Descriptive global attributes of the biomass product

use crate::float_format::float_repr;
use chrono::{DateTime, Utc};

pub const SOURCE: &str = "Orndahl et. al. 2025. Gridded 30-meter resolution estimates of aboveground plant biomass, woody plant biomass and woody plant dominance across the Arctic tundra biome (2020). doi:10.18739/A2NS0M06B";

pub const REFERENCES: &str = "Orndahl, K. M., Berner, L. T., Macander, M. J., Arndal, M. F., Alexander, H. D., Humphreys, E. R., Loranty, M. M., Ludwig, S. M., Nyman, J., Juutinen, S., Aurela, M., Mikola, J., Mack, M. C., Rose, M., Vankoughnett, M. R., Iversen, C. M., Kumar, J., Salmon, V. G., Yang, D., … Goetz, S. J. (2025). Next generation Arctic vegetation maps: Aboveground plant biomass and woody dominance mapped at 30 m resolution across the tundra biome. Remote Sensing of Environment, 323, 114717. https://doi.org/10.1016/j.rse.2025.114717";

/// Product title for a grid at `resolution` degrees
pub fn title(resolution: f64) -> String {
    format!(
        "Aboveground Biomass from Orndahl et. al. 2025 processed to {} degree resolution.",
        float_repr(resolution)
    )
}

/// History entry stamped at `created`
pub fn history(created: DateTime<Utc>) -> String {
    format!(
        "Created by {} {} on {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        created.to_rfc3339()
    )
}
