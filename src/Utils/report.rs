use crate::polynomial::coefficient_map::CoefficientMap;
use crate::polynomial::numeric_utils::format_number;
use tabled::{builder::Builder, settings::Style};

/// table "degree | coefficient" of all terms after moving them to the left side, zeros included
pub fn coefficient_table(map: &CoefficientMap) -> String {
    let mut builder = Builder::default();
    builder.push_record(["degree", "coefficient"]);
    for (exponent, coefficient) in map.iter() {
        builder.push_record([exponent.to_string(), format_number(coefficient)]);
    }
    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.to_string()
}
