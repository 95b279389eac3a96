use quire_idf::ListSymbol;

/// The marker text drawn beside a row with the given resolved symbol.
///
/// Unresolved `Inherit` (a root item asking for its parent's symbol) has no
/// drawable form and renders as no marker.
pub fn get_marker_text(symbol: &ListSymbol) -> String {
    match symbol {
        ListSymbol::Bullet => "•".to_string(),
        ListSymbol::Numbered(Some(value)) => format!("{}.", value),
        ListSymbol::Custom(text) => text.clone(),
        ListSymbol::Numbered(None) | ListSymbol::None | ListSymbol::Inherit => String::new(),
    }
}
