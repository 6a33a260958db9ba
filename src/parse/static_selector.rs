use std::sync::LazyLock;

use scraper::Selector;

/// Selector compiled on first use. Only ever built from string literals, so a
/// parse failure is a programming error.
pub(crate) type StaticSelector = LazyLock<Selector>;

pub(crate) fn compile(selector: &str) -> Selector {
    match Selector::parse(selector) {
        Ok(sel) => sel,
        Err(e) => panic!("Error parsing static selector {selector}: {e:?}"),
    }
}

#[macro_export]
macro_rules! static_selector {
    ($x: ident <- $sel: literal) => {
        static $x: $crate::parse::static_selector::StaticSelector =
            $crate::parse::static_selector::StaticSelector::new(|| {
                $crate::parse::static_selector::compile($sel)
            });
    };
}
