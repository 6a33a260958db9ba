use super::Error;
use scraper::{ElementRef, Selector};

/// First descendant of `element` matching `selector`, or
/// [`Error::MissingElement`] naming what was looked for.
pub fn first_match<'a>(
    selector: &Selector,
    element: ElementRef<'a>,
    label: &'static str,
) -> Result<ElementRef<'a>, Error> {
    element
        .select(selector)
        .next()
        .ok_or(Error::MissingElement(label))
}

/// Concatenated text of every text node below `element`, untouched.
pub fn inner_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Text of the first descendant matching `selector`.
pub fn text_from_selection(
    selector: &Selector,
    element: ElementRef<'_>,
    label: &'static str,
) -> Result<String, Error> {
    first_match(selector, element, label).map(inner_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::static_selector;
    use scraper::Html;

    #[test]
    fn test_text_spans_nested_nodes() {
        static_selector!(LINK_SELECTOR <- "a");
        let html = Html::parse_fragment("<p><a> Pasta <b>al</b> forno </a></p>");
        let text = text_from_selection(&LINK_SELECTOR, html.root_element(), "dish link").unwrap();
        assert_eq!(text, " Pasta al forno ");
    }

    #[test]
    fn test_missing_element() {
        static_selector!(LINK_SELECTOR <- "a");
        let html = Html::parse_fragment("<p>Pasta</p>");
        let err = text_from_selection(&LINK_SELECTOR, html.root_element(), "dish link");
        assert!(matches!(err, Err(Error::MissingElement("dish link"))));
    }
}
