//! Line formats shared by the `extract` and `links` subcommands.

use regiontext_core::{LinkAction, MatchResult, PageExtraction, Rect, Region, RegionSource};

/// `<page N> has U user target regions, L links (A annotations) and W Words`
pub fn page_header(page: &PageExtraction) -> String {
    format!(
        "<page {}> has {} user target regions, {} links ({} annotations) and {} Words",
        page.page_number,
        page.user_region_count,
        page.link_count,
        page.annotation_count,
        page.word_count,
    )
}

/// One report line for a region result, in the user or link layout.
pub fn result_line(result: &MatchResult) -> String {
    let region = &result.region;
    match &region.source {
        RegionSource::User => format!(
            "User target area #{} Description: [{}] Text: [{}]",
            region.ordinal, region.label, result.text
        ),
        RegionSource::Link { action, .. } => format!(
            "Link #{} Coordinates: [{}] ActionType: [{}] Destination: [{}] Text: [{}]",
            region.ordinal,
            coordinates(&region.rect),
            action.kind(),
            action.destination(),
            result.text
        ),
    }
}

/// `left,bottom right,top` with two decimals.
pub fn coordinates(rect: &Rect) -> String {
    format!(
        "{:.2},{:.2} {:.2},{:.2}",
        rect.left, rect.bottom, rect.right, rect.top
    )
}

/// The link action of a region, if it came from a link annotation.
pub fn link_action(region: &Region) -> Option<&LinkAction> {
    match &region.source {
        RegionSource::Link { action, .. } => Some(action),
        RegionSource::User => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regiontext_core::{LinkAnnotation, RegionRegistry, Tolerance, UserRegion};

    fn registry() -> RegionRegistry {
        RegionRegistry::for_page(
            &[UserRegion::new(
                Rect::new(0.0, 692.0, 150.0, 792.0),
                "Upper Left header",
            )],
            vec![LinkAnnotation {
                rect: Rect::new(302.0, 401.0, 358.0, 409.0),
                title: None,
                action: LinkAction::Uri {
                    uri: "https://example.com".to_string(),
                },
            }],
            Tolerance::LINK,
        )
        .unwrap()
    }

    fn result(region: &Region, text: &str) -> MatchResult {
        MatchResult {
            page_number: 1,
            region: region.clone(),
            text: text.to_string(),
            word_count: 2,
        }
    }

    #[test]
    fn header_line() {
        let page = PageExtraction {
            page_number: 3,
            word_count: 4,
            user_region_count: 2,
            link_count: 1,
            annotation_count: 5,
            results: Vec::new(),
            warnings: Vec::new(),
        };
        assert_eq!(
            page_header(&page),
            "<page 3> has 2 user target regions, 1 links (5 annotations) and 4 Words"
        );
    }

    #[test]
    fn user_line() {
        let registry = registry();
        let user = registry.iter().next().unwrap();
        assert_eq!(
            result_line(&result(user, "Hello World\n")),
            "User target area #1 Description: [Upper Left header] Text: [Hello World\n]"
        );
    }

    #[test]
    fn link_line() {
        let registry = registry();
        let link = registry.iter().nth(1).unwrap();
        assert_eq!(
            result_line(&result(link, "click here")),
            "Link #1 Coordinates: [302.00,401.00 358.00,409.00] ActionType: [URI] \
             Destination: [https://example.com] Text: [click here]"
        );
        assert!(link_action(link).is_some());
    }

    #[test]
    fn user_region_has_no_action() {
        let registry = registry();
        assert!(link_action(registry.iter().next().unwrap()).is_none());
    }
}
